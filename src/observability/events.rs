//! Observable events
//!
//! Events are explicit and typed; every log line names one of them.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Startup
    ConfigLoaded,
    TableLoaded,
    /// Table could not be loaded (FATAL)
    TableLoadFailed,

    // Decisions
    DecisionReceived,
    DecisionRejected,
    BgnOverrideApplied,
    CommonTreatmentFound,
    EscalationApplied,
    NoCommonTreatment,

    // Transport
    RequestReceived,
    Serving,
    ShutdownComplete,
}

impl Event {
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::TableLoaded => "TABLE_LOADED",
            Event::TableLoadFailed => "TABLE_LOAD_FAILED",
            Event::DecisionReceived => "DECISION_RECEIVED",
            Event::DecisionRejected => "DECISION_REJECTED",
            Event::BgnOverrideApplied => "BGN_OVERRIDE_APPLIED",
            Event::CommonTreatmentFound => "COMMON_TREATMENT_FOUND",
            Event::EscalationApplied => "ESCALATION_APPLIED",
            Event::NoCommonTreatment => "NO_COMMON_TREATMENT",
            Event::RequestReceived => "REQUEST_RECEIVED",
            Event::Serving => "SERVING",
            Event::ShutdownComplete => "SHUTDOWN_COMPLETE",
        }
    }

    pub fn is_fatal(&self) -> bool {
        matches!(self, Event::TableLoadFailed)
    }

    /// Rejections are logged at WARN; everything else that is not fatal at INFO
    pub fn is_warning(&self) -> bool {
        matches!(self, Event::DecisionRejected)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
