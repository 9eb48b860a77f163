//! Observability subsystem
//!
//! Structured JSON logging of lifecycle and decision events.
//!
//! # Principles
//!
//! 1. Observability is read-only and never changes a decision
//! 2. No async or background threads
//! 3. Deterministic output for identical inputs
//!
//! # Usage
//!
//! ```ignore
//! use abxadvisor::observability::{log_event_with_fields, Event};
//!
//! log_event_with_fields(Event::TableLoaded, &[("items", "42")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

fn severity_for(event: Event) -> Severity {
    if event.is_fatal() {
        Severity::Fatal
    } else if event.is_warning() {
        Severity::Warn
    } else {
        Severity::Info
    }
}

/// Log a lifecycle event
pub fn log_event(event: Event) {
    Logger::log(severity_for(event), event.as_str(), &[]);
}

/// Log a lifecycle event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(severity_for(event), event.as_str(), fields);
}
