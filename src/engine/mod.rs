//! Treatment decision engine
//!
//! Given a selection of items and the direct-exam findings, the engine
//! computes a single treatment label from a read-only sensitivity table.
//!
//! # Design Principles
//!
//! - Deterministic: same selection, findings and table → same label
//! - Order-independent: selections and findings are sets
//! - Stateless: the table snapshot is passed in on every call
//! - "No treatment" is a normal outcome, never an error
//!
//! # Decision Priority (strict order)
//!
//! 1. BGN empirical override
//! 2. Common treatment covering the full selection
//! 3. Escalation with adjuncts
//!
//! Ties between treatment columns go to the earliest column.

mod bgn;
mod classifier;
mod errors;
mod escalation;
mod explain;
mod matcher;
mod orchestrator;
mod rules;
mod selection;

pub use bgn::{BgnOverride, BgnOverrideResolver, BgnRule};
pub use classifier::{ItemClassifier, SelectionBreakdown};
pub use errors::{EngineError, EngineErrorCode, EngineResult};
pub use escalation::{Escalation, EscalationResolver, EscalationStage};
pub use explain::ExplainDecision;
pub use matcher::{CommonMatch, CommonTreatmentMatcher};
pub use orchestrator::{Decision, DecisionOrchestrator, DecisionPath};
pub use rules::{DecisionRules, TREATMENT_SEPARATOR};
pub use selection::{ExamFindings, Selection};
