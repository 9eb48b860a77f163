//! Explain output for a decision
//!
//! Produces a deterministic, human-readable account of which path decided
//! and why, or why the request was rejected.

use std::fmt;

use serde::Serialize;

use super::errors::EngineError;
use super::orchestrator::{Decision, DecisionPath};

/// Explain output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExplainDecision {
    /// Whether the request was accepted (a missing treatment still counts)
    pub accepted: bool,
    /// Decision path name (if accepted)
    pub path: Option<String>,
    pub treatment: Option<String>,
    /// BGN rule that fired
    pub bgn_rule: Option<String>,
    /// Summed score of the matched column
    pub total_score: Option<i64>,
    /// Escalation stages that fired, in order
    pub stages: Vec<String>,
    /// Treatment covering the remainder after escalation
    pub base_treatment: Option<String>,
    pub rejection_code: Option<String>,
    pub rejection_reason: Option<String>,
}

impl ExplainDecision {
    pub fn from_decision(decision: &Decision) -> Self {
        let mut explain = Self {
            accepted: true,
            path: Some(decision.path.as_str().to_string()),
            treatment: decision.treatment.clone(),
            bgn_rule: None,
            total_score: None,
            stages: Vec::new(),
            base_treatment: None,
            rejection_code: None,
            rejection_reason: None,
        };

        match &decision.path {
            DecisionPath::BgnOverride(rule) => {
                explain.bgn_rule = Some(rule.as_str().to_string());
            }
            DecisionPath::CommonTreatment { total_score } => {
                explain.total_score = Some(*total_score);
            }
            DecisionPath::Escalation { stages, base } => {
                explain.stages = stages.iter().map(|s| s.as_str().to_string()).collect();
                if let Some(base) = base {
                    explain.base_treatment = Some(base.treatment.clone());
                    explain.total_score = Some(base.total_score);
                }
            }
            DecisionPath::NoCommonTreatment => {}
        }

        explain
    }

    pub fn from_error(err: &EngineError) -> Self {
        Self {
            accepted: false,
            path: None,
            treatment: None,
            bgn_rule: None,
            total_score: None,
            stages: Vec::new(),
            base_treatment: None,
            rejection_code: Some(err.code().code().to_string()),
            rejection_reason: Some(err.message().to_string()),
        }
    }
}

impl fmt::Display for ExplainDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== EXPLAIN DECISION ===")?;

        if !self.accepted {
            writeln!(f, "Status: REJECTED")?;
            if let Some(code) = &self.rejection_code {
                writeln!(f, "Error Code: {}", code)?;
            }
            if let Some(reason) = &self.rejection_reason {
                writeln!(f, "Reason: {}", reason)?;
            }
            return Ok(());
        }

        writeln!(f, "Status: ACCEPTED")?;
        if let Some(path) = &self.path {
            writeln!(f, "Path: {}", path)?;
        }
        if let Some(rule) = &self.bgn_rule {
            writeln!(f, "BGN Rule: {}", rule)?;
        }
        if !self.stages.is_empty() {
            writeln!(f, "Stages: {}", self.stages.join(" -> "))?;
        }
        if let Some(base) = &self.base_treatment {
            writeln!(f, "Base Treatment: {}", base)?;
        }
        if let Some(total) = self.total_score {
            writeln!(f, "Total Score: {}", total)?;
        }
        match &self.treatment {
            Some(treatment) => writeln!(f, "Treatment: {}", treatment)?,
            None => writeln!(f, "Treatment: none")?,
        }

        Ok(())
    }
}
