//! Decision orchestration
//!
//! Sequence (strict order):
//! 1. Reject an empty selection or a name missing from the table
//! 2. BGN override, when any exam finding is present
//! 3. Common treatment over the full selection
//! 4. Escalation
//!
//! Each invocation reads the table snapshot it is given and nothing else.

use crate::observability::{log_event_with_fields, Event};
use crate::table::SensitivityTable;

use super::bgn::{BgnOverrideResolver, BgnRule};
use super::errors::{EngineError, EngineResult};
use super::escalation::{EscalationResolver, EscalationStage};
use super::matcher::{CommonMatch, CommonTreatmentMatcher};
use super::rules::DecisionRules;
use super::selection::{ExamFindings, Selection};

/// Which path produced the decision
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecisionPath {
    /// BGN exam with no BGN organism selected
    BgnOverride(BgnRule),
    /// A single column covers the full selection
    CommonTreatment { total_score: i64 },
    /// Special-cased items were peeled off
    Escalation {
        stages: Vec<EscalationStage>,
        base: Option<CommonMatch>,
    },
    /// Every resolver was exhausted
    NoCommonTreatment,
}

impl DecisionPath {
    pub fn as_str(&self) -> &'static str {
        match self {
            DecisionPath::BgnOverride(_) => "BGN_OVERRIDE",
            DecisionPath::CommonTreatment { .. } => "COMMON_TREATMENT",
            DecisionPath::Escalation { .. } => "ESCALATION",
            DecisionPath::NoCommonTreatment => "NO_COMMON_TREATMENT",
        }
    }
}

/// A treatment label (or its absence) with the path that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    pub treatment: Option<String>,
    pub path: DecisionPath,
}

pub struct DecisionOrchestrator<'a, T: SensitivityTable + ?Sized> {
    table: &'a T,
    rules: &'a DecisionRules,
}

impl<'a, T: SensitivityTable + ?Sized> DecisionOrchestrator<'a, T> {
    pub fn new(table: &'a T, rules: &'a DecisionRules) -> Self {
        Self { table, rules }
    }

    /// Computes the treatment label for a selection.
    ///
    /// `Ok(None)` means no treatment is defined for this selection.
    pub fn decide(
        &self,
        selection: &Selection,
        exam: &ExamFindings,
    ) -> EngineResult<Option<String>> {
        Ok(self.evaluate(selection, exam)?.treatment)
    }

    /// Same as [`decide`](Self::decide), keeping the path taken.
    pub fn evaluate(&self, selection: &Selection, exam: &ExamFindings) -> EngineResult<Decision> {
        self.check_selection(selection)?;

        let item_count = selection.len().to_string();
        log_event_with_fields(Event::DecisionReceived, &[("items", item_count.as_str())]);

        if !exam.is_empty() {
            if let Some(found) = BgnOverrideResolver::new(self.table, self.rules).resolve(selection, exam) {
                log_event_with_fields(
                    Event::BgnOverrideApplied,
                    &[("rule", found.rule.as_str()), ("treatment", found.treatment.as_str())],
                );
                return Ok(Decision {
                    treatment: Some(found.treatment),
                    path: DecisionPath::BgnOverride(found.rule),
                });
            }
        }

        if let Some(found) = CommonTreatmentMatcher::new(self.table).find(selection) {
            let total = found.total_score.to_string();
            log_event_with_fields(
                Event::CommonTreatmentFound,
                &[("total_score", total.as_str()), ("treatment", found.treatment.as_str())],
            );
            return Ok(Decision {
                treatment: Some(found.treatment),
                path: DecisionPath::CommonTreatment {
                    total_score: found.total_score,
                },
            });
        }

        match EscalationResolver::new(self.table, self.rules).resolve(selection) {
            Some(escalation) => {
                let treatment = escalation.label();
                let stages = escalation
                    .stages
                    .iter()
                    .map(EscalationStage::as_str)
                    .collect::<Vec<_>>()
                    .join(",");
                log_event_with_fields(
                    Event::EscalationApplied,
                    &[("stages", stages.as_str()), ("treatment", treatment.as_str())],
                );
                Ok(Decision {
                    treatment: Some(treatment),
                    path: DecisionPath::Escalation {
                        stages: escalation.stages,
                        base: escalation.base,
                    },
                })
            }
            None => {
                log_event_with_fields(Event::NoCommonTreatment, &[("items", item_count.as_str())]);
                Ok(Decision {
                    treatment: None,
                    path: DecisionPath::NoCommonTreatment,
                })
            }
        }
    }

    fn check_selection(&self, selection: &Selection) -> EngineResult<()> {
        let rejection = if selection.is_empty() {
            Some(EngineError::empty_selection())
        } else {
            selection
                .iter()
                .find(|name| self.table.item(name).is_none())
                .map(|name| EngineError::unknown_item(name))
        };

        match rejection {
            Some(err) => {
                log_event_with_fields(
                    Event::DecisionRejected,
                    &[("code", err.code().code()), ("reason", err.message())],
                );
                Err(err)
            }
            None => Ok(()),
        }
    }
}
