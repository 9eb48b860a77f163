//! Escalation when no single treatment covers the selection
//!
//! Special-cased items are peeled off in three cumulative stages, each one
//! adding a fixed adjunct. The matcher is retried after every stage that
//! fires and the first covered remainder wins:
//!
//! 1. Atypical organisms (all of them) → atypical adjunct
//! 2. MRSA, together with S. aureus → MRSA adjunct
//! 3. S. aureus alone → S. aureus adjunct
//!
//! Stage 2 already strips S. aureus, so stage 3 only fires when stage 2
//! did not.

use crate::table::SensitivityTable;

use super::matcher::{CommonMatch, CommonTreatmentMatcher};
use super::rules::{DecisionRules, TREATMENT_SEPARATOR};
use super::selection::Selection;

/// A peeling stage, in application order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscalationStage {
    Atypical,
    Mrsa,
    StaphAureus,
}

impl EscalationStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            EscalationStage::Atypical => "ATYPICAL",
            EscalationStage::Mrsa => "MRSA",
            EscalationStage::StaphAureus => "STAPH_AUREUS",
        }
    }
}

/// Result of an escalation that fired at least one stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Escalation {
    /// Stages that fired, in order
    pub stages: Vec<EscalationStage>,
    /// Adjuncts accumulated by those stages, in order
    pub adjuncts: Vec<String>,
    /// Treatment covering the remainder, if one was found
    pub base: Option<CommonMatch>,
}

impl Escalation {
    /// Display label: base treatment (when found) followed by the adjuncts
    pub fn label(&self) -> String {
        self.base
            .iter()
            .map(|b| b.treatment.as_str())
            .chain(self.adjuncts.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(TREATMENT_SEPARATOR)
    }
}

/// Working state carried from one stage to the next
struct EscalationState {
    remaining: Selection,
    stages: Vec<EscalationStage>,
    adjuncts: Vec<String>,
}

impl EscalationState {
    fn new(selection: &Selection) -> Self {
        Self {
            remaining: selection.clone(),
            stages: Vec::new(),
            adjuncts: Vec::new(),
        }
    }

    fn peel<F>(&mut self, stage: EscalationStage, adjunct: &str, mut removed: F)
    where
        F: FnMut(&str) -> bool,
    {
        self.stages.push(stage);
        self.adjuncts.push(adjunct.to_string());
        self.remaining.retain(|name| !removed(name));
    }

    fn finish(self, base: Option<CommonMatch>) -> Escalation {
        Escalation {
            stages: self.stages,
            adjuncts: self.adjuncts,
            base,
        }
    }
}

pub struct EscalationResolver<'a, T: SensitivityTable + ?Sized> {
    matcher: CommonTreatmentMatcher<'a, T>,
    rules: &'a DecisionRules,
}

impl<'a, T: SensitivityTable + ?Sized> EscalationResolver<'a, T> {
    pub fn new(table: &'a T, rules: &'a DecisionRules) -> Self {
        Self {
            matcher: CommonTreatmentMatcher::new(table),
            rules,
        }
    }

    /// Runs the stages against a selection the matcher could not cover.
    ///
    /// Returns `None` only when no stage applies to the selection.
    pub fn resolve(&self, selection: &Selection) -> Option<Escalation> {
        let rules = self.rules;
        let mut state = EscalationState::new(selection);

        if rules.has_atypical(&state.remaining) {
            state.peel(EscalationStage::Atypical, &rules.atypical_adjunct, |name| {
                rules.is_atypical(name)
            });
            if let Some(base) = self.matcher.find(&state.remaining) {
                return Some(state.finish(Some(base)));
            }
        }

        if state.remaining.contains(&rules.mrsa_marker) {
            state.peel(EscalationStage::Mrsa, &rules.mrsa_adjunct, |name| {
                name == rules.mrsa_marker || name == rules.staph_aureus
            });
            if let Some(base) = self.matcher.find(&state.remaining) {
                return Some(state.finish(Some(base)));
            }
        }

        if state.remaining.contains(&rules.staph_aureus) {
            state.peel(
                EscalationStage::StaphAureus,
                &rules.staph_aureus_adjunct,
                |name| name == rules.staph_aureus,
            );
            if let Some(base) = self.matcher.find(&state.remaining) {
                return Some(state.finish(Some(base)));
            }
        }

        if state.adjuncts.is_empty() {
            None
        } else {
            Some(state.finish(None))
        }
    }
}
