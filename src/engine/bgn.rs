//! Empirical override for a Gram-negative bacilli (BGN) direct exam
//!
//! When the exam reports BGN but no selected organism is itself a BGN, the
//! empirical base treatment is prescribed, extended for atypical organisms
//! and MRSA. Rule precedence (strict order):
//!
//! 1. Atypical organism and MRSA
//! 2. Atypical organism
//! 3. MRSA
//! 4. Neither

use crate::table::SensitivityTable;

use super::rules::{DecisionRules, TREATMENT_SEPARATOR};
use super::selection::{ExamFindings, Selection};

/// Which override rule fired
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BgnRule {
    AtypicalWithMrsa,
    Atypical,
    Mrsa,
    Default,
}

impl BgnRule {
    pub fn as_str(&self) -> &'static str {
        match self {
            BgnRule::AtypicalWithMrsa => "ATYPICAL_WITH_MRSA",
            BgnRule::Atypical => "ATYPICAL",
            BgnRule::Mrsa => "MRSA",
            BgnRule::Default => "DEFAULT",
        }
    }

    fn covers_atypical(&self) -> bool {
        matches!(self, BgnRule::AtypicalWithMrsa | BgnRule::Atypical)
    }

    fn covers_mrsa(&self) -> bool {
        matches!(self, BgnRule::AtypicalWithMrsa | BgnRule::Mrsa)
    }
}

/// Override chosen for a BGN exam
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BgnOverride {
    pub rule: BgnRule,
    pub treatment: String,
}

pub struct BgnOverrideResolver<'a, T: SensitivityTable + ?Sized> {
    table: &'a T,
    rules: &'a DecisionRules,
}

impl<'a, T: SensitivityTable + ?Sized> BgnOverrideResolver<'a, T> {
    pub fn new(table: &'a T, rules: &'a DecisionRules) -> Self {
        Self { table, rules }
    }

    /// Returns the override, or `None` when the exam has no BGN finding or a
    /// BGN organism is already selected.
    pub fn resolve(&self, selection: &Selection, exam: &ExamFindings) -> Option<BgnOverride> {
        if !exam.contains(&self.rules.bgn_finding) {
            return None;
        }

        if self.has_bgn_item(selection) {
            return None;
        }

        let rule = match (
            self.rules.has_atypical(selection),
            selection.contains(&self.rules.mrsa_marker),
        ) {
            (true, true) => BgnRule::AtypicalWithMrsa,
            (true, false) => BgnRule::Atypical,
            (false, true) => BgnRule::Mrsa,
            (false, false) => BgnRule::Default,
        };

        Some(BgnOverride {
            rule,
            treatment: self.label(rule),
        })
    }

    fn has_bgn_item(&self, selection: &Selection) -> bool {
        selection
            .iter()
            .filter_map(|name| self.table.item(name))
            .any(|item| item.is_bgn)
    }

    fn label(&self, rule: BgnRule) -> String {
        let mut parts: Vec<&str> = self
            .rules
            .bgn_empirical_base
            .iter()
            .map(String::as_str)
            .collect();
        if rule.covers_atypical() {
            parts.push(&self.rules.atypical_adjunct);
        }
        if rule.covers_mrsa() {
            parts.push(&self.rules.mrsa_adjunct);
        }
        parts.join(TREATMENT_SEPARATOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{Item, TreatmentTable};

    fn table() -> TreatmentTable {
        TreatmentTable::new(
            vec!["T1".into()],
            vec![
                Item::bacterium("Escherichia coli").with_bgn(true).with_score("T1", 1),
                Item::bacterium("Streptococcus pneumoniae").with_score("T1", 1),
                Item::bacterium("Mycoplasma pneumoniae"),
                Item::bacterium("Legionella pneumophila"),
                Item::resistance("MRSA"),
            ],
        )
        .unwrap()
    }

    fn resolve(names: &[&str], exam: &[&str]) -> Option<BgnOverride> {
        let table = table();
        let rules = DecisionRules::default();
        BgnOverrideResolver::new(&table, &rules).resolve(
            &Selection::new(names.iter().copied()),
            &ExamFindings::new(exam.iter().copied()),
        )
    }

    #[test]
    fn test_no_bgn_finding_never_fires() {
        assert!(resolve(&["MRSA"], &[]).is_none());
        assert!(resolve(&["MRSA"], &["Cocci Gram +"]).is_none());
    }

    #[test]
    fn test_selected_bgn_item_suppresses_override() {
        assert!(resolve(&["Escherichia coli", "MRSA"], &["BGN"]).is_none());
    }

    #[test]
    fn test_atypical_with_mrsa() {
        let found = resolve(&["Mycoplasma pneumoniae", "MRSA"], &["BGN"]).unwrap();
        assert_eq!(found.rule, BgnRule::AtypicalWithMrsa);
        assert_eq!(
            found.treatment,
            "Cefepime + Amikacine + Spiramycine + Linezolide"
        );
    }

    #[test]
    fn test_atypical_only() {
        let found = resolve(
            &["Legionella pneumophila", "Streptococcus pneumoniae"],
            &["BGN"],
        )
        .unwrap();
        assert_eq!(found.rule, BgnRule::Atypical);
        assert_eq!(found.treatment, "Cefepime + Amikacine + Spiramycine");
    }

    #[test]
    fn test_mrsa_only() {
        let found = resolve(&["MRSA"], &["BGN"]).unwrap();
        assert_eq!(found.rule, BgnRule::Mrsa);
        assert_eq!(found.treatment, "Cefepime + Amikacine + Linezolide");
    }

    #[test]
    fn test_default_override() {
        let found = resolve(&["Streptococcus pneumoniae"], &["BGN", "Cocci Gram +"]).unwrap();
        assert_eq!(found.rule, BgnRule::Default);
        assert_eq!(found.treatment, "Cefepime + Amikacine");
    }

    #[test]
    fn test_overridden_constants() {
        let table = table();
        let rules = DecisionRules {
            bgn_finding: "Gram-negative rods".into(),
            bgn_empirical_base: vec!["Meropenem".into()],
            ..Default::default()
        };
        let resolver = BgnOverrideResolver::new(&table, &rules);

        let found = resolver
            .resolve(
                &Selection::new(["MRSA"]),
                &ExamFindings::new(["Gram-negative rods"]),
            )
            .unwrap();
        assert_eq!(found.treatment, "Meropenem + Linezolide");
    }
}
