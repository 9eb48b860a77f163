//! Clinical constants used by the override rules
//!
//! These are engine constants, never derived from the sensitivity table.
//! They live in one struct so a config file or a test can replace them
//! without touching the algorithms.

use serde::{Deserialize, Serialize};

use super::selection::Selection;

/// Separator used when composing treatment labels
pub const TREATMENT_SEPARATOR: &str = " + ";

/// Named items, findings and adjunct labels the decision rules depend on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionRules {
    /// Direct-exam token that triggers the empirical override
    #[serde(default = "default_bgn_finding")]
    pub bgn_finding: String,

    /// Organisms that need an additional agent
    #[serde(default = "default_atypical_organisms")]
    pub atypical_organisms: Vec<String>,

    /// Resistance marker for methicillin-resistant S. aureus
    #[serde(default = "default_mrsa_marker")]
    pub mrsa_marker: String,

    /// Organism implied by the MRSA marker
    #[serde(default = "default_staph_aureus")]
    pub staph_aureus: String,

    #[serde(default = "default_atypical_adjunct")]
    pub atypical_adjunct: String,

    #[serde(default = "default_mrsa_adjunct")]
    pub mrsa_adjunct: String,

    #[serde(default = "default_staph_aureus_adjunct")]
    pub staph_aureus_adjunct: String,

    /// Empirical treatment applied when the BGN override fires
    #[serde(default = "default_bgn_empirical_base")]
    pub bgn_empirical_base: Vec<String>,
}

fn default_bgn_finding() -> String {
    "BGN".to_string()
}
fn default_atypical_organisms() -> Vec<String> {
    vec![
        "Chlamydia pneumoniae".to_string(),
        "Legionella pneumophila".to_string(),
        "Mycoplasma pneumoniae".to_string(),
    ]
}
fn default_mrsa_marker() -> String {
    "MRSA".to_string()
}
fn default_staph_aureus() -> String {
    "Staphylococcus aureus".to_string()
}
fn default_atypical_adjunct() -> String {
    "Spiramycine".to_string()
}
fn default_mrsa_adjunct() -> String {
    "Linezolide".to_string()
}
fn default_staph_aureus_adjunct() -> String {
    "Oracilline (ou Cefazoline si récurrence)".to_string()
}
fn default_bgn_empirical_base() -> Vec<String> {
    vec!["Cefepime".to_string(), "Amikacine".to_string()]
}

impl Default for DecisionRules {
    fn default() -> Self {
        Self {
            bgn_finding: default_bgn_finding(),
            atypical_organisms: default_atypical_organisms(),
            mrsa_marker: default_mrsa_marker(),
            staph_aureus: default_staph_aureus(),
            atypical_adjunct: default_atypical_adjunct(),
            mrsa_adjunct: default_mrsa_adjunct(),
            staph_aureus_adjunct: default_staph_aureus_adjunct(),
            bgn_empirical_base: default_bgn_empirical_base(),
        }
    }
}

impl DecisionRules {
    /// Checks that every name and label is usable.
    pub fn validate(&self) -> Result<(), String> {
        let named = [
            ("bgn_finding", &self.bgn_finding),
            ("mrsa_marker", &self.mrsa_marker),
            ("staph_aureus", &self.staph_aureus),
            ("atypical_adjunct", &self.atypical_adjunct),
            ("mrsa_adjunct", &self.mrsa_adjunct),
            ("staph_aureus_adjunct", &self.staph_aureus_adjunct),
        ];
        for (field, value) in named {
            if value.trim().is_empty() {
                return Err(format!("{} must not be blank", field));
            }
        }

        if self.atypical_organisms.iter().any(|o| o.trim().is_empty()) {
            return Err("atypical_organisms must not contain blank names".into());
        }

        if self.bgn_empirical_base.is_empty()
            || self.bgn_empirical_base.iter().any(|t| t.trim().is_empty())
        {
            return Err("bgn_empirical_base must list at least one treatment".into());
        }

        Ok(())
    }

    pub fn is_atypical(&self, name: &str) -> bool {
        self.atypical_organisms.iter().any(|o| o == name)
    }

    /// True when any selected item is an atypical organism
    pub fn has_atypical(&self, selection: &Selection) -> bool {
        selection.iter().any(|name| self.is_atypical(name))
    }
}
