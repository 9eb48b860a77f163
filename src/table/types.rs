//! Sensitivity table types
//!
//! A table is a list of treatment columns (in display order) and a list of
//! item rows (in display order). Each row holds raw score cells; a cell only
//! counts as coverage when it parses to an integer.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::errors::{TableError, TableResult};

/// Item category as recorded in the table's `type` column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// An identified organism
    Bacterium,
    /// A resistance marker such as MRSA
    Resistance,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Bacterium => "bacterium",
            Category::Resistance => "resistance",
        }
    }

    /// Parses the table's category label. The French `bacterie` label is
    /// accepted alongside `bacterium`.
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "bacterium" | "bacterie" => Some(Category::Bacterium),
            "resistance" => Some(Category::Resistance),
            _ => None,
        }
    }
}

/// A single row of the sensitivity table
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub name: String,
    pub category: Option<Category>,
    pub is_bgn: bool,
    scores: HashMap<String, Value>,
}

impl Item {
    pub fn new(name: impl Into<String>, category: Option<Category>) -> Self {
        Self {
            name: name.into(),
            category,
            is_bgn: false,
            scores: HashMap::new(),
        }
    }

    pub fn bacterium(name: impl Into<String>) -> Self {
        Self::new(name, Some(Category::Bacterium))
    }

    pub fn resistance(name: impl Into<String>) -> Self {
        Self::new(name, Some(Category::Resistance))
    }

    /// Marks the item as a Gram-negative bacillus
    pub fn with_bgn(mut self, is_bgn: bool) -> Self {
        self.is_bgn = is_bgn;
        self
    }

    /// Stores a raw cell for a treatment column
    pub fn with_score(mut self, treatment: impl Into<String>, cell: impl Into<Value>) -> Self {
        self.scores.insert(treatment.into(), cell.into());
        self
    }

    /// Returns the integer score for a treatment, or `None` when the
    /// treatment does not cover this item.
    pub fn score(&self, treatment: &str) -> Option<i64> {
        self.scores.get(treatment).and_then(parse_score)
    }

    /// Treatment columns this row holds a raw cell for
    pub fn scored_treatments(&self) -> impl Iterator<Item = &str> {
        self.scores.keys().map(String::as_str)
    }
}

/// Interprets a raw cell as a score.
///
/// Integers are taken as is, numeric strings are trimmed then parsed, and
/// finite floats are truncated toward zero. Null, blank, boolean and
/// non-numeric cells are "not covered".
pub fn parse_score(cell: &Value) -> Option<i64> {
    match cell {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.abs() < i64::MAX as f64)
                .map(|f| f.trunc() as i64)
        }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

/// Interprets the raw `is_bgn` cell: boolean true or the string "true" in
/// any case.
pub fn parse_bgn_flag(cell: &Value) -> bool {
    match cell {
        Value::Bool(b) => *b,
        Value::String(s) => s.eq_ignore_ascii_case("true"),
        _ => false,
    }
}

/// Read-only view of a sensitivity table.
///
/// The decision engine only ever reads through this trait, so tests can
/// supply fixture tables and the transport can share one immutable snapshot.
pub trait SensitivityTable {
    /// Treatment columns in table order
    fn treatments(&self) -> &[String];

    /// Rows in table order
    fn items(&self) -> &[Item];

    /// Exact, case-sensitive lookup by item name
    fn item(&self, name: &str) -> Option<&Item>;
}

/// In-memory sensitivity table with a name index
#[derive(Debug, Clone)]
pub struct TreatmentTable {
    treatments: Vec<String>,
    items: Vec<Item>,
    by_name: HashMap<String, usize>,
}

impl TreatmentTable {
    /// Builds a table, rejecting structural problems.
    ///
    /// Treatment columns must be non-blank and unique, item names unique,
    /// and every scored treatment must be a declared column.
    pub fn new(treatments: Vec<String>, items: Vec<Item>) -> TableResult<Self> {
        const SOURCE: &str = "<in-memory>";

        let mut columns = HashSet::new();
        for treatment in &treatments {
            if treatment.trim().is_empty() {
                return Err(TableError::malformed(SOURCE, "Blank treatment column"));
            }
            if !columns.insert(treatment.as_str()) {
                return Err(TableError::malformed(
                    SOURCE,
                    format!("Treatment column '{}' declared twice", treatment),
                ));
            }
        }

        let mut by_name = HashMap::with_capacity(items.len());
        for (row, item) in items.iter().enumerate() {
            if by_name.insert(item.name.clone(), row).is_some() {
                return Err(TableError::duplicate_item(SOURCE, &item.name));
            }
            if let Some(unknown) = item.scored_treatments().find(|t| !columns.contains(t)) {
                return Err(TableError::unknown_treatment(SOURCE, &item.name, unknown));
            }
        }

        Ok(Self {
            treatments,
            items,
            by_name,
        })
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn treatment_count(&self) -> usize {
        self.treatments.len()
    }
}

impl SensitivityTable for TreatmentTable {
    fn treatments(&self) -> &[String] {
        &self.treatments
    }

    fn items(&self) -> &[Item] {
        &self.items
    }

    fn item(&self, name: &str) -> Option<&Item> {
        self.by_name.get(name).map(|&row| &self.items[row])
    }
}
