//! Common treatment matching
//!
//! A treatment column qualifies only when every selected item has a usable
//! score in it. Among qualifying columns the lowest total wins; ties keep
//! the earliest column in table order.

use crate::table::SensitivityTable;

use super::selection::Selection;

/// A treatment covering every item of a selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommonMatch {
    pub treatment: String,
    /// Sum of the per-item scores in this column
    pub total_score: i64,
}

pub struct CommonTreatmentMatcher<'a, T: SensitivityTable + ?Sized> {
    table: &'a T,
}

impl<'a, T: SensitivityTable + ?Sized> CommonTreatmentMatcher<'a, T> {
    pub fn new(table: &'a T) -> Self {
        Self { table }
    }

    /// Finds the best treatment covering the whole selection.
    ///
    /// Returns `None` for an empty selection or when no column covers
    /// every item.
    pub fn find(&self, selection: &Selection) -> Option<CommonMatch> {
        if selection.is_empty() {
            return None;
        }

        let mut best: Option<CommonMatch> = None;

        for treatment in self.table.treatments() {
            let Some(total_score) = self.column_total(treatment, selection) else {
                continue;
            };

            // Strict comparison: an equal total never displaces an earlier column
            if best.as_ref().map_or(true, |b| total_score < b.total_score) {
                best = Some(CommonMatch {
                    treatment: treatment.clone(),
                    total_score,
                });
            }
        }

        best
    }

    /// Total score of one column, or `None` as soon as any item is uncovered.
    ///
    /// Unknown item names count as uncovered.
    fn column_total(&self, treatment: &str, selection: &Selection) -> Option<i64> {
        selection.iter().try_fold(0i64, |total, name| {
            let score = self.table.item(name)?.score(treatment)?;
            total.checked_add(score)
        })
    }
}
