//! Item classification by category
//!
//! Not part of the decision path. The transport uses it to list the
//! selectable bacteria and resistance markers, and to split a request's
//! selection into the two groups when reporting a result.

use std::collections::HashSet;

use serde::Serialize;

use crate::table::{Category, SensitivityTable};

/// A selection split by category, in the order the caller gave it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SelectionBreakdown {
    pub bacteria: Vec<String>,
    pub resistances: Vec<String>,
}

pub struct ItemClassifier<'a, T: SensitivityTable + ?Sized> {
    table: &'a T,
}

impl<'a, T: SensitivityTable + ?Sized> ItemClassifier<'a, T> {
    pub fn new(table: &'a T) -> Self {
        Self { table }
    }

    /// Names in table row order.
    ///
    /// With a category, only rows of that category. Without one, every row
    /// that has a category at all.
    pub fn classify(&self, category: Option<Category>) -> Vec<String> {
        self.table
            .items()
            .iter()
            .filter(|item| match category {
                Some(wanted) => item.category == Some(wanted),
                None => item.category.is_some(),
            })
            .map(|item| item.name.clone())
            .collect()
    }

    /// Splits caller-supplied names by category.
    ///
    /// Order follows the input, repeated names are reported once, and names
    /// that are unknown or uncategorized are left out.
    pub fn partition<'n, I>(&self, names: I) -> SelectionBreakdown
    where
        I: IntoIterator<Item = &'n str>,
    {
        let mut seen = HashSet::new();
        let mut breakdown = SelectionBreakdown::default();

        for name in names {
            if !seen.insert(name) {
                continue;
            }
            match self.table.item(name).and_then(|item| item.category) {
                Some(Category::Bacterium) => breakdown.bacteria.push(name.to_string()),
                Some(Category::Resistance) => breakdown.resistances.push(name.to_string()),
                None => {}
            }
        }

        breakdown
    }
}
