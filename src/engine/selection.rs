//! Engine inputs: the caller's item selection and direct-exam findings
//!
//! Both are sets. Duplicates collapse and iteration is always in sorted
//! order, so nothing downstream can depend on the order the caller used.

use std::collections::BTreeSet;

/// A set of selected item names
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    items: BTreeSet<String>,
}

impl Selection {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.contains(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    /// Keeps only the names for which `keep` returns true
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&str) -> bool,
    {
        self.items.retain(|name| keep(name.as_str()));
    }
}

impl<S: Into<String>> FromIterator<S> for Selection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Free-text findings from the direct exam
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExamFindings {
    findings: BTreeSet<String>,
}

impl ExamFindings {
    pub fn new<I, S>(findings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            findings: findings.into_iter().map(Into::into).collect(),
        }
    }

    /// No findings reported
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    /// Literal membership test; no normalization is applied
    pub fn contains(&self, finding: &str) -> bool {
        self.findings.contains(finding)
    }
}
