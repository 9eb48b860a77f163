//! Sensitivity table error types
//!
//! Error codes:
//! - ABX_TABLE_UNREADABLE (COLLABORATOR)
//! - ABX_TABLE_MALFORMED (COLLABORATOR)
//! - ABX_TABLE_DUPLICATE_ITEM (COLLABORATOR)
//! - ABX_TABLE_UNKNOWN_TREATMENT (COLLABORATOR)
//!
//! Every table failure is a collaborator failure. A cell that does not hold
//! a usable score is not an error; it only means "not covered".

use std::fmt;

use crate::errors::ErrorClass;

/// Table-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableErrorCode {
    /// Table file missing or unreadable
    AbxTableUnreadable,
    /// Table document structurally invalid
    AbxTableMalformed,
    /// Two rows share the same item name
    AbxTableDuplicateItem,
    /// A row scores a treatment that is not a declared column
    AbxTableUnknownTreatment,
}

impl TableErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            TableErrorCode::AbxTableUnreadable => "ABX_TABLE_UNREADABLE",
            TableErrorCode::AbxTableMalformed => "ABX_TABLE_MALFORMED",
            TableErrorCode::AbxTableDuplicateItem => "ABX_TABLE_DUPLICATE_ITEM",
            TableErrorCode::AbxTableUnknownTreatment => "ABX_TABLE_UNKNOWN_TREATMENT",
        }
    }

    pub fn class(&self) -> ErrorClass {
        ErrorClass::Collaborator
    }
}

impl fmt::Display for TableErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Table error with the offending source and a reason
#[derive(Debug, Clone)]
pub struct TableError {
    code: TableErrorCode,
    /// File path or `<in-memory>`
    source: String,
    message: String,
}

impl TableError {
    pub fn unreadable(source: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            code: TableErrorCode::AbxTableUnreadable,
            source: source.into(),
            message: reason.into(),
        }
    }

    pub fn malformed(source: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            code: TableErrorCode::AbxTableMalformed,
            source: source.into(),
            message: reason.into(),
        }
    }

    pub fn duplicate_item(source: impl Into<String>, name: &str) -> Self {
        Self {
            code: TableErrorCode::AbxTableDuplicateItem,
            source: source.into(),
            message: format!("Item '{}' appears more than once", name),
        }
    }

    pub fn unknown_treatment(source: impl Into<String>, item: &str, treatment: &str) -> Self {
        Self {
            code: TableErrorCode::AbxTableUnknownTreatment,
            source: source.into(),
            message: format!(
                "Item '{}' scores undeclared treatment '{}'",
                item, treatment
            ),
        }
    }

    /// Rebinds an error raised while building an in-memory table to the file it came from
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    pub fn code(&self) -> TableErrorCode {
        self.code
    }

    pub fn class(&self) -> ErrorClass {
        self.code.class()
    }

    pub fn source_name(&self) -> &str {
        &self.source
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {} ({})",
            self.class(),
            self.code,
            self.message,
            self.source
        )
    }
}

impl std::error::Error for TableError {}

/// Result type for table operations
pub type TableResult<T> = Result<T, TableError>;
