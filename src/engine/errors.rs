//! Decision engine error types
//!
//! Error codes:
//! - ABX_EMPTY_SELECTION (INPUT)
//! - ABX_UNKNOWN_ITEM (COLLABORATOR)
//!
//! "No treatment found" is not an error; it is `Ok(None)`.

use std::fmt;

use crate::errors::ErrorClass;

/// Engine-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineErrorCode {
    /// Selection contained no items
    AbxEmptySelection,
    /// A selected name has no row in the sensitivity table
    AbxUnknownItem,
}

impl EngineErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            EngineErrorCode::AbxEmptySelection => "ABX_EMPTY_SELECTION",
            EngineErrorCode::AbxUnknownItem => "ABX_UNKNOWN_ITEM",
        }
    }

    /// Returns which side of the boundary failed
    pub fn class(&self) -> ErrorClass {
        match self {
            EngineErrorCode::AbxEmptySelection => ErrorClass::Input,
            EngineErrorCode::AbxUnknownItem => ErrorClass::Collaborator,
        }
    }
}

impl fmt::Display for EngineErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Engine error type with full context
#[derive(Debug, Clone)]
pub struct EngineError {
    code: EngineErrorCode,
    message: String,
    /// Item name if applicable
    item: Option<String>,
}

impl EngineError {
    /// Create an empty selection error
    pub fn empty_selection() -> Self {
        Self {
            code: EngineErrorCode::AbxEmptySelection,
            message: "Selection must contain at least one item".into(),
            item: None,
        }
    }

    /// Create an unknown item error
    pub fn unknown_item(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            code: EngineErrorCode::AbxUnknownItem,
            message: format!("Item '{}' is not in the sensitivity table", name),
            item: Some(name),
        }
    }

    pub fn code(&self) -> EngineErrorCode {
        self.code
    }

    pub fn class(&self) -> ErrorClass {
        self.code.class()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn item(&self) -> Option<&str> {
        self.item.as_deref()
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.class(), self.code, self.message)
    }
}

impl std::error::Error for EngineError {}

/// Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            EngineErrorCode::AbxEmptySelection.code(),
            "ABX_EMPTY_SELECTION"
        );
        assert_eq!(EngineErrorCode::AbxUnknownItem.code(), "ABX_UNKNOWN_ITEM");
    }

    #[test]
    fn test_error_classes() {
        assert_eq!(EngineError::empty_selection().class(), ErrorClass::Input);
        assert_eq!(
            EngineError::unknown_item("Nocardia").class(),
            ErrorClass::Collaborator
        );
    }

    #[test]
    fn test_error_display() {
        let err = EngineError::unknown_item("Nocardia");
        let display = format!("{}", err);
        assert!(display.contains("ABX_UNKNOWN_ITEM"));
        assert!(display.contains("Nocardia"));
        assert!(display.contains("COLLABORATOR"));
        assert_eq!(err.item(), Some("Nocardia"));
    }
}
