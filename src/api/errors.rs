//! API error types
//!
//! API errors are pass-through: they keep the code and class of the
//! subsystem that raised them.

use std::fmt;

use crate::engine::EngineError;
use crate::errors::ErrorClass;
use crate::table::TableError;

/// API-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorCode {
    /// Request body is not a valid request
    AbxInvalidRequest,
    /// Unknown `op`
    AbxUnknownOperation,
}

impl ApiErrorCode {
    pub fn code(&self) -> &'static str {
        match self {
            ApiErrorCode::AbxInvalidRequest => "ABX_INVALID_REQUEST",
            ApiErrorCode::AbxUnknownOperation => "ABX_UNKNOWN_OPERATION",
        }
    }
}

impl fmt::Display for ApiErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// API error with preserved subsystem error information
#[derive(Debug, Clone)]
pub struct ApiError {
    /// Error code string, kept from the subsystem that raised it
    code: String,
    message: String,
    class: ErrorClass,
}

impl ApiError {
    pub fn invalid_request(reason: impl Into<String>) -> Self {
        Self {
            code: ApiErrorCode::AbxInvalidRequest.code().to_string(),
            message: reason.into(),
            class: ErrorClass::Input,
        }
    }

    pub fn unknown_operation(op: impl Into<String>) -> Self {
        Self {
            code: ApiErrorCode::AbxUnknownOperation.code().to_string(),
            message: format!("Unknown operation: {}", op.into()),
            class: ErrorClass::Input,
        }
    }

    /// Create from an engine error (pass-through)
    pub fn from_engine_error(err: EngineError) -> Self {
        Self {
            code: err.code().code().to_string(),
            message: err.message().to_string(),
            class: err.class(),
        }
    }

    /// Create from a table error (pass-through)
    pub fn from_table_error(err: TableError) -> Self {
        Self {
            code: err.code().code().to_string(),
            message: err.message().to_string(),
            class: err.class(),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn class(&self) -> ErrorClass {
        self.class
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.class, self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        Self::from_engine_error(err)
    }
}

impl From<TableError> for ApiError {
    fn from(err: TableError) -> Self {
        Self::from_table_error(err)
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;
