//! API response types
//!
//! Every response is either `{"status":"ok","data":...}` or
//! `{"status":"error","code":...,"message":...}`. A decision that found no
//! treatment is still an `ok` response whose data says `success: false`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::engine::SelectionBreakdown;

use super::errors::ApiError;

/// Message returned when every resolver was exhausted
pub const NO_TREATMENT_MESSAGE: &str = "No common treatment found for the selected items";

/// Payload of a decide operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TreatmentOutcome {
    Found {
        success: bool,
        treatment: String,
        bacteria: Vec<String>,
        resistances: Vec<String>,
    },
    NotFound {
        success: bool,
        message: String,
    },
}

impl TreatmentOutcome {
    pub fn found(treatment: String, breakdown: SelectionBreakdown) -> Self {
        TreatmentOutcome::Found {
            success: true,
            treatment,
            bacteria: breakdown.bacteria,
            resistances: breakdown.resistances,
        }
    }

    pub fn not_found() -> Self {
        TreatmentOutcome::NotFound {
            success: false,
            message: NO_TREATMENT_MESSAGE.to_string(),
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, TreatmentOutcome::Found { .. })
    }
}

/// Payload of an items operation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemListing {
    pub bacteria: Vec<String>,
    pub resistances: Vec<String>,
    pub all_items: Vec<String>,
}

/// Success response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub status: String,
    pub data: Value,
}

impl SuccessResponse {
    pub fn new(data: Value) -> Self {
        Self {
            status: "ok".to_string(),
            data,
        }
    }
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: String,
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn from_error(err: &ApiError) -> Self {
        Self {
            status: "error".to_string(),
            code: err.code().to_string(),
            message: err.message().to_string(),
        }
    }
}

/// Unified response type
#[derive(Debug, Clone)]
pub enum Response {
    Success(SuccessResponse),
    Error(ErrorResponse),
}

impl Response {
    pub fn success(data: Value) -> Self {
        Response::Success(SuccessResponse::new(data))
    }

    pub fn error(err: &ApiError) -> Self {
        Response::Error(ErrorResponse::from_error(err))
    }

    pub fn to_value(&self) -> Value {
        // Both variants only hold strings and JSON values
        match self {
            Response::Success(r) => serde_json::to_value(r).unwrap_or(Value::Null),
            Response::Error(r) => serde_json::to_value(r).unwrap_or(Value::Null),
        }
    }

    pub fn to_json(&self) -> String {
        self.to_value().to_string()
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Response::Success(_))
    }
}
