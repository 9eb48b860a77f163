//! API request types
//!
//! JSON request parsing for all supported operations. Field names follow
//! the form the front end posts: `bacteria` holds every selected item
//! (organisms and resistance markers alike) and `examDirect` the direct
//! exam findings.

use serde::{Deserialize, Serialize};

use crate::engine::{ExamFindings, Selection};

use super::errors::{ApiError, ApiResult};

/// A treatment request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreatmentRequest {
    #[serde(default)]
    pub bacteria: Vec<String>,
    #[serde(default, rename = "examDirect")]
    pub exam_direct: Vec<String>,
}

impl TreatmentRequest {
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            bacteria: items.into_iter().map(Into::into).collect(),
            exam_direct: Vec::new(),
        }
    }

    pub fn with_exam<I, S>(mut self, findings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exam_direct = findings.into_iter().map(Into::into).collect();
        self
    }

    pub fn selection(&self) -> Selection {
        Selection::new(self.bacteria.iter().cloned())
    }

    pub fn exam(&self) -> ExamFindings {
        ExamFindings::new(self.exam_direct.iter().cloned())
    }
}

/// Unified request envelope
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// List selectable items by category
    Items,
    Decide(TreatmentRequest),
    Explain(TreatmentRequest),
}

#[derive(Debug, Deserialize)]
struct RawRequest {
    op: String,
    #[serde(default)]
    bacteria: Vec<String>,
    #[serde(default, rename = "examDirect")]
    exam_direct: Vec<String>,
}

impl Request {
    /// Parse a request from a JSON string
    pub fn parse(json: &str) -> ApiResult<Self> {
        let raw: RawRequest = serde_json::from_str(json)
            .map_err(|e| ApiError::invalid_request(format!("Invalid JSON: {}", e)))?;

        let body = TreatmentRequest {
            bacteria: raw.bacteria,
            exam_direct: raw.exam_direct,
        };

        match raw.op.as_str() {
            "items" => Ok(Request::Items),
            "decide" => Ok(Request::Decide(body)),
            "explain" => Ok(Request::Explain(body)),
            other => Err(ApiError::unknown_operation(other)),
        }
    }
}
