//! API layer for abxadvisor
//!
//! Turns JSON requests into engine calls and engine results into JSON
//! responses. Shared by the stdin/stdout CLI and the HTTP server.
//!
//! # Design Principles
//!
//! - One table snapshot per handler, never mutated
//! - Error codes passed through unchanged
//! - "No treatment" is a successful response, not an error
//!
//! # Supported Operations
//!
//! - items
//! - decide
//! - explain

mod errors;
mod handler;
mod request;
mod response;

pub use errors::{ApiError, ApiErrorCode, ApiResult};
pub use handler::ApiHandler;
pub use request::{Request, TreatmentRequest};
pub use response::{
    ErrorResponse, ItemListing, Response, SuccessResponse, TreatmentOutcome, NO_TREATMENT_MESSAGE,
};
