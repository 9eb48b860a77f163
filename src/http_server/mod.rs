//! # HTTP Server Module
//!
//! HTTP front end for the treatment advisor. Every route shares one
//! read-only table snapshot loaded at boot.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/items` - Selectable items
//! - `/find_treatment` - Treatment decision
//! - `/explain` - Decision explanation

pub mod config;
pub mod errors;
pub mod health_routes;
pub mod server;
pub mod state;
pub mod treatment_routes;

pub use config::HttpServerConfig;
pub use errors::{HttpError, HttpResult};
pub use server::HttpServer;
pub use state::AppState;
