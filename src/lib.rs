//! abxadvisor - a deterministic antimicrobial treatment decision engine
//!
//! Given the bacteria and resistance markers a clinician selected, and the
//! findings of the direct exam, picks one empirical treatment label from a
//! sensitivity table and a small set of clinical override rules.
//!
//! Layers, bottom up:
//! - `table`: the read-only sensitivity table and its loader
//! - `engine`: classifier, matcher, resolvers and the orchestrator
//! - `api`: JSON requests and responses shared by every transport
//! - `cli` and `http_server`: the two transports

pub mod api;
pub mod cli;
pub mod engine;
pub mod errors;
pub mod http_server;
pub mod observability;
pub mod table;
