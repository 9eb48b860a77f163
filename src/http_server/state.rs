//! Shared state for HTTP handlers

use crate::api::ApiResult;
use crate::engine::DecisionRules;
use crate::table::{TableLoader, TreatmentTable};

/// Table source and rule set shared by every request.
///
/// Each request reads its own table snapshot, so edits to the table file
/// apply to the next request and a broken file fails only the requests
/// that hit it.
pub struct AppState {
    loader: TableLoader,
    rules: DecisionRules,
}

impl AppState {
    pub fn new(loader: TableLoader, rules: DecisionRules) -> Self {
        Self { loader, rules }
    }

    /// Fresh table snapshot for one request
    pub fn snapshot(&self) -> ApiResult<TreatmentTable> {
        Ok(self.loader.load()?)
    }

    pub fn rules(&self) -> &DecisionRules {
        &self.rules
    }
}
