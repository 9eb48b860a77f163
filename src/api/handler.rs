//! API handler
//!
//! Binds one table snapshot and one rule set, then turns requests into
//! responses. The handler holds no mutable state, so a single instance can
//! serve any number of requests.

use serde_json::json;
use uuid::Uuid;

use crate::engine::{DecisionOrchestrator, DecisionRules, ExplainDecision, ItemClassifier};
use crate::observability::{log_event_with_fields, Event};
use crate::table::{Category, SensitivityTable};

use super::errors::ApiResult;
use super::request::{Request, TreatmentRequest};
use super::response::{ItemListing, Response, TreatmentOutcome};

pub struct ApiHandler<'a, T: SensitivityTable + ?Sized> {
    table: &'a T,
    rules: &'a DecisionRules,
}

impl<'a, T: SensitivityTable + ?Sized> ApiHandler<'a, T> {
    pub fn new(table: &'a T, rules: &'a DecisionRules) -> Self {
        Self { table, rules }
    }

    /// Handle a raw JSON request string
    pub fn handle(&self, json_request: &str) -> Response {
        let request = match Request::parse(json_request) {
            Ok(r) => r,
            Err(e) => return Response::error(&e),
        };

        let request_id = Uuid::new_v4().to_string();
        let op = match &request {
            Request::Items => "items",
            Request::Decide(_) => "decide",
            Request::Explain(_) => "explain",
        };
        log_event_with_fields(
            Event::RequestReceived,
            &[("op", op), ("request_id", request_id.as_str())],
        );

        let result = match request {
            Request::Items => Ok(json!(self.items())),
            Request::Decide(r) => self.decide(&r).map(|outcome| json!(outcome)),
            Request::Explain(r) => Ok(json!(self.explain(&r))),
        };

        match result {
            Ok(data) => Response::success(data),
            Err(e) => Response::error(&e),
        }
    }

    /// Selectable items, grouped by category, in table order.
    /// `all_items` lists every named row, uncategorized ones included.
    pub fn items(&self) -> ItemListing {
        let classifier = ItemClassifier::new(self.table);
        ItemListing {
            bacteria: classifier.classify(Some(Category::Bacterium)),
            resistances: classifier.classify(Some(Category::Resistance)),
            all_items: self.table.items().iter().map(|i| i.name.clone()).collect(),
        }
    }

    /// Runs the decision engine for one request.
    ///
    /// Engine rejections come back as errors; "no treatment" comes back as
    /// a `NotFound` outcome.
    pub fn decide(&self, request: &TreatmentRequest) -> ApiResult<TreatmentOutcome> {
        let orchestrator = DecisionOrchestrator::new(self.table, self.rules);
        let treatment = orchestrator.decide(&request.selection(), &request.exam())?;

        Ok(match treatment {
            Some(treatment) => {
                let breakdown = ItemClassifier::new(self.table)
                    .partition(request.bacteria.iter().map(String::as_str));
                TreatmentOutcome::found(treatment, breakdown)
            }
            None => TreatmentOutcome::not_found(),
        })
    }

    /// Explains a decision; rejections are explained rather than returned
    /// as errors.
    pub fn explain(&self, request: &TreatmentRequest) -> ExplainDecision {
        let orchestrator = DecisionOrchestrator::new(self.table, self.rules);
        match orchestrator.evaluate(&request.selection(), &request.exam()) {
            Ok(decision) => ExplainDecision::from_decision(&decision),
            Err(e) => ExplainDecision::from_error(&e),
        }
    }
}
