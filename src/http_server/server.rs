//! # HTTP Server
//!
//! Combines the health and treatment routers behind request tracing and
//! one CORS layer. Handlers read the table through a shared loader.

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::engine::DecisionRules;
use crate::observability::{log_event_with_fields, Event};
use crate::table::TableLoader;

use super::config::HttpServerConfig;
use super::health_routes::health_routes;
use super::state::AppState;
use super::treatment_routes::treatment_routes;

/// HTTP server for the treatment advisor
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration
    pub fn new(loader: TableLoader, rules: DecisionRules) -> Self {
        Self::with_config(loader, rules, HttpServerConfig::default())
    }

    /// Create a new HTTP server with custom configuration
    pub fn with_config(
        loader: TableLoader,
        rules: DecisionRules,
        config: HttpServerConfig,
    ) -> Self {
        let state = Arc::new(AppState::new(loader, rules));
        let router = Self::build_router(state, &config);
        Self { config, router }
    }

    fn build_router(state: Arc<AppState>, config: &HttpServerConfig) -> Router {
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .merge(health_routes(state.clone()))
            .merge(treatment_routes(state))
            .layer(TraceLayer::new_for_http())
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Serve until Ctrl-C
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr = self.config.socket_addr();
        let listener = TcpListener::bind(&addr).await?;

        log_event_with_fields(Event::Serving, &[("addr", addr.as_str())]);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async {
                // A failed signal handler just means we serve until killed
                let _ = tokio::signal::ctrl_c().await;
            })
            .await
    }
}
