//! CLI command implementations
//!
//! Every command boots the same way: load the config, load the sensitivity
//! table, then hand both to the API layer. A table that fails to load stops
//! the process before any request is read. The long-running commands
//! (`start`, `serve`) read the table again for every request, so edits to
//! the file apply without a restart.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::api::{ApiError, ApiHandler, Response};
use crate::engine::DecisionRules;
use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::{log_event, log_event_with_fields, Event};
use crate::table::{TableLoader, TreatmentTable};

use super::args::Command;
use super::errors::{CliError, CliResult};
use super::io::{read_request, read_requests, write_error, write_json};

/// Configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Sensitivity table (required). Relative paths are resolved against
    /// the directory holding the config file.
    pub table_path: PathBuf,

    /// Clinical rule constants (optional, default: built-in rules)
    #[serde(default)]
    pub rules: DecisionRules,

    /// HTTP server settings, used by `serve` only
    #[serde(default)]
    pub http: HttpServerConfig,
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let mut config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        if config.table_path.is_relative() {
            if let Some(dir) = path.parent() {
                config.table_path = dir.join(&config.table_path);
            }
        }

        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        if self.table_path.as_os_str().is_empty() {
            return Err(CliError::config_error("table_path must not be empty"));
        }

        self.rules
            .validate()
            .map_err(|e| CliError::config_error(format!("Invalid rules: {}", e)))?;

        self.http.validate().map_err(CliError::config_error)?;

        Ok(())
    }
}

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Items { config } => items(&config),
        Command::Decide { config } => decide(&config),
        Command::Explain { config } => explain(&config),
        Command::Start { config } => start(&config),
        Command::Serve { config, port } => serve(&config, port),
    }
}

/// Print the selectable items and exit
pub fn items(config_path: &Path) -> CliResult<()> {
    let (config, table) = boot(config_path)?;
    let handler = ApiHandler::new(&table, &config.rules);

    let response = Response::success(json!(handler.items()));
    write_json(&response.to_json())
}

/// Decide a single request read from stdin and exit
pub fn decide(config_path: &Path) -> CliResult<()> {
    one_shot(config_path, "decide")
}

/// Explain a single request read from stdin and exit
pub fn explain(config_path: &Path) -> CliResult<()> {
    one_shot(config_path, "explain")
}

/// Boot, then answer one JSON request per stdin line until EOF
pub fn start(config_path: &Path) -> CliResult<()> {
    let (config, _) = boot(config_path)?;
    let loader = TableLoader::new(&config.table_path);

    log_event(Event::Serving);

    for line in read_requests() {
        match line {
            Ok(line) => {
                let response = answer(&loader, &config.rules, &line);
                write_json(&response.to_json())?;
            }
            Err(e) => {
                // Broken stdin ends the loop
                write_error(e.code_str(), e.message())?;
                break;
            }
        }
    }

    log_event(Event::ShutdownComplete);
    Ok(())
}

/// Boot and serve the HTTP API until the process is stopped
pub fn serve(config_path: &Path, port: Option<u16>) -> CliResult<()> {
    let (config, _) = boot(config_path)?;

    let mut http_config = config.http.clone();
    if let Some(port) = port {
        http_config.port = port;
    }

    let loader = TableLoader::new(&config.table_path);
    let server = HttpServer::with_config(loader, config.rules, http_config);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })?;

    log_event(Event::ShutdownComplete);
    Ok(())
}

/// Answer one request line against the table as it reads now. A table
/// that no longer loads fails this line only.
fn answer(loader: &TableLoader, rules: &DecisionRules, line: &str) -> Response {
    match loader.load() {
        Ok(table) => ApiHandler::new(&table, rules).handle(line),
        Err(e) => Response::error(&ApiError::from(e)),
    }
}

fn one_shot(config_path: &Path, op: &str) -> CliResult<()> {
    let (config, table) = boot(config_path)?;
    let handler = ApiHandler::new(&table, &config.rules);

    let request = with_op(&read_request()?, op);
    let response = handler.handle(&request);
    write_json(&response.to_json())
}

/// Forces the `op` field of a JSON object request.
///
/// Anything that is not a JSON object is passed through untouched so the
/// handler reports it as an invalid request.
fn with_op(line: &str, op: &str) -> String {
    match serde_json::from_str::<Value>(line) {
        Ok(Value::Object(mut obj)) => {
            obj.insert("op".to_string(), json!(op));
            Value::Object(obj).to_string()
        }
        _ => line.to_string(),
    }
}

/// Load config and table, logging each step
fn boot(config_path: &Path) -> CliResult<(Config, TreatmentTable)> {
    let config = Config::load(config_path)?;
    log_event_with_fields(
        Event::ConfigLoaded,
        &[("path", config_path.display().to_string().as_str())],
    );

    let loader = TableLoader::new(&config.table_path);
    match loader.load() {
        Ok(table) => {
            log_event_with_fields(
                Event::TableLoaded,
                &[
                    ("items", table.item_count().to_string().as_str()),
                    ("path", loader.path().display().to_string().as_str()),
                    ("treatments", table.treatment_count().to_string().as_str()),
                ],
            );
            Ok((config, table))
        }
        Err(e) => {
            log_event_with_fields(
                Event::TableLoadFailed,
                &[("code", e.code().code()), ("reason", e.message())],
            );
            Err(e.into())
        }
    }
}
