//! Listener settings for `abxadvisor serve`
//!
//! Read from the `http` block of the advisor config file. Every field is
//! optional; an absent block serves on loopback port 5000 and accepts
//! browser calls from any origin, which is what a bedside form opened
//! from a local file needs.

use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};

/// Where the advisor listens and which browser origins may call it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Interface address. Loopback unless the form is served to other
    /// machines on the ward network.
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Origins allowed to call `/find_treatment` from a browser.
    /// Empty allows any origin.
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

impl HttpServerConfig {
    /// Defaults with the port given on the command line
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Reject settings the server could only fail on later: a blank host,
    /// port 0 (the OS would pick a port nobody knows) and origins that are
    /// not valid header values, which the CORS layer would drop silently.
    pub fn validate(&self) -> Result<(), String> {
        if self.host.trim().is_empty() {
            return Err("http.host must not be empty".to_string());
        }
        if self.port == 0 {
            return Err("http.port must not be 0".to_string());
        }
        for origin in &self.cors_origins {
            if origin.trim().is_empty() || HeaderValue::from_str(origin).is_err() {
                return Err(format!("http.cors_origins has an invalid origin {:?}", origin));
            }
        }
        Ok(())
    }
}
