//! Error classification shared by every subsystem
//!
//! Callers need to tell three outcomes apart:
//! - the request itself was unusable (Input)
//! - a collaborator such as the sensitivity table failed (Collaborator)
//! - no treatment exists, which is not an error at all and is never
//!   represented here

use std::fmt;

/// Which side of the engine boundary a failure belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// The caller's request was rejected before any decision was computed
    Input,
    /// Table missing, malformed, or a lookup key absent
    Collaborator,
}

impl ErrorClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorClass::Input => "INPUT",
            ErrorClass::Collaborator => "COLLABORATOR",
        }
    }
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
