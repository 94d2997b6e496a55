//! Link decomposition error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LinkError {
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Empty route: {0}")]
    EmptyRoute(String),

    #[error("Scheme not allowed: {0}")]
    SchemeNotAllowed(String),
}
