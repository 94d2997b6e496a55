//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Link error: {0}")]
    Link(#[from] wayfinder_link::LinkError),

    #[error("Resolve error: {0}")]
    Resolve(#[from] wayfinder_resolve::ResolveError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
