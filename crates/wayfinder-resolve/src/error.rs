//! Resolution error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("No resolvable targets in route: {0}")]
    NoResolvableTargets(String),
}
