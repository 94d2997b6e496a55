//! Wayfinder Link Decomposition
//!
//! Turns a deep link of the form
//! `scheme://token0/token1/.../tokenN?key1=val1&key2=val2`
//! into an ordered token sequence plus a flat query-parameter map.
//!
//! The authority is always the first token. No semantic validation is done
//! here; any non-empty string is a legal token.

mod error;
mod link;
mod parser;

pub use error::LinkError;
pub use link::{DeepLink, QueryParameters};
pub use parser::LinkParser;

pub type Result<T> = std::result::Result<T, LinkError>;
