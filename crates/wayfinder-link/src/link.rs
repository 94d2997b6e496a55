//! Decomposed deep link

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::parser::LinkParser;
use crate::Result;

/// Flat query-parameter map shared by every token of one resolution pass.
///
/// Keys are unique; a repeated key keeps its last value.
pub type QueryParameters = BTreeMap<String, String>;

/// A deep link split into its ordered route tokens and query parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeepLink {
    /// Lowercased URL scheme
    scheme: String,
    /// Authority followed by every non-empty path segment, in order
    tokens: Vec<String>,
    /// Decoded query parameters (valueless ones dropped)
    params: QueryParameters,
}

impl DeepLink {
    pub fn new(scheme: impl Into<String>, tokens: Vec<String>, params: QueryParameters) -> Self {
        Self {
            scheme: scheme.into(),
            tokens,
            params,
        }
    }

    /// Parse with the default parser (any scheme, decoded segments)
    pub fn parse(input: &str) -> Result<Self> {
        LinkParser::new().parse(input)
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn params(&self) -> &QueryParameters {
        &self.params
    }

    /// Look up a single query parameter
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    pub fn into_parts(self) -> (Vec<String>, QueryParameters) {
        (self.tokens, self.params)
    }
}
