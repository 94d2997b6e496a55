//! Positional context handed to a target factory

use wayfinder_link::QueryParameters;

/// One token seen in the context of its whole route.
///
/// Carries the complete token sequence and the shared query parameters,
/// plus the token's position so repeated tokens stay distinguishable.
#[derive(Debug, Clone, Copy)]
pub struct TokenContext<'a> {
    position: usize,
    tokens: &'a [String],
    params: &'a QueryParameters,
}

impl<'a> TokenContext<'a> {
    /// `position` must index into `tokens`; only the resolver builds these
    pub(crate) fn new(position: usize, tokens: &'a [String], params: &'a QueryParameters) -> Self {
        debug_assert!(position < tokens.len());
        Self {
            position,
            tokens,
            params,
        }
    }

    pub fn token(&self) -> &'a str {
        &self.tokens[self.position]
    }

    /// The complete, original token sequence
    pub fn tokens(&self) -> &'a [String] {
        self.tokens
    }

    pub fn params(&self) -> &'a QueryParameters {
        self.params
    }

    pub fn param(&self, name: &str) -> Option<&'a str> {
        self.params.get(name).map(String::as_str)
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_first(&self) -> bool {
        self.position == 0
    }

    pub fn is_last(&self) -> bool {
        self.position + 1 == self.tokens.len()
    }

    /// Token immediately before this one
    pub fn previous(&self) -> Option<&'a str> {
        self.position
            .checked_sub(1)
            .map(|i| self.tokens[i].as_str())
    }

    /// Token immediately after this one
    pub fn next(&self) -> Option<&'a str> {
        self.tokens.get(self.position + 1).map(String::as_str)
    }
}
