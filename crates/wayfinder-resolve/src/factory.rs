//! Target factory contract
//!
//! A factory must be pure: same context in, same answer out. Expected
//! matching order:
//! 1. `(previous, current)` pair rules
//! 2. `current` alone
//! 3. `None` for tokens that are only context markers

use crate::context::TokenContext;

/// Produces a target for one token, or `None` for a structural token
pub trait TargetFactory<T> {
    fn resolve(&self, cx: &TokenContext<'_>) -> Option<T>;
}

impl<T, F> TargetFactory<T> for F
where
    F: Fn(&TokenContext<'_>) -> Option<T>,
{
    fn resolve(&self, cx: &TokenContext<'_>) -> Option<T> {
        self(cx)
    }
}

/// A target type that knows how to resolve itself from a token
pub trait Routable: Sized {
    fn route(cx: &TokenContext<'_>) -> Option<Self>;
}
