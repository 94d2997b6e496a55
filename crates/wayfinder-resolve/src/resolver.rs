//! Resolution pipeline

use wayfinder_link::{DeepLink, QueryParameters};

use crate::context::TokenContext;
use crate::error::ResolveError;
use crate::factory::{Routable, TargetFactory};
use crate::Result;

/// Outcome of a successful resolution pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution<T> {
    /// Resolved targets in token order, never empty
    targets: Vec<T>,
    /// Tokens the factory treated as structural
    skipped: usize,
}

impl<T> Resolution<T> {
    pub fn targets(&self) -> &[T] {
        &self.targets
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn into_targets(self) -> Vec<T> {
        self.targets
    }
}

pub struct Resolver<T> {
    factory: Box<dyn TargetFactory<T> + Send + Sync>,
}

impl<T: 'static> Resolver<T> {
    pub fn new<F>(factory: F) -> Self
    where
        F: TargetFactory<T> + Send + Sync + 'static,
    {
        Self {
            factory: Box::new(factory),
        }
    }

    /// Resolver backed by a plain function or closure
    pub fn with_fn<F>(factory: F) -> Self
    where
        F: Fn(&TokenContext<'_>) -> Option<T> + Send + Sync + 'static,
    {
        Self::new(factory)
    }

    /// Resolver backed by the target type's own `Routable` impl
    pub fn routable() -> Self
    where
        T: Routable,
    {
        Self::with_fn(route_with::<T>)
    }
}

fn route_with<T: Routable>(cx: &TokenContext<'_>) -> Option<T> {
    T::route(cx)
}

impl<T> Resolver<T> {
    pub fn resolve(&self, link: &DeepLink) -> Result<Resolution<T>> {
        self.resolve_parts(link.tokens(), link.params())
    }

    /// Run the factory over every token; fails only if nothing resolved
    pub fn resolve_parts(
        &self,
        tokens: &[String],
        params: &QueryParameters,
    ) -> Result<Resolution<T>> {
        let mut targets = Vec::with_capacity(tokens.len());
        let mut skipped = 0;

        for position in 0..tokens.len() {
            let cx = TokenContext::new(position, tokens, params);
            match self.factory.resolve(&cx) {
                Some(target) => targets.push(target),
                None => {
                    tracing::trace!(
                        position,
                        token = %cx.token(),
                        "Structural token, no target"
                    );
                    skipped += 1;
                }
            }
        }

        if targets.is_empty() {
            return Err(ResolveError::NoResolvableTargets(tokens.join("/")));
        }

        Ok(Resolution { targets, skipped })
    }
}
