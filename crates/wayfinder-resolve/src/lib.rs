//! Wayfinder Resolution Pipeline
//!
//! Drives an application-supplied target factory over every token of a
//! decomposed deep link:
//! - the factory sees each token together with the complete token sequence
//!   and the shared query parameters, so `detail` after `users` can resolve
//!   differently from `detail` after `posts`
//! - tokens the factory declines are structural and contribute nothing
//! - only an entirely empty result is a failure

mod context;
mod error;
mod factory;
mod resolver;

pub use context::TokenContext;
pub use error::ResolveError;
pub use factory::{Routable, TargetFactory};
pub use resolver::{Resolution, Resolver};

pub type Result<T> = std::result::Result<T, ResolveError>;
