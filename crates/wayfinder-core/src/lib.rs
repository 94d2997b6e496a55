//! Wayfinder Core
//!
//! Deep link navigation for stack-based UIs:
//! URL → tokens + query → typed targets → replace the active stack.
//!
//! The rendering layer reads stacks, the overlay and the active key from a
//! [`Navigator`], and may register observers to hear about changes.

mod config;
mod error;
mod event;
mod navigator;
mod shared;

pub use config::Config;
pub use error::CoreError;
pub use event::NavigationEvent;
pub use navigator::Navigator;
pub use shared::SharedNavigator;

// Re-export component crates
pub use wayfinder_link::{DeepLink, LinkError, LinkParser, QueryParameters};
pub use wayfinder_resolve::{
    Resolution, ResolveError, Resolver, Routable, TargetFactory, TokenContext,
};
pub use wayfinder_stack::{NavigationKey, NavigationSnapshot, NavigationStore, SingleStack};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // A host may already have installed a subscriber
    let _ = fmt().with_env_filter(filter).with_target(true).try_init();
}
