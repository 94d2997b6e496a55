//! Wayfinder Navigation Stacks
//!
//! One stack of resolved targets per navigation key, plus a single overlay
//! slot shared across keys:
//! - a single-stack app uses the implicit `()` key ([`SingleStack`])
//! - a tabbed app supplies its own finite key type
//!
//! Every operation is infallible. Popping or clearing an empty stack is a
//! no-op, and stacks are created lazily on first write.

mod key;
mod snapshot;
mod store;

pub use key::NavigationKey;
pub use snapshot::NavigationSnapshot;
pub use store::{NavigationStore, SingleStack};
