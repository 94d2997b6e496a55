//! Point-in-time copy of a navigation store

use serde::{Deserialize, Serialize};

/// Every written stack, the active key and the overlay.
///
/// Stacks are listed in `NavigationKey::all` order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationSnapshot<K, T, O> {
    pub active: K,
    pub stacks: Vec<(K, Vec<T>)>,
    pub overlay: Option<O>,
}

impl<K: PartialEq, T, O> NavigationSnapshot<K, T, O> {
    pub fn stack(&self, key: &K) -> &[T] {
        self.stacks
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, stack)| stack.as_slice())
            .unwrap_or(&[])
    }
}
