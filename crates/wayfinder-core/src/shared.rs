//! Thread-safe navigator wrapper
//!
//! The navigator itself is single-threaded; this wrapper serializes access
//! for hosts that reach it from more than one thread.

use parking_lot::RwLock;
use std::sync::Arc;

use wayfinder_stack::NavigationKey;

use crate::navigator::Navigator;

pub struct SharedNavigator<K: NavigationKey, T, O = T> {
    navigator: Arc<RwLock<Navigator<K, T, O>>>,
}

impl<K: NavigationKey, T, O> SharedNavigator<K, T, O> {
    pub fn new(navigator: Navigator<K, T, O>) -> Self {
        Self {
            navigator: Arc::new(RwLock::new(navigator)),
        }
    }

    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Navigator<K, T, O>) -> R,
    {
        f(&self.navigator.read())
    }

    pub fn with_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Navigator<K, T, O>) -> R,
    {
        f(&mut self.navigator.write())
    }

    pub fn navigate(&self, url: &str) -> bool {
        self.navigator.write().navigate(url)
    }
}

impl<K: NavigationKey, T, O> Clone for SharedNavigator<K, T, O> {
    fn clone(&self) -> Self {
        Self {
            navigator: Arc::clone(&self.navigator),
        }
    }
}
