//! Navigator: deep link resolution on top of the navigation store
//!
//! `navigate` runs decomposition, resolution and a wholesale replace of
//! the active stack. Any failure leaves the store exactly as it was.

use wayfinder_link::LinkParser;
use wayfinder_resolve::{Resolver, Routable};
use wayfinder_stack::{NavigationKey, NavigationSnapshot, NavigationStore};

use crate::config::Config;
use crate::event::NavigationEvent;
use crate::Result;

type Observer<K> = Box<dyn Fn(&NavigationEvent<K>) + Send + Sync>;

pub struct Navigator<K: NavigationKey, T, O = T> {
    /// Configuration
    config: Config,
    /// Deep link decomposer built from the config
    parser: LinkParser,
    /// Token → target resolution
    resolver: Resolver<T>,
    /// Stacks, active key and overlay
    store: NavigationStore<K, T, O>,
    /// Change listeners, called in registration order
    observers: Vec<Observer<K>>,
}

impl<K: NavigationKey, T, O> Navigator<K, T, O> {
    pub fn new(resolver: Resolver<T>, active: K) -> Self {
        Self::with_config(Config::default(), resolver, active)
    }

    pub fn with_config(config: Config, resolver: Resolver<T>, active: K) -> Self {
        let parser = config.link_parser();

        Self {
            config,
            parser,
            resolver,
            store: NavigationStore::new(active),
            observers: Vec::new(),
        }
    }

    /// Navigator whose targets resolve themselves
    pub fn routable(active: K) -> Self
    where
        T: Routable + 'static,
    {
        Self::new(Resolver::routable(), active)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Register a change listener
    pub fn observe<F>(&mut self, observer: F)
    where
        F: Fn(&NavigationEvent<K>) + Send + Sync + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    fn emit(&self, event: NavigationEvent<K>) {
        for observer in &self.observers {
            observer(&event);
        }
    }

    // === Deep links ===

    /// Resolve `url` into the active stack. Returns `false` and leaves all
    /// state untouched if the link cannot be resolved.
    pub fn navigate(&mut self, url: &str) -> bool {
        let key = self.store.active_key().clone();
        self.navigate_in(&key, url)
    }

    /// Resolve `url` into the stack for `key` without changing the active key
    pub fn navigate_in(&mut self, key: &K, url: &str) -> bool {
        match self.try_navigate_in(key, url) {
            Ok(_) => true,
            Err(e) => {
                tracing::debug!(key = ?key, url = %url, error = %e, "Navigation failed");
                false
            }
        }
    }

    /// Like `navigate`, but reports why a link failed. Returns the new depth.
    pub fn try_navigate(&mut self, url: &str) -> Result<usize> {
        let key = self.store.active_key().clone();
        self.try_navigate_in(&key, url)
    }

    pub fn try_navigate_in(&mut self, key: &K, url: &str) -> Result<usize> {
        let targets = self.resolve(url)?;
        let depth = targets.len();

        self.store.replace(key, targets);

        tracing::info!(key = ?key, url = %url, depth, "Navigated to deep link");
        self.emit(NavigationEvent::Replaced {
            key: key.clone(),
            depth,
        });

        Ok(depth)
    }

    /// Resolve `url` without touching any state
    pub fn resolve(&self, url: &str) -> Result<Vec<T>> {
        let link = self.parser.parse(url)?;
        let resolution = self.resolver.resolve(&link)?;

        tracing::trace!(
            url = %url,
            targets = resolution.len(),
            skipped = resolution.skipped(),
            "Resolved deep link"
        );

        Ok(resolution.into_targets())
    }

    // === Stack operations ===

    pub fn push(&mut self, key: &K, target: T) {
        self.store.push(key, target);
        self.emit(NavigationEvent::Pushed {
            key: key.clone(),
            depth: self.store.depth(key),
        });
    }

    pub fn push_active(&mut self, target: T) {
        let key = self.store.active_key().clone();
        self.push(&key, target);
    }

    pub fn pop_last(&mut self, key: &K) -> Option<T> {
        let popped = self.store.pop_last(key);
        if popped.is_some() {
            self.emit(NavigationEvent::Popped {
                key: key.clone(),
                count: 1,
            });
        }
        popped
    }

    pub fn pop_active(&mut self) -> Option<T> {
        let key = self.store.active_key().clone();
        self.pop_last(&key)
    }

    pub fn pop_count(&mut self, key: &K, count: usize) -> usize {
        let removed = self.store.pop_count(key, count);
        if removed > 0 {
            self.emit(NavigationEvent::Popped {
                key: key.clone(),
                count: removed,
            });
        }
        removed
    }

    pub fn clear_to_root(&mut self, key: &K) {
        if self.store.is_root(key) {
            return;
        }
        self.store.clear_to_root(key);
        self.emit(NavigationEvent::Cleared { key: key.clone() });
    }

    pub fn clear_active(&mut self) {
        let key = self.store.active_key().clone();
        self.clear_to_root(&key);
    }

    pub fn clear_all(&mut self) {
        if self.store.clear_all() > 0 {
            self.emit(NavigationEvent::ClearedAll);
        }
    }

    pub fn replace(&mut self, key: &K, targets: Vec<T>) {
        let depth = targets.len();
        self.store.replace(key, targets);
        self.emit(NavigationEvent::Replaced {
            key: key.clone(),
            depth,
        });
    }

    /// Switch the active key, returning the previous one
    pub fn select(&mut self, key: K) -> K {
        let from = self.store.select(key.clone());
        if from != key {
            self.emit(NavigationEvent::Selected {
                from: from.clone(),
                to: key,
            });
        }
        from
    }

    // === Overlay ===

    pub fn present_overlay(&mut self, value: O) -> Option<O> {
        let previous = self.store.present_overlay(value);
        self.emit(NavigationEvent::OverlayPresented {
            replaced: previous.is_some(),
        });
        previous
    }

    pub fn dismiss_overlay(&mut self) -> Option<O> {
        let previous = self.store.dismiss_overlay();
        if previous.is_some() {
            self.emit(NavigationEvent::OverlayDismissed);
        }
        previous
    }

    // === Reads ===

    pub fn store(&self) -> &NavigationStore<K, T, O> {
        &self.store
    }

    pub fn stack(&self, key: &K) -> &[T] {
        self.store.stack(key)
    }

    pub fn active_stack(&self) -> &[T] {
        self.store.active_stack()
    }

    pub fn active_key(&self) -> &K {
        self.store.active_key()
    }

    pub fn overlay(&self) -> Option<&O> {
        self.store.overlay()
    }

    // === Snapshots ===

    pub fn snapshot(&self) -> NavigationSnapshot<K, T, O>
    where
        T: Clone,
        O: Clone,
    {
        self.store.snapshot()
    }

    pub fn restore(&mut self, snapshot: NavigationSnapshot<K, T, O>) {
        self.store.restore(snapshot);
        self.emit(NavigationEvent::Restored);
    }
}

impl<T> Navigator<(), T> {
    /// Navigator for a single-stack app
    pub fn single(resolver: Resolver<T>) -> Self {
        Self::new(resolver, ())
    }
}
