//! Navigation store
//!
//! Owns one stack per key and the overlay slot. Not synchronized; hosts
//! that share a store across threads must serialize access themselves.

use std::collections::HashMap;

use crate::key::NavigationKey;
use crate::snapshot::NavigationSnapshot;

/// Store for a single-stack app
pub type SingleStack<T, O = T> = NavigationStore<(), T, O>;

pub struct NavigationStore<K: NavigationKey, T, O = T> {
    /// Stacks by key, created on first write
    stacks: HashMap<K, Vec<T>>,
    /// Key used by the key-omitting operations
    active: K,
    /// Single presented value shared across all keys
    overlay: Option<O>,
}

impl<K: NavigationKey, T, O> NavigationStore<K, T, O> {
    pub fn new(active: K) -> Self {
        Self {
            stacks: HashMap::new(),
            active,
            overlay: None,
        }
    }

    // === Stack operations ===

    /// Append a target, creating the stack if needed
    pub fn push(&mut self, key: &K, target: T) {
        self.stacks.entry(key.clone()).or_default().push(target);
    }

    /// Remove the last target; `None` on an empty stack
    pub fn pop_last(&mut self, key: &K) -> Option<T> {
        self.stacks.get_mut(key).and_then(Vec::pop)
    }

    /// Pop up to `count` targets, returning how many were removed
    pub fn pop_count(&mut self, key: &K, count: usize) -> usize {
        match self.stacks.get_mut(key) {
            Some(stack) => {
                let removed = count.min(stack.len());
                stack.truncate(stack.len() - removed);
                removed
            }
            None => 0,
        }
    }

    /// Empty the stack for `key`
    pub fn clear_to_root(&mut self, key: &K) {
        if let Some(stack) = self.stacks.get_mut(key) {
            stack.clear();
        }
    }

    /// Overwrite the stack for `key` with exactly `targets`
    pub fn replace(&mut self, key: &K, targets: Vec<T>) {
        self.stacks.insert(key.clone(), targets);
    }

    /// Empty every stack, returning how many were non-empty.
    /// The overlay is left alone.
    pub fn clear_all(&mut self) -> usize {
        let mut cleared = 0;
        for stack in self.stacks.values_mut() {
            if !stack.is_empty() {
                stack.clear();
                cleared += 1;
            }
        }
        cleared
    }

    // === Reads ===

    /// Current stack for `key`, empty if never written
    pub fn stack(&self, key: &K) -> &[T] {
        self.stacks.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn top(&self, key: &K) -> Option<&T> {
        self.stack(key).last()
    }

    pub fn depth(&self, key: &K) -> usize {
        self.stack(key).len()
    }

    pub fn is_root(&self, key: &K) -> bool {
        self.stack(key).is_empty()
    }

    /// Every key's stack, in `NavigationKey::all` order
    pub fn stacks(&self) -> impl Iterator<Item = (K, &[T])> + '_ {
        K::all().into_iter().map(move |key| {
            let stack = self.stack(&key);
            (key, stack)
        })
    }

    // === Active key ===

    pub fn active_key(&self) -> &K {
        &self.active
    }

    /// Switch the active key, returning the previous one.
    /// Stack contents are untouched.
    pub fn select(&mut self, key: K) -> K {
        tracing::debug!(from = ?self.active, to = ?key, "Active key switched");
        std::mem::replace(&mut self.active, key)
    }

    pub fn active_stack(&self) -> &[T] {
        self.stack(&self.active)
    }

    pub fn push_active(&mut self, target: T) {
        let key = self.active.clone();
        self.push(&key, target);
    }

    pub fn pop_active(&mut self) -> Option<T> {
        let key = self.active.clone();
        self.pop_last(&key)
    }

    pub fn clear_active(&mut self) {
        let key = self.active.clone();
        self.clear_to_root(&key);
    }

    pub fn replace_active(&mut self, targets: Vec<T>) {
        let key = self.active.clone();
        self.replace(&key, targets);
    }

    // === Overlay ===

    pub fn overlay(&self) -> Option<&O> {
        self.overlay.as_ref()
    }

    /// Present `value`, silently replacing (and returning) any current one
    pub fn present_overlay(&mut self, value: O) -> Option<O> {
        let previous = self.overlay.replace(value);
        tracing::debug!(replaced = previous.is_some(), "Overlay presented");
        previous
    }

    pub fn dismiss_overlay(&mut self) -> Option<O> {
        let previous = self.overlay.take();
        if previous.is_some() {
            tracing::debug!("Overlay dismissed");
        }
        previous
    }

    // === Snapshots ===

    pub fn snapshot(&self) -> NavigationSnapshot<K, T, O>
    where
        T: Clone,
        O: Clone,
    {
        let mut keys = K::all();
        keys.retain(|key| self.stacks.contains_key(key));
        // Keys missing from `all` still get captured, after the declared ones
        let declared = keys.clone();
        keys.extend(
            self.stacks
                .keys()
                .filter(|key| !declared.contains(key))
                .cloned(),
        );

        let stacks = keys
            .into_iter()
            .map(|key| {
                let stack = self.stack(&key).to_vec();
                (key, stack)
            })
            .collect();

        NavigationSnapshot {
            active: self.active.clone(),
            stacks,
            overlay: self.overlay.clone(),
        }
    }

    /// Replace the whole store state with `snapshot`
    pub fn restore(&mut self, snapshot: NavigationSnapshot<K, T, O>) {
        self.stacks = snapshot.stacks.into_iter().collect();
        self.active = snapshot.active;
        self.overlay = snapshot.overlay;

        tracing::debug!(
            active = ?self.active,
            stacks = self.stacks.len(),
            "Navigation state restored"
        );
    }
}

impl<K: NavigationKey + Default, T, O> Default for NavigationStore<K, T, O> {
    fn default() -> Self {
        Self::new(K::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
    enum Tab {
        Home,
        Search,
        Profile,
    }

    impl NavigationKey for Tab {
        fn all() -> Vec<Self> {
            vec![Tab::Home, Tab::Search, Tab::Profile]
        }
    }

    #[test]
    fn test_push_and_pop() {
        let mut store: SingleStack<&str> = SingleStack::default();
        store.push(&(), "a");
        store.push(&(), "b");
        assert_eq!(store.stack(&()), ["a", "b"]);
        assert_eq!(store.top(&()), Some(&"b"));

        assert_eq!(store.pop_last(&()), Some("b"));
        assert_eq!(store.stack(&()), ["a"]);
    }

    #[test]
    fn test_pop_and_clear_on_empty_are_noops() {
        let mut store: SingleStack<&str> = SingleStack::default();
        assert_eq!(store.pop_last(&()), None);
        assert!(store.is_root(&()));

        store.clear_to_root(&());
        store.clear_to_root(&());
        assert!(store.stack(&()).is_empty());

        store.push(&(), "a");
        store.clear_to_root(&());
        store.clear_to_root(&());
        assert!(store.is_root(&()));
        assert_eq!(store.pop_last(&()), None);
    }

    #[test]
    fn test_pop_count_saturates() {
        let mut store: SingleStack<u32> = SingleStack::default();
        store.replace(&(), vec![1, 2, 3]);

        assert_eq!(store.pop_count(&(), 2), 2);
        assert_eq!(store.stack(&()), [1]);
        assert_eq!(store.pop_count(&(), 5), 1);
        assert_eq!(store.pop_count(&(), 5), 0);
        assert_eq!(store.depth(&()), 0);
    }

    #[test]
    fn test_replace_overwrites() {
        let mut store: SingleStack<&str> = SingleStack::default();
        store.push(&(), "a");
        store.push(&(), "b");

        store.replace(&(), vec!["c"]);
        assert_eq!(store.stack(&()), ["c"]);
    }

    #[test]
    fn test_per_key_isolation() {
        let mut store: NavigationStore<Tab, &str> = NavigationStore::new(Tab::Home);
        store.push(&Tab::Search, "query");
        store.push(&Tab::Home, "feed");
        store.push(&Tab::Home, "post");

        assert_eq!(store.stack(&Tab::Search), ["query"]);
        assert_eq!(store.stack(&Tab::Home), ["feed", "post"]);
        assert!(store.stack(&Tab::Profile).is_empty());

        store.clear_to_root(&Tab::Home);
        assert_eq!(store.stack(&Tab::Search), ["query"]);
    }

    #[test]
    fn test_select_keeps_stacks() {
        let mut store: NavigationStore<Tab, &str> = NavigationStore::new(Tab::Home);
        store.push_active("feed");

        assert_eq!(store.select(Tab::Profile), Tab::Home);
        assert_eq!(store.active_key(), &Tab::Profile);
        assert!(store.active_stack().is_empty());

        store.push_active("settings");
        assert_eq!(store.stack(&Tab::Home), ["feed"]);
        assert_eq!(store.stack(&Tab::Profile), ["settings"]);

        store.replace_active(vec!["account"]);
        assert_eq!(store.pop_active(), Some("account"));
        store.clear_active();
        assert!(store.active_stack().is_empty());
        assert_eq!(store.stack(&Tab::Home), ["feed"]);
    }

    #[test]
    fn test_overlay_single_slot() {
        let mut store: SingleStack<&str, &str> = SingleStack::default();
        assert_eq!(store.present_overlay("login"), None);
        assert_eq!(store.present_overlay("share"), Some("login"));
        assert_eq!(store.overlay(), Some(&"share"));

        assert_eq!(store.dismiss_overlay(), Some("share"));
        assert_eq!(store.dismiss_overlay(), None);
    }

    #[test]
    fn test_overlay_independent_of_stacks() {
        let mut store: NavigationStore<Tab, &str> = NavigationStore::new(Tab::Home);
        store.push(&Tab::Home, "feed");
        store.present_overlay("compose");

        store.push(&Tab::Home, "post");
        store.pop_last(&Tab::Home);
        store.replace(&Tab::Search, vec!["results"]);
        store.clear_all();
        store.select(Tab::Search);
        assert_eq!(store.overlay(), Some(&"compose"));

        store.push(&Tab::Home, "feed");
        store.dismiss_overlay();
        assert_eq!(store.stack(&Tab::Home), ["feed"]);
    }

    #[test]
    fn test_clear_all_counts_non_empty_stacks() {
        let mut store: NavigationStore<Tab, &str> = NavigationStore::new(Tab::Home);
        assert_eq!(store.clear_all(), 0);

        store.push(&Tab::Home, "feed");
        store.push(&Tab::Search, "query");
        store.replace(&Tab::Profile, Vec::new());
        assert_eq!(store.clear_all(), 2);
        assert_eq!(store.clear_all(), 0);
        assert!(store.stacks().all(|(_, stack)| stack.is_empty()));
    }

    #[test]
    fn test_stacks_in_key_order() {
        let mut store: NavigationStore<Tab, &str> = NavigationStore::new(Tab::Home);
        store.push(&Tab::Profile, "me");

        let stacks: Vec<_> = store.stacks().collect();
        assert_eq!(stacks.len(), 3);
        assert_eq!(stacks[0].0, Tab::Home);
        assert!(stacks[0].1.is_empty());
        assert_eq!(stacks[2], (Tab::Profile, &["me"][..]));
    }

    #[test]
    fn test_snapshot_restore() {
        let mut store: NavigationStore<Tab, String> = NavigationStore::new(Tab::Home);
        store.push(&Tab::Search, "query".to_string());
        store.push(&Tab::Home, "feed".to_string());
        store.present_overlay("share".to_string());
        store.select(Tab::Search);

        let snapshot = store.snapshot();
        assert_eq!(snapshot.stacks[0].0, Tab::Home);
        assert_eq!(snapshot.stack(&Tab::Search), ["query".to_string()]);

        let json = serde_json::to_string(&snapshot).unwrap();
        let decoded: NavigationSnapshot<Tab, String, String> = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, snapshot);

        let mut restored: NavigationStore<Tab, String> = NavigationStore::new(Tab::Home);
        restored.push(&Tab::Profile, "stale".to_string());
        restored.restore(decoded);

        assert_eq!(restored.active_key(), &Tab::Search);
        assert_eq!(restored.stack(&Tab::Home), ["feed".to_string()]);
        assert!(restored.stack(&Tab::Profile).is_empty());
        assert_eq!(restored.overlay(), Some(&"share".to_string()));
    }
}
