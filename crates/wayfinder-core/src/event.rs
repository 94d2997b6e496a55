//! Navigation change notifications

/// A state change that actually happened on a [`crate::Navigator`].
///
/// Carries keys and depths only; observers read targets from the navigator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationEvent<K> {
    Pushed { key: K, depth: usize },
    Popped { key: K, count: usize },
    Cleared { key: K },
    ClearedAll,
    Replaced { key: K, depth: usize },
    Selected { from: K, to: K },
    OverlayPresented { replaced: bool },
    OverlayDismissed,
    Restored,
}

impl<K> NavigationEvent<K> {
    /// Key whose stack changed, if the event concerns one stack
    pub fn key(&self) -> Option<&K> {
        match self {
            NavigationEvent::Pushed { key, .. }
            | NavigationEvent::Popped { key, .. }
            | NavigationEvent::Cleared { key }
            | NavigationEvent::Replaced { key, .. } => Some(key),
            _ => None,
        }
    }

    pub fn is_overlay(&self) -> bool {
        matches!(
            self,
            NavigationEvent::OverlayPresented { .. } | NavigationEvent::OverlayDismissed
        )
    }
}
