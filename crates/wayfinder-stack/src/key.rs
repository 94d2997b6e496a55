//! Navigation keys

use std::fmt::Debug;
use std::hash::Hash;

/// Identifies one independent navigation stack (typically a tab).
///
/// The key set is finite; `all` lists every key in display order.
pub trait NavigationKey: Clone + Eq + Hash + Debug {
    fn all() -> Vec<Self>;
}

/// The single implicit key of a one-stack app
impl NavigationKey for () {
    fn all() -> Vec<Self> {
        vec![()]
    }
}
