//! Record of every move explored during a search.
//!
//! Each search returns, alongside its value and principal path, a
//! [`MoveTree`] describing exactly which moves it looked at: one node per
//! explored move, keyed by the game's canonical move encoding, with that
//! move's own explored replies nested beneath it. Moves skipped by pruning
//! never enter the tree, which makes the structure a faithful audit of the
//! work a search actually did.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::game::MoveKey;

/// Recursive map from move key to the subtree explored beneath that move.
/// An explored-but-unexpanded move maps to an empty subtree.
#[derive(Clone, Default, PartialEq)]
pub struct MoveTree {
    children: FxHashMap<MoveKey, MoveTree>,
}

impl MoveTree {
    pub fn new() -> Self {
        Default::default()
    }

    /// Builds a single-child chain from an ordered key sequence:
    /// `[a, b, c]` becomes `{a: {b: {c: {}}}}`. An empty sequence gives an
    /// empty tree.
    pub fn line<I>(keys: I) -> Self
    where
        I: IntoIterator<Item = MoveKey>,
        I::IntoIter: DoubleEndedIterator,
    {
        let mut tree = MoveTree::new();
        for key in keys.into_iter().rev() {
            let mut parent = MoveTree::new();
            parent.children.insert(key, tree);
            tree = parent;
        }
        tree
    }

    /// Records `subtree` under `key`, replacing and returning any previous
    /// entry for the same key.
    pub fn insert(&mut self, key: MoveKey, subtree: MoveTree) -> Option<MoveTree> {
        self.children.insert(key, subtree)
    }

    pub fn get(&self, key: &MoveKey) -> Option<&MoveTree> {
        self.children.get(key)
    }

    pub fn contains(&self, key: &MoveKey) -> bool {
        self.children.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&MoveKey, &MoveTree)> {
        self.children.iter()
    }

    /// Total number of recorded moves, at every level.
    pub fn node_count(&self) -> usize {
        self.children.len()
            + self
                .children
                .values()
                .map(MoveTree::node_count)
                .sum::<usize>()
    }

    /// Number of recorded moves with no recorded replies.
    pub fn leaf_count(&self) -> usize {
        self.children
            .values()
            .map(|subtree| {
                if subtree.is_empty() {
                    1
                } else {
                    subtree.leaf_count()
                }
            })
            .sum()
    }
}

impl fmt::Debug for MoveTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Sorted for stable output; the backing map has no fixed order.
        let mut entries: Vec<_> = self.children.iter().collect();
        entries.sort_by(|(a, _), (b, _)| a.cmp(b));
        f.debug_map().entries(entries).finish()
    }
}

/// Builds a [`MoveTree`] literal. Keys are anything `MoveKey: From`
/// accepts; values are nested `move_tree!` bodies.
///
/// ```
/// use gametree::move_tree;
///
/// let tree = move_tree! {
///     "a2a4" => {},
///     "b2b4" => { "b7b5" => {} },
/// };
/// assert_eq!(tree.len(), 2);
/// assert_eq!(tree.node_count(), 3);
/// ```
#[macro_export]
macro_rules! move_tree {
    () => {
        $crate::move_tree::MoveTree::new()
    };
    ($($key:expr => { $($subtree:tt)* }),* $(,)?) => {{
        let mut tree = $crate::move_tree::MoveTree::new();
        $(
            tree.insert(
                $crate::game::MoveKey::from($key),
                $crate::move_tree! { $($subtree)* },
            );
        )*
        tree
    }};
}
