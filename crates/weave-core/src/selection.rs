//! The recursive result structure produced by indexing a matrix tree.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::Item;

/// One position's worth of concrete choices drawn from a matrix tree.
///
/// Product and mix nodes contribute `Tagged` pairs, merge points contribute
/// `Union` sets of alternatives, and single-choice leaves contribute bare
/// items. The structure has no independent lifetime; rendering consumes it
/// immediately.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Selection<T: Item> {
    /// A bare concrete item.
    Leaf(T),
    /// A tag paired with the subtree selected beneath it.
    Tagged(T, Box<Selection<T>>),
    /// A set of alternative subtrees, one per merged child.
    Union(BTreeSet<Selection<T>>),
}

impl<T: Item> Selection<T> {
    /// Folds this selection into a merge set, flattening nested unions one
    /// level so merged children never produce unions of unions.
    pub fn fold_into(self, parts: &mut BTreeSet<Selection<T>>) {
        match self {
            Selection::Union(members) => parts.extend(members),
            other => {
                parts.insert(other);
            }
        }
    }
}
