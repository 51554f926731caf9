use weave_core::{Item, Selection, Sequence, WeaveError};

use crate::matrix::ensure_in_range;

/// Leaf node wrapping exactly one concrete item.
#[derive(Debug, Clone)]
pub struct Single<T: Item> {
    item: T,
}

impl<T: Item> Single<T> {
    /// Creates a leaf around the given item.
    pub fn new(item: T) -> Self {
        Self { item }
    }

    /// Returns the wrapped item.
    pub fn item(&self) -> &T {
        &self.item
    }

    pub(crate) fn index_wrapped(&self, _position: u64) -> Selection<T> {
        Selection::Leaf(self.item.clone())
    }
}

impl<T: Item> Sequence for Single<T> {
    type Item = T;

    fn size(&self) -> u64 {
        1
    }

    fn min_scan_len(&self) -> u64 {
        1
    }

    fn index(&self, position: u64) -> Result<Selection<T>, WeaveError> {
        ensure_in_range(position, self.size())?;
        Ok(self.index_wrapped(position))
    }
}
