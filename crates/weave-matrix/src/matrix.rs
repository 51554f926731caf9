use weave_core::{ErrorInfo, Item, Selection, Sequence, WeaveError};

use crate::{Mix, Product, Repeat, Single};

/// A node in a matrix tree, closed over the four node kinds.
///
/// Trees are built bottom-up once, never mutated, and own their children
/// exclusively. All structural quantities (`size`, `min_scan_len`) are fixed
/// at construction.
#[derive(Debug, Clone)]
pub enum Matrix<T: Item> {
    /// A leaf wrapping exactly one concrete item.
    Single(Single<T>),
    /// A child sequence repeated a fixed number of times.
    Repeat(Repeat<T>),
    /// A cartesian combination drawing one item from every child per position.
    Product(Product<T>),
    /// A proportional interleaving drawing from exactly one child per position.
    Mix(Mix<T>),
}

impl<T: Item> Matrix<T> {
    /// Builds a leaf node around one concrete item.
    pub fn single(item: T) -> Self {
        Matrix::Single(Single::new(item))
    }

    /// Builds a node repeating `child` the given number of times.
    pub fn repeat(count: u64, child: Matrix<T>) -> Result<Self, WeaveError> {
        Ok(Matrix::Repeat(Repeat::new(count, child)?))
    }

    /// Builds a cartesian combination of the given children under a tag.
    pub fn product(tag: T, children: Vec<Matrix<T>>) -> Result<Self, WeaveError> {
        Ok(Matrix::Product(Product::new(tag, children)?))
    }

    /// Builds a proportional interleaving of the given children under a tag.
    pub fn mix(tag: T, children: Vec<Matrix<T>>) -> Result<Self, WeaveError> {
        Ok(Matrix::Mix(Mix::new(tag, children)?))
    }

    /// Maps an arbitrary position into the node's own period.
    ///
    /// The combining algorithms shift child positions past `size` during
    /// window arithmetic; every node kind absorbs that by wrapping through
    /// its own structure. The public [`Sequence::index`] contract stays
    /// strict: only this internal path tolerates out-of-range positions.
    pub(crate) fn index_wrapped(&self, position: u64) -> Selection<T> {
        match self {
            Matrix::Single(node) => node.index_wrapped(position),
            Matrix::Repeat(node) => node.index_wrapped(position),
            Matrix::Product(node) => node.index_wrapped(position),
            Matrix::Mix(node) => node.index_wrapped(position),
        }
    }
}

impl<T: Item> Sequence for Matrix<T> {
    type Item = T;

    fn size(&self) -> u64 {
        match self {
            Matrix::Single(node) => node.size(),
            Matrix::Repeat(node) => node.size(),
            Matrix::Product(node) => node.size(),
            Matrix::Mix(node) => node.size(),
        }
    }

    fn min_scan_len(&self) -> u64 {
        match self {
            Matrix::Single(node) => node.min_scan_len(),
            Matrix::Repeat(node) => node.min_scan_len(),
            Matrix::Product(node) => node.min_scan_len(),
            Matrix::Mix(node) => node.min_scan_len(),
        }
    }

    fn index(&self, position: u64) -> Result<Selection<T>, WeaveError> {
        ensure_in_range(position, self.size())?;
        Ok(self.index_wrapped(position))
    }
}

/// Rejects positions outside `0..size` with an `index-out-of-range` error.
pub(crate) fn ensure_in_range(position: u64, size: u64) -> Result<(), WeaveError> {
    if position < size {
        return Ok(());
    }
    Err(WeaveError::Index(
        ErrorInfo::new("index-out-of-range", "position is past the end of the sequence")
            .with_context("position", position.to_string())
            .with_context("size", size.to_string()),
    ))
}

/// Orders children by descending size, breaking ties by original position
/// descending. Both combining nodes rely on this order when pairing each
/// child with its weight or offset.
pub(crate) fn sort_descending<T: Item>(children: Vec<Matrix<T>>) -> Vec<Matrix<T>> {
    let mut ranked: Vec<(u64, usize, Matrix<T>)> = children
        .into_iter()
        .enumerate()
        .map(|(position, child)| (child.size(), position, child))
        .collect();
    ranked.sort_by(|a, b| (b.0, b.1).cmp(&(a.0, a.1)));
    ranked.into_iter().map(|(_, _, child)| child).collect()
}
