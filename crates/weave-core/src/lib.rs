#![deny(missing_docs)]
#![doc = "Core traits and data types for the weave matrix engine."]

use std::fmt;

pub mod errors;
mod selection;

pub use errors::{ErrorInfo, WeaveError};
pub use selection::Selection;

/// Bound required of the opaque item values carried by a matrix tree.
///
/// `Ord` gives selections a deterministic set order, `Display` feeds the
/// rendering utilities. The trait is blanket-implemented; callers never
/// implement it by hand.
pub trait Item: Clone + Ord + fmt::Debug + fmt::Display + Send + Sync {}

impl<T> Item for T where T: Clone + Ord + fmt::Debug + fmt::Display + Send + Sync {}

/// Describes the capability contract of a position-indexable sequence node.
///
/// A node reports a fixed total length, a minimum contiguous run length for
/// balanced sampling, and maps any in-range position to a [`Selection`].
/// `size` and `min_scan_len` are pure functions of structure, fixed at
/// construction; indexing the same position always returns the same result.
pub trait Sequence: Send + Sync {
    /// Item type carried by the selections this node produces.
    type Item: Item;

    /// Returns the total number of distinct index positions, at least 1.
    fn size(&self) -> u64;

    /// Returns the smallest contiguous run of positions guaranteed to sample
    /// the node's structure without bias toward any one child.
    fn min_scan_len(&self) -> u64;

    /// Maps a position in `0..size()` to its selection.
    ///
    /// Positions outside the range are a contract violation and produce an
    /// `index-out-of-range` error.
    fn index(&self, position: u64) -> Result<Selection<Self::Item>, WeaveError>;

    /// Returns the number of balanced windows tiling the full sequence.
    fn cyclicity(&self) -> u64 {
        self.size() / self.min_scan_len()
    }
}
