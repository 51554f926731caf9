use weave_core::{ErrorInfo, Item, Selection, Sequence, WeaveError};

use crate::matrix::ensure_in_range;
use crate::Matrix;

/// Repeats one child sequence a fixed number of times, cycling the inner
/// position. Repetition stretches the total length without changing local
/// balance, so `min_scan_len` is inherited from the child.
#[derive(Debug, Clone)]
pub struct Repeat<T: Item> {
    child: Box<Matrix<T>>,
    size: u64,
}

impl<T: Item> Repeat<T> {
    /// Creates a node repeating `child` `count` times. A zero count is a
    /// construction error.
    pub fn new(count: u64, child: Matrix<T>) -> Result<Self, WeaveError> {
        if count == 0 {
            return Err(WeaveError::Build(
                ErrorInfo::new("zero-repeat", "repeat count must be at least 1")
                    .with_context("kind", "repeat"),
            ));
        }
        let size = child.size().checked_mul(count).ok_or_else(|| {
            WeaveError::Build(
                ErrorInfo::new("size-overflow", "repeated size exceeds u64")
                    .with_context("kind", "repeat")
                    .with_context("count", count.to_string()),
            )
        })?;
        Ok(Self {
            child: Box::new(child),
            size,
        })
    }

    pub(crate) fn index_wrapped(&self, position: u64) -> Selection<T> {
        self.child.index_wrapped(position % self.child.size())
    }
}

impl<T: Item> Sequence for Repeat<T> {
    type Item = T;

    fn size(&self) -> u64 {
        self.size
    }

    fn min_scan_len(&self) -> u64 {
        self.child.min_scan_len()
    }

    fn index(&self, position: u64) -> Result<Selection<T>, WeaveError> {
        ensure_in_range(position, self.size)?;
        Ok(self.index_wrapped(position))
    }
}
