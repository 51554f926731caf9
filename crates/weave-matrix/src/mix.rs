use weave_core::{ErrorInfo, Item, Selection, Sequence, WeaveError};

use crate::matrix::{ensure_in_range, sort_descending};
use crate::Matrix;

/// Proportional interleaving: every position draws from exactly one child,
/// with each child's frequency proportional to its share of the total size.
///
/// Children are stored smallest-first, each paired with the combined size of
/// the remaining larger children, so indexing peels the smallest stream off
/// the front and merges it into the rest.
#[derive(Debug, Clone)]
pub struct Mix<T: Item> {
    tag: T,
    submats: Vec<(u64, Matrix<T>)>,
    size: u64,
    min_scan_len: u64,
}

impl<T: Item> Mix<T> {
    /// Creates a proportional interleaving of `children` under `tag`.
    ///
    /// Fails on an empty child list or when the sum of child sizes overflows
    /// `u64`.
    pub fn new(tag: T, children: Vec<Matrix<T>>) -> Result<Self, WeaveError> {
        if children.is_empty() {
            return Err(WeaveError::Build(
                ErrorInfo::new("empty-children", "a combining node needs at least one child")
                    .with_context("kind", "mix"),
            ));
        }
        let mut submats = Vec::with_capacity(children.len());
        let mut size: u64 = 0;
        for child in sort_descending(children) {
            let child_size = child.size();
            submats.push((size, child));
            size = size.checked_add(child_size).ok_or_else(|| {
                WeaveError::Build(
                    ErrorInfo::new("size-overflow", "sum of child sizes exceeds u64")
                        .with_context("kind", "mix"),
                )
            })?;
        }
        submats.reverse();
        // A rarer child stretches the balanced window by the inverse of its
        // share of the total.
        let min_scan_len = submats
            .iter()
            .map(|(_, child)| (size / child.size()) * child.min_scan_len())
            .max()
            .unwrap_or(1);
        Ok(Self {
            tag,
            submats,
            size,
            min_scan_len,
        })
    }

    pub(crate) fn index_wrapped(&self, position: u64) -> Selection<T> {
        Selection::Tagged(self.tag.clone(), Box::new(reduce(&self.submats, position)))
    }
}

impl<T: Item> Sequence for Mix<T> {
    type Item = T;

    fn size(&self) -> u64 {
        self.size
    }

    fn min_scan_len(&self) -> u64 {
        self.min_scan_len
    }

    fn index(&self, position: u64) -> Result<Selection<T>, WeaveError> {
        ensure_in_range(position, self.size)?;
        Ok(self.index_wrapped(position))
    }
}

/// Merges N streams two at a time: the smallest remaining stream (size
/// `lsize`) is spread through the combined rest (size `rsize >= lsize`),
/// contributing once every `rsize / lsize + 1` positions. When `lsize` does
/// not divide `rsize` the leftover tail of the window falls through to the
/// larger stream, which simply continues.
fn reduce<T: Item>(submats: &[(u64, Matrix<T>)], position: u64) -> Selection<T> {
    let (rsize, lmat) = &submats[0];
    let rsize = *rsize;
    if submats.len() == 1 {
        return lmat.index_wrapped(position);
    }
    let lsize = lmat.size();
    let window = rsize + lsize;
    let local = position % window;
    let base = position / window;
    let mult = rsize / lsize;
    let slot = mult + 1;
    let mixed = lsize * slot;
    if local < mixed {
        if local % slot == 0 {
            lmat.index_wrapped(local / slot + base * lsize)
        } else {
            reduce(
                &submats[1..],
                (local / slot) * mult + (local % slot) - 1 + base * rsize,
            )
        }
    } else {
        reduce(&submats[1..], local - lsize)
    }
}
