use std::collections::BTreeSet;

use weave_core::{ErrorInfo, Item, Selection, Sequence, WeaveError};

use crate::matrix::{ensure_in_range, sort_descending};
use crate::Matrix;

/// Cartesian combination: every position draws one item from each child.
///
/// Children are stored smallest-first, each paired with the product of the
/// remaining larger children's sizes, so indexing can peel one child at a
/// time against the combined rest.
#[derive(Debug, Clone)]
pub struct Product<T: Item> {
    tag: T,
    submats: Vec<(u64, Matrix<T>)>,
    size: u64,
    min_scan_len: u64,
}

impl<T: Item> Product<T> {
    /// Creates a cartesian combination of `children` under `tag`.
    ///
    /// Fails on an empty child list or when the product of child sizes
    /// overflows `u64`.
    pub fn new(tag: T, children: Vec<Matrix<T>>) -> Result<Self, WeaveError> {
        if children.is_empty() {
            return Err(WeaveError::Build(
                ErrorInfo::new("empty-children", "a combining node needs at least one child")
                    .with_context("kind", "product"),
            ));
        }
        let mut submats = Vec::with_capacity(children.len());
        let mut size: u64 = 1;
        for child in sort_descending(children) {
            let child_size = child.size();
            submats.push((size, child));
            size = size.checked_mul(child_size).ok_or_else(|| {
                WeaveError::Build(
                    ErrorInfo::new("size-overflow", "product of child sizes exceeds u64")
                        .with_context("kind", "product"),
                )
            })?;
        }
        submats.reverse();
        let min_scan_len = submats
            .iter()
            .map(|(_, child)| child.min_scan_len())
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

impl<T: Item> Sequence for Product<T> {
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

/// Reduces the N-dimensional combination to repeated two-way pairings.
///
/// Pairing a child of size `lsize` against the combined rest of size `rsize`
/// by plain modulo would repeat with period `lcm(lsize, rsize)`, missing
/// combinations whenever `gcd(lsize, rsize) > 1`. Shifting the child by one
/// extra step each time a period completes makes each of the `gcd` periods
/// distinct, so all `lsize * rsize` pairings appear before the joint pattern
/// repeats.
fn reduce<T: Item>(submats: &[(u64, Matrix<T>)], position: u64) -> Selection<T> {
    let (rsize, lmat) = &submats[0];
    let rsize = *rsize;
    if submats.len() == 1 {
        return lmat.index_wrapped(position);
    }
    let lsize = lmat.size();
    let cycles = gcd(rsize, lsize);
    let period = rsize / cycles * lsize;
    let offset = (position / period) % cycles;

    let mut parts = BTreeSet::new();
    lmat.index_wrapped(position + offset).fold_into(&mut parts);
    reduce(&submats[1..], position).fold_into(&mut parts);
    Selection::Union(parts)
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let rem = a % b;
        a = b;
        b = rem;
    }
    a
}
