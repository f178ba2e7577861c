//! Blocks of consecutive layers and how a sweep is cut into them.
//!
//! A `RowBlock` covers the layer interval [start, end) together with its
//! summary Σ[start,end).

use std::ops::Range;

/// Summary for a contiguous interval of layers [start, end).
#[derive(Debug, Clone)]
pub struct RowBlock<S> {
    /// First layer index covered.
    pub start: usize,
    /// One past the last layer index covered.
    pub end: usize,
    pub summary: S,
}

impl<S> RowBlock<S> {
    /// Number of forward steps in the block.
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `other` starts where this block ends.
    #[inline]
    pub fn is_followed_by<T>(&self, other: &RowBlock<T>) -> bool {
        self.end == other.start
    }
}

/// Heuristic block size for `num_layers` steps: ⌈√T⌉, never below 1.
pub fn default_block_size(num_layers: usize) -> usize {
    let mut b = 1usize;
    while b.saturating_mul(b) < num_layers {
        b += 1;
    }
    b
}

/// Split `0..num_layers` into consecutive ranges of at most `block_size` layers.
///
/// # Panics
/// Panics if `block_size == 0`.
pub fn block_ranges(num_layers: usize, block_size: usize) -> impl Iterator<Item = Range<usize>> {
    assert!(block_size > 0, "block_size must be positive");
    (0..num_layers)
        .step_by(block_size)
        .map(move |start| start..(start + block_size).min(num_layers))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_length_and_adjacency() {
        let a = RowBlock {
            start: 2,
            end: 7,
            summary: (),
        };
        let b = RowBlock {
            start: 7,
            end: 7,
            summary: "tail",
        };
        assert_eq!(a.len(), 5);
        assert!(!a.is_empty());
        assert!(b.is_empty());
        assert!(a.is_followed_by(&b));
        assert!(!b.is_followed_by(&a));
    }

    #[test]
    fn default_size_is_ceiling_sqrt() {
        assert_eq!(default_block_size(0), 1);
        assert_eq!(default_block_size(1), 1);
        assert_eq!(default_block_size(2), 2);
        assert_eq!(default_block_size(4), 2);
        assert_eq!(default_block_size(5), 3);
        assert_eq!(default_block_size(100), 10);
        assert_eq!(default_block_size(101), 11);
    }

    #[test]
    fn ranges_tile_the_layers() {
        let ranges: Vec<_> = block_ranges(7, 3).collect();
        assert_eq!(ranges, vec![0..3, 3..6, 6..7]);
        assert_eq!(block_ranges(0, 4).count(), 0);
        assert_eq!(block_ranges(4, 10).collect::<Vec<_>>(), vec![0..4]);
    }

    #[test]
    #[should_panic]
    fn ranges_reject_zero_block_size() {
        let _ = block_ranges(3, 0);
    }
}
