//! Generic blocked forward engine.
//!
//! The engine sweeps a [`LayeredProblem`] from layer 0 to layer T in blocks
//! of `block_size` layers. Only the frontier at the current block boundary
//! is carried between blocks; each block's summary is either dropped
//! ([`LayerEngine::run`]) or collected ([`LayerEngine::run_with_blocks`]).
//!
//! The engine is completely generic over implementations of [`LayeredProblem`].

use crate::blocks::{block_ranges, default_block_size, RowBlock};
use crate::traits::LayeredProblem;

/// Blocked forward engine for a given problem instance `P`.
///
/// ```
/// use gift_path::{Grid, LayerEngine, problems::table::TableProblem};
///
/// let grid = Grid::new(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]).unwrap();
/// let engine = LayerEngine::new(TableProblem::new(&grid));
/// assert_eq!(engine.run(), 29);
/// ```
pub struct LayerEngine<P: LayeredProblem> {
    problem: P,
    block_size: usize,
}

impl<P: LayeredProblem> LayerEngine<P> {
    /// Create a new engine with a heuristic block size (≈ √T).
    pub fn new(problem: P) -> Self {
        let b = default_block_size(problem.num_layers());
        Self::with_block_size(problem, b)
    }

    /// Create a new engine with an explicit block size.
    ///
    /// # Panics
    /// Panics if `block_size == 0`.
    pub fn with_block_size(problem: P, block_size: usize) -> Self {
        assert!(block_size > 0, "block_size must be positive");
        Self {
            problem,
            block_size,
        }
    }

    pub fn problem(&self) -> &P {
        &self.problem
    }

    pub fn problem_mut(&mut self) -> &mut P {
        &mut self.problem
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Run the sweep and return the objective at layer T.
    pub fn run(&self) -> P::Cost {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!(
            "layer_run",
            layers = self.problem.num_layers(),
            block_size = self.block_size
        );
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let frontier_t = self.sweep(|_| {});
        self.problem.extract_cost(&frontier_t)
    }

    /// Run the sweep and also return the summary of every block, in layer order.
    ///
    /// The blocks tile [0, T) without gaps. For T = 0 the list is empty.
    pub fn run_with_blocks(&self) -> (P::Cost, Vec<RowBlock<P::Summary>>) {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!(
            "layer_run_with_blocks",
            layers = self.problem.num_layers(),
            block_size = self.block_size
        );
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let t = self.problem.num_layers();
        let mut blocks = Vec::with_capacity(t.div_ceil(self.block_size));
        let frontier_t = self.sweep(|block| blocks.push(block));
        (self.problem.extract_cost(&frontier_t), blocks)
    }

    /// Fold adjacent block summaries into one Σ covering all of them.
    ///
    /// Returns `None` for an empty slice.
    ///
    /// # Panics
    /// Panics if two consecutive blocks are not adjacent.
    pub fn merge_blocks(&self, blocks: &[RowBlock<P::Summary>]) -> Option<P::Summary> {
        let (first, rest) = blocks.split_first()?;
        let mut merged = first.summary.clone();
        let mut prev = first;
        for block in rest {
            assert!(
                prev.is_followed_by(block),
                "blocks [{}, {}) and [{}, {}) are not adjacent",
                prev.start,
                prev.end,
                block.start,
                block.end
            );
            merged = self.problem.merge_summary(&merged, &block.summary);
            prev = block;
        }
        Some(merged)
    }

    fn sweep<F>(&self, mut on_block: F) -> P::Frontier
    where
        F: FnMut(RowBlock<P::Summary>),
    {
        let t = self.problem.num_layers();
        let mut frontier = self.problem.init_frontier();

        for (k, range) in block_ranges(t, self.block_size).enumerate() {
            #[cfg(feature = "tracing")]
            let span = tracing::trace_span!(
                "summarize_block",
                block = k,
                start = range.start,
                end = range.end
            );
            #[cfg(feature = "tracing")]
            let _enter = span.enter();
            #[cfg(not(feature = "tracing"))]
            let _ = k;

            let (frontier_end, summary) =
                self.problem
                    .summarize_block(range.start, range.end, &frontier);
            on_block(RowBlock {
                start: range.start,
                end: range.end,
                summary,
            });
            frontier = frontier_end;
        }

        frontier
    }
}
