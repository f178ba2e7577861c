//! Core trait definitions for layered forward dynamic programs.
//!
//! A path-value computation over a grid can be swept one layer at a time:
//! by rows, or by anti-diagonals. To plug such a sweep into
//! [`LayerEngine`](crate::engine::LayerEngine), implement [`LayeredProblem`]
//! for a struct that borrows the instance data.
//!
//! The trait encodes:
//! - Layered structure: layers 0..=T, with transitions between consecutive layers.
//! - Frontiers: the DP values on one layer, the only state carried forward.
//! - Interval summaries: composable Σ[a,b) for blocks of layers.
//!
//! Only the objective is ever extracted. There is no backward pass, so
//! nothing about the route is retained between layers.

/// Trait for a layered forward DP instance.
///
/// Semantics:
/// - There are `T = num_layers()` forward steps.
/// - `forward_step(i, frontier)` maps layer `i` -> layer `i+1`.
/// - After T steps the frontier at layer T determines the answer.
pub trait LayeredProblem {
    /// Representation of the DP values on one layer.
    type Frontier: Clone;

    /// Interval summary type Σ[a,b).
    ///
    /// Must support an associative merge via [`merge_summary`](Self::merge_summary)
    /// and reproduce the end frontier of its interval via [`SummaryApply`].
    type Summary: Clone + SummaryApply<Self::Frontier>;

    /// Objective type.
    type Cost: Copy + Ord;

    /// Number of forward steps `T`.
    fn num_layers(&self) -> usize;

    /// Frontier at layer 0.
    fn init_frontier(&self) -> Self::Frontier;

    /// Perform one DP step: from layer `layer` to `layer + 1`.
    ///
    /// Must only depend on `frontier` and fixed problem data.
    fn forward_step(&self, layer: usize, frontier: &Self::Frontier) -> Self::Frontier;

    /// Summarize the block of layers [a, b), starting from the frontier at `a`.
    ///
    /// Returns the frontier at layer `b` and Σ[a,b).
    fn summarize_block(
        &self,
        a: usize,
        b: usize,
        frontier_a: &Self::Frontier,
    ) -> (Self::Frontier, Self::Summary);

    /// Given Σ[a,b) and Σ[b,c), return Σ[a,c).
    fn merge_summary(&self, left: &Self::Summary, right: &Self::Summary) -> Self::Summary;

    /// Read the objective off the frontier at layer T.
    fn extract_cost(&self, frontier_t: &Self::Frontier) -> Self::Cost;
}

/// Apply an interval summary Σ[a,b) to the frontier at `a`.
pub trait SummaryApply<F> {
    /// Returns the frontier at `b`.
    fn apply(&self, frontier: &F) -> F;
}
