//! Anti-diagonal wavefront of best path endpoints.
//!
//! Layer `d` holds every cell with `row + col == d` that a monotone path can
//! end on, together with the best total collected on the way there. A step
//! pushes each endpoint one cell right and one cell down, and when two
//! candidates land on the same cell only the larger total is kept. Whatever
//! happens downstream of a cell depends only on that total, so a discarded
//! candidate could never have produced a better final value.
//!
//! There are `rows + cols - 2` steps; the last wavefront is the single
//! bottom-right cell.

use crate::grid::{Cell, Grid};
use crate::traits::{LayeredProblem, SummaryApply};

#[derive(Clone)]
pub struct WavefrontProblem<'a> {
    pub grid: &'a Grid,
}

/// Best known total for paths ending at `cell`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Endpoint {
    pub cell: Cell,
    pub total: u64,
}

/// Endpoints on one anti-diagonal, ordered by row, at most one per cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Wavefront {
    pub ends: Vec<Endpoint>,
}

/// Σ[start,end): the wavefront at `end`, the widest wavefront inside the
/// block and how many extended candidates were dropped for landing on a cell
/// that already had a better (or equal) total.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WavefrontSummary {
    pub start: usize,
    pub end: usize,
    pub end_front: Wavefront,
    pub widest: usize,
    pub pruned: usize,
}

impl<'a> WavefrontProblem<'a> {
    pub fn new(grid: &'a Grid) -> Self {
        Self { grid }
    }

    /// Rows spanned by anti-diagonal `d`, inclusive.
    fn diagonal_rows(&self, d: usize) -> (usize, usize) {
        let lo = d.saturating_sub(self.grid.cols() - 1);
        let hi = d.min(self.grid.rows() - 1);
        (lo, hi)
    }

    /// Extend every endpoint on diagonal `layer` onto diagonal `layer + 1`.
    ///
    /// Returns the new wavefront and the number of pruned candidates.
    fn advance(&self, layer: usize, front: &Wavefront) -> (Wavefront, usize) {
        let d = layer + 1;
        let (lo, hi) = self.diagonal_rows(d);
        let mut best: Vec<Option<u64>> = vec![None; hi + 1 - lo];
        let mut pruned = 0usize;

        for end in &front.ends {
            for next in [end.cell.right(), end.cell.down()] {
                let Some(value) = self.grid.get(next) else {
                    continue;
                };
                let candidate = end.total + u64::from(value);
                let slot = &mut best[next.row - lo];
                let kept = *slot;
                match kept {
                    Some(kept) if kept >= candidate => pruned += 1,
                    Some(_) => {
                        pruned += 1;
                        *slot = Some(candidate);
                    }
                    None => *slot = Some(candidate),
                }
            }
        }

        let ends = best
            .into_iter()
            .enumerate()
            .filter_map(|(i, total)| {
                let row = lo + i;
                total.map(|total| Endpoint {
                    cell: Cell::new(row, d - row),
                    total,
                })
            })
            .collect();
        (Wavefront { ends }, pruned)
    }
}

impl LayeredProblem for WavefrontProblem<'_> {
    type Frontier = Wavefront;
    type Summary = WavefrontSummary;
    type Cost = u64;

    fn num_layers(&self) -> usize {
        self.grid.rows() + self.grid.cols() - 2
    }

    fn init_frontier(&self) -> Wavefront {
        Wavefront {
            ends: vec![Endpoint {
                cell: Cell::ORIGIN,
                total: u64::from(self.grid[Cell::ORIGIN]),
            }],
        }
    }

    fn forward_step(&self, layer: usize, frontier: &Wavefront) -> Wavefront {
        self.advance(layer, frontier).0
    }

    fn summarize_block(
        &self,
        a: usize,
        b: usize,
        frontier_a: &Wavefront,
    ) -> (Wavefront, WavefrontSummary) {
        let mut front = frontier_a.clone();
        let mut widest = 0usize;
        let mut pruned = 0usize;
        for layer in a..b {
            let (next, dropped) = self.advance(layer, &front);
            widest = widest.max(next.ends.len());
            pruned += dropped;
            front = next;
        }
        let summary = WavefrontSummary {
            start: a,
            end: b,
            end_front: front.clone(),
            widest,
            pruned,
        };
        (front, summary)
    }

    fn merge_summary(&self, left: &WavefrontSummary, right: &WavefrontSummary) -> WavefrontSummary {
        debug_assert_eq!(left.end, right.start, "summaries must be adjacent");
        WavefrontSummary {
            start: left.start,
            end: right.end,
            end_front: right.end_front.clone(),
            widest: left.widest.max(right.widest),
            pruned: left.pruned + right.pruned,
        }
    }

    fn extract_cost(&self, frontier_t: &Wavefront) -> u64 {
        debug_assert!(
            frontier_t.ends.len() == 1 && frontier_t.ends[0].cell == self.grid.destination(),
            "final wavefront must be the destination cell"
        );
        frontier_t.ends.iter().map(|e| e.total).max().unwrap_or(0)
    }
}

impl SummaryApply<Wavefront> for WavefrontSummary {
    fn apply(&self, _frontier: &Wavefront) -> Wavefront {
        self.end_front.clone()
    }
}
