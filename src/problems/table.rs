//! Row-by-row accumulation table as a layered DP.
//!
//! Layer `i` is the accumulated row `i`: entry `c` holds the best value of
//! any monotone path from (0,0) to (i,c). Layer 0 is the prefix sum of row 0,
//! so there are `rows - 1` forward steps. Only one accumulated row is live
//! at a time; inside a block the row is updated in place.

use crate::grid::Grid;
use crate::traits::{LayeredProblem, SummaryApply};

#[derive(Clone)]
pub struct TableProblem<'a> {
    pub grid: &'a Grid,
}

/// Accumulated values of one grid row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableRow {
    pub acc: Vec<u64>, // length = grid.cols()
}

/// Σ[start,end): the accumulated row at `end` and the largest accumulated
/// value produced by any row inside the block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableSummary {
    pub start: usize,
    pub end: usize,
    pub end_row: TableRow,
    pub peak: u64,
}

impl<'a> TableProblem<'a> {
    pub fn new(grid: &'a Grid) -> Self {
        Self { grid }
    }
}

impl LayeredProblem for TableProblem<'_> {
    type Frontier = TableRow;
    type Summary = TableSummary;
    type Cost = u64;

    fn num_layers(&self) -> usize {
        self.grid.rows() - 1
    }

    fn init_frontier(&self) -> TableRow {
        let acc = self
            .grid
            .row(0)
            .iter()
            .scan(0u64, |sum, &v| {
                *sum += u64::from(v);
                Some(*sum)
            })
            .collect();
        TableRow { acc }
    }

    fn forward_step(&self, layer: usize, frontier: &TableRow) -> TableRow {
        let mut next = frontier.clone();
        accumulate_row(&mut next.acc, self.grid.row(layer + 1));
        next
    }

    fn summarize_block(
        &self,
        a: usize,
        b: usize,
        frontier_a: &TableRow,
    ) -> (TableRow, TableSummary) {
        let mut row = frontier_a.clone();
        let mut peak = 0u64;
        for layer in a..b {
            accumulate_row(&mut row.acc, self.grid.row(layer + 1));
            peak = peak.max(row.acc.iter().copied().max().unwrap_or(0));
        }
        let summary = TableSummary {
            start: a,
            end: b,
            end_row: row.clone(),
            peak,
        };
        (row, summary)
    }

    fn merge_summary(&self, left: &TableSummary, right: &TableSummary) -> TableSummary {
        debug_assert_eq!(left.end, right.start, "summaries must be adjacent");
        TableSummary {
            start: left.start,
            end: right.end,
            end_row: right.end_row.clone(),
            peak: left.peak.max(right.peak),
        }
    }

    fn extract_cost(&self, frontier_t: &TableRow) -> u64 {
        frontier_t.acc.last().copied().unwrap_or(0)
    }
}

impl SummaryApply<TableRow> for TableSummary {
    fn apply(&self, _frontier: &TableRow) -> TableRow {
        self.end_row.clone()
    }
}

/// Turn the accumulated row above into the accumulated row for `cells`.
///
/// `acc[c]` holds the value from above until it is overwritten; `acc[c - 1]`
/// has already become the value to the left.
fn accumulate_row(acc: &mut [u64], cells: &[u32]) {
    debug_assert_eq!(acc.len(), cells.len());
    let mut left = 0u64;
    for (c, (slot, &v)) in acc.iter_mut().zip(cells).enumerate() {
        let best = if c == 0 { *slot } else { (*slot).max(left) };
        *slot = best + u64::from(v);
        left = *slot;
    }
}
