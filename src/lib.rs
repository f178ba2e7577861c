//! Maximal value of gifts on a grid.
//!
//! A board of `rows x cols` cells holds a non-negative gift in every cell.
//! Starting at the top-left cell and moving only right or down, what is the
//! largest total you can collect by the time you reach the bottom-right cell?
//!
//! ## Core idea
//! 1. The best total at a cell depends only on the best totals of the cell
//!    above and the cell to the left, so a sweep never needs the route.
//! 2. Such a sweep is a *layered* DP: implement [`LayeredProblem`] for it.
//! 3. Let [`LayerEngine`] run it in blocks, keeping a single frontier live.
//!
//! ## Quick start
//! ```
//! let board: Vec<Vec<u32>> = vec![
//!     vec![1, 10, 3, 8],
//!     vec![12, 2, 9, 6],
//!     vec![5, 7, 4, 11],
//!     vec![3, 7, 16, 5],
//! ];
//! assert_eq!(gift_path::max_path_value(&board), Ok(53));
//! ```
//!
//! ## Strategies
//! The `problems` module holds two layerings of the same recurrence:
//! - accumulated rows ([`problems::table`]), the default,
//! - best endpoints per anti-diagonal ([`problems::wavefront`]).
//!
//! Pick one with [`SolverConfig`]; both return identical values.
//!
//! ## Features
//! - `tracing`: spans around engine runs and blocks.
//! - `parallel`: [`solve_many`] spreads grids over a rayon pool.
//! - `cli` (default): the `max_gift` and `scale_probe` binaries.

pub mod blocks;
pub mod builder;
pub mod engine;
pub mod error;
pub mod grid;
pub mod problems;
pub mod solve;
pub mod traits;

pub use crate::builder::LayerEngineBuilder;
pub use crate::engine::LayerEngine;
pub use crate::error::{InvalidInputError, ParseGridError};
pub use crate::grid::{read_grid, Cell, Grid};
pub use crate::solve::{max_path_value, max_path_value_with, solve_many, SolverConfig, Strategy};
pub use crate::traits::{LayeredProblem, SummaryApply};
