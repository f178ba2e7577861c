//! Entry points: choose a strategy, validate the grid, run the engine.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::builder::LayerEngineBuilder;
use crate::error::InvalidInputError;
use crate::grid::Grid;
use crate::problems::{table::TableProblem, wavefront::WavefrontProblem};

/// How the path value is accumulated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Accumulated rows, top to bottom.
    #[default]
    Table,
    /// Best endpoints per anti-diagonal.
    Wavefront,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::Table, Strategy::Wavefront];

    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Table => "table",
            Strategy::Wavefront => "wavefront",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown strategy '{0}' (expected 'table' or 'wavefront')")]
pub struct ParseStrategyError(String);

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "table" => Ok(Strategy::Table),
            "wavefront" => Ok(Strategy::Wavefront),
            other => Err(ParseStrategyError(other.to_string())),
        }
    }
}

/// Solver settings: strategy and optional engine block size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SolverConfig {
    pub strategy: Strategy,
    /// `None` picks ⌈√T⌉ for the grid at hand.
    pub block_size: Option<usize>,
}

impl SolverConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_block_size(mut self, block_size: usize) -> Self {
        self.block_size = Some(block_size);
        self
    }

    /// Maximal path value of an already validated grid.
    ///
    /// # Panics
    /// Panics if `block_size` is `Some(0)`.
    pub fn solve(&self, grid: &Grid) -> u64 {
        let value = match self.strategy {
            Strategy::Table => LayerEngineBuilder::new(TableProblem::new(grid))
                .block_size(self.block_size)
                .build()
                .run(),
            Strategy::Wavefront => LayerEngineBuilder::new(WavefrontProblem::new(grid))
                .block_size(self.block_size)
                .build()
                .run(),
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            rows = grid.rows(),
            cols = grid.cols(),
            strategy = self.strategy.as_str(),
            value,
            "solved grid"
        );

        value
    }
}

/// Maximum sum collectible on a right/down path from the top-left cell to
/// the bottom-right cell.
///
/// ```
/// let board: Vec<Vec<u32>> = vec![vec![1, 2, 3], vec![1, 4, 1]];
/// assert_eq!(gift_path::max_path_value(&board), Ok(8));
///
/// let jagged: Vec<Vec<u32>> = vec![vec![1, 2], vec![3]];
/// assert!(gift_path::max_path_value(&jagged).is_err());
/// ```
pub fn max_path_value<R: AsRef<[u32]>>(rows: &[R]) -> Result<u64, InvalidInputError> {
    max_path_value_with(rows, &SolverConfig::default())
}

/// [`max_path_value`] with explicit solver settings.
pub fn max_path_value_with<R: AsRef<[u32]>>(
    rows: &[R],
    config: &SolverConfig,
) -> Result<u64, InvalidInputError> {
    let grid = Grid::from_rows(rows)?;
    Ok(config.solve(&grid))
}

/// Solve independent grids, results in input order.
#[cfg(feature = "parallel")]
pub fn solve_many(grids: &[Grid], config: &SolverConfig) -> Vec<u64> {
    use rayon::prelude::*;

    grids.par_iter().map(|grid| config.solve(grid)).collect()
}

/// Solve independent grids, results in input order.
#[cfg(not(feature = "parallel"))]
pub fn solve_many(grids: &[Grid], config: &SolverConfig) -> Vec<u64> {
    grids.iter().map(|grid| config.solve(grid)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategy_names_round_trip() {
        for strategy in Strategy::ALL {
            assert_eq!(strategy.as_str().parse::<Strategy>(), Ok(strategy));
            assert_eq!(strategy.to_string(), strategy.as_str());
        }
        let err = "diagonal".parse::<Strategy>().unwrap_err();
        assert!(err.to_string().contains("diagonal"));
    }

    #[test]
    fn config_defaults_to_table_with_heuristic_block() {
        let config = SolverConfig::new();
        assert_eq!(config.strategy, Strategy::Table);
        assert_eq!(config.block_size, None);
    }

    #[test]
    fn strategies_agree_on_board() {
        let board: Vec<Vec<u32>> = vec![
            vec![1, 10, 3, 8],
            vec![12, 2, 9, 6],
            vec![5, 7, 4, 11],
            vec![3, 7, 16, 5],
        ];
        for strategy in Strategy::ALL {
            for block in 1..=6 {
                let config = SolverConfig::new()
                    .with_strategy(strategy)
                    .with_block_size(block);
                assert_eq!(max_path_value_with(&board, &config), Ok(53));
            }
        }
    }

    #[test]
    fn invalid_grids_are_rejected_before_solving() {
        let empty: [Vec<u32>; 0] = [];
        assert_eq!(max_path_value(&empty), Err(InvalidInputError::Empty));
        let jagged: Vec<Vec<u32>> = vec![vec![1, 2, 3], vec![1, 4]];
        assert!(matches!(
            max_path_value(&jagged),
            Err(InvalidInputError::Jagged { row: 1, .. })
        ));
    }

    #[test]
    fn solve_many_preserves_order() {
        let grids = vec![
            Grid::new(vec![vec![5]]).unwrap(),
            Grid::new(vec![vec![2, 3, 4]]).unwrap(),
            Grid::new(vec![vec![1, 2, 3], vec![1, 4, 1]]).unwrap(),
        ];
        assert_eq!(solve_many(&grids, &SolverConfig::new()), vec![5, 9, 8]);
        assert!(solve_many(&[], &SolverConfig::new()).is_empty());
    }
}
