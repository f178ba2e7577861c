use crate::blocks::default_block_size;
use crate::{LayerEngine, LayeredProblem};

/// Builder for [`LayerEngine`] when the block size is optional configuration.
pub struct LayerEngineBuilder<P: LayeredProblem> {
    problem: P,
    block_size: Option<usize>,
}

impl<P: LayeredProblem> LayerEngineBuilder<P> {
    pub fn new(problem: P) -> Self {
        Self {
            problem,
            block_size: None,
        }
    }

    pub fn with_block_size(mut self, block_size: usize) -> Self {
        self.block_size = Some(block_size);
        self
    }

    /// Like [`with_block_size`](Self::with_block_size), but `None` keeps the heuristic.
    pub fn block_size(mut self, block_size: Option<usize>) -> Self {
        self.block_size = block_size;
        self
    }

    /// # Panics
    /// Panics if an explicit block size of 0 was configured.
    pub fn build(self) -> LayerEngine<P> {
        let b = self
            .block_size
            .unwrap_or_else(|| default_block_size(self.problem.num_layers()));
        LayerEngine::with_block_size(self.problem, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problems::table::TableProblem;
    use crate::Grid;

    #[test]
    fn explicit_and_heuristic_block_sizes() {
        let grid = Grid::from_fn(17, 2, |c| c.row as u32).unwrap();
        let engine = LayerEngineBuilder::new(TableProblem::new(&grid)).build();
        assert_eq!(engine.block_size(), 4);

        let engine = LayerEngineBuilder::new(TableProblem::new(&grid))
            .with_block_size(5)
            .block_size(None)
            .build();
        assert_eq!(engine.block_size(), 4);

        let engine = LayerEngineBuilder::new(TableProblem::new(&grid))
            .with_block_size(3)
            .build();
        assert_eq!(engine.block_size(), 3);
    }
}
