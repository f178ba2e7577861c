//! Example: the classic 4x4 gift board, solved with both strategies.
//!
//! Run with:
//! `cargo run --example board`

use gift_path::{
    problems::wavefront::WavefrontProblem, Grid, LayerEngine, SolverConfig, Strategy,
};

fn main() {
    let grid = Grid::new(vec![
        vec![1, 10, 3, 8],
        vec![12, 2, 9, 6],
        vec![5, 7, 4, 11],
        vec![3, 7, 16, 5],
    ])
    .expect("board is rectangular");

    for strategy in Strategy::ALL {
        let value = SolverConfig::new().with_strategy(strategy).solve(&grid);
        println!("{strategy:>9}: maximal gift value = {value}");
    }

    // Inspect how much the wavefront prunes at each anti-diagonal.
    let engine = LayerEngine::with_block_size(WavefrontProblem::new(&grid), 1);
    let (_, blocks) = engine.run_with_blocks();
    for block in &blocks {
        let s = &block.summary;
        println!(
            "diagonal {}: {} endpoints, {} candidates pruned",
            s.end,
            s.end_front.ends.len(),
            s.pruned
        );
    }
}
