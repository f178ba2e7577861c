use gift_path::{
    problems::{table::TableProblem, wavefront::WavefrontProblem},
    Grid, LayeredProblem, SummaryApply,
};
use proptest::prelude::*;

fn grids() -> impl Strategy<Value = Grid> {
    (1usize..7, 1usize..7)
        .prop_flat_map(|(rows, cols)| {
            prop::collection::vec(prop::collection::vec(0u32..100, cols), rows)
        })
        .prop_map(|rows| Grid::new(rows).unwrap())
}

fn frontier_at<P: LayeredProblem>(problem: &P, layer: usize) -> P::Frontier {
    let mut frontier = problem.init_frontier();
    for i in 0..layer {
        frontier = problem.forward_step(i, &frontier);
    }
    frontier
}

/// Split points 0 <= a < b < c < d == total, or `None` when `total < 3`.
fn split_points(
    total: usize,
    seeds: (usize, usize, usize),
) -> Option<(usize, usize, usize, usize)> {
    if total < 3 {
        return None;
    }
    let a = seeds.0 % (total - 2);
    let b = a + 1 + (seeds.1 % (total - a - 2));
    let c = b + 1 + (seeds.2 % (total - b - 1));
    Some((a, b, c, total))
}

/// Apply, merge and associativity laws for three adjacent blocks.
fn check_laws<P>(problem: &P, seeds: (usize, usize, usize)) -> Result<(), TestCaseError>
where
    P: LayeredProblem,
    P::Frontier: PartialEq + std::fmt::Debug,
    P::Summary: PartialEq + std::fmt::Debug,
{
    let Some((a, b, c, d)) = split_points(problem.num_layers(), seeds) else {
        return Ok(());
    };

    let frontier_a = frontier_at(problem, a);
    let (frontier_b, sigma_ab) = problem.summarize_block(a, b, &frontier_a);
    let (frontier_c, sigma_bc) = problem.summarize_block(b, c, &frontier_b);
    let (frontier_d, sigma_cd) = problem.summarize_block(c, d, &frontier_c);

    prop_assert_eq!(&frontier_b, &frontier_at(problem, b));
    prop_assert_eq!(&frontier_d, &frontier_at(problem, d));
    prop_assert_eq!(&sigma_ab.apply(&frontier_a), &frontier_b);
    prop_assert_eq!(&sigma_bc.apply(&frontier_b), &frontier_c);

    let merged_ac = problem.merge_summary(&sigma_ab, &sigma_bc);
    prop_assert_eq!(&merged_ac.apply(&frontier_a), &frontier_c);

    let (whole_frontier, whole) = problem.summarize_block(a, d, &frontier_a);
    let left = problem.merge_summary(&merged_ac, &sigma_cd);
    let right = problem.merge_summary(&sigma_ab, &problem.merge_summary(&sigma_bc, &sigma_cd));
    prop_assert_eq!(&left, &right);
    prop_assert_eq!(&left, &whole);
    prop_assert_eq!(&whole_frontier, &frontier_d);
    Ok(())
}

proptest! {
    #[test]
    fn table_summary_laws(grid in grids(), s0 in 0usize..8, s1 in 0usize..8, s2 in 0usize..8) {
        check_laws(&TableProblem::new(&grid), (s0, s1, s2))?;
    }

    #[test]
    fn wavefront_summary_laws(grid in grids(), s0 in 0usize..8, s1 in 0usize..8, s2 in 0usize..8) {
        check_laws(&WavefrontProblem::new(&grid), (s0, s1, s2))?;
    }
}
