//! Layered formulations of the maximal path value.
//!
//! Both implement [`LayeredProblem`](crate::traits::LayeredProblem) and
//! produce the same value for every grid:
//! - [`table`]     : accumulated rows, one row live at a time.
//! - [`wavefront`] : best endpoints per anti-diagonal, pruned per cell.

pub mod table;
pub mod wavefront;
