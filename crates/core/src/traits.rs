use super::matrix::GraphMatrix;
use common::error::Error;

/// Trait for solvers that finalize all-pairs distances in place.
pub trait AllPairsSolver {
    /// Relaxes every ordered pair of `matrix`.
    ///
    /// Returns `Ok(())` once the matrix holds final distances and predecessors,
    /// or `Err(e)` if a negative cycle (or cancellation) left it unusable.
    fn solve(&self, matrix: &mut GraphMatrix) -> Result<(), Error>;
}
