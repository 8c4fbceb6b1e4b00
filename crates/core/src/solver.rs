use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use super::matrix::{GraphMatrix, RelaxationState};
use super::traits::AllPairsSolver;
use common::error::Error;
use common::numeric_kernel::{add_distances, is_finite};
use log::{debug, info, warn};

/// Solver implementing the Floyd-Warshall dynamic program for all-pairs
/// shortest paths with negative cycle detection.
///
/// Optionally carries a cancellation flag that is polled once per outer
/// iteration, since a full run costs O(N³).
#[derive(Debug, Clone, Default)]
pub struct FloydWarshallSolver {
    cancel: Option<Arc<AtomicBool>>,
    progress_every: usize,
}

impl FloydWarshallSolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stops the run with `Error::Cancelled` once `flag` is set.
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Logs progress every `every` intermediate vertices. 0 disables it.
    pub fn with_progress_every(mut self, every: usize) -> Self {
        self.progress_every = every;
        self
    }

    fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }

    /// Runs the triple loop over `matrix`, returning the number of cells improved.
    ///
    /// `k` must stay outermost: after iteration `k`, every cell holds the
    /// best path whose intermediate vertices are all in `1..=k`.
    ///
    /// # Errors
    /// - `Error::NegativeCycle(i)` as soon as a path from `i` back to itself
    ///   would get a negative weight.
    /// - `Error::WeightOverflow` if a finite sum leaves the distance range.
    /// - `Error::Cancelled` if the cancellation flag was raised.
    fn relax(&self, matrix: &mut GraphMatrix) -> Result<usize, Error> {
        let n = matrix.num_vertices();
        let mut updates = 0;

        for k in 1..=n {
            if self.is_cancelled() {
                return Err(Error::Cancelled);
            }

            if self.progress_every > 0 && (k - 1) % self.progress_every == 0 {
                debug!("Relaxing through vertex {}/{} ({} updates so far)", k, n, updates);
            }

            for i in 1..=n {
                // dist[i][k] only changes inside this row when j == k, which
                // needs it finite already.
                if !is_finite(matrix.raw_distance(i, k)) {
                    continue;
                }

                for j in 1..=n {
                    let weight_through_k =
                        match add_distances(matrix.raw_distance(i, k), matrix.raw_distance(k, j))? {
                            Some(w) => w,
                            None => continue,
                        };

                    if i == j && weight_through_k < 0 {
                        return Err(Error::NegativeCycle(i));
                    }

                    if weight_through_k < matrix.raw_distance(i, j) {
                        // Found a shorter path from i to j through k
                        matrix.set_distance(i, j, weight_through_k);
                        let pred = matrix.predecessor_cell(k, j);
                        matrix.set_predecessor(i, j, pred);
                        updates += 1;
                    }
                }
            }
        }

        Ok(updates)
    }
}

impl AllPairsSolver for FloydWarshallSolver {
    /// Relaxes `matrix` in place.
    ///
    /// On success the matrix is marked `Relaxed`. On any failure it is marked
    /// `Invalidated` and every later query on it is refused. Running again
    /// on a relaxed matrix changes nothing.
    fn solve(&self, matrix: &mut GraphMatrix) -> Result<(), Error> {
        matrix.ensure_readable()?;

        match self.relax(matrix) {
            Ok(updates) => {
                matrix.set_state(RelaxationState::Relaxed);
                info!(
                    "Floyd-Warshall finished on {} vertices with {} improvements",
                    matrix.num_vertices(),
                    updates
                );
                Ok(())
            }
            Err(e) => {
                matrix.set_state(RelaxationState::Invalidated);
                warn!("Floyd-Warshall aborted: {}", e);
                Err(e)
            }
        }
    }
}
