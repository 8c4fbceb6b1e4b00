pub mod matrix;
pub mod path;
pub mod solver;
pub mod traits;

pub use matrix::{GraphMatrix, RelaxationState};
pub use solver::FloydWarshallSolver;
pub use traits::AllPairsSolver;

use common::{
    error::Error,
    types::{Edge, Vertex},
};

/// Builds the distance/predecessor matrices from an edge list.
pub fn build(edges: Vec<Edge>) -> Result<GraphMatrix, Error> {
    GraphMatrix::from_edges(edges)
}

/// Relaxes `matrix` in place with a default `FloydWarshallSolver`.
pub fn run(matrix: &mut GraphMatrix) -> Result<(), Error> {
    FloydWarshallSolver::default().solve(matrix)
}

/// Shortest vertex sequence from `from` to `to`, or `None` if unreachable.
pub fn shortest_path(
    matrix: &GraphMatrix,
    from: Vertex,
    to: Vertex,
) -> Result<Option<Vec<Vertex>>, Error> {
    matrix.shortest_path(from, to)
}
