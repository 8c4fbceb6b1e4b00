use super::matrix::GraphMatrix;
use common::{
    error::Error,
    types::{Vertex, WeightedPath},
};

impl GraphMatrix {
    /// Reconstructs the shortest path from `from` to `to` by walking the
    /// predecessor row of `from` backwards, starting at `to`.
    ///
    /// The walk is capped at N steps. On a successfully relaxed matrix the
    /// predecessor chains are acyclic, so the cap is never reached.
    ///
    /// # Returns
    /// - `Ok(Some(path))` -> `[from, ..., to]`, both endpoints included.
    ///   `from == to` yields `[from]`.
    /// - `Ok(None)` -> `to` is unreachable from `from`.
    ///
    /// # Errors
    /// - `Error::VertexOutOfRange` if either id is outside `[1, N]`.
    /// - `Error::InvalidatedMatrix` after a failed run.
    /// - `Error::PathReconstructionFailed` if the chain is broken or loops.
    pub fn shortest_path(&self, from: Vertex, to: Vertex) -> Result<Option<Vec<Vertex>>, Error> {
        self.ensure_readable()?;
        self.check_vertex(from)?;
        self.check_vertex(to)?;

        if from == to {
            return Ok(Some(vec![from]));
        }

        let mut current = match self.get_predecessor(from, to) {
            Some(pred) => pred,
            None => return Ok(None),
        };

        let mut reversed = vec![to];
        for _ in 0..self.num_vertices() {
            reversed.push(current);
            if current == from {
                reversed.reverse();
                return Ok(Some(reversed));
            }

            current = self
                .get_predecessor(from, current)
                .ok_or(Error::PathReconstructionFailed { from, to })?;
        }

        Err(Error::PathReconstructionFailed { from, to })
    }

    /// Like `shortest_path`, paired with the path's total weight `dist[from][to]`.
    pub fn weighted_path(&self, from: Vertex, to: Vertex) -> Result<Option<WeightedPath>, Error> {
        let vertices = match self.shortest_path(from, to)? {
            Some(vertices) => vertices,
            None => return Ok(None),
        };

        let total_weight = self
            .get_distance(from, to)
            .ok_or(Error::PathReconstructionFailed { from, to })?;

        Ok(Some(WeightedPath {
            vertices,
            total_weight,
        }))
    }
}

#[cfg(test)]
mod path_tests {
    use super::*;
    use crate::{AllPairsSolver, FloydWarshallSolver};
    use common::types::Edge;

    fn solved(edges: Vec<Edge>) -> GraphMatrix {
        let mut matrix = GraphMatrix::from_edges(edges).unwrap();
        FloydWarshallSolver::new().solve(&mut matrix).unwrap();
        matrix
    }

    #[test]
    fn reconstructs_multi_hop_path() {
        let matrix = solved(vec![(1, 3, -2), (3, 4, 2), (4, 2, -1), (2, 1, 4), (2, 3, 3)]);

        assert_eq!(matrix.shortest_path(1, 2).unwrap(), Some(vec![1, 3, 4, 2]));
        assert_eq!(matrix.shortest_path(2, 4).unwrap(), Some(vec![2, 1, 3, 4]));

        let weighted = matrix.weighted_path(1, 2).unwrap().unwrap();
        assert_eq!(weighted.total_weight, -1);
        assert_eq!(weighted.hops(), 3);
    }

    #[test]
    fn direct_edge_and_missing_reverse() {
        let matrix = solved(vec![(1, 2, 5)]);

        assert_eq!(matrix.shortest_path(1, 2).unwrap(), Some(vec![1, 2]));
        assert_eq!(matrix.shortest_path(2, 1).unwrap(), None);
        assert_eq!(matrix.weighted_path(2, 1).unwrap(), None);
    }

    #[test]
    fn path_to_self_is_single_vertex() {
        let matrix = solved(vec![(1, 2, 5)]);

        assert_eq!(matrix.shortest_path(2, 2).unwrap(), Some(vec![2]));
        let weighted = matrix.weighted_path(1, 1).unwrap().unwrap();
        assert_eq!(weighted.total_weight, 0);
        assert_eq!(weighted.hops(), 0);
    }

    #[test]
    fn out_of_range_vertex_is_rejected() {
        let matrix = solved(vec![(1, 2, 1), (3, 4, 1)]);

        assert_eq!(matrix.shortest_path(99, 1), Err(Error::VertexOutOfRange(99)));
        assert_eq!(matrix.shortest_path(1, 99), Err(Error::VertexOutOfRange(99)));
        assert_eq!(matrix.shortest_path(0, 1), Err(Error::VertexOutOfRange(0)));
    }

    #[test]
    fn failed_run_blocks_reconstruction() {
        let mut matrix = GraphMatrix::from_edges(vec![(1, 2, -1), (2, 1, -1)]).unwrap();
        assert!(FloydWarshallSolver::new().solve(&mut matrix).is_err());

        assert_eq!(matrix.shortest_path(1, 2), Err(Error::InvalidatedMatrix));
    }

    #[test]
    fn broken_chain_is_reported() {
        let mut matrix = GraphMatrix::from_edges(vec![(1, 2, 1), (2, 3, 1)]).unwrap();
        // Points 3 back at 2, whose predecessor from 1 is unset.
        matrix.set_predecessor(1, 2, 0);
        matrix.set_predecessor(1, 3, 2);

        assert_eq!(
            matrix.shortest_path(1, 3),
            Err(Error::PathReconstructionFailed { from: 1, to: 3 })
        );
    }

    #[test]
    fn looping_chain_hits_step_cap() {
        let mut matrix = GraphMatrix::from_edges(vec![(1, 2, 1), (2, 3, 1)]).unwrap();
        matrix.set_predecessor(1, 3, 2);
        matrix.set_predecessor(1, 2, 3);

        assert_eq!(
            matrix.shortest_path(1, 3),
            Err(Error::PathReconstructionFailed { from: 1, to: 3 })
        );
    }

    #[test]
    fn unrelaxed_matrix_yields_direct_edges() {
        let matrix = GraphMatrix::from_edges(vec![(1, 2, 1), (2, 3, 1)]).unwrap();

        assert_eq!(matrix.shortest_path(1, 2).unwrap(), Some(vec![1, 2]));
        assert_eq!(matrix.shortest_path(1, 3).unwrap(), None);
    }
}
