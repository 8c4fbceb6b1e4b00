use common::error::Error;
use common::numeric_kernel::{INFINITY, is_finite};
use common::types::{Distance, Edge, Vertex};
use log::debug;

/// Predecessor cell value meaning "no path known".
const NO_PREDECESSOR: Vertex = 0;

/// Lifecycle of a `GraphMatrix` with respect to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelaxationState {
    /// Populated from edges, not yet relaxed.
    Pending,
    /// The engine completed; distances and predecessors are final.
    Relaxed,
    /// A run failed part way through. Contents are unspecified.
    Invalidated,
}

/// Dense distance and predecessor matrices for a graph with vertices `1..=N`.
///
/// Both tables are stored row-major in flat vectors:
/// - `distances[(u-1) * N + (v-1)]` -> best known distance from `u` to `v`,
///   or `INFINITY` when no path is known
/// - `predecessors[(u-1) * N + (v-1)]` -> vertex preceding `v` on that path,
///   or 0 when no path is known
///
/// The raw accessors (`get_distance`, `set_distance`, `get_predecessor`,
/// `set_predecessor`) take 1-based ids and expect them to be in range. The
/// checked `distance` and `shortest_path` are meant for callers outside the
/// engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphMatrix {
    num_vertices: usize,
    distances: Vec<Distance>,
    predecessors: Vec<Vertex>,
    state: RelaxationState,
}

impl GraphMatrix {
    /// Creates the matrices from a list of edges `(src, dst, weight)`.
    ///
    /// `N` is the largest vertex id appearing in any edge. Every vertex
    /// starts at distance 0 from itself and unreachable from everything
    /// else, then each edge lowers `dist[src][dst]` if its weight is strictly
    /// smaller than the current value. Among parallel edges the lightest wins.
    ///
    /// The edge vector is consumed; nothing refers to it once this returns.
    ///
    /// # Errors
    /// Returns `Error::InvalidGraph` if `edges` is empty or any endpoint is 0,
    /// and `Error::GraphTooLarge` if `N * N` distance cells cannot be addressed.
    pub fn from_edges(edges: Vec<Edge>) -> Result<Self, Error> {
        let mut num_vertices = 0;
        for &(u, v, _) in &edges {
            if u == 0 || v == 0 {
                return Err(Error::InvalidGraph);
            }
            num_vertices = num_vertices.max(u).max(v);
        }

        if num_vertices == 0 {
            return Err(Error::InvalidGraph);
        }

        let cells = num_vertices
            .checked_mul(num_vertices)
            .filter(|&cells| {
                cells
                    .checked_mul(size_of::<Distance>())
                    .is_some_and(|bytes| bytes <= isize::MAX as usize)
            })
            .ok_or(Error::GraphTooLarge(num_vertices))?;

        let mut matrix = Self::isolated(num_vertices, cells);

        for (u, v, weight) in edges {
            let weight = Distance::from(weight);
            if weight < matrix.raw_distance(u, v) {
                matrix.set_distance(u, v, weight);
                matrix.set_predecessor(u, v, u);
            }
        }

        debug!(
            "Initialized {}x{} matrices from edge list",
            num_vertices, num_vertices
        );

        Ok(matrix)
    }

    /// Matrices for `num_vertices` vertices without any edges.
    ///
    /// `cells` must equal `num_vertices * num_vertices`.
    fn isolated(num_vertices: usize, cells: usize) -> Self {
        let mut distances = vec![INFINITY; cells];
        let mut predecessors = vec![NO_PREDECESSOR; cells];

        for v in 0..num_vertices {
            distances[v * num_vertices + v] = 0;
            predecessors[v * num_vertices + v] = v + 1;
        }

        Self {
            num_vertices,
            distances,
            predecessors,
            state: RelaxationState::Pending,
        }
    }

    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    pub fn state(&self) -> RelaxationState {
        self.state
    }

    pub(crate) fn set_state(&mut self, state: RelaxationState) {
        self.state = state;
    }

    #[inline]
    fn index(&self, u: Vertex, v: Vertex) -> usize {
        // Subtract 1 to get 0-index
        (u - 1) * self.num_vertices + (v - 1)
    }

    /// Raw distance cell, `INFINITY` included.
    #[inline]
    pub(crate) fn raw_distance(&self, u: Vertex, v: Vertex) -> Distance {
        self.distances[self.index(u, v)]
    }

    /// Best known distance from `u` to `v`, `None` when unreachable.
    pub fn get_distance(&self, u: Vertex, v: Vertex) -> Option<Distance> {
        let d = self.raw_distance(u, v);
        is_finite(d).then_some(d)
    }

    #[inline]
    pub fn set_distance(&mut self, u: Vertex, v: Vertex, d: Distance) {
        let idx = self.index(u, v);
        self.distances[idx] = d;
    }

    /// Vertex before `v` on the best known path from `u`, `None` when unreachable.
    pub fn get_predecessor(&self, u: Vertex, v: Vertex) -> Option<Vertex> {
        match self.predecessors[self.index(u, v)] {
            NO_PREDECESSOR => None,
            k => Some(k),
        }
    }

    /// Raw predecessor cell, 0 included.
    #[inline]
    pub(crate) fn predecessor_cell(&self, u: Vertex, v: Vertex) -> Vertex {
        self.predecessors[self.index(u, v)]
    }

    #[inline]
    pub fn set_predecessor(&mut self, u: Vertex, v: Vertex, k: Vertex) {
        let idx = self.index(u, v);
        self.predecessors[idx] = k;
    }

    /// Checks that `v` lies in `[1, N]`.
    pub fn check_vertex(&self, v: Vertex) -> Result<(), Error> {
        if v == 0 || v > self.num_vertices {
            return Err(Error::VertexOutOfRange(v));
        }
        Ok(())
    }

    /// Fails if a previous run left the matrix partially relaxed.
    pub fn ensure_readable(&self) -> Result<(), Error> {
        match self.state {
            RelaxationState::Invalidated => Err(Error::InvalidatedMatrix),
            _ => Ok(()),
        }
    }

    /// Checked form of `get_distance` for query boundaries.
    ///
    /// # Errors
    /// `Error::InvalidatedMatrix` after a failed run, `Error::VertexOutOfRange`
    /// if either id is outside `[1, N]`.
    pub fn distance(&self, u: Vertex, v: Vertex) -> Result<Option<Distance>, Error> {
        self.ensure_readable()?;
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        Ok(self.get_distance(u, v))
    }
}
