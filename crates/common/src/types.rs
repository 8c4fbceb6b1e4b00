/// 1-based vertex identifier.
pub type Vertex = usize;

/// Edge weight as read from input.
pub type Weight = i32;

/// Matrix cell value. Wider than `Weight` so that sums of up to N edge
/// weights never reach the infinity sentinel.
pub type Distance = i64;

/// Type alias for a single directed edge: (from, to, weight)
pub type Edge = (Vertex, Vertex, Weight);

/// A reconstructed shortest path together with its cost.
///
/// Fields:
/// - `vertices`: Ordered vertices from source to destination, both inclusive.
/// - `total_weight`: Sum of the edge weights along `vertices`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightedPath {
    pub vertices: Vec<Vertex>,
    pub total_weight: Distance,
}

impl WeightedPath {
    /// Number of edges traversed. A path from a vertex to itself has zero hops.
    pub fn hops(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    /// Consecutive `(from, to)` pairs along the path.
    pub fn edges(&self) -> impl Iterator<Item = (Vertex, Vertex)> + '_ {
        self.vertices.windows(2).map(|pair| (pair[0], pair[1]))
    }
}
