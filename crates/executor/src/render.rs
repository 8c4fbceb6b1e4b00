use common::types::{Edge, Vertex, WeightedPath};
use floyd_core::GraphMatrix;

/// Text shown for unreachable pairs.
pub const INFINITY_LABEL: &str = "inf";

/// Grid of `dist[u][v]`, rows and columns labelled 1..N, `inf` for unreachable.
pub fn render_distances(matrix: &GraphMatrix, min_cell_width: usize) -> String {
    render_grid(matrix.num_vertices(), min_cell_width, |u, v| {
        match matrix.get_distance(u, v) {
            Some(d) => d.to_string(),
            None => INFINITY_LABEL.to_string(),
        }
    })
}

/// Grid of `pred[u][v]`, `-` where no path is known.
pub fn render_predecessors(matrix: &GraphMatrix, min_cell_width: usize) -> String {
    render_grid(matrix.num_vertices(), min_cell_width, |u, v| {
        match matrix.get_predecessor(u, v) {
            Some(k) => k.to_string(),
            None => "-".to_string(),
        }
    })
}

/// All cells right-aligned to the widest one, never narrower than
/// `min_cell_width`.
fn render_grid<F>(n: usize, min_cell_width: usize, cell: F) -> String
where
    F: Fn(Vertex, Vertex) -> String,
{
    let cells: Vec<Vec<String>> = (1..=n)
        .map(|u| (1..=n).map(|v| cell(u, v)).collect())
        .collect();

    let label_width = n.to_string().len();
    let width = cells
        .iter()
        .flatten()
        .map(String::len)
        .chain(std::iter::once(label_width))
        .fold(min_cell_width, usize::max);

    let mut out = String::new();

    out.push_str(&format!("{:>lw$} |", "", lw = label_width));
    for v in 1..=n {
        out.push_str(&format!(" {:>w$}", v, w = width));
    }
    out.push('\n');

    out.push_str(&"-".repeat(label_width + 1));
    out.push('+');
    out.push_str(&"-".repeat(n * (width + 1)));
    out.push('\n');

    for (u, row) in cells.iter().enumerate() {
        out.push_str(&format!("{:>lw$} |", u + 1, lw = label_width));
        for value in row {
            out.push_str(&format!(" {:>w$}", value, w = width));
        }
        out.push('\n');
    }

    out
}

pub fn render_edges(edges: &[Edge]) -> String {
    edges
        .iter()
        .map(|&(u, v, w)| format!("Edge: ({}, {}), Weight: {}\n", u, v, w))
        .collect()
}

/// `[1 3 4 2]`, or `No path found`.
pub fn render_path(path: Option<&[Vertex]>) -> String {
    match path {
        Some(vertices) => {
            let joined: Vec<String> = vertices.iter().map(Vertex::to_string).collect();
            format!("[{}]", joined.join(" "))
        }
        None => "No path found".to_string(),
    }
}

/// `[1 3 4 2] (weight -1)`, or `No path found`.
pub fn render_weighted_path(path: Option<&WeightedPath>) -> String {
    match path {
        Some(p) => format!(
            "{} (weight {})",
            render_path(Some(p.vertices.as_slice())),
            p.total_weight
        ),
        None => render_path(None),
    }
}
