use std::io::Write;

use log::info;

use super::config::RenderConfig;
use super::error::Error;
use super::render::{render_distances, render_edges, render_predecessors};
use super::types::EdgeSource;
use floyd_core::{AllPairsSolver, GraphMatrix};

/// Load → build → relax → render, over any edge source and solver.
pub struct Pipeline<S, V> {
    source: S,
    solver: V,
    render: RenderConfig,
    verbose: bool,
}

impl<S, V> Pipeline<S, V>
where
    S: EdgeSource,
    V: AllPairsSolver,
{
    pub fn new(source: S, solver: V, render: RenderConfig, verbose: bool) -> Self {
        Pipeline {
            source,
            solver,
            render,
            verbose,
        }
    }

    /// Runs the pipeline, writing the rendered matrices to `out`.
    ///
    /// Returns the relaxed matrix for path queries. With `verbose`, the edge
    /// listing and the matrix before relaxation are written as well.
    pub fn run<W: Write>(self, out: &mut W) -> Result<GraphMatrix, Error> {
        let edges = self.source.load_edges()?;
        info!("Loaded {} edges", edges.len());

        if self.verbose {
            writeln!(out, "Edges: {}", edges.len())?;
            write!(out, "{}", render_edges(&edges))?;
            writeln!(out)?;
        }

        let mut matrix = floyd_core::build(edges)?;
        info!("Graph has {} vertices", matrix.num_vertices());

        let width = self.render.min_cell_width;
        if self.verbose {
            writeln!(out, "Initial distances:")?;
            writeln!(out, "{}", render_distances(&matrix, width))?;
        }

        self.solver.solve(&mut matrix)?;

        writeln!(out, "Shortest distances:")?;
        writeln!(out, "{}", render_distances(&matrix, width))?;

        if self.render.show_predecessors {
            writeln!(out, "Predecessors:")?;
            writeln!(out, "{}", render_predecessors(&matrix, width))?;
        }

        Ok(matrix)
    }
}
