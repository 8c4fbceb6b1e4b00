pub mod config;
pub mod csv_loader;
pub mod error;
pub mod generator;
pub mod pipeline;
pub mod query;
pub mod render;
pub mod text_loader;
pub mod types;

use clap::{Args, Parser, Subcommand};
use log::error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use common::types::Weight;
use csv_loader::CsvEdgeSource;
use error::Error;
use floyd_core::{FloydWarshallSolver, GraphMatrix};
use generator::RandomEdgeSource;
use pipeline::Pipeline;
use query::{Query, QuerySession, answer_query, parse_query};
use text_loader::{TextEdgeSource, write_edges};
use types::{DataSource, EdgeSource};

#[derive(Parser, Debug)]
#[command(author, version, about = "All-pairs shortest paths with Floyd-Warshall")]
struct Opts {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute all-pairs shortest paths and answer path queries
    Solve(SolveArgs),
    /// Print a random graph in the edge-list text format
    Generate(GenerateArgs),
}

#[derive(Args, Debug)]
struct SolveArgs {
    /// Edge list file. Edges (and then queries) are read from stdin when omitted.
    input: Option<PathBuf>,

    /// Treat INPUT as CSV with a from,to,weight header
    #[arg(long)]
    csv: bool,

    /// Configuration file (defaults to ./Floyd.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Also print the edge list and the matrix before relaxation
    #[arg(short, long)]
    verbose: bool,

    /// Also print the predecessor matrix
    #[arg(long)]
    predecessors: bool,

    /// Exit after printing the matrix
    #[arg(long)]
    no_interactive: bool,

    /// Answer a u,v query and skip the interactive loop. Repeatable.
    #[arg(short, long = "query", value_name = "U,V")]
    queries: Vec<String>,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    #[arg(long)]
    vertices: usize,

    #[arg(long)]
    edges: usize,

    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    min_weight: Weight,

    #[arg(long, default_value_t = 10, allow_negative_numbers = true)]
    max_weight: Weight,

    /// Seed for a reproducible graph
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let opts = Opts::parse();
    let result = match opts.command {
        Command::Solve(args) => solve(args),
        Command::Generate(args) => generate(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn solve(args: SolveArgs) -> Result<(), Error> {
    let config = config::load_config(args.config.as_deref())?;
    let source = DataSource::new(args.input, args.csv)?;

    let mut render = config.render.clone();
    render.show_predecessors |= args.predecessors;

    let solver = FloydWarshallSolver::new().with_progress_every(config.engine.progress_every);
    let interactive = !args.no_interactive && args.queries.is_empty();
    let max_line_length = config.loader.max_line_length;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match source {
        DataSource::Stdin => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            let loader = TextEdgeSource::new(&mut input, max_line_length);
            let matrix = Pipeline::new(loader, solver, render, args.verbose).run(&mut out)?;
            serve(&matrix, &args.queries, interactive, input, &mut out)
        }
        DataSource::Text(path) => {
            let file = io::BufReader::new(std::fs::File::open(&path)?);
            let loader = TextEdgeSource::new(file, max_line_length);
            let matrix = Pipeline::new(loader, solver, render, args.verbose).run(&mut out)?;
            serve(&matrix, &args.queries, interactive, io::stdin().lock(), &mut out)
        }
        DataSource::Csv(path) => {
            let loader = CsvEdgeSource::new(path);
            let matrix = Pipeline::new(loader, solver, render, args.verbose).run(&mut out)?;
            serve(&matrix, &args.queries, interactive, io::stdin().lock(), &mut out)
        }
    }
}

/// Answers `--query` pairs, or runs the interactive loop on `input`.
fn serve<R: BufRead, W: Write>(
    matrix: &GraphMatrix,
    queries: &[String],
    interactive: bool,
    input: R,
    out: &mut W,
) -> Result<(), Error> {
    for raw in queries {
        let (u, v) = match parse_query(raw)? {
            Query::Path(u, v) => (u, v),
            Query::Quit => break,
        };

        match answer_query(matrix, u, v) {
            Ok(answer) => writeln!(out, "{}: {}", raw.trim(), answer)?,
            Err(e @ Error::VertexOutOfRange(_)) => writeln!(out, "{}: {}", raw.trim(), e)?,
            Err(e) => return Err(e),
        }
    }

    if interactive {
        let answered = QuerySession::new(matrix, input, out).run()?;
        log::debug!("Answered {} queries", answered);
    }

    Ok(())
}

fn generate(args: GenerateArgs) -> Result<(), Error> {
    let edges = RandomEdgeSource {
        vertices: args.vertices,
        edges: args.edges,
        min_weight: args.min_weight,
        max_weight: args.max_weight,
        seed: args.seed,
    }
    .load_edges()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_edges(&edges, &mut out)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn scenario_matrix() -> GraphMatrix {
        let mut matrix = floyd_core::build(vec![(1, 2, 5)]).unwrap();
        floyd_core::run(&mut matrix).unwrap();
        matrix
    }

    #[test]
    fn cli_parses_solve_flags() {
        let opts = Opts::try_parse_from([
            "floyd", "solve", "graph.txt", "--verbose", "-q", "1,2", "-q", "2,1",
        ])
        .unwrap();

        match opts.command {
            Command::Solve(args) => {
                assert_eq!(args.input, Some(PathBuf::from("graph.txt")));
                assert!(args.verbose);
                assert!(!args.csv);
                assert_eq!(args.queries, vec!["1,2", "2,1"]);
            }
            other => panic!("Expected solve, got: {:?}", other),
        }
    }

    #[test]
    fn cli_parses_negative_weight_bounds() {
        let opts = Opts::try_parse_from([
            "floyd", "generate", "--vertices", "4", "--edges", "8", "--min-weight", "-5",
        ])
        .unwrap();

        match opts.command {
            Command::Generate(args) => {
                assert_eq!(args.min_weight, -5);
                assert_eq!(args.max_weight, 10);
                assert_eq!(args.seed, None);
            }
            other => panic!("Expected generate, got: {:?}", other),
        }
    }

    #[test]
    fn serve_answers_listed_queries_without_loop() {
        let matrix = scenario_matrix();
        let mut out = Vec::new();
        let queries = vec!["1,2".to_string(), "2,1".to_string(), "7,1".to_string()];

        serve(&matrix, &queries, false, Cursor::new("1,2\n"), &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "1,2: [1 2] (weight 5)\n2,1: No path found\n7,1: Vertex 7 does not exist.\n"
        );
    }

    #[test]
    fn serve_rejects_malformed_listed_query() {
        let matrix = scenario_matrix();
        let mut out = Vec::new();
        let queries = vec!["1-2".to_string()];

        assert!(matches!(
            serve(&matrix, &queries, false, Cursor::new(""), &mut out),
            Err(Error::MalformedQuery { .. })
        ));
    }

    #[test]
    fn serve_reports_non_positive_listed_query_and_continues() {
        let matrix = scenario_matrix();
        let mut out = Vec::new();
        let queries = vec!["0,1".to_string(), "1,-1".to_string(), "1,2".to_string()];

        serve(&matrix, &queries, false, Cursor::new(""), &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "0,1: Vertex 0 does not exist.\n1,-1: Vertex -1 does not exist.\n1,2: [1 2] (weight 5)\n"
        );
    }
}
