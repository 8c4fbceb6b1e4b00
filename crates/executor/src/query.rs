use std::io::{BufRead, Write};

use log::{debug, warn};

use super::error::Error;
use super::render::render_weighted_path;
use common::types::Vertex;
use floyd_core::GraphMatrix;

pub const PROMPT: &str = "Enter vertex pair u,v to show path or type q to quit";

/// What a single input line asked for.
///
/// Ids are kept as typed. Whether they name a vertex is only known once
/// they meet a matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    Path(i64, i64),
    Quit,
}

/// Parses `u,v` or `q`/`Q`.
///
/// # Errors
/// `Error::MalformedQuery` if the line is neither, or an id is not an integer.
pub fn parse_query(line: &str) -> Result<Query, Error> {
    let line = line.trim();
    if line.eq_ignore_ascii_case("q") {
        return Ok(Query::Quit);
    }

    let (u, v) = line
        .split_once(',')
        .ok_or_else(|| Error::malformed_query(line, "expected u,v or q"))?;

    Ok(Query::Path(parse_id(line, u)?, parse_id(line, v)?))
}

fn parse_id(query: &str, token: &str) -> Result<i64, Error> {
    let token = token.trim();
    token
        .parse::<i64>()
        .map_err(|_| Error::malformed_query(query, format!("'{}' is not an integer", token)))
}

/// Maps a typed id onto a vertex of `matrix`.
fn resolve_vertex(matrix: &GraphMatrix, id: i64) -> Result<Vertex, Error> {
    Vertex::try_from(id)
        .ok()
        .filter(|&v| matrix.check_vertex(v).is_ok())
        .ok_or(Error::VertexOutOfRange(id))
}

/// Answer line for the pair `u`, `v`.
///
/// # Errors
/// `Error::VertexOutOfRange` if either id is outside `[1, N]`, and
/// `Error::GraphError` for matrix failures. The caller decides whether the
/// session survives them.
pub fn answer_query(matrix: &GraphMatrix, u: i64, v: i64) -> Result<String, Error> {
    matrix.ensure_readable()?;
    let u = resolve_vertex(matrix, u)?;
    let v = resolve_vertex(matrix, v)?;

    let path = matrix.weighted_path(u, v)?;
    Ok(render_weighted_path(path.as_ref()))
}

/// Interactive "show path between u and v" loop over a relaxed matrix.
///
/// Unknown vertices and malformed lines only reject that one query. The
/// session ends on `q`, `Q` or end of input.
pub struct QuerySession<'a, R, W> {
    matrix: &'a GraphMatrix,
    input: R,
    output: W,
}

impl<'a, R, W> QuerySession<'a, R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(matrix: &'a GraphMatrix, input: R, output: W) -> Self {
        QuerySession {
            matrix,
            input,
            output,
        }
    }

    /// Runs until quit, returning the number of paths answered.
    pub fn run(mut self) -> Result<usize, Error> {
        writeln!(self.output, "{}", PROMPT)?;
        self.output.flush()?;

        let mut answered = 0;
        let mut line = String::new();

        loop {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                debug!("Query input closed");
                break;
            }
            if line.trim().is_empty() {
                continue;
            }

            let (u, v) = match parse_query(&line) {
                Ok(Query::Quit) => break,
                Ok(Query::Path(u, v)) => (u, v),
                Err(e) => {
                    warn!("Rejected query '{}': {}", line.trim(), e);
                    writeln!(self.output, "Expected u,v or q")?;
                    continue;
                }
            };

            match answer_query(self.matrix, u, v) {
                Ok(answer) => {
                    writeln!(self.output, "{}", answer)?;
                    answered += 1;
                }
                Err(e @ Error::VertexOutOfRange(_)) => {
                    writeln!(self.output, "{}", e)?;
                }
                Err(e) => return Err(e),
            }
            self.output.flush()?;
        }

        Ok(answered)
    }
}
