use std::io::{BufRead, Write};

use log::debug;

use super::error::Error;
use super::types::{EdgeSource, MAX_VERTEX_ID};
use common::types::{Edge, Vertex, Weight};

/// Reads the line-oriented edge format:
///
/// ```text
/// 5
/// 1,3,-2
/// 3,4,2
/// 4,2,-1
/// 2,1,4
/// 2,3,3
/// ```
///
/// The first non-blank line is the number of edges, each following
/// non-blank line one `source,destination,weight` triple. Reading stops
/// after the announced number of edges, so the rest of the stream can be
/// used for something else.
pub struct TextEdgeSource<R> {
    reader: R,
    max_line_length: usize,
    line_no: usize,
}

impl<R: BufRead> TextEdgeSource<R> {
    pub fn new(reader: R, max_line_length: usize) -> Self {
        TextEdgeSource {
            reader,
            max_line_length,
            line_no: 0,
        }
    }

    /// Next non-blank line, trimmed, or `None` at end of input.
    fn next_line(&mut self) -> Result<Option<String>, Error> {
        let mut buf = String::new();
        loop {
            buf.clear();
            if self.reader.read_line(&mut buf)? == 0 {
                return Ok(None);
            }
            self.line_no += 1;

            let line = buf.trim();
            if line.len() > self.max_line_length {
                return Err(Error::malformed(
                    self.line_no,
                    format!(
                        "line is {} bytes long, limit is {}",
                        line.len(),
                        self.max_line_length
                    ),
                ));
            }
            if !line.is_empty() {
                return Ok(Some(line.to_string()));
            }
        }
    }
}

impl<R: BufRead> EdgeSource for TextEdgeSource<R> {
    fn load_edges(mut self) -> Result<Vec<Edge>, Error> {
        let header = self
            .next_line()?
            .ok_or_else(|| Error::malformed(1, "missing edge count"))?;
        let count = parse_edge_count(&header, self.line_no)?;

        let mut edges = Vec::with_capacity(count.min(4096));
        while edges.len() < count {
            let line = self.next_line()?.ok_or_else(|| {
                Error::malformed(
                    self.line_no + 1,
                    format!("expected {} edges, found {}", count, edges.len()),
                )
            })?;
            edges.push(parse_edge_line(&line, self.line_no)?);
        }

        debug!("Read {} edges from {} lines", edges.len(), self.line_no);
        Ok(edges)
    }
}

fn parse_edge_count(token: &str, line: usize) -> Result<usize, Error> {
    match token.parse::<usize>() {
        Ok(count) if count > 0 => Ok(count),
        _ => Err(Error::malformed(
            line,
            format!("edge count '{}' is not a positive integer", token),
        )),
    }
}

/// Parses a 1-based vertex id no larger than `MAX_VERTEX_ID`.
fn parse_vertex(token: &str, line: usize) -> Result<Vertex, Error> {
    let token = token.trim();
    if token.is_empty() {
        return Err(Error::malformed(line, "empty vertex field"));
    }

    match token.parse::<i64>() {
        Ok(id) if id > 0 => Vertex::try_from(id)
            .ok()
            .filter(|&v| v <= MAX_VERTEX_ID)
            .ok_or_else(|| {
                Error::malformed(
                    line,
                    format!("vertex id {} exceeds {}", id, MAX_VERTEX_ID),
                )
            }),
        Ok(id) => Err(Error::malformed(
            line,
            format!("vertex id {} must be positive", id),
        )),
        Err(_) => Err(Error::malformed(
            line,
            format!("vertex id '{}' is not an integer", token),
        )),
    }
}

fn parse_weight(token: &str, line: usize) -> Result<Weight, Error> {
    let token = token.trim();
    if token.is_empty() {
        return Err(Error::malformed(line, "empty weight field"));
    }

    token.parse::<Weight>().map_err(|_| {
        Error::malformed(
            line,
            format!("weight '{}' is not a 32-bit integer", token),
        )
    })
}

/// Parses one `u,v,w` edge line.
pub(crate) fn parse_edge_line(line: &str, line_no: usize) -> Result<Edge, Error> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != 3 {
        return Err(Error::malformed(
            line_no,
            format!(
                "expected 3 comma-separated fields, found {}",
                fields.len()
            ),
        ));
    }

    Ok((
        parse_vertex(fields[0], line_no)?,
        parse_vertex(fields[1], line_no)?,
        parse_weight(fields[2], line_no)?,
    ))
}

/// Writes `edges` in the format `TextEdgeSource` reads.
pub fn write_edges<W: Write>(edges: &[Edge], writer: &mut W) -> Result<(), Error> {
    writeln!(writer, "{}", edges.len())?;
    for &(u, v, w) in edges {
        writeln!(writer, "{},{},{}", u, v, w)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufReader, Cursor, Read};

    const MOCK_INPUT: &str = "\
5
1,3,-2
3,4,2
4,2,-1
2,1,4
2,3,3
";

    fn load(input: &str) -> Result<Vec<Edge>, Error> {
        TextEdgeSource::new(Cursor::new(input), 64).load_edges()
    }

    fn malformed_line(result: Result<Vec<Edge>, Error>) -> usize {
        match result {
            Err(Error::MalformedInput { line, .. }) => line,
            other => panic!("Expected MalformedInput, got: {:?}", other),
        }
    }

    #[test]
    fn test_parse_edges_success() {
        let edges = load(MOCK_INPUT).expect("Parsing failed");

        let expected_edges: Vec<Edge> =
            vec![(1, 3, -2), (3, 4, 2), (4, 2, -1), (2, 1, 4), (2, 3, 3)];
        assert_eq!(edges, expected_edges);
    }

    #[test]
    fn test_blank_lines_and_padding_are_skipped() {
        let edges = load("\n  2 \n\n1,2,5\n\n 2, 3 ,-1\n").expect("Parsing failed");
        assert_eq!(edges, vec![(1, 2, 5), (2, 3, -1)]);
    }

    #[test]
    fn test_stops_after_announced_count() {
        let mut reader = BufReader::new(Cursor::new("1\n1,2,5\n1,2\nq\n"));
        let edges = TextEdgeSource::new(&mut reader, 64)
            .load_edges()
            .expect("Parsing failed");
        assert_eq!(edges, vec![(1, 2, 5)]);

        let mut rest = String::new();
        reader.read_to_string(&mut rest).unwrap();
        assert_eq!(rest, "1,2\nq\n");
    }

    #[test]
    fn test_rejects_bad_count() {
        assert_eq!(malformed_line(load("")), 1);
        assert_eq!(malformed_line(load("0\n")), 1);
        assert_eq!(malformed_line(load("-3\n")), 1);
        assert_eq!(malformed_line(load("five\n1,2,3\n")), 1);
    }

    #[test]
    fn test_rejects_missing_edges() {
        assert_eq!(malformed_line(load("3\n1,2,1\n2,3,1\n")), 4);
    }

    #[test]
    fn test_rejects_wrong_field_count() {
        assert_eq!(malformed_line(load("2\n1,2,1\n2,3\n")), 3);
        assert_eq!(malformed_line(load("1\n1,2,3,4\n")), 2);
    }

    #[test]
    fn test_rejects_non_numeric_and_empty_fields() {
        assert_eq!(malformed_line(load("1\na,2,1\n")), 2);
        assert_eq!(malformed_line(load("1\n1,,1\n")), 2);
        assert_eq!(malformed_line(load("1\n1,2,\n")), 2);
        assert_eq!(malformed_line(load("1\n1,2,x\n")), 2);
    }

    #[test]
    fn test_rejects_non_positive_vertex() {
        assert_eq!(malformed_line(load("1\n0,2,1\n")), 2);
        assert_eq!(malformed_line(load("1\n1,-4,1\n")), 2);
    }

    #[test]
    fn test_rejects_vertex_above_id_range() {
        assert_eq!(malformed_line(load("1\n1,4294967296,1\n")), 2);
        assert_eq!(malformed_line(load("1\n2147483648,1,1\n")), 2);
        assert_eq!(malformed_line(load("1\n1,99999999999999999999,1\n")), 2);
        assert_eq!(
            load("1\n2147483647,1,1\n").unwrap(),
            vec![(MAX_VERTEX_ID, 1, 1)]
        );
    }

    #[test]
    fn test_rejects_weight_outside_i32() {
        assert_eq!(malformed_line(load("1\n1,2,2147483648\n")), 2);
        assert_eq!(load("1\n1,2,-2147483648\n").unwrap(), vec![(1, 2, i32::MIN)]);
    }

    #[test]
    fn test_rejects_overlong_line() {
        let long = format!("1\n1,2,{}\n", "9".repeat(100));
        assert_eq!(malformed_line(load(&long)), 2);
    }

    #[test]
    fn test_written_edges_load_back() {
        let edges: Vec<Edge> = vec![(1, 3, -2), (3, 4, 2), (4, 2, -1)];
        let mut buf = Vec::new();
        write_edges(&edges, &mut buf).unwrap();

        assert_eq!(String::from_utf8(buf.clone()).unwrap(), "3\n1,3,-2\n3,4,2\n4,2,-1\n");
        assert_eq!(load(std::str::from_utf8(&buf).unwrap()).unwrap(), edges);
    }
}
