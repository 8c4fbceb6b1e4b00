use csv::ReaderBuilder;
use log::{debug, error};
use serde::Deserialize;
use std::fs::File;
use std::path::PathBuf;

use super::error::Error;
use super::types::{EdgeSource, MAX_VERTEX_ID};
use common::types::{Edge, Vertex, Weight};

// Helper struct for CSV parsing
#[derive(Debug, Deserialize, Default)]
pub struct CsvRecord {
    #[serde(rename = "from")]
    pub from_vertex: Vertex,

    #[serde(rename = "to")]
    pub to_vertex: Vertex,

    #[serde(rename = "weight")]
    pub weight: Weight,
}

/// Loads edges from a CSV file with a `from,to,weight` header. Extra
/// columns are ignored.
pub struct CsvEdgeSource {
    path: PathBuf,
}

impl CsvEdgeSource {
    pub fn new(path: PathBuf) -> Self {
        CsvEdgeSource { path }
    }

    fn parse_csv_to_edges(&self) -> Result<Vec<Edge>, Error> {
        let file = File::open(&self.path).map_err(|e| {
            error!("Failed to read file {}: {:?}", self.path.display(), e);
            Error::IoError(e)
        })?;

        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(file);

        let mut edges = Vec::new();

        for (idx, result) in rdr.deserialize().enumerate() {
            let record: CsvRecord = result?;
            // Header is line 1.
            let line = idx + 2;
            if record.from_vertex == 0 || record.to_vertex == 0 {
                return Err(Error::malformed(line, "vertex ids start at 1"));
            }
            if record.from_vertex.max(record.to_vertex) > MAX_VERTEX_ID {
                return Err(Error::malformed(
                    line,
                    format!("vertex ids may not exceed {}", MAX_VERTEX_ID),
                ));
            }
            edges.push((record.from_vertex, record.to_vertex, record.weight));
        }

        debug!("Read {} edges from {}", edges.len(), self.path.display());
        Ok(edges)
    }
}

impl EdgeSource for CsvEdgeSource {
    fn load_edges(self) -> Result<Vec<Edge>, Error> {
        self.parse_csv_to_edges()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const MOCK_CSV_CONTENT: &str = "\
id,from,to,weight,label
1,1,3,-2,a
2,3,4,2,b
3,4,2,-1,c
4,2,1,4,d
";

    fn write_temp(content: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        temp_file
            .write_all(content.as_bytes())
            .expect("Failed to write mock content");
        temp_file
    }

    #[test]
    fn test_parse_csv_to_edges_success() {
        let temp_file = write_temp(MOCK_CSV_CONTENT);
        let result = CsvEdgeSource::new(temp_file.path().to_path_buf()).load_edges();

        assert!(
            result.is_ok(),
            "Parsing failed with error: {:?}",
            result.err()
        );

        let expected_edges: Vec<Edge> = vec![(1, 3, -2), (3, 4, 2), (4, 2, -1), (2, 1, 4)];
        assert_eq!(
            result.unwrap(),
            expected_edges,
            "Parsed edges do not match expected data."
        );
    }

    #[test]
    fn test_parse_csv_rejects_zero_vertex() {
        let temp_file = write_temp("from,to,weight\n1,2,3\n0,2,3\n");
        let result = CsvEdgeSource::new(temp_file.path().to_path_buf()).load_edges();

        match result {
            Err(Error::MalformedInput { line, .. }) => assert_eq!(line, 3),
            other => panic!("Expected MalformedInput, got: {:?}", other),
        }
    }

    #[test]
    fn test_parse_csv_rejects_vertex_above_id_range() {
        let temp_file = write_temp("from,to,weight\n1,2,3\n1,4294967296,3\n");
        let result = CsvEdgeSource::new(temp_file.path().to_path_buf()).load_edges();

        match result {
            Err(Error::MalformedInput { line, .. }) => assert_eq!(line, 3),
            other => panic!("Expected MalformedInput, got: {:?}", other),
        }
    }

    #[test]
    fn test_parse_csv_rejects_non_numeric_weight() {
        let temp_file = write_temp("from,to,weight\n1,2,heavy\n");
        let result = CsvEdgeSource::new(temp_file.path().to_path_buf()).load_edges();

        assert!(matches!(result, Err(Error::CsvError(_))));
    }

    #[test]
    fn test_parse_csv_to_edges_file_not_found() {
        let result = CsvEdgeSource::new("non_existent_file.csv".into()).load_edges();

        if let Err(Error::IoError(e)) = result {
            assert_eq!(e.kind(), std::io::ErrorKind::NotFound);
        } else {
            panic!("Expected IoError, got: {:?}", result.err());
        }
    }
}
