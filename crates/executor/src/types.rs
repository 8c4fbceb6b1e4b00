use std::path::PathBuf;

use super::error::Error;
use common::types::{Edge, Vertex};

/// Largest vertex id the loaders accept, the range of a signed 32-bit id.
pub const MAX_VERTEX_ID: Vertex = i32::MAX as Vertex;

/// A trait defining the contract for anything that can supply the edge list
/// the matrices are built from.
///
/// Decouples the pipeline from the concrete input (text stream, CSV file,
/// random generator). Sources are consumed by loading.
pub trait EdgeSource {
    fn load_edges(self) -> Result<Vec<Edge>, Error>;
}

/// Where the `solve` command reads its graph from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// Count-then-`u,v,w` text on standard input.
    Stdin,
    /// Count-then-`u,v,w` text file.
    Text(PathBuf),
    /// CSV file with a `from,to,weight` header.
    Csv(PathBuf),
}

impl DataSource {
    pub fn new(path: Option<PathBuf>, csv: bool) -> Result<Self, Error> {
        match (path, csv) {
            (None, false) => Ok(DataSource::Stdin),
            (None, true) => Err(Error::InvalidArgument(
                "CSV input requires a file path".to_string(),
            )),
            (Some(path), false) => Ok(DataSource::Text(path)),
            (Some(path), true) => Ok(DataSource::Csv(path)),
        }
    }
}
