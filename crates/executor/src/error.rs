use thiserror::Error;

use common::error::Error as FloydError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Malformed input on line {line}: {reason}")]
    MalformedInput { line: usize, reason: String },

    #[error("Malformed query '{query}': {reason}")]
    MalformedQuery { query: String, reason: String },

    #[error("Vertex {0} does not exist.")]
    VertexOutOfRange(i64),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    ConfigLoadError(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Graph processing error: {0}")]
    GraphError(#[from] FloydError),
}

impl Error {
    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Error::MalformedInput {
            line,
            reason: reason.into(),
        }
    }

    pub(crate) fn malformed_query(query: &str, reason: impl Into<String>) -> Self {
        Error::MalformedQuery {
            query: query.to_string(),
            reason: reason.into(),
        }
    }
}
