use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failure of a single chart (or of loading the data that feeds every chart).
#[derive(Debug, Error)]
pub enum TrendChartError {
    /// Missing or malformed job-count input.
    #[error("Data error: {0}")]
    Data(String),

    /// The data source or the output location could not be read or written.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The drawing backend failed after the output file was opened.
    #[error("Render error: {0}")]
    Render(String),
}

impl TrendChartError {
    pub fn data(msg: impl Into<String>) -> Self {
        TrendChartError::Data(msg.into())
    }

    pub fn io(path: &Path, source: std::io::Error) -> Self {
        TrendChartError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn is_data(&self) -> bool {
        matches!(self, TrendChartError::Data(_))
    }

    pub fn is_io(&self) -> bool {
        matches!(self, TrendChartError::Io { .. })
    }
}
