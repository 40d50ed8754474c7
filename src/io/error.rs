use super::Format;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O operation failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("failed to parse {format} data: {details} (at line ~{line})")]
    Parse {
        format: Format,
        line: usize,
        details: String,
    },

    #[error("failed to open distance table '{}': {source}", path.display())]
    TableOpen {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("distance table has {found} entries, expected 9")]
    IncompleteTable { found: usize },

    #[error("underlying bio-forge I/O error: {0}")]
    BioForgeIo(String),

    #[error(transparent)]
    Table(#[from] crate::table::Error),
}

impl From<bio_forge::io::Error> for Error {
    fn from(e: bio_forge::io::Error) -> Self {
        Error::BioForgeIo(e.to_string())
    }
}

impl Error {
    pub fn parse(format: Format, line: usize, details: impl Into<String>) -> Self {
        Self::Parse {
            format,
            line,
            details: details.into(),
        }
    }
}
