use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Why a source file could not be turned into a [`Table`](crate::data::Table).
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("delimiter must be a single character other than '\"', '\\r' or '\\n', got {0:?}")]
    InvalidDelimiter(String),

    #[error("source contains the ASCII unit separator (0x1f), which is reserved while splitting on {0:?}")]
    DelimiterCollision(char),

    #[error("no columns to parse from file")]
    Empty,

    #[error("line {line} has {found} fields, expected {expected}")]
    RaggedRow {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("missing required argument <{0}>")]
    MissingArgument(&'static str),

    #[error(transparent)]
    Usage(clap::Error),

    #[error("failed to parse {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}
