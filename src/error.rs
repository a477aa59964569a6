use std::io;
use std::path::PathBuf;
use std::result;

use thiserror::Error;

use crate::Row;

/// An error found somewhere in the reformatting chain. Every one of them is
/// fatal for the run.
#[derive(Debug, Error)]
pub enum Error {
    #[error("could not access {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A mapped source column has no value in a record. `record` holds every
    /// `header=value` pair of the offending record.
    #[error("missing field {key} in record: {record}")]
    MissingField { key: String, record: String },

    #[error("no input files were given")]
    NoInputs,
}

impl Error {
    pub(crate) fn io<P: Into<PathBuf>>(path: P, source: io::Error) -> Error {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = result::Result<T, Error>;

/// The type that actually flows the transformation chain. Either a row or an
/// error.
pub type RowResult = result::Result<Row, Error>;
