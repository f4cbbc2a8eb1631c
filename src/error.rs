// Processing errors. Row-level malformation is never an error; only failures to
// open, read or decode the input (or to write the output) end up here.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransformError {
    #[error("cannot open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// The input held no records at all, so there was no header to discard.
    #[error("input has no header row")]
    MissingHeader,

    #[error(transparent)]
    Io(#[from] io::Error),
}
