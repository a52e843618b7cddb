//! Driver-level failures: everything that is not a diagnostic about the
//! program itself.

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("cannot read '{}': {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot read from stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("{0}")]
    Usage(String),
}
