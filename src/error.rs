use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the catalog loader. The table itself has no error
/// paths: insertion always succeeds and a failed lookup is a normal `None`.
#[derive(Debug, Error)]
pub enum Error {
    /// The catalog file could not be opened or read.
    #[error("failed to read catalog file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A catalog row could not be parsed into a course.
    #[error("catalog line {line}: {reason}")]
    MalformedRow { line: usize, reason: &'static str },
}
