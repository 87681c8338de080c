use std::path::PathBuf;

use thiserror::Error;

/// Failures recognized at the tool boundary.
///
/// The turn builder itself is total and never fails; everything that can go
/// wrong happens while reading the input file.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("the file '{}' was not found", .0.display())]
    FileNotFound(PathBuf),

    #[error("failed to read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
