//! Error types for reading reflow input.
//!
//! | Error | Cause |
//! |-------|-------|
//! | [`FileAccess`](ReflowError::FileAccess) | path missing, unreadable, or a directory |
//! | [`Decoding`](ReflowError::Decoding) | file contents are not valid UTF-8 |
//!
//! The reflow itself cannot fail, so every variant here belongs to the input
//! side. Both carry the offending path, and the underlying error is exposed
//! through [`std::error::Error::source`].

use std::io;
use std::path::PathBuf;
use std::str::Utf8Error;

use thiserror::Error;

/// Errors that can occur while loading a file for reflow.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ReflowError {
    #[error("cannot read input file `{}`", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("input file `{}` is not valid UTF-8", .path.display())]
    Decoding {
        path: PathBuf,
        #[source]
        source: Utf8Error,
    },
}

impl ReflowError {
    /// Path of the input file the error refers to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            ReflowError::FileAccess { path, .. } | ReflowError::Decoding { path, .. } => path,
        }
    }
}
