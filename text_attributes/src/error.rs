// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors raised while exporting rendered images.

use std::path::PathBuf;

/// Error raised when exporting a [`RasterImage`](crate::RasterImage).
///
/// Mapping, measuring and rasterizing never fail; only encoding and writing the result can.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    path: Option<PathBuf>,
    message: String,
    source: Option<std::io::Error>,
}

impl Error {
    /// The category of this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The file being written, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        self.path.as_deref()
    }

    pub(crate) fn encode(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Encode,
            path: None,
            message: message.into(),
            source: None,
        }
    }

    pub(crate) fn io(path: PathBuf, source: std::io::Error) -> Self {
        Self {
            kind: ErrorKind::Io,
            message: source.to_string(),
            path: Some(path),
            source: Some(source),
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match (self.kind, &self.path) {
            (ErrorKind::Encode, _) => write!(f, "PNG encoding failed: {}", self.message),
            (ErrorKind::Io, Some(path)) => {
                write!(f, "writing {} failed: {}", path.display(), self.message)
            }
            (ErrorKind::Io, None) => write!(f, "write failed: {}", self.message),
        }
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|err| err as &(dyn core::error::Error + 'static))
    }
}

/// The non-exhaustive category of an [`Error`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The pixels could not be encoded.
    Encode,
    /// The encoded image could not be written.
    Io,
}
