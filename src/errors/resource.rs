// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors raised at the I/O boundary while acquiring text.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResourceError {
    /// Local file could not be read.
    #[error("failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Network level failure (DNS, connect, TLS, timeout, unsupported scheme).
    #[error("failed to fetch '{url}': {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-success status.
    #[error("'{url}' answered with HTTP status {status}")]
    Status { url: String, status: u16 },

    /// Bytes were not valid UTF-8.
    #[error("'{identifier}' is not valid UTF-8: {source}")]
    Decode {
        identifier: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("invalid resource identifier: {0:?}")]
    InvalidIdentifier(String),
}
