// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::path::PathBuf;
use thiserror::Error;

/// Errors from installing or loading the sentence model.
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("failed to install sentence model into '{}': {source}", .dir.display())]
    Install {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read sentence model '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("sentence model '{}' contains no abbreviations", .path.display())]
    Empty { path: PathBuf },
}
