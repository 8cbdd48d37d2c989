// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod analysis;
mod config;
mod model;
mod persistence;
mod resource;

pub use analysis::AnalysisError;
pub use config::{ConfigError, ValidationError};
pub use model::ModelError;
pub use persistence::PersistenceError;
pub use resource::ResourceError;
