// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Errors raised while loading input or a theme.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when rendering
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read theme {}: {source}", path.display())]
    Theme {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid log entry on line {line}: {source}")]
    Entry {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Validation error: {0}")]
    Validation(String),
}
