// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! ANSI-colored log rendering.
//!
//! Parses log text with [`tintline_core`] and renders the resulting segments
//! as HTML spans, JSON, plain text, or normalized ANSI. Log entries carry a
//! level and timestamp and render as a full log line.

pub mod cli;
pub mod config;
pub mod error;
pub mod log;
pub mod output;
#[doc(hidden)]
pub mod output_diagnostic;
pub mod render;
pub mod run;

pub use config::Theme;
pub use error::RenderError;
pub use log::{LogEntry, LogLevel};
pub use tintline_core::{parse, strip_ansi, ColorToken, Segment, StyleFlags, StyleState};
