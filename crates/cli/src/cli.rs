// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::log::LogLevel;

/// Render ANSI-colored log output
#[derive(Parser, Debug, Clone)]
#[command(name = "tintline", version, about = "Render ANSI-colored log output")]
pub struct Cli {
    /// Input file to read ("-" or omitted reads stdin)
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value = "html")]
    pub format: OutputFormat,

    /// Input format
    #[arg(long, value_enum, default_value = "text")]
    pub input_format: InputFormat,

    /// Theme file (TOML or JSON) overriding the default class names
    #[arg(long, value_name = "PATH", env = "TINTLINE_THEME")]
    pub theme: Option<PathBuf>,

    /// Treat each text line as a log entry with this level
    #[arg(long, value_enum)]
    pub level: Option<LogLevel>,

    /// Stamp each text line with the current local time
    #[arg(long)]
    pub timestamps: bool,

    /// Print diagnostic notes to stderr
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

impl Cli {
    /// The input path, or `None` when reading stdin.
    pub fn input_path(&self) -> Option<&PathBuf> {
        self.input.as_ref().filter(|p| p.as_os_str() != "-")
    }

    /// Whether text lines should be wrapped into log entries.
    pub fn wants_entries(&self) -> bool {
        matches!(self.input_format, InputFormat::Jsonl) || self.level.is_some() || self.timestamps
    }
}

/// Output format for rendered lines
#[derive(Clone, Copy, Debug, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// HTML spans carrying class names
    #[default]
    Html,
    /// JSON array of segments or log entries
    Json,
    /// Plain text with escape sequences removed
    Text,
    /// Re-encoded ANSI with one full sequence per segment
    Ansi,
}

/// How input lines are interpreted
#[derive(Clone, Copy, Debug, ValueEnum, Default, PartialEq, Eq)]
pub enum InputFormat {
    /// One message per line
    #[default]
    Text,
    /// One JSON log entry per line
    Jsonl,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
