// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Log entries: a level, a timestamp, and an ANSI-colored message.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use tintline_core::{parse, ColorToken, Segment};

use crate::error::RenderError;

/// Severity of a log entry
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    #[default]
    Info,
    Warn,
    Error,
    Success,
}

impl LogLevel {
    pub const ALL: [LogLevel; 4] = [
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::Success,
    ];

    /// Case-insensitive lookup by name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(name))
    }

    /// Terminal color for the level badge.
    pub fn color(self) -> ColorToken {
        match self {
            LogLevel::Info => ColorToken::BrightBlack,
            LogLevel::Warn => ColorToken::Yellow,
            LogLevel::Error => ColorToken::Red,
            LogLevel::Success => ColorToken::Green,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Success => "SUCCESS",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single log line
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: u64,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub level: LogLevel,
    pub message: String,
}

impl LogEntry {
    pub fn new(id: u64, timestamp: impl Into<String>, level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            id,
            timestamp: timestamp.into(),
            level,
            message: message.into(),
        }
    }

    /// Parse the message into styled segments.
    pub fn segments(&self) -> Vec<Segment> {
        parse(&self.message)
    }
}

/// A log entry with its message already parsed, for JSON output.
#[derive(Clone, Debug, Serialize)]
pub struct RenderedEntry<'a> {
    pub id: u64,
    pub timestamp: &'a str,
    pub level: LogLevel,
    pub segments: Vec<Segment>,
}

impl<'a> From<&'a LogEntry> for RenderedEntry<'a> {
    fn from(entry: &'a LogEntry) -> Self {
        RenderedEntry {
            id: entry.id,
            timestamp: &entry.timestamp,
            level: entry.level,
            segments: entry.segments(),
        }
    }
}

/// Parse newline-delimited JSON log entries. Blank lines are skipped.
pub fn parse_jsonl(input: &str) -> Result<Vec<LogEntry>, RenderError> {
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            serde_json::from_str(line).map_err(|source| RenderError::Entry {
                line: idx + 1,
                source,
            })
        })
        .collect()
}

/// Wrap plain text lines into log entries, numbered from 1.
///
/// `stamp` is called once per line for its timestamp.
pub fn entries_from_lines<F>(input: &str, level: LogLevel, mut stamp: F) -> Vec<LogEntry>
where
    F: FnMut() -> String,
{
    input
        .lines()
        .zip(1u64..)
        .map(|(line, id)| LogEntry::new(id, stamp(), level, line))
        .collect()
}

/// Local wall-clock time as `HH:MM:SS`.
pub fn local_timestamp() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
