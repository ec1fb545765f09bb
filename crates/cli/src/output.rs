// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output format handling for HTML, JSON, plain text, and ANSI modes.

use serde::Serialize;
use std::io::Write;
use tintline_core::{parse_from, Segment, StyleState};

use crate::cli::OutputFormat;
use crate::config::Theme;
use crate::error::RenderError;
use crate::log::{LogEntry, RenderedEntry};
use crate::render::{render_ansi, render_html, render_log_entry_html, render_text};

/// A plain line with its parsed segments, for JSON output.
#[derive(Clone, Debug, Serialize)]
pub struct RenderedLine {
    pub line: usize,
    pub segments: Vec<Segment>,
}

/// Writes parsed lines or log entries in the configured format.
pub struct OutputWriter<'a, W: Write> {
    writer: W,
    format: OutputFormat,
    theme: &'a Theme,
}

impl<'a, W: Write> OutputWriter<'a, W> {
    /// Create a new output writer
    pub fn new(writer: W, format: OutputFormat, theme: &'a Theme) -> Self {
        Self {
            writer,
            format,
            theme,
        }
    }

    /// Write plain text lines, one output line (or JSON element) each.
    ///
    /// The style carries over line breaks, so a color opened on one line
    /// stays active until a later sequence changes it.
    pub fn write_lines(&mut self, input: &str) -> Result<usize, RenderError> {
        let mut style = StyleState::default();
        let lines: Vec<Vec<Segment>> = input
            .lines()
            .map(|line| {
                let (segments, next) = parse_from(line, style);
                style = next;
                segments
            })
            .collect();

        match self.format {
            OutputFormat::Html => {
                for segments in &lines {
                    writeln!(
                        self.writer,
                        "<div class=\"line\">{}</div>",
                        render_html(segments, self.theme)
                    )?;
                }
            }
            OutputFormat::Json => {
                let rendered: Vec<RenderedLine> = lines
                    .iter()
                    .zip(1..)
                    .map(|(segments, line)| RenderedLine {
                        line,
                        segments: segments.clone(),
                    })
                    .collect();
                self.write_json(&rendered)?;
            }
            OutputFormat::Text => {
                for segments in &lines {
                    writeln!(self.writer, "{}", render_text(segments))?;
                }
            }
            OutputFormat::Ansi => {
                for segments in &lines {
                    writeln!(self.writer, "{}", render_ansi(segments))?;
                }
            }
        }

        self.writer.flush()?;
        Ok(lines.len())
    }

    /// Write log entries, one output line (or JSON element) each.
    pub fn write_entries(&mut self, entries: &[LogEntry]) -> Result<usize, RenderError> {
        match self.format {
            OutputFormat::Html => {
                for entry in entries {
                    writeln!(self.writer, "{}", render_log_entry_html(entry, self.theme))?;
                }
            }
            OutputFormat::Json => {
                let rendered: Vec<RenderedEntry<'_>> =
                    entries.iter().map(RenderedEntry::from).collect();
                self.write_json(&rendered)?;
            }
            OutputFormat::Text => {
                for entry in entries {
                    writeln!(
                        self.writer,
                        "{}[{}] {}",
                        timestamp_prefix(entry),
                        entry.level,
                        render_text(&entry.segments())
                    )?;
                }
            }
            OutputFormat::Ansi => {
                for entry in entries {
                    let badge = StyleState::fg(entry.level.color()).bold();
                    writeln!(
                        self.writer,
                        "{}{}[{}]\x1b[0m {}",
                        timestamp_prefix(entry),
                        badge.to_escape_code(),
                        entry.level,
                        render_ansi(&entry.segments())
                    )?;
                }
            }
        }

        self.writer.flush()?;
        Ok(entries.len())
    }

    fn write_json<T: Serialize>(&mut self, value: &T) -> Result<(), RenderError> {
        serde_json::to_writer_pretty(&mut self.writer, value)?;
        writeln!(self.writer)?;
        Ok(())
    }

    /// Consume the writer and return the underlying sink.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

fn timestamp_prefix(entry: &LogEntry) -> String {
    if entry.timestamp.is_empty() {
        String::new()
    } else {
        format!("{} ", entry.timestamp)
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
