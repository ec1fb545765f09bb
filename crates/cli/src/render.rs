// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Presentation of parsed segments: class lists, HTML spans, and log lines.

use tintline_core::{Segment, StyleState};

use crate::config::Theme;
use crate::log::LogEntry;

/// Space-separated class names for a style: color first, then bold, italic,
/// underline. Empty for the default style.
pub fn class_list(style: &StyleState, theme: &Theme) -> String {
    let mut classes: Vec<&str> = Vec::with_capacity(4);
    if let Some(color) = style.color {
        classes.push(theme.color_class(color));
    }
    if style.flags.bold {
        classes.push(theme.bold_class());
    }
    if style.flags.italic {
        classes.push(theme.italic_class());
    }
    if style.flags.underline {
        classes.push(theme.underline_class());
    }
    classes.join(" ")
}

/// Escape text for an HTML text node or attribute value.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Render segments as consecutive `<span class="...">` elements.
///
/// The class attribute is always written, empty for default-styled text.
pub fn render_html(segments: &[Segment], theme: &Theme) -> String {
    segments
        .iter()
        .map(|segment| {
            format!(
                "<span class=\"{}\">{}</span>",
                class_list(&segment.style, theme),
                escape_html(&segment.text)
            )
        })
        .collect()
}

/// Render one log entry as a `log-line` div: timestamp, level badge, message.
pub fn render_log_entry_html(entry: &LogEntry, theme: &Theme) -> String {
    format!(
        "<div class=\"log-line\"><span class=\"timestamp\">{}</span><span class=\"level {} font-bold\">[{}]</span><span class=\"message\">{}</span></div>",
        escape_html(&entry.timestamp),
        theme.level_class(entry.level),
        entry.level,
        render_html(&entry.segments(), theme)
    )
}

/// Re-encode segments as ANSI, one full sequence per segment.
///
/// A trailing reset is added when any segment carried a style.
pub fn render_ansi(segments: &[Segment]) -> String {
    let mut out: String = segments.iter().map(Segment::to_ansi).collect();
    if segments.iter().any(|s| !s.style.is_default()) {
        out.push_str("\x1b[0m");
    }
    out
}

/// Concatenate segment text, dropping styles.
pub fn render_text(segments: &[Segment]) -> String {
    segments.iter().map(|s| s.text.as_str()).collect()
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
