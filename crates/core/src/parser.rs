// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! ANSI SGR escape sequence parser.
//!
//! Splits text into literal runs and `ESC [ <digits and ;> m` control
//! sequences, then folds the sequences into a [`StyleState`] so each literal
//! run comes out as a [`Segment`] with the style active at that point.

use regex::Regex;
use std::sync::LazyLock;

use crate::segment::Segment;
use crate::style::StyleState;

/// Matches one SGR control sequence, capturing its parameter list.
///
/// The pattern is a constant and always compiles.
static SGR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"\x1b\[([0-9;]*)m").expect("SGR regex pattern is invalid")
});

/// One piece of partitioned input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Token<'a> {
    /// Literal text, never empty.
    Text(&'a str),
    /// A control sequence's parameter list (between `[` and `m`), possibly empty.
    Sgr(&'a str),
}

/// Partition input into literal runs and control sequences, in order.
///
/// Anything that is not exactly `ESC [ [0-9;]* m` stays literal, including
/// truncated introducers and other CSI families. Empty literal runs are
/// dropped.
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut last_end = 0;

    for cap in SGR_REGEX.captures_iter(input) {
        // Group 0 is always present on a match
        let Some(full_match) = cap.get(0) else {
            continue;
        };
        let params = cap.get(1).map(|m| m.as_str()).unwrap_or("");

        let text_before = &input[last_end..full_match.start()];
        if !text_before.is_empty() {
            tokens.push(Token::Text(text_before));
        }

        tokens.push(Token::Sgr(params));
        last_end = full_match.end();
    }

    let remaining = &input[last_end..];
    if !remaining.is_empty() {
        tokens.push(Token::Text(remaining));
    }

    tokens
}

/// Parse text with embedded SGR sequences into styled segments.
///
/// Every call starts from the default style. One segment is emitted per
/// literal run; runs separated by a control sequence are never merged, even
/// when the sequence left the style unchanged. Never fails.
pub fn parse(input: &str) -> Vec<Segment> {
    parse_from(input, StyleState::default()).0
}

/// Parse starting from `style` instead of the default, returning the
/// segments and the style active at the end of the input.
///
/// Feeding the returned style into the next call continues a scan across
/// chunks, e.g. the lines of a multi-line log.
pub fn parse_from(input: &str, style: StyleState) -> (Vec<Segment>, StyleState) {
    let (style, segments) = tokenize(input).into_iter().fold(
        (style, Vec::new()),
        |(style, mut segments), token| match token {
            Token::Sgr(params) => (style.apply(params), segments),
            Token::Text(text) => {
                segments.push(Segment::styled(text, style));
                (style, segments)
            }
        },
    );
    (segments, style)
}

/// Remove all SGR sequences, returning plain text.
pub fn strip_ansi(input: &str) -> String {
    SGR_REGEX.replace_all(input, "").into_owned()
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
