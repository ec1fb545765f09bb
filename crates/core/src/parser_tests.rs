// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use crate::style::ColorToken;
use proptest::prelude::*;
use yare::parameterized;

fn texts(segments: &[Segment]) -> Vec<&str> {
    segments.iter().map(|s| s.text.as_str()).collect()
}

// =============================================================================
// tokenize
// =============================================================================

#[test]
fn test_tokenize_plain_text() {
    assert_eq!(tokenize("Hello"), vec![Token::Text("Hello")]);
}

#[test]
fn test_tokenize_empty() {
    assert!(tokenize("").is_empty());
}

#[test]
fn test_tokenize_interleaved() {
    assert_eq!(
        tokenize("A\x1b[1mB\x1b[mC"),
        vec![
            Token::Text("A"),
            Token::Sgr("1"),
            Token::Text("B"),
            Token::Sgr(""),
            Token::Text("C"),
        ]
    );
}

#[test]
fn test_tokenize_drops_empty_runs_between_sequences() {
    assert_eq!(
        tokenize("\x1b[1m\x1b[31mX\x1b[0m"),
        vec![
            Token::Sgr("1"),
            Token::Sgr("31"),
            Token::Text("X"),
            Token::Sgr("0"),
        ]
    );
}

/// Shapes that look like escapes but are not `ESC [ [0-9;]* m`.
#[parameterized(
    truncated = { "\x1b[31" },
    missing_bracket = { "\x1b31m" },
    bare_escape = { "\x1b" },
    cursor_move = { "\x1b[2J" },
    private_mode = { "\x1b[?25l" },
    letter_param = { "\x1b[3xm" },
    space_param = { "\x1b[3 1m" },
    no_escape = { "[31m" },
)]
fn malformed_sequence_is_literal(input: &str) {
    assert_eq!(tokenize(input), vec![Token::Text(input)]);

    let segments = parse(input);
    assert_eq!(segments, vec![Segment::plain(input)]);
}

// =============================================================================
// parse: tested scenarios
// =============================================================================

#[test]
fn test_parse_plain_text() {
    let segments = parse("Hello, world!");
    assert_eq!(segments, vec![Segment::plain("Hello, world!")]);
    assert!(segments[0].style.is_default());
}

#[test]
fn test_parse_simple_color() {
    let segments = parse("\x1b[31mRed Text\x1b[0m");
    assert_eq!(
        segments,
        vec![Segment::styled("Red Text", StyleState::fg(ColorToken::Red))]
    );
}

#[test]
fn test_parse_bold() {
    let segments = parse("\x1b[1mBold Text\x1b[0m");
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].text, "Bold Text");
    assert!(segments[0].style.flags.bold);
    assert_eq!(segments[0].style.color, None);
}

#[test]
fn test_parse_color_and_style_combined() {
    let segments = parse("\x1b[1;34mBold Blue Text\x1b[0m");
    assert_eq!(
        segments,
        vec![Segment::styled(
            "Bold Blue Text",
            StyleState::fg(ColorToken::Blue).bold()
        )]
    );
}

#[test]
fn test_parse_sequential_styles() {
    let segments = parse("\x1b[32mGreen text\x1b[0m, then \x1b[34mBlue text\x1b[0m.");
    assert_eq!(
        segments,
        vec![
            Segment::styled("Green text", StyleState::fg(ColorToken::Green)),
            Segment::plain(", then "),
            Segment::styled("Blue text", StyleState::fg(ColorToken::Blue)),
            Segment::plain("."),
        ]
    );
}

#[test]
fn test_parse_multiple_codes_in_one_sequence() {
    let segments = parse("\x1b[1;4;31mImportant Message\x1b[0m");
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].text, "Important Message");
    assert_eq!(
        segments[0].style,
        StyleState::fg(ColorToken::Red).bold().underline()
    );
}

#[test]
fn test_parse_reset() {
    let segments = parse("\x1b[31mRed\x1b[0m then normal.");
    assert_eq!(
        segments,
        vec![
            Segment::styled("Red", StyleState::fg(ColorToken::Red)),
            Segment::plain(" then normal."),
        ]
    );
}

// =============================================================================
// parse: edge cases
// =============================================================================

#[test]
fn test_parse_empty_input() {
    assert!(parse("").is_empty());
}

#[test]
fn test_parse_only_sequences() {
    assert!(parse("\x1b[31m\x1b[1m\x1b[0m").is_empty());
}

#[test]
fn test_parse_bare_reset_clears_everything() {
    let segments = parse("\x1b[1;3;4;95mloud\x1b[mquiet");
    assert_eq!(
        segments[0].style,
        StyleState::fg(ColorToken::BrightMagenta)
            .bold()
            .italic()
            .underline()
    );
    assert_eq!(segments[1], Segment::plain("quiet"));
}

#[test]
fn test_parse_unchanged_style_still_splits_runs() {
    let segments = parse("\x1b[31mA\x1b[31mB\x1b[99mC");
    assert_eq!(texts(&segments), vec!["A", "B", "C"]);
    assert!(segments
        .iter()
        .all(|s| s.style == StyleState::fg(ColorToken::Red)));
}

#[test]
fn test_parse_style_accumulates_across_sequences() {
    let segments = parse("\x1b[1mA\x1b[33mB\x1b[4mC\x1b[22mD");
    assert_eq!(segments[0].style, StyleState::default().bold());
    assert_eq!(segments[1].style, StyleState::fg(ColorToken::Yellow).bold());
    assert_eq!(
        segments[2].style,
        StyleState::fg(ColorToken::Yellow).bold().underline()
    );
    assert_eq!(
        segments[3].style,
        StyleState::fg(ColorToken::Yellow).underline()
    );
}

#[test]
fn test_parse_reset_in_later_position_does_not_reset() {
    let segments = parse("\x1b[36mA\x1b[1;0;31mB");
    assert_eq!(segments[1].style, StyleState::fg(ColorToken::Red).bold());
}

#[test]
fn test_parse_padded_reset_keeps_style() {
    let segments = parse("\x1b[31mA\x1b[00mB");
    assert_eq!(segments[1].style, StyleState::fg(ColorToken::Red));
}

#[test]
fn test_parse_leading_empty_params_then_reset() {
    let segments = parse("\x1b[31mA\x1b[;0mB");
    assert!(segments[1].style.is_default());
}

#[test]
fn test_parse_default_foreground() {
    let segments = parse("\x1b[1;32mA\x1b[39mB");
    assert_eq!(segments[1].style, StyleState::default().bold());
}

#[test]
fn test_parse_extended_color_is_ignored() {
    let segments = parse("\x1b[38;5;196mA\x1b[38;2;255;0;0mB");
    assert!(segments.iter().all(|s| s.style.is_default()));
}

#[test]
fn test_parse_unsupported_csi_stays_in_text() {
    let segments = parse("\x1b[32mok\x1b[K done");
    assert_eq!(
        segments,
        vec![Segment::styled(
            "ok\x1b[K done",
            StyleState::fg(ColorToken::Green)
        )]
    );
}

#[test]
fn test_parse_multibyte_text() {
    let segments = parse("\x1b[92m✓\x1b[0m réussi 🎉");
    assert_eq!(texts(&segments), vec!["✓", " réussi 🎉"]);
    assert_eq!(segments[0].style.color, Some(ColorToken::BrightGreen));
}

#[test]
fn test_parse_mutex_demo_line() {
    let segments = parse("\x1b[33m[Thread-1]\x1b[0m acquired lock.");
    assert_eq!(
        segments,
        vec![
            Segment::styled("[Thread-1]", StyleState::fg(ColorToken::Yellow)),
            Segment::plain(" acquired lock."),
        ]
    );
}

#[test]
fn test_parse_calls_are_independent() {
    let first = parse("\x1b[31mdangling red");
    let second = parse("plain");
    assert_eq!(first[0].style.color, Some(ColorToken::Red));
    assert!(second[0].style.is_default());
}

// =============================================================================
// parse_from
// =============================================================================

#[test]
fn test_parse_from_carries_style_between_chunks() {
    let (first, style) = parse_from("\x1b[1;31mline1", StyleState::default());
    assert_eq!(
        first,
        vec![Segment::styled("line1", StyleState::fg(ColorToken::Red).bold())]
    );

    let (second, style) = parse_from("line2\x1b[0m", style);
    assert_eq!(
        second,
        vec![Segment::styled("line2", StyleState::fg(ColorToken::Red).bold())]
    );
    assert!(style.is_default());
}

#[test]
fn test_parse_from_empty_chunk_keeps_style() {
    let start = StyleState::fg(ColorToken::Cyan);
    let (segments, end) = parse_from("", start);
    assert!(segments.is_empty());
    assert_eq!(end, start);
}

#[test]
fn test_parse_from_default_matches_parse() {
    let input = "\x1b[32mGreen\x1b[0m, then \x1b[4munderlined";
    assert_eq!(parse_from(input, StyleState::default()).0, parse(input));
}

// =============================================================================
// strip_ansi
// =============================================================================

#[test]
fn test_strip_ansi_plain() {
    assert_eq!(strip_ansi("Hello, world!"), "Hello, world!");
}

#[test]
fn test_strip_ansi_removes_sequences_only() {
    assert_eq!(
        strip_ansi("\x1b[32mGreen text\x1b[0m, then \x1b[2Jcleared"),
        "Green text, then \x1b[2Jcleared"
    );
}

#[test]
fn test_segment_to_ansi() {
    assert_eq!(Segment::plain("x").to_ansi(), "\x1b[0mx");
    assert_eq!(
        Segment::styled("x", StyleState::fg(ColorToken::Red).bold()).to_ansi(),
        "\x1b[0m\x1b[1;31mx"
    );
}

// =============================================================================
// Properties
// =============================================================================

fn arb_style() -> impl Strategy<Value = StyleState> {
    (
        prop::option::of(0usize..16),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(color, bold, italic, underline)| StyleState {
            color: color.map(|i| ColorToken::ALL[i]),
            flags: crate::style::StyleFlags {
                bold,
                italic,
                underline,
            },
        })
}

proptest! {
    #[test]
    fn text_without_escape_is_one_plain_segment(input in "[^\x1b]{1,64}") {
        let segments = parse(&input);
        prop_assert_eq!(segments, vec![Segment::plain(input.clone())]);
    }

    #[test]
    fn concatenated_text_equals_stripped_input(
        input in "([a-z ,.]{0,6}|\x1b\\[[0-9;]{0,6}m|\x1b\\[?|\x1b){0,12}"
    ) {
        let segments = parse(&input);
        let joined: String = segments.iter().map(|s| s.text.as_str()).collect();
        prop_assert_eq!(joined, strip_ansi(&input));
        prop_assert!(segments.iter().all(|s| !s.text.is_empty()));
    }

    #[test]
    fn parse_is_total(input in "\\PC{0,80}") {
        let segments = parse(&input);
        prop_assert!(segments.len() <= input.len());
    }

    #[test]
    fn encoded_style_parses_back(style in arb_style(), text in "[a-z]{1,10}") {
        let input = Segment::styled(text.clone(), style).to_ansi();
        prop_assert_eq!(parse(&input), vec![Segment::styled(text, style)]);
    }

    #[test]
    fn reset_never_leaks_style(style in arb_style()) {
        let input = format!("{}A\x1b[0mB", style.to_escape_code());
        let segments = parse(&input);
        prop_assert_eq!(segments.last(), Some(&Segment::plain("B")));
    }
}
