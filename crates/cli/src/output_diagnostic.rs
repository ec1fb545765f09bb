// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic output helpers for consistent error/warning/note formatting.
//!
//! Colors are only written when stderr is a terminal.

use std::io::{self, IsTerminal, Write};
use tintline_core::{ColorToken, StyleState};

/// Print an error message to stderr.
///
/// Displays in red when stderr is a terminal, plain text otherwise.
pub fn print_error(msg: impl std::fmt::Display) {
    let is_tty = io::stderr().is_terminal();
    write_error(&mut io::stderr(), msg, is_tty);
}

/// Write an error message to a writer with explicit terminal flag.
fn write_error<W: Write>(writer: &mut W, msg: impl std::fmt::Display, is_terminal: bool) {
    write_tagged(writer, "Error", StyleState::fg(ColorToken::Red), msg, is_terminal);
}

/// Print a warning message to stderr.
///
/// Displays in yellow when stderr is a terminal, plain text otherwise.
pub fn print_warning(msg: impl std::fmt::Display) {
    let is_tty = io::stderr().is_terminal();
    write_warning(&mut io::stderr(), msg, is_tty);
}

/// Write a warning message to a writer with explicit terminal flag.
fn write_warning<W: Write>(writer: &mut W, msg: impl std::fmt::Display, is_terminal: bool) {
    write_tagged(
        writer,
        "Warning",
        StyleState::fg(ColorToken::Yellow),
        msg,
        is_terminal,
    );
}

/// Print a verbose-mode note to stderr.
pub fn print_note(msg: impl std::fmt::Display) {
    let is_tty = io::stderr().is_terminal();
    write_note(&mut io::stderr(), msg, is_tty);
}

fn write_note<W: Write>(writer: &mut W, msg: impl std::fmt::Display, is_terminal: bool) {
    write_tagged(
        writer,
        "tintline",
        StyleState::fg(ColorToken::BrightBlack),
        msg,
        is_terminal,
    );
}

fn write_tagged<W: Write>(
    writer: &mut W,
    tag: &str,
    style: StyleState,
    msg: impl std::fmt::Display,
    is_terminal: bool,
) {
    if is_terminal {
        let _ = writeln!(
            writer,
            "{}{}: {}\x1b[0m",
            style.to_escape_code(),
            tag,
            msg
        );
    } else {
        let _ = writeln!(writer, "{}: {}", tag, msg);
    }
}

#[cfg(test)]
#[path = "output_diagnostic_tests.rs"]
mod tests;
