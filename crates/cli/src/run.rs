// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command execution: read input, resolve the theme, write rendered output.

use std::io::{Read, Write};

use crate::cli::{Cli, InputFormat};
use crate::config::Theme;
use crate::error::RenderError;
use crate::log::{entries_from_lines, local_timestamp, parse_jsonl};
use crate::output::OutputWriter;
use crate::output_diagnostic::{print_note, print_warning};

/// Read the whole input named on the command line, or stdin.
pub fn read_input(cli: &Cli) -> Result<String, RenderError> {
    match cli.input_path() {
        Some(path) => {
            if cli.verbose {
                print_note(format_args!("reading {}", path.display()));
            }
            Ok(std::fs::read_to_string(path)?)
        }
        None => {
            if cli.verbose {
                print_note("reading stdin");
            }
            let mut input = String::new();
            std::io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}

/// Resolve the theme from `--theme`, falling back to the default.
pub fn load_theme(cli: &Cli) -> Result<Theme, RenderError> {
    match &cli.theme {
        Some(path) => {
            if cli.verbose {
                print_note(format_args!("loading theme {}", path.display()));
            }
            Theme::load(path)
        }
        None => Ok(Theme::default()),
    }
}

/// Render `input` according to the CLI options. Returns the number of lines
/// or entries written.
pub fn render<W: Write>(
    cli: &Cli,
    input: &str,
    theme: &Theme,
    writer: W,
) -> Result<usize, RenderError> {
    let mut output = OutputWriter::new(writer, cli.format, theme);

    if !cli.wants_entries() {
        return output.write_lines(input);
    }

    let entries = match cli.input_format {
        InputFormat::Jsonl => {
            if cli.level.is_some() || cli.timestamps {
                print_warning("--level and --timestamps are ignored for jsonl input");
            }
            parse_jsonl(input)?
        }
        InputFormat::Text => {
            let level = cli.level.unwrap_or_default();
            if cli.timestamps {
                entries_from_lines(input, level, local_timestamp)
            } else {
                entries_from_lines(input, level, String::new)
            }
        }
    };
    output.write_entries(&entries)
}

/// Full command: read, render to stdout, report in verbose mode.
pub fn execute(cli: &Cli) -> Result<(), RenderError> {
    let theme = load_theme(cli)?;
    let input = read_input(cli)?;
    let stdout = std::io::stdout();
    let count = render(cli, &input, &theme, stdout.lock())?;
    if cli.verbose {
        print_note(format_args!("rendered {} lines", count));
    }
    Ok(())
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
