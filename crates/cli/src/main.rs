// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! tintline binary entry point.

use clap::Parser;

use tintline::cli::Cli;
use tintline::output_diagnostic::print_error;
use tintline::run::execute;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = execute(&cli) {
        print_error(e);
        std::process::exit(1);
    }
}
