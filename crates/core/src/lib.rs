// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! ANSI SGR parsing for styled log output.
//!
//! Turns text containing `ESC [ <codes> m` sequences into an ordered list of
//! [`Segment`]s, each carrying the [`StyleState`] that was active when its
//! text was scanned. Only the 16 named foreground colors and the bold,
//! italic and underline attributes are recognized; everything else is
//! ignored or passed through as literal text.
//!
//! ```
//! use tintline_core::{parse, ColorToken};
//!
//! let segments = parse("\x1b[31mRed\x1b[0m then normal.");
//! assert_eq!(segments.len(), 2);
//! assert_eq!(segments[0].style.color, Some(ColorToken::Red));
//! assert!(segments[1].style.is_default());
//! ```

mod parser;
mod segment;
mod style;

pub use parser::{parse, parse_from, strip_ansi, tokenize, Token};
pub use segment::Segment;
pub use style::{ColorToken, StyleFlags, StyleState};
