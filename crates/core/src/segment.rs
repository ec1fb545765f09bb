// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use serde::{Deserialize, Serialize};

use crate::style::StyleState;

/// A run of literal text with the style that was active while it was scanned.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub text: String,
    pub style: StyleState,
}

impl Segment {
    /// Create a segment with the default style.
    pub fn plain(text: impl Into<String>) -> Self {
        Segment {
            text: text.into(),
            style: StyleState::default(),
        }
    }

    /// Create a segment with the given style.
    pub fn styled(text: impl Into<String>, style: StyleState) -> Self {
        Segment {
            text: text.into(),
            style,
        }
    }

    /// Re-encode as escape sequence plus text, starting from a reset.
    pub fn to_ansi(&self) -> String {
        if self.style.is_default() {
            format!("\x1b[0m{}", self.text)
        } else {
            format!("\x1b[0m{}{}", self.style.to_escape_code(), self.text)
        }
    }
}
