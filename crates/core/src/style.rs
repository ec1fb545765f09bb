// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Style vocabulary: named foreground colors, attribute flags, and the
//! running state a control sequence transitions.

use serde::{Deserialize, Serialize};

/// SGR code that resets every attribute.
const RESET: &str = "0";
/// SGR code that restores the default foreground color.
const DEFAULT_FOREGROUND: &str = "39";

/// One of the 16 standard named foreground colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorToken {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl ColorToken {
    /// Every token, in SGR code order.
    pub const ALL: [ColorToken; 16] = [
        ColorToken::Black,
        ColorToken::Red,
        ColorToken::Green,
        ColorToken::Yellow,
        ColorToken::Blue,
        ColorToken::Magenta,
        ColorToken::Cyan,
        ColorToken::White,
        ColorToken::BrightBlack,
        ColorToken::BrightRed,
        ColorToken::BrightGreen,
        ColorToken::BrightYellow,
        ColorToken::BrightBlue,
        ColorToken::BrightMagenta,
        ColorToken::BrightCyan,
        ColorToken::BrightWhite,
    ];

    /// Look up the token for an SGR parameter.
    ///
    /// Matching is on the exact decimal text, so `"031"` is not red.
    pub fn from_code(code: &str) -> Option<Self> {
        let token = match code {
            "30" => ColorToken::Black,
            "31" => ColorToken::Red,
            "32" => ColorToken::Green,
            "33" => ColorToken::Yellow,
            "34" => ColorToken::Blue,
            "35" => ColorToken::Magenta,
            "36" => ColorToken::Cyan,
            "37" => ColorToken::White,
            "90" => ColorToken::BrightBlack,
            "91" => ColorToken::BrightRed,
            "92" => ColorToken::BrightGreen,
            "93" => ColorToken::BrightYellow,
            "94" => ColorToken::BrightBlue,
            "95" => ColorToken::BrightMagenta,
            "96" => ColorToken::BrightCyan,
            "97" => ColorToken::BrightWhite,
            _ => return None,
        };
        Some(token)
    }

    /// The SGR parameter that selects this color.
    pub fn code(self) -> u8 {
        match self {
            ColorToken::Black => 30,
            ColorToken::Red => 31,
            ColorToken::Green => 32,
            ColorToken::Yellow => 33,
            ColorToken::Blue => 34,
            ColorToken::Magenta => 35,
            ColorToken::Cyan => 36,
            ColorToken::White => 37,
            ColorToken::BrightBlack => 90,
            ColorToken::BrightRed => 91,
            ColorToken::BrightGreen => 92,
            ColorToken::BrightYellow => 93,
            ColorToken::BrightBlue => 94,
            ColorToken::BrightMagenta => 95,
            ColorToken::BrightCyan => 96,
            ColorToken::BrightWhite => 97,
        }
    }

    /// Look up a token by its snake-case name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|color| color.name() == name)
    }

    /// Snake-case name, matching the serialized form.
    pub fn name(self) -> &'static str {
        match self {
            ColorToken::Black => "black",
            ColorToken::Red => "red",
            ColorToken::Green => "green",
            ColorToken::Yellow => "yellow",
            ColorToken::Blue => "blue",
            ColorToken::Magenta => "magenta",
            ColorToken::Cyan => "cyan",
            ColorToken::White => "white",
            ColorToken::BrightBlack => "bright_black",
            ColorToken::BrightRed => "bright_red",
            ColorToken::BrightGreen => "bright_green",
            ColorToken::BrightYellow => "bright_yellow",
            ColorToken::BrightBlue => "bright_blue",
            ColorToken::BrightMagenta => "bright_magenta",
            ColorToken::BrightCyan => "bright_cyan",
            ColorToken::BrightWhite => "bright_white",
        }
    }
}

/// Bold, italic and underline attributes. Each is independent of the others
/// and of the color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StyleFlags {
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
    #[serde(default)]
    pub underline: bool,
}

impl StyleFlags {
    pub fn is_empty(&self) -> bool {
        !(self.bold || self.italic || self.underline)
    }
}

/// The style active at some point in a scan.
///
/// At most one color is active; selecting another replaces it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StyleState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorToken>,
    #[serde(flatten)]
    pub flags: StyleFlags,
}

impl StyleState {
    /// A state with only a foreground color set.
    pub fn fg(color: ColorToken) -> Self {
        Self {
            color: Some(color),
            flags: StyleFlags::default(),
        }
    }

    pub fn bold(mut self) -> Self {
        self.flags.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.flags.italic = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.flags.underline = true;
        self
    }

    /// True when no color and no flag is set.
    pub fn is_default(&self) -> bool {
        self.color.is_none() && self.flags.is_empty()
    }

    /// Apply the parameter list of one control sequence (the text between
    /// `[` and `m`) and return the resulting state.
    ///
    /// An empty list, or one whose first code is `0`, resets everything and
    /// the remaining codes are not looked at. A `0` in any later position is
    /// ignored like any other unknown code.
    pub fn apply(self, params: &str) -> Self {
        let mut codes = params.split(';').filter(|code| !code.is_empty()).peekable();

        match codes.peek() {
            None | Some(&RESET) => return Self::default(),
            Some(_) => {}
        }

        codes.fold(self, Self::apply_code)
    }

    /// Apply a single SGR code.
    fn apply_code(mut self, code: &str) -> Self {
        if let Some(color) = ColorToken::from_code(code) {
            self.color = Some(color);
            return self;
        }

        match code {
            DEFAULT_FOREGROUND => self.color = None,
            "1" => self.flags.bold = true,
            "3" => self.flags.italic = true,
            "4" => self.flags.underline = true,
            "22" => self.flags.bold = false,
            "23" => self.flags.italic = false,
            "24" => self.flags.underline = false,
            _ => {}
        }
        self
    }

    /// Encode this state as a single SGR sequence, applied on top of the
    /// default state.
    ///
    /// The default state encodes as `ESC[0m`. Other states never lead with a
    /// reset code, since [`StyleState::apply`] would stop at it.
    pub fn to_escape_code(&self) -> String {
        if self.is_default() {
            return format!("\x1b[{}m", RESET);
        }

        let mut codes = Vec::with_capacity(4);
        if self.flags.bold {
            codes.push("1".to_string());
        }
        if self.flags.italic {
            codes.push("3".to_string());
        }
        if self.flags.underline {
            codes.push("4".to_string());
        }
        if let Some(color) = self.color {
            codes.push(color.code().to_string());
        }
        format!("\x1b[{}m", codes.join(";"))
    }
}

#[cfg(test)]
#[path = "style_tests.rs"]
mod tests;
