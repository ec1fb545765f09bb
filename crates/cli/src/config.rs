// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Theme configuration: the class names each color, style flag and log
//! level renders as.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use tintline_core::ColorToken;

use crate::error::RenderError;
use crate::log::LogLevel;

/// Class for bold text
pub const DEFAULT_BOLD_CLASS: &str = "font-bold";
/// Class for italic text
pub const DEFAULT_ITALIC_CLASS: &str = "italic";
/// Class for underlined text
pub const DEFAULT_UNDERLINE_CLASS: &str = "underline";

/// Default class for a foreground color.
pub fn default_color_class(color: ColorToken) -> &'static str {
    match color {
        ColorToken::Black => "text-gray-500",
        ColorToken::Red => "text-red-500",
        ColorToken::Green => "text-accent-green",
        ColorToken::Yellow => "text-yellow-400",
        ColorToken::Blue => "text-accent-blue",
        ColorToken::Magenta => "text-graphql-pink",
        ColorToken::Cyan => "text-cyan-400",
        ColorToken::White => "text-gray-200",
        ColorToken::BrightBlack => "text-gray-400",
        ColorToken::BrightRed => "text-red-400",
        ColorToken::BrightGreen => "text-green-400",
        ColorToken::BrightYellow => "text-yellow-300",
        ColorToken::BrightBlue => "text-blue-400",
        ColorToken::BrightMagenta => "text-pink-400",
        ColorToken::BrightCyan => "text-cyan-300",
        ColorToken::BrightWhite => "text-white",
    }
}

/// Default class for a log level badge.
pub fn default_level_class(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Success => "text-accent-green",
        LogLevel::Error => "text-red-500",
        LogLevel::Warn => "text-yellow-400",
        LogLevel::Info => "text-gray-400",
    }
}

/// Theme file contents. Every key is optional; missing keys use the defaults.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeConfig {
    /// Class per color, keyed by snake_case color name
    #[serde(default)]
    pub colors: BTreeMap<String, String>,

    /// Class per log level, keyed by level name
    #[serde(default)]
    pub levels: BTreeMap<String, String>,

    #[serde(default)]
    pub bold: Option<String>,

    #[serde(default)]
    pub italic: Option<String>,

    #[serde(default)]
    pub underline: Option<String>,
}

/// Resolved class-name lookup used by the renderer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    colors: HashMap<ColorToken, String>,
    levels: HashMap<LogLevel, String>,
    bold: String,
    italic: String,
    underline: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            colors: ColorToken::ALL
                .iter()
                .map(|&c| (c, default_color_class(c).to_string()))
                .collect(),
            levels: LogLevel::ALL
                .iter()
                .map(|&l| (l, default_level_class(l).to_string()))
                .collect(),
            bold: DEFAULT_BOLD_CLASS.to_string(),
            italic: DEFAULT_ITALIC_CLASS.to_string(),
            underline: DEFAULT_UNDERLINE_CLASS.to_string(),
        }
    }
}

impl Theme {
    /// Load a theme from a TOML or JSON file, chosen by extension.
    pub fn load(path: &Path) -> Result<Self, RenderError> {
        let content = std::fs::read_to_string(path).map_err(|source| RenderError::Theme {
            path: path.to_path_buf(),
            source,
        })?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let config: ThemeConfig = if is_json {
            serde_json::from_str(&content)?
        } else {
            toml::from_str(&content)?
        };
        Self::from_config(config)
    }

    /// Overlay a config on the default theme.
    pub fn from_config(config: ThemeConfig) -> Result<Self, RenderError> {
        let mut theme = Self::default();

        for (name, class) in config.colors {
            let color = ColorToken::from_name(&name).ok_or_else(|| {
                RenderError::Validation(format!("Unknown color '{}' in theme", name))
            })?;
            theme.colors.insert(color, validate_class(&name, class)?);
        }
        for (name, class) in config.levels {
            let level = LogLevel::from_name(&name).ok_or_else(|| {
                RenderError::Validation(format!("Unknown log level '{}' in theme", name))
            })?;
            theme.levels.insert(level, validate_class(&name, class)?);
        }
        if let Some(class) = config.bold {
            theme.bold = validate_class("bold", class)?;
        }
        if let Some(class) = config.italic {
            theme.italic = validate_class("italic", class)?;
        }
        if let Some(class) = config.underline {
            theme.underline = validate_class("underline", class)?;
        }

        Ok(theme)
    }

    pub fn color_class(&self, color: ColorToken) -> &str {
        self.colors
            .get(&color)
            .map(String::as_str)
            .unwrap_or_else(|| default_color_class(color))
    }

    pub fn level_class(&self, level: LogLevel) -> &str {
        self.levels
            .get(&level)
            .map(String::as_str)
            .unwrap_or_else(|| default_level_class(level))
    }

    pub fn bold_class(&self) -> &str {
        &self.bold
    }

    pub fn italic_class(&self) -> &str {
        &self.italic
    }

    pub fn underline_class(&self) -> &str {
        &self.underline
    }
}

/// A class name must be non-empty and must not break out of an HTML attribute.
fn validate_class(key: &str, class: String) -> Result<String, RenderError> {
    let class = class.trim().to_string();
    if class.is_empty() {
        return Err(RenderError::Validation(format!(
            "Empty class name for '{}'",
            key
        )));
    }
    if class.contains(['"', '<', '>', '&', '\'']) {
        return Err(RenderError::Validation(format!(
            "Invalid class name '{}' for '{}': must not contain quotes, '<', '>' or '&'",
            class, key
        )));
    }
    Ok(class)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
