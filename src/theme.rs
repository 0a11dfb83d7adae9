// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Visual styling and color configuration for the TUI.
//!
//! This module defines the application's color palette and provides utilities
//! for converting colors between Ratatui's internal representation and external
//! formats (such as hexadecimal strings) used for configuration and terminal
//! emulator styling.
//!
//! The palette is a plain value built from [`ThemeConfig`] and passed to every
//! render function; there is no global style state.

use ratatui::style::Color;
use thiserror::Error;

use crate::config::ThemeConfig;

#[derive(Debug, Error, Eq, PartialEq)]
pub(crate) enum ThemeError {
    #[error("invalid colour {0:?}, expected #rrggbb")]
    InvalidColour(String),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) accent_colour: Color,

    pub(crate) text_colour: Color,
    pub(crate) muted_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) rating_colour: Color,
    pub(crate) highlight_fg_colour: Color,
    pub(crate) error_colour: Color,
}

impl Default for Theme {
    // Returns the standard application theme.
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    // Constructs the default theme.
    pub(crate) const fn default_theme() -> Self {
        Self::with_colours(Color::Rgb(244, 244, 244), Color::Rgb(158, 107, 224))
    }

    const fn with_colours(background_colour: Color, accent_colour: Color) -> Self {
        Self {
            background_colour,
            accent_colour,

            text_colour: Color::Rgb(32, 32, 32),
            muted_colour: Color::Rgb(122, 122, 122),
            border_colour: Color::Rgb(200, 200, 200),
            rating_colour: Color::Rgb(224, 161, 0),
            highlight_fg_colour: Color::Rgb(255, 255, 255),
            error_colour: Color::Rgb(192, 57, 43),
        }
    }

    /// Builds a theme from the configured background and accent colours.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::InvalidColour`] if either colour is not a
    /// `#rrggbb` string.
    pub(crate) fn from_config(config: &ThemeConfig) -> Result<Self, ThemeError> {
        let background = Self::from_hex(&config.background_colour)?;
        let accent = Self::from_hex(&config.accent_colour)?;

        Ok(Self::with_colours(background, accent))
    }

    /// Parses a CSS-style `#rrggbb` string into a [`Color::Rgb`].
    pub(crate) fn from_hex(hex: &str) -> Result<Color, ThemeError> {
        let invalid = || ThemeError::InvalidColour(hex.to_string());

        let digits = hex.strip_prefix('#').ok_or_else(invalid)?;
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(invalid());
        }

        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());

        Ok(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Converts a [`ratatui::style::Color`] into a CSS-style hexadecimal
    /// string.
    ///
    /// This is primarily used to set the terminal emulator's background color
    /// via escape sequences. Non-RGB colours have no hex form and yield `None`.
    pub(crate) fn to_hex(colour: Color) -> Option<String> {
        match colour {
            Color::Rgb(r, g, b) => Some(format!("#{:02x}{:02x}{:02x}", r, g, b)),
            _ => None,
        }
    }
}
