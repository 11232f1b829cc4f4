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

//! Colour theme.
//!
//! A light "concert programme" palette: parchment backgrounds, dark brown
//! text, gold accents and burgundy highlights.

use ratatui::style::Color;

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) panel_colour: Color,
    pub(crate) text_colour: Color,
    pub(crate) muted_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) highlight_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) gauge_track_colour: Color,
    pub(crate) commander_colour: Color,
    pub(crate) error_colour: Color,
    pub(crate) success_colour: Color,
}

impl Default for Theme {
    // Returns the standard application theme.
    fn default() -> Self {
        Self::classical()
    }
}

impl Theme {
    pub(crate) const fn classical() -> Self {
        Self {
            background_colour: Color::Rgb(245, 242, 233),
            panel_colour: Color::Rgb(234, 230, 217),
            text_colour: Color::Rgb(58, 39, 24),
            muted_colour: Color::Rgb(122, 104, 84),
            accent_colour: Color::Rgb(212, 175, 55),
            highlight_colour: Color::Rgb(128, 0, 32),
            border_colour: Color::Rgb(139, 115, 85),
            gauge_track_colour: Color::Rgb(234, 230, 217),
            commander_colour: Color::Rgb(58, 39, 24),
            error_colour: Color::Rgb(128, 0, 32),
            success_colour: Color::Rgb(46, 94, 46),
        }
    }

    /// Converts a [`ratatui::style::Color`] into a CSS-style hexadecimal
    /// string, for setting the terminal emulator's background colour.
    ///
    /// Returns `None` for anything but an `Rgb` colour.
    pub(crate) fn to_hex(colour: Color) -> Option<String> {
        match colour {
            Color::Rgb(r, g, b) => Some(format!("#{:02x}{:02x}{:02x}", r, g, b)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_for_rgb_only() {
        assert_eq!(Theme::to_hex(Color::Rgb(245, 242, 233)).as_deref(), Some("#f5f2e9"));
        assert_eq!(Theme::to_hex(Color::Reset), None);
    }
}
