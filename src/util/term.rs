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

//! Terminal background control.
//!
//! Uses OSC 11 / OSC 111 escape sequences so the whole terminal window, not
//! only the cells ratatui draws, takes the theme background. Terminals that
//! do not understand the sequences ignore them.

use std::io::{self, Write};

use ratatui::style::Color;

use crate::theme::Theme;

/// Sets the terminal background colour. Non-RGB colours are ignored.
pub(crate) fn set_terminal_bg(colour: Color) -> io::Result<()> {
    let Some(hex) = Theme::to_hex(colour) else {
        return Ok(());
    };

    let mut stdout = io::stdout();
    write!(stdout, "\x1b]11;{}\x07", hex)?;
    stdout.flush()
}

/// Restores the terminal's own background colour.
pub(crate) fn reset_terminal_bg() -> io::Result<()> {
    let mut stdout = io::stdout();
    write!(stdout, "\x1b]111\x07")?;
    stdout.flush()
}
