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

//! The `:` command line.
//!
//! Commands act on the playlist selected in the "My Playlists" tab where
//! they need one:
//!
//! | Command                | Action                                   |
//! |------------------------|------------------------------------------|
//! | `new <name>`           | create an empty playlist                 |
//! | `delete`               | delete the selected playlist             |
//! | `rename <new name>`    | rename the selected playlist             |
//! | `save <name>`          | save the playing queue as a playlist     |
//! | `add <url> <title>`    | add a video to the selected playlist     |
//! | `search <query>`       | search the channel                       |
//! | `more`                 | load the next page of the channel        |
//! | `logout`               | log out                                  |
//! | `q`                    | quit                                     |

use std::sync::mpsc::Sender;

use crossterm::event::{Event, KeyCode};
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::events::AppEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command {
    NewPlaylist(String),
    DeletePlaylist,
    RenamePlaylist(String),
    SaveQueue(String),
    AddTrack { url: String, title: String },
    Search(String),
    MoreChannelResults,
    Logout,
    Quit,
}

pub(crate) struct Commander {
    active: bool,
    pub(crate) input: Input,
}

impl Commander {
    pub(crate) fn new() -> Self {
        Self {
            active: false,
            input: Input::default(),
        }
    }

    pub(crate) fn active(&self) -> bool {
        self.active
    }

    /// Offers a terminal event to the command line, returning `true` if it
    /// was consumed.
    ///
    /// `:` opens the command line; while open it takes every key. `Enter`
    /// runs the command and `Esc` abandons it.
    pub(crate) fn handle_event(&mut self, event: &Event, event_tx: &Sender<AppEvent>) -> bool {
        let Event::Key(key_event) = event else {
            return false;
        };

        if !self.active {
            if key_event.code == KeyCode::Char(':') {
                self.active = true;
                return true;
            }
            return false;
        }

        match key_event.code {
            KeyCode::Esc => self.close(),

            KeyCode::Enter => {
                let buffer = self.input.value().trim().to_string();
                self.close();

                if !buffer.is_empty() {
                    let event = match parse_command(&buffer) {
                        Ok(command) => AppEvent::Command(command),
                        Err(message) => AppEvent::Error(message),
                    };
                    let _ = event_tx.send(event);
                }
            }

            _ => {
                self.input.handle_event(event);
            }
        }

        true
    }

    fn close(&mut self) {
        self.active = false;
        self.input.reset();
    }
}

/// Parses a command line, without the leading `:`.
pub(crate) fn parse_command(buffer: &str) -> Result<Command, String> {
    let buffer = buffer.trim();
    let (name, rest) = match buffer.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (buffer, ""),
    };

    let required = |what: &str| -> Result<String, String> {
        if rest.is_empty() {
            Err(format!("Usage: {} {}", name, what))
        } else {
            Ok(rest.to_string())
        }
    };

    match name {
        "new" => required("<name>").map(Command::NewPlaylist),
        "delete" => Ok(Command::DeletePlaylist),
        "rename" => required("<new name>").map(Command::RenamePlaylist),
        "save" => required("<name>").map(Command::SaveQueue),
        "add" => {
            let usage = || "Usage: add <url> <title>".to_string();
            let (url, title) = rest.split_once(char::is_whitespace).ok_or_else(usage)?;
            let title = title.trim();
            if title.is_empty() {
                return Err(usage());
            }
            Ok(Command::AddTrack {
                url: url.to_string(),
                title: title.to_string(),
            })
        }
        "search" => required("<query>").map(Command::Search),
        "more" => Ok(Command::MoreChannelResults),
        "logout" => Ok(Command::Logout),
        "q" | "quit" => Ok(Command::Quit),
        _ => Err(format!("Unknown command: {}", name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands_with_arguments() {
        assert_eq!(
            parse_command("new Evening Mozart"),
            Ok(Command::NewPlaylist("Evening Mozart".to_string()))
        );
        assert_eq!(
            parse_command("rename   Late  Night "),
            Ok(Command::RenamePlaylist("Late  Night".to_string()))
        );
        assert_eq!(
            parse_command("add https://youtu.be/dQw4w9WgXcQ Never Gonna"),
            Ok(Command::AddTrack {
                url: "https://youtu.be/dQw4w9WgXcQ".to_string(),
                title: "Never Gonna".to_string(),
            })
        );
        assert_eq!(parse_command("q"), Ok(Command::Quit));
        assert_eq!(parse_command("more"), Ok(Command::MoreChannelResults));
    }

    #[test]
    fn reports_missing_arguments_and_unknown_commands() {
        assert_eq!(parse_command("new"), Err("Usage: new <name>".to_string()));
        assert_eq!(
            parse_command("add https://youtu.be/dQw4w9WgXcQ"),
            Err("Usage: add <url> <title>".to_string())
        );
        assert_eq!(parse_command("frobnicate"), Err("Unknown command: frobnicate".to_string()));
    }
}
