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

//! Application event distribution and orchestration.
//!
//! This module defines the central event-handling logic for the application,
//! bridging user input (keyboard, command line), background worker results
//! (catalog requests, the video player) and the UI rendering pipeline.
//!
//! # Architecture
//!
//! The system follows a reactive event-loop pattern:
//!
//! 1. **Capture**: Events are received as [`AppEvent`]s on a single channel.
//! 2. **Process**: The [`process_events`] function applies each event to the
//!    [`App`] state, one at a time, on the main thread. Playback changes go
//!    through the playback session as messages; playlist changes go through
//!    the playlist store.
//! 3. **Render**: After each event is processed, the whole UI is redrawn from
//!    state.

mod handlers;
mod key_handlers;

use std::io::Stdout;

use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{Terminal, prelude::CrosstermBackend};
use tubeplay::{
    VideoId,
    catalog::{ChannelPage, SearchResult},
};

use crate::{App, commander::Command, player::PlayerState, render::draw, views::MainView};

use handlers::*;
use key_handlers::process_key_event;

/// Which catalog view a request belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CatalogSource {
    Search,
    Channel,
}

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),

    SetMainView(MainView),
    Command(Command),

    SearchResultsReady(Vec<SearchResult>),
    ChannelPageReady { page: ChannelPage, append: bool },
    CatalogFailed(CatalogSource, String),

    PlayerStateChanged(PlayerState),
    DurationChanged(u64),
    TimeChanged(f64),
    VolumeChanged(u32),
    TrackEnded(VideoId),

    Tick,

    ExitApplication,

    Error(String),
    FatalError(String),
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until an exit event is received or the event channel
/// is closed.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    terminal.draw(|f| draw(f, app))?;

    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        match event {
            AppEvent::Key(key) => process_key_event(app, key)?,
            AppEvent::SetMainView(view) => handle_set_main_view(app, view),
            AppEvent::Command(command) => handle_command(app, command)?,
            AppEvent::SearchResultsReady(results) => handle_search_results_ready(app, results),
            AppEvent::ChannelPageReady { page, append } => {
                handle_channel_page_ready(app, page, append)
            }
            AppEvent::CatalogFailed(source, message) => {
                handle_catalog_failed(app, source, message)
            }
            AppEvent::PlayerStateChanged(state) => handle_player_state_changed(app, state),
            AppEvent::DurationChanged(duration) => handle_duration_changed(app, duration),
            AppEvent::TimeChanged(secs) => handle_time_changed(app, secs),
            AppEvent::VolumeChanged(volume) => handle_volume_changed(app, volume),
            AppEvent::TrackEnded(id) => handle_track_ended(app, id)?,
            AppEvent::Error(message) => handle_error(app, message),
            AppEvent::FatalError(message) => handle_fatal_error(app, message),
            AppEvent::Tick | AppEvent::ExitApplication => {}
        }

        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}
