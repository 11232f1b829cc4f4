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

//! Video playback control and state management.
//!
//! This module provides the high-level [`VideoPlayer`] interface used by the
//! UI to control playback. It manages a background worker thread that drives
//! `libmpv`, which resolves YouTube watch pages through its `ytdl` hook and
//! opens its own video window.

mod commands;

use std::sync::mpsc;

use anyhow::Result;
use tubeplay::VideoId;

use crate::{events::AppEvent, player::commands::VideoPlayerCommand};

/// Represents the current playback status of the player.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum PlayerState {
    Playing,
    Paused,
    Stopped,
}

/// A handle to the video player.
///
/// This struct acts as a command proxy; it does not play anything itself but
/// sends instructions to a background worker thread.
pub(crate) struct VideoPlayer {
    command_tx: mpsc::Sender<VideoPlayerCommand>,
}

impl VideoPlayer {
    /// Spawns the player worker thread and returns a new player handle.
    ///
    /// # Arguments
    ///
    /// * `event_tx` - A channel to send application-level events (progress
    ///   updates, end of track, errors) back to the main event loop.
    pub(crate) fn new(event_tx: mpsc::Sender<AppEvent>) -> Self {
        let (command_tx, command_rx) = mpsc::channel::<VideoPlayerCommand>();

        commands::spawn_player_worker(command_rx, event_tx);

        Self { command_tx }
    }

    // Maps internal backend flags to a simplified [`PlayerState`].
    fn player_state(is_paused: bool, is_idle: bool) -> PlayerState {
        if is_idle {
            PlayerState::Stopped
        } else if is_paused {
            PlayerState::Paused
        } else {
            PlayerState::Playing
        }
    }

    /// Replaces whatever is playing with the video `id`.
    pub(crate) fn play(&self, id: VideoId) -> Result<()> {
        self.command_tx.send(VideoPlayerCommand::Play(id))?;
        Ok(())
    }

    /// Toggles the playback state between paused and playing.
    pub(crate) fn toggle_pause(&self) -> Result<()> {
        self.command_tx.send(VideoPlayerCommand::TogglePause)?;
        Ok(())
    }

    pub(crate) fn stop(&self) -> Result<()> {
        self.command_tx.send(VideoPlayerCommand::Stop)?;
        Ok(())
    }

    /// Adjusts the volume relative to the current level.
    pub(crate) fn adjust_volume(&self, delta: i32) -> Result<()> {
        self.command_tx
            .send(VideoPlayerCommand::AdjustVolume(delta))?;
        Ok(())
    }

    /// Seeks forward or backwards by `delta` seconds.
    pub(crate) fn seek(&self, delta: i32) -> Result<()> {
        self.command_tx.send(VideoPlayerCommand::Seek(delta))?;
        Ok(())
    }
}
