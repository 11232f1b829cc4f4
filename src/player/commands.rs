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

//! MPV-backed video playback engine and event processing.
//!
//! This module manages a background worker thread that bridges the
//! application's command-based interface and MPV's property observation
//! system.
//!
//! # Architecture
//!
//! The engine operates using a dual-channel communication pattern:
//! 1. **Command Channel**: Receives [`VideoPlayerCommand`]s from the UI to
//!    control playback (play, pause, seek, etc.).
//! 2. **Event Channel**: Broadcasts [`AppEvent`]s to notify the UI of state
//!    changes, such as progress, volume updates and the end of a video.
//!
//! # End of playback
//!
//! The end-of-file event carries no file identity, so the worker follows the
//! `path` property and reports [`AppEvent::TrackEnded`] with the id of the
//! video that was loaded when the file ended. MPV delivers events in order,
//! so the end of a replaced video is always reported under its own id, never
//! under the id of its replacement.

use anyhow::{Context, Result};
use log::{debug, warn};
use mpv::Format;
use std::{
    sync::mpsc::{self, Receiver, Sender},
    thread,
};
use tubeplay::{VideoId, model::extract_id};

use crate::{
    events::AppEvent,
    player::{PlayerState, VideoPlayer},
};

const YTDL_FORMAT: &str = "bestvideo[height<=?720]+bestaudio/best";

#[derive(Debug)]
pub(crate) enum VideoPlayerCommand {
    Play(VideoId),
    TogglePause,
    Seek(i32),
    Stop,
    AdjustVolume(i32),
}

/// Spawns the player worker thread to process playback commands.
///
/// If the worker returns an error, it is caught here and broadcast as a fatal
/// application event.
///
/// # Arguments
///
/// * `command_rx` - The receiving end of the player command channel.
/// * `event_tx` - The channel used to broadcast playback updates and errors.
pub(crate) fn spawn_player_worker(
    command_rx: Receiver<VideoPlayerCommand>,
    event_tx: Sender<AppEvent>,
) {
    let error_tx = event_tx.clone();

    thread::spawn(move || {
        if let Err(e) = video_player_worker(command_rx, event_tx) {
            let _ = error_tx.send(AppEvent::FatalError(format!("MPV worker failure: {:#}", e)));
        }
    });
}

/// Playback state tracked by the worker between MPV events.
#[derive(Debug)]
struct WorkerState {
    is_paused: bool,
    is_idle: bool,
    player_state: PlayerState,
    loaded: Option<VideoId>,
}

impl Default for WorkerState {
    fn default() -> Self {
        Self {
            is_paused: false,
            is_idle: true,
            player_state: PlayerState::Stopped,
            loaded: None,
        }
    }
}

/// The primary execution loop for the player backend.
///
/// # Errors
///
/// Returns an error if the MPV context fails to initialise or if the event
/// channel back to the application is closed.
fn video_player_worker(
    command_rx: Receiver<VideoPlayerCommand>,
    event_tx: Sender<AppEvent>,
) -> Result<()> {
    let mut handler = (|| {
        let mut builder = mpv::MpvHandlerBuilder::new().context("Failed to create MPV builder")?;
        builder
            .set_option("ytdl", "yes")
            .context("Failed to enable ytdl")?;
        builder
            .set_option("ytdl-format", YTDL_FORMAT)
            .context("Failed to set ytdl format")?;
        builder
            .set_option("osc", "yes")
            .context("Failed to enable on screen controls")?;
        builder.build().context("Failed to build MPV handler")
    })()?;

    handler
        .observe_property::<&str>("path", 0)
        .context("Failed to observe path")?;
    handler
        .observe_property::<f64>("duration", 0)
        .context("Failed to observe duration")?;
    handler
        .observe_property::<bool>("pause", 0)
        .context("Failed to observe pause")?;
    handler
        .observe_property::<f64>("time-pos", 0)
        .context("Failed to observe time-pos")?;
    handler
        .observe_property::<f64>("volume", 0)
        .context("Failed to observe volume")?;
    handler
        .observe_property::<bool>("idle-active", 0)
        .context("Failed to observe idle-active")?;

    let mut state = WorkerState::default();

    loop {
        if !process_commands(&mut handler, &command_rx, &event_tx)? {
            debug!("Player command channel closed, stopping worker");
            return Ok(());
        }
        process_mpv_events(&mut handler, &mut state, &event_tx)?;
    }
}

/// Drains and executes all pending commands from the application channel.
///
/// Returns `false` once the application has dropped its player handle.
fn process_commands(
    handler: &mut mpv::MpvHandler,
    command_rx: &mpsc::Receiver<VideoPlayerCommand>,
    event_tx: &mpsc::Sender<AppEvent>,
) -> Result<bool> {
    loop {
        let command = match command_rx.try_recv() {
            Ok(command) => command,
            Err(mpsc::TryRecvError::Empty) => return Ok(true),
            Err(mpsc::TryRecvError::Disconnected) => return Ok(false),
        };

        match command {
            VideoPlayerCommand::Play(id) => {
                let url = id.watch_url();
                debug!("Loading {}", url);
                let loaded = handler
                    .command(&["loadfile", &url, "replace"])
                    .and_then(|_| handler.set_property("pause", false));
                if let Err(e) = loaded {
                    warn!("Failed to load {}: {:?}", url, e);
                    event_tx.send(AppEvent::Error(format!("Failed to load video {}", id)))?;
                }
            }
            VideoPlayerCommand::TogglePause => {
                handler
                    .command(&["cycle", "pause"])
                    .context("Failed to toggle pause")?;
            }
            VideoPlayerCommand::Seek(delta) => {
                // Seeking with nothing loaded is rejected by MPV, which is fine.
                let _ = handler.command(&["seek", &delta.to_string(), "relative"]);
            }
            VideoPlayerCommand::Stop => {
                handler.command(&["stop"]).context("Failed to stop")?;
            }
            VideoPlayerCommand::AdjustVolume(delta) => {
                handler
                    .command(&["add", "volume", &delta.to_string()])
                    .context("Failed to adjust volume")?;
            }
        }
    }
}

/// Polls for MPV events and synchronizes the application state.
///
/// This function waits for up to 50ms for an event from the MPV context.
fn process_mpv_events(
    handler: &mut mpv::MpvHandler,
    state: &mut WorkerState,
    event_tx: &mpsc::Sender<AppEvent>,
) -> Result<()> {
    if let Some(mpv_event) = handler.wait_event(0.05) {
        let app_event = match mpv_event {
            mpv::Event::PropertyChange { name, change, .. } => match (name, change) {
                ("path", Format::Str(path)) => {
                    state.loaded = extract_id(path);
                    None
                }
                ("duration", Format::Double(duration)) => {
                    Some(AppEvent::DurationChanged(duration as u64))
                }
                ("pause", Format::Flag(pause)) => {
                    state.is_paused = pause;
                    None
                }
                ("time-pos", Format::Double(seconds)) if seconds >= 0.0 => {
                    Some(AppEvent::TimeChanged(seconds))
                }
                ("volume", Format::Double(volume)) => {
                    Some(AppEvent::VolumeChanged(volume.round() as u32))
                }
                ("idle-active", Format::Flag(idle_active)) => {
                    state.is_idle = idle_active;
                    None
                }
                _ => None,
            },
            mpv::Event::EndFile(result) => {
                let ended = state.loaded.take();
                match result {
                    Ok(mpv::EndFileReason::MPV_END_FILE_REASON_EOF) => {
                        ended.map(AppEvent::TrackEnded)
                    }
                    Ok(_) => None,
                    Err(e) => {
                        warn!("Playback of {:?} failed: {:?}", ended, e);
                        Some(AppEvent::Error("Playback failed".to_string()))
                    }
                }
            }
            _ => None,
        };

        let new_player_state = VideoPlayer::player_state(state.is_paused, state.is_idle);

        if new_player_state != state.player_state {
            state.player_state = new_player_state;
            event_tx
                .send(AppEvent::PlayerStateChanged(new_player_state))
                .context("Failed to send player state event")?;
        }

        if let Some(event) = app_event {
            event_tx.send(event).context("Failed to send event")?;
        }
    }

    Ok(())
}
