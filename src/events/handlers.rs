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

use anyhow::Result;
use log::{error, info, warn};
use tubeplay::{
    LoginOutcome, SessionMessage, Track, VideoId,
    catalog::{ChannelPage, SearchResult},
};
use tui_input::Input;

use crate::{
    App, Screen,
    commander::Command,
    events::{AppEvent, CatalogSource},
    login::FormMode,
    player::PlayerState,
    tasks::AppTask,
    views::{BrowserPane, MainView},
};

const NO_PLAYLIST_SELECTED: &str = "Select one of your playlists first";

pub(super) fn handle_set_main_view(app: &mut App, main_view: MainView) {
    app.search_view.editing = false;
    app.main_view = main_view;
}

pub(super) fn handle_search_results_ready(app: &mut App, results: Vec<SearchResult>) {
    let count = results.len();
    app.search_view.results.set_items(results);
    if count == 0 {
        app.search_view.results.message = Some("No videos found".to_string());
    }
}

pub(super) fn handle_channel_page_ready(app: &mut App, page: ChannelPage, append: bool) {
    let view = &mut app.channel_view;
    if append {
        view.results.append_items(page.videos);
    } else {
        view.results.set_items(page.videos);
    }
    view.next_page_token = page.next_page_token;
}

/// Catalog failures only affect the view that asked; playback and playlists
/// carry on.
pub(super) fn handle_catalog_failed(app: &mut App, source: CatalogSource, message: String) {
    match source {
        CatalogSource::Search => app.search_view.results.fail(message),
        CatalogSource::Channel => {
            app.channel_view.results.fail(message);
            app.channel_view.next_page_token = None;
        }
    }
}

pub(super) fn handle_player_state_changed(app: &mut App, state: PlayerState) {
    app.player_state = state;
}

pub(super) fn handle_duration_changed(app: &mut App, duration: u64) {
    app.player_duration = Some(duration);
}

pub(super) fn handle_volume_changed(app: &mut App, volume: u32) {
    app.volume = Some(volume);
}

pub(super) fn handle_time_changed(app: &mut App, seconds: f64) {
    app.player_time = Some(seconds as u64);
    if let Some(duration) = app.player_duration {
        app.player_position = if duration > 0 {
            Some(seconds / duration as f64)
        } else {
            None
        };
    }
}

pub(super) fn handle_track_ended(app: &mut App, id: VideoId) -> Result<()> {
    app.player_time = app.player_duration;
    apply_session(app, SessionMessage::TrackEnded(id))
}

pub(super) fn handle_error(app: &mut App, message: String) {
    app.set_error(message);
}

pub(super) fn handle_fatal_error(app: &mut App, message: String) {
    error!("{}", message);
    app.set_error(message);
}

/// Applies a message to the playback session and brings the player in line
/// with the result.
pub(super) fn apply_session(app: &mut App, message: SessionMessage) -> Result<()> {
    let transition = match app.session.apply(message) {
        Ok(transition) => transition,
        Err(e) => {
            app.set_error(e.to_string());
            return Ok(());
        }
    };

    if transition.is_changed() {
        app.player_time = None;
        app.player_duration = None;
        app.player_position = None;

        match app.session.active_track() {
            Some(track) => app.player.play(track.video_id().clone())?,
            None => app.player.stop()?,
        }
    }

    Ok(())
}

pub(super) fn handle_login_submit(app: &mut App) -> Result<()> {
    let form = &mut app.login_form;

    match form.mode() {
        FormMode::Login => {
            match app.auth.login(form.value(0), form.value(1)) {
                LoginOutcome::Authenticated { display_name } => {
                    form.reset_to_login(None);
                    app.screen = Screen::Main;
                    app.set_status(format!("Welcome, {}!", display_name));
                    app.channel_view.results.start_loading();
                    app.task_tx.send(AppTask::ListChannel(None))?;
                }
                LoginOutcome::Rejected => {
                    form.error = Some("Username/password is incorrect".to_string());
                }
            }
        }
        FormMode::Register => {
            match app
                .auth
                .register(form.value(0), form.value(1), form.value(2), form.value(3))
            {
                Ok(()) => {
                    form.reset_to_login(Some("Registration successful! Please log in.".to_string()))
                }
                Err(e) => form.error = Some(e.to_string()),
            }
        }
    }

    Ok(())
}

pub(super) fn handle_logout(app: &mut App) -> Result<()> {
    apply_session(app, SessionMessage::Stop)?;
    app.auth.logout();
    app.login_form.reset_to_login(Some("You have been logged out".to_string()));
    app.screen = Screen::Login;
    app.status = None;

    Ok(())
}

pub(super) fn handle_command(app: &mut App, command: Command) -> Result<()> {
    match command {
        Command::NewPlaylist(name) => create_playlist(app, &name, vec![]),
        Command::DeletePlaylist => delete_playlist(app),
        Command::RenamePlaylist(name) => rename_playlist(app, &name),
        Command::SaveQueue(name) => save_queue(app, &name),
        Command::AddTrack { url, title } => match Track::new(url, title) {
            Ok(track) => add_to_selected_playlist(app, track),
            Err(e) => app.set_error(e.to_string()),
        },
        Command::Search(query) => {
            app.search_view.input = Input::new(query);
            app.main_view = MainView::Search;
            run_search(app)?;
        }
        Command::MoreChannelResults => load_more_channel_results(app)?,
        Command::Logout => handle_logout(app)?,
        Command::Quit => app.event_tx.send(AppEvent::ExitApplication)?,
    }

    Ok(())
}

pub(super) fn run_search(app: &mut App) -> Result<()> {
    let query = app.search_view.input.value().trim().to_string();
    app.search_view.editing = false;

    if query.is_empty() {
        app.set_error("Enter something to search for".to_string());
        return Ok(());
    }

    app.search_view.results.start_loading();
    app.task_tx.send(AppTask::Search {
        query,
        max_results: app.config.max_results,
    })?;

    Ok(())
}

pub(super) fn load_more_channel_results(app: &mut App) -> Result<()> {
    match app.channel_view.next_page_token.clone() {
        Some(token) if !app.channel_view.results.loading => {
            app.channel_view.results.loading = true;
            app.task_tx.send(AppTask::ListChannel(Some(token)))?;
        }
        Some(_) => {}
        None => app.set_status("No more videos in the channel".to_string()),
    }

    Ok(())
}

/// Plays the current selection: a playlist track starts a queue over that
/// playlist, a catalog video plays on its own.
pub(super) fn play_selection(app: &mut App) -> Result<()> {
    match app.main_view {
        MainView::Featured | MainView::MyPlaylists => {
            let Some(browser) = app.active_browser_mut() else {
                return Ok(());
            };
            if browser.active_pane == BrowserPane::Playlists {
                browser.set_pane(BrowserPane::Tracks);
                browser.select_track(Some(0));
                app.sync_active_browser();
                return Ok(());
            }
            let index = browser.selected_track().unwrap_or(0);

            let Some(tracks) = app.selected_playlist_tracks() else {
                return Ok(());
            };
            apply_session(app, SessionMessage::PlayQueueFrom(tracks, index))
        }
        MainView::Channel => match app.channel_view.results.selected() {
            Some(video) => {
                let track = video.to_track();
                apply_session(app, SessionMessage::PlayTrack(track))
            }
            None => Ok(()),
        },
        MainView::Search => match app.search_view.results.selected() {
            Some(result) => {
                let track = result.to_track();
                apply_session(app, SessionMessage::PlayTrack(track))
            }
            None => Ok(()),
        },
    }
}

/// Plays everything in the current view as a queue from the start.
pub(super) fn play_all(app: &mut App) -> Result<()> {
    let tracks = match app.main_view {
        MainView::Featured | MainView::MyPlaylists => app.selected_playlist_tracks(),
        MainView::Channel => Some(
            app.channel_view
                .results
                .items
                .iter()
                .map(|video| video.to_track())
                .collect(),
        ),
        MainView::Search => Some(
            app.search_view
                .results
                .items
                .iter()
                .map(|result| result.to_track())
                .collect(),
        ),
    };

    match tracks {
        Some(tracks) if !tracks.is_empty() => apply_session(app, SessionMessage::PlayQueueFrom(tracks, 0)),
        _ => {
            app.set_error("Nothing to play".to_string());
            Ok(())
        }
    }
}

/// Adds the selected catalog video to the playlist selected under "My
/// Playlists".
pub(super) fn add_selected_video(app: &mut App) {
    let track = match app.main_view {
        MainView::Channel => app.channel_view.results.selected().map(|v| v.to_track()),
        MainView::Search => app.search_view.results.selected().map(|r| r.to_track()),
        _ => None,
    };

    if let Some(track) = track {
        add_to_selected_playlist(app, track);
    }
}

pub(super) fn remove_selected_track(app: &mut App) {
    let (Some(name), Some(index)) = (app.selected_user_playlist(), app.playlists_view.selected_track())
    else {
        return;
    };

    match app.store.remove_at(&name, index) {
        Ok(track) => {
            app.sync_playlists_view();
            app.set_status(format!("Removed '{}' from '{}'", track.title(), name));
        }
        Err(e) => app.set_error(e.to_string()),
    }
}

/// Moves the selected track one place up (`-1`) or down (`1`), keeping it
/// selected.
pub(super) fn move_selected_track(app: &mut App, offset: isize) {
    let (Some(name), Some(from)) = (app.selected_user_playlist(), app.playlists_view.selected_track())
    else {
        return;
    };

    let Some(to) = from.checked_add_signed(offset) else {
        return;
    };
    let len = app.store.get(&name).map(|p| p.len()).unwrap_or(0);
    if to >= len {
        return;
    }

    match app.store.move_track(&name, from, to) {
        Ok(()) => app.playlists_view.select_track(Some(to)),
        Err(e) => app.set_error(e.to_string()),
    }
}

fn create_playlist(app: &mut App, name: &str, tracks: Vec<Track>) {
    match app.store.create_from(name, tracks) {
        Ok(()) => {
            app.main_view = MainView::MyPlaylists;
            app.playlists_view.select_playlist(Some(app.store.len() - 1));
            app.set_status(format!("Created playlist '{}'", name.trim()));
        }
        Err(e) => app.set_error(e.to_string()),
    }
}

fn delete_playlist(app: &mut App) {
    let Some(name) = app.selected_user_playlist() else {
        app.set_error(NO_PLAYLIST_SELECTED.to_string());
        return;
    };

    match app.store.delete(&name) {
        Ok(()) => {
            app.sync_playlists_view();
            app.set_status(format!("Deleted playlist '{}'", name));
        }
        Err(e) => app.set_error(e.to_string()),
    }
}

fn rename_playlist(app: &mut App, new_name: &str) {
    let Some(name) = app.selected_user_playlist() else {
        app.set_error(NO_PLAYLIST_SELECTED.to_string());
        return;
    };

    match app.store.rename(&name, new_name) {
        Ok(()) => app.set_status(format!("Renamed '{}' to '{}'", name, new_name.trim())),
        Err(e) => app.set_error(e.to_string()),
    }
}

fn save_queue(app: &mut App, name: &str) {
    let tracks = match (app.session.queue(), app.session.active_track()) {
        (Some(queue), _) => queue.tracks().to_vec(),
        (None, Some(track)) => vec![track.clone()],
        (None, None) => {
            app.set_error("Nothing is playing".to_string());
            return;
        }
    };

    create_playlist(app, name, tracks);
}

fn add_to_selected_playlist(app: &mut App, track: Track) {
    let Some(name) = app.selected_user_playlist() else {
        app.set_error(NO_PLAYLIST_SELECTED.to_string());
        return;
    };

    let title = track.title().to_string();
    match app.store.append(&name, track) {
        Ok(()) => {
            info!("Added '{}' to '{}'", title, name);
            app.sync_playlists_view();
            app.set_status(format!("Added '{}' to '{}'", title, name));
        }
        Err(e) => {
            warn!("Failed to add '{}' to '{}': {}", title, name, e);
            app.set_error(e.to_string());
        }
    }
}
