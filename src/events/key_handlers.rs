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

//! Keyboard routing.
//!
//! On the login screen every key goes to the login form. On the main screen a
//! key is offered, in order, to the command line, to the search box while it
//! is being edited, and finally to the global key map.

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use tubeplay::SessionMessage;
use tui_input::backend::crossterm::EventHandler;

use crate::{
    App, Screen,
    events::{AppEvent, handlers::*},
    login::FormAction,
    views::MainView,
};

const VOLUME_DELTA: i32 = 5;

const FINE_SEEK_DELTA: i32 = 5;
const SEEK_DELTA: i32 = 30;

pub(super) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match app.screen {
        Screen::Login => process_login_key_event(app, key),
        Screen::Main => process_main_key_event(app, key),
    }
}

fn process_login_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.modifiers == KeyModifiers::CONTROL && key.code == KeyCode::Char('c') {
        app.event_tx.send(AppEvent::ExitApplication)?;
        return Ok(());
    }

    app.login_form.error = None;
    match app.login_form.handle_key(key) {
        FormAction::Submit => handle_login_submit(app)?,
        FormAction::Quit => app.event_tx.send(AppEvent::ExitApplication)?,
        FormAction::None => {}
    }

    Ok(())
}

fn process_main_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    let event = Event::Key(key);
    if app.commander.handle_event(&event, &app.event_tx) {
        return Ok(());
    }

    if app.search_view.editing {
        match key.code {
            KeyCode::Enter => run_search(app)?,
            KeyCode::Esc => app.search_view.editing = false,
            _ => {
                app.search_view.input.handle_event(&event);
            }
        }
        return Ok(());
    }

    process_global_key_event(app, key)
}

fn process_global_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            app.event_tx.send(AppEvent::ExitApplication)?;
        }

        (KeyCode::Char('1'), _) => app.event_tx.send(AppEvent::SetMainView(MainView::Featured))?,
        (KeyCode::Char('2'), _) => app
            .event_tx
            .send(AppEvent::SetMainView(MainView::MyPlaylists))?,
        (KeyCode::Char('3'), _) => app.event_tx.send(AppEvent::SetMainView(MainView::Channel))?,
        (KeyCode::Char('4'), _) => app.event_tx.send(AppEvent::SetMainView(MainView::Search))?,

        // Navigation: Down / j
        (KeyCode::Char('j'), _) | (KeyCode::Down, _) => app.select_next(),

        // Navigation: Up / k
        (KeyCode::Char('k'), _) | (KeyCode::Up, _) => app.select_previous(),

        // Pane Navigation
        (KeyCode::Char('h'), _) | (KeyCode::Left, _) | (KeyCode::Char('l'), _) | (KeyCode::Right, _) => {
            if let Some(browser) = app.active_browser_mut() {
                browser.toggle_pane();
            }
            app.sync_active_browser();
        }

        // Playback controls
        (KeyCode::Enter, _) => play_selection(app)?,
        (KeyCode::Char('p'), _) => play_all(app)?,
        (KeyCode::Char('n'), _) => apply_session(app, SessionMessage::Advance)?,
        (KeyCode::Char('b'), _) => apply_session(app, SessionMessage::Retreat)?,
        (KeyCode::Char('s'), _) => apply_session(app, SessionMessage::Stop)?,
        (KeyCode::Char(' '), _) => app.player.toggle_pause()?,
        (KeyCode::Char(','), _) => app.player.seek(-FINE_SEEK_DELTA)?,
        (KeyCode::Char('.'), _) => app.player.seek(FINE_SEEK_DELTA)?,
        (KeyCode::Char('<'), _) => app.player.seek(-SEEK_DELTA)?,
        (KeyCode::Char('>'), _) => app.player.seek(SEEK_DELTA)?,
        (KeyCode::Char('-'), _) => app.player.adjust_volume(-VOLUME_DELTA)?,
        (KeyCode::Char('='), _) | (KeyCode::Char('+'), _) => app.player.adjust_volume(VOLUME_DELTA)?,

        // Playlist management
        (KeyCode::Char('a'), _) => add_selected_video(app),
        (KeyCode::Char('x'), _) if app.main_view == MainView::MyPlaylists => remove_selected_track(app),
        (KeyCode::Char('J'), _) if app.main_view == MainView::MyPlaylists => move_selected_track(app, 1),
        (KeyCode::Char('K'), _) if app.main_view == MainView::MyPlaylists => move_selected_track(app, -1),

        // Catalog
        (KeyCode::Char('m'), _) if app.main_view == MainView::Channel => load_more_channel_results(app)?,
        (KeyCode::Char('/'), _) => {
            app.main_view = MainView::Search;
            app.search_view.editing = true;
        }

        _ => {}
    }

    Ok(())
}
