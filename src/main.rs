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

//! # ClassicsAI Music Player.
//!
//! A terminal player for a YouTube channel of classical music, with local
//! accounts and saved playlists.
//!
//! This application coordinates a TUI frontend built with `ratatui`, a
//! background catalog worker and an `mpv` player.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** manages the terminal lifecycle, UI rendering, the
//!   playback session and the playlist store.
//! * **Background Workers** run blocking YouTube requests and drive `mpv`.
//! * **Event Loops** capture user input and system ticks to drive the UI
//!   state.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of a crash. Communication
//! between the UI and background workers is handled via `std::sync::mpsc`
//! channels.

mod commander;
mod events;
mod login;
mod player;
mod render;
mod tasks;
mod theme;
mod util;
mod views;

use std::{
    env,
    fs::OpenOptions,
    io,
    path::Path,
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::Duration,
};

use anyhow::{Context, Result};
use crossterm::{
    event::{self},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use env_logger::{Env, Target};
use log::{error, info, warn};
use ratatui::{Terminal, backend::CrosstermBackend};
use tubeplay::{
    Authenticator, CredentialStore, PlaybackSession, Playlist, PlaylistStore, Track,
    catalog::YouTubeCatalog,
    config::{self, API_KEY_ENV, AppConfig},
    store::featured::featured_playlists,
};

use crate::{
    commander::Commander,
    events::{AppEvent, process_events},
    login::LoginForm,
    player::{PlayerState, VideoPlayer},
    tasks::{AppTask, Catalog},
    theme::Theme,
    views::{BrowserPane, ChannelView, MainView, PlaylistBrowser, SearchView},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Login,
    Main,
}

/// One line of feedback shown in the status bar.
#[derive(Debug, Clone, PartialEq, Eq)]
struct StatusMessage {
    text: String,
    is_error: bool,
}

/// Application state.
struct App {
    pub config: AppConfig,

    pub theme: Theme,
    pub screen: Screen,
    pub main_view: MainView,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub task_tx: Sender<AppTask>,

    pub player: VideoPlayer,
    pub session: PlaybackSession,

    pub store: PlaylistStore,
    pub featured: Vec<Playlist>,
    pub auth: Authenticator,

    pub login_form: LoginForm,
    pub featured_view: PlaylistBrowser,
    pub playlists_view: PlaylistBrowser,
    pub channel_view: ChannelView,
    pub search_view: SearchView,

    pub commander: Commander,
    pub status: Option<StatusMessage>,

    pub player_state: PlayerState,
    pub player_duration: Option<u64>,
    pub player_time: Option<u64>,
    pub player_position: Option<f64>,
    pub volume: Option<u32>,
}

impl App {
    /// Create a new instance of application state.
    pub fn new(config: AppConfig, task_tx: Sender<AppTask>) -> Result<Self> {
        let (event_tx, event_rx) = mpsc::channel();

        let playlists_path = config::data_path(&config.playlists_file);
        let store = PlaylistStore::open(&playlists_path)
            .with_context(|| format!("Failed to open playlists {}", playlists_path.display()))?;

        let credentials_path = config::data_path(&config.credentials_file);
        let credentials = CredentialStore::open(&credentials_path)
            .with_context(|| format!("Failed to open credentials {}", credentials_path.display()))?;

        info!(
            "Loaded {} playlists and {} accounts",
            store.len(),
            credentials.len()
        );

        let featured = featured_playlists();

        let mut featured_view = PlaylistBrowser::new();
        featured_view.select_playlist((!featured.is_empty()).then_some(0));

        let mut playlists_view = PlaylistBrowser::new();
        playlists_view.select_playlist((!store.is_empty()).then_some(0));

        let player = VideoPlayer::new(event_tx.clone());

        Ok(Self {
            config,
            theme: Theme::classical(),
            screen: Screen::Login,
            main_view: MainView::Featured,
            event_tx,
            event_rx,
            task_tx,
            player,
            session: PlaybackSession::new(),
            store,
            featured,
            auth: Authenticator::new(credentials),
            login_form: LoginForm::new(),
            featured_view,
            playlists_view,
            channel_view: ChannelView::default(),
            search_view: SearchView::default(),
            commander: Commander::new(),
            status: None,
            player_state: PlayerState::Stopped,
            player_duration: None,
            player_time: None,
            player_position: None,
            volume: None,
        })
    }

    pub fn set_status(&mut self, text: String) {
        self.status = Some(StatusMessage {
            text,
            is_error: false,
        });
    }

    pub fn set_error(&mut self, text: String) {
        warn!("{}", text);
        self.status = Some(StatusMessage {
            text,
            is_error: true,
        });
    }

    // The playlist browser of the current tab with the playlists it shows.
    fn browser_and_playlists(&mut self) -> Option<(&mut PlaylistBrowser, &[Playlist])> {
        match self.main_view {
            MainView::Featured => Some((&mut self.featured_view, self.featured.as_slice())),
            MainView::MyPlaylists => Some((&mut self.playlists_view, self.store.playlists())),
            MainView::Channel | MainView::Search => None,
        }
    }

    pub fn active_browser_mut(&mut self) -> Option<&mut PlaylistBrowser> {
        self.browser_and_playlists().map(|(browser, _)| browser)
    }

    /// Keeps the current tab's selections inside its playlists.
    pub fn sync_active_browser(&mut self) {
        if let Some((browser, playlists)) = self.browser_and_playlists() {
            browser.sync(playlists.len(), |i| playlists.get(i).map_or(0, Playlist::len));
        }
    }

    /// Re-clamps the "My Playlists" selections after the store changed.
    pub fn sync_playlists_view(&mut self) {
        let playlists = self.store.playlists();
        self.playlists_view
            .sync(playlists.len(), |i| playlists.get(i).map_or(0, Playlist::len));
    }

    /// The tracks of the playlist selected in the current tab.
    pub fn selected_playlist_tracks(&mut self) -> Option<Vec<Track>> {
        let (browser, playlists) = self.browser_and_playlists()?;
        let index = browser.selected_playlist()?;
        playlists.get(index).map(|p| p.tracks.clone())
    }

    /// The name of the playlist selected under "My Playlists", whichever tab
    /// is showing.
    pub fn selected_user_playlist(&self) -> Option<String> {
        let index = self.playlists_view.selected_playlist()?;
        self.store.playlists().get(index).map(|p| p.name.clone())
    }

    pub fn select_next(&mut self) {
        match self.main_view {
            MainView::Channel => self.channel_view.results.next(),
            MainView::Search => self.search_view.results.next(),
            MainView::Featured | MainView::MyPlaylists => {
                if let Some((browser, playlists)) = self.browser_and_playlists() {
                    match browser.active_pane {
                        BrowserPane::Playlists => browser.next_playlist(playlists.len()),
                        BrowserPane::Tracks => {
                            let len = selected_len(browser, playlists);
                            browser.next_track(len);
                        }
                    }
                }
            }
        }
    }

    pub fn select_previous(&mut self) {
        match self.main_view {
            MainView::Channel => self.channel_view.results.previous(),
            MainView::Search => self.search_view.results.previous(),
            MainView::Featured | MainView::MyPlaylists => {
                if let Some((browser, playlists)) = self.browser_and_playlists() {
                    match browser.active_pane {
                        BrowserPane::Playlists => browser.previous_playlist(playlists.len()),
                        BrowserPane::Tracks => {
                            let len = selected_len(browser, playlists);
                            browser.previous_track(len);
                        }
                    }
                }
            }
        }
    }
}

fn selected_len(browser: &PlaylistBrowser, playlists: &[Playlist]) -> usize {
    browser
        .selected_playlist()
        .and_then(|i| playlists.get(i))
        .map_or(0, Playlist::len)
}

/// The entry point of the application.
///
/// Sets up logging and the communication channels, initializes the
/// application state, manages the terminal lifecycle, and returns an error if
/// any part of the execution fails.
fn main() -> Result<()> {
    let config = config::load_config();

    init_logging(&config::data_path(&config.log_file))?;

    let catalog = build_catalog(&config);

    let (task_tx, task_rx) = mpsc::channel();

    let mut app = App::new(config, task_tx).context("Failed to initialise application")?;

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app, catalog, task_rx);
    restore_terminal(&mut terminal);

    res.context("Application error occurred")
}

/// Sends log output to a file, since the terminal belongs to the UI.
///
/// The level comes from `RUST_LOG`, defaulting to `info`.
fn init_logging(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .init();

    Ok(())
}

/// Builds the YouTube catalog, or `None` if there is no API key. Without a
/// catalog the channel and search tabs report the problem; everything else
/// works.
fn build_catalog(config: &AppConfig) -> Catalog {
    let Some(api_key) = config.resolve_api_key(env::var(API_KEY_ENV).ok()) else {
        warn!("No YouTube API key, set {} or youtube_api_key", API_KEY_ENV);
        return None;
    };

    match YouTubeCatalog::new(api_key, &config.channel_id, config.max_results) {
        Ok(catalog) => Some(Box::new(catalog)),
        Err(e) => {
            error!("Failed to create YouTube client: {}", e);
            None
        }
    }
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Sets the terminal background color based on the theme.
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    // Set the background of the entire terminal window, without this we'd get
    // a thin black outline
    util::term::set_terminal_bg(app.theme.background_colour).ok();

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`]. It is best-effort
/// and does not return a result, as it runs during cleanup.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    util::term::reset_terminal_bg().ok();
    terminal.show_cursor().ok();
}

/// Starts the application's background workers and enters the main event loop.
///
/// This function spawns several long-running background threads:
/// * A task worker to run blocking catalog requests.
/// * An input thread to poll for system keyboard events.
/// * A tick thread to trigger periodic UI refreshes.
///
/// After spawning the workers, it hands control to [`process_events`] to
/// manage the UI and state updates.
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    catalog: Catalog,
    task_rx: Receiver<AppTask>,
) -> Result<()> {
    tasks::spawn_task_worker(catalog, task_rx, app.event_tx.clone());

    // Spawn a thread to translate raw key events to application events.
    let tx_keys = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            if let Ok(event::Event::Key(key)) = event::read()
                && tx_keys.send(AppEvent::Key(key)).is_err()
            {
                break;
            }
        }
    });

    // Spawn a thread to send a periodic tick application event, this is
    // effectively the minimum "frame rate" for rendering the TUI application.
    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        while tx_tick.send(AppEvent::Tick).is_ok() {
            thread::sleep(Duration::from_millis(250));
        }
    });

    process_events(terminal, app)
}
