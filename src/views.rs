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

//! View state for the main screen.
//!
//! Views only hold selection and presentation state. The data they show is
//! owned elsewhere (the playlist store, the featured playlists, catalog
//! results) and is passed in when a selection needs bounds.

use ratatui::widgets::ListState;
use tui_input::Input;

use tubeplay::catalog::{ChannelVideo, SearchResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MainView {
    Featured,
    MyPlaylists,
    Channel,
    Search,
}

impl MainView {
    pub(crate) const ALL: [MainView; 4] = [
        MainView::Featured,
        MainView::MyPlaylists,
        MainView::Channel,
        MainView::Search,
    ];

    pub(crate) fn title(self) -> &'static str {
        match self {
            MainView::Featured => "Featured Playlists",
            MainView::MyPlaylists => "My Playlists",
            MainView::Channel => "Channel Browser",
            MainView::Search => "Search",
        }
    }

    pub(crate) fn index(self) -> usize {
        Self::ALL.iter().position(|v| *v == self).unwrap_or(0)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BrowserPane {
    #[default]
    Playlists,
    Tracks,
}

/// Two-pane playlist browser: playlist names on the left, the selected
/// playlist's tracks on the right.
#[derive(Debug, Default)]
pub(crate) struct PlaylistBrowser {
    pub(crate) active_pane: BrowserPane,
    pub(crate) playlists_state: ListState,
    pub(crate) tracks_state: ListState,
}

impl PlaylistBrowser {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn toggle_pane(&mut self) {
        self.active_pane = match self.active_pane {
            BrowserPane::Playlists => BrowserPane::Tracks,
            BrowserPane::Tracks => BrowserPane::Playlists,
        };
    }

    pub(crate) fn set_pane(&mut self, pane: BrowserPane) {
        self.active_pane = pane;
    }

    pub(crate) fn selected_playlist(&self) -> Option<usize> {
        self.playlists_state.selected()
    }

    pub(crate) fn selected_track(&self) -> Option<usize> {
        self.tracks_state.selected()
    }

    pub(crate) fn next_playlist(&mut self, len: usize) {
        next(&mut self.playlists_state, len);
        self.tracks_state.select(None);
    }

    pub(crate) fn previous_playlist(&mut self, len: usize) {
        previous(&mut self.playlists_state, len);
        self.tracks_state.select(None);
    }

    pub(crate) fn next_track(&mut self, len: usize) {
        next(&mut self.tracks_state, len);
    }

    pub(crate) fn previous_track(&mut self, len: usize) {
        previous(&mut self.tracks_state, len);
    }

    pub(crate) fn select_playlist(&mut self, index: Option<usize>) {
        self.playlists_state.select(index);
        self.tracks_state.select(None);
    }

    pub(crate) fn select_track(&mut self, index: Option<usize>) {
        self.tracks_state.select(index);
    }

    /// Keeps both selections inside the data after it has changed.
    ///
    /// `track_count` is a function of the selected playlist, since the
    /// playlist selection may move first.
    pub(crate) fn sync(&mut self, playlist_count: usize, track_count: impl Fn(usize) -> usize) {
        clamp(&mut self.playlists_state, playlist_count);

        match self.playlists_state.selected() {
            Some(index) => clamp(&mut self.tracks_state, track_count(index)),
            None => self.tracks_state.select(None),
        }
    }
}

/// A selectable list of catalog results with a loading/error message.
#[derive(Debug)]
pub(crate) struct ResultList<T> {
    pub(crate) items: Vec<T>,
    pub(crate) state: ListState,
    pub(crate) message: Option<String>,
    pub(crate) loading: bool,
}

impl<T> Default for ResultList<T> {
    fn default() -> Self {
        Self {
            items: vec![],
            state: ListState::default(),
            message: None,
            loading: false,
        }
    }
}

impl<T> ResultList<T> {
    pub(crate) fn start_loading(&mut self) {
        self.loading = true;
        self.message = None;
    }

    pub(crate) fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.loading = false;
        self.message = None;
        self.state.select((!self.items.is_empty()).then_some(0));
    }

    /// Adds a further page of results, keeping the current selection.
    pub(crate) fn append_items(&mut self, items: Vec<T>) {
        let first_new = self.items.len();
        self.items.extend(items);
        self.loading = false;
        self.message = None;
        if self.state.selected().is_none() && first_new < self.items.len() {
            self.state.select(Some(first_new));
        }
    }

    /// Clears the results and shows `message` in their place.
    pub(crate) fn fail(&mut self, message: String) {
        self.items.clear();
        self.state.select(None);
        self.loading = false;
        self.message = Some(message);
    }

    pub(crate) fn selected_index(&self) -> Option<usize> {
        self.state.selected().filter(|i| *i < self.items.len())
    }

    pub(crate) fn selected(&self) -> Option<&T> {
        self.selected_index().and_then(|i| self.items.get(i))
    }

    pub(crate) fn next(&mut self) {
        next(&mut self.state, self.items.len());
    }

    pub(crate) fn previous(&mut self) {
        previous(&mut self.state, self.items.len());
    }
}

#[derive(Debug, Default)]
pub(crate) struct ChannelView {
    pub(crate) results: ResultList<ChannelVideo>,
    pub(crate) next_page_token: Option<String>,
}

#[derive(Debug, Default)]
pub(crate) struct SearchView {
    pub(crate) input: Input,
    pub(crate) editing: bool,
    pub(crate) results: ResultList<SearchResult>,
}

fn next(state: &mut ListState, len: usize) {
    if len == 0 {
        return;
    }
    let i = match state.selected() {
        Some(i) if i + 1 < len => i + 1,
        Some(_) => 0,
        None => 0,
    };
    state.select(Some(i));
}

fn previous(state: &mut ListState, len: usize) {
    if len == 0 {
        return;
    }
    let i = match state.selected() {
        Some(0) | None => len - 1,
        Some(i) => (i - 1).min(len - 1),
    };
    state.select(Some(i));
}

fn clamp(state: &mut ListState, len: usize) {
    let selected = match (state.selected(), len) {
        (_, 0) => None,
        (Some(i), len) => Some(i.min(len - 1)),
        (None, _) => Some(0),
    };
    state.select(selected);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_wraps() {
        let mut browser = PlaylistBrowser::new();

        browser.next_playlist(3);
        assert_eq!(browser.selected_playlist(), Some(0));
        browser.previous_playlist(3);
        assert_eq!(browser.selected_playlist(), Some(2));
        browser.next_playlist(3);
        assert_eq!(browser.selected_playlist(), Some(0));
    }

    #[test]
    fn changing_playlist_clears_track_selection() {
        let mut browser = PlaylistBrowser::new();
        browser.next_playlist(2);
        browser.next_track(5);
        browser.next_track(5);
        assert_eq!(browser.selected_track(), Some(1));

        browser.next_playlist(2);
        assert_eq!(browser.selected_track(), None);
    }

    #[test]
    fn sync_clamps_after_removal() {
        let mut browser = PlaylistBrowser::new();
        browser.select_playlist(Some(2));
        browser.select_track(Some(4));

        browser.sync(2, |_| 3);
        assert_eq!(browser.selected_playlist(), Some(1));
        assert_eq!(browser.selected_track(), Some(2));

        browser.sync(0, |_| 0);
        assert_eq!(browser.selected_playlist(), None);
        assert_eq!(browser.selected_track(), None);
    }

    #[test]
    fn failed_results_clear_the_list() {
        let mut list: ResultList<u32> = ResultList::default();
        list.set_items(vec![1, 2, 3]);
        list.next();
        assert_eq!(list.selected(), Some(&2));

        list.fail("quota exceeded".to_string());
        assert!(list.items.is_empty());
        assert_eq!(list.selected(), None);
        assert_eq!(list.message.as_deref(), Some("quota exceeded"));
    }

    #[test]
    fn appending_keeps_selection() {
        let mut list: ResultList<u32> = ResultList::default();
        list.set_items(vec![1, 2]);
        list.next();
        list.append_items(vec![3, 4]);

        assert_eq!(list.selected(), Some(&2));
        assert_eq!(list.items.len(), 4);
    }
}
