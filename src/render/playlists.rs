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

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use tubeplay::{Playlist, VideoId};

use crate::{
    render::icons::ICON_PLAY,
    theme::Theme,
    views::{BrowserPane, PlaylistBrowser},
};

pub(super) fn draw_playlists(
    f: &mut Frame,
    area: Rect,
    playlists: &[Playlist],
    browser: &mut PlaylistBrowser,
    theme: &Theme,
    active_id: Option<&VideoId>,
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(area);

    let playlist_items: Vec<ListItem> = playlists
        .iter()
        .map(|p| {
            ListItem::new(Line::from(vec![
                Span::raw(p.name.as_str()),
                Span::styled(
                    format!(" ({})", p.len()),
                    Style::default().fg(theme.muted_colour),
                ),
            ]))
        })
        .collect();

    if playlist_items.is_empty() {
        let hint = Paragraph::new("No playlists yet. Create one with :new <name>")
            .style(Style::default().fg(theme.muted_colour))
            .block(pane_block(" Playlists ", theme, browser.active_pane == BrowserPane::Playlists));
        f.render_widget(hint, chunks[0]);
    } else {
        render_list(
            f,
            chunks[0],
            " Playlists ",
            playlist_items,
            &mut browser.playlists_state,
            theme,
            browser.active_pane == BrowserPane::Playlists,
        );
    }

    let selected = browser.selected_playlist().and_then(|i| playlists.get(i));
    let title = selected
        .map(|p| format!(" {} ", p.name))
        .unwrap_or_else(|| " Tracks ".to_string());

    let width = selected.map(|p| p.len()).unwrap_or(0).to_string().len().max(2);
    let track_items: Vec<ListItem> = selected
        .map(|p| p.tracks.as_slice())
        .unwrap_or_default()
        .iter()
        .enumerate()
        .map(|(i, track)| {
            let playing = active_id == Some(track.video_id());
            let marker = if playing { ICON_PLAY } else { " " };
            let style = if playing {
                Style::default()
                    .fg(theme.highlight_colour)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text_colour)
            };

            ListItem::new(Line::from(vec![
                Span::styled(format!("{} ", marker), style),
                Span::styled(format!("{:0width$} ", i + 1), Style::default().fg(theme.muted_colour)),
                Span::styled(track.title(), style),
            ]))
        })
        .collect();

    render_list(
        f,
        chunks[1],
        &title,
        track_items,
        &mut browser.tracks_state,
        theme,
        browser.active_pane == BrowserPane::Tracks,
    );
}

pub(super) fn pane_block<'a>(title: &'a str, theme: &Theme, is_active: bool) -> Block<'a> {
    let style = if is_active {
        Style::default()
            .fg(theme.highlight_colour)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.border_colour)
    };

    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(style)
}

pub(super) fn render_list(
    f: &mut Frame,
    area: Rect,
    title: &str,
    items: Vec<ListItem>,
    state: &mut ListState,
    theme: &Theme,
    is_active: bool,
) {
    let list = List::new(items)
        .block(pane_block(title, theme, is_active))
        .highlight_style(
            Style::default()
                .bg(theme.accent_colour)
                .fg(theme.text_colour),
        )
        .highlight_symbol("\u{00BB} ");

    f.render_stateful_widget(list, area, state);
}
