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

//! Screen rendering.
//!
//! The whole screen is redrawn from application state after every event.

mod catalog;
mod commander;
mod icons;
mod login;
mod player;
mod playlists;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Tabs},
};

use crate::{
    App, Screen,
    render::{
        catalog::{draw_channel, draw_search},
        commander::draw_commander,
        login::draw_login,
        player::draw_player,
        playlists::draw_playlists,
    },
    views::MainView,
};

const APP_TITLE: &str = "\u{266A} ClassicsAI Music Player \u{266A}";

pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    f.render_widget(
        Block::default().style(
            Style::default()
                .bg(app.theme.background_colour)
                .fg(app.theme.text_colour),
        ),
        area,
    );

    match app.screen {
        Screen::Login => draw_login(f, area, app),
        Screen::Main => draw_main(f, area, app),
    }
}

fn draw_main(f: &mut Frame, area: Rect, app: &mut App) {
    // Outer layout: header, tabs, main, player, status
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(6),
            Constraint::Length(1),
        ])
        .split(area);

    draw_header(f, outer[0], app);
    draw_tabs(f, outer[1], app);

    let active_id = app.session.active_track().map(|t| t.video_id().clone());
    let active_id = active_id.as_ref();

    match app.main_view {
        MainView::Featured => draw_playlists(
            f,
            outer[2],
            &app.featured,
            &mut app.featured_view,
            &app.theme,
            active_id,
        ),
        MainView::MyPlaylists => draw_playlists(
            f,
            outer[2],
            app.store.playlists(),
            &mut app.playlists_view,
            &app.theme,
            active_id,
        ),
        MainView::Channel => draw_channel(f, outer[2], &mut app.channel_view, &app.theme, active_id),
        MainView::Search => draw_search(f, outer[2], &mut app.search_view, &app.theme, active_id),
    }

    draw_player(f, outer[3], app);
    draw_commander(f, outer[4], app);
}

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let user = app.auth.display_name().unwrap_or_default();

    let header = Line::from(vec![
        Span::styled(
            APP_TITLE,
            Style::default()
                .fg(theme.highlight_colour)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  {}", user), Style::default().fg(theme.muted_colour)),
    ]);

    f.render_widget(Paragraph::new(header), area);
}

fn draw_tabs(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let titles: Vec<Line> = MainView::ALL
        .iter()
        .enumerate()
        .map(|(i, view)| Line::from(format!(" {} {} ", i + 1, view.title())))
        .collect();

    let tabs = Tabs::new(titles)
        .select(app.main_view.index())
        .style(Style::default().fg(theme.muted_colour).bg(theme.panel_colour))
        .highlight_style(
            Style::default()
                .fg(theme.background_colour)
                .bg(theme.highlight_colour)
                .add_modifier(Modifier::BOLD),
        )
        .divider(Span::styled("\u{2502}", Style::default().fg(theme.accent_colour)));

    f.render_widget(tabs, area);
}
