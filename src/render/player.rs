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

//! Render the now playing panel.
//!
//! Shows the active track, its position in the queue, elapsed time and the
//! volume.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Padding, Paragraph},
};

use crate::{
    App,
    player::PlayerState,
    render::icons::{ICON_NOTE, ICON_PAUSE, ICON_PLAY, ICON_STOP},
    util::format::format_time,
};

const MAX_VOLUME: f64 = 130.0;

/// Renders the player panel including track info and gauges.
pub(crate) fn draw_player(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let block = Block::default()
        .borders(Borders::TOP | Borders::BOTTOM)
        .border_style(Style::default().fg(theme.border_colour))
        .title(format!(" {} Now Playing ", ICON_NOTE))
        .padding(Padding::horizontal(1));

    let inner_area = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner_area);

    let info_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(30)])
        .split(chunks[0]);

    let bold = Style::default().add_modifier(Modifier::BOLD);

    let Some(track) = app.session.active_track() else {
        let idle = Paragraph::new("Nothing playing. Press Enter on a track to start.")
            .style(Style::default().fg(theme.muted_colour));
        f.render_widget(idle, info_chunks[0]);
        return;
    };

    let icon = match app.player_state {
        PlayerState::Playing => ICON_PLAY,
        PlayerState::Paused => ICON_PAUSE,
        PlayerState::Stopped => ICON_STOP,
    };

    let track_line = Line::from(vec![
        Span::styled(format!("{} ", icon), bold.fg(theme.text_colour)),
        Span::styled(track.title(), bold.fg(theme.highlight_colour)),
    ]);
    f.render_widget(Paragraph::new(track_line), info_chunks[0]);

    let duration = app.player_duration.unwrap_or(0);
    let time = app.player_time.unwrap_or(0);
    let remaining = duration.saturating_sub(time);

    let time_line = Line::from(vec![
        Span::styled(format_time(time), bold.fg(theme.highlight_colour)),
        Span::styled(" / ", bold.fg(theme.text_colour)),
        Span::styled(format_time(duration), bold.fg(theme.highlight_colour)),
        Span::styled(format!(" (-{})", format_time(remaining)), Style::default().fg(theme.muted_colour)),
    ]);
    f.render_widget(Paragraph::new(time_line).alignment(Alignment::Right), info_chunks[1]);

    let detail_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(26)])
        .split(chunks[1]);

    let queue_line = match (app.session.position(), app.session.queue()) {
        (Some(position), Some(queue)) => format!("Track {} of {}", position + 1, queue.len()),
        _ => "Single video".to_string(),
    };
    f.render_widget(
        Paragraph::new(queue_line).style(Style::default().fg(theme.muted_colour)),
        detail_chunks[0],
    );

    let volume = app.volume.unwrap_or(0);
    let vol_ratio = (f64::from(volume) / MAX_VOLUME).clamp(0.0, 1.0);

    let volume_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(6)])
        .split(detail_chunks[1]);

    let volume_gauge = Gauge::default()
        .gauge_style(
            Style::default()
                .fg(theme.accent_colour)
                .bg(theme.gauge_track_colour),
        )
        .ratio(vol_ratio)
        .label("")
        .use_unicode(true);
    f.render_widget(volume_gauge, volume_layout[0]);

    let volume_label = Paragraph::new(format!(" {}%", volume))
        .alignment(Alignment::Right)
        .style(Style::default().fg(theme.text_colour));
    f.render_widget(volume_label, volume_layout[1]);

    let position = app.player_position.unwrap_or(0.0).clamp(0.0, 1.0);

    let position_gauge = Gauge::default()
        .gauge_style(
            Style::default()
                .fg(theme.accent_colour)
                .bg(theme.gauge_track_colour),
        )
        .ratio(position)
        .label("")
        .use_unicode(true);
    f.render_widget(position_gauge, chunks[3]);
}
