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
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{App, login::FormMode, render::playlists::pane_block};

const FORM_WIDTH: u16 = 56;

pub(super) fn draw_login(f: &mut Frame, area: Rect, app: &App) {
    let form = &app.login_form;
    let theme = &app.theme;

    let field_count = form.fields().len() as u16;
    // Title, fields, message and hints, plus the border
    let height = 2 + 2 + field_count * 3 + 2 + 2;

    let [column] = Layout::horizontal([Constraint::Length(FORM_WIDTH)])
        .flex(Flex::Center)
        .areas(area);
    let [form_area] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(column);

    let title = match form.mode() {
        FormMode::Login => " Log in ",
        FormMode::Register => " Create an account ",
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent_colour))
        .title(title)
        .title_alignment(Alignment::Center)
        .padding(Padding::horizontal(2));
    let inner = block.inner(form_area);
    f.render_widget(block, form_area);

    let mut constraints = vec![Constraint::Length(2)];
    constraints.extend((0..field_count).map(|_| Constraint::Length(3)));
    constraints.push(Constraint::Length(2));
    constraints.push(Constraint::Min(1));
    let rows = Layout::vertical(constraints).split(inner);

    let heading = Paragraph::new(super::APP_TITLE)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(theme.highlight_colour)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(heading, rows[0]);

    for (i, label) in form.labels().iter().enumerate() {
        let row = rows[i + 1];
        let value = form.value(i);
        let shown = if form.is_secret(i) {
            "\u{2022}".repeat(value.chars().count())
        } else {
            value.to_string()
        };

        let is_focused = form.focus() == i;
        let field = Paragraph::new(shown)
            .style(Style::default().fg(theme.text_colour))
            .block(pane_block(label, theme, is_focused));
        f.render_widget(field, row);

        if is_focused {
            let cursor = form.fields()[i].visual_cursor() as u16;
            f.set_cursor_position((row.x + 1 + cursor, row.y + 1));
        }
    }

    let message = match (&form.error, &form.notice) {
        (Some(error), _) => Line::from(Span::styled(
            error.as_str(),
            Style::default().fg(theme.error_colour),
        )),
        (None, Some(notice)) => Line::from(Span::styled(
            notice.as_str(),
            Style::default().fg(theme.success_colour),
        )),
        (None, None) => Line::default(),
    };
    f.render_widget(
        Paragraph::new(message).alignment(Alignment::Center),
        rows[field_count as usize + 1],
    );

    let toggle = match form.mode() {
        FormMode::Login => "F2 register",
        FormMode::Register => "F2 back to login",
    };
    let hints = Paragraph::new(format!("Tab next field  Enter submit  {}  Esc quit", toggle))
        .alignment(Alignment::Center)
        .style(Style::default().fg(theme.muted_colour));
    f.render_widget(hints, rows[field_count as usize + 2]);
}
