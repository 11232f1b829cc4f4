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
    widgets::{ListItem, ListState, Paragraph, Wrap},
};
use tubeplay::VideoId;

use crate::{
    render::{
        icons::ICON_PLAY,
        playlists::{pane_block, render_list},
    },
    theme::Theme,
    util::format::truncate,
    views::{ChannelView, SearchView},
};

const DESCRIPTION_CHARS: usize = 100;

pub(super) fn draw_channel(
    f: &mut Frame,
    area: Rect,
    view: &mut ChannelView,
    theme: &Theme,
    active_id: Option<&VideoId>,
) {
    let title = if view.next_page_token.is_some() {
        " Latest from the channel (m: more) "
    } else {
        " Latest from the channel "
    };

    let items: Vec<ListItem> = view
        .results
        .items
        .iter()
        .map(|video| {
            result_item(
                &video.title,
                &format!("Published {}", video.published_at),
                active_id == Some(&video.video_id),
                theme,
            )
        })
        .collect();

    draw_results(
        f,
        area,
        title,
        items,
        &mut view.results.state,
        view.results.loading,
        view.results.message.as_deref(),
        theme,
    );
}

pub(super) fn draw_search(
    f: &mut Frame,
    area: Rect,
    view: &mut SearchView,
    theme: &Theme,
    active_id: Option<&VideoId>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let input = Paragraph::new(view.input.value())
        .style(Style::default().fg(theme.text_colour))
        .block(pane_block(" Search the channel (/ to edit) ", theme, view.editing));
    f.render_widget(input, chunks[0]);

    if view.editing {
        let cursor_x = chunks[0].x + 1 + view.input.visual_cursor() as u16;
        f.set_cursor_position((cursor_x, chunks[0].y + 1));
    }

    let items: Vec<ListItem> = view
        .results
        .items
        .iter()
        .map(|result| {
            result_item(
                &result.title,
                &truncate(&result.description, DESCRIPTION_CHARS),
                active_id == Some(&result.video_id),
                theme,
            )
        })
        .collect();

    draw_results(
        f,
        chunks[1],
        " Search Results ",
        items,
        &mut view.results.state,
        view.results.loading,
        view.results.message.as_deref(),
        theme,
    );
}

fn result_item<'a>(title: &'a str, detail: &str, playing: bool, theme: &Theme) -> ListItem<'a> {
    let title_style = if playing {
        Style::default()
            .fg(theme.highlight_colour)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(theme.text_colour)
            .add_modifier(Modifier::BOLD)
    };
    let marker = if playing { ICON_PLAY } else { " " };

    ListItem::new(vec![
        Line::from(vec![
            Span::styled(format!("{} ", marker), title_style),
            Span::styled(title, title_style),
        ]),
        Line::from(Span::styled(
            format!("  {}", detail),
            Style::default().fg(theme.muted_colour),
        )),
    ])
}

// Takes the list state and flags separately, as `items` still borrows the
// result items.
#[allow(clippy::too_many_arguments)]
fn draw_results(
    f: &mut Frame,
    area: Rect,
    title: &str,
    items: Vec<ListItem>,
    state: &mut ListState,
    loading: bool,
    message: Option<&str>,
    theme: &Theme,
) {
    let notice = if loading && items.is_empty() {
        Some(("Loading...", theme.muted_colour))
    } else {
        message
            .filter(|_| items.is_empty())
            .map(|message| (message, theme.error_colour))
    };

    match notice {
        Some((message, colour)) => {
            let paragraph = Paragraph::new(message)
                .style(Style::default().fg(colour))
                .wrap(Wrap { trim: true })
                .block(pane_block(title, theme, true));
            f.render_widget(paragraph, area);
        }
        None => render_list(f, area, title, items, state, theme, true),
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};
    use tubeplay::catalog::{ChannelVideo, SearchResult};

    use super::*;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn channel_listing_shows_titles_and_keeps_selection() {
        let id = VideoId::parse("xf31QPpscBk").unwrap();
        let mut view = ChannelView::default();
        view.results.set_items(vec![ChannelVideo {
            video_id: id.clone(),
            title: "Mozart 14".to_string(),
            thumbnail_url: None,
            published_at: "2024-02-01".to_string(),
        }]);

        let mut terminal = Terminal::new(TestBackend::new(60, 8)).unwrap();
        terminal
            .draw(|f| draw_channel(f, f.area(), &mut view, &Theme::classical(), Some(&id)))
            .unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Mozart 14"));
        assert!(text.contains("Published 2024-02-01"));
        assert_eq!(view.results.selected_index(), Some(0));
    }

    #[test]
    fn failed_search_shows_the_message() {
        let mut view = SearchView::default();
        view.results.set_items(vec![SearchResult {
            video_id: VideoId::parse("QQe00ki35Nc").unwrap(),
            title: "Mozart 13".to_string(),
            description: String::new(),
            thumbnail_url: None,
        }]);
        view.results.fail("quotaExceeded".to_string());

        let mut terminal = Terminal::new(TestBackend::new(60, 10)).unwrap();
        terminal
            .draw(|f| draw_search(f, f.area(), &mut view, &Theme::classical(), None))
            .unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("quotaExceeded"));
        assert!(!text.contains("Mozart 13"));
    }
}
