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

use std::sync::mpsc::SendError;

use log::warn;
use tubeplay::CatalogError;

use crate::{
    events::{AppEvent, CatalogSource},
    tasks::TaskContext,
};

pub(super) fn search(
    ctx: &TaskContext,
    query: &str,
    max_results: u32,
) -> Result<(), SendError<AppEvent>> {
    let result = ctx
        .catalog
        .ok_or(CatalogError::MissingApiKey)
        .and_then(|catalog| catalog.search(query, max_results));

    let event = match result {
        Ok(results) => AppEvent::SearchResultsReady(results),
        Err(e) => failed(CatalogSource::Search, e),
    };

    ctx.event_tx.send(event)
}

pub(super) fn list_channel(
    ctx: &TaskContext,
    page_token: Option<&str>,
) -> Result<(), SendError<AppEvent>> {
    let result = ctx
        .catalog
        .ok_or(CatalogError::MissingApiKey)
        .and_then(|catalog| catalog.list_channel(page_token));

    let event = match result {
        Ok(page) => AppEvent::ChannelPageReady {
            page,
            append: page_token.is_some(),
        },
        Err(e) => failed(CatalogSource::Channel, e),
    };

    ctx.event_tx.send(event)
}

fn failed(source: CatalogSource, e: CatalogError) -> AppEvent {
    warn!("{:?} request failed: {}", source, e);
    AppEvent::CatalogFailed(source, e.to_string())
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use tubeplay::{
        VideoId,
        catalog::{ChannelPage, ChannelVideo, SearchResult, VideoCatalog},
    };

    use super::*;

    struct FakeCatalog;

    impl VideoCatalog for FakeCatalog {
        fn search(&self, query: &str, _max_results: u32) -> Result<Vec<SearchResult>, CatalogError> {
            if query == "fail" {
                return Err(CatalogError::Api {
                    code: 403,
                    message: "quotaExceeded".to_string(),
                });
            }
            Ok(vec![SearchResult {
                video_id: VideoId::parse("QQe00ki35Nc").unwrap(),
                title: format!("{} result", query),
                description: String::new(),
                thumbnail_url: None,
            }])
        }

        fn list_channel(&self, page_token: Option<&str>) -> Result<ChannelPage, CatalogError> {
            Ok(ChannelPage {
                videos: vec![ChannelVideo {
                    video_id: VideoId::parse("xf31QPpscBk").unwrap(),
                    title: "Mozart 14".to_string(),
                    thumbnail_url: None,
                    published_at: "2024-02-01".to_string(),
                }],
                next_page_token: page_token.is_none().then(|| "CAoQAA".to_string()),
            })
        }
    }

    #[test]
    fn search_results_are_sent_back() {
        let (tx, rx) = mpsc::channel();
        let ctx = TaskContext {
            catalog: Some(&FakeCatalog),
            event_tx: &tx,
        };

        search(&ctx, "mozart", 10).unwrap();

        match rx.recv().unwrap() {
            AppEvent::SearchResultsReady(results) => assert_eq!(results[0].title, "mozart result"),
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[test]
    fn catalog_errors_become_failure_events() {
        let (tx, rx) = mpsc::channel();
        let ctx = TaskContext {
            catalog: Some(&FakeCatalog),
            event_tx: &tx,
        };

        search(&ctx, "fail", 10).unwrap();

        assert!(matches!(
            rx.recv().unwrap(),
            AppEvent::CatalogFailed(CatalogSource::Search, message) if message.contains("quotaExceeded")
        ));
    }

    #[test]
    fn later_channel_pages_are_appended() {
        let (tx, rx) = mpsc::channel();
        let ctx = TaskContext {
            catalog: Some(&FakeCatalog),
            event_tx: &tx,
        };

        list_channel(&ctx, None).unwrap();
        list_channel(&ctx, Some("CAoQAA")).unwrap();

        match rx.recv().unwrap() {
            AppEvent::ChannelPageReady { page, append } => {
                assert!(!append);
                assert_eq!(page.next_page_token.as_deref(), Some("CAoQAA"));
            }
            other => panic!("unexpected event {:?}", other),
        }
        match rx.recv().unwrap() {
            AppEvent::ChannelPageReady { page, append } => {
                assert!(append);
                assert_eq!(page.next_page_token, None);
            }
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[test]
    fn missing_catalog_reports_the_api_key() {
        let (tx, rx) = mpsc::channel();
        let ctx = TaskContext {
            catalog: None,
            event_tx: &tx,
        };

        list_channel(&ctx, None).unwrap();

        assert!(matches!(
            rx.recv().unwrap(),
            AppEvent::CatalogFailed(CatalogSource::Channel, message) if message.contains("YOUTUBE_API_KEY")
        ));
    }
}
