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

//! YouTube Data API v3 catalog.
//!
//! Both catalog calls go to the `search` endpoint restricted to one channel
//! and to `type=video`. The channel listing adds `order=date` and pages with
//! `pageToken`.

use std::time::Duration;

use log::{debug, warn};
use quick_xml::escape::unescape;
use reqwest::blocking::Client;
use serde::Deserialize;

use crate::{
    catalog::{ChannelPage, ChannelVideo, SearchResult, VideoCatalog},
    error::{CatalogError, ValidationError},
    model::VideoId,
};

const SEARCH_ENDPOINT: &str = "https://www.googleapis.com/youtube/v3/search";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

pub struct YouTubeCatalog {
    client: Client,
    api_key: String,
    channel_id: String,
    page_size: u32,
}

impl YouTubeCatalog {
    /// Creates a catalog for `channel_id`, listing `page_size` videos per
    /// page.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Http`] if the HTTP client cannot be built.
    pub fn new(
        api_key: impl Into<String>,
        channel_id: impl Into<String>,
        page_size: u32,
    ) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            channel_id: channel_id.into(),
            page_size,
        })
    }

    fn get(&self, params: &[(&str, &str)]) -> Result<String, CatalogError> {
        let response = self
            .client
            .get(SEARCH_ENDPOINT)
            .query(&[
                ("part", "snippet"),
                ("type", "video"),
                ("channelId", self.channel_id.as_str()),
                ("key", self.api_key.as_str()),
            ])
            .query(params)
            .send()?;

        let status = response.status();
        let body = response.text()?;

        if !status.is_success() {
            return Err(api_error(status.as_u16(), &body));
        }

        Ok(body)
    }
}

impl VideoCatalog for YouTubeCatalog {
    fn search(&self, query: &str, max_results: u32) -> Result<Vec<SearchResult>, CatalogError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(ValidationError::EmptyField("Search query").into());
        }

        debug!("Searching channel {} for '{}'", self.channel_id, query);

        let max_results = max_results.to_string();
        let body = self.get(&[("q", query), ("maxResults", max_results.as_str())])?;

        parse_search(&body)
    }

    fn list_channel(&self, page_token: Option<&str>) -> Result<ChannelPage, CatalogError> {
        debug!(
            "Listing channel {} from page {:?}",
            self.channel_id, page_token
        );

        let max_results = self.page_size.to_string();
        let mut params = vec![("order", "date"), ("maxResults", max_results.as_str())];
        if let Some(token) = page_token {
            params.push(("pageToken", token));
        }

        let body = self.get(&params)?;

        parse_channel_page(&body)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchListResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: ItemId,
    snippet: Snippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ItemId {
    video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Snippet {
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    published_at: String,
    #[serde(default)]
    thumbnails: Thumbnails,
}

#[derive(Debug, Default, Deserialize)]
struct Thumbnails {
    medium: Option<Thumbnail>,
    default: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
    url: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    code: Option<u16>,
    message: String,
}

impl SearchItem {
    // Drops items without a usable video id, channel and playlist hits
    // included.
    fn video_id(&self) -> Option<VideoId> {
        let raw = self.id.video_id.as_deref()?;
        match VideoId::parse(raw) {
            Ok(id) => Some(id),
            Err(e) => {
                warn!("Skipping catalog item: {}", e);
                None
            }
        }
    }
}

impl Thumbnails {
    fn best(self) -> Option<String> {
        self.medium.or(self.default).map(|t| t.url)
    }
}

fn parse_search(body: &str) -> Result<Vec<SearchResult>, CatalogError> {
    let response: SearchListResponse = serde_json::from_str(body)?;

    Ok(response
        .items
        .into_iter()
        .filter_map(|item| {
            let video_id = item.video_id()?;
            Some(SearchResult {
                video_id,
                title: unescape_html(&item.snippet.title),
                description: unescape_html(&item.snippet.description),
                thumbnail_url: item.snippet.thumbnails.best(),
            })
        })
        .collect())
}

fn parse_channel_page(body: &str) -> Result<ChannelPage, CatalogError> {
    let response: SearchListResponse = serde_json::from_str(body)?;

    let videos = response
        .items
        .into_iter()
        .filter_map(|item| {
            let video_id = item.video_id()?;
            let published_at = item.snippet.published_at.chars().take(10).collect();
            Some(ChannelVideo {
                video_id,
                title: unescape_html(&item.snippet.title),
                thumbnail_url: item.snippet.thumbnails.best(),
                published_at,
            })
        })
        .collect();

    Ok(ChannelPage {
        videos,
        next_page_token: response.next_page_token.filter(|t| !t.is_empty()),
    })
}

fn api_error(status: u16, body: &str) -> CatalogError {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(response) => CatalogError::Api {
            code: response.error.code.unwrap_or(status),
            message: response.error.message,
        },
        Err(_) => CatalogError::Api {
            code: status,
            message: body.chars().take(200).collect(),
        },
    }
}

// The API returns snippet text HTML-escaped. Text with an entity outside the
// XML set is kept as it came.
fn unescape_html(text: &str) -> String {
    match unescape(text) {
        Ok(unescaped) => unescaped.into_owned(),
        Err(e) => {
            debug!("Keeping escaped text: {}", e);
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEARCH_BODY: &str = r#"{
        "kind": "youtube#searchListResponse",
        "nextPageToken": "CAoQAA",
        "items": [
            {
                "id": { "kind": "youtube#video", "videoId": "QQe00ki35Nc" },
                "snippet": {
                    "publishedAt": "2024-03-01T12:00:00Z",
                    "title": "Mozart &amp; friends",
                    "description": "Piano concerto no. 13",
                    "thumbnails": {
                        "default": { "url": "https://i.ytimg.com/vi/QQe00ki35Nc/default.jpg" },
                        "medium": { "url": "https://i.ytimg.com/vi/QQe00ki35Nc/mqdefault.jpg" }
                    }
                }
            },
            {
                "id": { "kind": "youtube#channel", "channelId": "UCMCX1aTQvca5zYHGRYnmgXw" },
                "snippet": { "title": "ClassicsAI" }
            },
            {
                "id": { "kind": "youtube#video", "videoId": "bad" },
                "snippet": { "title": "Broken" }
            },
            {
                "id": { "kind": "youtube#video", "videoId": "xf31QPpscBk" },
                "snippet": {
                    "publishedAt": "2024-02-01T08:30:00Z",
                    "title": "Mozart 14",
                    "thumbnails": {
                        "default": { "url": "https://i.ytimg.com/vi/xf31QPpscBk/default.jpg" }
                    }
                }
            }
        ]
    }"#;

    #[test]
    fn search_skips_invalid_items() {
        let results = parse_search(SEARCH_BODY).unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].video_id.as_str(), "QQe00ki35Nc");
        assert_eq!(results[0].title, "Mozart & friends");
        assert_eq!(
            results[0].thumbnail_url.as_deref(),
            Some("https://i.ytimg.com/vi/QQe00ki35Nc/mqdefault.jpg")
        );
        assert_eq!(results[1].description, "");
        assert_eq!(
            results[1].thumbnail_url.as_deref(),
            Some("https://i.ytimg.com/vi/xf31QPpscBk/default.jpg")
        );
    }

    #[test]
    fn channel_page_reads_token_and_dates() {
        let page = parse_channel_page(SEARCH_BODY).unwrap();

        assert_eq!(page.next_page_token.as_deref(), Some("CAoQAA"));
        assert_eq!(page.videos.len(), 2);
        assert_eq!(page.videos[0].published_at, "2024-03-01");
        assert_eq!(page.videos[1].to_track().url(), "https://www.youtube.com/watch?v=xf31QPpscBk");
    }

    #[test]
    fn last_page_has_no_token() {
        let page = parse_channel_page(r#"{ "items": [] }"#).unwrap();

        assert!(page.videos.is_empty());
        assert_eq!(page.next_page_token, None);
    }

    #[test]
    fn api_errors_carry_the_message() {
        let body = r#"{ "error": { "code": 403, "message": "quotaExceeded" } }"#;

        match api_error(403, body) {
            CatalogError::Api { code, message } => {
                assert_eq!(code, 403);
                assert_eq!(message, "quotaExceeded");
            }
            other => panic!("unexpected error {:?}", other),
        }

        assert!(matches!(
            api_error(502, "Bad Gateway"),
            CatalogError::Api { code: 502, .. }
        ));
    }

    #[test]
    fn snippet_text_decodes_named_and_numeric_entities() {
        assert_eq!(unescape_html("Mozart &amp; friends"), "Mozart & friends");
        assert_eq!(unescape_html("Bach&#39;s &quot;Air&quot;"), "Bach's \"Air\"");
        assert_eq!(unescape_html("Chopin&#x27;s &#34;Nocturnes&#34;"), "Chopin's \"Nocturnes\"");
        assert_eq!(unescape_html("Fauré &nbsp; Requiem"), "Fauré &nbsp; Requiem");
    }

    #[test]
    fn malformed_body_is_a_decode_error() {
        assert!(matches!(parse_search("<html>"), Err(CatalogError::Decode(_))));
    }

    #[test]
    fn blank_query_is_rejected_without_a_request() {
        let catalog = YouTubeCatalog::new("key", "UCMCX1aTQvca5zYHGRYnmgXw", 10).unwrap();

        assert!(matches!(
            catalog.search("   ", 10),
            Err(CatalogError::Validation(ValidationError::EmptyField(_)))
        ));
    }
}
