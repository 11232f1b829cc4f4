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

//! Remote video catalog.
//!
//! The catalog answers two questions: "which videos in the channel match this
//! query" and "what has the channel published, newest first". Both calls
//! block, so the application runs them off the UI thread.
//!
//! Results carry validated [`VideoId`]s; items the remote side returns with
//! an unusable identifier are dropped before they reach the caller.

mod youtube;

pub use youtube::YouTubeCatalog;

use crate::{
    error::CatalogError,
    model::{Track, VideoId},
};

/// A video matching a search query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub video_id: VideoId,
    pub title: String,
    pub description: String,
    pub thumbnail_url: Option<String>,
}

impl SearchResult {
    pub fn to_track(&self) -> Track {
        Track::from_video_id(self.video_id.clone(), &self.title)
    }
}

/// A video in the channel listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelVideo {
    pub video_id: VideoId,
    pub title: String,
    pub thumbnail_url: Option<String>,
    /// Publication date, `YYYY-MM-DD`.
    pub published_at: String,
}

impl ChannelVideo {
    pub fn to_track(&self) -> Track {
        Track::from_video_id(self.video_id.clone(), &self.title)
    }
}

/// One page of the channel listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChannelPage {
    pub videos: Vec<ChannelVideo>,
    /// Token for the following page, `None` on the last page.
    pub next_page_token: Option<String>,
}

pub trait VideoCatalog {
    /// Searches the channel for videos matching `query`.
    ///
    /// # Errors
    ///
    /// A blank query is a [`CatalogError::Validation`]; remote failures are
    /// [`CatalogError::Http`] or [`CatalogError::Api`].
    fn search(&self, query: &str, max_results: u32) -> Result<Vec<SearchResult>, CatalogError>;

    /// Lists the channel's videos, newest first. Pass the previous page's
    /// `next_page_token` to continue.
    ///
    /// # Errors
    ///
    /// Remote failures are [`CatalogError::Http`] or [`CatalogError::Api`].
    fn list_channel(&self, page_token: Option<&str>) -> Result<ChannelPage, CatalogError>;
}
