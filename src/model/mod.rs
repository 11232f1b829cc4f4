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

//! Domain models and core data structures.
//!
//! This module defines the central entities of the application, tracks and
//! playlists, as explicit records. Both are validated whenever they cross a
//! boundary (user input, the playlist file, catalog results) so the rest of
//! the application never sees a track without a usable video identifier.

pub mod queue;
pub mod video_id;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

pub use video_id::{VideoId, extract_id};

/// A playable reference to a YouTube video.
///
/// Immutable once created. On disk a track is just `{ "url", "title" }`; the
/// identifier is extracted again (and validated) when the record is read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TrackRecord", into = "TrackRecord")]
pub struct Track {
    url: String,
    title: String,
    video_id: VideoId,
}

impl Track {
    /// Creates a track from a user supplied URL and title.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyField`] for a blank title and
    /// [`ValidationError::MalformedUrl`] when no video identifier can be
    /// extracted from `url`.
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Result<Self, ValidationError> {
        let url = url.into().trim().to_string();
        let title = title.into().trim().to_string();

        if url.is_empty() {
            return Err(ValidationError::EmptyField("URL"));
        }
        if title.is_empty() {
            return Err(ValidationError::EmptyField("Title"));
        }

        let video_id = extract_id(&url).ok_or_else(|| ValidationError::MalformedUrl(url.clone()))?;

        Ok(Self {
            url,
            title,
            video_id,
        })
    }

    /// Creates a track for a catalog result, using the canonical watch URL.
    pub fn from_video_id(video_id: VideoId, title: impl Into<String>) -> Self {
        Self {
            url: video_id.watch_url(),
            title: title.into(),
            video_id,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn video_id(&self) -> &VideoId {
        &self.video_id
    }
}

/// The persisted shape of a [`Track`].
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TrackRecord {
    url: String,
    title: String,
}

impl TryFrom<TrackRecord> for Track {
    type Error = ValidationError;

    fn try_from(record: TrackRecord) -> Result<Self, Self::Error> {
        Track::new(record.url, record.title)
    }
}

impl From<Track> for TrackRecord {
    fn from(track: Track) -> Self {
        Self {
            url: track.url,
            title: track.title,
        }
    }
}

/// A named, ordered collection of tracks.
///
/// A track may appear more than once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    pub name: String,
    pub tracks: Vec<Track>,
}

impl Playlist {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_tracks(name, vec![])
    }

    pub fn with_tracks(name: impl Into<String>, tracks: Vec<Track>) -> Self {
        Self {
            name: name.into(),
            tracks,
        }
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_requires_url_and_title() {
        assert_eq!(
            Track::new("", "Title"),
            Err(ValidationError::EmptyField("URL"))
        );
        assert_eq!(
            Track::new("https://youtu.be/dQw4w9WgXcQ", "  "),
            Err(ValidationError::EmptyField("Title"))
        );
        assert!(matches!(
            Track::new("https://example.com/video", "Title"),
            Err(ValidationError::MalformedUrl(_))
        ));
    }

    #[test]
    fn identity_ignores_title() {
        let a = Track::new("https://www.youtube.com/watch?v=dQw4w9WgXcQ", "One").unwrap();
        let b = Track::new("https://youtu.be/dQw4w9WgXcQ", "Two").unwrap();

        assert_eq!(a.video_id(), b.video_id());
        assert_ne!(a, b);
    }

    #[test]
    fn track_serializes_as_url_and_title() {
        let track = Track::new("https://youtu.be/dQw4w9WgXcQ", "Never").unwrap();
        let json = serde_json::to_value(&track).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "url": "https://youtu.be/dQw4w9WgXcQ", "title": "Never" })
        );
    }

    #[test]
    fn deserializing_validates_the_url() {
        let bad = r#"{ "url": "https://example.com", "title": "Nope" }"#;
        assert!(serde_json::from_str::<Track>(bad).is_err());

        let good = r#"{ "url": "https://youtu.be/dQw4w9WgXcQ", "title": "Yes" }"#;
        let track: Track = serde_json::from_str(good).unwrap();
        assert_eq!(track.video_id().as_str(), "dQw4w9WgXcQ");
    }
}
