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

//! YouTube video identifiers.
//!
//! A video identifier is the 11 character token YouTube uses to address a
//! video. Two tracks with the same identifier are the same track for playback
//! purposes, whatever their titles say.

use std::fmt;

use url::Url;

use crate::error::ValidationError;

const VIDEO_ID_LEN: usize = 11;

const WATCH_URL: &str = "https://www.youtube.com/watch?v=";

/// Path prefixes on `youtube.com` that are directly followed by the video id.
const ID_PATH_PREFIXES: [&str; 5] = ["embed", "v", "e", "shorts", "live"];

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VideoId(String);

impl VideoId {
    /// Validates a bare identifier token.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MalformedVideoId`] unless the token is
    /// exactly 11 characters from `[A-Za-z0-9_-]`.
    pub fn parse(token: &str) -> Result<Self, ValidationError> {
        if token.len() == VIDEO_ID_LEN && token.chars().all(is_id_char) {
            Ok(Self(token.to_string()))
        } else {
            Err(ValidationError::MalformedVideoId(token.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The canonical watch page for this video.
    pub fn watch_url(&self) -> String {
        format!("{}{}", WATCH_URL, self.0)
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Extracts the video identifier from a YouTube URL.
///
/// Recognises `youtube.com/watch?v=`, `youtube.com/{embed,v,e,shorts,live}/`
/// and `youtu.be/` links, with or without a scheme, `www.` or `m.` prefix.
/// On `youtube.com` an id nested deeper in the path, as in
/// `/user/<name>/<id>`, is found too. The link may be surrounded by other
/// text; the first link that yields an id wins.
///
/// Anything else yields `None`; a malformed URL is never an error here, the
/// caller decides whether a missing identifier is a validation failure.
///
/// # Examples
///
/// ```
/// use tubeplay::model::video_id::extract_id;
///
/// let id = extract_id("https://youtu.be/dQw4w9WgXcQ").unwrap();
/// assert_eq!(id.as_str(), "dQw4w9WgXcQ");
/// ```
pub fn extract_id(text: &str) -> Option<VideoId> {
    text.split_whitespace().find_map(extract_from_link)
}

fn extract_from_link(url: &str) -> Option<VideoId> {
    let parsed = if url.contains("://") {
        Url::parse(url).ok()?
    } else {
        Url::parse(&format!("https://{}", url)).ok()?
    };

    let host = parsed.host_str()?.to_ascii_lowercase();
    let host = host
        .strip_prefix("www.")
        .or_else(|| host.strip_prefix("m."))
        .or_else(|| host.strip_prefix("music."))
        .unwrap_or(&host);

    let segments: Vec<&str> = parsed.path_segments()?.filter(|s| !s.is_empty()).collect();

    match host {
        "youtu.be" => segments.first().and_then(|s| leading_token(s)),
        "youtube.com" | "youtube-nocookie.com" => {
            if let Some((_, v)) = parsed.query_pairs().find(|(key, _)| key == "v") {
                return leading_token(&v);
            }

            match segments.as_slice() {
                [prefix, id, ..] if ID_PATH_PREFIXES.contains(prefix) => leading_token(id),
                // Two or more leading segments, then the id
                [_, _, rest @ ..] => rest.iter().rev().find_map(|s| leading_token(s)),
                _ => None,
            }
        }
        _ => None,
    }
}

// Takes the first eleven characters of a path segment or query value, as
// links routinely carry trailing junk after the identifier.
fn leading_token(value: &str) -> Option<VideoId> {
    let token: String = value.chars().take(VIDEO_ID_LEN).collect();
    VideoId::parse(&token).ok()
}

fn is_id_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_from_watch_and_short_links() {
        let watch = extract_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ").unwrap();
        let short = extract_id("https://youtu.be/dQw4w9WgXcQ").unwrap();

        assert_eq!(watch.as_str(), "dQw4w9WgXcQ");
        assert_eq!(watch, short);
    }

    #[test]
    fn extracts_without_scheme_and_with_extra_params() {
        let id = extract_id("youtube.com/watch?feature=share&v=-n4TGb1HrBc&t=42").unwrap();
        assert_eq!(id.as_str(), "-n4TGb1HrBc");

        let id = extract_id("m.youtube.com/watch?v=zj_-_Oh113Q").unwrap();
        assert_eq!(id.as_str(), "zj_-_Oh113Q");
    }

    #[test]
    fn extracts_from_embed_and_shorts_paths() {
        assert_eq!(
            extract_id("https://www.youtube.com/embed/xVphVzGIcpY?enablejsapi=1")
                .unwrap()
                .as_str(),
            "xVphVzGIcpY"
        );
        assert_eq!(
            extract_id("https://youtube.com/shorts/pJTY7keAUdA").unwrap().as_str(),
            "pJTY7keAUdA"
        );
    }

    #[test]
    fn finds_links_inside_text_and_nested_paths() {
        assert_eq!(
            extract_id("Listen: https://youtu.be/dQw4w9WgXcQ").unwrap().as_str(),
            "dQw4w9WgXcQ"
        );
        assert_eq!(
            extract_id("https://www.youtube.com/user/foo/dQw4w9WgXcQ")
                .unwrap()
                .as_str(),
            "dQw4w9WgXcQ"
        );
        assert!(extract_id("https://www.youtube.com/user/foo").is_none());
    }

    #[test]
    fn rejects_urls_without_a_token() {
        assert!(extract_id("https://www.youtube.com/watch?v=short").is_none());
        assert!(extract_id("https://www.youtube.com/channel/UCMCX1aTQvca5zYHGRYnmgXw").is_none());
        assert!(extract_id("https://vimeo.com/watch?v=dQw4w9WgXcQ").is_none());
        assert!(extract_id("not a url at all").is_none());
        assert!(extract_id("").is_none());
    }

    #[test]
    fn parse_requires_exact_token() {
        assert!(VideoId::parse("dQw4w9WgXcQ").is_ok());
        assert!(VideoId::parse("dQw4w9WgXc").is_err());
        assert!(VideoId::parse("dQw4w9WgXcQQ").is_err());
        assert!(VideoId::parse("dQw4w9WgX!Q").is_err());
    }

    #[test]
    fn watch_url_round_trips() {
        let id = VideoId::parse("dQw4w9WgXcQ").unwrap();
        assert_eq!(extract_id(&id.watch_url()), Some(id));
    }
}
