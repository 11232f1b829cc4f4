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

//! Play queue management.
//!
//! This module provides state for the play queue, an ordered list of tracks
//! with a current position. A queue is never empty: "no queue" is modelled by
//! the absence of a [`Queue`], not by an empty one.

use crate::{error::SessionError, model::Track};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Queue {
    tracks: Vec<Track>,
    position: usize,
}

impl Queue {
    /// Creates a queue positioned at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::InvalidIndex`] if `tracks` is empty or `index`
    /// is past the end.
    pub fn starting_at(tracks: Vec<Track>, index: usize) -> Result<Self, SessionError> {
        if index >= tracks.len() {
            return Err(SessionError::InvalidIndex {
                index,
                len: tracks.len(),
            });
        }

        Ok(Self {
            tracks,
            position: index,
        })
    }

    pub fn current(&self) -> &Track {
        &self.tracks[self.position]
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn is_at_end(&self) -> bool {
        self.position + 1 == self.tracks.len()
    }

    fn is_at_start(&self) -> bool {
        self.position == 0
    }

    /// Moves to the next track, returning it, or `None` at the last track.
    pub fn next(&mut self) -> Option<&Track> {
        if self.is_at_end() {
            return None;
        }

        self.position += 1;
        Some(self.current())
    }

    /// Moves to the previous track, returning it, or `None` at the first track.
    pub fn previous(&mut self) -> Option<&Track> {
        if self.is_at_start() {
            return None;
        }

        self.position -= 1;
        Some(self.current())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracks() -> Vec<Track> {
        ["QQe00ki35Nc", "xf31QPpscBk", "ixPpNBes5Nk"]
            .iter()
            .enumerate()
            .map(|(i, id)| {
                Track::new(
                    format!("https://www.youtube.com/watch?v={}", id),
                    format!("Track {}", i + 1),
                )
                .unwrap()
            })
            .collect()
    }

    #[test]
    fn rejects_empty_and_out_of_range() {
        assert_eq!(
            Queue::starting_at(vec![], 0),
            Err(SessionError::InvalidIndex { index: 0, len: 0 })
        );
        assert_eq!(
            Queue::starting_at(tracks(), 3),
            Err(SessionError::InvalidIndex { index: 3, len: 3 })
        );
    }

    #[test]
    fn next_stops_at_the_end() {
        let mut queue = Queue::starting_at(tracks(), 1).unwrap();

        assert_eq!(queue.next().map(Track::title), Some("Track 3"));
        assert!(queue.next().is_none());
        assert!(queue.next().is_none());
        assert_eq!(queue.position(), 2);
        assert!(queue.is_at_end());
    }

    #[test]
    fn previous_stops_at_the_start() {
        let mut queue = Queue::starting_at(tracks(), 1).unwrap();

        assert_eq!(queue.previous().map(Track::title), Some("Track 1"));
        assert!(queue.previous().is_none());
        assert_eq!(queue.position(), 0);
        assert_eq!(queue.current().title(), "Track 1");
    }
}
