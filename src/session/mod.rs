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

//! Playback session controller.
//!
//! [`PlaybackSession`] is the single source of truth for "what is playing":
//! the active track, and when playing through a queue, the queue and the
//! position within it. The user interface reads it on every redraw and every
//! input, including the player's end-of-track notification, reaches it as a
//! [`SessionMessage`].
//!
//! # Re-delivery
//!
//! The same message can arrive more than once, or late. Every operation is
//! therefore safe to repeat:
//!
//! * [`advance`](PlaybackSession::advance) at the last track and
//!   [`retreat`](PlaybackSession::retreat) at the first are no-ops.
//! * [`stop`](PlaybackSession::stop) is final: nothing but an explicit play
//!   brings a stopped session back.
//! * [`on_track_ended`](PlaybackSession::on_track_ended) is ignored unless it
//!   names the active track, so an end notification for a video the user has
//!   already navigated away from does nothing.

use log::debug;

use crate::{
    error::SessionError,
    model::{Track, VideoId, queue::Queue},
};

/// Playback state. The active track of a queue is always the track at the
/// queue position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum Playback {
    #[default]
    Idle,
    Single(Track),
    Queued(Queue),
}

/// Inputs to the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionMessage {
    PlayTrack(Track),
    PlayQueueFrom(Vec<Track>, usize),
    Advance,
    Retreat,
    Stop,
    TrackEnded(VideoId),
}

/// Whether an operation changed the active track.
///
/// `Changed` tells the caller to load the new active track into the player,
/// or stop the player if the session is now idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Changed,
    Unchanged,
}

impl Transition {
    pub fn is_changed(self) -> bool {
        self == Transition::Changed
    }
}

#[derive(Debug, Default)]
pub struct PlaybackSession {
    playback: Playback,
}

impl PlaybackSession {
    /// Creates an idle session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a single message.
    ///
    /// # Errors
    ///
    /// Only [`SessionMessage::PlayQueueFrom`] can fail, see
    /// [`play_queue_from`](Self::play_queue_from).
    pub fn apply(&mut self, message: SessionMessage) -> Result<Transition, SessionError> {
        let transition = match message {
            SessionMessage::PlayTrack(track) => self.play_track(track),
            SessionMessage::PlayQueueFrom(tracks, index) => self.play_queue_from(tracks, index)?,
            SessionMessage::Advance => self.advance(),
            SessionMessage::Retreat => self.retreat(),
            SessionMessage::Stop => self.stop(),
            SessionMessage::TrackEnded(id) => self.on_track_ended(&id),
        };

        Ok(transition)
    }

    /// Plays a single track outside of any queue.
    pub fn play_track(&mut self, track: Track) -> Transition {
        debug!("Play track {} ({})", track.video_id(), track.title());
        self.playback = Playback::Single(track);

        Transition::Changed
    }

    /// Plays `tracks` as a queue, starting at `index`.
    ///
    /// The queue owns its tracks; later changes to the playlist they came
    /// from do not affect it.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::InvalidIndex`] if `tracks` is empty or `index`
    /// is out of range. The session is left untouched.
    pub fn play_queue_from(
        &mut self,
        tracks: Vec<Track>,
        index: usize,
    ) -> Result<Transition, SessionError> {
        let queue = Queue::starting_at(tracks, index)?;
        debug!(
            "Play queue of {} tracks from position {}",
            queue.len(),
            queue.position()
        );
        self.playback = Playback::Queued(queue);

        Ok(Transition::Changed)
    }

    /// Moves to the next track of the queue.
    ///
    /// A no-op without a queue or at the last track.
    pub fn advance(&mut self) -> Transition {
        match &mut self.playback {
            Playback::Queued(queue) => match queue.next() {
                Some(track) => {
                    debug!("Advanced to {} ({})", track.video_id(), track.title());
                    Transition::Changed
                }
                None => Transition::Unchanged,
            },
            _ => Transition::Unchanged,
        }
    }

    /// Moves to the previous track of the queue.
    ///
    /// A no-op without a queue or at the first track.
    pub fn retreat(&mut self) -> Transition {
        match &mut self.playback {
            Playback::Queued(queue) => match queue.previous() {
                Some(track) => {
                    debug!("Retreated to {} ({})", track.video_id(), track.title());
                    Transition::Changed
                }
                None => Transition::Unchanged,
            },
            _ => Transition::Unchanged,
        }
    }

    /// Clears the active track and queue.
    pub fn stop(&mut self) -> Transition {
        if matches!(self.playback, Playback::Idle) {
            return Transition::Unchanged;
        }

        debug!("Playback stopped");
        self.playback = Playback::Idle;

        Transition::Changed
    }

    /// Handles the player's end-of-playback notification for `id`.
    ///
    /// Advances like [`advance`](Self::advance) when `id` is the active
    /// track; any other id is stale and ignored.
    pub fn on_track_ended(&mut self, id: &VideoId) -> Transition {
        let active_id = self.active_track().map(|track| track.video_id().clone());

        match active_id {
            Some(active_id) if active_id == *id => self.advance(),
            Some(active_id) => {
                debug!("Ignoring stale end of {}, active track is {}", id, active_id);
                Transition::Unchanged
            }
            None => {
                debug!("Ignoring end of {}, nothing is playing", id);
                Transition::Unchanged
            }
        }
    }

    pub fn active_track(&self) -> Option<&Track> {
        match &self.playback {
            Playback::Idle => None,
            Playback::Single(track) => Some(track),
            Playback::Queued(queue) => Some(queue.current()),
        }
    }

    pub fn queue(&self) -> Option<&Queue> {
        match &self.playback {
            Playback::Queued(queue) => Some(queue),
            _ => None,
        }
    }

    /// Position in the active queue, `None` without a queue.
    pub fn position(&self) -> Option<usize> {
        self.queue().map(Queue::position)
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.playback, Playback::Idle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(id: &str, title: &str) -> Track {
        Track::new(format!("https://www.youtube.com/watch?v={}", id), title).unwrap()
    }

    fn three() -> Vec<Track> {
        vec![
            track("QQe00ki35Nc", "T1"),
            track("xf31QPpscBk", "T2"),
            track("ixPpNBes5Nk", "T3"),
        ]
    }

    fn active_title(session: &PlaybackSession) -> Option<&str> {
        session.active_track().map(Track::title)
    }

    #[test]
    fn starts_idle() {
        let session = PlaybackSession::new();

        assert!(session.is_idle());
        assert!(session.active_track().is_none());
        assert!(session.queue().is_none());
        assert_eq!(session.position(), None);
    }

    #[test]
    fn walks_a_queue_and_stops_at_the_boundaries() {
        let tracks = three();
        let t3 = tracks[2].video_id().clone();
        let mut session = PlaybackSession::new();

        session.play_queue_from(tracks, 0).unwrap();
        assert_eq!((active_title(&session), session.position()), (Some("T1"), Some(0)));

        assert_eq!(session.advance(), Transition::Changed);
        assert_eq!((active_title(&session), session.position()), (Some("T2"), Some(1)));

        assert_eq!(session.advance(), Transition::Changed);
        assert_eq!((active_title(&session), session.position()), (Some("T3"), Some(2)));

        assert_eq!(session.advance(), Transition::Unchanged);
        assert_eq!((active_title(&session), session.position()), (Some("T3"), Some(2)));

        assert_eq!(session.on_track_ended(&t3), Transition::Unchanged);
        assert_eq!((active_title(&session), session.position()), (Some("T3"), Some(2)));

        assert_eq!(session.retreat(), Transition::Changed);
        assert_eq!((active_title(&session), session.position()), (Some("T2"), Some(1)));
    }

    #[test]
    fn advancing_from_any_start_reaches_the_last_track() {
        for start in 0..3 {
            let mut session = PlaybackSession::new();
            session.play_queue_from(three(), start).unwrap();

            for _ in 0..(3 - 1 - start) {
                assert!(session.advance().is_changed());
            }
            assert_eq!(session.position(), Some(2));

            assert_eq!(session.advance(), Transition::Unchanged);
            assert_eq!(session.position(), Some(2));
        }
    }

    #[test]
    fn retreat_at_the_start_is_a_noop() {
        let mut session = PlaybackSession::new();
        session.play_queue_from(three(), 0).unwrap();

        assert_eq!(session.retreat(), Transition::Unchanged);
        assert_eq!(session.position(), Some(0));
        assert_eq!(active_title(&session), Some("T1"));
    }

    #[test]
    fn queue_operations_without_a_queue_do_nothing() {
        let mut session = PlaybackSession::new();
        assert_eq!(session.advance(), Transition::Unchanged);
        assert_eq!(session.retreat(), Transition::Unchanged);
        assert!(session.active_track().is_none());

        session.play_track(track("dQw4w9WgXcQ", "Single"));
        assert_eq!(session.advance(), Transition::Unchanged);
        assert_eq!(session.retreat(), Transition::Unchanged);
        assert_eq!(active_title(&session), Some("Single"));
        assert!(session.queue().is_none());
    }

    #[test]
    fn play_track_replaces_the_queue() {
        let mut session = PlaybackSession::new();
        session.play_queue_from(three(), 1).unwrap();

        session.play_track(track("dQw4w9WgXcQ", "Single"));

        assert!(session.queue().is_none());
        assert_eq!(active_title(&session), Some("Single"));
    }

    #[test]
    fn invalid_queue_start_leaves_state_alone() {
        let mut session = PlaybackSession::new();
        session.play_track(track("dQw4w9WgXcQ", "Single"));

        assert_eq!(
            session.play_queue_from(three(), 3),
            Err(SessionError::InvalidIndex { index: 3, len: 3 })
        );
        assert_eq!(
            session.play_queue_from(vec![], 0),
            Err(SessionError::InvalidIndex { index: 0, len: 0 })
        );
        assert_eq!(active_title(&session), Some("Single"));
    }

    #[test]
    fn stale_end_signals_are_ignored() {
        let tracks = three();
        let t1 = tracks[0].video_id().clone();
        let t2 = tracks[1].video_id().clone();
        let mut session = PlaybackSession::new();
        session.play_queue_from(tracks, 0).unwrap();

        // User skipped ahead before the first video's end arrived.
        session.advance();
        assert_eq!(session.on_track_ended(&t1), Transition::Unchanged);
        assert_eq!(session.position(), Some(1));

        assert_eq!(session.on_track_ended(&t2), Transition::Changed);
        assert_eq!(session.position(), Some(2));

        // Duplicate delivery of the same end signal.
        assert_eq!(session.on_track_ended(&t2), Transition::Unchanged);
        assert_eq!(session.position(), Some(2));
    }

    #[test]
    fn end_signal_for_a_single_track_keeps_it_active() {
        let single = track("dQw4w9WgXcQ", "Single");
        let id = single.video_id().clone();
        let mut session = PlaybackSession::new();
        session.play_track(single);

        assert_eq!(session.on_track_ended(&id), Transition::Unchanged);
        assert_eq!(active_title(&session), Some("Single"));
    }

    #[test]
    fn stopped_sessions_stay_stopped() {
        let tracks = three();
        let t1 = tracks[0].video_id().clone();
        let mut session = PlaybackSession::new();
        session.play_queue_from(tracks, 0).unwrap();

        assert_eq!(session.stop(), Transition::Changed);
        assert_eq!(session.stop(), Transition::Unchanged);
        assert_eq!(session.advance(), Transition::Unchanged);
        assert_eq!(session.retreat(), Transition::Unchanged);
        assert_eq!(session.on_track_ended(&t1), Transition::Unchanged);
        assert!(session.is_idle());
        assert!(session.queue().is_none());
    }

    #[test]
    fn apply_dispatches_messages() {
        let tracks = three();
        let t1 = tracks[0].video_id().clone();
        let mut session = PlaybackSession::new();

        let messages = vec![
            SessionMessage::PlayQueueFrom(tracks, 0),
            SessionMessage::TrackEnded(t1.clone()),
            SessionMessage::TrackEnded(t1),
            SessionMessage::Advance,
            SessionMessage::Retreat,
        ];
        let transitions: Vec<Transition> = messages
            .into_iter()
            .map(|m| session.apply(m).unwrap())
            .collect();

        assert_eq!(
            transitions,
            vec![
                Transition::Changed,
                Transition::Changed,
                Transition::Unchanged,
                Transition::Changed,
                Transition::Changed,
            ]
        );
        assert_eq!(session.position(), Some(1));

        assert!(session.apply(SessionMessage::PlayQueueFrom(vec![], 0)).is_err());
        assert_eq!(session.apply(SessionMessage::Stop), Ok(Transition::Changed));
    }
}
