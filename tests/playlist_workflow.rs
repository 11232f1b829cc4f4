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

//! Playlists saved to disk and played back through a session.

use tempfile::TempDir;
use tubeplay::{PlaybackSession, PlaylistStore, SessionMessage, StoreError, Track, Transition};

fn track(id: &str, title: &str) -> Track {
    Track::new(format!("https://www.youtube.com/watch?v={}", id), title).unwrap()
}

#[test]
fn saved_playlists_survive_a_restart() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("playlists.json");
    let t = track("QQe00ki35Nc", "Mozart - Piano Concerto No. 13");

    let mut store = PlaylistStore::open(&path).unwrap();
    store.create("A").unwrap();
    store.append("A", t.clone()).unwrap();

    let reopened = PlaylistStore::open(&path).unwrap();
    assert_eq!(reopened.list().collect::<Vec<_>>(), vec![("A", 1)]);
    assert_eq!(reopened.tracks("A").unwrap(), vec![t]);
}

#[test]
fn duplicate_create_changes_nothing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("playlists.json");

    let mut store = PlaylistStore::open(&path).unwrap();
    store.create("A").unwrap();
    store.append("A", track("xf31QPpscBk", "Mozart 14")).unwrap();

    assert!(matches!(store.create("A"), Err(StoreError::AlreadyExists(_))));
    assert_eq!(store.list().collect::<Vec<_>>(), vec![("A", 1)]);

    let reopened = PlaylistStore::open(&path).unwrap();
    assert_eq!(reopened.list().collect::<Vec<_>>(), vec![("A", 1)]);
}

#[test]
fn a_saved_playlist_plays_as_a_queue() {
    let dir = TempDir::new().unwrap();
    let mut store = PlaylistStore::open(dir.path().join("playlists.json")).unwrap();
    store
        .create_from(
            "Mozart",
            vec![
                track("QQe00ki35Nc", "T1"),
                track("xf31QPpscBk", "T2"),
                track("rIBpFzS31hc", "T3"),
            ],
        )
        .unwrap();

    let mut session = PlaybackSession::new();
    let queue = store.tracks("Mozart").unwrap();
    let t3 = queue[2].video_id().clone();

    session.apply(SessionMessage::PlayQueueFrom(queue, 0)).unwrap();
    assert_eq!(session.active_track().map(Track::title), Some("T1"));
    assert_eq!(session.position(), Some(0));

    assert_eq!(session.advance(), Transition::Changed);
    assert_eq!(session.position(), Some(1));
    assert_eq!(session.advance(), Transition::Changed);
    assert_eq!(session.active_track().map(Track::title), Some("T3"));

    assert_eq!(session.advance(), Transition::Unchanged);
    assert_eq!(session.on_track_ended(&t3), Transition::Unchanged);
    assert_eq!(session.position(), Some(2));

    assert_eq!(session.retreat(), Transition::Changed);
    assert_eq!(session.active_track().map(Track::title), Some("T2"));
    assert_eq!(session.position(), Some(1));

    // Editing the playlist does not touch the running queue.
    store.remove_at("Mozart", 1).unwrap();
    assert_eq!(session.queue().map(|q| q.len()), Some(3));
}
