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

//! Whole-file playlist snapshots.
//!
//! The playlist file is a single JSON object mapping playlist names to their
//! tracks, in insertion order:
//!
//! ```json
//! {
//!   "Evening": [
//!     { "url": "https://www.youtube.com/watch?v=QQe00ki35Nc", "title": "Mozart 13" }
//!   ]
//! }
//! ```
//!
//! Every write replaces the whole file: the snapshot goes to a temporary file
//! in the same directory which is then renamed over the target, so a crash
//! mid-write leaves either the old file or the new one, never a torn one.

use std::{
    fmt,
    fs,
    io::{self, Write},
    path::Path,
};

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, MapAccess, Visitor},
};
use tempfile::NamedTempFile;

use crate::{
    error::StoreError,
    model::{Playlist, Track},
};

/// Reads a snapshot. A missing or blank file is an empty snapshot.
///
/// # Errors
///
/// Returns [`StoreError::Io`] if the file cannot be read and
/// [`StoreError::Corrupt`] if it is not a valid snapshot, including one that
/// names the same playlist twice or holds a track without a usable URL.
pub(crate) fn read(path: &Path) -> Result<Vec<Playlist>, StoreError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(vec![]),
        Err(e) => return Err(e.into()),
    };

    if contents.trim().is_empty() {
        return Ok(vec![]);
    }

    let snapshot: Snapshot = serde_json::from_str(&contents)?;

    Ok(snapshot.0)
}

/// Atomically replaces the snapshot at `path`.
///
/// # Errors
///
/// Returns [`StoreError::Io`] if the temporary file cannot be created,
/// written, flushed or renamed into place. The existing file is untouched in
/// every failure case.
pub(crate) fn write(path: &Path, playlists: &[Playlist]) -> Result<(), StoreError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir)?;
    serde_json::to_writer_pretty(&mut file, &SnapshotRef(playlists)).map_err(io::Error::from)?;
    file.flush()?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|e| e.error)?;

    Ok(())
}

struct SnapshotRef<'a>(&'a [Playlist]);

impl Serialize for SnapshotRef<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|p| (&p.name, &p.tracks)))
    }
}

struct Snapshot(Vec<Playlist>);

impl<'de> Deserialize<'de> for Snapshot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(SnapshotVisitor)
    }
}

struct SnapshotVisitor;

impl<'de> Visitor<'de> for SnapshotVisitor {
    type Value = Snapshot;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of playlist names to lists of tracks")
    }

    // Entries are visited in document order, which is the insertion order.
    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Snapshot, A::Error> {
        let mut playlists: Vec<Playlist> = Vec::with_capacity(map.size_hint().unwrap_or(0));

        while let Some((name, tracks)) = map.next_entry::<String, Vec<Track>>()? {
            if playlists.iter().any(|p| p.name == name) {
                return Err(de::Error::custom(format!("duplicate playlist '{}'", name)));
            }
            playlists.push(Playlist::with_tracks(name, tracks));
        }

        Ok(Snapshot(playlists))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(id: &str, title: &str) -> Track {
        Track::new(format!("https://www.youtube.com/watch?v={}", id), title).unwrap()
    }

    #[test]
    fn missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let playlists = read(&dir.path().join("playlists.json")).unwrap();

        assert!(playlists.is_empty());
    }

    #[test]
    fn preserves_playlist_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("playlists.json");

        let playlists = vec![
            Playlist::with_tracks("Zebra", vec![track("QQe00ki35Nc", "Z1")]),
            Playlist::new("Alpha"),
            Playlist::with_tracks("Mid", vec![track("xf31QPpscBk", "M1"), track("xf31QPpscBk", "M1")]),
        ];
        write(&path, &playlists).unwrap();

        assert_eq!(read(&path).unwrap(), playlists);
    }

    #[test]
    fn writes_the_documented_shape() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("playlists.json");
        write(&path, &[Playlist::with_tracks("A", vec![track("QQe00ki35Nc", "Mozart 13")])]).unwrap();

        let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "A": [{ "url": "https://www.youtube.com/watch?v=QQe00ki35Nc", "title": "Mozart 13" }]
            })
        );
    }

    #[test]
    fn rejects_duplicates_and_bad_tracks() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("playlists.json");

        fs::write(&path, r#"{ "A": [], "A": [] }"#).unwrap();
        assert!(matches!(read(&path), Err(StoreError::Corrupt(_))));

        fs::write(&path, r#"{ "A": [{ "url": "https://example.com", "title": "x" }] }"#).unwrap();
        assert!(matches!(read(&path), Err(StoreError::Corrupt(_))));

        fs::write(&path, r#"[1, 2, 3]"#).unwrap();
        assert!(matches!(read(&path), Err(StoreError::Corrupt(_))));
    }
}
