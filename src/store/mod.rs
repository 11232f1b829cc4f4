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

//! Persistent playlist store.
//!
//! The store keeps named playlists in insertion order and writes the whole
//! collection to disk after every change. A mutation is applied to a copy of
//! the playlists, the copy is written, and only then does it replace the
//! in-memory state, so a failed write never leaves memory and disk out of
//! step.

pub mod featured;
mod snapshot;

use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::{
    error::{StoreError, ValidationError},
    model::{Playlist, Track},
};

#[derive(Debug)]
pub struct PlaylistStore {
    path: PathBuf,
    playlists: Vec<Playlist>,
}

impl PlaylistStore {
    /// Opens the store backed by the file at `path`.
    ///
    /// A file that does not exist yet opens as an empty store; it is created
    /// by the first mutation.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the file exists but cannot be read and
    /// [`StoreError::Corrupt`] if it cannot be parsed.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let playlists = snapshot::read(&path)?;

        info!(
            "Loaded {} playlists from {}",
            playlists.len(),
            path.display()
        );

        Ok(Self { path, playlists })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Playlist names with their track counts, in insertion order.
    ///
    /// The iterator is lazy and can be cloned to walk the listing again.
    pub fn list(&self) -> impl Iterator<Item = (&str, usize)> + Clone + '_ {
        self.playlists.iter().map(|p| (p.name.as_str(), p.len()))
    }

    /// Looks a playlist up by name. Names are trimmed here as they are on
    /// creation.
    pub fn get(&self, name: &str) -> Option<&Playlist> {
        let name = name.trim();
        self.playlists.iter().find(|p| p.name == name)
    }

    /// An owned copy of a playlist's tracks, suitable for starting a queue.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if there is no such playlist.
    pub fn tracks(&self, name: &str) -> Result<Vec<Track>, StoreError> {
        self.get(name)
            .map(|p| p.tracks.clone())
            .ok_or_else(|| StoreError::NotFound(name.to_string()))
    }

    pub fn playlists(&self) -> &[Playlist] {
        &self.playlists
    }

    pub fn len(&self) -> usize {
        self.playlists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }

    /// Creates a new, empty playlist at the end of the listing.
    ///
    /// # Errors
    ///
    /// Fails with [`StoreError::AlreadyExists`] if the name is taken, or
    /// [`StoreError::Io`] if the change cannot be saved.
    pub fn create(&mut self, name: &str) -> Result<(), StoreError> {
        self.create_from(name, vec![])
    }

    /// Creates a new playlist holding `tracks`.
    ///
    /// # Errors
    ///
    /// As [`create`](Self::create).
    pub fn create_from(&mut self, name: &str, tracks: Vec<Track>) -> Result<(), StoreError> {
        let name = validate_name(name)?;
        if self.get(name).is_some() {
            return Err(StoreError::AlreadyExists(name.to_string()));
        }

        let mut next = self.playlists.clone();
        next.push(Playlist::with_tracks(name, tracks));
        self.commit(next)?;

        info!("Created playlist '{}'", name);

        Ok(())
    }

    /// Deletes a playlist.
    ///
    /// # Errors
    ///
    /// Fails with [`StoreError::NotFound`] or [`StoreError::Io`].
    pub fn delete(&mut self, name: &str) -> Result<(), StoreError> {
        let index = self.index_of(name)?;

        let mut next = self.playlists.clone();
        next.remove(index);
        self.commit(next)?;

        info!("Deleted playlist '{}'", name);

        Ok(())
    }

    /// Appends a track to the end of a playlist. Duplicates are allowed.
    ///
    /// # Errors
    ///
    /// Fails with [`StoreError::NotFound`] or [`StoreError::Io`].
    pub fn append(&mut self, name: &str, track: Track) -> Result<(), StoreError> {
        let index = self.index_of(name)?;

        debug!("Appending {} to '{}'", track.video_id(), name);

        let mut next = self.playlists.clone();
        next[index].tracks.push(track);
        self.commit(next)
    }

    /// Removes and returns the track at `track_index`.
    ///
    /// # Errors
    ///
    /// Fails with [`StoreError::NotFound`], [`StoreError::InvalidIndex`] or
    /// [`StoreError::Io`].
    pub fn remove_at(&mut self, name: &str, track_index: usize) -> Result<Track, StoreError> {
        let index = self.index_of(name)?;
        check_index(&self.playlists[index], track_index)?;

        let mut next = self.playlists.clone();
        let removed = next[index].tracks.remove(track_index);
        self.commit(next)?;

        debug!("Removed {} from '{}'", removed.video_id(), name);

        Ok(removed)
    }

    /// Moves the track at `from` so that it ends up at `to`.
    ///
    /// # Errors
    ///
    /// Fails with [`StoreError::NotFound`], [`StoreError::InvalidIndex`] for
    /// either index, or [`StoreError::Io`].
    pub fn move_track(&mut self, name: &str, from: usize, to: usize) -> Result<(), StoreError> {
        let index = self.index_of(name)?;
        check_index(&self.playlists[index], from)?;
        check_index(&self.playlists[index], to)?;

        if from == to {
            return Ok(());
        }

        let mut next = self.playlists.clone();
        let track = next[index].tracks.remove(from);
        next[index].tracks.insert(to, track);
        self.commit(next)
    }

    /// Renames a playlist, keeping its place in the listing.
    ///
    /// Renaming a playlist to its current name succeeds without writing.
    ///
    /// # Errors
    ///
    /// Fails with [`StoreError::NotFound`] if `old` does not exist,
    /// [`StoreError::AlreadyExists`] if `new` does, or [`StoreError::Io`].
    pub fn rename(&mut self, old: &str, new: &str) -> Result<(), StoreError> {
        let new = validate_name(new)?;
        let old = old.trim();
        let index = self.index_of(old)?;

        if old == new {
            return Ok(());
        }
        if self.get(new).is_some() {
            return Err(StoreError::AlreadyExists(new.to_string()));
        }

        let mut next = self.playlists.clone();
        next[index].name = new.to_string();
        self.commit(next)?;

        info!("Renamed playlist '{}' to '{}'", old, new);

        Ok(())
    }

    fn commit(&mut self, next: Vec<Playlist>) -> Result<(), StoreError> {
        snapshot::write(&self.path, &next)?;
        self.playlists = next;

        Ok(())
    }

    fn index_of(&self, name: &str) -> Result<usize, StoreError> {
        let name = name.trim();
        self.playlists
            .iter()
            .position(|p| p.name == name)
            .ok_or_else(|| StoreError::NotFound(name.to_string()))
    }
}

fn validate_name(name: &str) -> Result<&str, ValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyField("Playlist name"));
    }

    Ok(name)
}

fn check_index(playlist: &Playlist, index: usize) -> Result<(), StoreError> {
    if index >= playlist.len() {
        return Err(StoreError::InvalidIndex {
            index,
            len: playlist.len(),
        });
    }

    Ok(())
}
