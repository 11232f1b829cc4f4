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

//! # tubeplay
//!
//! Playlist and playback core for a terminal YouTube player.
//!
//! The library holds everything that does not touch the terminal or the
//! audio/video backend:
//!
//! * [`session`]: the playback session controller (current track, queue and
//!   queue position) driven by discrete [`session::SessionMessage`]s.
//! * [`store`]: the persisted playlist store plus the built-in featured
//!   playlists.
//! * [`auth`]: the local credential file, login and registration.
//! * [`catalog`]: search and channel listing against the YouTube Data API.
//! * [`config`]: the application configuration file.

pub mod auth;
pub mod catalog;
pub mod config;
pub mod error;
pub mod model;
pub mod session;
pub mod store;

pub use auth::{Authenticator, CredentialStore, LoginOutcome};
pub use error::{AuthError, CatalogError, SessionError, StoreError, ValidationError};
pub use model::{Playlist, Track, VideoId, queue::Queue};
pub use session::{PlaybackSession, SessionMessage, Transition};
pub use store::PlaylistStore;
