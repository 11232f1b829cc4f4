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

//! Error types.
//!
//! Every failure in the library is recoverable: the operation that failed is
//! rejected and the in-memory model keeps its last known good state, so the
//! caller only ever has to report the error and let the user retry.

use std::io;

use thiserror::Error;

/// Input that failed validation before any state was touched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid YouTube URL: {0}")]
    MalformedUrl(String),

    #[error("Invalid video identifier: {0}")]
    MalformedVideoId(String),

    #[error("{0} is required")]
    EmptyField(&'static str),

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Password must be at least {min} characters long")]
    WeakPassword { min: usize },

    #[error("Passwords do not match")]
    PasswordMismatch,
}

/// Playlist store contract violations and persistence failures.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Playlist '{0}' already exists")]
    AlreadyExists(String),

    #[error("Playlist '{0}' not found")]
    NotFound(String),

    #[error("Index {index} is out of range for a playlist of {len} tracks")]
    InvalidIndex { index: usize, len: usize },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Playlist file I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("Playlist file is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Playback controller contract violations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Cannot start queue at index {index} of {len} tracks")]
    InvalidIndex { index: usize, len: usize },
}

/// Credential provider failures.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Username '{0}' already exists")]
    UsernameTaken(String),

    #[error("Email '{0}' already exists")]
    EmailTaken(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Failed to write credentials: {0}")]
    Io(#[from] io::Error),

    #[error("Credential file is corrupt: {0}")]
    Corrupt(#[from] toml::de::Error),

    #[error("Failed to encode credentials: {0}")]
    Encode(#[from] toml::ser::Error),

    #[error("Failed to hash password: {0}")]
    Hash(#[from] bcrypt::BcryptError),
}

/// Video catalog failures (quota, network, authentication).
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("YouTube request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("YouTube API error {code}: {message}")]
    Api { code: u16, message: String },

    #[error("Unexpected YouTube response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("No YouTube API key configured, set YOUTUBE_API_KEY")]
    MissingApiKey,
}
