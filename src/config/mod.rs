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

//! Application configuration.
//!
//! This module manages the application configuration file. The YouTube API
//! key can also come from the `YOUTUBE_API_KEY` environment variable, which
//! wins over the file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

const CONFIG_NAME: &str = "tubeplay";

pub const API_KEY_ENV: &str = "YOUTUBE_API_KEY";

pub const DEFAULT_CHANNEL_ID: &str = "UCMCX1aTQvca5zYHGRYnmgXw";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub version: u32,
    pub youtube_api_key: Option<String>,
    pub channel_id: String,
    pub max_results: u32,
    pub playlists_file: String,
    pub credentials_file: String,
    pub log_file: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            youtube_api_key: None,
            channel_id: DEFAULT_CHANNEL_ID.to_string(),
            max_results: 10,
            playlists_file: "playlists.json".to_string(),
            credentials_file: "credentials.toml".to_string(),
            log_file: "tubeplay.log".to_string(),
        }
    }
}

impl AppConfig {
    /// Picks the API key, preferring `env` (the value of
    /// [`API_KEY_ENV`]) over the configuration file. Blank values count as
    /// absent.
    pub fn resolve_api_key(&self, env: Option<String>) -> Option<String> {
        env.filter(|key| !key.trim().is_empty())
            .or_else(|| {
                self.youtube_api_key
                    .clone()
                    .filter(|key| !key.trim().is_empty())
            })
            .map(|key| key.trim().to_string())
    }
}

/// Resolves a file named in the configuration. Relative names live next to
/// the configuration file, or in the working directory if that cannot be
/// located.
pub fn data_path(file: &str) -> PathBuf {
    let path = Path::new(file);
    if path.is_absolute() {
        return path.to_path_buf();
    }

    confy::get_configuration_file_path(CONFIG_NAME, None)
        .ok()
        .and_then(|config_file| config_file.parent().map(|dir| dir.join(path)))
        .unwrap_or_else(|| path.to_path_buf())
}

/// Loads the configuration, writing a default file on first run. An
/// unreadable file falls back to the defaults.
pub fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_wins_over_file() {
        let config = AppConfig {
            youtube_api_key: Some("from-file".to_string()),
            ..AppConfig::default()
        };

        assert_eq!(
            config.resolve_api_key(Some("from-env".to_string())).as_deref(),
            Some("from-env")
        );
        assert_eq!(config.resolve_api_key(None).as_deref(), Some("from-file"));
        assert_eq!(
            config.resolve_api_key(Some("  ".to_string())).as_deref(),
            Some("from-file")
        );
    }

    #[test]
    fn no_key_anywhere() {
        assert_eq!(AppConfig::default().resolve_api_key(None), None);
    }

    #[test]
    fn absolute_data_paths_are_kept() {
        let file = std::env::temp_dir().join("playlists.json");

        assert_eq!(data_path(&file.to_string_lossy()), file);
        assert!(data_path("playlists.json").ends_with("playlists.json"));
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let config: AppConfig = toml::from_str("max_results = 25\n").unwrap();

        assert_eq!(config.max_results, 25);
        assert_eq!(config.channel_id, DEFAULT_CHANNEL_ID);
        assert_eq!(config.playlists_file, "playlists.json");
    }
}
