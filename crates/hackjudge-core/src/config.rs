//! Event configuration for hackjudge
//!
//! Configuration lives in an optional `hackjudge.toml`. Every field has a
//! default, so an empty file (or no file) describes the stock event layout.

pub mod types;

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::bail_invalid;
use crate::error::{HackError, Result};
use crate::ranking::TrackList;
use crate::source::SourceSettings;

pub use types::{
    ColumnConfig, EventConfig, FileConfig, SourceConfig, DEFAULT_PANEL_SIZE, DEFAULT_TRACKS,
};

/// File name looked up in the root directory when `--config` is absent
pub const CONFIG_FILE_NAME: &str = "hackjudge.toml";

/// Environment variable holding the remote store API key
pub const API_KEY_ENV: &str = "HACKJUDGE_AIRTABLE_KEY";
pub const BASE_ID_ENV: &str = "HACKJUDGE_AIRTABLE_BASE";
pub const PROJECT_TABLE_ENV: &str = "HACKJUDGE_PROJECT_TABLE";
pub const JUDGING_TABLE_ENV: &str = "HACKJUDGE_JUDGING_TABLE";

impl EventConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| HackError::io_operation("read config", path.display(), e))?;
        let config: EventConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve configuration for a run: an explicit path must exist, otherwise
    /// `hackjudge.toml` under `root` is used when present.
    pub fn discover(root: &Path, explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            let path = if path.is_absolute() {
                path.to_path_buf()
            } else {
                root.join(path)
            };
            if !path.exists() {
                return Err(HackError::FileNotFound { path });
            }
            return Self::load(&path);
        }

        let candidate = root.join(CONFIG_FILE_NAME);
        if candidate.exists() {
            tracing::debug!(path = %candidate.display(), "config_found");
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.panel_size == 0 {
            bail_invalid!("panel_size", "0 (must be at least 1)");
        }

        let mut seen = HashSet::new();
        for track in &self.tracks {
            if track.trim().is_empty() {
                bail_invalid!("track name", "<empty>");
            }
            if !seen.insert(track.as_str()) {
                bail_invalid!("track list", format!("duplicate track '{}'", track));
            }
        }

        Ok(())
    }

    pub fn track_list(&self) -> TrackList {
        TrackList::new(self.tracks.clone())
    }

    pub fn data_path(&self, root: &Path, file: &str) -> PathBuf {
        root.join(&self.data_dir).join(file)
    }

    pub fn output_path(&self, root: &Path, section: &str) -> PathBuf {
        root.join(&self.output_dir).join(section)
    }
}

impl SourceConfig {
    /// Resolve remote store settings from the process environment
    pub fn credentials(&self) -> Result<SourceSettings> {
        self.credentials_from(|key| std::env::var(key).ok())
    }

    /// Resolve remote store settings using `lookup` for environment values.
    /// Environment values override the configured base and table names.
    pub fn credentials_from<F>(&self, lookup: F) -> Result<SourceSettings>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = non_empty(API_KEY_ENV).ok_or_else(|| {
            HackError::UsageError(format!(
                "remote table access requires {} to be set",
                API_KEY_ENV
            ))
        })?;

        let base_id = non_empty(BASE_ID_ENV)
            .or_else(|| self.base_id.clone())
            .ok_or_else(|| {
                HackError::UsageError(format!(
                    "no base id configured (set [source].base_id or {})",
                    BASE_ID_ENV
                ))
            })?;

        Ok(SourceSettings {
            api_url: self.api_url.trim_end_matches('/').to_string(),
            base_id,
            api_key,
            project_table: non_empty(PROJECT_TABLE_ENV)
                .unwrap_or_else(|| self.project_table.clone()),
            judging_table: non_empty(JUDGING_TABLE_ENV)
                .unwrap_or_else(|| self.judging_table.clone()),
            project_name_field: self.project_name_field.clone(),
            timeout_seconds: self.timeout_seconds.clamp(1, 300),
            max_retries: self.max_retries.min(10),
            max_pages: self.max_pages.max(1),
        })
    }
}
