use serde::Serialize;

use crate::error::{HackError, Result};

/// The event's judging tracks, in presentation order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackList(Vec<String>);

impl TrackList {
    pub fn new(tracks: Vec<String>) -> Self {
        Self(tracks)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Resolve a track selector: an exact track name, or a 0-based index
    pub fn resolve(&self, selector: &str) -> Result<&str> {
        if let Some(track) = self.0.iter().find(|t| t.as_str() == selector) {
            return Ok(track);
        }

        if let Ok(index) = selector.trim().parse::<usize>() {
            if let Some(track) = self.0.get(index) {
                return Ok(track);
            }
        }

        Err(HackError::invalid_value(
            "track",
            format!("{} (known tracks: {})", selector, self.0.join(", ")),
        ))
    }
}

/// File-name form of a track: `Main Track` becomes `main_track`
pub fn slug(track: &str) -> String {
    track.replace(' ', "_").to_lowercase()
}
