//! Track metadata supplied by callers and its normalized, placement-ready form.

use serde::{Deserialize, Serialize};

/// Artist directory used when the track carries no artist.
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";
/// Album directory used when the track carries no album.
pub const UNKNOWN_ALBUM: &str = "Unknown Album";

/// Metadata describing one track, as handed in by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackMetadata {
    /// Track title; becomes the filename stem.
    pub name: String,
    /// One or more artists, joined by `,` or `;`.
    #[serde(default)]
    pub artist: Option<String>,
    #[serde(default)]
    pub album: Option<String>,
}

/// Metadata with fallbacks applied and only the primary artist kept.
///
/// Values are not yet sanitized; see [`crate::sanitize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedTrack {
    pub artist: String,
    pub album: String,
    pub name: String,
}

impl TrackMetadata {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            artist: None,
            album: None,
        }
    }

    pub fn with_artist(mut self, artist: impl Into<String>) -> Self {
        self.artist = Some(artist.into());
        self
    }

    pub fn with_album(mut self, album: impl Into<String>) -> Self {
        self.album = Some(album.into());
        self
    }

    /// Returns the placement view of this track. `self` is left untouched.
    pub fn normalized(&self) -> NormalizedTrack {
        let artist = match &self.artist {
            Some(a) => primary_artist(a),
            None => UNKNOWN_ARTIST.to_string(),
        };
        let album = self
            .album
            .clone()
            .unwrap_or_else(|| UNKNOWN_ALBUM.to_string());
        NormalizedTrack {
            artist,
            album,
            name: self.name.clone(),
        }
    }
}

/// First artist of a `,`/`;` separated list, trimmed.
pub fn primary_artist(artists: &str) -> String {
    let joined = artists.replace(',', ";");
    joined.split(';').next().unwrap_or("").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comma_separated_keeps_first() {
        assert_eq!(primary_artist("A, B"), "A");
    }

    #[test]
    fn semicolon_separated_keeps_first() {
        assert_eq!(primary_artist("  Daft Punk ;Pharrell"), "Daft Punk");
    }

    #[test]
    fn mixed_separators_use_earliest() {
        assert_eq!(primary_artist("X; Y, Z"), "X");
        assert_eq!(primary_artist("X, Y; Z"), "X");
    }

    #[test]
    fn missing_fields_fall_back() {
        let n = TrackMetadata::new("Song").normalized();
        assert_eq!(n.artist, UNKNOWN_ARTIST);
        assert_eq!(n.album, UNKNOWN_ALBUM);
        assert_eq!(n.name, "Song");
    }

    #[test]
    fn normalization_does_not_mutate_input() {
        let meta = TrackMetadata::new("Song").with_artist("A, B").with_album("Album");
        let n = meta.normalized();
        assert_eq!(n.artist, "A");
        assert_eq!(meta.artist.as_deref(), Some("A, B"));
    }

    #[test]
    fn deserializes_from_json_with_optional_keys() {
        let meta: TrackMetadata = serde_json::from_str(r#"{"name": "Intro"}"#).unwrap();
        assert_eq!(meta, TrackMetadata::new("Intro"));

        let meta: TrackMetadata =
            serde_json::from_str(r#"{"name": "Song", "artist": "A;B", "album": "LP"}"#).unwrap();
        assert_eq!(meta.artist.as_deref(), Some("A;B"));
        assert_eq!(meta.album.as_deref(), Some("LP"));
    }

    #[test]
    fn name_is_required() {
        assert!(serde_json::from_str::<TrackMetadata>(r#"{"artist": "A"}"#).is_err());
    }
}
