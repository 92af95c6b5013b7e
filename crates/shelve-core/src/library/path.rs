//! Target path derivation: `<root>/<artist>/<album>/<name>.<ext>` plus collision suffixes.

use crate::error::PlaceError;
use crate::metadata::TrackMetadata;
use crate::sanitize::sanitize_path_component;
use std::fs;
use std::path::{Path, PathBuf};

/// Directory a track belongs in, relative to the library root.
pub fn album_dir(root: &Path, meta: &TrackMetadata) -> PathBuf {
    let track = meta.normalized();
    root.join(sanitize_path_component(&track.artist))
        .join(sanitize_path_component(&track.album))
}

/// Sanitized `<name>.<ext>`; no dot when `extension` is empty.
pub fn track_filename(meta: &TrackMetadata, extension: &str) -> String {
    if extension.is_empty() {
        sanitize_path_component(&meta.name)
    } else {
        sanitize_path_component(&format!("{}.{}", meta.name, extension))
    }
}

/// Creates the album directory and returns the first free path for the track.
///
/// Tries `<file>`, then `<stem> (1).<ext>`, `<stem> (2).<ext>`, ... up to
/// `max_suffix`. Nothing is created at the returned path, so two callers racing
/// on the same track can receive the same answer.
pub fn compute_target_path(
    root: &Path,
    meta: &TrackMetadata,
    extension: &str,
    max_suffix: u32,
) -> Result<PathBuf, PlaceError> {
    let dir = album_dir(root, meta);
    fs::create_dir_all(&dir).map_err(PlaceError::io("create directory", &dir))?;

    let filename = track_filename(meta, extension);
    let candidate = dir.join(&filename);
    if !candidate.exists() {
        return Ok(candidate);
    }

    let stem = if extension.is_empty() {
        filename.clone()
    } else {
        Path::new(&filename)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| filename.clone())
    };
    for n in 1..=max_suffix {
        let candidate = dir.join(numbered(&stem, n, extension));
        if !candidate.exists() {
            tracing::debug!(path = %candidate.display(), "name taken, using suffix {}", n);
            return Ok(candidate);
        }
    }

    Err(PlaceError::CollisionLimit {
        dir,
        limit: max_suffix,
    })
}

fn numbered(stem: &str, n: u32, extension: &str) -> String {
    if extension.is_empty() {
        format!("{} ({})", stem, n)
    } else {
        format!("{} ({}).{}", stem, n, extension)
    }
}
