//! Library placement service.
//!
//! Puts a track file at `<music_root>/<artist>/<album>/<name>.<ext>` and asks the
//! media server to rescan. Everything runs on the calling thread; the only
//! timeout is the one on the scan request.

mod copy;
mod path;

pub use copy::{copy_preserving, verify_copy};
pub use path::{album_dir, compute_target_path, track_filename};

use crate::config::ShelveConfig;
use crate::error::PlaceError;
use crate::metadata::TrackMetadata;
use crate::outcome::Outcome;
use crate::scan::{self, ScanError};
use std::path::{Path, PathBuf};

/// Places tracks under a fixed music root and notifies one media server.
#[derive(Debug, Clone)]
pub struct LibraryPlacer {
    config: ShelveConfig,
}

impl LibraryPlacer {
    pub fn new(config: ShelveConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ShelveConfig {
        &self.config
    }

    /// First free path for this track under the music root. Creates the
    /// artist/album directories but not the file itself.
    pub fn compute_target_path(
        &self,
        meta: &TrackMetadata,
        extension: &str,
    ) -> Result<PathBuf, PlaceError> {
        compute_target_path(
            &self.config.music_root,
            meta,
            extension,
            self.config.max_collision_suffix,
        )
    }

    /// Copies `source` into the library and returns where it landed. Does not scan.
    pub fn place(&self, source: &Path, meta: &TrackMetadata) -> Result<PathBuf, PlaceError> {
        let extension = source
            .extension()
            .map(|e| e.to_string_lossy().into_owned())
            .unwrap_or_default();
        let target = self.compute_target_path(meta, &extension)?;
        let bytes = copy_preserving(source, &target)?;
        if self.config.verify_checksum {
            verify_copy(source, &target)?;
        }
        tracing::info!(
            source = %source.display(),
            target = %target.display(),
            bytes,
            "placed track"
        );
        Ok(target)
    }

    /// Copies `source` into the library, then [`finalize`](Self::finalize)s it.
    ///
    /// Never fails: errors are logged and returned as `Outcome { success: false, .. }`.
    /// A partially written target is left in place.
    pub fn copy_and_finalize(&self, source: &Path, meta: &TrackMetadata) -> Outcome {
        match self.place(source, meta) {
            Ok(target) => self.finalize(&target),
            Err(e) => {
                tracing::error!(source = %source.display(), "placement failed: {}", e);
                Outcome::failed(e.to_string())
            }
        }
    }

    /// Triggers a rescan and reports the track as added.
    ///
    /// The scan is best effort: a missing configuration, a network error, or a
    /// non-200 answer is logged but the outcome is still a success.
    pub fn finalize(&self, file_path: &Path) -> Outcome {
        let scanned = self.trigger_remote_scan();
        tracing::debug!(path = %file_path.display(), scanned, "finalized track");
        Outcome::placed(file_path)
    }

    /// Typed scan trigger against the configured server.
    pub fn scan(&self) -> Result<(), ScanError> {
        scan::trigger(&self.config.server, self.config.scan_timeout())
    }

    /// [`scan`](Self::scan) collapsed to a boolean: true iff the server answered 200.
    pub fn trigger_remote_scan(&self) -> bool {
        match self.scan() {
            Ok(()) => true,
            Err(ScanError::NotConfigured) => {
                tracing::info!("server credentials not configured, skipping scan trigger");
                false
            }
            Err(e) => {
                tracing::warn!("error triggering library scan: {}", e);
                false
            }
        }
    }
}
