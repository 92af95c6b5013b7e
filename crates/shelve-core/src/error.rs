//! Error type for filesystem placement.

use std::io;
use std::path::PathBuf;

/// Failure while computing a target path or copying a track into the library.
#[derive(Debug, thiserror::Error)]
pub enum PlaceError {
    /// A filesystem operation failed (missing source, permission denied, disk full, ...).
    #[error("{op} {}: {source}", .path.display())]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Copying into the library failed; either side may be at fault.
    #[error("copy {} to {}: {source}", .source_path.display(), .target.display())]
    Copy {
        source_path: PathBuf,
        target: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Every suffix from ` (1)` to ` (limit)` is already taken.
    #[error("no free filename in {} after {limit} numbered attempts", .dir.display())]
    CollisionLimit { dir: PathBuf, limit: u32 },
    /// Copy finished but the target's SHA-256 differs from the source's.
    #[error("checksum mismatch after copying {} to {}", .source_path.display(), .target.display())]
    ChecksumMismatch { source_path: PathBuf, target: PathBuf },
    /// Hashing one of the files failed.
    #[error("checksum: {0:#}")]
    Checksum(anyhow::Error),
}

impl PlaceError {
    pub(crate) fn io(op: &'static str, path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> Self {
        let path = path.into();
        move |source| PlaceError::Io { op, path, source }
    }
}
