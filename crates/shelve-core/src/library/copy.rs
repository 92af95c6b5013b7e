//! Copy a track into the library keeping permissions and timestamps.

use crate::checksum;
use crate::error::PlaceError;
use std::fs::{self, File, FileTimes};
use std::path::Path;

/// Copies `source` to `target`, then restores the source's access and
/// modification times on the copy. Permissions are carried by [`fs::copy`].
///
/// A failed copy may leave a partial `target` behind; it is not removed.
pub fn copy_preserving(source: &Path, target: &Path) -> Result<u64, PlaceError> {
    let bytes = fs::copy(source, target).map_err(|e| PlaceError::Copy {
        source_path: source.to_path_buf(),
        target: target.to_path_buf(),
        source: e,
    })?;

    let meta = fs::metadata(source).map_err(PlaceError::io("stat", source))?;
    let mut times = FileTimes::new();
    if let Ok(accessed) = meta.accessed() {
        times = times.set_accessed(accessed);
    }
    if let Ok(modified) = meta.modified() {
        times = times.set_modified(modified);
    }
    let dest = File::open(target).map_err(PlaceError::io("open", target))?;
    dest.set_times(times)
        .map_err(PlaceError::io("set times on", target))?;

    Ok(bytes)
}

/// Fails with [`PlaceError::ChecksumMismatch`] when the two files differ.
pub fn verify_copy(source: &Path, target: &Path) -> Result<(), PlaceError> {
    match checksum::same_contents(source, target) {
        Ok(true) => Ok(()),
        Ok(false) => Err(PlaceError::ChecksumMismatch {
            source_path: source.to_path_buf(),
            target: target.to_path_buf(),
        }),
        Err(e) => Err(PlaceError::Checksum(e)),
    }
}
