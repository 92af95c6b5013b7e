//! `shelve place <file>` – copy into the library and trigger a rescan.

use anyhow::Result;
use shelve_core::library::LibraryPlacer;
use shelve_core::metadata::TrackMetadata;
use std::path::Path;

use super::report;

pub fn run_place(
    placer: &LibraryPlacer,
    file: &Path,
    meta: &TrackMetadata,
    json: bool,
) -> Result<()> {
    report(&placer.copy_and_finalize(file, meta), json)
}
