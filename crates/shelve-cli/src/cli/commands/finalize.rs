//! `shelve finalize <path>` – rescan for a file that is already in place.

use anyhow::Result;
use shelve_core::library::LibraryPlacer;
use std::path::Path;

use super::report;

pub fn run_finalize(placer: &LibraryPlacer, path: &Path, json: bool) -> Result<()> {
    report(&placer.finalize(path), json)
}
