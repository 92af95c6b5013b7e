//! `shelve path` – print where a track would be placed.

use anyhow::Result;
use shelve_core::library::LibraryPlacer;
use shelve_core::metadata::TrackMetadata;

pub fn run_path(placer: &LibraryPlacer, meta: &TrackMetadata, ext: &str) -> Result<()> {
    let target = placer.compute_target_path(meta, ext.trim_start_matches('.'))?;
    println!("{}", target.display());
    Ok(())
}
