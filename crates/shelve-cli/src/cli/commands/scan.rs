//! `shelve scan` – trigger a library rescan and report exactly what happened.

use anyhow::Result;
use shelve_core::library::LibraryPlacer;
use shelve_core::scan::ScanError;

pub fn run_scan(placer: &LibraryPlacer) -> Result<()> {
    match placer.scan() {
        Ok(()) => println!("Scan started."),
        Err(ScanError::NotConfigured) => println!(
            "Server not configured; set [server] in config.toml or NAVIDROME_API_URL/USERNAME/PASSWORD."
        ),
        Err(e) => return Err(anyhow::Error::new(e).context("scan trigger failed")),
    }
    Ok(())
}
