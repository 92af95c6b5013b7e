//! CLI command handlers, one per file.

mod checksum;
mod finalize;
mod path;
mod place;
mod scan;

pub use checksum::run_checksum;
pub use finalize::run_finalize;
pub use path::run_path;
pub use place::run_place;
pub use scan::run_scan;

use anyhow::Result;
use shelve_core::outcome::Outcome;

/// Prints an outcome; a failed one becomes an error so the process exits non-zero.
fn report(outcome: &Outcome, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(outcome)?);
    } else if let Some(path) = &outcome.target_path {
        println!("{}", path.display());
    }
    if outcome.success {
        return Ok(());
    }
    anyhow::bail!(
        "{}",
        outcome.error.as_deref().unwrap_or("placement failed")
    )
}
