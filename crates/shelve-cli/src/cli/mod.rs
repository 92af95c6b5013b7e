//! CLI for the shelve library placement service.

mod commands;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use shelve_core::config::{self, ShelveConfig};
use shelve_core::library::LibraryPlacer;
use shelve_core::metadata::TrackMetadata;
use std::fs;
use std::path::{Path, PathBuf};

use commands::{run_checksum, run_finalize, run_path, run_place, run_scan};

/// Top-level CLI for shelve.
#[derive(Debug, Parser)]
#[command(name = "shelve")]
#[command(about = "Place music tracks into a library tree and trigger a media server rescan", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/shelve/config.toml.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// Track metadata given as flags or as a JSON file.
#[derive(Debug, Args)]
pub struct TrackArgs {
    /// Track title (becomes the filename).
    #[arg(long, required_unless_present = "metadata")]
    pub name: Option<String>,

    /// Artist(s); only the first of a `,`/`;` separated list is used.
    #[arg(long)]
    pub artist: Option<String>,

    /// Album title.
    #[arg(long)]
    pub album: Option<String>,

    /// JSON file with `name`, `artist`, and `album` keys.
    #[arg(long, value_name = "FILE", conflicts_with_all = ["name", "artist", "album"])]
    pub metadata: Option<PathBuf>,
}

impl TrackArgs {
    pub fn load(&self) -> Result<TrackMetadata> {
        if let Some(path) = &self.metadata {
            let data = fs::read_to_string(path)
                .with_context(|| format!("read metadata {}", path.display()))?;
            return serde_json::from_str(&data)
                .with_context(|| format!("parse metadata {}", path.display()));
        }
        let name = self.name.clone().context("--name is required")?;
        Ok(TrackMetadata {
            name,
            artist: self.artist.clone(),
            album: self.album.clone(),
        })
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the library path a track would be placed at (creates its directories).
    Path {
        #[command(flatten)]
        track: TrackArgs,

        /// File extension without the dot, e.g. `mp3`.
        #[arg(long)]
        ext: String,
    },

    /// Copy a file into the library and trigger a rescan.
    Place {
        /// Source audio file.
        file: PathBuf,

        #[command(flatten)]
        track: TrackArgs,

        /// Print the outcome as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Trigger a rescan for a file already in the library.
    Finalize {
        /// Path of the placed file.
        path: PathBuf,

        /// Print the outcome as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Trigger a library rescan on the configured server.
    Scan,

    /// Compute SHA-256 of a file.
    Checksum {
        /// Path to the file.
        path: PathBuf,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = load_config(cli.config.as_deref())?;
        tracing::debug!(
            music_root = %cfg.music_root.display(),
            scan_configured = cfg.server.credentials().is_some(),
            "loaded config"
        );
        let placer = LibraryPlacer::new(cfg);

        match cli.command {
            CliCommand::Path { track, ext } => run_path(&placer, &track.load()?, &ext)?,
            CliCommand::Place { file, track, json } => {
                run_place(&placer, &file, &track.load()?, json)?
            }
            CliCommand::Finalize { path, json } => run_finalize(&placer, &path, json)?,
            CliCommand::Scan => run_scan(&placer)?,
            CliCommand::Checksum { path } => run_checksum(&path)?,
        }

        Ok(())
    }
}

fn load_config(path: Option<&Path>) -> Result<ShelveConfig> {
    match path {
        Some(p) => Ok(config::load_from(p)?.with_env_overrides()),
        None => config::load_or_init(),
    }
}

#[cfg(test)]
mod tests;
