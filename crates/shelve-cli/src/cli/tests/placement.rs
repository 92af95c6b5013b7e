//! Tests for path and place subcommands.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use std::path::Path;

#[test]
fn cli_parse_path() {
    match parse(&[
        "shelve", "path", "--name", "Song", "--artist", "A, B", "--album", "Album", "--ext", "mp3",
    ]) {
        CliCommand::Path { track, ext } => {
            assert_eq!(ext, "mp3");
            let meta = track.load().unwrap();
            assert_eq!(meta.name, "Song");
            assert_eq!(meta.artist.as_deref(), Some("A, B"));
            assert_eq!(meta.album.as_deref(), Some("Album"));
        }
        _ => panic!("expected Path"),
    }
}

#[test]
fn cli_parse_place_flags() {
    match parse(&["shelve", "place", "/tmp/dl.flac", "--name", "Intro"]) {
        CliCommand::Place { file, track, json } => {
            assert_eq!(file, Path::new("/tmp/dl.flac"));
            assert!(!json);
            let meta = track.load().unwrap();
            assert_eq!(meta.name, "Intro");
            assert!(meta.artist.is_none());
            assert!(meta.album.is_none());
        }
        _ => panic!("expected Place"),
    }
}

#[test]
fn cli_parse_place_metadata_file() {
    let dir = tempfile::tempdir().unwrap();
    let meta_path = dir.path().join("meta.json");
    std::fs::write(&meta_path, r#"{"name": "Song", "artist": "X;Y"}"#).unwrap();
    let meta_arg = meta_path.to_str().unwrap();
    match parse(&["shelve", "place", "a.mp3", "--metadata", meta_arg, "--json"]) {
        CliCommand::Place { track, json, .. } => {
            assert!(json);
            let meta = track.load().unwrap();
            assert_eq!(meta.name, "Song");
            assert_eq!(meta.artist.as_deref(), Some("X;Y"));
        }
        _ => panic!("expected Place with --metadata"),
    }
}

#[test]
fn cli_place_requires_name_or_metadata() {
    assert!(Cli::try_parse_from(["shelve", "place", "a.mp3"]).is_err());
}

#[test]
fn cli_metadata_conflicts_with_name() {
    assert!(Cli::try_parse_from([
        "shelve", "place", "a.mp3", "--metadata", "m.json", "--name", "X"
    ])
    .is_err());
}
