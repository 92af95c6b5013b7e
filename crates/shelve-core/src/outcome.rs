//! Structured result reported back to callers of the placement service.

use serde::Serialize;
use std::path::{Path, PathBuf};

/// Message attached to every successful placement.
pub const PLACED_MESSAGE: &str = "Track successfully added to Navidrome";

/// Outcome of `copy_and_finalize` / `finalize`. Serializes with absent fields omitted:
/// `{"success":true,"target_path":...,"message":...}` or `{"success":false,"error":...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Outcome {
    pub fn placed(target_path: &Path) -> Self {
        Self {
            success: true,
            target_path: Some(target_path.to_path_buf()),
            message: Some(PLACED_MESSAGE.to_string()),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            target_path: None,
            message: None,
            error: Some(error.into()),
        }
    }
}
