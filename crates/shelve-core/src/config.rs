use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable overriding [`ShelveConfig::music_root`].
pub const ENV_MUSIC_PATH: &str = "NAVIDROME_MUSIC_PATH";
/// Environment variable overriding [`ServerConfig::base_url`].
pub const ENV_API_URL: &str = "NAVIDROME_API_URL";
/// Environment variable overriding [`ServerConfig::username`].
pub const ENV_USERNAME: &str = "NAVIDROME_USERNAME";
/// Environment variable overriding [`ServerConfig::password`].
pub const ENV_PASSWORD: &str = "NAVIDROME_PASSWORD";

/// Media server connection (optional `[server]` section in config.toml).
///
/// Any missing or empty value disables the scan trigger.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Base URL of the Subsonic-compatible server, e.g. `http://localhost:4533`.
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

impl ServerConfig {
    /// Returns `(base_url, username, password)` when all three are set and non-empty.
    pub fn credentials(&self) -> Option<(&str, &str, &str)> {
        fn non_empty(v: &Option<String>) -> Option<&str> {
            v.as_deref().filter(|s| !s.is_empty())
        }
        Some((
            non_empty(&self.base_url)?,
            non_empty(&self.username)?,
            non_empty(&self.password)?,
        ))
    }
}

/// Global configuration loaded from `~/.config/shelve/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShelveConfig {
    /// Root of the music library tree (`<root>/<artist>/<album>/<track>`).
    pub music_root: PathBuf,
    /// Timeout for the scan-trigger request, in seconds.
    #[serde(default = "default_scan_timeout_secs")]
    pub scan_timeout_secs: u64,
    /// Highest ` (N)` suffix tried before giving up on a free filename.
    #[serde(default = "default_max_collision_suffix")]
    pub max_collision_suffix: u32,
    /// Compare SHA-256 of source and copy after placing a file.
    #[serde(default)]
    pub verify_checksum: bool,
    #[serde(default)]
    pub server: ServerConfig,
}

fn default_scan_timeout_secs() -> u64 {
    10
}

fn default_max_collision_suffix() -> u32 {
    10_000
}

impl Default for ShelveConfig {
    fn default() -> Self {
        Self {
            music_root: PathBuf::from("/music"),
            scan_timeout_secs: default_scan_timeout_secs(),
            max_collision_suffix: default_max_collision_suffix(),
            verify_checksum: false,
            server: ServerConfig::default(),
        }
    }
}

impl ShelveConfig {
    /// Config rooted at `music_root` with every other value at its default.
    pub fn with_root(music_root: impl Into<PathBuf>) -> Self {
        Self {
            music_root: music_root.into(),
            ..Self::default()
        }
    }

    pub fn scan_timeout(&self) -> Duration {
        Duration::from_secs(self.scan_timeout_secs)
    }

    /// Applies `NAVIDROME_*` overrides from the process environment.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Applies overrides from `lookup`. An empty music path is ignored; an
    /// empty server value clears the corresponding setting.
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(root) = lookup(ENV_MUSIC_PATH).filter(|s| !s.is_empty()) {
            self.music_root = PathBuf::from(root);
        }
        let server_value = |v: String| if v.is_empty() { None } else { Some(v) };
        if let Some(v) = lookup(ENV_API_URL) {
            self.server.base_url = server_value(v);
        }
        if let Some(v) = lookup(ENV_USERNAME) {
            self.server.username = server_value(v);
        }
        if let Some(v) = lookup(ENV_PASSWORD) {
            self.server.password = server_value(v);
        }
        self
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("shelve")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from `path`.
pub fn load_from(path: &Path) -> Result<ShelveConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: ShelveConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}

/// Load configuration from disk, creating a default file if none exists.
/// Environment overrides are applied on top.
pub fn load_or_init() -> Result<ShelveConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ShelveConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg.with_env_overrides());
    }

    Ok(load_from(&path)?.with_env_overrides())
}
