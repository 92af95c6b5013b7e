//! Subsonic `startScan` endpoint URL.

use url::Url;

/// Subsonic REST API version sent as `v`.
pub const API_VERSION: &str = "1.16.1";
/// Client identifier sent as `c`.
pub const CLIENT_NAME: &str = "musicDownloader";

/// Builds `<base_url>/rest/startScan.view?u=..&p=..&v=1.16.1&c=musicDownloader&f=json`.
///
/// Trailing slashes on `base_url` are dropped so `http://host/` and `http://host`
/// produce the same endpoint. Query values are percent-encoded.
pub fn start_scan_url(base_url: &str, username: &str, password: &str) -> Result<Url, url::ParseError> {
    let endpoint = format!("{}/rest/startScan.view", base_url.trim_end_matches('/'));
    Url::parse_with_params(
        &endpoint,
        &[
            ("u", username),
            ("p", password),
            ("v", API_VERSION),
            ("c", CLIENT_NAME),
            ("f", "json"),
        ],
    )
}
