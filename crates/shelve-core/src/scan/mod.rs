//! Remote library scan trigger.
//!
//! Uses the curl crate (libcurl) to call the Subsonic `startScan` endpoint so the
//! media server notices newly placed tracks. Credentials go both in the query
//! string and in an HTTP Basic `Authorization` header; Navidrome accepts either.
//! Redirects are followed and success is judged on the final response.

mod endpoint;
mod error;

pub use endpoint::{start_scan_url, API_VERSION, CLIENT_NAME};
pub use error::ScanError;

use crate::config::ServerConfig;
use std::time::Duration;

/// Asks the server to rescan its library. Succeeds only on `200 OK`.
///
/// Returns [`ScanError::NotConfigured`] without touching the network when any
/// credential is missing. The response body is read and discarded.
/// Blocks the current thread for at most `timeout`.
pub fn trigger(server: &ServerConfig, timeout: Duration) -> Result<(), ScanError> {
    let (base_url, username, password) = server.credentials().ok_or(ScanError::NotConfigured)?;
    let url = start_scan_url(base_url, username, password)?;
    tracing::debug!(endpoint = %redacted(&url), "triggering library scan");

    let mut easy = curl::easy::Easy::new();
    easy.url(url.as_str())?;
    easy.get(true)?;
    // Reverse proxies often redirect (http -> https, path rewrites); the final status counts.
    easy.follow_location(true)?;
    // Basic auth is only sent to the original host; the query string carries it onward.
    easy.unrestricted_auth(false)?;
    easy.username(username)?;
    easy.password(password)?;
    let mut auth = curl::easy::Auth::new();
    auth.basic(true);
    easy.http_auth(&auth)?;
    easy.timeout(timeout)?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| Ok(data.len()))?;
        transfer.perform()?;
    }

    let code = easy.response_code()?;
    if code != 200 {
        return Err(ScanError::Status(code));
    }
    Ok(())
}

/// Endpoint without query string or userinfo, safe to log.
fn redacted(url: &url::Url) -> String {
    let mut u = url.clone();
    u.set_query(None);
    let _ = u.set_username("");
    let _ = u.set_password(None);
    u.to_string()
}
