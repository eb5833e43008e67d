//! HTTP retrieval of published spreadsheet CSV exports.
//!
//! Sheets are published as plain `GET`-able CSV with no authentication.
//! This crate only moves bytes: it knows nothing about columns or rows.
//! Retry and scheduling policy belong to the caller.

use std::time::Duration;

use campinfo_shared::{CampInfoError, FetchOptions, Result};
use reqwest::Client;
use reqwest::header::{CACHE_CONTROL, HeaderValue};
use tracing::{debug, info, instrument};
use url::Url;

/// Maximum number of redirects to follow (published sheets redirect once or twice).
const MAX_REDIRECTS: usize = 5;

/// Marker left in config templates for feeds nobody has wired up yet.
const PLACEHOLDER_MARKER: &str = "REPLACE_ME";

/// User-Agent string for sheet requests.
const USER_AGENT: &str = concat!("CampInfo/", env!("CARGO_PKG_VERSION"));

/// Whether `url` points at a real sheet.
///
/// Empty strings, template placeholders, and non-http(s) URLs are treated as
/// "feed not configured" and should be skipped rather than reported.
pub fn is_configured(url: &str) -> bool {
    let url = url.trim();
    if url.is_empty() || url.contains(PLACEHOLDER_MARKER) {
        return false;
    }
    matches!(Url::parse(url), Ok(u) if u.scheme() == "http" || u.scheme() == "https")
}

/// Build a reqwest client with appropriate settings.
pub fn build_client(opts: &FetchOptions) -> Result<Client> {
    Client::builder()
        .user_agent(USER_AGENT)
        .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
        .timeout(Duration::from_secs(opts.timeout_secs))
        .build()
        .map_err(|e| CampInfoError::Network(format!("failed to build HTTP client: {e}")))
}

/// Fetch a CSV export and return its body text.
#[instrument(skip_all, fields(url = %url))]
pub async fn fetch_csv(url: &str, opts: &FetchOptions) -> Result<String> {
    let client = build_client(opts)?;
    fetch_csv_with(&client, url, opts).await
}

/// Same as [`fetch_csv`], reusing an existing client.
pub async fn fetch_csv_with(client: &Client, url: &str, opts: &FetchOptions) -> Result<String> {
    let parsed = Url::parse(url)
        .map_err(|e| CampInfoError::validation(format!("invalid sheet URL '{url}': {e}")))?;

    debug!("requesting sheet export");

    let response = client
        .get(parsed)
        .header(CACHE_CONTROL, HeaderValue::from_static("no-store"))
        .send()
        .await
        .map_err(|e| CampInfoError::Network(format!("{url}: {e}")))?;

    let status = response.status();
    if !status.is_success() {
        return Err(CampInfoError::Http {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    if let Some(len) = response.content_length() {
        if len > opts.max_response_bytes {
            return Err(too_large(url, len, opts.max_response_bytes));
        }
    }

    let body = response
        .text()
        .await
        .map_err(|e| CampInfoError::Network(format!("{url}: failed to read body: {e}")))?;

    // Chunked responses carry no Content-Length.
    let len = body.len() as u64;
    if len > opts.max_response_bytes {
        return Err(too_large(url, len, opts.max_response_bytes));
    }

    info!(bytes = len, "sheet export fetched");
    Ok(body)
}

fn too_large(url: &str, len: u64, max: u64) -> CampInfoError {
    CampInfoError::validation(format!(
        "{url}: response too large ({len} bytes, max {max})"
    ))
}
