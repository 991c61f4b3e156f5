//! Shared networking constants and helpers for reaching the quote source.

/// Path of the quotes endpoint. The doubled `api` segment is what the backend serves.
pub const QUOTES_PATH: &str = "/api/api/quotes";
/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";
/// Request timeout for the single quote fetch, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Join a base URL and the quotes path, tolerating a trailing slash on the base.
pub fn quotes_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim().trim_end_matches('/'), QUOTES_PATH)
}
