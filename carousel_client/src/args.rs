//! Command-line arguments for the carousel client.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::Parser;

use carousel_common::net::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use carousel_common::timer::AUTO_ADVANCE_INTERVAL;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Base URL of the quote service; quotes are read from `<base-url>/api/api/quotes`.
    #[clap(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Milliseconds between two automatic quote advances.
    #[clap(
        long,
        default_value_t = AUTO_ADVANCE_INTERVAL.as_millis() as u64,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub interval_ms: u64,

    /// Timeout in seconds for the quote request.
    #[clap(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::parse_from(["carousel_client"]);
        assert_eq!(args.base_url, DEFAULT_BASE_URL);
        assert_eq!(args.interval_ms, 5000);
        assert_eq!(args.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn overrides() {
        let args = Args::parse_from([
            "carousel_client",
            "--base-url",
            "https://quotes.example",
            "--interval-ms",
            "250",
        ]);
        assert_eq!(args.base_url, "https://quotes.example");
        assert_eq!(args.interval_ms, 250);
    }

    #[test]
    fn rejects_zero_interval() {
        let result = Args::try_parse_from(["carousel_client", "--interval-ms", "0"]);
        assert!(result.is_err());
    }
}
