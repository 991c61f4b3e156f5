//! Quote sources and the fetch-or-fallback loader.
//!
//! `QuoteSource` is the seam between the carousel and wherever quotes come from. The
//! production implementation, `HttpQuoteSource`, performs one unauthenticated `GET` on
//! the quotes endpoint. `load_quotes` applies the loading policy: a successful fetch is
//! used as-is, any failure is logged and replaced by the built-in fallback quotes.

use std::time::Duration;

use log::{error, info};
use reqwest::blocking::Client;

use crate::error::CarouselError;
use crate::net::quotes_url;
use crate::quote::{Quote, decode_quotes, fallback_quotes};
use crate::result::Result;

/// Anything able to produce the list of quotes to display.
pub trait QuoteSource: Send {
    /// Fetch the quotes, in display order.
    fn fetch(&self) -> Result<Vec<Quote>>;
}

/// Quote source backed by the HTTP quotes endpoint.
pub struct HttpQuoteSource {
    client: Client,
    url: String,
}

impl HttpQuoteSource {
    /// Create a source for `base_url` (e.g., `http://127.0.0.1:8080`) with a request timeout.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: quotes_url(base_url),
        })
    }

    /// Full URL of the quotes endpoint.
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl QuoteSource for HttpQuoteSource {
    fn fetch(&self) -> Result<Vec<Quote>> {
        info!("Fetching quotes from {}", self.url);
        let response = self.client.get(&self.url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(CarouselError::Status(status.as_u16()));
        }
        let body = response.bytes()?;
        Ok(decode_quotes(&body)?)
    }
}

/// Fetch quotes from `source`, falling back to the built-in quotes on any failure.
///
/// Errors are logged and never returned: the carousel always gets something to show.
pub fn load_quotes(source: &dyn QuoteSource) -> Vec<Quote> {
    match source.fetch() {
        Ok(quotes) => {
            info!("Loaded {} quotes from the quote source", quotes.len());
            quotes
        }
        Err(e) => {
            error!("Error fetching quotes: {}. Using fallback quotes.", e);
            fallback_quotes()
        }
    }
}
