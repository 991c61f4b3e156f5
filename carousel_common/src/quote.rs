//! Quote data model and the built-in fallback dataset.
//!
//! A `Quote` is the value shown by the carousel: a text and its author. The quote
//! source sends records shaped like `{"q": "...", "a": "..."}`, decoded into
//! `QuoteRecord` and converted into `Quote` in the order they were received.

use serde::Deserialize;

/// A single quote displayed by the carousel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    /// Quote text.
    pub text: String,
    /// Person the quote is attributed to.
    pub author: String,
}

impl Quote {
    /// Create a new quote from its text and author.
    pub fn new(text: &str, author: &str) -> Self {
        Quote {
            text: String::from(text),
            author: String::from(author),
        }
    }
}

/// Quote record as sent by the quote source.
///
/// Extra fields in the payload are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct QuoteRecord {
    /// Quote text.
    pub q: String,
    /// Author.
    pub a: String,
}

impl From<QuoteRecord> for Quote {
    fn from(record: QuoteRecord) -> Self {
        Quote {
            text: record.q,
            author: record.a,
        }
    }
}

/// Decode a JSON array of `{q, a}` records into quotes, preserving payload order.
pub fn decode_quotes(body: &[u8]) -> Result<Vec<Quote>, serde_json::Error> {
    let records: Vec<QuoteRecord> = serde_json::from_slice(body)?;
    Ok(records.into_iter().map(Quote::from).collect())
}

const FALLBACK: [(&str, &str); 5] = [
    ("The journey of a thousand miles begins with one step.", "Lao Tzu"),
    (
        "It is during our darkest moments that we must focus to see the light.",
        "Aristotle",
    ),
    (
        "Success is not final, failure is not fatal: it is the courage to continue that counts.",
        "Winston Churchill",
    ),
    (
        "The only impossible journey is the one you never begin.",
        "Tony Robbins",
    ),
    ("In the middle of difficulty lies opportunity.", "Albert Einstein"),
];

/// The fixed quotes used when the quote source cannot be reached or returns unusable data.
pub fn fallback_quotes() -> Vec<Quote> {
    FALLBACK
        .iter()
        .map(|(text, author)| Quote::new(text, author))
        .collect()
}
