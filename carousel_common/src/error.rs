//! Error types shared by the carousel library and its client.
//!
//! The `CarouselError` enum unifies the failure cases of loading quotes (transport,
//! HTTP status, payload decoding) together with the I/O and channel errors of the
//! client event loop, so every component can propagate a single error type.
use std::io;

use crossbeam_channel::SendError;
use thiserror::Error;

/// Unified error type shared by the library and the client.
#[derive(Error, Debug)]
pub enum CarouselError {
    /// Transport failure while talking to the quote source (connect, timeout, TLS).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The quote source answered with a non-success HTTP status.
    #[error("Quote source returned HTTP status {0}")]
    Status(u16),

    /// The response body is not a JSON array of `{q, a}` records.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// I/O error originating from the standard library (stdin, sockets).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Channel send failed (e.g., the event loop is gone); contains a short context string.
    #[error("Channel send failed: {0}")]
    ChannelSend(String),
}

impl<T> From<SendError<T>> for CarouselError {
    fn from(err: SendError<T>) -> Self {
        CarouselError::ChannelSend(err.to_string())
    }
}
