//!
//! Quote carousel core shared by the Talk2Trek client.
//!
//! This crate aggregates:
//! - `error` — unified error type `CarouselError` used across the workspace.
//! - `result` — handy `Result<T, CarouselError>` alias.
//! - `quote` — the `Quote` model, wire records and the fallback quotes.
//! - `state` — carousel state with wraparound navigation and pagination dots.
//! - `navigation` — navigation commands and user input parsing.
//! - `source` — quote sources (HTTP) and the fetch-or-fallback loader.
//! - `timer` — cancellable auto-advance timer.
//! - `carousel` — the controller driven by `CarouselEvent`s.
//! - `net` — endpoint constants and URL helpers.
#![warn(missing_docs)]
pub mod carousel;
pub mod error;
pub mod navigation;
pub mod net;
pub mod quote;
pub mod result;
pub mod source;
pub mod state;
pub mod timer;

pub use carousel::{Carousel, CarouselEvent, Flow};
pub use error::CarouselError;
pub use quote::Quote;
pub use result::Result;
