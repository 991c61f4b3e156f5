//! Carousel state: the loaded quotes, the displayed index and the loading flag.
//!
//! Navigation is pure index arithmetic over a non-empty quote list:
//!
//! - `CarouselState::next()` — advance with wraparound to the first quote.
//! - `CarouselState::previous()` — step back with wraparound to the last quote.
//! - `CarouselState::jump_to(i)` — select a quote directly (pagination dots).
//!
//! All three are no-ops while no quotes are loaded. The index is a `usize` and is kept
//! in `[0, len)` by every operation.

use log::{debug, warn};

use crate::quote::Quote;

/// Maximum number of pagination dots shown under the quote.
pub const DOT_COUNT: usize = 5;

/// A single pagination indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dot {
    /// Quote index a click on this dot jumps to.
    pub target: usize,
    /// Whether the dot is highlighted.
    pub active: bool,
}

/// State of one carousel instance.
#[derive(Debug, Clone)]
pub struct CarouselState {
    quotes: Vec<Quote>,
    current_index: usize,
    loading: bool,
}

impl Default for CarouselState {
    fn default() -> Self {
        Self::new()
    }
}

impl CarouselState {
    /// Create an empty state waiting for its first load.
    pub fn new() -> Self {
        Self {
            quotes: Vec::new(),
            current_index: 0,
            loading: true,
        }
    }

    /// Store the loaded quotes and clear the loading flag.
    ///
    /// The current index is kept when it is still in range for the new list and reset
    /// to the first quote otherwise.
    pub fn finish_loading(&mut self, quotes: Vec<Quote>) {
        self.quotes = quotes;
        if self.current_index >= self.quotes.len() {
            self.current_index = 0;
        }
        self.loading = false;
        debug!("Carousel loaded {} quotes", self.quotes.len());
    }

    /// Advance to the next quote, wrapping to the first after the last.
    pub fn next(&mut self) {
        let len = self.quotes.len();
        if len == 0 {
            return;
        }
        self.current_index = (self.current_index + 1) % len;
    }

    /// Step back to the previous quote, wrapping to the last before the first.
    pub fn previous(&mut self) {
        let len = self.quotes.len();
        if len == 0 {
            return;
        }
        self.current_index = (self.current_index + len - 1) % len;
    }

    /// Select the quote at `index` directly.
    ///
    /// Returns `false` and leaves the state untouched when `index` is out of range.
    pub fn jump_to(&mut self, index: usize) -> bool {
        if index >= self.quotes.len() {
            warn!(
                "Ignoring jump to quote {} (only {} loaded)",
                index,
                self.quotes.len()
            );
            return false;
        }
        self.current_index = index;
        true
    }

    /// The quote currently on display, if any are loaded.
    pub fn current(&self) -> Option<&Quote> {
        self.quotes.get(self.current_index)
    }

    /// Index of the quote currently on display.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// All loaded quotes in display order.
    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    /// Number of loaded quotes.
    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    /// `true` when no quotes are loaded.
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// `true` until the first load completes.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Pagination indicators for the first `DOT_COUNT` quotes.
    ///
    /// The highlighted dot is `current_index % DOT_COUNT`, so past the fifth quote the
    /// highlight wraps around and quotes beyond the fifth have no dot of their own.
    pub fn dots(&self) -> Vec<Dot> {
        let active = self.current_index % DOT_COUNT;
        (0..self.quotes.len().min(DOT_COUNT))
            .map(|target| Dot {
                target,
                active: target == active,
            })
            .collect()
    }
}
