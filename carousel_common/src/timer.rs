//! Auto-advance timer.
//!
//! `AutoAdvance::start` runs a background thread that pushes `CarouselEvent::Tick` into
//! the carousel's event channel at a fixed interval. The returned handle owns the
//! thread: `cancel()` stops and joins it, and dropping the handle does the same, so a
//! torn-down carousel never receives stray ticks.
//!
//! Every tick carries the generation number the timer was started with. Ticks queued
//! by a timer that has since been replaced still sit in the shared channel; the
//! carousel compares generations and drops them.
//!
//! The thread multiplexes a `crossbeam_channel::tick` ticker with a private stop
//! channel via `select!`. It also exits on its own once the event receiver is gone.

use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::{Sender, bounded, select, tick};
use log::{debug, warn};

use crate::carousel::CarouselEvent;
use crate::error::CarouselError;

/// Interval between two automatic advances.
pub const AUTO_ADVANCE_INTERVAL: Duration = Duration::from_millis(5000);
/// Shortest interval a timer runs with; shorter requests are raised to it.
pub const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Handle to a running auto-advance timer.
#[derive(Debug)]
pub struct AutoAdvance {
    stop_tx: Sender<()>,
    handle: Option<JoinHandle<()>>,
}

impl AutoAdvance {
    /// Start emitting `Tick(generation)` on `events` every `interval`.
    ///
    /// An interval below `MIN_INTERVAL` would make the ticker ready on every poll and
    /// flood the channel, so it is raised to `MIN_INTERVAL`.
    pub fn start(interval: Duration, generation: u64, events: Sender<CarouselEvent>) -> Self {
        let interval = if interval < MIN_INTERVAL {
            warn!("Auto-advance interval {:?} too short, using {:?}", interval, MIN_INTERVAL);
            MIN_INTERVAL
        } else {
            interval
        };
        let (stop_tx, stop_rx) = bounded::<()>(1);
        let ticker = tick(interval);

        let handle = thread::spawn(move || {
            debug!("Auto-advance #{} started, interval {:?}", generation, interval);
            loop {
                select! {
                    recv(stop_rx) -> _ => break,
                    recv(ticker) -> _ => {
                        if let Err(e) = events.send(CarouselEvent::Tick(generation)) {
                            let e = CarouselError::from(e);
                            debug!("Auto-advance #{} exiting: {}", generation, e);
                            break;
                        }
                    }
                }
            }
            debug!("Auto-advance #{} stopped", generation);
        });

        Self {
            stop_tx,
            handle: Some(handle),
        }
    }

    /// Stop the timer and wait for its thread to exit.
    pub fn cancel(mut self) {
        self.stop();
    }

    fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = self.stop_tx.send(());
            if handle.join().is_err() {
                warn!("Auto-advance thread panicked");
            }
        }
    }
}

impl Drop for AutoAdvance {
    fn drop(&mut self) {
        self.stop();
    }
}
