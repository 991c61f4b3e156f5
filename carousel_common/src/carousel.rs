//! Quote carousel controller.
//!
//! `Carousel` owns the `CarouselState` and the auto-advance timer, and is driven by
//! `CarouselEvent`s coming from a single channel:
//!
//! - `CarouselEvent::Loaded` — result of the one-off quote load (remote or fallback).
//! - `CarouselEvent::Tick` — auto-advance timer firing, tagged with its generation.
//! - `CarouselEvent::Navigate` — manual navigation from the user.
//! - `CarouselEvent::Shutdown` — teardown request.
//!
//! The timer is started once quotes are available and restarted whenever the number
//! of quotes changes. Manual navigation does not touch the timer; ticks and navigation
//! both move the same index and the last one applied wins.

use std::thread;
use std::time::Duration;

use crossbeam_channel::Sender;
use log::{debug, info};

use crate::navigation::Navigation;
use crate::quote::Quote;
use crate::result::Result;
use crate::source::{QuoteSource, load_quotes};
use crate::state::CarouselState;
use crate::timer::AutoAdvance;

/// Message processed by the carousel event loop.
#[derive(Debug, Clone)]
pub enum CarouselEvent {
    /// The quote load finished with these quotes.
    Loaded(Vec<Quote>),
    /// Auto-advance timer of the given generation fired.
    Tick(u64),
    /// User navigation.
    Navigate(Navigation),
    /// Stop the carousel.
    Shutdown,
}

/// Whether the event loop should keep running after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep processing events.
    Continue,
    /// Leave the event loop.
    Exit,
}

/// Carousel controller: state plus the timer that advances it.
#[derive(Debug)]
pub struct Carousel {
    state: CarouselState,
    timer: Option<AutoAdvance>,
    interval: Duration,
    generation: u64,
    events: Sender<CarouselEvent>,
}

impl Carousel {
    /// Create a carousel whose timer ticks every `interval` into `events`.
    pub fn new(interval: Duration, events: Sender<CarouselEvent>) -> Self {
        Self {
            state: CarouselState::new(),
            timer: None,
            interval,
            generation: 0,
            events,
        }
    }

    /// Read-only view of the current state.
    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    /// `true` while an auto-advance timer is running.
    pub fn is_auto_advancing(&self) -> bool {
        self.timer.is_some()
    }

    /// Apply one event to the carousel.
    pub fn handle(&mut self, event: CarouselEvent) -> Flow {
        match event {
            CarouselEvent::Loaded(quotes) => self.on_loaded(quotes),
            CarouselEvent::Tick(generation) => self.on_tick(generation),
            CarouselEvent::Navigate(Navigation::Next) => self.state.next(),
            CarouselEvent::Navigate(Navigation::Previous) => self.state.previous(),
            CarouselEvent::Navigate(Navigation::JumpTo(index)) => {
                self.state.jump_to(index);
            }
            CarouselEvent::Shutdown => {
                self.teardown();
                return Flow::Exit;
            }
        }
        Flow::Continue
    }

    /// Stop the auto-advance timer. Safe to call more than once.
    pub fn teardown(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.cancel();
            info!("Auto-advance cancelled");
        }
    }

    fn on_tick(&mut self, generation: u64) {
        if self.timer.is_none() || generation != self.generation {
            debug!("Dropping stale tick #{} (current #{})", generation, self.generation);
            return;
        }
        self.state.next();
    }

    fn on_loaded(&mut self, quotes: Vec<Quote>) {
        let previous_len = self.state.len();
        let was_loading = self.state.is_loading();
        self.state.finish_loading(quotes);

        let len = self.state.len();
        if len == previous_len && !was_loading {
            debug!("Reload kept {} quotes, timer left running", len);
            return;
        }
        self.teardown();
        if len > 0 {
            self.generation += 1;
            self.timer = Some(AutoAdvance::start(
                self.interval,
                self.generation,
                self.events.clone(),
            ));
            info!("Auto-advance every {:?} over {} quotes", self.interval, len);
        }
    }
}

impl Drop for Carousel {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// Load quotes from `source` on a background thread and deliver them as `Loaded`.
///
/// The load runs once; failures are already replaced by the fallback quotes.
pub fn spawn_loader(
    source: Box<dyn QuoteSource>,
    events: Sender<CarouselEvent>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        if let Err(e) = deliver_quotes(source.as_ref(), &events) {
            debug!("Carousel gone before quotes were loaded: {}", e);
        }
    })
}

fn deliver_quotes(source: &dyn QuoteSource, events: &Sender<CarouselEvent>) -> Result<()> {
    events.send(CarouselEvent::Loaded(load_quotes(source)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CarouselError;
    use crossbeam_channel::{Receiver, unbounded};

    fn sample(count: usize) -> Vec<Quote> {
        (0..count)
            .map(|i| Quote::new(&format!("quote {}", i), "author"))
            .collect()
    }

    // A long interval keeps the real timer from firing during the test; ticks are fed by hand.
    fn carousel() -> (Carousel, Receiver<CarouselEvent>) {
        let (tx, rx) = unbounded();
        (Carousel::new(Duration::from_secs(3600), tx), rx)
    }

    #[test]
    fn load_success_sets_quotes_in_order() {
        let (mut carousel, _rx) = carousel();
        assert!(carousel.state().is_loading());
        carousel.handle(CarouselEvent::Loaded(sample(3)));
        let state = carousel.state();
        assert!(!state.is_loading());
        assert_eq!(state.quotes(), sample(3).as_slice());
        assert_eq!(state.current_index(), 0);
        assert!(carousel.is_auto_advancing());
    }

    #[test]
    fn ticks_advance_and_wrap() {
        let (mut carousel, _rx) = carousel();
        carousel.handle(CarouselEvent::Loaded(sample(3)));
        let generation = carousel.generation;
        carousel.handle(CarouselEvent::Tick(generation));
        assert_eq!(carousel.state().current_index(), 1);
        carousel.handle(CarouselEvent::Tick(generation));
        carousel.handle(CarouselEvent::Tick(generation));
        assert_eq!(carousel.state().current_index(), 0);
    }

    #[test]
    fn ticks_from_a_replaced_timer_are_dropped() {
        let (mut carousel, _rx) = carousel();
        carousel.handle(CarouselEvent::Loaded(sample(3)));
        let old = carousel.generation;
        carousel.handle(CarouselEvent::Loaded(sample(5)));
        assert_ne!(carousel.generation, old);

        carousel.handle(CarouselEvent::Tick(old));
        assert_eq!(carousel.state().current_index(), 0);
        carousel.handle(CarouselEvent::Tick(carousel.generation));
        assert_eq!(carousel.state().current_index(), 1);
    }

    #[test]
    fn ticks_after_shutdown_are_dropped() {
        let (mut carousel, _rx) = carousel();
        carousel.handle(CarouselEvent::Loaded(sample(3)));
        let generation = carousel.generation;
        carousel.teardown();
        carousel.handle(CarouselEvent::Tick(generation));
        assert_eq!(carousel.state().current_index(), 0);
    }

    #[test]
    fn navigation_events_move_index() {
        let (mut carousel, _rx) = carousel();
        carousel.handle(CarouselEvent::Loaded(sample(7)));
        carousel.handle(CarouselEvent::Navigate(Navigation::Previous));
        assert_eq!(carousel.state().current_index(), 6);
        carousel.handle(CarouselEvent::Navigate(Navigation::Next));
        assert_eq!(carousel.state().current_index(), 0);
        carousel.handle(CarouselEvent::Navigate(Navigation::JumpTo(2)));
        assert_eq!(carousel.state().current_index(), 2);
    }

    #[test]
    fn empty_load_does_not_start_timer() {
        let (mut carousel, _rx) = carousel();
        carousel.handle(CarouselEvent::Loaded(Vec::new()));
        assert!(!carousel.state().is_loading());
        assert!(!carousel.is_auto_advancing());
        assert_eq!(carousel.handle(CarouselEvent::Tick(0)), Flow::Continue);
        assert_eq!(carousel.state().current(), None);
    }

    #[test]
    fn reload_with_new_count_restarts_timer_and_empty_reload_stops_it() {
        let (mut carousel, _rx) = carousel();
        carousel.handle(CarouselEvent::Loaded(sample(3)));
        carousel.handle(CarouselEvent::Loaded(sample(3)));
        assert!(carousel.is_auto_advancing());
        carousel.handle(CarouselEvent::Loaded(sample(5)));
        assert!(carousel.is_auto_advancing());
        carousel.handle(CarouselEvent::Loaded(Vec::new()));
        assert!(!carousel.is_auto_advancing());
    }

    #[test]
    fn shutdown_cancels_timer() {
        let (mut carousel, _rx) = carousel();
        carousel.handle(CarouselEvent::Loaded(sample(2)));
        assert_eq!(carousel.handle(CarouselEvent::Shutdown), Flow::Exit);
        assert!(!carousel.is_auto_advancing());
        carousel.teardown();
    }

    #[test]
    fn real_timer_delivers_ticks() {
        let (tx, rx) = unbounded();
        let mut carousel = Carousel::new(Duration::from_millis(10), tx);
        carousel.handle(CarouselEvent::Loaded(sample(3)));
        let event = rx.recv_timeout(Duration::from_secs(2)).unwrap();
        carousel.handle(event);
        assert_eq!(carousel.state().current_index(), 1);
    }

    struct Unreachable;

    impl QuoteSource for Unreachable {
        fn fetch(&self) -> Result<Vec<Quote>> {
            Err(CarouselError::Io(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "connection refused",
            )))
        }
    }

    #[test]
    fn loader_failure_delivers_fallback() {
        let (tx, rx) = unbounded();
        spawn_loader(Box::new(Unreachable), tx).join().unwrap();
        let (mut carousel, _timer_rx) = carousel();
        match rx.recv().unwrap() {
            CarouselEvent::Loaded(quotes) => {
                carousel.handle(CarouselEvent::Loaded(quotes));
            }
            other => panic!("unexpected event {:?}", other),
        }
        let state = carousel.state();
        assert!(!state.is_loading());
        assert_eq!(state.len(), 5);
        assert_eq!(
            state.quotes()[2],
            Quote::new(
                "Success is not final, failure is not fatal: it is the courage to continue that counts.",
                "Winston Churchill"
            )
        );
        assert_eq!(state.quotes()[4].author, "Albert Einstein");
    }

    #[test]
    fn delivering_to_a_closed_carousel_reports_channel_send() {
        let (tx, rx) = unbounded();
        drop(rx);
        let err = deliver_quotes(&Unreachable, &tx).unwrap_err();
        assert!(matches!(err, CarouselError::ChannelSend(_)), "got {:?}", err);
    }
}
