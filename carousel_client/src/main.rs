//! Talk2Trek carousel client: renders the landing page in the terminal and rotates
//! through motivational quotes.
//!
//! On startup the client loads quotes once from the quote service (falling back to a
//! built-in set when the service is unavailable), then advances to the next quote on a
//! fixed interval. Lines typed on stdin navigate manually.
//!
//! Usage example (CLI):
//! ```bash
//! carousel_client --base-url http://127.0.0.1:8080 --interval-ms 5000
//! ```
//!
//! Concurrency: the main thread owns the `Carousel` and is the only place its state is
//! mutated. The loader, auto-advance timer, stdin reader and Ctrl+C handler all feed a
//! single `crossbeam_channel` of `CarouselEvent`s.
#![warn(missing_docs)]
mod args;
mod view;

use crate::args::Args;
use carousel_common::carousel::spawn_loader;
use carousel_common::navigation::Input;
use carousel_common::source::HttpQuoteSource;
use carousel_common::{Carousel, CarouselError, CarouselEvent, Flow, Result};
use clap::Parser;
use crossbeam_channel::{Receiver, Sender, unbounded};
use log::{debug, info, warn};
use std::io::{self, BufRead};
use std::thread;
use std::time::Duration;

/// Reads navigation commands from stdin and forwards them as events until EOF or `quit`.
fn start_input_thread(events: Sender<CarouselEvent>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    warn!("Failed to read stdin: {}", e);
                    break;
                }
            };
            if line.trim().is_empty() {
                continue;
            }
            let event = match line.parse::<Input>() {
                Ok(Input::Navigate(nav)) => CarouselEvent::Navigate(nav),
                Ok(Input::Quit) => CarouselEvent::Shutdown,
                Err(e) => {
                    warn!("{}", e);
                    continue;
                }
            };
            let quit = matches!(event, CarouselEvent::Shutdown);
            if let Err(e) = events.send(event) {
                debug!("{}", CarouselError::from(e));
                break;
            }
            if quit {
                break;
            }
        }
        debug!("Input thread stopping...");
    });
}

/// Runs the event loop until a `Shutdown` event arrives or every sender is gone,
/// redrawing the page after each event.
fn run(mut carousel: Carousel, events: Receiver<CarouselEvent>) {
    println!("{}", view::render(carousel.state()));
    for event in events.iter() {
        let flow = carousel.handle(event);
        if flow == Flow::Exit {
            break;
        }
        println!("{}", view::render(carousel.state()));
    }
    carousel.teardown();
    info!("Carousel stopped");
}

fn main() -> Result<(), CarouselError> {
    init_logger();
    let args = Args::parse();

    let (events_tx, events_rx) = unbounded::<CarouselEvent>();
    {
        let events_tx = events_tx.clone();
        ctrlc::set_handler(move || {
            info!("Ctrl+C received. Shutting down...");
            let _ = events_tx.send(CarouselEvent::Shutdown);
        })
        .map_err(|e| CarouselError::Io(io::Error::other(e)))?;
    }

    let source = HttpQuoteSource::new(&args.base_url, Duration::from_secs(args.timeout_secs))?;
    info!("Quote source: {}", source.url());

    let carousel = Carousel::new(Duration::from_millis(args.interval_ms), events_tx.clone());
    spawn_loader(Box::new(source), events_tx.clone());
    start_input_thread(events_tx);

    run(carousel, events_rx);
    Ok(())
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
