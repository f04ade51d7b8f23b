//! Terminal event abstraction.
//!
//! Wraps crossterm events into a simpler enum and runs a background task
//! that forwards them over a channel so the main loop stays non-blocking.
//! A fixed-rate `Frame` event drives the scroll animation; it is emitted
//! on schedule even while input is flowing, so a drag never starves the
//! animation.

use std::time::{Duration, Instant};

use crossterm::event::{self, Event as CtEvent, KeyEvent, MouseEvent};
use tokio::sync::mpsc;

/// High-level events consumed by the application.
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    /// Animation frame tick.
    Frame,
}

/// Spawns a background task that polls the terminal for events and sends
/// them through the returned channel, interleaved with `Frame` ticks at
/// `frame_interval`.
pub fn spawn_event_reader(frame_interval: Duration) -> mpsc::UnboundedReceiver<AppEvent> {
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        let mut next_frame = Instant::now() + frame_interval;
        loop {
            // Poll only until the next frame deadline, then emit the
            // frame whether or not input arrived in between.
            let budget = next_frame.saturating_duration_since(Instant::now());
            if event::poll(budget).unwrap_or(false) {
                if let Ok(ev) = event::read() {
                    let app_event = match ev {
                        CtEvent::Key(k) => Some(AppEvent::Key(k)),
                        CtEvent::Mouse(m) => Some(AppEvent::Mouse(m)),
                        CtEvent::Resize(w, h) => Some(AppEvent::Resize(w, h)),
                        _ => None,
                    };
                    if let Some(app_event) = app_event {
                        if tx.send(app_event).is_err() {
                            break; // receiver dropped
                        }
                    }
                }
            }
            let now = Instant::now();
            if now >= next_frame {
                next_frame += frame_interval;
                if next_frame < now {
                    // Fell behind (suspended terminal) — don't burst
                    // a backlog of frames to catch up.
                    next_frame = now + frame_interval;
                }
                if tx.send(AppEvent::Frame).is_err() {
                    break;
                }
            }
        }
    });

    rx
}
