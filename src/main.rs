//! An auto-playing image carousel for the terminal.
//!
//! Point the binary at a directory of images: they become slides in an
//! auto-advancing strip.  Hover pauses, arrows/dots/drag navigate.

mod app;
mod config;
mod core;
mod ui;

use std::io::{self, stdout};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    text::{Line, Span},
    widgets::Paragraph,
    Terminal,
};

use crate::app::{
    autoplay::Autoplay,
    event::{spawn_event_reader, AppEvent},
    handler,
    state::AppState,
};
use crate::core::carousel::{Carousel, CarouselEvent};
use crate::ui::{carousel::CarouselWidget, layout::AppLayout, theme::Theme};

/// Animation frame cadence (~30 fps).
const FRAME_INTERVAL: Duration = Duration::from_millis(33);

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "Terminal image carousel")]
struct Cli {
    /// Directory of images to present (defaults to `.`).
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Autoplay interval in milliseconds (overrides the config file).
    #[arg(long)]
    interval_ms: Option<u64>,

    /// Slide to show first (1-based, clamped into range).
    #[arg(long, default_value_t = 1)]
    start: usize,

    /// Start with autoplay paused.
    #[arg(long)]
    no_autoplay: bool,

    /// Recurse into subdirectories when collecting images.
    #[arg(long)]
    recursive: bool,
}

// ───────────────────────────────────────── main ─────────────

#[tokio::main]
async fn main() -> Result<()> {
    // Initialise tracing (only when RUST_LOG is set).
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr) // never pollute the terminal UI
        .init();

    let cli = Cli::parse();

    // ── load slides & build state ─────────────────────────────
    let root = cli.path.canonicalize()?;
    let slides = core::slides::load_slides(&root, cli.recursive)?;
    tracing::info!("loaded {} slides from {}", slides.len(), root.display());

    let mut config = config::AppConfig::load();
    if let Some(ms) = cli.interval_ms {
        config.autoplay_interval_ms = ms.max(1);
    }

    let mut carousel = Carousel::new(slides.len(), cli.start.saturating_sub(1))?;
    if cli.no_autoplay {
        carousel.set_autoplay_enabled(false);
    }
    let mut state = AppState::new(slides, carousel, config);

    // ── terminal setup ────────────────────────────────────────
    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;

    // ── event loop ────────────────────────────────────────────
    let mut events = spawn_event_reader(FRAME_INTERVAL);
    let mut autoplay = Autoplay::new(Duration::from_millis(state.config.autoplay_interval_ms));

    loop {
        // ── draw first ─────────────────────────────────────────
        // Rendering records the hit zones and the viewport size that
        // input handling and the scroll model depend on.
        terminal.draw(|frame| {
            let layout = AppLayout::from_area(frame.area());

            let widget = CarouselWidget {
                slides: &state.slides,
                current: state.carousel.index(),
                scroll_offset: state.scroll.offset(),
                show_dots: state.config.show_dots,
            };
            state.hit_zones = Some(widget.render_and_hit(layout.carousel_area, frame.buffer_mut()));

            let indicator = if state.carousel.autoplay_enabled() {
                Span::raw(" ▶ auto ")
            } else {
                Span::styled(" ⏸ paused ", Theme::paused_style())
            };
            let body = state
                .status_message
                .as_deref()
                .unwrap_or("←/→ navigate · 1-9 jump · space autoplay · drag/scroll · q quit");
            let status = Paragraph::new(Line::from(vec![indicator, Span::raw(format!("· {body}"))]))
                .style(Theme::status_bar_style());
            frame.render_widget(status, layout.status_area);
        })?;

        // On the first draw and after every resize the offset is
        // re-derived from the index — the offset is derived state
        // except while the user is mid-scroll.
        if let Some(viewport) = state.hit_zones.as_ref().map(|z| z.viewport) {
            if viewport != state.last_viewport {
                state.last_viewport = viewport;
                state
                    .scroll
                    .rebase(state.carousel.index(), viewport.width as f64);
            }
        }

        // Keep the timer paired with the controller: armed only while
        // autoplay is enabled, countdown restarted by navigation.
        autoplay.sync(state.carousel.autoplay_enabled(), state.carousel.index());

        tokio::select! {
            biased;

            Some(event) = events.recv() => {
                match event {
                    AppEvent::Key(k) => handler::handle_key(&mut state, k),
                    AppEvent::Mouse(m) => handler::handle_mouse(&mut state, m),
                    AppEvent::Resize(_, _) => {} // next draw rebases
                    AppEvent::Frame => handler::handle_frame(&mut state),
                }
            }

            _ = autoplay.tick() => {
                handler::dispatch(&mut state, CarouselEvent::AutoplayTick);
            }
        }

        if state.should_quit {
            break;
        }
    }

    // ── teardown ──────────────────────────────────────────────
    // Dropping the loop releases the autoplay interval with it.
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}
