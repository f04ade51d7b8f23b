//! Central application state.
//!
//! All mutable state lives here so that the rest of the app can be pure
//! functions over `&AppState` (rendering) or `&mut AppState` (event
//! handling).

use ratatui::layout::Rect;

use crate::config::AppConfig;
use crate::core::carousel::Carousel;
use crate::core::slides::Slide;
use crate::ui::carousel::CarouselHitZones;
use crate::ui::viewport::ViewportScroll;

/// Top-level application state.
pub struct AppState {
    /// The slide sequence — immutable for the app's lifetime.
    pub slides: Vec<Slide>,
    /// The carousel controller (index + autoplay flag).
    pub carousel: Carousel,
    /// Scroll position of the viewport along the slide strip.
    pub scroll: ViewportScroll,
    /// Whether the pointer is currently over the carousel surface.
    pub pointer_inside: bool,
    /// Clickable regions from the last render, for mouse hit-testing.
    pub hit_zones: Option<CarouselHitZones>,
    /// Viewport rect of the last render — a change means the terminal
    /// was resized and the offset must be re-derived from the index.
    pub last_viewport: Rect,
    /// Origin of an in-progress drag: (pointer column, offset then).
    pub drag_origin: Option<(u16, f64)>,
    /// Controls the main event loop.
    pub should_quit: bool,
    /// An optional status message shown in the bottom bar.
    pub status_message: Option<String>,
    /// User configuration.
    pub config: AppConfig,
}

impl AppState {
    pub fn new(slides: Vec<Slide>, carousel: Carousel, config: AppConfig) -> Self {
        Self {
            scroll: ViewportScroll::new(config.scroll_speed),
            slides,
            carousel,
            pointer_inside: false,
            hit_zones: None,
            last_viewport: Rect::default(),
            drag_origin: None,
            should_quit: false,
            status_message: None,
            config,
        }
    }

    /// Width of the rendered viewport in columns, 0.0 before the first
    /// draw.
    pub fn viewport_width(&self) -> f64 {
        self.hit_zones
            .as_ref()
            .map(|z| z.viewport.width as f64)
            .unwrap_or(0.0)
    }

    /// Rightmost valid scroll offset: the last slide flush with the
    /// viewport.
    pub fn max_scroll(&self) -> f64 {
        (self.slides.len().saturating_sub(1)) as f64 * self.viewport_width()
    }
}
