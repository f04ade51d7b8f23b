//! Layout helpers — split the terminal area into regions.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Primary screen layout with the carousel pane and a bottom status bar.
pub struct AppLayout {
    pub carousel_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// Compute the layout from the full terminal area.
    pub fn from_area(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(4),    // carousel (takes all remaining space)
                Constraint::Length(1), // status bar
            ])
            .split(area);

        Self {
            carousel_area: chunks[0],
            status_area: chunks[1],
        }
    }
}
