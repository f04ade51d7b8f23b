//! Input handling — maps key/mouse events to carousel events.
//!
//! Every input source (keys, arrow/dot clicks, wheel, drag, hover, the
//! autoplay timer, animation frames) funnels into [`dispatch`], which
//! applies the controller's transition function and executes the scroll
//! request it returns.

use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use crate::core::carousel::{CarouselEvent, Direction};

use super::state::AppState;

/// Apply one carousel event and execute the resulting scroll request.
pub fn dispatch(state: &mut AppState, event: CarouselEvent) {
    if let Some(effect) = state.carousel.apply(event) {
        let width = state.viewport_width();
        if width > 0.0 {
            state
                .scroll
                .scroll_to(effect.scroll_to_slide as f64 * width);
        }
    }
}

/// Advance the scroll animation one frame.  A moved offset is a scroll
/// notification: it feeds back into the controller so the index tracks
/// the viewport, exactly as for manual scrolling.
pub fn handle_frame(state: &mut AppState) {
    if state.scroll.tick() {
        let width = state.viewport_width();
        dispatch(
            state,
            CarouselEvent::ViewportScrolled {
                offset: state.scroll.offset(),
                viewport_width: width,
            },
        );
    }
}

/// Process a key event.
pub fn handle_key(state: &mut AppState, key: KeyEvent) {
    // Ctrl+c always quits.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            state.should_quit = true;
        }
        KeyCode::Left | KeyCode::Char('h') => {
            dispatch(state, CarouselEvent::Step(Direction::Previous));
        }
        KeyCode::Right | KeyCode::Char('l') => {
            dispatch(state, CarouselEvent::Step(Direction::Next));
        }
        KeyCode::Home => {
            dispatch(state, CarouselEvent::GoTo(0));
        }
        KeyCode::End => {
            dispatch(state, CarouselEvent::GoTo(state.slides.len() - 1));
        }
        KeyCode::Char(c @ '1'..='9') => {
            // Digit keys mirror the dot controls (1-based).
            let target = c as usize - '1' as usize;
            dispatch(state, CarouselEvent::GoTo(target));
        }
        KeyCode::Char(' ') => {
            let enabled = !state.carousel.autoplay_enabled();
            state.carousel.set_autoplay_enabled(enabled);
            state.status_message =
                Some(if enabled { "autoplay on" } else { "autoplay off" }.to_string());
        }
        _ => {}
    }
}

/// Process a mouse event against the zones of the last render.
pub fn handle_mouse(state: &mut AppState, mouse: MouseEvent) {
    let Some(zones) = state.hit_zones.clone() else {
        return;
    };

    // Hover tracking: any event carries a position, so enter/leave
    // transitions are derived from every kind, not just `Moved`.
    let inside = point_in_rect(zones.viewport, mouse.column, mouse.row);
    if inside != state.pointer_inside {
        state.pointer_inside = inside;
        tracing::debug!("pointer {}", if inside { "enter" } else { "leave" });
        dispatch(
            state,
            if inside {
                CarouselEvent::PointerEnter
            } else {
                CarouselEvent::PointerLeave
            },
        );
    }

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if point_in_rect(zones.prev, mouse.column, mouse.row) {
                dispatch(state, CarouselEvent::Step(Direction::Previous));
                return;
            }
            if point_in_rect(zones.next, mouse.column, mouse.row) {
                dispatch(state, CarouselEvent::Step(Direction::Next));
                return;
            }
            for (i, dot) in zones.dots.iter().enumerate() {
                if point_in_rect(*dot, mouse.column, mouse.row) {
                    dispatch(state, CarouselEvent::GoTo(i));
                    return;
                }
            }
            if inside {
                state.drag_origin = Some((mouse.column, state.scroll.offset()));
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            // Dragging moves the strip with the pointer: the viewport
            // leads, the index follows via reconciliation.
            if let Some((origin_col, origin_offset)) = state.drag_origin {
                let delta = origin_col as f64 - mouse.column as f64;
                let desired = origin_offset + delta;
                let current = state.scroll.offset();
                state.scroll.scroll_by(desired - current, state.max_scroll());
                notify_scrolled(state);
            }
        }
        MouseEventKind::Up(MouseButton::Left) => {
            if state.drag_origin.take().is_some() {
                snap_to_nearest(state);
            }
        }
        MouseEventKind::ScrollUp | MouseEventKind::ScrollLeft => {
            if inside {
                wheel_scroll(state, -1.0);
            }
        }
        MouseEventKind::ScrollDown | MouseEventKind::ScrollRight => {
            if inside {
                wheel_scroll(state, 1.0);
            }
        }
        _ => {}
    }
}

/// Wheel input: a manual free scroll of a third of the viewport, then a
/// snap to whatever slide the offset now rounds to.
fn wheel_scroll(state: &mut AppState, sign: f64) {
    let width = state.viewport_width();
    if width <= 0.0 {
        return;
    }
    state.scroll.scroll_by(sign * width / 3.0, state.max_scroll());
    notify_scrolled(state);
    snap_to_nearest(state);
}

/// Emit the scroll-position notification for the current offset.
fn notify_scrolled(state: &mut AppState) {
    let width = state.viewport_width();
    dispatch(
        state,
        CarouselEvent::ViewportScrolled {
            offset: state.scroll.offset(),
            viewport_width: width,
        },
    );
}

/// After a manual scroll ends, glide to the slide the index reconciled
/// to (the terminal analogue of CSS mandatory scroll snapping).
fn snap_to_nearest(state: &mut AppState) {
    dispatch(state, CarouselEvent::GoTo(state.carousel.index()));
}

fn point_in_rect(area: Rect, col: u16, row: u16) -> bool {
    col >= area.x
        && col < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::core::carousel::Carousel;
    use crate::core::slides::Slide;
    use crate::ui::carousel::CarouselHitZones;
    use crossterm::event::KeyEventState;
    use std::sync::Arc;

    fn test_state(len: usize) -> AppState {
        let slides = (0..len)
            .map(|i| Slide {
                path: format!("{i}.png").into(),
                name: format!("{i}.png"),
                image: Arc::new(image::RgbaImage::from_pixel(
                    4,
                    4,
                    image::Rgba([0, 0, 0, 255]),
                )),
            })
            .collect();
        let carousel = Carousel::new(len, 0).unwrap();
        let mut state = AppState::new(slides, carousel, AppConfig::default());
        // Pretend a frame was rendered: 40-column viewport at origin.
        state.hit_zones = Some(CarouselHitZones {
            viewport: Rect::new(1, 1, 40, 10),
            prev: Rect::new(1, 5, 2, 1),
            next: Rect::new(39, 5, 2, 1),
            dots: vec![
                Rect::new(18, 10, 1, 1),
                Rect::new(20, 10, 1, 1),
                Rect::new(22, 10, 1, 1),
                Rect::new(24, 10, 1, 1),
            ],
        });
        state
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: crossterm::event::KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn moved(col: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Moved,
            column: col,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn arrow_keys_step_and_start_the_scroll_animation() {
        let mut state = test_state(4);
        handle_key(&mut state, key(KeyCode::Right));
        assert_eq!(state.carousel.index(), 1);
        assert!(state.scroll.is_animating());
    }

    #[test]
    fn digit_keys_jump_like_dot_clicks() {
        let mut state = test_state(4);
        handle_key(&mut state, key(KeyCode::Char('3')));
        assert_eq!(state.carousel.index(), 2);
        // Out-of-range digits clamp rather than error.
        handle_key(&mut state, key(KeyCode::Char('9')));
        assert_eq!(state.carousel.index(), 3);
    }

    #[test]
    fn hover_transitions_pause_and_resume_autoplay() {
        let mut state = test_state(4);
        assert!(state.carousel.autoplay_enabled());

        handle_mouse(&mut state, moved(10, 5)); // inside the viewport
        assert!(!state.carousel.autoplay_enabled());

        // Moving within the surface is not a re-entry.
        handle_mouse(&mut state, moved(12, 6));
        assert!(!state.carousel.autoplay_enabled());

        handle_mouse(&mut state, moved(60, 20)); // outside
        assert!(state.carousel.autoplay_enabled());
    }

    #[test]
    fn dot_click_navigates_to_that_slide() {
        let mut state = test_state(4);
        let dot = state.hit_zones.as_ref().unwrap().dots[2];
        handle_mouse(
            &mut state,
            MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column: dot.x,
                row: dot.y,
                modifiers: KeyModifiers::NONE,
            },
        );
        assert_eq!(state.carousel.index(), 2);
    }

    #[test]
    fn drag_moves_the_offset_and_reconciles_the_index() {
        let mut state = test_state(4);
        let events = [
            MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column: 30,
                row: 5,
                modifiers: KeyModifiers::NONE,
            },
            // Drag 25 columns left — more than half the 40-column
            // viewport, so the nearest slide becomes #1.
            MouseEvent {
                kind: MouseEventKind::Drag(MouseButton::Left),
                column: 5,
                row: 5,
                modifiers: KeyModifiers::NONE,
            },
            MouseEvent {
                kind: MouseEventKind::Up(MouseButton::Left),
                column: 5,
                row: 5,
                modifiers: KeyModifiers::NONE,
            },
        ];
        for ev in events {
            handle_mouse(&mut state, ev);
        }
        assert_eq!(state.carousel.index(), 1);
        // Release snaps: the scroll target is the slide boundary.
        assert!(state.scroll.is_animating() || state.scroll.offset() == 40.0);
    }

    #[test]
    fn animation_frames_feed_reconciliation() {
        let mut state = test_state(4);
        handle_key(&mut state, key(KeyCode::Right));
        let mut frames = 0;
        while state.scroll.is_animating() {
            handle_frame(&mut state);
            frames += 1;
            assert!(frames < 300, "scroll never settled");
        }
        assert_eq!(state.scroll.offset(), 40.0);
        assert_eq!(state.carousel.index(), 1);
    }
}
