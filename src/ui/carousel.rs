//! The carousel widget — slide strip, navigation arrows and dots.
//!
//! Renders the window of the slide strip that the current scroll offset
//! exposes (one slide is exactly one viewport-width of columns, so up
//! to two slides are visible mid-scroll), using halfblock cells where
//! each cell carries two vertically stacked pixels.  Returns the
//! clickable regions so the input handler can hit-test mouse events
//! against what was actually drawn.

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::Color,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::core::slides::Slide;
use crate::ui::theme::Theme;

/// Clickable regions returned after rendering, for mouse hit-testing.
/// `viewport` doubles as the hover surface that pauses autoplay.
#[derive(Debug, Clone)]
pub struct CarouselHitZones {
    pub viewport: Rect,
    pub prev: Rect,
    pub next: Rect,
    pub dots: Vec<Rect>,
}

/// One frame of the carousel.
pub struct CarouselWidget<'a> {
    pub slides: &'a [Slide],
    pub current: usize,
    pub scroll_offset: f64,
    pub show_dots: bool,
}

impl<'a> CarouselWidget<'a> {
    /// Render and return hit zones for mouse interaction.
    pub fn render_and_hit(self, area: Rect, buf: &mut Buffer) -> CarouselHitZones {
        let title = match self.slides.get(self.current) {
            Some(slide) => format!(
                " {} — {}/{} ",
                slide.name,
                self.current + 1,
                self.slides.len()
            ),
            None => " carousel ".to_string(),
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Theme::border_style())
            .title(Span::styled(title, Theme::title_style()));
        let viewport = block.inner(area);
        block.render(area, buf);

        if viewport.width == 0 || viewport.height == 0 {
            return CarouselHitZones {
                viewport,
                prev: Rect::default(),
                next: Rect::default(),
                dots: Vec::new(),
            };
        }

        render_strip(self.slides, self.scroll_offset, viewport, buf);

        // Arrows sit on the viewport edges, vertically centred.  Like
        // the dots they are overlays: drawn after the strip.  Hidden at
        // the clamped ends — stepping there would be a no-op anyway.
        let arrow_y = viewport.y + viewport.height / 2;
        let prev = Rect::new(viewport.x, arrow_y, 2, 1);
        let next = Rect::new(viewport.x + viewport.width.saturating_sub(2), arrow_y, 2, 1);

        if self.current > 0 {
            Paragraph::new(Line::from(Span::styled("◀ ", Theme::arrow_style())))
                .render(prev, buf);
        }
        if self.current + 1 < self.slides.len() {
            Paragraph::new(Line::from(Span::styled(" ▶", Theme::arrow_style())))
                .render(next, buf);
        }

        let dots = if self.show_dots {
            render_dots(self.slides.len(), self.current, viewport, buf)
        } else {
            Vec::new()
        };

        CarouselHitZones {
            viewport,
            prev,
            next,
            dots,
        }
    }
}

/// Draw the visible window of the slide strip.  Column `c` of the
/// viewport shows strip position `offset + c`; each slide occupies one
/// viewport-width of strip columns with its image aspect-fitted and
/// centred inside that box.
fn render_strip(slides: &[Slide], offset: f64, viewport: Rect, buf: &mut Buffer) {
    let w = viewport.width as f64;
    if w <= 0.0 {
        return;
    }

    let first = (offset / w).floor().max(0.0) as usize;
    let fitted: Vec<(usize, FittedImage)> = (first..=first + 1)
        .filter(|&k| k < slides.len())
        .map(|k| (k, fit_to_cells(&slides[k].image, viewport.width, viewport.height)))
        .collect();

    for col in 0..viewport.width {
        let strip_x = offset + col as f64;
        let k = (strip_x / w).floor();
        if k < 0.0 {
            continue;
        }
        let k = k as usize;
        let Some((_, fit)) = fitted.iter().find(|(idx, _)| *idx == k) else {
            continue;
        };

        // Column within this slide's box, then within its fitted image.
        let local = (strip_x - k as f64 * w).floor() as i32;
        let img_col = local - fit.col_offset as i32;
        if img_col < 0 || img_col as u32 >= fit.rgba.width() {
            continue;
        }

        for row in 0..viewport.height {
            let img_row = row as i32 - fit.row_offset as i32;
            if img_row < 0 {
                continue;
            }
            let yt = (img_row as u32) * 2;
            if yt >= fit.rgba.height() {
                break;
            }
            let yb = yt + 1;
            let top = fit.rgba.get_pixel(img_col as u32, yt);
            let fg = Color::Rgb(top[0], top[1], top[2]);
            let bg = if yb < fit.rgba.height() {
                let b = fit.rgba.get_pixel(img_col as u32, yb);
                Color::Rgb(b[0], b[1], b[2])
            } else {
                Color::Reset
            };
            if let Some(cell) =
                buf.cell_mut(Position::new(viewport.x + col, viewport.y + row))
            {
                cell.set_char('▀').set_fg(fg).set_bg(bg);
            }
        }
    }
}

struct FittedImage {
    rgba: image::RgbaImage,
    /// Horizontal centring offset within the slide box, in columns.
    col_offset: u16,
    /// Vertical centring offset, in rows.
    row_offset: u16,
}

/// Resize an image to fit a `cols`×`rows` cell box, preserving aspect
/// ratio.  Each column is 1 px wide and each row 2 px tall.
fn fit_to_cells(img: &image::RgbaImage, cols: u16, rows: u16) -> FittedImage {
    use image::imageops::FilterType;

    let max_px_w = cols as f64;
    let max_px_h = (rows as f64) * 2.0;
    let src_w = (img.width() as f64).max(1.0);
    let src_h = (img.height() as f64).max(1.0);

    let scale = (max_px_w / src_w).min(max_px_h / src_h);
    let fit_w = (src_w * scale).round().max(1.0) as u32;
    let fit_h = (src_h * scale).round().max(1.0) as u32;

    let rgba = image::imageops::resize(img, fit_w, fit_h, FilterType::Triangle);
    let col_offset = cols.saturating_sub(rgba.width() as u16) / 2;
    let row_offset = rows.saturating_sub((rgba.height() as u16).div_ceil(2)) / 2;

    FittedImage {
        rgba,
        col_offset,
        row_offset,
    }
}

/// One dot per slide on the bottom row of the viewport, centred.
/// Returns each dot's hit zone, indexed by slide.
fn render_dots(count: usize, current: usize, viewport: Rect, buf: &mut Buffer) -> Vec<Rect> {
    // "● ○ ○ ○" — one column per dot, one gap between.
    let total_w = (count * 2 - 1) as u16;
    if total_w > viewport.width || viewport.height == 0 {
        return Vec::new();
    }
    let x0 = viewport.x + (viewport.width - total_w) / 2;
    let y = viewport.y + viewport.height - 1;

    let mut zones = Vec::with_capacity(count);
    for i in 0..count {
        let x = x0 + (i * 2) as u16;
        let (glyph, style) = if i == current {
            ("●", Theme::dot_active_style())
        } else {
            ("○", Theme::dot_inactive_style())
        };
        Paragraph::new(Line::from(Span::styled(glyph, style)))
            .render(Rect::new(x, y, 1, 1), buf);
        zones.push(Rect::new(x, y, 1, 1));
    }
    zones
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn slide(name: &str, w: u32, h: u32) -> Slide {
        Slide {
            path: name.into(),
            name: name.to_string(),
            image: Arc::new(image::RgbaImage::from_pixel(
                w,
                h,
                image::Rgba([120, 60, 30, 255]),
            )),
        }
    }

    fn render(widget: CarouselWidget<'_>, area: Rect) -> (CarouselHitZones, Buffer) {
        let mut buf = Buffer::empty(area);
        let zones = widget.render_and_hit(area, &mut buf);
        (zones, buf)
    }

    #[test]
    fn dot_zones_cover_every_slide() {
        let slides = vec![slide("a", 8, 8), slide("b", 8, 8), slide("c", 8, 8)];
        let (zones, _) = render(
            CarouselWidget {
                slides: &slides,
                current: 0,
                scroll_offset: 0.0,
                show_dots: true,
            },
            Rect::new(0, 0, 40, 12),
        );
        assert_eq!(zones.dots.len(), 3);
        // Dots are distinct columns on the same row.
        assert_eq!(zones.dots[0].y, zones.dots[1].y);
        assert!(zones.dots[0].x < zones.dots[1].x);
    }

    #[test]
    fn arrows_are_hidden_at_the_clamped_ends() {
        let slides = vec![slide("a", 8, 8), slide("b", 8, 8)];
        let area = Rect::new(0, 0, 40, 12);

        let (zones, buf) = render(
            CarouselWidget {
                slides: &slides,
                current: 0,
                scroll_offset: 0.0,
                show_dots: false,
            },
            area,
        );
        // First slide: no previous arrow drawn, next arrow visible.
        let prev_cell = buf.cell(Position::new(zones.prev.x, zones.prev.y)).unwrap();
        assert_ne!(prev_cell.symbol(), "◀");
        let next_cell = buf
            .cell(Position::new(zones.next.x + 1, zones.next.y))
            .unwrap();
        assert_eq!(next_cell.symbol(), "▶");
    }

    #[test]
    fn mid_scroll_shows_two_adjacent_slides() {
        // A red and a blue slide; halfway through the scroll both
        // should contribute cells to the viewport.
        let mut slides = vec![slide("r", 16, 16), slide("b", 16, 16)];
        slides[0].image = Arc::new(image::RgbaImage::from_pixel(
            16,
            16,
            image::Rgba([200, 0, 0, 255]),
        ));
        slides[1].image = Arc::new(image::RgbaImage::from_pixel(
            16,
            16,
            image::Rgba([0, 0, 200, 255]),
        ));

        let area = Rect::new(0, 0, 20, 10);
        let (zones, buf) = render(
            CarouselWidget {
                slides: &slides,
                current: 0,
                scroll_offset: (20 - 2) as f64 / 2.0, // half a viewport
                show_dots: false,
            },
            area,
        );

        let mid_y = zones.viewport.y + zones.viewport.height / 2;
        let mut reds = 0;
        let mut blues = 0;
        for col in 0..zones.viewport.width {
            let cell = buf
                .cell(Position::new(zones.viewport.x + col, mid_y))
                .unwrap();
            match cell.fg {
                Color::Rgb(r, _, b) if r > b => reds += 1,
                Color::Rgb(r, _, b) if b > r => blues += 1,
                _ => {}
            }
        }
        assert!(reds > 0, "left slide not visible mid-scroll");
        assert!(blues > 0, "right slide not visible mid-scroll");
    }
}
