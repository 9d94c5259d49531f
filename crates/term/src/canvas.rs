//! Pixel canvas with the handful of 2D primitives the game draws with.
//!
//! Coordinates are signed; everything is clipped to the canvas, so callers can
//! draw partially off-screen shapes without checks.

use arrayvec::ArrayVec;

use crate::core::Rect;

use crate::types::{palette, Rgb};

/// Most vertices [`Canvas::fill_polygon`] accepts.
pub const MAX_POLYGON_POINTS: usize = 8;

/// Fixed-size RGB pixel buffer, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![palette::BG_COLOR; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    #[inline(always)]
    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Rgb> {
        self.idx(x, y).map(|i| self.pixels[i])
    }

    pub fn set(&mut self, x: i32, y: i32, color: Rgb) {
        if let Some(i) = self.idx(x, y) {
            self.pixels[i] = color;
        }
    }

    pub fn fill(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    /// Horizontal run `[x0, x1]` (inclusive) on row `y`.
    fn span(&mut self, y: i32, x0: i32, x1: i32, color: Rgb) {
        if y < 0 || y >= self.height as i32 {
            return;
        }
        let x0 = x0.max(0);
        let x1 = x1.min(self.width as i32 - 1);
        if x0 > x1 {
            return;
        }
        let row = y as usize * self.width as usize;
        self.pixels[row + x0 as usize..=row + x1 as usize].fill(color);
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        if rect.w <= 0 || rect.h <= 0 {
            return;
        }
        for y in rect.y..rect.bottom() {
            self.span(y, rect.x, rect.right() - 1, color);
        }
    }

    /// Outline of `rect`, `stroke` pixels thick, drawn inside the rectangle.
    pub fn stroke_rect(&mut self, rect: Rect, stroke: i32, color: Rgb) {
        if stroke <= 0 {
            return;
        }
        if stroke * 2 >= rect.w || stroke * 2 >= rect.h {
            self.fill_rect(rect, color);
            return;
        }
        self.fill_rect(Rect::new(rect.x, rect.y, rect.w, stroke), color);
        self.fill_rect(Rect::new(rect.x, rect.bottom() - stroke, rect.w, stroke), color);
        self.fill_rect(Rect::new(rect.x, rect.y, stroke, rect.h), color);
        self.fill_rect(Rect::new(rect.right() - stroke, rect.y, stroke, rect.h), color);
    }

    /// Filled circle: every pixel within `radius` of the center.
    pub fn fill_circle(&mut self, cx: i32, cy: i32, radius: i32, color: Rgb) {
        if radius < 1 {
            return;
        }
        let r2 = (radius * radius) as f64;
        for dy in -radius..=radius {
            let half = (r2 - (dy * dy) as f64).sqrt().floor() as i32;
            self.span(cy + dy, cx - half, cx + half, color);
        }
    }

    /// Filled ellipse inscribed in `rect`.
    pub fn fill_ellipse(&mut self, rect: Rect, color: Rgb) {
        if rect.w <= 0 || rect.h <= 0 {
            return;
        }
        let rx = rect.w as f64 / 2.0;
        let ry = rect.h as f64 / 2.0;
        let cx = rect.x as f64 + rx;
        let cy = rect.y as f64 + ry;

        for y in rect.y..rect.bottom() {
            let dy = (y as f64 + 0.5 - cy) / ry;
            let t = 1.0 - dy * dy;
            if t < 0.0 {
                continue;
            }
            let half = rx * t.sqrt();
            let x0 = (cx - half - 0.5).ceil() as i32;
            let x1 = (cx + half - 0.5).floor() as i32;
            self.span(y, x0, x1, color);
        }
    }

    /// Filled polygon, boundary included. Intended for convex outlines of at
    /// most [`MAX_POLYGON_POINTS`] vertices; extra vertices are ignored.
    pub fn fill_polygon(&mut self, points: &[(i32, i32)], color: Rgb) {
        let points = &points[..points.len().min(MAX_POLYGON_POINTS)];
        if points.len() < 3 {
            for pair in points.windows(2) {
                self.draw_line(pair[0], pair[1], color);
            }
            return;
        }

        let min_y = points.iter().map(|p| p.1).min().unwrap_or(0);
        let max_y = points.iter().map(|p| p.1).max().unwrap_or(-1);
        let mut crossings: ArrayVec<f64, MAX_POLYGON_POINTS> = ArrayVec::new();

        for y in min_y..=max_y {
            let sy = y as f64 + 0.5;
            crossings.clear();
            for i in 0..points.len() {
                let (x0, y0) = points[i];
                let (x1, y1) = points[(i + 1) % points.len()];
                let (y0f, y1f) = (y0 as f64, y1 as f64);
                if (y0f <= sy && sy < y1f) || (y1f <= sy && sy < y0f) {
                    let t = (sy - y0f) / (y1f - y0f);
                    crossings.push(x0 as f64 + t * (x1 - x0) as f64);
                }
            }
            crossings.sort_by(|a, b| a.total_cmp(b));
            for pair in crossings.chunks_exact(2) {
                let x0 = (pair[0] - 0.5).ceil() as i32;
                let x1 = (pair[1] - 0.5).floor() as i32;
                self.span(y, x0, x1, color);
            }
        }

        for i in 0..points.len() {
            self.draw_line(points[i], points[(i + 1) % points.len()], color);
        }
    }

    /// One-pixel line segment, both endpoints included (Bresenham).
    pub fn draw_line(&mut self, from: (i32, i32), to: (i32, i32), color: Rgb) {
        let (mut x, mut y) = from;
        let dx = (to.0 - x).abs();
        let dy = -(to.1 - y).abs();
        let sx = if x < to.0 { 1 } else { -1 };
        let sy = if y < to.1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.set(x, y, color);
            if x == to.0 && y == to.1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgb = Rgb::new(255, 0, 0);

    fn count(canvas: &Canvas, color: Rgb) -> usize {
        canvas.pixels().iter().filter(|&&p| p == color).count()
    }

    #[test]
    fn new_canvas_is_background() {
        let c = Canvas::new(4, 3);
        assert_eq!(count(&c, palette::BG_COLOR), 12);
        assert_eq!(c.get(4, 0), None);
        assert_eq!(c.get(-1, 0), None);
    }

    #[test]
    fn fill_rect_is_clipped() {
        let mut c = Canvas::new(10, 10);
        c.fill_rect(Rect::new(-5, -5, 8, 8), RED);
        assert_eq!(count(&c, RED), 9);
        assert_eq!(c.get(2, 2), Some(RED));
        assert_eq!(c.get(3, 3), Some(palette::BG_COLOR));
    }

    #[test]
    fn stroke_rect_leaves_inside_empty() {
        let mut c = Canvas::new(20, 20);
        c.stroke_rect(Rect::new(0, 0, 20, 20), 4, RED);
        assert_eq!(c.get(0, 0), Some(RED));
        assert_eq!(c.get(3, 10), Some(RED));
        assert_eq!(c.get(16, 10), Some(RED));
        assert_eq!(c.get(4, 4), Some(palette::BG_COLOR));
        assert_eq!(count(&c, RED), 400 - 144);
    }

    #[test]
    fn circle_is_symmetric() {
        let mut c = Canvas::new(21, 21);
        c.fill_circle(10, 10, 5, RED);
        assert_eq!(c.get(10, 10), Some(RED));
        assert_eq!(c.get(15, 10), Some(RED));
        assert_eq!(c.get(5, 10), Some(RED));
        assert_eq!(c.get(10, 16), Some(palette::BG_COLOR));
        assert_eq!(c.get(14, 14), Some(palette::BG_COLOR));
    }

    #[test]
    fn ellipse_spans_rect_width() {
        let mut c = Canvas::new(40, 40);
        c.fill_ellipse(Rect::new(0, 10, 40, 20), RED);
        assert_eq!(c.get(0, 19), Some(RED));
        assert_eq!(c.get(39, 20), Some(RED));
        assert_eq!(c.get(20, 10), Some(RED));
        assert_eq!(c.get(20, 9), Some(palette::BG_COLOR));
        assert_eq!(c.get(0, 10), Some(palette::BG_COLOR));
    }

    #[test]
    fn polygon_includes_vertices() {
        let mut c = Canvas::new(40, 40);
        let diamond = [(20, 0), (39, 20), (20, 39), (0, 20)];
        c.fill_polygon(&diamond, RED);
        for &(x, y) in &diamond {
            assert_eq!(c.get(x, y), Some(RED));
        }
        assert_eq!(c.get(20, 20), Some(RED));
        assert_eq!(c.get(2, 2), Some(palette::BG_COLOR));
    }

    #[test]
    fn line_hits_both_endpoints() {
        let mut c = Canvas::new(10, 10);
        c.draw_line((0, 9), (9, 0), RED);
        assert_eq!(count(&c, RED), 10);
        assert_eq!(c.get(0, 9), Some(RED));
        assert_eq!(c.get(9, 0), Some(RED));

        let mut c = Canvas::new(10, 10);
        c.draw_line((3, 3), (3, 3), RED);
        assert_eq!(count(&c, RED), 1);
    }
}
