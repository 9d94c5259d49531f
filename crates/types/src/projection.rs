//! Canvas-to-terminal projection.
//!
//! The game draws into a fixed-size pixel canvas. A terminal shows it with
//! half-block glyphs: every terminal column covers `scale` pixels horizontally
//! and every terminal row covers `2 * scale` pixels vertically (upper and
//! lower half glyph, `scale` pixels each). The image is centered in the
//! viewport.

/// Integer scale and offset mapping canvas pixels onto terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Projection {
    /// Canvas pixels per terminal column (and per half row).
    pub scale: u32,
    /// First terminal column covered by the image.
    pub origin_col: u16,
    /// First terminal row covered by the image.
    pub origin_row: u16,
    /// Terminal columns covered by the image.
    pub cols: u16,
    /// Terminal rows covered by the image.
    pub rows: u16,
}

impl Projection {
    /// Fit a `canvas_w` x `canvas_h` canvas into a `viewport_cols` x `viewport_rows`
    /// terminal, using the smallest integer scale that shows the whole canvas.
    ///
    /// # Examples
    ///
    /// ```
    /// use memory_puzzle_types::Projection;
    ///
    /// let p = Projection::fit(660, 460, 132, 46);
    /// assert_eq!(p.scale, 5);
    /// assert_eq!((p.cols, p.rows), (132, 46));
    /// ```
    pub fn fit(canvas_w: u32, canvas_h: u32, viewport_cols: u16, viewport_rows: u16) -> Self {
        let vp_cols = viewport_cols.max(1) as u32;
        let vp_rows = viewport_rows.max(1) as u32;

        let scale = canvas_w
            .div_ceil(vp_cols)
            .max(canvas_h.div_ceil(vp_rows * 2))
            .max(1);

        let cols = canvas_w.div_ceil(scale).min(u16::MAX as u32) as u16;
        let rows = canvas_h.div_ceil(scale * 2).min(u16::MAX as u32) as u16;

        Self {
            scale,
            origin_col: viewport_cols.saturating_sub(cols) / 2,
            origin_row: viewport_rows.saturating_sub(rows) / 2,
            cols,
            rows,
        }
    }

    /// Canvas pixel at the middle of a terminal cell.
    ///
    /// Cells left of or above the image yield negative coordinates; callers
    /// treat anything off-canvas as "no tile".
    pub fn terminal_to_pixel(&self, col: u16, row: u16) -> (i32, i32) {
        let s = self.scale as i32;
        let dx = col as i32 - self.origin_col as i32;
        let dy = row as i32 - self.origin_row as i32;
        (dx * s + s / 2, dy * 2 * s + s)
    }

    /// Terminal cell showing a canvas pixel, if the pixel is on the image.
    pub fn pixel_to_terminal(&self, x: i32, y: i32) -> Option<(u16, u16)> {
        if x < 0 || y < 0 {
            return None;
        }
        let s = self.scale as i32;
        let col = x / s;
        let row = y / (2 * s);
        if col >= self.cols as i32 || row >= self.rows as i32 {
            return None;
        }
        Some((
            self.origin_col + col as u16,
            self.origin_row + row as u16,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_terminal_scales_down() {
        let p = Projection::fit(660, 460, 80, 24);
        // 660/80 -> 9, 460/48 -> 10
        assert_eq!(p.scale, 10);
        assert_eq!(p.cols, 66);
        assert_eq!(p.rows, 23);
        assert_eq!(p.origin_col, 7);
        assert_eq!(p.origin_row, 0);
    }

    #[test]
    fn zero_sized_viewport_does_not_panic() {
        let p = Projection::fit(660, 460, 0, 0);
        assert!(p.scale >= 1);
    }

    #[test]
    fn terminal_pixel_round_trip() {
        let p = Projection::fit(660, 460, 80, 24);
        for row in p.origin_row..p.origin_row + p.rows {
            for col in p.origin_col..p.origin_col + p.cols {
                let (x, y) = p.terminal_to_pixel(col, row);
                assert_eq!(p.pixel_to_terminal(x, y), Some((col, row)));
            }
        }
    }

    #[test]
    fn margin_columns_map_off_canvas() {
        let p = Projection::fit(660, 460, 80, 24);
        let (x, _) = p.terminal_to_pixel(0, 0);
        assert!(x < 0);
    }
}
