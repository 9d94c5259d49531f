//! Half-block presenter: downsamples a pixel canvas into terminal cells.
//!
//! Each terminal cell shows two square pixel blocks stacked vertically with
//! the upper-half-block glyph: foreground = upper block, background = lower
//! block. A block's color is the average of its pixels, so thin strokes
//! still tint the cell they cross.

use crate::canvas::Canvas;
use crate::fb::{CellStyle, FrameBuffer};
use crate::types::{palette, Projection, Rgb};

/// Upper half block.
pub const HALF_BLOCK: char = '▀';

/// Draw `canvas` into `fb` at `projection`. Cells outside the image are left alone.
pub fn rasterize_into(canvas: &Canvas, projection: &Projection, fb: &mut FrameBuffer) {
    let s = projection.scale as i32;
    for row in 0..projection.rows {
        for col in 0..projection.cols {
            let x0 = col as i32 * s;
            let y0 = row as i32 * 2 * s;
            let style = CellStyle {
                fg: block_average(canvas, x0, y0, s),
                bg: block_average(canvas, x0, y0 + s, s),
            };
            fb.set(
                projection.origin_col + col,
                projection.origin_row + row,
                style.into_cell(HALF_BLOCK),
            );
        }
    }
}

/// Mean color of the `size` x `size` block at (x0, y0), clipped to the canvas.
fn block_average(canvas: &Canvas, x0: i32, y0: i32, size: i32) -> Rgb {
    let (mut r, mut g, mut b, mut n) = (0u32, 0u32, 0u32, 0u32);
    for y in y0..y0 + size {
        for x in x0..x0 + size {
            if let Some(p) = canvas.get(x, y) {
                r += p.r as u32;
                g += p.g as u32;
                b += p.b as u32;
                n += 1;
            }
        }
    }
    if n == 0 {
        return palette::BG_COLOR;
    }
    Rgb::new(
        ((r + n / 2) / n) as u8,
        ((g + n / 2) / n) as u8,
        ((b + n / 2) / n) as u8,
    )
}

#[cfg(test)]
mod tests {
    use crate::core::Rect;

    use super::*;

    #[test]
    fn solid_blocks_keep_their_color() {
        let mut canvas = Canvas::new(4, 4);
        canvas.fill_rect(Rect::new(0, 0, 4, 2), palette::WHITE);
        let projection = Projection::fit(4, 4, 2, 1);
        assert_eq!(projection.scale, 2);

        let mut fb = FrameBuffer::new(2, 1);
        rasterize_into(&canvas, &projection, &mut fb);

        let cell = fb.get(0, 0).unwrap();
        assert_eq!(cell.ch, HALF_BLOCK);
        assert_eq!(cell.style.fg, palette::WHITE);
        assert_eq!(cell.style.bg, palette::BLACK);
    }

    #[test]
    fn mixed_block_is_averaged() {
        let mut canvas = Canvas::new(2, 4);
        canvas.set(0, 0, Rgb::new(200, 100, 0));
        let projection = Projection::fit(2, 4, 1, 1);

        let mut fb = FrameBuffer::new(1, 1);
        rasterize_into(&canvas, &projection, &mut fb);
        assert_eq!(fb.get(0, 0).unwrap().style.fg, Rgb::new(50, 25, 0));
    }

    #[test]
    fn image_is_placed_at_origin() {
        let canvas = Canvas::new(660, 460);
        let projection = Projection::fit(660, 460, 80, 24);
        let mut fb = FrameBuffer::new(80, 24);
        rasterize_into(&canvas, &projection, &mut fb);

        assert_eq!(fb.get(projection.origin_col, 0).unwrap().ch, HALF_BLOCK);
        assert_eq!(fb.get(projection.origin_col - 1, 0).unwrap().ch, ' ');
    }
}
