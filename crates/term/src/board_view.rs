//! BoardView: draws the board, icons, highlight and sliding covers onto a canvas.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{Board, Geometry, Rect, RevealState};

use crate::canvas::Canvas;
use crate::types::{palette, CellPos, Icon, Rgb, Shape, HIGHLIGHT_WIDTH};

/// Renders game state at a fixed [`Geometry`].
#[derive(Debug, Clone, Copy)]
pub struct BoardView {
    geometry: Geometry,
}

impl BoardView {
    pub fn new(geometry: Geometry) -> Self {
        Self { geometry }
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Clear to `background` and draw every tile.
    pub fn render_into(
        &self,
        canvas: &mut Canvas,
        board: &Board,
        reveal: &RevealState,
        background: Rgb,
    ) {
        canvas.fill(background);
        self.draw_board(canvas, board, reveal);
    }

    /// Covered tiles as solid boxes, revealed tiles as their icon.
    pub fn draw_board(&self, canvas: &mut Canvas, board: &Board, reveal: &RevealState) {
        for (cell, icon) in board.iter() {
            if reveal.is_revealed(cell) == Some(true) {
                self.draw_icon(canvas, cell, icon);
            } else {
                canvas.fill_rect(self.geometry.tile_rect(cell), palette::BOX_COLOR);
            }
        }
    }

    pub fn draw_icon(&self, canvas: &mut Canvas, cell: CellPos, icon: Icon) {
        let size = self.geometry.tile_size();
        let quarter = size / 4;
        let half = size / 2;
        let (left, top) = self.geometry.cell_top_left(cell);
        let color = icon.color.rgb();

        match icon.shape {
            Shape::Donut => {
                canvas.fill_circle(left + half, top + half, half - 5, color);
                canvas.fill_circle(left + half, top + half, quarter - 5, palette::BG_COLOR);
            }
            Shape::Square => {
                canvas.fill_rect(
                    Rect::new(left + quarter, top + quarter, size - half, size - half),
                    color,
                );
            }
            Shape::Diamond => {
                canvas.fill_polygon(
                    &[
                        (left + half, top),
                        (left + size - 1, top + half),
                        (left + half, top + size - 1),
                        (left, top + half),
                    ],
                    color,
                );
            }
            Shape::Lines => {
                for i in (0..size).step_by(4) {
                    canvas.draw_line((left, top + i), (left + i, top), color);
                    canvas.draw_line((left + i, top + size - 1), (left + size - 1, top + i), color);
                }
            }
            Shape::Oval => {
                canvas.fill_ellipse(Rect::new(left, top + quarter, size, half), color);
            }
            Shape::Circle => {
                canvas.fill_circle(left + half, top + half, half - 5, color);
            }
        }
    }

    /// Hover outline around a covered tile.
    pub fn draw_highlight(&self, canvas: &mut Canvas, cell: CellPos) {
        canvas.stroke_rect(
            self.geometry.highlight_rect(cell),
            HIGHLIGHT_WIDTH,
            palette::HIGHLIGHT_COLOR,
        );
    }

    /// Tiles mid-slide: icon showing, with a cover `coverage` pixels wide from
    /// the left edge. Non-positive coverage shows the bare icon.
    pub fn draw_covers(
        &self,
        canvas: &mut Canvas,
        board: &Board,
        cells: &[CellPos],
        coverage: i32,
    ) {
        let size = self.geometry.tile_size();
        for &cell in cells {
            let tile = self.geometry.tile_rect(cell);
            canvas.fill_rect(tile, palette::BG_COLOR);
            if let Some(icon) = board.icon(cell) {
                self.draw_icon(canvas, cell, icon);
            }
            if coverage > 0 {
                canvas.fill_rect(
                    Rect::new(tile.x, tile.y, coverage.min(size), size),
                    palette::BOX_COLOR,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::BoardConfig;

    use super::*;
    use crate::types::IconColor;

    const DONUT: Icon = Icon::new(Shape::Donut, IconColor::Red);
    const SQUARE: Icon = Icon::new(Shape::Square, IconColor::Green);

    fn view_2x1() -> (BoardView, Board) {
        let geo = Geometry::new(&BoardConfig::with_size(2, 1));
        let board = Board::from_icons(2, 1, vec![DONUT, SQUARE]).unwrap();
        (BoardView::new(geo), board)
    }

    #[test]
    fn covered_tile_is_box_color() {
        let (view, board) = view_2x1();
        let mut canvas = Canvas::new(660, 460);
        view.render_into(&mut canvas, &board, &RevealState::all_false(2, 1), palette::BG_COLOR);

        let (left, top) = view.geometry().cell_top_left(CellPos::new(0, 0));
        assert_eq!(canvas.get(left, top), Some(palette::BOX_COLOR));
        assert_eq!(canvas.get(left + 39, top + 39), Some(palette::BOX_COLOR));
        assert_eq!(canvas.get(left + 40, top), Some(palette::BG_COLOR));
    }

    #[test]
    fn donut_has_background_hole() {
        let (view, board) = view_2x1();
        let mut canvas = Canvas::new(660, 460);
        let revealed = RevealState::all_true(2, 1);
        view.render_into(&mut canvas, &board, &revealed, palette::LIGHT_BG_COLOR);

        let (left, top) = view.geometry().cell_top_left(CellPos::new(0, 0));
        // Ring at radius ~10, hole at the center.
        assert_eq!(canvas.get(left + 20 + 10, top + 20), Some(IconColor::Red.rgb()));
        assert_eq!(canvas.get(left + 20, top + 20), Some(palette::BG_COLOR));
        // Tile corner shows the flashed background.
        assert_eq!(canvas.get(left, top), Some(palette::LIGHT_BG_COLOR));
    }

    #[test]
    fn square_is_centered_half_tile() {
        let (view, board) = view_2x1();
        let mut canvas = Canvas::new(660, 460);
        view.render_into(&mut canvas, &board, &RevealState::all_true(2, 1), palette::BG_COLOR);

        let (left, top) = view.geometry().cell_top_left(CellPos::new(1, 0));
        let green = IconColor::Green.rgb();
        assert_eq!(canvas.get(left + 10, top + 10), Some(green));
        assert_eq!(canvas.get(left + 29, top + 29), Some(green));
        assert_eq!(canvas.get(left + 9, top + 10), Some(palette::BG_COLOR));
        assert_eq!(canvas.get(left + 30, top + 30), Some(palette::BG_COLOR));
    }

    #[test]
    fn highlight_ring_surrounds_tile() {
        let (view, _) = view_2x1();
        let mut canvas = Canvas::new(660, 460);
        let cell = CellPos::new(0, 0);
        view.draw_highlight(&mut canvas, cell);

        let (left, top) = view.geometry().cell_top_left(cell);
        assert_eq!(canvas.get(left - 5, top - 5), Some(palette::HIGHLIGHT_COLOR));
        assert_eq!(canvas.get(left - 2, top + 20), Some(palette::HIGHLIGHT_COLOR));
        assert_eq!(canvas.get(left + 44, top + 44), Some(palette::HIGHLIGHT_COLOR));
        assert_eq!(canvas.get(left, top), Some(palette::BG_COLOR));
    }

    #[test]
    fn partial_cover_splits_tile() {
        let (view, board) = view_2x1();
        let mut canvas = Canvas::new(660, 460);
        let cell = CellPos::new(1, 0);
        view.draw_covers(&mut canvas, &board, &[cell], 16);

        let (left, top) = view.geometry().cell_top_left(cell);
        let green = IconColor::Green.rgb();
        assert_eq!(canvas.get(left + 15, top + 20), Some(palette::BOX_COLOR));
        assert_eq!(canvas.get(left + 16, top + 20), Some(green));
        assert_eq!(canvas.get(left + 35, top + 20), Some(palette::BG_COLOR));
    }

    #[test]
    fn over_cover_is_clamped_to_tile() {
        let (view, board) = view_2x1();
        let mut canvas = Canvas::new(660, 460);
        let cell = CellPos::new(0, 0);
        view.draw_covers(&mut canvas, &board, &[cell], 42);

        let (left, top) = view.geometry().cell_top_left(cell);
        assert_eq!(canvas.get(left + 39, top), Some(palette::BOX_COLOR));
        assert_eq!(canvas.get(left + 40, top), Some(palette::BG_COLOR));
    }
}
