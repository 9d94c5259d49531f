//! Canvas -> terminal presentation and terminal -> canvas input, end to end.

use crossterm::event::{Event, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use rand::SeedableRng;
use rand_pcg::Pcg32;

use memory_puzzle::core::{Board, BoardConfig, Geometry, RevealState};
use memory_puzzle::input::map_event;
use memory_puzzle::term::{
    encode_diff_into, layout, rasterize_into, BoardView, Canvas, FrameBuffer, HALF_BLOCK,
};
use memory_puzzle::types::{palette, CellPos, InputEvent};

fn classic_scene(reveal: &RevealState) -> (BoardView, Board, Canvas) {
    let config = BoardConfig::default();
    let board = Board::generate(&config, &mut Pcg32::seed_from_u64(5)).unwrap();
    let view = BoardView::new(Geometry::new(&config));
    let mut canvas = Canvas::new(config.screen_width, config.screen_height);
    view.render_into(&mut canvas, &board, reveal, palette::BG_COLOR);
    (view, board, canvas)
}

#[test]
fn covered_tile_shows_as_white_cells() {
    let (view, _, canvas) = classic_scene(&RevealState::all_false(8, 6));
    let projection = layout(660, 460, 80, 25);
    let mut fb = FrameBuffer::new(80, 25);
    rasterize_into(&canvas, &projection, &mut fb);

    // Rows 60..80 of the canvas sit wholly inside the first tile row.
    let (left, _) = view.geometry().cell_top_left(CellPos::new(0, 0));
    let (col, row) = projection.pixel_to_terminal(left + 5, 65).unwrap();
    let cell = fb.get(col, row).unwrap();
    assert_eq!(cell.ch, HALF_BLOCK);
    assert_eq!(cell.style.fg, palette::BOX_COLOR);
    assert_eq!(cell.style.bg, palette::BOX_COLOR);

    // Top-left corner of the canvas is background.
    let (col, row) = projection.pixel_to_terminal(0, 0).unwrap();
    assert_eq!(fb.get(col, row).unwrap().style.fg, palette::BG_COLOR);
}

#[test]
fn caption_row_is_left_free() {
    let (_, _, canvas) = classic_scene(&RevealState::all_false(8, 6));
    let projection = layout(660, 460, 80, 25);
    let mut fb = FrameBuffer::new(80, 25);
    rasterize_into(&canvas, &projection, &mut fb);

    assert!(projection.origin_row >= 1);
    assert!((0..80).all(|x| fb.get(x, 0).unwrap().ch != HALF_BLOCK));
}

#[test]
fn revealing_one_tile_changes_only_nearby_cells() {
    let projection = layout(660, 460, 80, 25);

    let covered = RevealState::all_false(8, 6);
    let (_, _, before) = classic_scene(&covered);
    let mut prev = FrameBuffer::new(80, 25);
    rasterize_into(&before, &projection, &mut prev);

    let mut one = covered.clone();
    one.set(CellPos::new(0, 0), true);
    let (_, _, after) = classic_scene(&one);
    let mut next = FrameBuffer::new(80, 25);
    rasterize_into(&after, &projection, &mut next);

    let changed = prev
        .cells()
        .iter()
        .zip(next.cells())
        .filter(|(a, b)| a != b)
        .count();
    // A 40x40 tile at scale 10 spans 4 columns by 2-3 rows.
    assert!(changed > 0 && changed <= 4 * 3, "changed {changed}");

    let mut out = Vec::new();
    encode_diff_into(&prev, &next, &mut out).unwrap();
    assert!(!out.is_empty());
}

#[test]
fn terminal_click_lands_on_tile_under_cursor() {
    let geo = Geometry::new(&BoardConfig::default());
    let projection = layout(660, 460, 132, 47);

    let clicks = [
        (CellPos::new(0, 0), MouseButton::Left),
        (CellPos::new(3, 2), MouseButton::Right),
        (CellPos::new(7, 5), MouseButton::Middle),
    ];
    for (cell, button) in clicks {
        let rect = geo.tile_rect(cell);
        let (col, row) = projection
            .pixel_to_terminal(rect.x + rect.w / 2, rect.y + rect.h / 2)
            .unwrap();
        let event = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Up(button),
            column: col,
            row,
            modifiers: KeyModifiers::NONE,
        });

        let Some(InputEvent::PointerReleased { x, y }) = map_event(&event, &projection) else {
            panic!("expected a pointer release for {cell:?}");
        };
        assert_eq!(geo.cell_at_pixel(x, y), Some(cell));
    }
}
