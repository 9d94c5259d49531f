use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use anyhow::Result;

use memory_puzzle::core::board::all_icons;
use memory_puzzle::core::{Board, BoardConfig, Geometry, RevealState};
use memory_puzzle::engine::{GameConfig, ManualClock, MemoryGame};
use memory_puzzle::term::{layout, rasterize_into, BoardView, Canvas, FrameBuffer, Screen};
use memory_puzzle::types::{palette, CellPos, InputEvent, Projection, Shape};

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

/// Sweeps the pointer across the board and rasterizes every frame into a
/// preallocated framebuffer, like the terminal screen does.
struct SweepScreen {
    fb: FrameBuffer,
    projection: Projection,
    x: i32,
}

impl Screen for SweepScreen {
    fn present(&mut self, canvas: &Canvas) -> Result<()> {
        rasterize_into(canvas, &self.projection, &mut self.fb);
        Ok(())
    }

    fn poll_events(&mut self, out: &mut Vec<InputEvent>) -> Result<()> {
        self.x = (self.x + 7) % 660;
        out.push(InputEvent::PointerMoved { x: self.x, y: 110 });
        Ok(())
    }
}

#[test]
fn frame_hot_paths_do_not_allocate() {
    // Setup (outside counting) so one-time allocations don't trip the gate.
    let screen = SweepScreen {
        fb: FrameBuffer::new(80, 25),
        projection: layout(660, 460, 80, 25),
        x: 0,
    };
    let config = GameConfig {
        board: BoardConfig::default(),
        seed: Some(1),
        ..GameConfig::default()
    };
    let mut game = MemoryGame::new(config, screen, ManualClock::new()).unwrap();

    // Warm-up.
    game.frame().unwrap();

    let allocs = with_alloc_counting(|| {
        // Hovering (with highlight) and presenting should be allocation-free.
        for _ in 0..200 {
            game.frame().unwrap();
        }
    });
    assert!(allocs == 0, "idle frames allocated {allocs} times");

    // Face-up boards draw every icon shape (diamonds included).
    let config = BoardConfig::default();
    let mut icons: Vec<_> = all_icons().into_iter().take(config.pair_count()).collect();
    icons.extend_from_within(..);
    assert!(icons.iter().any(|icon| icon.shape == Shape::Diamond));
    let board = Board::from_icons(config.width, config.height, icons).unwrap();
    let view = BoardView::new(Geometry::new(&config));
    let revealed = RevealState::all_true(config.width, config.height);
    let mut canvas = Canvas::new(config.screen_width, config.screen_height);
    let projection = layout(660, 460, 80, 25);
    let mut fb = FrameBuffer::new(80, 25);

    let allocs = with_alloc_counting(|| {
        for _ in 0..10 {
            view.render_into(&mut canvas, &board, &revealed, palette::BG_COLOR);
            view.draw_highlight(&mut canvas, CellPos::new(2, 3));
            rasterize_into(&canvas, &projection, &mut fb);
        }
    });
    assert!(allocs == 0, "revealed frames allocated {allocs} times");
}
