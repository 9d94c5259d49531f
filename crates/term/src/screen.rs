//! Rendering surface and input source seen by the game loop.
//!
//! [`Screen`] is the seam between the game and whatever shows the canvas.
//! [`TerminalScreen`] is the crossterm implementation: it owns the terminal
//! session, draws a caption on the top row and the canvas below it, and maps
//! terminal events back into canvas pixels with the same projection.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event};

use memory_puzzle_input::map_event;

use crate::canvas::Canvas;
use crate::fb::{CellStyle, FrameBuffer};
use crate::present::rasterize_into;
use crate::renderer::TerminalRenderer;
use crate::types::{InputEvent, Projection};

/// A display plus its event queue.
pub trait Screen {
    /// Show the canvas as the current frame.
    fn present(&mut self, canvas: &Canvas) -> Result<()>;

    /// Append every pending input event to `out` without blocking.
    fn poll_events(&mut self, out: &mut Vec<InputEvent>) -> Result<()>;
}

/// Projection for a canvas shown below a one-row caption.
///
/// Viewports too short for a caption use every row for the image.
pub fn layout(canvas_w: u32, canvas_h: u32, cols: u16, rows: u16) -> Projection {
    if rows < 2 {
        return Projection::fit(canvas_w, canvas_h, cols, rows);
    }
    let mut projection = Projection::fit(canvas_w, canvas_h, cols, rows - 1);
    projection.origin_row += 1;
    projection
}

pub struct TerminalScreen {
    renderer: TerminalRenderer,
    fb: FrameBuffer,
    projection: Projection,
    caption: String,
}

impl TerminalScreen {
    pub fn new(caption: impl Into<String>) -> Self {
        Self {
            renderer: TerminalRenderer::new(),
            fb: FrameBuffer::new(0, 0),
            projection: Projection::fit(1, 1, 1, 1),
            caption: caption.into(),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        self.renderer.enter()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.renderer.exit()
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }
}

impl Screen for TerminalScreen {
    fn present(&mut self, canvas: &Canvas) -> Result<()> {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        self.projection = layout(canvas.width(), canvas.height(), w, h);

        self.fb.resize(w, h);
        self.fb.clear(CellStyle::default().into_cell(' '));
        if h >= 2 {
            let x = w.saturating_sub(self.caption.chars().count() as u16) / 2;
            self.fb.put_str(x, 0, &self.caption, CellStyle::default());
        }
        rasterize_into(canvas, &self.projection, &mut self.fb);

        self.renderer.draw_swap(&mut self.fb)
    }

    fn poll_events(&mut self, out: &mut Vec<InputEvent>) -> Result<()> {
        while event::poll(Duration::ZERO)? {
            let ev = event::read()?;
            if let Event::Resize(_, _) = ev {
                self.renderer.invalidate();
            }
            if let Some(input) = map_event(&ev, &self.projection) {
                out.push(input);
            }
        }
        Ok(())
    }
}
