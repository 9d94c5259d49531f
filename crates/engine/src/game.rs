//! The memory game loop.
//!
//! [`MemoryGame`] owns the round state (board, reveal flags, selection) and a
//! [`Context`] with everything that touches the outside world. One call to
//! [`MemoryGame::frame`] is one pass of the classic loop: draw, read input,
//! highlight, resolve a click, present, tick. Animations and pauses run
//! synchronously inside the frame that triggered them; input is not read
//! while they play.

use anyhow::Result;
use log::{debug, info};

use crate::clock::Clock;
use crate::core::animation::{
    cover_coverages, reveal_coverages, start_round_groups, win_flash_backgrounds,
};
use crate::core::rng::game_rng;
use crate::core::{
    Board, BoardConfig, ClickOutcome, ConfigError, GameRng, Geometry, PointerState, RevealState,
    Turn,
};
use crate::term::{BoardView, Canvas, Screen};
use crate::types::{
    palette, CellPos, InputEvent, FPS, MISMATCH_PAUSE_MS, NEW_BOARD_HOLD_MS, REVEAL_SPEED,
    WIN_FLASH_MS, WIN_HOLD_MS,
};

/// Tunables for one game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub board: BoardConfig,
    pub fps: u32,
    /// Pixels the tile cover moves per animation frame.
    pub reveal_speed: i32,
    /// Fixed seed for a reproducible run; `None` draws one.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board: BoardConfig::default(),
            fps: FPS,
            reveal_speed: REVEAL_SPEED,
            seed: None,
        }
    }
}

/// Display, timing, drawing target and randomness for the session.
pub struct Context<S, C> {
    pub screen: S,
    pub clock: C,
    pub canvas: Canvas,
    pub rng: GameRng,
}

/// Result of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct MemoryGame<S: Screen, C: Clock> {
    ctx: Context<S, C>,
    config: GameConfig,
    view: BoardView,
    board: Board,
    reveal: RevealState,
    turn: Turn,
    pointer: PointerState,
    events: Vec<InputEvent>,
    seed: u64,
    rounds_won: u32,
}

impl<S: Screen, C: Clock> MemoryGame<S, C> {
    /// Validate the board configuration and deal the first board.
    pub fn new(config: GameConfig, screen: S, clock: C) -> Result<Self, ConfigError> {
        config.board.validate()?;

        let (mut rng, seed) = game_rng(config.seed);
        let board = Board::generate(&config.board, &mut rng)?;
        let geometry = Geometry::new(&config.board);
        info!(
            "new game: {}x{} board, seed {}",
            config.board.width, config.board.height, seed
        );

        Ok(Self {
            ctx: Context {
                screen,
                clock,
                canvas: Canvas::new(config.board.screen_width, config.board.screen_height),
                rng,
            },
            view: BoardView::new(geometry),
            reveal: RevealState::all_false(config.board.width, config.board.height),
            board,
            config,
            turn: Turn::new(),
            pointer: PointerState::new(),
            events: Vec::with_capacity(16),
            seed,
            rounds_won: 0,
        })
    }

    /// Play the opening preview, then run frames until a quit request.
    pub fn run(&mut self) -> Result<()> {
        self.start()?;
        while self.frame()? == Flow::Continue {}
        info!("quit after {} won round(s)", self.rounds_won);
        Ok(())
    }

    /// Opening of a round: the covered board, then the group preview.
    pub fn start(&mut self) -> Result<()> {
        self.ctx.canvas.fill(palette::BG_COLOR);
        self.start_round_animation()
    }

    pub fn frame(&mut self) -> Result<Flow> {
        self.view
            .render_into(&mut self.ctx.canvas, &self.board, &self.reveal, palette::BG_COLOR);

        self.pointer.begin_frame();
        self.events.clear();
        self.ctx.screen.poll_events(&mut self.events)?;
        for event in &self.events {
            if self.pointer.apply(event) {
                return Ok(Flow::Quit);
            }
        }

        let (x, y) = self.pointer.position();
        if let Some(cell) = self.view.geometry().cell_at_pixel(x, y) {
            if self.reveal.is_revealed(cell) == Some(false) {
                self.view.draw_highlight(&mut self.ctx.canvas, cell);
                if self.pointer.clicked() {
                    self.handle_click(cell)?;
                }
            }
        }

        self.ctx.screen.present(&self.ctx.canvas)?;
        self.ctx.clock.tick(self.config.fps);
        Ok(Flow::Continue)
    }

    fn handle_click(&mut self, cell: CellPos) -> Result<()> {
        let outcome = self.turn.click(&self.board, &mut self.reveal, Some(cell));
        if let Some(icon) = self.board.icon(cell) {
            debug!(
                "click on ({}, {}) {} {}: {:?}",
                cell.x,
                cell.y,
                icon.color.as_str(),
                icon.shape.as_str(),
                outcome
            );
        }

        match outcome {
            ClickOutcome::Ignored => {}
            ClickOutcome::FirstRevealed(cell) => {
                self.reveal_animation(&[cell])?;
            }
            ClickOutcome::Mismatched { first, second } => {
                self.reveal_animation(&[second])?;
                self.ctx.clock.wait(MISMATCH_PAUSE_MS);
                self.cover_animation(&[first, second])?;
                self.reveal.set(first, false);
                self.reveal.set(second, false);
            }
            ClickOutcome::Matched { second, won, .. } => {
                self.reveal_animation(&[second])?;
                if won {
                    self.finish_round()?;
                }
            }
        }
        Ok(())
    }

    /// Win flash, hold, then a fresh board and its preview.
    fn finish_round(&mut self) -> Result<()> {
        self.rounds_won += 1;
        info!("round {} won", self.rounds_won);

        self.win_animation()?;
        self.ctx.clock.wait(WIN_HOLD_MS);

        self.board = Board::generate(&self.config.board, &mut self.ctx.rng)?;
        self.reveal = RevealState::all_false(self.config.board.width, self.config.board.height);
        self.turn.clear();

        self.view
            .render_into(&mut self.ctx.canvas, &self.board, &self.reveal, palette::BG_COLOR);
        self.ctx.screen.present(&self.ctx.canvas)?;
        self.ctx.clock.wait(NEW_BOARD_HOLD_MS);

        self.start_round_animation()
    }

    fn start_round_animation(&mut self) -> Result<()> {
        let groups = start_round_groups(self.view.geometry().cells(), &mut self.ctx.rng);
        info!("round {}: previewing {} group(s)", self.rounds_won + 1, groups.len());

        self.view.draw_board(&mut self.ctx.canvas, &self.board, &self.reveal);
        for group in &groups {
            self.reveal_animation(group)?;
            self.cover_animation(group)?;
        }
        Ok(())
    }

    fn reveal_animation(&mut self, cells: &[CellPos]) -> Result<()> {
        let tile = self.view.geometry().tile_size();
        self.slide(cells, reveal_coverages(tile, self.config.reveal_speed))
    }

    fn cover_animation(&mut self, cells: &[CellPos]) -> Result<()> {
        let tile = self.view.geometry().tile_size();
        self.slide(cells, cover_coverages(tile, self.config.reveal_speed))
    }

    fn slide(&mut self, cells: &[CellPos], coverages: impl Iterator<Item = i32>) -> Result<()> {
        for coverage in coverages {
            self.view
                .render_into(&mut self.ctx.canvas, &self.board, &self.reveal, palette::BG_COLOR);
            self.view
                .draw_covers(&mut self.ctx.canvas, &self.board, cells, coverage);
            self.ctx.screen.present(&self.ctx.canvas)?;
            self.ctx.clock.tick(self.config.fps);
        }
        Ok(())
    }

    fn win_animation(&mut self) -> Result<()> {
        let all_revealed =
            RevealState::all_true(self.config.board.width, self.config.board.height);
        for background in win_flash_backgrounds() {
            self.view
                .render_into(&mut self.ctx.canvas, &self.board, &all_revealed, background);
            self.ctx.screen.present(&self.ctx.canvas)?;
            self.ctx.clock.wait(WIN_FLASH_MS);
        }
        Ok(())
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn reveal(&self) -> &RevealState {
        &self.reveal
    }

    /// First tile of the current turn.
    pub fn selection(&self) -> Option<CellPos> {
        self.turn.selection()
    }

    pub fn geometry(&self) -> &Geometry {
        self.view.geometry()
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn rounds_won(&self) -> u32 {
        self.rounds_won
    }

    pub fn canvas(&self) -> &Canvas {
        &self.ctx.canvas
    }

    pub fn screen(&self) -> &S {
        &self.ctx.screen
    }

    pub fn screen_mut(&mut self) -> &mut S {
        &mut self.ctx.screen
    }

    pub fn clock(&self) -> &C {
        &self.ctx.clock
    }

    /// Tear down, handing back the screen and clock.
    pub fn into_parts(self) -> (S, C) {
        (self.ctx.screen, self.ctx.clock)
    }
}
