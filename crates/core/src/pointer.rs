//! Per-frame input aggregation.
//!
//! Events are drained once per frame. Only the last pointer position and a
//! single "clicked" flag survive; several clicks in one frame count as one.

use crate::types::InputEvent;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointerState {
    x: i32,
    y: i32,
    clicked: bool,
}

impl PointerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget last frame's click. The position carries over.
    pub fn begin_frame(&mut self) {
        self.clicked = false;
    }

    /// Fold one event into the frame. Returns true if the event asks to quit.
    pub fn apply(&mut self, event: &InputEvent) -> bool {
        match *event {
            InputEvent::PointerMoved { x, y } => {
                self.x = x;
                self.y = y;
            }
            InputEvent::PointerReleased { x, y } => {
                self.x = x;
                self.y = y;
                self.clicked = true;
            }
            InputEvent::KeyReleased(_) | InputEvent::CloseRequested => {}
        }
        event.is_quit()
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn clicked(&self) -> bool {
        self.clicked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Key;

    #[test]
    fn last_position_wins() {
        let mut p = PointerState::new();
        p.apply(&InputEvent::PointerMoved { x: 1, y: 2 });
        p.apply(&InputEvent::PointerMoved { x: 30, y: 40 });
        assert_eq!(p.position(), (30, 40));
        assert!(!p.clicked());
    }

    #[test]
    fn release_sets_click_and_moves() {
        let mut p = PointerState::new();
        p.apply(&InputEvent::PointerReleased { x: 5, y: 6 });
        p.apply(&InputEvent::PointerMoved { x: 7, y: 8 });
        assert!(p.clicked());
        assert_eq!(p.position(), (7, 8));
    }

    #[test]
    fn begin_frame_keeps_position() {
        let mut p = PointerState::new();
        p.apply(&InputEvent::PointerReleased { x: 5, y: 6 });
        p.begin_frame();
        assert!(!p.clicked());
        assert_eq!(p.position(), (5, 6));
    }

    #[test]
    fn quit_events_are_reported() {
        let mut p = PointerState::new();
        assert!(p.apply(&InputEvent::CloseRequested));
        assert!(p.apply(&InputEvent::KeyReleased(Key::Escape)));
        assert!(!p.apply(&InputEvent::KeyReleased(Key::Char('a'))));
    }
}
