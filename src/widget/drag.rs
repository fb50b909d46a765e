// ~/quote-widget/src/widget/drag.rs

use eframe::egui::{pos2, Pos2};

use super::layout::hits_close;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressOutcome {
    /// Press landed on the close glyph.
    Close,
    DragStarted,
}

/// Pointer state for one frame, in window-local coordinates.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerFrame {
    pub pressed: bool,
    pub released: bool,
    pub pointer: Option<Pos2>,
    /// Pointer moved since the previous frame. Frames repainted only
    /// because the window itself moved carry a stale pointer.
    pub moved: bool,
    /// Current top-left of the window on screen.
    pub window_origin: Option<Pos2>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WidgetCommand {
    Close,
    MoveTo(Pos2),
}

/// Idle/dragging state machine moving a borderless window.
#[derive(Debug, Clone, Default)]
pub struct DragController {
    last_pointer_x: f32,
    last_pointer_y: f32,
    is_dragging: bool,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    /// Start dragging from `local`, unless it is the close glyph.
    pub fn press(&mut self, local: Pos2) -> PressOutcome {
        if hits_close(local) {
            self.is_dragging = false;
            return PressOutcome::Close;
        }
        self.last_pointer_x = local.x;
        self.last_pointer_y = local.y;
        self.is_dragging = true;
        PressOutcome::DragStarted
    }

    /// New window origin for a pointer at `local`, or `None` when idle.
    pub fn motion(&self, local: Pos2, window_origin: Pos2) -> Option<Pos2> {
        if !self.is_dragging {
            return None;
        }
        let delta = local - pos2(self.last_pointer_x, self.last_pointer_y);
        Some(window_origin + delta)
    }

    pub fn release(&mut self) {
        self.is_dragging = false;
        self.last_pointer_x = 0.0;
        self.last_pointer_y = 0.0;
    }

    /// Feed one frame of input, get the window command it implies.
    pub fn step(&mut self, frame: PointerFrame) -> Option<WidgetCommand> {
        let mut command = None;

        if frame.pressed {
            if let Some(pos) = frame.pointer {
                if self.press(pos) == PressOutcome::Close {
                    return Some(WidgetCommand::Close);
                }
            }
        } else if let (true, Some(pos), Some(origin)) = (frame.moved, frame.pointer, frame.window_origin) {
            if let Some(target) = self.motion(pos, origin) {
                if target != origin {
                    command = Some(WidgetCommand::MoveTo(target));
                }
            }
        }

        if frame.released {
            self.release();
        }
        command
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::vec2;

    #[test]
    fn move_follows_pointer_delta() {
        let mut drag = DragController::new();
        let window = pos2(100.0, 200.0);

        assert_eq!(drag.press(pos2(10.0, 15.0)), PressOutcome::DragStarted);
        let moved = drag.motion(pos2(40.0, 5.0), window).unwrap();
        assert_eq!(moved - window, vec2(30.0, -10.0));
    }

    #[test]
    fn idle_motion_does_nothing() {
        let drag = DragController::new();
        assert_eq!(drag.motion(pos2(40.0, 5.0), pos2(0.0, 0.0)), None);
    }

    #[test]
    fn release_then_press_resets_reference() {
        let mut drag = DragController::new();
        drag.press(pos2(10.0, 10.0));
        let window = drag.motion(pos2(30.0, 25.0), pos2(100.0, 100.0)).unwrap();
        assert_eq!(window, pos2(120.0, 115.0));
        drag.release();
        assert!(!drag.is_dragging());
        assert_eq!(drag.motion(pos2(80.0, 80.0), window), None);

        drag.press(pos2(50.0, 50.0));
        let window = drag.motion(pos2(55.0, 50.0), window).unwrap();
        assert_eq!(window, pos2(125.0, 115.0));
    }

    #[test]
    fn press_on_close_glyph_never_drags() {
        let mut drag = DragController::new();
        assert_eq!(drag.press(pos2(334.0, 26.0)), PressOutcome::Close);
        assert!(!drag.is_dragging());
        assert_eq!(drag.motion(pos2(0.0, 0.0), pos2(10.0, 10.0)), None);
    }

    #[test]
    fn step_reports_commands() {
        let mut drag = DragController::new();
        let origin = Some(pos2(500.0, 300.0));

        let press = PointerFrame { pressed: true, pointer: Some(pos2(20.0, 20.0)), window_origin: origin, ..Default::default() };
        assert_eq!(drag.step(press), None);

        let still = PointerFrame { moved: true, pointer: Some(pos2(20.0, 20.0)), window_origin: origin, ..Default::default() };
        assert_eq!(drag.step(still), None);

        let moved = PointerFrame { moved: true, pointer: Some(pos2(25.0, 18.0)), window_origin: origin, ..Default::default() };
        assert_eq!(drag.step(moved), Some(WidgetCommand::MoveTo(pos2(505.0, 298.0))));

        let up = PointerFrame { released: true, pointer: Some(pos2(25.0, 18.0)), window_origin: origin, ..Default::default() };
        drag.step(up);
        assert!(!drag.is_dragging());

        let close = PointerFrame { pressed: true, pointer: Some(pos2(330.0, 30.0)), window_origin: origin, ..Default::default() };
        assert_eq!(drag.step(close), Some(WidgetCommand::Close));
    }

    #[test]
    fn window_move_without_pointer_motion_is_ignored() {
        let mut drag = DragController::new();
        let press = PointerFrame { pressed: true, pointer: Some(pos2(10.0, 10.0)), window_origin: Some(pos2(100.0, 100.0)), ..Default::default() };
        drag.step(press);

        let dragged = PointerFrame { moved: true, pointer: Some(pos2(15.0, 10.0)), window_origin: Some(pos2(100.0, 100.0)), ..Default::default() };
        assert_eq!(drag.step(dragged), Some(WidgetCommand::MoveTo(pos2(105.0, 100.0))));

        // Repaint caused by the window's own move: origin is new, pointer is stale.
        let repaint = PointerFrame { moved: false, pointer: Some(pos2(15.0, 10.0)), window_origin: Some(pos2(105.0, 100.0)), ..Default::default() };
        assert_eq!(drag.step(repaint), None);

        // The next real pointer event is local to the moved window.
        let follow = PointerFrame { moved: true, pointer: Some(pos2(12.0, 10.0)), window_origin: Some(pos2(105.0, 100.0)), ..Default::default() };
        assert_eq!(drag.step(follow), Some(WidgetCommand::MoveTo(pos2(107.0, 100.0))));
        assert!(drag.is_dragging());
    }
}
