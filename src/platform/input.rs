//! Keyboard and mouse mapping

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEventKind};

use crate::camera::{CameraCommand, CameraMode, Nudge};
use crate::sim::{Direction, TickInput};

/// What a single key press asks for
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputAction {
    Move(Direction),
    StepsUp,
    StepsDown,
    Camera(CameraCommand),
    Quit,
}

/// Key bindings
pub fn map_key(code: KeyCode) -> Option<InputAction> {
    use InputAction::*;

    let action = match code {
        KeyCode::Left => Move(Direction::Left),
        KeyCode::Right => Move(Direction::Right),
        KeyCode::Up => Move(Direction::Forward),
        KeyCode::Down => Move(Direction::Back),
        KeyCode::Esc => Quit,
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            ' ' => Move(Direction::Jump),
            'f' => StepsUp,
            'c' => StepsDown,
            'v' => Camera(CameraCommand::Select(CameraMode::Tower)),
            't' => Camera(CameraCommand::Select(CameraMode::Top)),
            'g' => Camera(CameraCommand::Select(CameraMode::Follow)),
            'j' => Camera(CameraCommand::Select(CameraMode::Behind)),
            'h' => Camera(CameraCommand::Select(CameraMode::Helicopter)),
            'b' => Camera(CameraCommand::Select(CameraMode::Orbit)),
            'n' => Camera(CameraCommand::Select(CameraMode::FirstPerson)),
            'a' => Camera(CameraCommand::Nudge(Nudge::Left)),
            'd' => Camera(CameraCommand::Nudge(Nudge::Right)),
            'w' => Camera(CameraCommand::Nudge(Nudge::Lower)),
            's' => Camera(CameraCommand::Nudge(Nudge::Raise)),
            'i' => Camera(CameraCommand::ZoomIn),
            'o' => Camera(CameraCommand::ZoomOut),
            'l' => Camera(CameraCommand::PanLeft),
            'k' => Camera(CameraCommand::PanRight),
            'q' => Quit,
            _ => return None,
        },
        _ => return None,
    };
    Some(action)
}

/// Collects terminal events between frames
#[derive(Debug, Default)]
pub struct InputState {
    pending: TickInput,
    quit: bool,
    last_mouse_row: Option<u16>,
}

impl InputState {
    /// Drain every event already queued without blocking
    pub fn poll(&mut self) -> io::Result<()> {
        while event::poll(Duration::ZERO)? {
            let ev = event::read()?;
            self.handle_event(&ev);
        }
        Ok(())
    }

    pub fn handle_event(&mut self, ev: &Event) {
        match ev {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => {
                    self.pending.direction = Some(Direction::Jump);
                }
                MouseEventKind::ScrollDown => self.pending.camera.push(CameraCommand::ZoomIn),
                MouseEventKind::ScrollUp => self.pending.camera.push(CameraCommand::ZoomOut),
                MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                    if let Some(last) = self.last_mouse_row {
                        let dy = mouse.row as i32 - last as i32;
                        if dy != 0 {
                            self.pending.camera.push(CameraCommand::Drag(dy));
                        }
                    }
                    self.last_mouse_row = Some(mouse.row);
                }
                _ => {}
            },
            _ => {}
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) {
        // Some terminals report releases and repeats too
        if key.kind == KeyEventKind::Release {
            return;
        }
        match map_key(key.code) {
            Some(InputAction::Move(dir)) => self.pending.direction = Some(dir),
            Some(InputAction::StepsUp) => self.pending.step_delta += 1,
            Some(InputAction::StepsDown) => self.pending.step_delta -= 1,
            Some(InputAction::Camera(cmd)) => self.pending.camera.push(cmd),
            Some(InputAction::Quit) => self.quit = true,
            None => {}
        }
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// Hand over everything collected since the last call
    pub fn take(&mut self) -> TickInput {
        std::mem::take(&mut self.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyModifiers, MouseEvent};

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn mouse(kind: MouseEventKind, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column: 10,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(map_key(KeyCode::Up), Some(InputAction::Move(Direction::Forward)));
        assert_eq!(map_key(KeyCode::Down), Some(InputAction::Move(Direction::Back)));
        assert_eq!(map_key(KeyCode::Char(' ')), Some(InputAction::Move(Direction::Jump)));
        assert_eq!(map_key(KeyCode::Char('Q')), Some(InputAction::Quit));
        assert_eq!(map_key(KeyCode::Char('z')), None);
    }

    #[test]
    fn test_last_direction_wins() {
        let mut input = InputState::default();
        input.handle_event(&press(KeyCode::Left));
        input.handle_event(&press(KeyCode::Up));
        let tick = input.take();
        assert_eq!(tick.direction, Some(Direction::Forward));

        // Taken input is cleared
        assert_eq!(input.take().direction, None);
    }

    #[test]
    fn test_step_keys_accumulate() {
        let mut input = InputState::default();
        input.handle_event(&press(KeyCode::Char('f')));
        input.handle_event(&press(KeyCode::Char('f')));
        input.handle_event(&press(KeyCode::Char('c')));
        assert_eq!(input.take().step_delta, 1);
    }

    #[test]
    fn test_release_ignored() {
        let mut input = InputState::default();
        let mut key = KeyEvent::new(KeyCode::Right, KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        input.handle_event(&Event::Key(key));
        assert_eq!(input.take().direction, None);
    }

    #[test]
    fn test_mouse_mapping() {
        let mut input = InputState::default();
        input.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), 5));
        input.handle_event(&mouse(MouseEventKind::ScrollDown, 5));
        input.handle_event(&mouse(MouseEventKind::Moved, 5));
        input.handle_event(&mouse(MouseEventKind::Moved, 8));
        input.handle_event(&mouse(MouseEventKind::Moved, 6));

        let tick = input.take();
        assert_eq!(tick.direction, Some(Direction::Jump));
        assert_eq!(
            tick.camera,
            vec![
                CameraCommand::ZoomIn,
                CameraCommand::Drag(3),
                CameraCommand::Drag(-2)
            ]
        );
    }

    #[test]
    fn test_quit() {
        let mut input = InputState::default();
        assert!(!input.quit_requested());
        input.handle_event(&press(KeyCode::Esc));
        assert!(input.quit_requested());
    }
}
