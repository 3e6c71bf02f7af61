//! Terminal event polling
//!
//! Keys, mouse and resize events are converted to [`Message`]s here. Mouse
//! positions are hit-tested against the current layout and carried as pixel
//! coordinates so the drawer's swipe thresholds keep their units.

use std::time::{Duration, Instant};

use crossterm::event::{
    self, Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use avtorend_app::state::AppState;
use avtorend_app::{InputKey, Message, PointerEvent, PointerKind};
use avtorend_core::prelude::*;

use crate::layout::hit_test;

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: crossterm::event::KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Some(InputKey::BackTab),
        KeyCode::Tab => Some(InputKey::Tab),
        KeyCode::BackTab => Some(InputKey::BackTab),
        KeyCode::Backspace => Some(InputKey::Backspace),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        KeyCode::Left => Some(InputKey::Left),
        KeyCode::Right => Some(InputKey::Right),
        KeyCode::Home => Some(InputKey::Home),
        KeyCode::End => Some(InputKey::End),
        KeyCode::PageUp => Some(InputKey::PageUp),
        KeyCode::PageDown => Some(InputKey::PageDown),
        _ => None,
    }
}

/// Convert a crossterm mouse event into a hit-tested pointer event.
///
/// Only the primary button and the wheel are tracked.
pub fn mouse_event_to_pointer(
    state: &AppState,
    area: Rect,
    mouse: MouseEvent,
    at: Instant,
) -> Option<PointerEvent> {
    let kind = match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => PointerKind::Down,
        MouseEventKind::Drag(MouseButton::Left) => PointerKind::Drag,
        MouseEventKind::Up(MouseButton::Left) => PointerKind::Up,
        MouseEventKind::ScrollUp => PointerKind::WheelUp,
        MouseEventKind::ScrollDown => PointerKind::WheelDown,
        _ => return None,
    };
    let target = hit_test(state, area, mouse.column, mouse.row);
    let (x, y) = state
        .settings
        .viewport
        .cell_center_px(mouse.column, mouse.row);
    Some(PointerEvent::new(kind, x, y, target, at))
}

/// Convert one terminal event.
pub fn convert(state: &AppState, area: Rect, event: Event) -> Option<Message> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            key_event_to_input(key).map(Message::Key)
        }
        Event::Mouse(mouse) => {
            mouse_event_to_pointer(state, area, mouse, Instant::now()).map(Message::Pointer)
        }
        Event::Resize(cols, rows) => Some(Message::Resize { cols, rows }),
        _ => None,
    }
}

/// Poll for terminal events, waiting at most `timeout`.
///
/// A timeout yields a tick so timers and animations advance.
pub fn poll(state: &AppState, area: Rect, timeout: Duration) -> Result<Option<Message>> {
    if event::poll(timeout)? {
        let event = event::read()?;
        Ok(convert(state, area, event))
    } else {
        Ok(Some(Message::Tick(Instant::now())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_state;
    use avtorend_app::HitTarget;
    use crossterm::event::KeyEvent;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_char_conversion() {
        let key = KeyEvent::new(KeyCode::Char('m'), KeyModifiers::NONE);
        assert_eq!(key_event_to_input(key), Some(InputKey::Char('m')));
    }

    #[test]
    fn test_char_with_ctrl_conversion() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_event_to_input(key), Some(InputKey::CharCtrl('c')));
    }

    #[test]
    fn test_backtab_with_shift() {
        let key = KeyEvent::new(KeyCode::Tab, KeyModifiers::SHIFT);
        assert_eq!(key_event_to_input(key), Some(InputKey::BackTab));
    }

    #[test]
    fn test_unsupported_key_returns_none() {
        let key = KeyEvent::new(KeyCode::Insert, KeyModifiers::NONE);
        assert_eq!(key_event_to_input(key), None);
    }

    #[test]
    fn test_resize_event() {
        let state = test_state(50, 40);
        let msg = convert(&state, Rect::new(0, 0, 50, 40), Event::Resize(120, 40));
        assert!(matches!(msg, Some(Message::Resize { cols: 120, rows: 40 })));
    }

    #[test]
    fn test_click_on_toggle_is_hit_tested() {
        let state = test_state(50, 40);
        let area = Rect::new(0, 0, 50, 40);
        // toggle occupies the last three inner columns of the header
        let event = mouse_event_to_pointer(
            &state,
            area,
            mouse(MouseEventKind::Down(MouseButton::Left), 47, 1),
            Instant::now(),
        )
        .unwrap();

        assert_eq!(event.kind, PointerKind::Down);
        assert_eq!(event.target, HitTarget::Toggle);
        assert_eq!(event.x, 47.0 * 8.0 + 4.0);
        assert_eq!(event.y, 16.0 + 8.0);
    }

    #[test]
    fn test_right_button_ignored() {
        let state = test_state(50, 40);
        let event = mouse_event_to_pointer(
            &state,
            Rect::new(0, 0, 50, 40),
            mouse(MouseEventKind::Down(MouseButton::Right), 10, 10),
            Instant::now(),
        );
        assert!(event.is_none());
    }

    #[test]
    fn test_wheel_maps_to_pointer_wheel() {
        let state = test_state(50, 40);
        let event = mouse_event_to_pointer(
            &state,
            Rect::new(0, 0, 50, 40),
            mouse(MouseEventKind::ScrollDown, 10, 10),
            Instant::now(),
        )
        .unwrap();
        assert_eq!(event.kind, PointerKind::WheelDown);
    }
}
