//! Frontend-agnostic input events.
//!
//! The TUI frontend converts crossterm events into this enum; the app core
//! only ever sees this shape. Tests dispatch these directly.

use crossterm::event::{KeyCode, KeyModifiers, MouseEventKind};

#[derive(Debug, Clone, PartialEq)]
pub enum FrontendEvent {
    /// Keyboard input
    Key {
        code: KeyCode,
        modifiers: KeyModifiers,
    },
    /// Mouse input
    Mouse {
        kind: MouseEventKind,
        x: u16,
        y: u16,
    },
    /// Terminal resize
    Resize { width: u16, height: u16 },
    /// Application quit signal
    Quit,
}

impl FrontendEvent {
    /// Create a key event
    pub fn key(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self::Key { code, modifiers }
    }

    /// Create a mouse event
    pub fn mouse(kind: MouseEventKind, x: u16, y: u16) -> Self {
        Self::Mouse { kind, x, y }
    }

    /// Create a resize event
    pub fn resize(width: u16, height: u16) -> Self {
        Self::Resize { width, height }
    }

    /// Create a quit event
    pub fn quit() -> Self {
        Self::Quit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::MouseButton;

    #[test]
    fn test_event_creation() {
        let key_event = FrontendEvent::key(KeyCode::Char('q'), KeyModifiers::NONE);
        assert!(matches!(key_event, FrontendEvent::Key { .. }));

        let mouse_event = FrontendEvent::mouse(MouseEventKind::Down(MouseButton::Left), 10, 5);
        assert!(matches!(
            mouse_event,
            FrontendEvent::Mouse { x: 10, y: 5, .. }
        ));

        let resize_event = FrontendEvent::resize(120, 40);
        assert!(matches!(
            resize_event,
            FrontendEvent::Resize {
                width: 120,
                height: 40
            }
        ));

        let quit_event = FrontendEvent::quit();
        assert!(matches!(quit_event, FrontendEvent::Quit));
    }
}
