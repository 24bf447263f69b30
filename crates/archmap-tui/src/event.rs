//! Terminal event polling

use archmap_app::message::Message;
use archmap_app::InputKey;
use archmap_core::prelude::*;
use crossterm::event::{self, Event, KeyCode, KeyModifiers, MouseButton, MouseEventKind};
use std::time::Duration;

/// A polled terminal event, already reduced to what the app cares about
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalEvent {
    /// Ready to hand to `update`
    Message(Message),
    /// Left click at a screen cell; resolved against the current layout by the runner
    Click { column: u16, row: u16 },
}

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
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        KeyCode::Left => Some(InputKey::Left),
        KeyCode::Right => Some(InputKey::Right),
        KeyCode::Home => Some(InputKey::Home),
        KeyCode::End => Some(InputKey::End),
        _ => None, // Unsupported keys ignored
    }
}

/// Reduce a raw crossterm event; releases, drags and scrolls are dropped
pub fn translate(raw: Event) -> Option<TerminalEvent> {
    match raw {
        Event::Key(key) if key.kind == event::KeyEventKind::Press => {
            key_event_to_input(key).map(|k| TerminalEvent::Message(Message::Key(k)))
        }
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => Some(TerminalEvent::Click {
                column: mouse.column,
                row: mouse.row,
            }),
            _ => None,
        },
        Event::Resize(width, height) => {
            Some(TerminalEvent::Message(Message::Resize { width, height }))
        }
        _ => None,
    }
}

/// Poll for terminal events with timeout
pub fn poll() -> Result<Option<TerminalEvent>> {
    // Poll with 50ms timeout (20 FPS)
    if event::poll(Duration::from_millis(50))? {
        Ok(translate(event::read()?))
    } else {
        Ok(Some(TerminalEvent::Message(Message::Tick)))
    }
}
