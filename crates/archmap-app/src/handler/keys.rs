//! Key event handlers

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::AppState;
use archmap_core::SectionId;

/// Convert key events to messages
pub fn handle_key(_state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::CharCtrl('c') => Some(Message::Quit),

        // Focus navigation
        InputKey::Tab | InputKey::Right | InputKey::Down | InputKey::Char('j' | 'l') => {
            Some(Message::FocusNext)
        }
        InputKey::BackTab | InputKey::Left | InputKey::Up | InputKey::Char('k' | 'h') => {
            Some(Message::FocusPrev)
        }
        InputKey::Home => Some(Message::FocusFirst),
        InputKey::End => Some(Message::FocusLast),

        // Selection
        InputKey::Enter | InputKey::Char(' ') => Some(Message::ActivateFocused),
        InputKey::Esc => Some(Message::ClearSelection),

        // Sections: 1-6 toggle, 'e' expands everything
        InputKey::Char(c @ '1'..='9') => SectionId::from_shortcut(c).map(Message::ToggleSection),
        InputKey::Char('e') => Some(Message::ExpandAll),

        InputKey::Char('m') => Some(Message::ToggleMouseCapture),

        _ => None,
    }
}
