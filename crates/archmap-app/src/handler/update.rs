//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::{AppPhase, AppState};
use archmap_core::prelude::*;

use super::{keys::handle_key, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            info!("Quit requested");
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        // Both only trigger a redraw; layout is recomputed from the frame
        Message::Tick => UpdateResult::none(),

        Message::Resize { width, height } => {
            debug!("Terminal resized to {}x{}", width, height);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Diagram Interaction
        // ─────────────────────────────────────────────────────────
        Message::SelectNode(id) => {
            // Hidden nodes have no click target; ignore stale events
            if !state.view.is_node_visible(id) {
                debug!("Ignoring selection of hidden node {}", id);
                return UpdateResult::none();
            }
            state.view.select_node(id);
            state.focused_node = Some(id);
            debug!("Active node: {:?}", state.view.active_node());
            UpdateResult::none()
        }

        Message::ToggleSection(section) => {
            let expanded = state.view.toggle_section(section);
            state.reconcile_focus();
            debug!(
                "Section {} {}",
                section,
                if expanded { "expanded" } else { "collapsed" }
            );
            UpdateResult::none()
        }

        Message::ClearSelection => {
            state.view.clear_selection();
            UpdateResult::none()
        }

        Message::ExpandAll => {
            state.view.expand_all();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Keyboard Focus
        // ─────────────────────────────────────────────────────────
        Message::FocusNext => {
            state.move_focus(true);
            UpdateResult::none()
        }

        Message::FocusPrev => {
            state.move_focus(false);
            UpdateResult::none()
        }

        Message::FocusFirst => {
            state.focus_edge(true);
            UpdateResult::none()
        }

        Message::FocusLast => {
            state.focus_edge(false);
            UpdateResult::none()
        }

        Message::ActivateFocused => match state.focused_node {
            Some(id) => UpdateResult::message(Message::SelectNode(id)),
            None => {
                // First Enter with no cursor behaves like Tab
                state.move_focus(true);
                UpdateResult::none()
            }
        },

        Message::ToggleMouseCapture => {
            state.mouse_capture = !state.mouse_capture;
            info!("Mouse capture {}", state.mouse_capture);
            UpdateResult::action(UpdateAction::SetMouseCapture(state.mouse_capture))
        }
    }
}
