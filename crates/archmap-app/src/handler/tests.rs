//! Tests for handler module

use super::*;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppPhase, AppState};
use crate::view_state::DetailsView;
use archmap_core::{NodeId, SectionId};

/// Run a message and any follow-up messages it produces, collecting actions
fn dispatch(state: &mut AppState, message: Message) -> Vec<UpdateAction> {
    let mut actions = Vec::new();
    let mut next = Some(message);
    while let Some(msg) = next.take() {
        let result = update(state, msg);
        actions.extend(result.action);
        next = result.message;
    }
    actions
}

#[test]
fn test_quit_message_sets_quitting_phase() {
    let mut state = AppState::new();
    assert_ne!(state.phase, AppPhase::Quitting);

    update(&mut state, Message::Quit);

    assert_eq!(state.phase, AppPhase::Quitting);
    assert!(state.should_quit());
}

#[test]
fn test_q_key_produces_quit_message() {
    let state = AppState::new();
    let result = handle_key(&state, InputKey::Char('q'));
    assert!(matches!(result, Some(Message::Quit)));
}

#[test]
fn test_key_message_forwards_translated_message() {
    let mut state = AppState::new();
    let result = update(&mut state, Message::Key(InputKey::Char('2')));
    assert_eq!(
        result.message,
        Some(Message::ToggleSection(SectionId::Coaching))
    );
}

#[test]
fn test_select_node_toggles() {
    let mut state = AppState::new();

    dispatch(&mut state, Message::SelectNode(NodeId::Gcp));
    assert_eq!(state.view.active_node(), Some(NodeId::Gcp));
    assert_eq!(state.details().title(), "Google Cloud Platform");

    dispatch(&mut state, Message::SelectNode(NodeId::Gcp));
    assert_eq!(state.view.active_node(), None);
    assert!(matches!(state.details(), DetailsView::Placeholder { .. }));
}

#[test]
fn test_select_different_nodes() {
    let mut state = AppState::new();
    dispatch(&mut state, Message::SelectNode(NodeId::Men));
    dispatch(&mut state, Message::SelectNode(NodeId::Women));
    assert_eq!(state.view.active_node(), Some(NodeId::Women));
}

#[test]
fn test_select_moves_focus() {
    let mut state = AppState::new();
    dispatch(&mut state, Message::SelectNode(NodeId::Ios));
    assert_eq!(state.focused_node, Some(NodeId::Ios));
}

#[test]
fn test_select_hidden_node_is_ignored() {
    let mut state = AppState::new();
    dispatch(&mut state, Message::ToggleSection(SectionId::Payments));
    dispatch(&mut state, Message::SelectNode(NodeId::Stripe));
    assert_eq!(state.view.active_node(), None);
}

#[test]
fn test_toggle_section_twice_restores_flag() {
    let mut state = AppState::new();
    dispatch(&mut state, Message::ToggleSection(SectionId::Platforms));
    assert!(!state.view.is_expanded(SectionId::Platforms));
    assert!(state.view.is_expanded(SectionId::Cloud));

    dispatch(&mut state, Message::ToggleSection(SectionId::Platforms));
    assert!(state.view.is_expanded(SectionId::Platforms));
}

#[test]
fn test_collapsing_focused_section_clears_focus() {
    let mut state = AppState::new();
    state.focused_node = Some(NodeId::DoubleCoach);
    dispatch(&mut state, Message::ToggleSection(SectionId::Coaching));
    assert_eq!(state.focused_node, None);
}

#[test]
fn test_keyboard_selection_flow() {
    let mut state = AppState::new();

    // Focus follows reading order: core first, then the coaching row
    dispatch(&mut state, Message::Key(InputKey::Tab));
    dispatch(&mut state, Message::Key(InputKey::Tab));
    assert_eq!(state.focused_node, Some(NodeId::SingleCoach));
    dispatch(&mut state, Message::Key(InputKey::Tab));
    assert_eq!(state.focused_node, Some(NodeId::DoubleCoach));

    dispatch(&mut state, Message::Key(InputKey::Enter));
    assert_eq!(state.view.active_node(), Some(NodeId::DoubleCoach));

    // Enter again deselects
    dispatch(&mut state, Message::Key(InputKey::Enter));
    assert_eq!(state.view.active_node(), None);
}

#[test]
fn test_enter_without_focus_only_places_cursor() {
    let mut state = AppState::new();
    dispatch(&mut state, Message::Key(InputKey::Enter));
    assert_eq!(state.focused_node, Some(NodeId::AiAgent));
    assert_eq!(state.view.active_node(), None);
}

#[test]
fn test_escape_clears_selection() {
    let mut state = AppState::new();
    dispatch(&mut state, Message::SelectNode(NodeId::Translation));
    dispatch(&mut state, Message::Key(InputKey::Esc));
    assert_eq!(state.view.active_node(), None);
}

#[test]
fn test_expand_all_key() {
    let mut state = AppState::new();
    dispatch(&mut state, Message::Key(InputKey::Char('1')));
    dispatch(&mut state, Message::Key(InputKey::Char('4')));
    dispatch(&mut state, Message::Key(InputKey::Char('e')));
    assert!(SectionId::ALL.iter().all(|s| state.view.is_expanded(*s)));
}

#[test]
fn test_toggle_mouse_capture_emits_action() {
    let mut state = AppState::new();
    assert!(state.mouse_capture);

    let actions = dispatch(&mut state, Message::Key(InputKey::Char('m')));
    assert_eq!(actions, vec![UpdateAction::SetMouseCapture(false)]);
    assert!(!state.mouse_capture);

    let actions = dispatch(&mut state, Message::ToggleMouseCapture);
    assert_eq!(actions, vec![UpdateAction::SetMouseCapture(true)]);
}

#[test]
fn test_resize_and_tick_leave_view_untouched() {
    let mut state = AppState::new();
    update(&mut state, Message::SelectNode(NodeId::Stripe));

    let result = update(&mut state, Message::Resize {
        width: 120,
        height: 40,
    });
    assert!(result.message.is_none() && result.action.is_none());
    update(&mut state, Message::Tick);

    assert_eq!(state.view.active_node(), Some(NodeId::Stripe));
    assert_eq!(state.focused_node, Some(NodeId::Stripe));
}

#[test]
fn test_home_and_end_jump_focus() {
    let mut state = AppState::new();
    dispatch(&mut state, Message::Key(InputKey::End));
    assert_eq!(state.focused_node, Some(NodeId::Android));

    dispatch(&mut state, Message::Key(InputKey::Home));
    assert_eq!(state.focused_node, Some(NodeId::AiAgent));

    dispatch(&mut state, Message::Key(InputKey::Enter));
    assert_eq!(state.view.active_node(), Some(NodeId::AiAgent));
}
