//! Message processing: runs `update` to a fixed point and resolves clicks

use archmap_app::message::Message;
use archmap_app::state::AppState;
use archmap_app::{handler, UpdateAction};
use archmap_core::prelude::*;
use ratatui::layout::Rect;

use crate::geometry::{DiagramGeometry, HitTarget};
use crate::render;

/// Process a message through the TEA update loop
///
/// Follow-up messages are processed immediately; actions are returned for
/// the event loop to perform in order.
pub fn process_message(state: &mut AppState, message: Message) -> Vec<UpdateAction> {
    let mut actions = Vec::new();
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);
        actions.extend(result.action);
        msg = result.message;
    }
    actions
}

/// Translate a left click on a frame of size `area` into a message
pub fn resolve_click(state: &AppState, area: Rect, column: u16, row: u16) -> Option<Message> {
    let areas = render::screen_areas(area, state);
    let geometry = DiagramGeometry::new(areas.diagram_inner());

    let message = match geometry.hit_test(&state.view, column, row)? {
        HitTarget::Node(id) => Message::SelectNode(id),
        HitTarget::Section(section) => Message::ToggleSection(section),
    };
    trace!("Click at ({}, {}) -> {:?}", column, row, message);
    Some(message)
}
