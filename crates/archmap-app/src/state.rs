//! Application state (Model in TEA pattern)

use archmap_core::prelude::*;
use archmap_core::{ContentTable, NodeId};

use crate::config::{resolve_startup, Settings};
use crate::view_state::{DetailsView, ViewState};

/// Lifecycle phase of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,

    /// Selection and section flags
    pub view: ViewState,

    /// Keyboard cursor among visible nodes; never changes the selection by itself
    pub focused_node: Option<NodeId>,

    /// Whether the terminal is reporting mouse events
    pub mouse_capture: bool,

    pub settings: Settings,

    content: &'static ContentTable,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    /// Create state from settings, applying the `[startup]` table
    pub fn with_settings(settings: Settings) -> Self {
        let startup = resolve_startup(&settings);

        let mut view = ViewState::new();
        for section in &startup.collapsed {
            view.set_expanded(*section, false);
        }
        if let Some(id) = startup.select {
            view.select_node(id);
        }

        let mut state = Self {
            phase: AppPhase::Running,
            view,
            focused_node: startup.select,
            mouse_capture: settings.ui.mouse,
            settings,
            content: ContentTable::builtin(),
        };
        state.reconcile_focus();
        state
    }

    pub fn content(&self) -> &'static ContentTable {
        self.content
    }

    /// Details panel content for the current selection
    pub fn details(&self) -> DetailsView<'static> {
        self.view.details(self.content)
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// Move the keyboard cursor one node through the visible nodes
    ///
    /// With no focus yet, the cursor lands on the active node if visible,
    /// otherwise on the first (or last) visible node.
    pub fn move_focus(&mut self, forward: bool) {
        let visible = self.view.visible_nodes();
        if visible.is_empty() {
            self.focused_node = None;
            return;
        }

        let current = self
            .focused_node
            .and_then(|id| visible.iter().position(|v| *v == id));

        let next = match current {
            Some(pos) if forward => (pos + 1) % visible.len(),
            Some(pos) => (pos + visible.len() - 1) % visible.len(),
            None => {
                let from_active = self
                    .view
                    .active_node()
                    .and_then(|id| visible.iter().position(|v| *v == id));
                match from_active {
                    Some(pos) => pos,
                    None if forward => 0,
                    None => visible.len() - 1,
                }
            }
        };

        self.focused_node = Some(visible[next]);
        trace!("Focus moved to {:?}", self.focused_node);
    }

    /// Jump the keyboard cursor to the first or last visible node
    pub fn focus_edge(&mut self, first: bool) {
        let visible = self.view.visible_nodes();
        self.focused_node = if first {
            visible.first().copied()
        } else {
            visible.last().copied()
        };
        trace!("Focus jumped to {:?}", self.focused_node);
    }

    /// Drop focus from a node that is no longer visible
    pub fn reconcile_focus(&mut self) {
        if let Some(id) = self.focused_node {
            if !self.view.is_node_visible(id) {
                self.focused_node = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use archmap_core::SectionId;

    #[test]
    fn test_new_state_defaults() {
        let state = AppState::new();
        assert_eq!(state.phase, AppPhase::Running);
        assert_eq!(state.view, ViewState::new());
        assert!(state.focused_node.is_none());
        assert!(state.mouse_capture);
        assert!(!state.should_quit());
    }

    #[test]
    fn test_with_settings_applies_startup() {
        let mut settings = Settings::default();
        settings.startup.select = Some("android".into());
        settings.startup.collapsed = vec!["users".into()];
        settings.ui.mouse = false;

        let state = AppState::with_settings(settings);
        assert_eq!(state.view.active_node(), Some(NodeId::Android));
        assert_eq!(state.focused_node, Some(NodeId::Android));
        assert!(!state.view.is_expanded(SectionId::Users));
        assert!(!state.mouse_capture);
    }

    #[test]
    fn test_startup_select_in_collapsed_section_is_not_focused() {
        let mut settings = Settings::default();
        settings.startup.select = Some("women".into());
        settings.startup.collapsed = vec!["users".into()];

        let state = AppState::with_settings(settings);
        assert_eq!(state.view.active_node(), Some(NodeId::Women));
        assert_eq!(state.focused_node, None);
    }

    #[test]
    fn test_focus_wraps_around() {
        let mut state = AppState::new();
        state.move_focus(true);
        assert_eq!(state.focused_node, Some(NodeId::AiAgent));

        state.move_focus(false);
        assert_eq!(state.focused_node, Some(NodeId::Android));

        state.move_focus(true);
        assert_eq!(state.focused_node, Some(NodeId::AiAgent));
    }

    #[test]
    fn test_focus_starts_from_active_node() {
        let mut state = AppState::new();
        state.view.select_node(NodeId::Stripe);
        state.move_focus(true);
        assert_eq!(state.focused_node, Some(NodeId::Stripe));
    }

    #[test]
    fn test_focus_skips_collapsed_sections() {
        let mut state = AppState::new();
        state.view.toggle_section(SectionId::Core);
        state.move_focus(true);
        assert_eq!(state.focused_node, Some(NodeId::SingleCoach));
    }

    #[test]
    fn test_focus_with_everything_collapsed() {
        let mut state = AppState::new();
        for section in SectionId::ALL {
            state.view.toggle_section(section);
        }
        state.move_focus(true);
        assert_eq!(state.focused_node, None);
    }

    #[test]
    fn test_focus_edge_uses_visible_nodes() {
        let mut state = AppState::new();
        state.focus_edge(false);
        assert_eq!(state.focused_node, Some(NodeId::Android));

        state.view.toggle_section(SectionId::Core);
        state.focus_edge(true);
        assert_eq!(state.focused_node, Some(NodeId::SingleCoach));

        for section in SectionId::ALL {
            state.view.set_expanded(section, false);
        }
        state.focus_edge(true);
        assert_eq!(state.focused_node, None);
    }

    #[test]
    fn test_reconcile_focus_drops_hidden_node() {
        let mut state = AppState::new();
        state.focused_node = Some(NodeId::Women);
        state.view.toggle_section(SectionId::Users);
        state.reconcile_focus();
        assert_eq!(state.focused_node, None);
    }
}
