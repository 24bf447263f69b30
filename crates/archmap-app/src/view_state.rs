//! View state: which node is active and which sections are expanded.
//!
//! Every operation here is total. The active node is a [`NodeId`], so it is
//! always a key of the content table.

use archmap_core::panels::{DETAILS_PLACEHOLDER_TEXT, DETAILS_PLACEHOLDER_TITLE};
use archmap_core::{diagram, ContentTable, NodeId, NodeRecord, SectionFlags, SectionId};

/// Selection and expand/collapse state of the mind map
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    active_node: Option<NodeId>,
    expanded_sections: SectionFlags,
}

/// What the details panel shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailsView<'a> {
    Record(&'a NodeRecord),
    Placeholder {
        title: &'static str,
        text: &'static str,
    },
}

impl DetailsView<'_> {
    pub fn title(&self) -> &str {
        match self {
            DetailsView::Record(record) => record.title,
            DetailsView::Placeholder { title, .. } => *title,
        }
    }
}

impl ViewState {
    /// No active node, every section expanded
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_node(&self) -> Option<NodeId> {
        self.active_node
    }

    /// Click on a node: select it, or deselect if it is already active
    pub fn select_node(&mut self, id: NodeId) {
        self.active_node = if self.active_node == Some(id) {
            None
        } else {
            Some(id)
        };
    }

    /// Resolve a string key and select it; unknown keys leave the state untouched
    pub fn select_key(&mut self, key: &str) -> bool {
        match NodeId::parse(key) {
            Some(id) => {
                self.select_node(id);
                true
            }
            None => false,
        }
    }

    pub fn clear_selection(&mut self) {
        self.active_node = None;
    }

    pub fn is_expanded(&self, section: SectionId) -> bool {
        self.expanded_sections.get(section)
    }

    pub fn expanded_sections(&self) -> &SectionFlags {
        &self.expanded_sections
    }

    /// Flip one section's flag, returning the new value
    pub fn toggle_section(&mut self, section: SectionId) -> bool {
        self.expanded_sections.flip(section)
    }

    pub fn set_expanded(&mut self, section: SectionId, expanded: bool) {
        self.expanded_sections.set(section, expanded);
    }

    pub fn expand_all(&mut self) {
        self.expanded_sections = SectionFlags::all(true);
    }

    /// A node is drawn (and clickable) only while its section is expanded
    pub fn is_node_visible(&self, id: NodeId) -> bool {
        self.is_expanded(diagram::node(id).section)
    }

    /// Visible nodes in reading order
    pub fn visible_nodes(&self) -> Vec<NodeId> {
        diagram::reading_order()
            .into_iter()
            .filter(|id| self.is_node_visible(*id))
            .collect()
    }

    /// Details panel content for the current selection
    pub fn details<'a>(&self, table: &'a ContentTable) -> DetailsView<'a> {
        match self.active_node {
            Some(id) => DetailsView::Record(table.get(id)),
            None => DetailsView::Placeholder {
                title: DETAILS_PLACEHOLDER_TITLE,
                text: DETAILS_PLACEHOLDER_TEXT,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> &'static ContentTable {
        ContentTable::builtin()
    }

    #[test]
    fn test_initial_state() {
        let view = ViewState::new();
        assert_eq!(view.active_node(), None);
        for section in SectionId::ALL {
            assert!(view.is_expanded(section));
        }
        assert!(matches!(view.details(table()), DetailsView::Placeholder { .. }));
    }

    #[test]
    fn test_single_click_selects_every_node() {
        for id in NodeId::ALL {
            let mut view = ViewState::new();
            view.select_node(id);
            assert_eq!(view.active_node(), Some(id));
            match view.details(table()) {
                DetailsView::Record(record) => {
                    assert_eq!(record.title, table().get(id).title);
                    assert_eq!(record.description, table().get(id).description);
                }
                other => panic!("expected record for {id}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_double_click_deselects() {
        for id in NodeId::ALL {
            let mut view = ViewState::new();
            view.select_node(id);
            view.select_node(id);
            assert_eq!(view.active_node(), None);
            assert_eq!(view.details(table()).title(), DETAILS_PLACEHOLDER_TITLE);
        }
    }

    #[test]
    fn test_click_other_node_switches_selection() {
        let mut view = ViewState::new();
        view.select_node(NodeId::Gcp);
        view.select_node(NodeId::Stripe);
        assert_eq!(view.active_node(), Some(NodeId::Stripe));
    }

    #[test]
    fn test_stripe_scenario() {
        let mut view = ViewState::new();
        assert!(view.select_key("stripe"));
        let DetailsView::Record(record) = view.details(table()) else {
            panic!("stripe should resolve to a record");
        };
        assert_eq!(record.title, "Stripe Payments");
        assert_eq!(
            record.description,
            "Payment processing and subscription management"
        );
        assert_eq!(
            record.features.to_vec(),
            vec![
                "Subscription billing",
                "Payment intents",
                "Webhooks",
                "Customer portal"
            ]
        );
    }

    #[test]
    fn test_unknown_key_is_ignored() {
        let mut view = ViewState::new();
        view.select_node(NodeId::Ios);
        assert!(!view.select_key("windows-phone"));
        assert_eq!(view.active_node(), Some(NodeId::Ios));
    }

    #[test]
    fn test_toggle_section_only_changes_one_flag() {
        for target in SectionId::ALL {
            let mut view = ViewState::new();
            assert!(!view.toggle_section(target));
            for section in SectionId::ALL {
                assert_eq!(view.is_expanded(section), section != target);
            }
            assert!(view.toggle_section(target));
            assert_eq!(view, ViewState::new());
        }
    }

    #[test]
    fn test_toggle_section_keeps_selection() {
        let mut view = ViewState::new();
        view.select_node(NodeId::Men);
        view.toggle_section(SectionId::Users);
        assert_eq!(view.active_node(), Some(NodeId::Men));
        assert!(!view.is_node_visible(NodeId::Men));
    }

    #[test]
    fn test_visible_nodes_skip_collapsed_sections() {
        let mut view = ViewState::new();
        assert_eq!(view.visible_nodes().len(), NodeId::COUNT);

        view.toggle_section(SectionId::Cloud);
        let visible = view.visible_nodes();
        assert!(!visible.contains(&NodeId::Gcp));
        assert!(!visible.contains(&NodeId::Translation));
        assert!(visible.contains(&NodeId::Stripe));
    }

    #[test]
    fn test_expand_all() {
        let mut view = ViewState::new();
        view.toggle_section(SectionId::Core);
        view.toggle_section(SectionId::Platforms);
        view.expand_all();
        assert!(SectionId::ALL.iter().all(|s| view.is_expanded(*s)));
    }
}
