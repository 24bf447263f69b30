//! Scaling of the fixed diagram coordinates onto a terminal area, plus hit-testing.
//!
//! Rendering and mouse handling both go through [`DiagramGeometry`], so a
//! click lands on exactly the cells that were drawn for a node or header.
//! Where boxes overlap, the one painted last owns the cell.

use archmap_app::ViewState;
use archmap_core::diagram::{self, NODES, SECTION_LABELS};
use archmap_core::{NodeId, SectionId, CANVAS_HEIGHT, CANVAS_WIDTH};
use ratatui::layout::{Position, Rect};
use unicode_width::UnicodeWidthStr;

use crate::theme::icons;

/// Narrowest box that still fits its border and one label cell
const MIN_NODE_WIDTH: u16 = 3;

/// What a click landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Node(NodeId),
    Section(SectionId),
}

/// Maps diagram coordinates into the cells of `area`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagramGeometry {
    area: Rect,
}

impl DiagramGeometry {
    pub fn new(area: Rect) -> Self {
        Self { area }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    /// Cell for a point given as (percent of width, canvas units)
    pub fn point(&self, x_percent: u16, y: u16) -> (u16, u16) {
        let x_span = u32::from(self.area.width.saturating_sub(1));
        let y_span = u32::from(self.area.height.saturating_sub(1));
        let w = u32::from(CANVAS_WIDTH);
        let h = u32::from(CANVAS_HEIGHT);

        let col = (u32::from(x_percent.min(CANVAS_WIDTH)) * x_span + w / 2) / w;
        let row = (u32::from(y.min(CANVAS_HEIGHT)) * y_span + h / 2) / h;
        (self.area.x + col as u16, self.area.y + row as u16)
    }

    /// Box occupied by a node, clamped inside the area
    ///
    /// The width shrinks to the distance to the nearest node on the same row,
    /// so neighbours only touch once the area is too small for their labels.
    pub fn node_rect(&self, id: NodeId) -> Rect {
        let node = diagram::node(id);
        let (w, h) = node.size.cells();
        let (cx, cy) = self.point(node.x_percent, node.y);
        let w = w.min(self.row_gap(id, cx).max(MIN_NODE_WIDTH));
        self.centered(cx, cy, w, h)
    }

    /// Column distance to the closest node sharing `id`'s row
    fn row_gap(&self, id: NodeId, cx: u16) -> u16 {
        let node = diagram::node(id);
        NODES
            .iter()
            .filter(|other| other.id != id && other.y == node.y)
            .map(|other| self.point(other.x_percent, other.y).0.abs_diff(cx))
            .min()
            .unwrap_or(u16::MAX)
    }

    /// Header text for a section, with its expand marker and shortcut
    pub fn section_label_text(section: SectionId, expanded: bool) -> String {
        let marker = if expanded {
            icons::EXPANDED
        } else {
            icons::COLLAPSED
        };
        format!("{} {} [{}]", marker, section.label(), section.shortcut())
    }

    /// Row occupied by a section header
    pub fn label_rect(&self, section: SectionId, expanded: bool) -> Rect {
        let label = diagram::section_label(section);
        let text = Self::section_label_text(section, expanded);
        let width = u16::try_from(text.width()).unwrap_or(u16::MAX);
        let (cx, cy) = self.point(label.x_percent, label.y);
        self.centered(cx, cy, width, 1)
    }

    /// Resolve a click position to whatever was painted last at that cell
    ///
    /// Headers are painted before nodes, and both in the order the mind map
    /// draws them, so the search walks that order backwards.
    pub fn hit_test(&self, view: &ViewState, column: u16, row: u16) -> Option<HitTarget> {
        let pos = Position::new(column, row);
        if !self.area.contains(pos) {
            return None;
        }

        let node_hit = view
            .visible_nodes()
            .into_iter()
            .rev()
            .find(|id| self.node_rect(*id).contains(pos));
        if let Some(id) = node_hit {
            return Some(HitTarget::Node(id));
        }

        SECTION_LABELS
            .iter()
            .rev()
            .map(|label| label.section)
            .find(|s| self.label_rect(*s, view.is_expanded(*s)).contains(pos))
            .map(HitTarget::Section)
    }

    fn centered(&self, cx: u16, cy: u16, width: u16, height: u16) -> Rect {
        let w = width.min(self.area.width);
        let h = height.min(self.area.height);
        let x = cx
            .saturating_sub(w / 2)
            .clamp(self.area.x, self.area.right() - w);
        let y = cy
            .saturating_sub(h / 2)
            .clamp(self.area.y, self.area.bottom() - h);
        Rect::new(x, y, w, h)
    }
}
