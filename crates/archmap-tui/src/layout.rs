//! Screen layout definitions for the TUI
//!
//! The same areas are computed for drawing and for resolving mouse clicks,
//! so both must go through [`create`].

use ratatui::layout::{Constraint, Layout, Rect};

/// Below this width the details column stacks under the diagram
pub const WIDE_LAYOUT_MIN_WIDTH: u16 = 90;

/// Width of the right-hand column in the wide layout
pub const SIDE_COLUMN_WIDTH: u16 = 38;

const HEADER_HEIGHT: u16 = 4;
const FLOW_HEIGHT: u16 = 3;
const FOOTER_HEIGHT: u16 = 1;
const SETUP_HEIGHT: u16 = 7;
const BUSINESS_HEIGHT: u16 = 6;
const TECH_HEIGHT: u16 = 5;
const STACKED_DETAILS_HEIGHT: u16 = 9;

/// Which optional areas to lay out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutOptions {
    pub side_panels: bool,
    pub flow: bool,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            side_panels: true,
            flow: true,
        }
    }
}

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    /// Title, subtitle and tags
    pub header: Rect,

    /// Bordered container around the diagram
    pub diagram: Rect,

    /// Node details card
    pub details: Rect,

    /// Info cards, only in the wide layout with side panels enabled
    pub setup: Option<Rect>,
    pub business: Option<Rect>,
    pub tech: Option<Rect>,

    /// Architecture flow strip
    pub flow: Option<Rect>,

    /// Keybinding hints
    pub footer: Rect,
}

impl ScreenAreas {
    /// Drawable area inside the diagram border
    pub fn diagram_inner(&self) -> Rect {
        inner(self.diagram)
    }
}

/// Area inside a one-cell border
pub fn inner(area: Rect) -> Rect {
    Rect::new(
        area.x.saturating_add(1),
        area.y.saturating_add(1),
        area.width.saturating_sub(2),
        area.height.saturating_sub(2),
    )
}

/// Create the main screen layout
pub fn create(area: Rect, options: LayoutOptions) -> ScreenAreas {
    let flow_height = if options.flow { FLOW_HEIGHT } else { 0 };

    let [header, body, flow, footer] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(flow_height),
        Constraint::Length(FOOTER_HEIGHT),
    ])
    .areas(area);

    let flow = options.flow.then_some(flow);

    if area.width >= WIDE_LAYOUT_MIN_WIDTH {
        let [diagram, side] =
            Layout::horizontal([Constraint::Min(40), Constraint::Length(SIDE_COLUMN_WIDTH)])
                .areas(body);

        if options.side_panels {
            let [details, setup, business, tech] = Layout::vertical([
                Constraint::Min(6),
                Constraint::Length(SETUP_HEIGHT),
                Constraint::Length(BUSINESS_HEIGHT),
                Constraint::Length(TECH_HEIGHT),
            ])
            .areas(side);

            ScreenAreas {
                header,
                diagram,
                details,
                setup: Some(setup),
                business: Some(business),
                tech: Some(tech),
                flow,
                footer,
            }
        } else {
            ScreenAreas {
                header,
                diagram,
                details: side,
                setup: None,
                business: None,
                tech: None,
                flow,
                footer,
            }
        }
    } else {
        // Narrow terminals: details card under the diagram, no info cards
        let [diagram, details] = Layout::vertical([
            Constraint::Min(8),
            Constraint::Length(STACKED_DETAILS_HEIGHT),
        ])
        .areas(body);

        ScreenAreas {
            header,
            diagram,
            details,
            setup: None,
            business: None,
            tech: None,
            flow,
            footer,
        }
    }
}
