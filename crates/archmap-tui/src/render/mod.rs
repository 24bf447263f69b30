//! Main render/view function (View in TEA pattern)


use super::{layout, widgets};
use archmap_app::state::AppState;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::theme::{icons::IconSet, palette};

/// Layout options derived from the UI settings
pub fn layout_options(state: &AppState) -> layout::LayoutOptions {
    layout::LayoutOptions {
        side_panels: state.settings.ui.show_side_panels,
        flow: state.settings.ui.show_flow,
    }
}

/// Screen areas for a frame of the given size
///
/// The runner calls this with the last drawn size to resolve clicks.
pub fn screen_areas(area: Rect, state: &AppState) -> layout::ScreenAreas {
    layout::create(area, layout_options(state))
}

/// Render the complete UI (View function in TEA)
///
/// Pure: reads state, never modifies it.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Fill entire terminal with deepest background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = screen_areas(area, state);
    let icons = IconSet::new(state.settings.ui.icons);

    frame.render_widget(widgets::MainHeader::new(), areas.header);
    frame.render_widget(widgets::MindMap::new(state), areas.diagram);
    frame.render_widget(
        widgets::DetailsPanel::new(state.details(), icons),
        areas.details,
    );

    if let Some(setup) = areas.setup {
        frame.render_widget(widgets::SetupCard::new(icons), setup);
    }
    if let Some(business) = areas.business {
        frame.render_widget(widgets::BusinessCard::new(icons), business);
    }
    if let Some(tech) = areas.tech {
        frame.render_widget(widgets::TechStackCard::new(icons), tech);
    }
    if let Some(flow) = areas.flow {
        frame.render_widget(widgets::FlowStrip::new(icons), flow);
    }

    frame.render_widget(widgets::Footer::new(state.mouse_capture), areas.footer);
}

/// Plain-text dump of a buffer, one line per row with trailing blanks removed
pub fn buffer_to_text(buffer: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buffer.area.height {
        let mut line = String::new();
        for x in 0..buffer.area.width {
            line.push_str(buffer[(x, y)].symbol());
        }
        result.push_str(line.trim_end());
        result.push('\n');
    }
    result
}
