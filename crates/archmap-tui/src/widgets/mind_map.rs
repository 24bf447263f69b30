//! The mind map canvas: connection lines, section headers and node boxes.
//!
//! Drawn in three passes so that boxes sit on top of the lines running into
//! their centres.

use archmap_app::AppState;
use archmap_core::diagram::{self, Connection, DiagramNode, CONNECTIONS, SECTION_LABELS};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{self, Canvas, Context},
        Block, BorderType, Clear, Paragraph, Widget,
    },
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::geometry::DiagramGeometry;
use crate::theme::{icons::IconSet, palette, styles};

const DASH_ON: f64 = 1.5;
const DASH_OFF: f64 = 1.0;

/// Interactive diagram container
pub struct MindMap<'a> {
    state: &'a AppState,
    icons: IconSet,
}

impl<'a> MindMap<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self {
            state,
            icons: IconSet::new(state.settings.ui.icons),
        }
    }

    fn render_connections(&self, geometry: &DiagramGeometry, buf: &mut Buffer) {
        let area = geometry.area();
        let view = &self.state.view;

        let visible: Vec<&Connection> = CONNECTIONS
            .iter()
            .filter(|c| view.is_node_visible(c.from) && view.is_node_visible(c.to))
            .collect();

        let to_canvas = |id| {
            let rect = geometry.node_rect(id);
            let cx = f64::from(rect.x - area.x) + f64::from(rect.width) / 2.0;
            let cy = f64::from(rect.y - area.y) + f64::from(rect.height) / 2.0;
            (cx, f64::from(area.height) - cy)
        };

        Canvas::default()
            .marker(Marker::Braille)
            .background_color(palette::CANVAS_BG)
            .x_bounds([0.0, f64::from(area.width)])
            .y_bounds([0.0, f64::from(area.height)])
            .paint(|ctx| {
                for connection in &visible {
                    let from = to_canvas(connection.from);
                    let to = to_canvas(connection.to);
                    let color = palette::rgb(connection.color);
                    if connection.dashed {
                        draw_dashed(ctx, from, to, color);
                    } else {
                        ctx.draw(&canvas::Line::new(from.0, from.1, to.0, to.1, color));
                    }
                }
            })
            .render(area, buf);
    }

    fn render_section_labels(&self, geometry: &DiagramGeometry, buf: &mut Buffer) {
        for label in &SECTION_LABELS {
            let expanded = self.state.view.is_expanded(label.section);
            let rect = geometry.label_rect(label.section, expanded);
            if rect.is_empty() {
                continue;
            }

            let style = if expanded {
                styles::heading(palette::rgb(label.color))
            } else {
                styles::text_muted()
            };
            let text = DiagramGeometry::section_label_text(label.section, expanded);
            buf.set_stringn(rect.x, rect.y, text, usize::from(rect.width), style);
        }
    }

    fn render_node(&self, node: &DiagramNode, rect: Rect, buf: &mut Buffer) {
        let active = self.state.view.active_node() == Some(node.id);
        let focused = self.state.focused_node == Some(node.id);

        let (border_type, border_style) = if active {
            (
                BorderType::Thick,
                Style::default()
                    .fg(palette::TEXT_BRIGHT)
                    .add_modifier(Modifier::BOLD),
            )
        } else if focused {
            (
                BorderType::Rounded,
                Style::default().fg(palette::KEY_HINT),
            )
        } else {
            (
                BorderType::Rounded,
                Style::default().fg(palette::rgb(node.fill.1)),
            )
        };

        Clear.render(rect, buf);
        let block = Block::bordered()
            .border_type(border_type)
            .border_style(border_style)
            .style(Style::default().bg(palette::rgb(node.fill.0)));
        let inner = block.inner(rect);
        block.render(rect, buf);

        if inner.is_empty() {
            return;
        }

        let text = fit_label(self.icons.node(node.icon), node.label, inner.width);
        let mut style = styles::text_bright_bold();
        if active {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        Paragraph::new(Line::from(Span::styled(text, style)))
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}

impl Widget for MindMap<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(" {} Mind Map ", self.icons.sitemap());
        let block = styles::glass_block(self.state.focused_node.is_some())
            .title(Span::styled(title, styles::text_secondary()))
            .style(Style::default().bg(palette::CANVAS_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.is_empty() {
            return;
        }

        let geometry = DiagramGeometry::new(inner);
        self.render_connections(&geometry, buf);
        self.render_section_labels(&geometry, buf);

        for id in self.state.view.visible_nodes() {
            self.render_node(diagram::node(id), geometry.node_rect(id), buf);
        }
    }
}

fn draw_dashed(
    ctx: &mut Context<'_>,
    from: (f64, f64),
    to: (f64, f64),
    color: ratatui::style::Color,
) {
    let (dx, dy) = (to.0 - from.0, to.1 - from.1);
    let length = dx.hypot(dy);
    if length == 0.0 {
        return;
    }

    let (ux, uy) = (dx / length, dy / length);
    let mut start = 0.0;
    while start < length {
        let end = (start + DASH_ON).min(length);
        ctx.draw(&canvas::Line::new(
            from.0 + ux * start,
            from.1 + uy * start,
            from.0 + ux * end,
            from.1 + uy * end,
            color,
        ));
        start = end + DASH_OFF;
    }
}

/// Fit `icon label` into `width` cells
///
/// Drops the icon first, then truncates the label with an ellipsis.
pub(crate) fn fit_label(icon: &str, label: &str, width: u16) -> String {
    let width = usize::from(width);
    let full = format!("{} {}", icon, label);
    if full.width() <= width {
        return full;
    }
    if label.width() <= width {
        return label.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in label.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('\u{2026}');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use archmap_core::{NodeId, SectionId};

    fn render(state: &AppState, width: u16, height: u16) -> TestTerminal {
        let mut term = TestTerminal::with_size(width, height);
        term.render_widget(MindMap::new(state), term.area());
        term
    }

    #[test]
    fn test_fit_label_keeps_icon_when_room() {
        assert_eq!(fit_label("◆", "Men", 10), "◆ Men");
    }

    #[test]
    fn test_fit_label_drops_icon_first() {
        assert_eq!(fit_label("◆", "Translation", 11), "Translation");
    }

    #[test]
    fn test_fit_label_truncates_with_ellipsis() {
        let fitted = fit_label("◆", "Translation", 6);
        assert_eq!(fitted, "Trans\u{2026}");
        assert_eq!(fitted.width(), 6);
    }

    #[test]
    fn test_fit_label_zero_width() {
        assert_eq!(fit_label("◆", "Stripe", 0), "");
    }

    #[test]
    fn test_renders_all_labels_when_expanded() {
        let state = AppState::new();
        let term = render(&state, 100, 34);

        let geometry = DiagramGeometry::new(crate::layout::inner(term.area()));
        let icons = IconSet::new(state.settings.ui.icons);
        for id in NodeId::ALL {
            let node = diagram::node(id);
            let inner_width = geometry.node_rect(id).width - 2;
            let text = fit_label(icons.node(node.icon), node.label, inner_width);
            assert!(term.buffer_contains(&text), "missing node label {text}");
        }
        for section in SectionId::ALL {
            assert!(
                term.buffer_contains(section.label()),
                "missing section {section}"
            );
        }
    }

    #[test]
    fn test_collapsed_section_hides_nodes_but_keeps_header() {
        let mut state = AppState::new();
        state.view.toggle_section(SectionId::Payments);
        let term = render(&state, 100, 34);

        assert!(!term.buffer_contains(diagram::node(NodeId::Stripe).label));
        assert!(term.buffer_contains("\u{25b8} PAYMENTS"));
        assert!(term.buffer_contains("\u{25be} CLOUD"));
    }

    #[test]
    fn test_active_node_uses_thick_border() {
        let mut state = AppState::new();
        state.view.select_node(NodeId::Gcp);
        let term = render(&state, 100, 34);

        let inner = crate::layout::inner(term.area());
        let rect = DiagramGeometry::new(inner).node_rect(NodeId::Gcp);
        assert_eq!(term.cell_at(rect.x, rect.y), Some("\u{250f}"));
    }

    #[test]
    fn test_tiny_area_does_not_panic() {
        let state = AppState::new();
        render(&state, 6, 3);
        render(&state, 2, 2);
    }
}
