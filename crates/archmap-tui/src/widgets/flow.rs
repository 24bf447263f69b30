//! System architecture flow strip below the diagram.

use archmap_core::panels::{FlowItem, ARCHITECTURE_FLOW};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::{icons::IconSet, palette, styles};

pub struct FlowStrip {
    icons: IconSet,
}

impl FlowStrip {
    pub fn new(icons: IconSet) -> Self {
        Self { icons }
    }

    fn line() -> Line<'static> {
        let spans: Vec<Span> = ARCHITECTURE_FLOW
            .iter()
            .map(|item| match item {
                FlowItem::Stage { label, color } => Span::styled(
                    format!(" {} ", label),
                    Style::default()
                        .fg(palette::CONTRAST_FG)
                        .bg(palette::rgb(*color))
                        .add_modifier(Modifier::BOLD),
                ),
                FlowItem::Separator(symbol) => {
                    Span::styled(format!(" {} ", symbol), styles::text_muted())
                }
            })
            .collect();
        Line::from(spans)
    }
}

impl Widget for FlowStrip {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(" {} System Architecture Flow ", self.icons.sitemap());
        let block = styles::card_block(title);
        let inner = block.inner(area);
        block.render(area, buf);

        Paragraph::new(Self::line())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use archmap_app::config::IconMode;

    #[test]
    fn test_flow_renders_stages_in_order() {
        let mut term = TestTerminal::with_size(160, 3);
        term.render_widget(FlowStrip::new(IconSet::new(IconMode::Unicode)), term.area());

        let row = term.line(1);
        let positions: Vec<usize> = ARCHITECTURE_FLOW
            .iter()
            .filter_map(|item| match item {
                FlowItem::Stage { label, .. } => row.find(label),
                FlowItem::Separator(_) => None,
            })
            .collect();

        assert_eq!(positions.len(), 7, "row was {row:?}");
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(row.contains("\u{2194}"));
    }

    #[test]
    fn test_flow_title() {
        let mut term = TestTerminal::with_size(160, 3);
        term.render_widget(FlowStrip::new(IconSet::new(IconMode::Unicode)), term.area());
        assert!(term.buffer_contains("System Architecture Flow"));
    }
}
