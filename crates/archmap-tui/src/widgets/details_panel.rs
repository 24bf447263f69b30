//! Node details card
//!
//! Shows the active node's title, description and key features, or the
//! placeholder text when nothing is selected.

use archmap_app::DetailsView;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::{icons::IconSet, palette, styles};

pub struct DetailsPanel<'a> {
    details: DetailsView<'a>,
    icons: IconSet,
}

impl<'a> DetailsPanel<'a> {
    pub fn new(details: DetailsView<'a>, icons: IconSet) -> Self {
        Self { details, icons }
    }

    fn lines(&self) -> Vec<Line<'a>> {
        match self.details {
            DetailsView::Record(record) => {
                let mut lines = vec![
                    Line::from(Span::styled(record.title, styles::text_bright_bold())),
                    Line::default(),
                    Line::from(Span::styled(record.description, styles::text_secondary())),
                    Line::default(),
                    Line::from(Span::styled(
                        "KEY FEATURES",
                        styles::heading(palette::ACCENT),
                    )),
                ];
                lines.extend(record.features.iter().map(|feature| {
                    Line::from(vec![
                        Span::styled(
                            format!("{} ", self.icons.bullet()),
                            styles::heading(palette::ACCENT_DIM),
                        ),
                        Span::styled(*feature, styles::text_primary()),
                    ])
                }));
                lines
            }
            DetailsView::Placeholder { title, text } => vec![
                Line::from(Span::styled(title, styles::text_bright_bold())),
                Line::default(),
                Line::from(Span::styled(text, styles::text_muted())),
            ],
        }
    }
}

impl Widget for DetailsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let selected = matches!(self.details, DetailsView::Record(_));
        let title = format!(" {} Details ", self.icons.clipboard());
        let block = styles::glass_block(selected).title(Span::styled(title, styles::text_secondary()));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.is_empty() {
            return;
        }

        Paragraph::new(self.lines())
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use archmap_app::config::IconMode;
    use archmap_core::{ContentTable, NodeId};

    fn render(details: DetailsView<'_>) -> TestTerminal {
        let mut term = TestTerminal::with_size(60, 20);
        let panel = DetailsPanel::new(details, IconSet::new(IconMode::Unicode));
        term.render_widget(panel, term.area());
        term
    }

    #[test]
    fn test_placeholder() {
        let term = render(DetailsView::Placeholder {
            title: "Select a Node",
            text: "Click on any node",
        });

        assert!(term.buffer_contains("Select a Node"));
        assert!(term.buffer_contains("Click on any node"));
        assert!(!term.buffer_contains("KEY FEATURES"));
    }

    #[test]
    fn test_record_shows_title_and_features() {
        let record = ContentTable::builtin().get(NodeId::Stripe);
        let term = render(DetailsView::Record(record));

        assert!(term.buffer_contains(record.title));
        assert!(term.buffer_contains("KEY FEATURES"));
        for feature in record.features {
            assert!(term.buffer_contains(feature), "missing feature {feature}");
        }
    }

    #[test]
    fn test_tiny_area_does_not_panic() {
        let mut term = TestTerminal::with_size(3, 2);
        let panel = DetailsPanel::new(
            DetailsView::Placeholder {
                title: "Select a Node",
                text: "x",
            },
            IconSet::new(IconMode::Unicode),
        );
        term.render_widget(panel, term.area());
    }
}
