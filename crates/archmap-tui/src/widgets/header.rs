//! Header bar widget
//!
//! Title, subtitle and the row of tag pills above the diagram.

use archmap_core::panels::{HEADER_TAGS, SUBTITLE, TITLE};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{palette, styles};

/// Main header showing the diagram title and tags
#[derive(Default)]
pub struct MainHeader;

impl MainHeader {
    pub fn new() -> Self {
        Self
    }

    fn title_line() -> Line<'static> {
        Line::from(vec![
            Span::raw(" "),
            Span::styled(TITLE, styles::accent_bold()),
            Span::raw("  "),
            Span::styled(SUBTITLE, styles::text_muted()),
        ])
    }

    fn tags_line() -> Line<'static> {
        let mut spans = vec![Span::raw(" ")];
        for (tag, color) in HEADER_TAGS.iter().zip(palette::TAG_COLORS) {
            spans.push(Span::styled(
                format!(" {} ", tag),
                Style::default()
                    .fg(palette::CONTRAST_FG)
                    .bg(color)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" "));
        }
        Line::from(spans)
    }
}

impl Widget for MainHeader {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let lines = if inner.height >= 2 {
            vec![Self::title_line(), Self::tags_line()]
        } else {
            vec![Self::title_line()]
        };
        Paragraph::new(lines).render(inner, buf);
    }
}
