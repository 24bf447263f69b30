//! Keybinding hints on the bottom row.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

const HINTS: [(&str, &str); 6] = [
    ("Tab/\u{2190}\u{2192}", "focus"),
    ("Enter", "select"),
    ("Esc", "clear"),
    ("1-6", "sections"),
    ("e", "expand all"),
    ("q", "quit"),
];

pub struct Footer {
    mouse_capture: bool,
}

impl Footer {
    pub fn new(mouse_capture: bool) -> Self {
        Self { mouse_capture }
    }
}

impl Widget for Footer {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::raw(" ")];
        for (key, action) in HINTS {
            spans.push(Span::styled(key, styles::keybinding()));
            spans.push(Span::styled(format!(" {}  ", action), styles::text_muted()));
        }

        let mouse = if self.mouse_capture { "on" } else { "off" };
        spans.push(Span::styled("m", styles::keybinding()));
        spans.push(Span::styled(format!(" mouse:{}", mouse), styles::text_muted()));

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
