//! Static information cards in the side column.

use archmap_core::panels::{BUSINESS_CASE, SETUP_STEPS, TECH_STACK};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{icons::IconSet, palette, styles};

/// "Free Account Setup" steps
pub struct SetupCard {
    icons: IconSet,
}

impl SetupCard {
    pub fn new(icons: IconSet) -> Self {
        Self { icons }
    }
}

impl Widget for SetupCard {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::card_block(format!(" {} Free Account Setup ", self.icons.rocket()));
        let inner = block.inner(area);
        block.render(area, buf);

        let lines: Vec<Line> = SETUP_STEPS
            .iter()
            .map(|step| {
                Line::from(vec![
                    Span::styled(format!("{}. ", step.step), styles::heading(palette::SETUP_ACCENT)),
                    Span::styled(step.title, styles::text_primary()),
                    Span::styled(format!(" {}", step.description), styles::text_muted()),
                ])
            })
            .collect();
        Paragraph::new(lines).render(inner, buf);
    }
}

/// "Business Use Case" summary
pub struct BusinessCard {
    icons: IconSet,
}

impl BusinessCard {
    pub fn new(icons: IconSet) -> Self {
        Self { icons }
    }
}

impl Widget for BusinessCard {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::card_block(format!(" {} Business Use Case ", self.icons.briefcase()));
        let inner = block.inner(area);
        block.render(area, buf);

        let lines: Vec<Line> = BUSINESS_CASE
            .iter()
            .map(|(label, value)| {
                Line::from(vec![
                    Span::styled(format!("{}: ", label), styles::heading(palette::BUSINESS_ACCENT)),
                    Span::styled(*value, styles::text_secondary()),
                ])
            })
            .collect();
        Paragraph::new(lines).render(inner, buf);
    }
}

/// "Tech Stack" grid, two columns
pub struct TechStackCard {
    icons: IconSet,
}

impl TechStackCard {
    pub fn new(icons: IconSet) -> Self {
        Self { icons }
    }

    fn cell(category: &'static str, tech: &'static str) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("{} ", category), styles::text_muted()),
            Span::styled(tech, styles::text_primary()),
        ])
    }
}

impl Widget for TechStackCard {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::card_block(format!(" {} Tech Stack ", self.icons.cogs()));
        let inner = block.inner(area);
        block.render(area, buf);

        let [left, right] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(inner);

        let mut left_lines = Vec::new();
        let mut right_lines = Vec::new();
        for pair in TECH_STACK.chunks(2) {
            let (category, tech) = pair[0];
            left_lines.push(Self::cell(category, tech));
            if let Some(&(category, tech)) = pair.get(1) {
                right_lines.push(Self::cell(category, tech));
            }
        }

        Paragraph::new(left_lines).render(left, buf);
        Paragraph::new(right_lines).render(right, buf);
    }
}
