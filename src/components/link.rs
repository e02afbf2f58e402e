//! Hyperlink - exit point to an externally hosted page

use crate::action::Action;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hyperlink {
    pub label: String,
    pub url: String,
}

impl Hyperlink {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }

    /// Activation leaves the application; the App performs the hand-off
    pub fn activate(&self) -> Action {
        Action::OpenLink(self.url.clone())
    }

    pub fn preferred_width(&self) -> u16 {
        UnicodeWidthStr::width(self.label.as_str()) as u16 + 6
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, focused: bool) {
        let color = if focused { Color::Yellow } else { Color::Cyan };
        let line = Line::from(vec![
            Span::styled(
                self.label.as_str(),
                Style::default()
                    .fg(color)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ),
            Span::styled(" ↗", Style::default().fg(color)),
        ]);

        Paragraph::new(line)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color)),
            )
            .render(area, buf);
    }
}
