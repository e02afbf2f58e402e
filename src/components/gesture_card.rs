//! Gesture card - one tutorial record rendered as a bordered block

use crate::model::GestureDescription;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Rows a card needs at the default width (borders, description, image line)
pub const CARD_HEIGHT: u16 = 7;

/// Borrowed view of a gesture record
#[derive(Debug, Clone, Copy)]
pub struct GestureCard<'a> {
    gesture: &'a GestureDescription,
}

impl<'a> GestureCard<'a> {
    pub fn new(gesture: &'a GestureDescription) -> Self {
        Self { gesture }
    }

    fn description(&self) -> Line<'a> {
        Line::from(Span::styled(
            self.gesture.description.as_str(),
            Style::default().fg(Color::White),
        ))
    }

    fn image_line(&self) -> Line<'a> {
        Line::from(vec![
            Span::styled("image ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                self.gesture.image_url.as_str(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::ITALIC),
            ),
        ])
    }
}

impl Widget for GestureCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(255, 140, 0)))
            .title(format!(" {} ", self.gesture.name))
            .title_style(
                Style::default()
                    .fg(Color::Rgb(255, 140, 0))
                    .add_modifier(Modifier::BOLD),
            );
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 {
            return;
        }

        // The image reference owns the bottom row; the description is clipped above it
        let [text_area, image_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

        Paragraph::new(self.description())
            .wrap(Wrap { trim: true })
            .render(text_area, buf);
        Paragraph::new(self.image_line()).render(image_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(gesture: &GestureDescription, width: u16) -> String {
        let area = Rect::new(0, 0, width, CARD_HEIGHT);
        let mut buf = Buffer::empty(area);
        GestureCard::new(gesture).render(area, &mut buf);
        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buf[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_card_shows_name_description_and_image() {
        let gesture = GestureDescription::new(
            "Draw",
            "Hold your first finger upright to Draw.",
            "/images/draw.png",
        );
        let text = rendered(&gesture, 60);
        assert!(text.contains(" Draw "));
        assert!(text.contains("Hold your first finger upright to Draw."));
        assert!(text.contains("/images/draw.png"));
    }

    #[test]
    fn test_card_rendering_is_deterministic() {
        let gesture = GestureDescription::new("Erase", "Two fingers up.", "/images/erase.png");
        assert_eq!(rendered(&gesture, 40), rendered(&gesture, 40));
    }

    #[test]
    fn test_long_description_keeps_image_line() {
        let gesture = GestureDescription::new(
            "Confirm",
            &"Hold an open palm towards the camera and keep it still. ".repeat(4),
            "/images/confirm.png",
        );
        let text = rendered(&gesture, 40);
        assert!(text.contains("/images/confirm.png"));
        assert!(text.contains("Hold an open palm"));
    }

    #[test]
    fn test_collapsed_card_does_not_panic() {
        let gesture = GestureDescription::new("Draw", "Finger up.", "/images/draw.png");
        let area = Rect::new(0, 0, 10, 2);
        let mut buf = Buffer::empty(area);
        GestureCard::new(&gesture).render(area, &mut buf);
    }
}
