//! Location prompt - type a path and open it

use crate::components::centered_popup;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Draw the prompt with the text typed so far
pub fn draw_location_prompt(frame: &mut Frame, area: Rect, input: &str) {
    let popup_area = centered_popup(area, 56, 5);
    frame.render_widget(Clear, popup_area);

    let content = vec![
        Line::from(vec![
            Span::styled("Go to ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                input.to_string(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::styled("▌", Style::default().fg(Color::Yellow)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Enter to open, Esc to cancel",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Location ")
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
    );

    frame.render_widget(paragraph, popup_area);
}
