//! Quit confirmation dialog component

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

/// Key hint, meaning and accent color of each answer
const CHOICES: [(&str, &str, Color); 2] = [
    ("y/Enter", "close", Color::Green),
    ("n/Esc", "keep browsing", Color::Red),
];

/// Asks before the shell closes; visited locations are not kept
#[derive(Debug, Default)]
pub struct QuitDialog;

impl QuitDialog {
    fn choice_line() -> Line<'static> {
        let mut spans = Vec::new();
        for (index, (keys, meaning, color)) in CHOICES.iter().enumerate() {
            if index > 0 {
                spans.push(Span::styled(" · ", Style::default().fg(Color::DarkGray)));
            }
            spans.push(Span::styled(
                format!("[{}]", keys),
                Style::default().fg(*color).add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(format!(" {}", meaning)));
        }
        Line::from(spans)
    }
}

impl Component for QuitDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('y' | 'Y') | KeyCode::Enter => Some(Action::ConfirmModal),
            KeyCode::Char('n' | 'N') | KeyCode::Esc => Some(Action::CloseModal),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let popup_area = centered_popup(area, 48, 7);
        frame.render_widget(Clear, popup_area);

        let content = vec![
            Line::from(Span::styled(
                "Close the gesture shell?",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Visited locations are forgotten on exit.",
                Style::default().fg(Color::Gray),
            )),
            Line::from(""),
            Self::choice_line(),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Yellow))
            .title(Span::styled(
                " Quit ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ));

        frame.render_widget(
            Paragraph::new(content)
                .block(block)
                .alignment(Alignment::Center),
            popup_area,
        );
        Ok(())
    }
}
