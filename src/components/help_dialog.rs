//! Help dialog component
//!
//! Lists the keyboard and mouse bindings, plus the routes that can be typed
//! into the location prompt.

use crate::action::Action;
use crate::component::Component;
use crate::model::RouteTable;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

#[derive(Debug, Default)]
pub struct HelpDialog {
    pub scroll_offset: usize,
    routes: Vec<(String, String)>,
}

impl HelpDialog {
    pub fn new(table: &RouteTable) -> Self {
        Self {
            scroll_offset: 0,
            routes: table
                .entries()
                .iter()
                .map(|e| (e.path.clone(), e.page.title().to_string()))
                .collect(),
        }
    }
}

impl Component for HelpDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => Some(Action::CloseModal),
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll_offset = self.scroll_offset.saturating_add(1);
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        frame.render_widget(Clear, area);

        let margin = 4;
        let dialog_area = Rect::new(
            area.x + margin,
            area.y + margin / 2,
            area.width.saturating_sub(margin * 2),
            area.height.saturating_sub(margin),
        );

        let content = build_help_content(&self.routes);
        let total = content.len();
        let visible_height = dialog_area.height.saturating_sub(2) as usize;

        let max_scroll = total.saturating_sub(visible_height);
        if self.scroll_offset > max_scroll {
            self.scroll_offset = max_scroll;
        }

        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Keyboard Shortcuts ")
                    .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .scroll((self.scroll_offset as u16, 0));

        frame.render_widget(paragraph, dialog_area);

        if total > visible_height && dialog_area.width > 0 && dialog_area.height > 2 {
            let mut scrollbar_state =
                ScrollbarState::new(total.saturating_sub(visible_height)).position(self.scroll_offset);

            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(Some("↑"))
                    .end_symbol(Some("↓")),
                dialog_area.inner(Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut scrollbar_state,
            );
        }

        Ok(())
    }
}

fn build_help_content(routes: &[(String, String)]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    let add_section = |lines: &mut Vec<Line<'static>>, title: &str| {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  {} ", title),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!("  {}", "─".repeat(title.len() + 2)),
            Style::default().fg(Color::DarkGray),
        )));
    };

    let add_shortcut = |lines: &mut Vec<Line<'static>>, key: &str, description: &str| {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:22}", key),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled(description.to_string(), Style::default().fg(Color::White)),
        ]));
    };

    add_section(&mut lines, "Controls");
    add_shortcut(&mut lines, "Tab / → / ↓", "Focus next control");
    add_shortcut(&mut lines, "Shift+Tab / ← / ↑", "Focus previous control");
    add_shortcut(&mut lines, "Enter / Space / click", "Activate control");

    add_section(&mut lines, "Navigation");
    add_shortcut(&mut lines, "Esc / Backspace", "Back to previous page");
    add_shortcut(&mut lines, ": / g", "Type a location");
    add_shortcut(&mut lines, "j / k", "Scroll the tutorial");

    add_section(&mut lines, "Application");
    add_shortcut(&mut lines, "?", "Show this help");
    add_shortcut(&mut lines, "q", "Quit");
    add_shortcut(&mut lines, "Ctrl+c", "Quit immediately");

    add_section(&mut lines, "Locations");
    for (path, title) in routes {
        add_shortcut(&mut lines, path, title);
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Press q, Esc, or ? to close",
        Style::default().fg(Color::DarkGray),
    )));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_lists_every_route() {
        let dialog = HelpDialog::new(&RouteTable::standard().unwrap());
        let text: Vec<String> = build_help_content(&dialog.routes)
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.to_string()).collect())
            .collect();
        for entry in RouteTable::standard().unwrap().entries() {
            assert!(
                text.iter().any(|l| l.contains(&entry.path)),
                "missing {}",
                entry.path
            );
        }
    }

    #[test]
    fn test_draw_on_tiny_terminals() {
        use ratatui::{backend::TestBackend, Terminal};

        let table = RouteTable::standard().unwrap();
        for width in 1..=8 {
            for height in 9..=19 {
                let mut dialog = HelpDialog::new(&table);
                dialog.scroll_offset = 3;
                let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
                terminal
                    .draw(|frame| {
                        let area = frame.area();
                        dialog.draw(frame, area).unwrap();
                    })
                    .unwrap();
            }
        }
    }
}
