//! Recognized gesture page
//!
//! Recognition runs on the externally hosted smart board; this page points
//! there and back to the dashboard.

use super::{
    content_column, control_key_action, control_mouse_action, heading, nav_button,
    update_controls, Page, PageContext,
};
use crate::action::Action;
use crate::component::Component;
use crate::components::{ControlSet, Hyperlink, CONTROL_HEIGHT};
use anyhow::Result;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub struct RecognizedGesturePage {
    controls: ControlSet,
    board_url: String,
}

impl RecognizedGesturePage {
    pub fn new(ctx: &PageContext) -> Self {
        let nav = &ctx.navigator;
        let controls = ControlSet::new()
            .with(Hyperlink::new("Open Smart Board", ctx.board_url.as_str()))
            .with(nav_button("Tutorial", "/tutorial", nav))
            .with(nav_button("Back to Dashboard", "/dashboard", nav));
        Self {
            controls,
            board_url: ctx.board_url.clone(),
        }
    }
}

impl Page for RecognizedGesturePage {
    fn controls(&self) -> &ControlSet {
        &self.controls
    }

    fn controls_mut(&mut self) -> &mut ControlSet {
        &mut self.controls
    }
}

impl Component for RecognizedGesturePage {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        Ok(control_key_action(key))
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        Ok(control_mouse_action(mouse))
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        Ok(update_controls(&mut self.controls, &action))
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let column = content_column(area, 80);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(2),
                Constraint::Length(7),
                Constraint::Length(1),
                Constraint::Length(CONTROL_HEIGHT),
                Constraint::Min(0),
            ])
            .split(column);

        frame.render_widget(
            Paragraph::new(heading("Recognized Gesture")).alignment(Alignment::Center),
            chunks[1],
        );

        let panel = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Waiting for the smart board…",
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Gestures are recognized by the board at",
                Style::default().fg(Color::Gray),
            )),
            Line::from(Span::styled(
                self.board_url.clone(),
                Style::default().fg(Color::Cyan),
            )),
        ];
        frame.render_widget(
            Paragraph::new(panel)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::Rgb(255, 140, 0))),
                ),
            chunks[2],
        );

        self.controls
            .render_row(chunks[4], frame.buffer_mut(), Alignment::Center);
        Ok(())
    }
}
