//! Fallback page for paths without a route entry

use super::{
    content_column, control_key_action, control_mouse_action, heading, nav_button,
    update_controls, Page, PageContext,
};
use crate::action::Action;
use crate::component::Component;
use crate::components::{ControlSet, CONTROL_HEIGHT};
use crate::model::RouteTable;
use anyhow::Result;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub struct NotFoundPage {
    path: String,
    controls: ControlSet,
}

impl NotFoundPage {
    pub fn new(path: &str, ctx: &PageContext) -> Self {
        Self {
            path: path.to_string(),
            controls: ControlSet::new().with(nav_button(
                "Go to Home",
                RouteTable::ROOT,
                &ctx.navigator,
            )),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

impl Page for NotFoundPage {
    fn controls(&self) -> &ControlSet {
        &self.controls
    }

    fn controls_mut(&mut self) -> &mut ControlSet {
        &mut self.controls
    }
}

impl Component for NotFoundPage {
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
        let column = content_column(area, 72);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(area.height.saturating_sub(9) / 2),
                Constraint::Length(2),
                Constraint::Length(3),
                Constraint::Length(CONTROL_HEIGHT),
                Constraint::Min(0),
            ])
            .split(column);

        frame.render_widget(
            Paragraph::new(heading("Page not found")).alignment(Alignment::Center),
            chunks[1],
        );

        let message = vec![
            Line::from(vec![
                Span::styled("No route matches ", Style::default().fg(Color::Gray)),
                Span::styled(
                    self.path.clone(),
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled(
                "Press : to type another location or ? for the list",
                Style::default().fg(Color::DarkGray),
            )),
        ];
        frame.render_widget(
            Paragraph::new(message).alignment(Alignment::Center),
            chunks[2],
        );

        self.controls
            .render_row(chunks[3], frame.buffer_mut(), Alignment::Center);
        Ok(())
    }
}
