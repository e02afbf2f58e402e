//! Tutorial page - one gesture card per catalog record
//!
//! The catalog is shared with the app and only borrowed here. Cards are laid
//! out in declaration order, keyed by position, and scroll by whole rows.

use super::{
    control_key_action, control_mouse_action, heading, nav_button, update_controls, Page,
    PageContext,
};
use crate::action::Action;
use crate::component::Component;
use crate::components::{
    card_grid, card_grid_rows, ControlSet, GestureCard, CARD_HEIGHT, CONTROL_HEIGHT,
};
use crate::model::GestureCatalog;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Paragraph, Wrap},
    Frame,
};
use std::rc::Rc;

const INTRO: &str = "Learn how to use our AI-powered virtual mouse with these simple gestures. \
    Practice each gesture to control your screen effortlessly.";

pub struct TutorialPage {
    catalog: Rc<GestureCatalog>,
    controls: ControlSet,
    scroll_rows: usize,
    /// Rows that fit on screen at the last draw, for clamping scroll
    visible_rows: usize,
    /// Grid rows at the last draw's width
    total_rows: usize,
}

impl TutorialPage {
    pub fn new(ctx: &PageContext) -> Self {
        Self {
            catalog: Rc::clone(&ctx.catalog),
            controls: ControlSet::new().with(nav_button("Go to Home", "/", &ctx.navigator)),
            scroll_rows: 0,
            visible_rows: 0,
            total_rows: 0,
        }
    }

    fn scroll_down(&mut self) {
        let max = self.total_rows.saturating_sub(self.visible_rows.max(1));
        self.scroll_rows = (self.scroll_rows + 1).min(max);
    }

    fn scroll_up(&mut self) {
        self.scroll_rows = self.scroll_rows.saturating_sub(1);
    }
}

impl Page for TutorialPage {
    fn controls(&self) -> &ControlSet {
        &self.controls
    }

    fn controls_mut(&mut self) -> &mut ControlSet {
        &mut self.controls
    }
}

impl Component for TutorialPage {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('j') | KeyCode::PageDown => Some(Action::ScrollDown),
            KeyCode::Char('k') | KeyCode::PageUp => Some(Action::ScrollUp),
            _ => control_key_action(key),
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        let action = match mouse.kind {
            MouseEventKind::ScrollDown => Some(Action::ScrollDown),
            MouseEventKind::ScrollUp => Some(Action::ScrollUp),
            _ => control_mouse_action(mouse),
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::ScrollDown => self.scroll_down(),
            Action::ScrollUp => self.scroll_up(),
            other => return Ok(update_controls(&mut self.controls, &other)),
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(CONTROL_HEIGHT),
                Constraint::Length(2),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(area);

        self.controls
            .render_row(chunks[0], frame.buffer_mut(), Alignment::Right);

        frame.render_widget(Paragraph::new(heading("Gesture Tutorial")), chunks[1]);
        frame.render_widget(
            Paragraph::new(Line::from(INTRO))
                .style(Style::default().fg(Color::Gray))
                .wrap(Wrap { trim: true }),
            chunks[2],
        );

        let grid = chunks[3];
        self.total_rows = card_grid_rows(grid, self.catalog.len());
        self.visible_rows = (grid.height as usize + 1) / (CARD_HEIGHT as usize + 1);
        self.scroll_rows = self
            .scroll_rows
            .min(self.total_rows.saturating_sub(self.visible_rows.max(1)));

        let cells = card_grid(grid, self.catalog.len(), CARD_HEIGHT, self.scroll_rows);
        for (index, cell) in cells {
            let gesture = self.catalog.get(index)?;
            frame.render_widget(GestureCard::new(gesture), cell);
        }

        Ok(())
    }
}
