//! Dashboard page

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
    style::{Color, Style},
    text::Line,
    widgets::{Paragraph, Wrap},
    Frame,
};

pub struct DashboardPage {
    controls: ControlSet,
}

impl DashboardPage {
    pub fn new(ctx: &PageContext) -> Self {
        let nav = &ctx.navigator;
        let controls = ControlSet::new()
            .with(nav_button("Tutorial", "/tutorial", nav))
            .with(nav_button("Recognized Gesture", "/recognized_gesture", nav))
            .with(Hyperlink::new("Open Smart Board", ctx.board_url.as_str()))
            .with(nav_button("Sign Out", "/", nav));
        Self { controls }
    }
}

impl Page for DashboardPage {
    fn controls(&self) -> &ControlSet {
        &self.controls
    }

    fn controls_mut(&mut self) -> &mut ControlSet {
        &mut self.controls
    }
}

impl Component for DashboardPage {
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
        let column = content_column(area, 96);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(2),
                Constraint::Length(4),
                Constraint::Length(CONTROL_HEIGHT),
                Constraint::Min(0),
            ])
            .split(column);

        frame.render_widget(Paragraph::new(heading("Dashboard")), chunks[1]);

        let intro = vec![
            Line::from("You're signed in. Learn the gestures in the tutorial, then open the"),
            Line::from("smart board to draw, erase and turn pages with your hand."),
        ];
        frame.render_widget(
            Paragraph::new(intro)
                .style(Style::default().fg(Color::Gray))
                .wrap(Wrap { trim: true }),
            chunks[2],
        );

        self.controls
            .render_row(chunks[3], frame.buffer_mut(), Alignment::Left);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::testing::context;

    #[test]
    fn test_dashboard_targets() {
        let ctx = context();
        let mut page = DashboardPage::new(&ctx);
        page.controls_mut().activate_by_label("Tutorial");
        page.controls_mut().activate_by_label("Recognized Gesture");
        page.controls_mut().activate_by_label("Sign Out");
        let paths: Vec<String> = ctx.navigator.drain().into_iter().map(|i| i.path).collect();
        assert_eq!(paths, vec!["/tutorial", "/recognized_gesture", "/"]);
    }

    #[test]
    fn test_dashboard_board_link() {
        let ctx = context();
        let mut page = DashboardPage::new(&ctx);
        assert!(matches!(
            page.controls_mut().activate_by_label("Open Smart Board"),
            Some(Action::OpenLink(_))
        ));
    }
}
