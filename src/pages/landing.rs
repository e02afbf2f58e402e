//! Landing page mounted at `/`
//!
//! `LandingStyle::Hero` shows the headline, typed phrases and the smart board
//! link; `LandingStyle::Minimal` shows only the sign up / sign in controls.

use super::{
    content_column, control_key_action, control_mouse_action, heading, nav_button,
    update_controls, Page, PageContext,
};
use crate::action::Action;
use crate::component::Component;
use crate::components::{ControlSet, Hyperlink, TypedText, CONTROL_HEIGHT};
use crate::config::LandingStyle;
use anyhow::Result;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Paragraph, Wrap},
    Frame,
};

const PHRASES: &[&str] = &[
    "Draw in the air.",
    "Erase with two fingers.",
    "Turn pages with a wave.",
    "Your hand is the mouse.",
];

pub struct LandingPage {
    style: LandingStyle,
    controls: ControlSet,
    typed: TypedText,
}

impl LandingPage {
    pub fn new(ctx: &PageContext) -> Self {
        let nav = &ctx.navigator;
        let mut controls = ControlSet::new()
            .with(nav_button("Sign Up", "/signup", nav))
            .with(nav_button("Sign In", "/signin", nav));

        if ctx.landing_style == LandingStyle::Hero {
            controls.push(nav_button("Tutorial", "/tutorial", nav));
            controls.push(Hyperlink::new("Open Smart Board", ctx.board_url.as_str()));
        }

        Self {
            style: ctx.landing_style,
            controls,
            typed: TypedText::new(PHRASES),
        }
    }

    fn draw_hero(&mut self, frame: &mut Frame, area: Rect) {
        let column = content_column(area, 90);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(area.height.saturating_sub(12) / 2),
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Length(3),
                Constraint::Length(CONTROL_HEIGHT),
                Constraint::Min(0),
            ])
            .split(column);

        frame.render_widget(
            Paragraph::new(heading("Gesture Flow")).alignment(Alignment::Center),
            chunks[1],
        );

        self.typed.render(chunks[2], frame.buffer_mut());

        let tagline = Paragraph::new(Line::from(
            "Control your screen with simple hand gestures, powered by an AI virtual mouse.",
        ))
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
        frame.render_widget(tagline, chunks[3]);

        self.controls
            .render_row(chunks[4], frame.buffer_mut(), Alignment::Center);
    }

    fn draw_minimal(&mut self, frame: &mut Frame, area: Rect) {
        let row = Rect::new(
            area.x,
            area.y + 1,
            area.width.saturating_sub(2),
            CONTROL_HEIGHT.min(area.height),
        );
        self.controls
            .render_row(row, frame.buffer_mut(), Alignment::Right);
    }
}

impl Page for LandingPage {
    fn controls(&self) -> &ControlSet {
        &self.controls
    }

    fn controls_mut(&mut self) -> &mut ControlSet {
        &mut self.controls
    }
}

impl Component for LandingPage {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        Ok(control_key_action(key))
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        Ok(control_mouse_action(mouse))
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if action == Action::Tick {
            if self.style == LandingStyle::Hero {
                self.typed.advance();
            }
            return Ok(None);
        }
        Ok(update_controls(&mut self.controls, &action))
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        match self.style {
            LandingStyle::Hero => self.draw_hero(frame, area),
            LandingStyle::Minimal => self.draw_minimal(frame, area),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::testing::{context, render_text};

    #[test]
    fn test_sign_up_issues_signup_intent() {
        let ctx = context();
        let mut page = LandingPage::new(&ctx);
        assert_eq!(page.controls_mut().activate_by_label("Sign Up"), None);
        let paths: Vec<String> = ctx.navigator.drain().into_iter().map(|i| i.path).collect();
        assert_eq!(paths, vec!["/signup"]);
    }

    #[test]
    fn test_hero_variant_controls() {
        let page = LandingPage::new(&context());
        assert_eq!(
            page.controls().labels(),
            vec!["Sign Up", "Sign In", "Tutorial", "Open Smart Board"]
        );
    }

    #[test]
    fn test_minimal_variant_controls() {
        let mut ctx = context();
        ctx.landing_style = LandingStyle::Minimal;
        let page = LandingPage::new(&ctx);
        assert_eq!(page.controls().labels(), vec!["Sign Up", "Sign In"]);
    }

    #[test]
    fn test_board_link_leaves_application() {
        let ctx = context();
        let mut page = LandingPage::new(&ctx);
        assert_eq!(
            page.controls_mut().activate_by_label("Open Smart Board"),
            Some(Action::OpenLink("http://board.local/SmartBoard".to_string()))
        );
        assert!(!ctx.navigator.has_pending());
    }

    #[test]
    fn test_tick_advances_typed_text() {
        let mut page = LandingPage::new(&context());
        page.update(Action::Tick).unwrap();
        assert_eq!(page.typed.visible(), "D");
    }

    #[test]
    fn test_hero_renders_brand_and_controls() {
        let mut page = LandingPage::new(&context());
        let text = render_text(&mut page, 100, 30);
        assert!(text.contains("Gesture Flow"));
        assert!(text.contains("Sign Up"));
        assert!(text.contains("Open Smart Board"));
    }
}
