//! Account pages: sign up, sign in, forgot password, verification, reset
//!
//! One page contract parameterized by the flow. The submit control hands the
//! flow to the authentication collaborator; a redirect in the reply becomes a
//! navigation intent and a failure is shown on the page.

use super::{
    content_column, control_key_action, control_mouse_action, heading, nav_button,
    update_controls, Page, PageContext,
};
use crate::action::Action;
use crate::component::Component;
use crate::components::{Button, ControlSet, CONTROL_HEIGHT};
use crate::services::AuthFlow;
use anyhow::Result;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use std::cell::RefCell;
use std::rc::Rc;

/// Message shown after a submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Error(String),
}

struct FlowContent {
    title: &'static str,
    blurb: &'static str,
    submit: &'static str,
    links: &'static [(&'static str, &'static str)],
}

fn flow_content(flow: AuthFlow) -> FlowContent {
    match flow {
        AuthFlow::SignUp => FlowContent {
            title: "Create your account",
            blurb: "Sign up to save your boards and practise gestures with the tutorial.",
            submit: "Create Account",
            links: &[("Sign In Instead", "/signin"), ("Home", "/")],
        },
        AuthFlow::SignIn => FlowContent {
            title: "Welcome back",
            blurb: "Sign in to reach your dashboard and the smart board.",
            submit: "Sign In",
            links: &[
                ("Forgot Password?", "/forgotpassword"),
                ("Create Account", "/signup"),
                ("Home", "/"),
            ],
        },
        AuthFlow::ForgotPassword => FlowContent {
            title: "Forgot your password?",
            blurb: "We will send a verification code to the email on your account.",
            submit: "Send Code",
            links: &[("Enter Code", "/verification"), ("Back to Sign In", "/signin")],
        },
        AuthFlow::Verification => FlowContent {
            title: "Verify your email",
            blurb: "Enter the code we sent you to continue.",
            submit: "Verify",
            links: &[("Resend Code", "/forgotpassword"), ("Back to Sign In", "/signin")],
        },
        AuthFlow::ResetPassword => FlowContent {
            title: "Choose a new password",
            blurb: "Pick a new password for your account.",
            submit: "Reset Password",
            links: &[("Back to Sign In", "/signin")],
        },
    }
}

pub struct AuthPage {
    flow: AuthFlow,
    controls: ControlSet,
    notice: Rc<RefCell<Option<Notice>>>,
}

impl AuthPage {
    pub fn new(flow: AuthFlow, ctx: &PageContext) -> Self {
        let content = flow_content(flow);
        let notice = Rc::new(RefCell::new(None));

        let submit = {
            let auth = ctx.auth.clone();
            let navigator = ctx.navigator.clone();
            let notice = notice.clone();
            Button::new(content.submit, move || match auth.submit(flow) {
                Ok(reply) => {
                    *notice.borrow_mut() = reply.message.map(Notice::Info);
                    if let Some(path) = reply.redirect {
                        navigator.navigate(&path);
                    }
                }
                Err(err) => {
                    tracing::warn!(flow = flow.name(), error = %err, "authentication failed");
                    *notice.borrow_mut() = Some(Notice::Error(err.to_string()));
                }
            })
        };

        let mut controls = ControlSet::new().with(submit);
        for (label, path) in content.links {
            controls.push(nav_button(label, path, &ctx.navigator));
        }

        Self {
            flow,
            controls,
            notice,
        }
    }

    pub fn flow(&self) -> AuthFlow {
        self.flow
    }

    pub fn notice(&self) -> Option<Notice> {
        self.notice.borrow().clone()
    }
}

impl Page for AuthPage {
    fn controls(&self) -> &ControlSet {
        &self.controls
    }

    fn controls_mut(&mut self) -> &mut ControlSet {
        &mut self.controls
    }
}

impl Component for AuthPage {
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
        let content = flow_content(self.flow);
        let column = content_column(area, 72);
        let card_height = 9 + CONTROL_HEIGHT;
        let top = area.height.saturating_sub(card_height) / 2;
        let card = Rect::new(column.x, column.y + top, column.width, card_height.min(column.height));

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(card);
        frame.render_widget(block, card);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(3),
                Constraint::Length(2),
                Constraint::Length(CONTROL_HEIGHT),
                Constraint::Min(0),
            ])
            .split(inner);

        frame.render_widget(
            Paragraph::new(heading(content.title)).alignment(Alignment::Center),
            chunks[0],
        );
        frame.render_widget(
            Paragraph::new(content.blurb)
                .style(Style::default().fg(Color::Gray))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            chunks[1],
        );

        if let Some(notice) = self.notice.borrow().as_ref() {
            let (text, color) = match notice {
                Notice::Info(text) => (text.as_str(), Color::Green),
                Notice::Error(text) => (text.as_str(), Color::Red),
            };
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    text.to_string(),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                )))
                .alignment(Alignment::Center),
                chunks[2],
            );
        }

        self.controls
            .render_row(chunks[3], frame.buffer_mut(), Alignment::Center);
        Ok(())
    }
}
