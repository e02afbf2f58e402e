//! Page views - one per route, plus the not-found fallback
//!
//! Pages are built at mount time from a `PageContext` and dropped on unmount.
//! Navigation goes through the context's `Navigator`.

pub mod auth;
pub mod dashboard;
pub mod landing;
pub mod not_found;
pub mod recognized_gesture;
pub mod tutorial;

pub use auth::AuthPage;
pub use dashboard::DashboardPage;
pub use landing::LandingPage;
pub use not_found::NotFoundPage;
pub use recognized_gesture::RecognizedGesturePage;
pub use tutorial::TutorialPage;

use crate::action::Action;
use crate::component::Component;
use crate::components::{Button, ControlSet};
use crate::config::LandingStyle;
use crate::model::{GestureCatalog, Navigator, PageId};
use crate::services::{AuthFlow, AuthService};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use std::rc::Rc;

/// Everything a page may use, handed over when it is mounted
#[derive(Clone)]
pub struct PageContext {
    pub navigator: Navigator,
    pub catalog: Rc<GestureCatalog>,
    pub landing_style: LandingStyle,
    pub board_url: String,
    pub auth: Rc<dyn AuthService>,
}

/// A mountable page view
pub trait Page: Component {
    fn controls(&self) -> &ControlSet;
    fn controls_mut(&mut self) -> &mut ControlSet;
}

/// Build the page view for a route
pub fn mount_page(page: PageId, ctx: &PageContext) -> Box<dyn Page> {
    match page {
        PageId::Landing => Box::new(LandingPage::new(ctx)),
        PageId::Signup => Box::new(AuthPage::new(AuthFlow::SignUp, ctx)),
        PageId::Signin => Box::new(AuthPage::new(AuthFlow::SignIn, ctx)),
        PageId::ForgotPassword => Box::new(AuthPage::new(AuthFlow::ForgotPassword, ctx)),
        PageId::Verification => Box::new(AuthPage::new(AuthFlow::Verification, ctx)),
        PageId::ResetPassword => Box::new(AuthPage::new(AuthFlow::ResetPassword, ctx)),
        PageId::Dashboard => Box::new(DashboardPage::new(ctx)),
        PageId::RecognizedGesture => Box::new(RecognizedGesturePage::new(ctx)),
        PageId::Tutorial => Box::new(TutorialPage::new(ctx)),
    }
}

/// Button whose handler issues a navigation intent for `path`
pub fn nav_button(label: &str, path: &str, navigator: &Navigator) -> Button {
    let navigator = navigator.clone();
    let path = path.to_string();
    Button::new(label, move || navigator.navigate(&path))
}

/// Key bindings shared by every page's control set
pub fn control_key_action(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Tab | KeyCode::Right | KeyCode::Down => Some(Action::FocusNext),
        KeyCode::BackTab | KeyCode::Left | KeyCode::Up => Some(Action::FocusPrev),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Activate),
        _ => None,
    }
}

/// Left clicks become `ClickAt` so the control set can hit-test them
pub fn control_mouse_action(mouse: MouseEvent) -> Option<Action> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Action::ClickAt(mouse.column, mouse.row)),
        _ => None,
    }
}

/// Apply a control action to a page's control set
pub fn update_controls(controls: &mut ControlSet, action: &Action) -> Option<Action> {
    match action {
        Action::FocusNext => {
            controls.focus_next();
            None
        }
        Action::FocusPrev => {
            controls.focus_prev();
            None
        }
        Action::Activate => controls.activate_focused(),
        Action::ClickAt(column, row) => controls.click(*column, *row),
        _ => None,
    }
}

/// Page heading in the brand's orange
pub fn heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default()
            .fg(Color::Rgb(255, 140, 0))
            .add_modifier(Modifier::BOLD),
    ))
}

/// Shrink `area` to at most `max_width` columns, centered
pub fn content_column(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    Rect::new(area.x + (area.width - width) / 2, area.y, width, area.height)
}
