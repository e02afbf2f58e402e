//! Root application component
//!
//! The App struct implements the Component trait, acting as the root component
//! that owns the router and the modal overlays. Page-level actions are
//! forwarded to the mounted page; navigation intents the page queued while
//! handling them are dispatched to the router before the next event.

use crate::action::Action;
use crate::component::Component;
use crate::components::{draw_location_prompt, draw_shell, HelpDialog, QuitDialog, ShellRenderContext};
use crate::config::Config;
use crate::model::{GestureCatalog, Modal, ModalStack, Navigator, RouteTable};
use crate::pages::PageContext;
use crate::router::{MountedView, Router};
use crate::services::{self, AuthService};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::{layout::Rect, Frame};
use std::rc::Rc;

// ═══════════════════════════════════════════════════════════════════════════════
// App Struct
// ═══════════════════════════════════════════════════════════════════════════════

/// Main application state - coordinates the router and overlays
pub struct App {
    /// Owns the single mounted page view
    pub router: Router,

    /// Navigation capability shared with every mounted page
    pub navigator: Navigator,

    /// Modal overlay stack
    pub modals: ModalStack,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Error message to display
    pub error: Option<String>,

    /// Status message to display
    pub status_message: Option<String>,

    /// Outbound link to open (set by OpenLink action, handled by main loop)
    pub pending_link: Option<String>,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub quit_dialog: QuitDialog,
    pub help_dialog: HelpDialog,
}

// ═══════════════════════════════════════════════════════════════════════════════
// App Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    /// Create a new App; nothing is mounted until `start`
    pub fn new(
        config: &Config,
        catalog: Rc<GestureCatalog>,
        auth: Rc<dyn AuthService>,
    ) -> Result<App> {
        let navigator = Navigator::new();
        let table = RouteTable::standard()?;
        let help_dialog = HelpDialog::new(&table);

        let ctx = PageContext {
            navigator: navigator.clone(),
            catalog,
            landing_style: config.landing_style,
            board_url: config.recognition_board_url.clone(),
            auth,
        };

        Ok(App {
            router: Router::new(table, config.unmatched_route, ctx),
            navigator,
            modals: ModalStack::new(),
            should_quit: false,
            error: None,
            status_message: None,
            pending_link: None,
            quit_dialog: QuitDialog,
            help_dialog,
        })
    }

    /// Mount the first page
    pub fn start(&mut self, path: &str) -> MountedView {
        self.router.navigate(path)
    }

    /// Log a failed frame and show it in the status line
    pub fn record_draw_error(&mut self, err: anyhow::Error) {
        tracing::error!(error = %err, "draw failed");
        self.error = Some(format!("{:#}", err));
    }

    /// Hand every queued navigation intent to the router, in issue order
    fn dispatch_intents(&mut self) {
        for intent in self.navigator.drain() {
            self.modals.clear();
            self.router.navigate(&intent.path);
        }
    }

    fn forward_to_page(&mut self, action: Action) -> Result<Option<Action>> {
        let follow_up = match self.router.page_mut() {
            Some(page) => page.update(action)?,
            None => None,
        };
        self.dispatch_intents();
        Ok(follow_up)
    }

    fn confirm_modal(&mut self) -> Option<Action> {
        match self.modals.pop() {
            Some(Modal::QuitConfirm) => {
                self.should_quit = true;
                None
            }
            Some(Modal::Location { input }) => {
                let path = input.trim();
                if path.is_empty() {
                    None
                } else {
                    Some(Action::Navigate(path.to_string()))
                }
            }
            Some(Modal::Help) | None => None,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Ok(Some(Action::ForceQuit));
        }

        if let Some(modal) = self.modals.top().cloned() {
            return self.handle_modal_key_event(&modal, key);
        }

        let action = match key.code {
            KeyCode::Char('q') => Some(Action::OpenQuitDialog),
            KeyCode::Char('?') => Some(Action::OpenHelp),
            KeyCode::Char(':') | KeyCode::Char('g') => Some(Action::OpenLocationPrompt),
            KeyCode::Esc | KeyCode::Backspace => Some(Action::Back),
            _ => match self.router.page_mut() {
                Some(page) => page.handle_key_event(key)?,
                None => None,
            },
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if !self.modals.is_empty() {
            return Ok(None);
        }
        match self.router.page_mut() {
            Some(page) => page.handle_mouse_event(mouse),
            None => Ok(None),
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::ForceQuit => {
                self.should_quit = true;
            }
            Action::Resize(_, _) => {}

            // ─────────────────────────────────────────────────────────────────
            // Routing
            // ─────────────────────────────────────────────────────────────────
            Action::Navigate(path) => {
                self.modals.clear();
                self.router.navigate(&path);
            }
            Action::Back => {
                if self.router.back().is_none() {
                    self.status_message = Some("Already at the first location".to_string());
                }
            }
            Action::OpenLink(url) => {
                if services::is_external_url(&url) {
                    self.pending_link = Some(url);
                } else {
                    tracing::warn!(url = %url, "ignored link that is not an http(s) URL");
                    self.error = Some(format!("Cannot open '{}'", url));
                }
            }

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenQuitDialog => self.modals.push(Modal::QuitConfirm),
            Action::OpenHelp => {
                self.help_dialog.scroll_offset = 0;
                self.modals.push(Modal::Help);
            }
            Action::OpenLocationPrompt => self.modals.push(Modal::Location {
                input: RouteTable::ROOT.to_string(),
            }),
            Action::CloseModal => {
                self.modals.pop();
            }
            Action::ConfirmModal => return Ok(self.confirm_modal()),

            // ─────────────────────────────────────────────────────────────────
            // Page-level (ticks, focus, activation, scrolling)
            // ─────────────────────────────────────────────────────────────────
            Action::Tick
            | Action::FocusNext
            | Action::FocusPrev
            | Action::Activate
            | Action::ClickAt(_, _)
            | Action::ScrollUp
            | Action::ScrollDown => return self.forward_to_page(action),
        }

        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let location = self.router.location().to_string();
        let mounted_at = self.router.mounted_at();
        let ctx = ShellRenderContext {
            location: &location,
            mounted_at: mounted_at.as_deref(),
            error: self.error.as_deref(),
            status_message: self.status_message.as_deref(),
        };

        draw_shell(frame, area, self.router.page_mut(), &ctx)?;

        // Draw modal overlay if active
        if let Some(modal) = self.modals.top().cloned() {
            self.draw_modal(frame, area, &modal)?;
        }
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Helper Methods
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    fn handle_modal_key_event(&mut self, modal: &Modal, key: KeyEvent) -> Result<Option<Action>> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.handle_key_event(key),
            Modal::Help => self.help_dialog.handle_key_event(key),
            Modal::Location { .. } => {
                let action = match key.code {
                    KeyCode::Esc => Some(Action::CloseModal),
                    KeyCode::Enter => Some(Action::ConfirmModal),
                    KeyCode::Backspace => {
                        if let Some(Modal::Location { input }) = self.modals.top_mut() {
                            input.pop();
                        }
                        None
                    }
                    KeyCode::Char(c) => {
                        if let Some(Modal::Location { input }) = self.modals.top_mut() {
                            input.push(c);
                        }
                        None
                    }
                    _ => None,
                };
                Ok(action)
            }
        }
    }

    fn draw_modal(&mut self, frame: &mut Frame, area: Rect, modal: &Modal) -> Result<()> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.draw(frame, area)?,
            Modal::Help => self.help_dialog.draw(frame, area)?,
            Modal::Location { input } => draw_location_prompt(frame, area, input),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CatalogPreset, PageId};
    use crate::pages::testing::ScriptedAuth;
    use crate::pages::Page;
    use crate::error::NavError;
    use crate::services::auth::AuthReply;
    use crate::services::UnconfiguredAuth;
    use ratatui::{backend::TestBackend, Terminal};

    fn app() -> App {
        app_with(&Config::default(), Rc::new(UnconfiguredAuth))
    }

    fn app_with(config: &Config, auth: Rc<dyn AuthService>) -> App {
        let mut app = App::new(config, Rc::new(GestureCatalog::default()), auth).unwrap();
        app.start(&config.start_path);
        app
    }

    /// Run an action and every follow-up, as the main loop does
    fn run(app: &mut App, action: Action) {
        let mut current = Some(action);
        while let Some(a) = current {
            current = app.update(a).unwrap();
        }
    }

    fn press(app: &mut App, code: KeyCode) {
        if let Some(action) = app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE)).unwrap() {
            run(app, action);
        }
    }

    fn focus(app: &mut App, label: &str) {
        let labels = app.router.page_mut().unwrap().controls().labels();
        let index = labels.iter().position(|l| *l == label).unwrap();
        for _ in 0..index {
            run(app, Action::FocusNext);
        }
    }

    fn screen(app: &mut App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                app.draw(frame, area).unwrap();
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        (0..height)
            .map(|y| (0..width).map(|x| buffer[(x, y)].symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_starts_on_landing() {
        let app = app();
        assert_eq!(app.router.mounted(), Some(&MountedView::Page(PageId::Landing)));
        assert_eq!(app.router.location(), "/");
    }

    #[test]
    fn test_sign_up_on_landing_mounts_signup() {
        let mut app = app();
        focus(&mut app, "Sign Up");
        run(&mut app, Action::Activate);
        assert_eq!(app.router.mounted(), Some(&MountedView::Page(PageId::Signup)));
        assert_eq!(app.router.location(), "/signup");
        assert!(!app.navigator.has_pending());
    }

    #[test]
    fn test_tutorial_shows_board_cards_in_order() {
        let mut app = app();
        run(&mut app, Action::Navigate("/tutorial".to_string()));
        let text = screen(&mut app, 160, 70);

        let mut last = 0;
        for name in ["Draw", "Erase", "Next Page", "Previous Page"] {
            let pos = text.find(&format!(" {} ", name)).unwrap();
            assert!(pos >= last);
            last = pos;
        }
        assert!(text.contains("Gesture Tutorial"));
    }

    #[test]
    fn test_unknown_path_renders_fallback() {
        let mut app = app();
        run(&mut app, Action::Navigate("/unknown".to_string()));
        assert_eq!(
            app.router.mounted(),
            Some(&MountedView::NotFound("/unknown".to_string()))
        );
        let text = screen(&mut app, 100, 30);
        assert!(text.contains("No route matches /unknown"));
    }

    #[test]
    fn test_draw_error_reaches_status_line() {
        let mut app = app();
        app.record_draw_error(NavError::MissingCatalogEntry { index: 4, len: 4 }.into());
        assert_eq!(
            app.error.as_deref(),
            Some("gesture catalog has no entry at position 4 (length 4)")
        );
        let text = screen(&mut app, 120, 30);
        assert!(text.contains("gesture catalog has no entry at position 4"));
    }

    #[test]
    fn test_location_prompt_navigates() {
        let mut app = app();
        press(&mut app, KeyCode::Char(':'));
        assert!(matches!(app.modals.top(), Some(Modal::Location { .. })));
        for c in "tutorial".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);
        assert!(app.modals.is_empty());
        assert_eq!(app.router.mounted(), Some(&MountedView::Page(PageId::Tutorial)));
    }

    #[test]
    fn test_escape_goes_back() {
        let mut app = app();
        run(&mut app, Action::Navigate("/signin".to_string()));
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.router.location(), "/");
        press(&mut app, KeyCode::Esc);
        assert!(app.status_message.is_some());
    }

    #[test]
    fn test_board_link_is_left_for_main_loop() {
        let mut app = app();
        focus(&mut app, "Open Smart Board");
        run(&mut app, Action::Activate);
        assert_eq!(
            app.pending_link.as_deref(),
            Some("http://127.0.0.1:5000/SmartBoard")
        );
        assert_eq!(app.router.location(), "/");
    }

    #[test]
    fn test_quit_requires_confirmation() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        press(&mut app, KeyCode::Char('n'));
        assert!(app.modals.is_empty());
        press(&mut app, KeyCode::Char('q'));
        press(&mut app, KeyCode::Char('y'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_help_opens_on_narrow_terminal() {
        for path in ["/", "/tutorial", "/signin"] {
            let mut app = app();
            run(&mut app, Action::Navigate(path.to_string()));
            press(&mut app, KeyCode::Char('?'));
            for width in 1..=8 {
                screen(&mut app, width, 12);
            }
        }
    }

    #[test]
    fn test_ctrl_c_quits_from_modal() {
        let mut app = app();
        press(&mut app, KeyCode::Char('?'));
        let action = app
            .handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
            .unwrap();
        assert_eq!(action, Some(Action::ForceQuit));
    }

    #[test]
    fn test_auth_redirect_mounts_target() {
        let auth = Rc::new(ScriptedAuth::new(Ok(AuthReply {
            redirect: Some("/dashboard".to_string()),
            message: None,
        })));
        let mut app = app_with(&Config::default(), auth.clone());
        run(&mut app, Action::Navigate("/signin".to_string()));
        run(&mut app, Action::Activate);
        assert_eq!(app.router.mounted(), Some(&MountedView::Page(PageId::Dashboard)));
        assert_eq!(auth.submitted.borrow().len(), 1);
    }

    #[test]
    fn test_hand_catalog_config() {
        let mut app = App::new(
            &Config::default(),
            Rc::new(GestureCatalog::preset(CatalogPreset::Hand)),
            Rc::new(UnconfiguredAuth),
        )
        .unwrap();
        app.start("/tutorial");
        let text = screen(&mut app, 160, 70);
        assert!(text.contains(" Zoom In "));
        assert!(!text.contains(" Next Page "));
    }
}
