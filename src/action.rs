//! Action enum - All possible application actions
//!
//! Pages and dialogs turn terminal events into Actions; the App processes
//! them, forwarding page-level ones to the mounted page.

use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick for animations
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Quit without confirmation
    ForceQuit,

    // ─────────────────────────────────────────────────────────────────────────
    // Routing
    // ─────────────────────────────────────────────────────────────────────────
    /// Change the location to a path
    Navigate(String),
    /// Return to the previous location
    Back,
    /// Leave the application through an outbound link
    OpenLink(String),

    // ─────────────────────────────────────────────────────────────────────────
    // Controls
    // ─────────────────────────────────────────────────────────────────────────
    /// Move focus to the next control
    FocusNext,
    /// Move focus to the previous control
    FocusPrev,
    /// Activate the focused control
    Activate,
    /// Activate whichever control was drawn at this cell
    ClickAt(u16, u16),

    // ─────────────────────────────────────────────────────────────────────────
    // Scrolling
    // ─────────────────────────────────────────────────────────────────────────
    ScrollUp,
    ScrollDown,

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    OpenQuitDialog,
    OpenHelp,
    /// Open the location prompt
    OpenLocationPrompt,
    /// Close the top modal
    CloseModal,
    /// Confirm the top modal
    ConfirmModal,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::Navigate(path) => write!(f, "Navigate({})", path),
            Action::Back => write!(f, "Back"),
            Action::OpenLink(url) => write!(f, "OpenLink({})", url),
            Action::FocusNext => write!(f, "FocusNext"),
            Action::FocusPrev => write!(f, "FocusPrev"),
            Action::Activate => write!(f, "Activate"),
            Action::ClickAt(x, y) => write!(f, "ClickAt({}, {})", x, y),
            Action::ScrollUp => write!(f, "ScrollUp"),
            Action::ScrollDown => write!(f, "ScrollDown"),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::OpenLocationPrompt => write!(f, "OpenLocationPrompt"),
            Action::CloseModal => write!(f, "CloseModal"),
            Action::ConfirmModal => write!(f, "ConfirmModal"),
        }
    }
}
