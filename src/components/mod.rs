//! UI Components
//!
//! Controls, cards and dialogs shared by the page views. Components keep
//! their own state and rendering; they report what happened through Actions.

pub mod button;
pub mod controls;
pub mod gesture_card;
pub mod help_dialog;
pub mod layout;
pub mod link;
pub mod location_prompt;
pub mod quit_dialog;
pub mod shell;
pub mod typed_text;

pub use button::Button;
pub use controls::{ControlSet, CONTROL_HEIGHT};
pub use gesture_card::{GestureCard, CARD_HEIGHT};
pub use help_dialog::HelpDialog;
pub use layout::{calculate_shell_layout, card_grid, card_grid_rows, centered_popup};
pub use link::Hyperlink;
pub use location_prompt::draw_location_prompt;
pub use quit_dialog::QuitDialog;
pub use shell::{draw_shell, ShellRenderContext};
pub use typed_text::TypedText;
