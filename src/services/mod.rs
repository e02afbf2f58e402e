//! External collaborators
//!
//! - Gesture catalog files
//! - Authentication service interface
//! - System browser for outbound links

pub mod auth;
pub mod browser;
pub mod catalog;

pub use auth::{AuthFlow, AuthService, UnconfiguredAuth};
pub use browser::{is_external_url, open_external};
pub use catalog::load_catalog;
