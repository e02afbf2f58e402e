//! Authentication collaborator interface
//!
//! The account flows are handled by an external service. Pages only submit a
//! flow and forward whatever the service reports.

use thiserror::Error;

/// Account flow a page submits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthFlow {
    SignUp,
    SignIn,
    ForgotPassword,
    Verification,
    ResetPassword,
}

impl AuthFlow {
    pub fn name(&self) -> &'static str {
        match self {
            AuthFlow::SignUp => "sign up",
            AuthFlow::SignIn => "sign in",
            AuthFlow::ForgotPassword => "forgot password",
            AuthFlow::Verification => "verification",
            AuthFlow::ResetPassword => "reset password",
        }
    }
}

/// Successful reply from the service
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthReply {
    /// Path to navigate to after success
    pub redirect: Option<String>,
    /// Message to show on the page
    pub message: Option<String>,
}

/// Failure reported by the service
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("authentication service is not configured")]
    Unavailable,
    #[error("{0}")]
    Rejected(String),
}

/// External authentication/session service
pub trait AuthService {
    fn submit(&self, flow: AuthFlow) -> Result<AuthReply, AuthError>;
}

/// Collaborator used when no authentication service is configured
#[derive(Debug, Default)]
pub struct UnconfiguredAuth;

impl AuthService for UnconfiguredAuth {
    fn submit(&self, flow: AuthFlow) -> Result<AuthReply, AuthError> {
        tracing::warn!(flow = flow.name(), "no authentication service configured");
        Err(AuthError::Unavailable)
    }
}
