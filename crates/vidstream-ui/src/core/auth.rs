//! Session-aware navigation model and auth form helpers.
//!
//! # Design
//! - The client never caches a session; [`AuthStatus`] only records the last
//!   `/api/check-auth` outcome so the nav bar can be rendered.
//! - Each status maps to exactly one link set.

use crate::core::config::ShellConfig;
use vidstream_api_models::MessageBody;

/// Last resolved session probe outcome.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthStatus {
    /// No probe has completed yet.
    #[default]
    Pending,
    /// The probe returned 2xx.
    Authenticated,
    /// The probe returned a non-2xx status.
    Anonymous,
    /// The probe failed at the transport level.
    Unreachable,
}

impl AuthStatus {
    /// Classify a probe result (`Ok(status)` or a transport failure).
    #[must_use]
    pub const fn from_probe(result: Result<u16, ()>) -> Self {
        match result {
            Ok(status) if status >= 200 && status < 300 => Self::Authenticated,
            Ok(_) => Self::Anonymous,
            Err(()) => Self::Unreachable,
        }
    }
}

/// What a nav entry does when activated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavAction {
    /// Open the video dashboard.
    Dashboard,
    /// Open the signup page.
    Signup,
    /// Open the login page.
    Login,
    /// Terminate the session.
    Logout,
}

impl NavAction {
    /// Page path for navigating actions; `None` for logout.
    #[must_use]
    pub fn route(self, config: &ShellConfig) -> Option<String> {
        match self {
            Self::Dashboard => Some(config.dashboard_path.clone()),
            Self::Signup => Some(config.signup_path.clone()),
            Self::Login => Some(config.login_path.clone()),
            Self::Logout => None,
        }
    }
}

/// One rendered navigation entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavEntry {
    /// Translation key for the label.
    pub key: &'static str,
    /// Label used when the key is missing.
    pub default_label: &'static str,
    /// Activation behaviour.
    pub action: NavAction,
    /// Rendered with the secondary style.
    pub secondary: bool,
}

const VIDEOS: NavEntry = NavEntry {
    key: "nav.videos",
    default_label: "Videos",
    action: NavAction::Dashboard,
    secondary: false,
};

const LOGOUT: NavEntry = NavEntry {
    key: "nav.logout",
    default_label: "Logout",
    action: NavAction::Logout,
    secondary: false,
};

const SIGNUP: NavEntry = NavEntry {
    key: "nav.signup",
    default_label: "Sign Up",
    action: NavAction::Signup,
    secondary: true,
};

const LOGIN: NavEntry = NavEntry {
    key: "nav.login",
    default_label: "Login",
    action: NavAction::Login,
    secondary: false,
};

/// Link set shown for a probe outcome.
#[must_use]
pub const fn nav_entries(status: AuthStatus) -> &'static [NavEntry] {
    match status {
        AuthStatus::Pending => &[],
        AuthStatus::Authenticated => &[VIDEOS, LOGOUT],
        AuthStatus::Anonymous => &[SIGNUP, LOGIN],
        AuthStatus::Unreachable => &[LOGIN],
    }
}

/// Auth form flavours hosted in content partials.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormKind {
    /// `#login-form`.
    Login,
    /// `#signup-form`.
    Signup,
}

impl FormKind {
    /// Identify a form by its element id.
    #[must_use]
    pub fn from_form_id(id: &str) -> Option<Self> {
        match id {
            "login-form" => Some(Self::Login),
            "signup-form" => Some(Self::Signup),
            _ => None,
        }
    }

    /// Endpoint the form posts to.
    #[must_use]
    pub const fn endpoint(self) -> &'static str {
        match self {
            Self::Login => "/api/login",
            Self::Signup => "/api/signup",
        }
    }
}

/// Message shown when a failed response carries no usable text.
pub const GENERIC_FORM_ERROR: &str = "An error occurred.";

/// Inline message for a failed credential submission.
#[must_use]
pub fn form_error_message(body: Option<&MessageBody>) -> String {
    body.and_then(MessageBody::message_text)
        .unwrap_or(GENERIC_FORM_ERROR)
        .to_string()
}
