//! Shell configuration with host-page overrides.
//!
//! # Design
//! - Every path, header, and storage key the shell touches lives here.
//! - All fields default, so a partial JSON override only names what it changes.

use serde::Deserialize;

/// Runtime configuration for the web shell.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Prefix prepended to every same-origin request (empty for same origin).
    pub api_base: String,
    /// Third-party geolocation endpoint used once per client.
    pub geolocation_url: String,
    /// Page shown when the fragment is empty.
    pub landing_path: String,
    /// Page the router redirects to on 401.
    pub login_path: String,
    /// Account creation page.
    pub signup_path: String,
    /// Dashboard page; triggers video dashboard initialization.
    pub dashboard_path: String,
    /// Prefix of course detail routes that have no localized variant.
    pub course_prefix: String,
    /// Pages served from per-language partial directories.
    pub translatable_pages: Vec<String>,
    /// Cookie carrying the anti-forgery token.
    pub csrf_cookie: String,
    /// Header echoing the anti-forgery token.
    pub csrf_header: String,
    /// Local storage key holding the language preference.
    pub language_storage_key: String,
    /// Language used when nothing else resolves.
    pub fallback_language: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            geolocation_url: "https://ipapi.co/json/".to_string(),
            landing_path: "/landing.html".to_string(),
            login_path: "/login.html".to_string(),
            signup_path: "/signup.html".to_string(),
            dashboard_path: "/protected/dashboard.html".to_string(),
            course_prefix: "/protected/course/".to_string(),
            translatable_pages: ["landing", "about", "login", "signup"]
                .into_iter()
                .map(str::to_string)
                .collect(),
            csrf_cookie: "csrf_token".to_string(),
            csrf_header: "X-CSRF-Token".to_string(),
            language_storage_key: "userLanguage".to_string(),
            fallback_language: "en".to_string(),
        }
    }
}

impl ShellConfig {
    /// Parse a JSON override document, keeping defaults for absent fields.
    ///
    /// # Errors
    /// Returns the JSON error when the document is malformed.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(raw)
    }

    /// Join a same-origin path onto the configured base.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base.trim_end_matches('/'), path)
    }

    /// Translation file for a language code.
    #[must_use]
    pub fn locale_file(&self, language: &str) -> String {
        self.url(&format!("/locales/{language}.json"))
    }

    /// Localized partial for a translatable page name.
    #[must_use]
    pub fn localized_partial(&self, language: &str, page_name: &str) -> String {
        self.url(&format!("/locales/{language}/{page_name}.html"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_backend_layout() {
        let config = ShellConfig::default();
        assert_eq!(config.locale_file("de"), "/locales/de.json");
        assert_eq!(
            config.localized_partial("en", "landing"),
            "/locales/en/landing.html"
        );
        assert_eq!(config.url("/api/videos"), "/api/videos");
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config =
            ShellConfig::from_json(r#"{"api_base":"https://media.example/","login_path":"/signin.html"}"#)
                .expect("config");
        assert_eq!(config.url("/api/check-auth"), "https://media.example/api/check-auth");
        assert_eq!(config.login_path, "/signin.html");
        assert_eq!(config.dashboard_path, "/protected/dashboard.html");
    }

    #[test]
    fn blank_override_is_default() {
        assert_eq!(ShellConfig::from_json("  ").expect("config"), ShellConfig::default());
        assert!(ShellConfig::from_json("{not json").is_err());
    }
}
