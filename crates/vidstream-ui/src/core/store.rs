//! Shell-wide yewdux store.
//!
//! # Design
//! - One store replaces the ad-hoc globals (current mapping, flags, last route).
//! - Only [`crate::core::events::reduce`] mutates it; components read through selectors.

use crate::core::auth::AuthStatus;
use crate::core::routing::RouteState;
use crate::core::switcher::SwitcherState;
use crate::core::video::PlaybackSelection;
use crate::i18n::{DEFAULT_LANGUAGE, I18nState, LanguageCode};
use yewdux::store::Store;

/// Global shell state.
#[derive(Clone, Debug, PartialEq, Eq, Store)]
pub struct ShellStore {
    /// Page currently shown in the content area.
    pub route: RouteState,
    /// Set once the auth probe and initial language resolution settled.
    pub ready: bool,
    /// Last session probe outcome driving the nav bar.
    pub auth: AuthStatus,
    /// Language shown on the switcher button.
    pub display_language: LanguageCode,
    /// Mirror of the persisted preference.
    pub persisted_language: Option<LanguageCode>,
    /// Switcher dropdown state.
    pub switcher: SwitcherState,
    /// Active translation mapping.
    pub i18n: I18nState,
    /// Catalog entry carrying the playing indicator.
    pub playing: PlaybackSelection,
}

impl Default for ShellStore {
    fn default() -> Self {
        Self {
            route: RouteState::default(),
            ready: false,
            auth: AuthStatus::Pending,
            display_language: DEFAULT_LANGUAGE,
            persisted_language: None,
            switcher: SwitcherState::Closed,
            i18n: I18nState::default(),
            playing: PlaybackSelection::default(),
        }
    }
}

impl ShellStore {
    /// Language used for content partials (the persisted one, else the fallback).
    #[must_use]
    pub fn content_language(&self, fallback: &str) -> String {
        self.persisted_language
            .map_or_else(|| fallback.to_string(), |lang| lang.code().to_string())
    }

    /// Translate a key with the active mapping.
    #[must_use]
    pub fn text(&self, key: &str, default: &str) -> String {
        self.i18n.map.text(key, default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_store_is_not_ready() {
        let store = ShellStore::default();
        assert!(!store.ready);
        assert_eq!(store.auth, AuthStatus::Pending);
        assert_eq!(store.content_language("en"), "en");
        assert_eq!(store.text("nav.login", "Login"), "Login");
    }

    #[test]
    fn content_language_follows_persisted_preference() {
        let store = ShellStore {
            persisted_language: Some(LanguageCode::De),
            ..ShellStore::default()
        };
        assert_eq!(store.content_language("en"), "de");
    }
}
