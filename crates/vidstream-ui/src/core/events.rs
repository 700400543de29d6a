//! Typed shell events and the reducer that turns them into effects.
//!
//! # Design
//! - Listeners and async tasks emit [`ShellEvent`]s instead of poking the URL
//!   fragment; the hash is written for history only.
//! - [`reduce`] is pure: it mutates the store and returns the [`Effect`]s the
//!   browser runtime must execute, in order.

use crate::core::auth::AuthStatus;
use crate::core::config::ShellConfig;
use crate::core::routing::{is_course_page, page_from_hash};
use crate::core::store::ShellStore;
use crate::core::switcher::SwitcherInput;
use crate::i18n::{LanguageCode, TranslationMap};

/// What happens once a language change finished loading.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FollowUp {
    /// Navigate to another page.
    Navigate(String),
    /// Reload the current page in the new language.
    ReloadContent,
}

/// Inputs the shell reacts to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShellEvent {
    /// The browser reported a new fragment (initial read, back/forward).
    HashChanged(String),
    /// Explicit navigation to a page path.
    Navigate(String),
    /// Re-fetch the current page.
    ReloadContent,
    /// The session probe settled.
    AuthResolved(AuthStatus),
    /// The current-language button was clicked.
    SwitcherToggled,
    /// A click landed outside the switcher.
    OutsideClicked,
    /// A language was picked from the dropdown.
    LanguageSelected(LanguageCode),
    /// Startup resolved the language from storage or geolocation.
    InitialLanguageResolved(LanguageCode),
    /// A translation mapping loaded.
    TranslationsLoaded {
        /// Code actually loaded.
        language: String,
        /// Loaded mapping.
        map: TranslationMap,
        /// Pending action from the language change.
        follow_up: Option<FollowUp>,
    },
    /// Every translation attempt failed; the previous mapping stays.
    TranslationsFailed {
        /// Pending action from the language change.
        follow_up: Option<FollowUp>,
    },
    /// Startup finished; content loading may begin.
    Ready,
    /// A catalog was rendered; no entry is playing.
    CatalogRendered,
    /// A catalog entry was clicked.
    VideoSelected(String),
}

/// Browser-side work requested by the reducer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Write `#{page}` to the location for history.
    WriteHash(String),
    /// Fetch and inject the partial for a page.
    LoadContent {
        /// Page path.
        page: String,
    },
    /// Store the language preference.
    PersistLanguage(LanguageCode),
    /// Fetch a translation mapping.
    LoadTranslations {
        /// Requested language.
        language: LanguageCode,
        /// Action to run after the load settles.
        follow_up: Option<FollowUp>,
    },
    /// Set `<html lang>`.
    SetDocumentLanguage(String),
    /// Re-run the marker pass over the document.
    ApplyTranslations,
    /// Mark the entry and stream the video.
    PlayVideo {
        /// Video key.
        key: String,
    },
}

/// Apply an event to the store and collect the resulting effects.
pub fn reduce(store: &mut ShellStore, event: ShellEvent, config: &ShellConfig) -> Vec<Effect> {
    let mut effects = Vec::new();
    match event {
        ShellEvent::HashChanged(hash) => {
            let page = page_from_hash(&hash, config);
            if page != store.route.page {
                store.route.page = page.clone();
                if store.ready {
                    effects.push(Effect::LoadContent { page });
                }
            }
        }
        ShellEvent::Navigate(page) => {
            store.route.page = page.clone();
            effects.push(Effect::WriteHash(page.clone()));
            if store.ready {
                effects.push(Effect::LoadContent { page });
            }
        }
        ShellEvent::ReloadContent => {
            if store.ready {
                effects.push(Effect::LoadContent {
                    page: current_page(store, config),
                });
            }
        }
        ShellEvent::AuthResolved(status) => {
            store.auth = status;
            effects.push(Effect::ApplyTranslations);
        }
        ShellEvent::SwitcherToggled => {
            store.switcher = store.switcher.next(SwitcherInput::Toggle);
        }
        ShellEvent::OutsideClicked => {
            store.switcher = store.switcher.next(SwitcherInput::OutsideClick);
        }
        ShellEvent::LanguageSelected(language) => {
            store.switcher = store.switcher.next(SwitcherInput::Selected);
            store.display_language = language;
            let previous = store.persisted_language.replace(language);
            effects.push(Effect::PersistLanguage(language));
            if previous != Some(language) {
                let page = current_page(store, config);
                let follow_up = if is_course_page(&page, config) {
                    FollowUp::Navigate(config.dashboard_path.clone())
                } else {
                    FollowUp::ReloadContent
                };
                effects.push(Effect::LoadTranslations {
                    language,
                    follow_up: Some(follow_up),
                });
            }
        }
        ShellEvent::InitialLanguageResolved(language) => {
            store.display_language = language;
            store.persisted_language = Some(language);
            effects.push(Effect::PersistLanguage(language));
            effects.push(Effect::LoadTranslations {
                language,
                follow_up: None,
            });
        }
        ShellEvent::TranslationsLoaded {
            language,
            map,
            follow_up,
        } => {
            store.i18n.language = Some(language.clone());
            store.i18n.map = map;
            effects.push(Effect::SetDocumentLanguage(language));
            effects.push(Effect::ApplyTranslations);
            effects.extend(run_follow_up(store, follow_up, config));
        }
        ShellEvent::TranslationsFailed { follow_up } => {
            effects.push(Effect::ApplyTranslations);
            effects.extend(run_follow_up(store, follow_up, config));
        }
        ShellEvent::Ready => {
            store.ready = true;
            effects.push(Effect::LoadContent {
                page: current_page(store, config),
            });
        }
        ShellEvent::CatalogRendered => store.playing.clear(),
        ShellEvent::VideoSelected(key) => {
            store.playing.select(&key);
            effects.push(Effect::PlayVideo { key });
        }
    }
    effects
}

fn current_page(store: &ShellStore, config: &ShellConfig) -> String {
    if store.route.page.is_empty() {
        config.landing_path.clone()
    } else {
        store.route.page.clone()
    }
}

fn run_follow_up(
    store: &mut ShellStore,
    follow_up: Option<FollowUp>,
    config: &ShellConfig,
) -> Vec<Effect> {
    match follow_up {
        Some(FollowUp::Navigate(page)) => reduce(store, ShellEvent::Navigate(page), config),
        Some(FollowUp::ReloadContent) => reduce(store, ShellEvent::ReloadContent, config),
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::routing::RouteState;
    use crate::core::switcher::SwitcherState;

    fn ready_store(page: &str) -> ShellStore {
        ShellStore {
            ready: true,
            route: RouteState {
                page: page.to_string(),
            },
            persisted_language: Some(LanguageCode::En),
            ..ShellStore::default()
        }
    }

    fn loaded(language: &str, follow_up: Option<FollowUp>) -> ShellEvent {
        ShellEvent::TranslationsLoaded {
            language: language.to_string(),
            map: [("nav.login".to_string(), "Anmelden".to_string())]
                .into_iter()
                .collect(),
            follow_up,
        }
    }

    #[test]
    fn hash_reads_before_ready_only_track_the_route() {
        let config = ShellConfig::default();
        let mut store = ShellStore::default();
        let effects = reduce(&mut store, ShellEvent::HashChanged(String::new()), &config);
        assert!(effects.is_empty());
        assert_eq!(store.route.page, "/landing.html");

        let effects = reduce(&mut store, ShellEvent::Ready, &config);
        assert_eq!(
            effects,
            vec![Effect::LoadContent {
                page: "/landing.html".to_string()
            }]
        );
    }

    #[test]
    fn navigate_writes_hash_and_loads_once() {
        let config = ShellConfig::default();
        let mut store = ready_store("/login.html");
        let effects = reduce(
            &mut store,
            ShellEvent::Navigate("/protected/dashboard.html".to_string()),
            &config,
        );
        assert_eq!(
            effects,
            vec![
                Effect::WriteHash("/protected/dashboard.html".to_string()),
                Effect::LoadContent {
                    page: "/protected/dashboard.html".to_string()
                },
            ]
        );
        let echoed = reduce(
            &mut store,
            ShellEvent::HashChanged("#/protected/dashboard.html".to_string()),
            &config,
        );
        assert!(echoed.is_empty());
    }

    #[test]
    fn back_navigation_loads_previous_page() {
        let config = ShellConfig::default();
        let mut store = ready_store("/protected/dashboard.html");
        let effects = reduce(
            &mut store,
            ShellEvent::HashChanged("#/about.html".to_string()),
            &config,
        );
        assert_eq!(
            effects,
            vec![Effect::LoadContent {
                page: "/about.html".to_string()
            }]
        );
    }

    #[test]
    fn switching_language_on_course_page_returns_to_dashboard() {
        let config = ShellConfig::default();
        let mut store = ready_store("/protected/course/42");
        let effects = reduce(
            &mut store,
            ShellEvent::LanguageSelected(LanguageCode::De),
            &config,
        );
        let follow_up = Some(FollowUp::Navigate("/protected/dashboard.html".to_string()));
        assert_eq!(
            effects,
            vec![
                Effect::PersistLanguage(LanguageCode::De),
                Effect::LoadTranslations {
                    language: LanguageCode::De,
                    follow_up: follow_up.clone(),
                },
            ]
        );
        assert_eq!(store.display_language, LanguageCode::De);

        let effects = reduce(&mut store, loaded("de", follow_up), &config);
        assert_eq!(store.route.page, "/protected/dashboard.html");
        assert_eq!(store.i18n.language.as_deref(), Some("de"));
        assert_eq!(store.text("nav.login", "Login"), "Anmelden");
        assert_eq!(
            effects,
            vec![
                Effect::SetDocumentLanguage("de".to_string()),
                Effect::ApplyTranslations,
                Effect::WriteHash("/protected/dashboard.html".to_string()),
                Effect::LoadContent {
                    page: "/protected/dashboard.html".to_string()
                },
            ]
        );
    }

    #[test]
    fn switching_language_elsewhere_reloads_current_page() {
        let config = ShellConfig::default();
        let mut store = ready_store("/about.html");
        let effects = reduce(
            &mut store,
            ShellEvent::LanguageSelected(LanguageCode::De),
            &config,
        );
        assert!(effects.contains(&Effect::LoadTranslations {
            language: LanguageCode::De,
            follow_up: Some(FollowUp::ReloadContent),
        }));
        let effects = reduce(
            &mut store,
            ShellEvent::TranslationsFailed {
                follow_up: Some(FollowUp::ReloadContent),
            },
            &config,
        );
        assert_eq!(
            effects,
            vec![
                Effect::ApplyTranslations,
                Effect::LoadContent {
                    page: "/about.html".to_string()
                },
            ]
        );
    }

    #[test]
    fn reselecting_persisted_language_only_persists() {
        let config = ShellConfig::default();
        let mut store = ready_store("/about.html");
        store.switcher = SwitcherState::Open;
        let effects = reduce(
            &mut store,
            ShellEvent::LanguageSelected(LanguageCode::En),
            &config,
        );
        assert_eq!(effects, vec![Effect::PersistLanguage(LanguageCode::En)]);
        assert_eq!(store.switcher, SwitcherState::Closed);
    }

    #[test]
    fn switcher_events_drive_dropdown() {
        let config = ShellConfig::default();
        let mut store = ShellStore::default();
        reduce(&mut store, ShellEvent::SwitcherToggled, &config);
        assert_eq!(store.switcher, SwitcherState::Open);
        reduce(&mut store, ShellEvent::OutsideClicked, &config);
        assert_eq!(store.switcher, SwitcherState::Closed);
    }

    #[test]
    fn initial_language_is_persisted_and_loaded() {
        let config = ShellConfig::default();
        let mut store = ShellStore::default();
        let effects = reduce(
            &mut store,
            ShellEvent::InitialLanguageResolved(LanguageCode::De),
            &config,
        );
        assert_eq!(
            effects,
            vec![
                Effect::PersistLanguage(LanguageCode::De),
                Effect::LoadTranslations {
                    language: LanguageCode::De,
                    follow_up: None,
                },
            ]
        );
        assert_eq!(store.content_language("en"), "de");
    }

    #[test]
    fn auth_resolution_reapplies_translations() {
        let config = ShellConfig::default();
        let mut store = ShellStore::default();
        let effects = reduce(
            &mut store,
            ShellEvent::AuthResolved(AuthStatus::Anonymous),
            &config,
        );
        assert_eq!(store.auth, AuthStatus::Anonymous);
        assert_eq!(effects, vec![Effect::ApplyTranslations]);
    }

    #[test]
    fn selecting_videos_moves_the_indicator() {
        let config = ShellConfig::default();
        let mut store = ready_store("/protected/dashboard.html");
        reduce(&mut store, ShellEvent::VideoSelected("a.mp4".to_string()), &config);
        let effects = reduce(&mut store, ShellEvent::VideoSelected("b.mp4".to_string()), &config);
        assert_eq!(
            effects,
            vec![Effect::PlayVideo {
                key: "b.mp4".to_string()
            }]
        );
        let rendered = vec![Some("a.mp4".to_string()), Some("b.mp4".to_string())];
        assert_eq!(store.playing.indicator_flags(&rendered), vec![false, true]);
        reduce(&mut store, ShellEvent::CatalogRendered, &config);
        assert_eq!(store.playing.current(), None);
        assert_eq!(store.playing.indicator_flags(&rendered), vec![false, false]);
    }

    #[test]
    fn reload_before_ready_is_ignored() {
        let config = ShellConfig::default();
        let mut store = ShellStore::default();
        assert!(reduce(&mut store, ShellEvent::ReloadContent, &config).is_empty());
    }
}
