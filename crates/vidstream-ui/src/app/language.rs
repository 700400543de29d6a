//! Language resolution and translation loading.

use crate::app::preferences;
use crate::app::runtime::Runtime;
use crate::core::events::{FollowUp, ShellEvent};
use crate::i18n::{DEFAULT_LANGUAGE, LanguageCode, LoadOutcome, language_for_country, load_with_fallback};
use gloo::console;

/// Resolve the startup language and load its mapping before returning.
///
/// A stored preference skips geolocation entirely.
pub(crate) async fn load_initial_language(runtime: &Runtime) {
    let language = match preferences::load_language(runtime.config()) {
        Some(stored) => stored,
        None => detect_language(runtime).await,
    };
    runtime
        .settle(ShellEvent::InitialLanguageResolved(language))
        .await;
}

async fn detect_language(runtime: &Runtime) -> LanguageCode {
    match runtime.client().geolocate().await {
        Ok(location) => {
            let language = language_for_country(location.country_code.as_deref());
            console::log!(
                "detected country",
                location.country_code.unwrap_or_default(),
                language.code()
            );
            language
        }
        Err(err) => {
            console::warn!("geolocation failed, defaulting language", err.to_string());
            DEFAULT_LANGUAGE
        }
    }
}

/// Load `language` (falling back once) and hand the result to the reducer.
pub(crate) async fn load_translations(
    runtime: Runtime,
    language: LanguageCode,
    follow_up: Option<FollowUp>,
) {
    let client = runtime.client();
    let outcome = load_with_fallback(language.code(), &runtime.config().fallback_language, |code| {
        let client = client.clone();
        async move {
            client
                .fetch_translations(&code)
                .await
                .map_err(|err| err.to_string())
        }
    })
    .await;

    match outcome {
        LoadOutcome::Loaded { language, map } => {
            console::log!("language set", language.clone(), map.translated_count());
            runtime.emit(ShellEvent::TranslationsLoaded {
                language,
                map,
                follow_up,
            });
        }
        LoadOutcome::Failed { errors } => {
            for error in errors {
                console::error!("translation load failed", error);
            }
            runtime.emit(ShellEvent::TranslationsFailed { follow_up });
        }
    }
}
