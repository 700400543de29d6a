//! Persistence and environment helpers for the app shell.

use crate::core::config::ShellConfig;
use crate::i18n::LanguageCode;
use gloo::console;
use gloo::storage::{LocalStorage, Storage};

/// Element id of the optional JSON configuration block in the host page.
pub(crate) const CONFIG_ELEMENT_ID: &str = "vidstream-config";

/// Read configuration overrides from the host page, falling back to defaults.
pub(crate) fn load_config() -> ShellConfig {
    let raw = gloo::utils::document()
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content())
        .unwrap_or_default();
    match ShellConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            console::error!("config parse failed", CONFIG_ELEMENT_ID, err.to_string());
            ShellConfig::default()
        }
    }
}

/// Stored language preference; unknown codes are ignored.
pub(crate) fn load_language(config: &ShellConfig) -> Option<LanguageCode> {
    let stored = match LocalStorage::raw().get_item(&config.language_storage_key) {
        Ok(value) => value?,
        Err(err) => {
            log_storage_error("get", &config.language_storage_key, &format!("{err:?}"));
            return None;
        }
    };
    let parsed = LanguageCode::from_code(&stored);
    if parsed.is_none() {
        console::warn!("ignoring stored language", stored);
    }
    parsed
}

/// Persist the language preference as its bare code.
pub(crate) fn persist_language(config: &ShellConfig, language: LanguageCode) {
    set_storage(&config.language_storage_key, language.code());
}

fn set_storage(key: &str, value: &str) {
    if let Err(err) = LocalStorage::raw().set_item(key, value) {
        log_storage_error("set", key, &format!("{err:?}"));
    }
}

fn log_storage_error(operation: &'static str, key: &str, detail: &str) {
    console::error!("storage operation failed", operation, key.to_string(), detail.to_string());
}
