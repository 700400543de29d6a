//! Runtime-loaded JSON translations and DOM translation markers.
//!
//! # Design
//! - One [`TranslationMap`] is active at a time and is replaced wholesale.
//! - Loading is generic over the fetch so fallback behaviour is testable natively.
//! - Elements are translated through [`TranslationTarget`], which only exposes
//!   text and attribute setters; translation values are never parsed as markup.

use serde_json::Value;
use std::collections::HashMap;
use std::future::Future;

/// Languages the shell ships UI chrome for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LanguageCode {
    /// English.
    En,
    /// German.
    De,
}

impl LanguageCode {
    /// All supported languages in dropdown order.
    #[must_use]
    pub const fn all() -> [Self; 2] {
        [Self::En, Self::De]
    }

    /// Two-letter code used in locale paths and storage.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::De => "de",
        }
    }

    /// Native display name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::De => "Deutsch",
        }
    }

    /// Flag image shown on the switcher.
    #[must_use]
    pub const fn flag_src(self) -> &'static str {
        match self {
            Self::En => "/img/flags/us.svg",
            Self::De => "/img/flags/at.svg",
        }
    }

    /// Parse a stored or requested code; case-insensitive, region subtags ignored.
    #[must_use]
    pub fn from_code(raw: &str) -> Option<Self> {
        let lowered = raw.trim().to_ascii_lowercase();
        let base = lowered.split(['-', '_']).next().unwrap_or_default();
        Self::all().into_iter().find(|lang| lang.code() == base)
    }
}

/// Default display language.
pub const DEFAULT_LANGUAGE: LanguageCode = LanguageCode::En;

/// Countries whose visitors default to German.
const GERMAN_COUNTRIES: [&str; 3] = ["AT", "DE", "CH"];

/// Infer a default language from an ISO country code.
#[must_use]
pub fn language_for_country(country_code: Option<&str>) -> LanguageCode {
    match country_code {
        Some(code) if GERMAN_COUNTRIES.contains(&code.trim().to_ascii_uppercase().as_str()) => {
            LanguageCode::De
        }
        _ => DEFAULT_LANGUAGE,
    }
}

/// Flat key → localized string mapping for one language.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TranslationMap {
    entries: HashMap<String, String>,
}

impl TranslationMap {
    /// Parse a locale JSON document. Non-string values are dropped.
    ///
    /// # Errors
    /// Returns the JSON error when the document is not an object.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let parsed: HashMap<String, Value> = serde_json::from_str(raw)?;
        Ok(parsed
            .into_iter()
            .filter_map(|(key, value)| match value {
                Value::String(text) => Some((key, text)),
                _ => None,
            })
            .collect())
    }

    /// Resolve a key; empty strings count as missing.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .get(key)
            .map(String::as_str)
            .filter(|text| !text.is_empty())
    }

    /// Resolve a key or fall back to the caller default.
    #[must_use]
    pub fn text(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or(default).to_string()
    }

    /// Number of entries [`Self::get`] resolves (empty strings excluded).
    #[must_use]
    pub fn translated_count(&self) -> usize {
        self.entries.values().filter(|text| !text.is_empty()).count()
    }
}

impl FromIterator<(String, String)> for TranslationMap {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Active language plus its mapping.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct I18nState {
    /// Code of the loaded mapping, `None` before the first successful load.
    pub language: Option<String>,
    /// Loaded mapping.
    pub map: TranslationMap,
}

/// Attribute naming the text translation key.
pub const TEXT_MARKER: &str = "data-i18n";

/// Attributes that can be translated through `data-i18n-{attr}` markers.
pub const TRANSLATABLE_ATTRIBUTES: [&str; 3] = ["placeholder", "title", "aria-label"];

/// Selector matching every element carrying any translation marker.
#[must_use]
pub fn marker_selector() -> String {
    let mut selector = format!("[{TEXT_MARKER}]");
    for attr in TRANSLATABLE_ATTRIBUTES {
        selector.push_str(&format!(",[{TEXT_MARKER}-{attr}]"));
    }
    selector
}

/// Minimal element surface needed to apply translations.
pub trait TranslationTarget {
    /// Read an attribute value.
    fn attribute(&self, name: &str) -> Option<String>;
    /// Replace the element's text content (never parsed as markup).
    fn set_text(&self, text: &str);
    /// Set an attribute value.
    fn set_attribute_value(&self, name: &str, value: &str);
}

/// Apply the mapping to one element. Returns how many assignments were made.
///
/// Unmarked elements and unknown keys are left untouched.
pub fn translate_element<T: TranslationTarget + ?Sized>(map: &TranslationMap, element: &T) -> usize {
    let mut applied = 0;
    if let Some(key) = element.attribute(TEXT_MARKER) {
        if let Some(text) = map.get(&key) {
            element.set_text(text);
            applied += 1;
        }
    }
    for attr in TRANSLATABLE_ATTRIBUTES {
        let marker = format!("{TEXT_MARKER}-{attr}");
        if let Some(key) = element.attribute(&marker) {
            if let Some(text) = map.get(&key) {
                element.set_attribute_value(attr, text);
                applied += 1;
            }
        }
    }
    applied
}

/// Codes to try, in order, when loading `requested`.
#[must_use]
pub fn translation_attempts(requested: &str, fallback: &str) -> Vec<String> {
    if requested == fallback {
        vec![requested.to_string()]
    } else {
        vec![requested.to_string(), fallback.to_string()]
    }
}

/// Outcome of a translation load.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A mapping was loaded for the given code.
    Loaded {
        /// Code actually loaded (the fallback when the request failed).
        language: String,
        /// Parsed mapping.
        map: TranslationMap,
    },
    /// Every attempt failed; the caller keeps its previous mapping.
    Failed {
        /// Per-attempt failure messages.
        errors: Vec<String>,
    },
}

/// Load `requested`, retrying once with `fallback` on failure.
pub async fn load_with_fallback<F, Fut>(requested: &str, fallback: &str, mut fetch: F) -> LoadOutcome
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<TranslationMap, String>>,
{
    let mut errors = Vec::new();
    for language in translation_attempts(requested, fallback) {
        match fetch(language.clone()).await {
            Ok(map) => return LoadOutcome::Loaded { language, map },
            Err(err) => errors.push(format!("{language}: {err}")),
        }
    }
    LoadOutcome::Failed { errors }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;
    use std::collections::BTreeMap;

    #[derive(Default)]
    struct FakeElement {
        attrs: RefCell<BTreeMap<String, String>>,
        text: RefCell<String>,
    }

    impl FakeElement {
        fn with(attrs: &[(&str, &str)], text: &str) -> Self {
            Self {
                attrs: RefCell::new(
                    attrs
                        .iter()
                        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                        .collect(),
                ),
                text: RefCell::new(text.to_string()),
            }
        }
    }

    impl TranslationTarget for FakeElement {
        fn attribute(&self, name: &str) -> Option<String> {
            self.attrs.borrow().get(name).cloned()
        }

        fn set_text(&self, text: &str) {
            *self.text.borrow_mut() = text.to_string();
        }

        fn set_attribute_value(&self, name: &str, value: &str) {
            self.attrs
                .borrow_mut()
                .insert(name.to_string(), value.to_string());
        }
    }

    fn map(pairs: &[(&str, &str)]) -> TranslationMap {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn shipped_locales_cover_nav_labels() {
        let shipped = [
            include_str!("../../static/locales/en.json"),
            include_str!("../../static/locales/de.json"),
        ];
        for raw in shipped {
            let parsed = TranslationMap::from_json(raw).expect("locale file");
            for key in ["nav.videos", "nav.logout", "nav.signup", "nav.login"] {
                assert!(parsed.get(key).is_some(), "missing {key}");
            }
        }
    }

    #[test]
    fn language_codes_parse_loosely() {
        assert_eq!(LanguageCode::from_code("DE"), Some(LanguageCode::De));
        assert_eq!(LanguageCode::from_code("en-US"), Some(LanguageCode::En));
        assert_eq!(LanguageCode::from_code("de_AT"), Some(LanguageCode::De));
        assert_eq!(LanguageCode::from_code("fr"), None);
    }

    #[test]
    fn dach_countries_map_to_german() {
        assert_eq!(language_for_country(Some("AT")), LanguageCode::De);
        assert_eq!(language_for_country(Some("ch")), LanguageCode::De);
        assert_eq!(language_for_country(Some("DE")), LanguageCode::De);
        assert_eq!(language_for_country(Some("US")), LanguageCode::En);
        assert_eq!(language_for_country(None), LanguageCode::En);
    }

    #[test]
    fn from_json_keeps_only_strings() {
        let parsed =
            TranslationMap::from_json(r#"{"nav.login":"Anmelden","count":3,"empty":""}"#)
                .expect("map");
        assert_eq!(parsed.get("nav.login"), Some("Anmelden"));
        assert_eq!(parsed.get("count"), None);
        assert_eq!(parsed.get("empty"), None);
        assert_eq!(parsed.translated_count(), 1);
        assert_eq!(parsed.text("missing", "Login"), "Login");
        assert!(TranslationMap::from_json("[1,2]").is_err());
    }

    #[test]
    fn unmarked_elements_are_untouched() {
        let translations = map(&[("title", "Titel")]);
        let element = FakeElement::with(&[("class", "hero"), ("title", "Title")], "Welcome");
        assert_eq!(translate_element(&translations, &element), 0);
        assert_eq!(*element.text.borrow(), "Welcome");
        assert_eq!(element.attribute("title").as_deref(), Some("Title"));
    }

    #[test]
    fn unknown_keys_leave_text_in_place() {
        let element = FakeElement::with(&[("data-i18n", "hero.missing")], "Welcome");
        assert_eq!(translate_element(&TranslationMap::default(), &element), 0);
        assert_eq!(*element.text.borrow(), "Welcome");
    }

    #[test]
    fn markup_values_are_assigned_as_text() {
        let translations = map(&[("hero.title", "<img src=x onerror=alert(1)>")]);
        let element = FakeElement::with(&[("data-i18n", "hero.title")], "Welcome");
        assert_eq!(translate_element(&translations, &element), 1);
        assert_eq!(*element.text.borrow(), "<img src=x onerror=alert(1)>");
    }

    #[test]
    fn attribute_markers_set_their_attribute() {
        let translations = map(&[("form.email", "E-Mail-Adresse"), ("form.close", "Schließen")]);
        let element = FakeElement::with(
            &[
                ("data-i18n-placeholder", "form.email"),
                ("data-i18n-aria-label", "form.close"),
                ("data-i18n-title", "form.unknown"),
            ],
            "",
        );
        assert_eq!(translate_element(&translations, &element), 2);
        assert_eq!(element.attribute("placeholder").as_deref(), Some("E-Mail-Adresse"));
        assert_eq!(element.attribute("aria-label").as_deref(), Some("Schließen"));
        assert_eq!(element.attribute("title"), None);
    }

    #[test]
    fn selector_covers_all_markers() {
        assert_eq!(
            marker_selector(),
            "[data-i18n],[data-i18n-placeholder],[data-i18n-title],[data-i18n-aria-label]"
        );
    }

    #[test]
    fn failed_language_falls_back_to_english() {
        let requested = RefCell::new(Vec::new());
        let outcome = block_on(load_with_fallback("fr", "en", |code| {
            requested.borrow_mut().push(code.clone());
            async move {
                if code == "en" {
                    Ok(map(&[("nav.login", "Login")]))
                } else {
                    Err("http 404".to_string())
                }
            }
        }));
        assert_eq!(*requested.borrow(), vec!["fr".to_string(), "en".to_string()]);
        match outcome {
            LoadOutcome::Loaded { language, map } => {
                assert_eq!(language, "en");
                assert_eq!(map.get("nav.login"), Some("Login"));
            }
            LoadOutcome::Failed { .. } => panic!("expected english fallback"),
        }
    }

    #[test]
    fn fallback_language_is_not_retried() {
        let calls = RefCell::new(0);
        let outcome = block_on(load_with_fallback("en", "en", |_| {
            *calls.borrow_mut() += 1;
            async { Err::<TranslationMap, _>("network".to_string()) }
        }));
        assert_eq!(*calls.borrow(), 1);
        assert_eq!(
            outcome,
            LoadOutcome::Failed {
                errors: vec!["en: network".to_string()]
            }
        );
    }
}
