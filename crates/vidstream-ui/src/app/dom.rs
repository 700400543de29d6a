//! DOM helpers shared by the runners.
//!
//! # Design
//! - Lookups return `anyhow::Result` with the missing selector as context;
//!   handler boundaries log and carry on.
//! - Text is assigned with `set_text_content`; only fetched partials go through `set_inner_html`.

use crate::i18n::{TranslationMap, TranslationTarget, marker_selector, translate_element};
use anyhow::{Context, anyhow};
use gloo::utils::{document, window};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event};

/// Container receiving content partials.
pub(crate) const CONTENT_CONTAINER_ID: &str = "content-container";
/// Mount point of the Yew header (nav plus switcher).
pub(crate) const HEADER_ROOT_ID: &str = "app-header";

impl TranslationTarget for Element {
    fn attribute(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }

    fn set_text(&self, text: &str) {
        self.set_text_content(Some(text));
    }

    fn set_attribute_value(&self, name: &str, value: &str) {
        if let Err(err) = self.set_attribute(name, value) {
            gloo::console::warn!("attribute update failed", name.to_string(), err);
        }
    }
}

pub(crate) fn element_by_id(id: &str) -> anyhow::Result<Element> {
    document()
        .get_element_by_id(id)
        .with_context(|| format!("element #{id} not found"))
}

pub(crate) fn create_element(tag: &str) -> anyhow::Result<Element> {
    document()
        .create_element(tag)
        .map_err(|err| anyhow!("create <{tag}> failed: {err:?}"))
}

pub(crate) fn set_attr(element: &Element, name: &str, value: &str) -> anyhow::Result<()> {
    element
        .set_attribute(name, value)
        .map_err(|err| anyhow!("set {name} failed: {err:?}"))
}

pub(crate) fn append(parent: &Element, child: &Element) -> anyhow::Result<()> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|err| anyhow!("append failed: {err:?}"))
}

/// `<p>` holding plain text.
pub(crate) fn text_paragraph(text: &str) -> anyhow::Result<Element> {
    let paragraph = create_element("p")?;
    paragraph.set_text_content(Some(text));
    Ok(paragraph)
}

/// Replace the children of `container` with a single plain-text paragraph.
pub(crate) fn show_message(container: &Element, text: &str) -> anyhow::Result<()> {
    container.set_text_content(None);
    append(container, &text_paragraph(text)?)
}

/// Inject a fetched partial into the content container.
pub(crate) fn inject_content(html: &str) -> anyhow::Result<()> {
    element_by_id(CONTENT_CONTAINER_ID)?.set_inner_html(html);
    Ok(())
}

/// Show an inline error in the content container.
pub(crate) fn show_content_error(message: &str) -> anyhow::Result<()> {
    show_message(
        &element_by_id(CONTENT_CONTAINER_ID)?,
        &format!("Error loading page: {message}"),
    )
}

/// Run the marker pass over the whole document.
pub(crate) fn apply_translations(map: &TranslationMap) -> usize {
    let Ok(nodes) = document().query_selector_all(&marker_selector()) else {
        return 0;
    };
    let mut applied = 0;
    for index in 0..nodes.length() {
        if let Some(element) = nodes.item(index).and_then(|node| node.dyn_into::<Element>().ok()) {
            applied += translate_element(map, &element);
        }
    }
    applied
}

pub(crate) fn set_document_language(language: &str) {
    if let Some(root) = document().document_element() {
        if let Err(err) = root.set_attribute("lang", language) {
            gloo::console::warn!("html lang update failed", err);
        }
    }
}

pub(crate) fn current_hash() -> String {
    window().location().hash().unwrap_or_default()
}

pub(crate) fn write_hash(page: &str) {
    if let Err(err) = window().location().set_hash(page) {
        gloo::console::error!("hash update failed", page.to_string(), err);
    }
}

/// Nearest ancestor of the event target (inclusive) matching `selector`.
pub(crate) fn closest_target(event: &Event, selector: &str) -> Option<Element> {
    event
        .target()?
        .dyn_into::<Element>()
        .ok()?
        .closest(selector)
        .ok()
        .flatten()
}
