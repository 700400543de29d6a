//! Document-level delegated listeners.
//!
//! # Design
//! - Injected partials are plain markup, so their links and forms are handled by
//!   delegation at the document rather than per-element handlers.
//! - The returned guards unregister everything when dropped.

use crate::app::auth;
use crate::app::dom::{closest_target, current_hash};
use crate::app::runtime::Runtime;
use crate::core::auth::FormKind;
use crate::core::events::ShellEvent;
use crate::core::routing::link_route;
use crate::core::switcher::SwitcherState;
use crate::core::video::{ENTRY_CLASS, KEY_ATTRIBUTE};
use gloo::events::{EventListener, EventListenerOptions};
use gloo::utils::{document, window};
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlFormElement};

const SWITCHER_SELECTOR: &str = ".language-switcher";

pub(crate) fn register(runtime: &Runtime) -> Vec<EventListener> {
    let on_hash = {
        let runtime = runtime.clone();
        EventListener::new(&window(), "hashchange", move |_| {
            runtime.emit(ShellEvent::HashChanged(current_hash()));
        })
    };
    let on_click = {
        let runtime = runtime.clone();
        EventListener::new_with_options(
            &document(),
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event| handle_click(&runtime, event),
        )
    };
    let on_submit = {
        let runtime = runtime.clone();
        EventListener::new_with_options(
            &document(),
            "submit",
            EventListenerOptions::enable_prevent_default(),
            move |event| handle_submit(&runtime, event),
        )
    };
    vec![on_hash, on_click, on_submit]
}

fn handle_click(runtime: &Runtime, event: &Event) {
    if closest_target(event, SWITCHER_SELECTOR).is_none()
        && runtime.store().switcher == SwitcherState::Open
    {
        runtime.emit(ShellEvent::OutsideClicked);
    }

    if let Some(link) = closest_target(event, ".nav-link") {
        event.prevent_default();
        let href = link.get_attribute("href").unwrap_or_default();
        let route = link_route(&href, &runtime.store().route.page);
        runtime.emit(ShellEvent::Navigate(route));
        return;
    }

    if closest_target(event, "#logout-link").is_some() {
        event.prevent_default();
        yew::platform::spawn_local(auth::logout(runtime.clone()));
        return;
    }

    if let Some(entry) = closest_target(event, &format!(".{ENTRY_CLASS}")) {
        event.prevent_default();
        if let Some(key) = entry.get_attribute(KEY_ATTRIBUTE) {
            runtime.emit(ShellEvent::VideoSelected(key));
        }
    }
}

fn handle_submit(runtime: &Runtime, event: &Event) {
    let Some(form) = event
        .target()
        .and_then(|target| target.dyn_into::<HtmlFormElement>().ok())
    else {
        return;
    };
    let Some(kind) = FormKind::from_form_id(&form.id()) else {
        return;
    };
    event.prevent_default();
    yew::platform::spawn_local(auth::submit_form(runtime.clone(), form, kind));
}
