//! Session-aware navigation links.
//!
//! # Design
//! - Re-rendered from the store on every auth or language change; the previous
//!   link set is always replaced, never merged.
//! - Links carry `nav-link` so the document listener routes them like links in partials.

use crate::app::runtime::Runtime;
use crate::core::auth::nav_entries;
use crate::core::store::ShellStore;
use yew::prelude::*;
use yewdux::prelude::use_selector;

#[function_component(AuthLinks)]
pub(crate) fn auth_links() -> Html {
    let runtime = use_context::<Runtime>();
    let auth = use_selector(|store: &ShellStore| store.auth);
    let translations = use_selector(|store: &ShellStore| store.i18n.map.clone());
    let Some(runtime) = runtime else {
        return html! { <ul id="auth-links"></ul> };
    };

    html! {
        <ul id="auth-links">
            {for nav_entries(*auth).iter().map(|entry| {
                let label = translations.text(entry.key, entry.default_label);
                match entry.action.route(runtime.config()) {
                    None => html! {
                        <li><a href="#" id="logout-link">{label}</a></li>
                    },
                    Some(route) => html! {
                        <li>
                            <a
                                href={route}
                                class={classes!("nav-link", entry.secondary.then_some("secondary"))}
                            >
                                {label}
                            </a>
                        </li>
                    },
                }
            })}
        </ul>
    }
}
