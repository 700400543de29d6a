//! Content loading for the current route.

use crate::app::dashboard;
use crate::app::dom;
use crate::app::runtime::Runtime;
use crate::core::events::ShellEvent;
use crate::core::routing::{ContentAction, load_content};
use gloo::console;

/// Fetch, classify, and render the partial for `page`.
///
/// Results of superseded loads are dropped before touching the DOM.
pub(crate) async fn load_page(runtime: Runtime, page: String) {
    let ticket = runtime.begin_load();
    let config = runtime.config().clone();
    let language = runtime.store().content_language(&config.fallback_language);
    let client = runtime.client();
    let outcome = load_content(&page, &language, &config, |url| {
        let client = client.clone();
        async move { client.fetch_partial(&url).await.map_err(|err| err.to_string()) }
    })
    .await;

    let Some(outcome) = runtime.accept_load(ticket, outcome) else {
        console::log!("discarding superseded content load", page);
        return;
    };

    match outcome.action {
        ContentAction::Inject { html } => match dom::inject_content(&html) {
            Ok(()) => {
                console::info!("content loaded", outcome.fetched.join(" -> "));
                runtime.apply_translations();
            }
            Err(err) => console::error!("content injection failed", err.to_string()),
        },
        ContentAction::Redirect { page: target } => {
            console::warn!("content requires login", page, target.clone());
            runtime.emit(ShellEvent::Navigate(target));
            return;
        }
        ContentAction::Error { message } => {
            console::error!("content load failed", page, message.clone());
            if let Err(err) = dom::show_content_error(&message) {
                console::error!("content error render failed", err.to_string());
            }
        }
    }

    if outcome.initialize_dashboard {
        dashboard::initialize_dashboard(&runtime).await;
    }
}
