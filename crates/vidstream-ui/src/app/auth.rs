//! Session probe, credential forms, and logout.

use crate::app::runtime::Runtime;
use crate::core::auth::{AuthStatus, FormKind, form_error_message};
use crate::core::events::ShellEvent;
use crate::services::api::ApiError;
use anyhow::anyhow;
use gloo::console;
use vidstream_api_models::Credentials;
use wasm_bindgen::JsCast;
use web_sys::{Element, FormData, HtmlFormElement};

/// Probe the session and re-render the nav bar.
pub(crate) async fn update_auth_ui(runtime: &Runtime) {
    let status = match runtime.client().check_auth().await {
        Ok(status) => AuthStatus::from_probe(Ok(status)),
        Err(err) => {
            console::error!("auth check failed", err.to_string());
            AuthStatus::from_probe(Err(()))
        }
    };
    runtime.emit(ShellEvent::AuthResolved(status));
}

/// Submit a login or signup form and route to the dashboard on success.
pub(crate) async fn submit_form(runtime: Runtime, form: HtmlFormElement, kind: FormKind) {
    let error_slot = error_slot(&form);
    if let Some(slot) = &error_slot {
        slot.set_text_content(Some(""));
    }

    let credentials = match form_credentials(&form) {
        Ok(credentials) => credentials,
        Err(err) => {
            console::error!("form serialization failed", err.to_string());
            return;
        }
    };

    match runtime.client().submit_credentials(kind, &credentials).await {
        Ok(()) => {
            update_auth_ui(&runtime).await;
            runtime.emit(ShellEvent::Navigate(runtime.config().dashboard_path.clone()));
        }
        Err(err) => {
            console::error!("credential submission failed", kind.endpoint(), err.to_string());
            let message = match &err {
                ApiError::Status { body, .. } => form_error_message(body.as_ref()),
                ApiError::Network { .. } | ApiError::Decode { .. } => err.to_string(),
            };
            if let Some(slot) = &error_slot {
                slot.set_text_content(Some(&message));
            }
        }
    }
}

/// End the session, refresh the nav, and return to the landing page.
pub(crate) async fn logout(runtime: Runtime) {
    if let Err(err) = runtime.client().logout().await {
        console::error!("logout failed", err.to_string());
    }
    update_auth_ui(&runtime).await;
    runtime.emit(ShellEvent::Navigate(runtime.config().landing_path.clone()));
}

fn error_slot(form: &HtmlFormElement) -> Option<Element> {
    form.closest(".auth-form")
        .ok()
        .flatten()?
        .query_selector("#error-message")
        .ok()
        .flatten()
}

fn form_credentials(form: &HtmlFormElement) -> anyhow::Result<Credentials> {
    let data = FormData::new_with_form(form).map_err(|err| anyhow!("form data unavailable: {err:?}"))?;
    let entries = js_sys::try_iter(&data)
        .map_err(|err| anyhow!("form data not iterable: {err:?}"))?
        .ok_or_else(|| anyhow!("form data not iterable"))?;
    let mut credentials = Credentials::default();
    for entry in entries {
        let entry = entry.map_err(|err| anyhow!("form entry unreadable: {err:?}"))?;
        let pair: js_sys::Array = entry.unchecked_into();
        if let (Some(name), Some(value)) = (pair.get(0).as_string(), pair.get(1).as_string()) {
            credentials.insert(name, value);
        }
    }
    Ok(credentials)
}
