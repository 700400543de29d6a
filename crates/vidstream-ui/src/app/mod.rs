//! Browser shell: root component, bootstrap, and effect runners.

use crate::components::shell::ShellHeader;
use crate::core::events::ShellEvent;
use gloo::utils::document;
use runtime::Runtime;
use yew::prelude::*;

mod auth;
mod dashboard;
mod dom;
mod language;
mod listeners;
mod preferences;
mod router;
pub(crate) mod runtime;

#[function_component(ShellApp)]
pub fn shell_app() -> Html {
    let runtime = use_memo(|_| Runtime::new(preferences::load_config()), ());

    {
        let runtime = (*runtime).clone();
        use_effect_with_deps(
            move |_| {
                let listeners = listeners::register(&runtime);
                yew::platform::spawn_local(bootstrap(runtime));
                move || drop(listeners)
            },
            (),
        );
    }

    html! {
        <ContextProvider<Runtime> context={(*runtime).clone()}>
            <ShellHeader />
        </ContextProvider<Runtime>>
    }
}

/// Startup: track the initial fragment, run the auth probe and language
/// resolution concurrently, then allow the first content load.
async fn bootstrap(runtime: Runtime) {
    runtime.emit(ShellEvent::HashChanged(dom::current_hash()));
    futures::join!(
        auth::update_auth_ui(&runtime),
        language::load_initial_language(&runtime)
    );
    runtime.emit(ShellEvent::Ready);
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = document().get_element_by_id(dom::HEADER_ROOT_ID) {
        yew::Renderer::<ShellApp>::with_root(root).render();
    } else {
        yew::Renderer::<ShellApp>::new().render();
    }
}
