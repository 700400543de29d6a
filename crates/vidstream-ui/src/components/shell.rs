use crate::app::runtime::Runtime;
use crate::components::language_switcher::LanguageSwitcher;
use crate::components::nav::AuthLinks;
use yew::prelude::*;

/// Top bar: brand, session-aware links, and the language switcher.
#[function_component(ShellHeader)]
pub(crate) fn shell_header() -> Html {
    let landing = use_context::<Runtime>()
        .map(|runtime| runtime.config().landing_path.clone())
        .unwrap_or_default();

    html! {
        <nav class="shell-nav">
            <a href={landing} class="nav-link brand">
                <strong>{"Vidstream"}</strong>
            </a>
            <AuthLinks />
            <LanguageSwitcher />
        </nav>
    }
}
