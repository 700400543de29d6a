//! Flag dropdown for choosing the display language.
//!
//! Presentation only: clicks are turned into shell events and the dropdown state
//! comes from the store. Outside clicks are detected by the document listener.

use crate::app::runtime::Runtime;
use crate::core::events::ShellEvent;
use crate::core::store::ShellStore;
use crate::core::switcher::SwitcherState;
use crate::i18n::LanguageCode;
use yew::prelude::*;
use yewdux::prelude::use_selector;

#[function_component(LanguageSwitcher)]
pub(crate) fn language_switcher() -> Html {
    let runtime = use_context::<Runtime>();
    let display = use_selector(|store: &ShellStore| store.display_language);
    let switcher = use_selector(|store: &ShellStore| store.switcher);
    let Some(runtime) = runtime else {
        return html! {};
    };

    let on_toggle = {
        let runtime = runtime.clone();
        Callback::from(move |_: MouseEvent| runtime.emit(ShellEvent::SwitcherToggled))
    };
    let open = *switcher == SwitcherState::Open;

    html! {
        <div class="language-switcher">
            <button
                type="button"
                class="current-lang"
                aria-haspopup="true"
                aria-expanded={switcher.aria_expanded()}
                onclick={on_toggle}
            >
                <img src={display.flag_src()} alt={display.label()} data-lang={display.code()} />
            </button>
            <ul class={classes!("lang-dropdown", open.then_some("is-open"))}>
                {for LanguageCode::all().into_iter().map(|language| {
                    let runtime = runtime.clone();
                    let onclick = Callback::from(move |event: MouseEvent| {
                        event.prevent_default();
                        runtime.emit(ShellEvent::LanguageSelected(language));
                    });
                    html! {
                        <li>
                            <button type="button" data-lang={language.code()} onclick={onclick}>
                                <img src={language.flag_src()} alt={language.label()} />
                                {" "}{language.label()}
                            </button>
                        </li>
                    }
                })}
            </ul>
        </div>
    }
}
