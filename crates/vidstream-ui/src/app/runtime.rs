//! Browser runtime executing reducer effects.
//!
//! # Design
//! - Exactly one runtime exists per boot; components reach it through context.
//! - [`Runtime::emit`] reduces an event and spawns its async effects;
//!   [`Runtime::settle`] awaits them in order (used during startup).

use crate::app::{dashboard, dom, language, preferences, router};
use crate::core::config::ShellConfig;
use crate::core::events::{Effect, ShellEvent, reduce};
use crate::core::routing::LoadSequencer;
use crate::core::store::ShellStore;
use crate::services::api::ApiClient;
use futures::FutureExt;
use futures::future::LocalBoxFuture;
use std::cell::RefCell;
use std::rc::Rc;
use yewdux::prelude::Dispatch;

struct RuntimeInner {
    config: ShellConfig,
    client: Rc<ApiClient>,
    sequencer: RefCell<LoadSequencer>,
    dispatch: Dispatch<ShellStore>,
}

/// Shared handle to configuration, client, and store.
#[derive(Clone)]
pub(crate) struct Runtime {
    inner: Rc<RuntimeInner>,
}

impl PartialEq for Runtime {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Runtime {
    pub(crate) fn new(config: ShellConfig) -> Self {
        Self {
            inner: Rc::new(RuntimeInner {
                client: Rc::new(ApiClient::new(config.clone())),
                config,
                sequencer: RefCell::new(LoadSequencer::default()),
                dispatch: Dispatch::<ShellStore>::new(),
            }),
        }
    }

    pub(crate) fn config(&self) -> &ShellConfig {
        &self.inner.config
    }

    pub(crate) fn client(&self) -> Rc<ApiClient> {
        self.inner.client.clone()
    }

    pub(crate) fn store(&self) -> Rc<ShellStore> {
        self.inner.dispatch.get()
    }

    /// Ticket for a new content load.
    pub(crate) fn begin_load(&self) -> u64 {
        self.inner.sequencer.borrow_mut().begin()
    }

    /// `outcome` if `ticket` was not superseded by a newer load.
    pub(crate) fn accept_load<T>(&self, ticket: u64, outcome: T) -> Option<T> {
        self.inner.sequencer.borrow().accept(ticket, outcome)
    }

    /// Re-run the marker pass with the active mapping.
    pub(crate) fn apply_translations(&self) {
        let applied = dom::apply_translations(&self.store().i18n.map);
        gloo::console::debug!("translations applied", applied);
    }

    /// Reduce an event and start its effects.
    pub(crate) fn emit(&self, event: ShellEvent) {
        for effect in self.reduce(event) {
            if let Some(task) = self.execute(effect) {
                yew::platform::spawn_local(task);
            }
        }
    }

    /// Reduce an event and await its effects in order.
    pub(crate) async fn settle(&self, event: ShellEvent) {
        for effect in self.reduce(event) {
            if let Some(task) = self.execute(effect) {
                task.await;
            }
        }
    }

    fn reduce(&self, event: ShellEvent) -> Vec<Effect> {
        let config = &self.inner.config;
        let mut effects = Vec::new();
        self.inner.dispatch.reduce_mut(|store| {
            effects = reduce(store, event, config);
        });
        effects
    }

    fn execute(&self, effect: Effect) -> Option<LocalBoxFuture<'static, ()>> {
        match effect {
            Effect::WriteHash(page) => {
                dom::write_hash(&page);
                None
            }
            Effect::LoadContent { page } => Some(router::load_page(self.clone(), page).boxed_local()),
            Effect::PersistLanguage(language) => {
                preferences::persist_language(self.config(), language);
                None
            }
            Effect::LoadTranslations {
                language,
                follow_up,
            } => Some(language::load_translations(self.clone(), language, follow_up).boxed_local()),
            Effect::SetDocumentLanguage(language) => {
                dom::set_document_language(&language);
                None
            }
            Effect::ApplyTranslations => {
                self.apply_translations();
                None
            }
            Effect::PlayVideo { key } => Some(dashboard::play_video(self.clone(), key).boxed_local()),
        }
    }
}
