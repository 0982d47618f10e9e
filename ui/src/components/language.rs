//! Wiring of the language controller to the page: the switch coroutine and
//! the FR/EN toggle in the header.

use dioxus::prelude::*;
use futures_util::StreamExt;
use tracing::warn;

use crate::components::notice::{show_notice, Notice, NoticeKind};
use crate::config::SiteConfig;
use crate::core::fetch::HttpSource;
use crate::core::storage::PlatformStore;
use crate::i18n::bindings::SITE_BINDINGS;
use crate::i18n::controller::saved_preference;
use crate::i18n::store::built_in;
use crate::i18n::{
    BoundContent, ContentBinder, LanguageController, Locale, SwitchOutcome, TranslationStore,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageEvent {
    Switch(Locale),
}

/// Page content bound from the built-in French dictionary, so the first
/// render never waits on the network.
pub fn initial_content() -> BoundContent {
    let mut content = BoundContent::default();
    match built_in(Locale::Fr) {
        Ok(tree) => {
            ContentBinder::new(SITE_BINDINGS).apply_all(&tree, &mut content);
        }
        Err(err) => warn!("built-in French dictionary unusable: {err}"),
    }
    content
}

/// Provide the bound content and the language controller, start the switch
/// coroutine and replay the stored preference.
pub fn use_language_switcher(config: &SiteConfig, notice: Signal<Option<Notice>>) {
    let content = use_signal(initial_content);
    use_context_provider(|| content);
    let controller = use_signal(LanguageController::default);
    use_context_provider(|| controller);

    let translations_url = config.absolute(&config.translations_url);
    let language_key = config.language_key.clone();
    let notice_ms = config.notice_ms;

    let switcher = use_coroutine(move |mut rx: UnboundedReceiver<LanguageEvent>| {
        let store = TranslationStore::new(HttpSource::default(), translations_url.clone());
        let binder = ContentBinder::new(SITE_BINDINGS);
        let language_key = language_key.clone();
        let mut controller = controller;
        async move {
            while let Some(LanguageEvent::Switch(lang)) = rx.next().await {
                let Some(ticket) = controller.with_mut(|c| c.begin(lang)) else {
                    continue;
                };
                let store = store.clone();
                let binder = binder.clone();
                let language_key = language_key.clone();
                let mut content = content;
                spawn(async move {
                    let loaded = store.load(ticket.locale()).await;
                    let outcome = controller.with_mut(|c| {
                        content.with_mut(|page| {
                            c.complete(ticket, loaded, &binder, page, &PlatformStore, &language_key)
                        })
                    });
                    if let SwitchOutcome::Failed(_) = outcome {
                        let text = content.read().text("notices.language_failed").to_string();
                        show_notice(notice, Notice::new(NoticeKind::Error, text), notice_ms);
                    }
                });
            }
        }
    });

    let key = config.language_key.clone();
    use_hook(move || match saved_preference(&PlatformStore, &key) {
        Ok(Some(saved)) => switcher.send(LanguageEvent::Switch(saved)),
        Ok(None) => {}
        Err(err) => warn!("language preference unreadable: {err}"),
    });
}

/// FR | EN buttons; the committed locale carries the active class.
#[component]
pub fn LanguageToggle() -> Element {
    let controller = use_context::<Signal<LanguageController>>();
    let switcher = use_coroutine_handle::<LanguageEvent>();
    let current = controller.read().current();

    rsx! {
        div { class: "lang-toggle", role: "group",
            for locale in Locale::ALL {
                button {
                    key: "{locale}",
                    r#type: "button",
                    class: if locale == current { "lang-btn active" } else { "lang-btn" },
                    aria_pressed: if locale == current { "true" } else { "false" },
                    onclick: move |_| switcher.send(LanguageEvent::Switch(locale)),
                    "{locale.code().to_uppercase()}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_render_is_french() {
        let content = initial_content();
        assert_eq!(content.len(), SITE_BINDINGS.len());
        assert_eq!(content.text("nav.formules"), "Formules");
        assert_eq!(content.placeholder("contact.email"), "Email");
    }
}
