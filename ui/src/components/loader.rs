use dioxus::prelude::*;

use crate::config::SiteConfig;
use crate::core::timing;
use crate::i18n::BoundContent;

/// Full-screen intro loader, dismissed once `loader_ms` has elapsed.
#[component]
pub fn IntroLoader() -> Element {
    let config = use_context::<SiteConfig>();
    let content = use_context::<Signal<BoundContent>>();
    let mut visible = use_signal(|| true);

    let delay = config.loader_ms;
    use_future(move || async move {
        timing::sleep_ms(delay).await;
        visible.set(false);
    });

    let text = content.read().text("loader.text").to_string();

    rsx! {
        div {
            class: if visible() { "loader" } else { "loader loader--hidden" },
            aria_hidden: if visible() { "false" } else { "true" },
            div { class: "loader__wave" }
            p { class: "loader__text", "{text}" }
        }
    }
}
