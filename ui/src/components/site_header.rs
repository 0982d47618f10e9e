use dioxus::prelude::*;

use crate::components::language::LanguageToggle;
use crate::i18n::BoundContent;
use crate::slides::nav::NavControl;
use crate::slides::{DeckEvent, SlideEngine, HEADER_LINKS};

/// Fixed header: brand, one link per slide and the language toggle.
///
/// Links keep a real `#anchor` href so they work without the deck, but a
/// click is routed to the deck directly; re-clicking the current hash would
/// not fire `hashchange`.
#[component]
pub fn SiteHeader() -> Element {
    let engine = use_context::<Signal<SlideEngine>>();
    let content = use_context::<Signal<BoundContent>>();
    let deck = use_coroutine_handle::<DeckEvent>();

    let snapshot = *engine.read().nav();
    let anchors: Vec<&'static str> = engine
        .read()
        .registry()
        .slides()
        .iter()
        .map(|slide| slide.anchor())
        .collect();
    let content = content.read();

    rsx! {
        header { id: "navbar", class: "header",
            div { class: "header__inner",
                a {
                    class: "header__brand",
                    href: "#intro",
                    onclick: move |evt| {
                        evt.prevent_default();
                        deck.send(DeckEvent::Jump(0));
                    },
                    span { class: "header__brand-mark", "EXPERIENCE" }
                }

                nav { class: "nav",
                    for link in HEADER_LINKS {
                        if let NavControl::Link { label_key } = link.control {
                            a {
                                key: "{link.target}",
                                class: if snapshot.is_active(&link) { "nav__link active" } else { "nav__link" },
                                href: "#{anchors.get(link.target).copied().unwrap_or_default()}",
                                onclick: move |evt| {
                                    evt.prevent_default();
                                    deck.send(DeckEvent::Jump(link.target));
                                },
                                "{content.text(label_key)}"
                            }
                        }
                    }
                }

                LanguageToggle {}
            }
        }
    }
}
