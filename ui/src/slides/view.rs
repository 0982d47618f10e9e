use std::rc::Rc;

use dioxus::html::point_interaction::InteractionLocation;
use dioxus::prelude::*;
use futures_util::StreamExt;

use crate::config::SiteConfig;
use crate::core::{platform, timing};
use crate::i18n::BoundContent;

use super::engine::SlideEngine;
use super::gesture::{key_intent, wheel_intent, Intent, KeyOrigin, SwipeTracker};
use super::nav::dots;
use super::registry::{SlideChange, SlideRegistry};

/// Everything that can move the deck. Sent to the deck coroutine, which is
/// the only writer of the engine signal.
#[derive(Debug, Clone, PartialEq)]
pub enum DeckEvent {
    Wheel { delta_y: f64 },
    Key { key: String, origin: KeyOrigin },
    TouchStart { y: f64 },
    TouchEnd { y: f64 },
    /// Gated step, e.g. the scroll indicator.
    Step(Intent),
    /// Direct jump from a nav link, dot or trigger.
    Jump(usize),
    /// Jump by URL hash; unknown anchors are ignored.
    Anchor(String),
}

/// Route one input event to the engine. Wheel, key, swipe and step events
/// go through the gated [`SlideEngine::apply`]; jumps and anchors use
/// [`SlideEngine::go_to`], which still starts the cooldown.
pub fn dispatch(
    engine: &mut SlideEngine,
    swipe: &mut SwipeTracker,
    event: DeckEvent,
    now: f64,
) -> Option<SlideChange> {
    match event {
        DeckEvent::Wheel { delta_y } => engine.apply(wheel_intent(delta_y)?, now),
        DeckEvent::Key { key, origin } => engine.apply(key_intent(&key, origin)?, now),
        DeckEvent::TouchStart { y } => {
            swipe.touch_start(y);
            None
        }
        DeckEvent::TouchEnd { y } => engine.apply(swipe.touch_end(y)?, now),
        DeckEvent::Step(intent) => engine.apply(intent, now),
        DeckEvent::Jump(index) => engine.go_to(index, now),
        DeckEvent::Anchor(anchor) => {
            let index = engine.registry().index_of(&anchor)?;
            engine.go_to(index, now)
        }
    }
}

/// Create the engine signal and the coroutine driving it, and hook the
/// window keyboard and hash listeners up to it. `on_escape` runs when
/// Escape is pressed anywhere on the page.
pub fn use_slide_deck(config: &SiteConfig, on_escape: Callback<()>) -> Signal<SlideEngine> {
    let cooldown = config.transition_cooldown_ms;
    let threshold = config.swipe_threshold_px;
    let engine = use_signal(|| SlideEngine::new(SlideRegistry::site(), cooldown));
    use_context_provider(|| engine);

    let deck = use_coroutine(move |mut rx: UnboundedReceiver<DeckEvent>| {
        let mut engine = engine;
        async move {
            let mut swipe = SwipeTracker::new(threshold);
            while let Some(event) = rx.next().await {
                if matches!(&event, DeckEvent::Key { key, .. } if key == "Escape") {
                    on_escape.call(());
                    continue;
                }
                let now = timing::now_ms();
                let change = engine.with_mut(|e| dispatch(e, &mut swipe, event, now));
                if let Some(change) = change {
                    if let Some(anchor) = engine.with(|e| e.registry().anchor_at(change.to)) {
                        platform::replace_hash(anchor);
                    }
                }
            }
        }
    });

    use_hook(move || {
        let tx = deck.tx();
        let _ = tx.unbounded_send(DeckEvent::Anchor(platform::location_hash()));
        Rc::new(platform::on_hash_change(move |hash| {
            let _ = tx.unbounded_send(DeckEvent::Anchor(hash));
        }))
    });

    use_hook(move || {
        let tx = deck.tx();
        Rc::new(platform::on_key_down(move |key, origin| {
            let handled = key_intent(key, origin).is_some();
            let _ = tx.unbounded_send(DeckEvent::Key {
                key: key.to_string(),
                origin,
            });
            handled
        }))
    });

    engine
}

/// The sliding track plus its wheel and touch input.
#[component]
pub fn SlideDeck(children: Element) -> Element {
    let engine = use_context::<Signal<SlideEngine>>();
    let deck = use_coroutine_handle::<DeckEvent>();
    let transform = engine.read().transform().to_string();

    rsx! {
        main {
            class: "deck",
            onwheel: move |evt| {
                evt.prevent_default();
                deck.send(DeckEvent::Wheel { delta_y: evt.delta().strip_units().y });
            },
            ontouchstart: move |evt| {
                if let Some(touch) = evt.touches().first() {
                    deck.send(DeckEvent::TouchStart { y: touch.client_coordinates().y });
                }
            },
            ontouchend: move |evt| {
                if let Some(touch) = evt.touches_changed().first() {
                    deck.send(DeckEvent::TouchEnd { y: touch.client_coordinates().y });
                }
            },
            div { id: "slidesContainer", class: "deck__track", style: "transform: {transform}",
                {children}
            }
        }
        DeckNav {}
    }
}

/// One full-height section of the deck.
#[component]
pub fn SlideFrame(index: usize, anchor: &'static str, children: Element) -> Element {
    let engine = use_context::<Signal<SlideEngine>>();
    let active = engine.read().registry().is_active(index);

    rsx! {
        section {
            id: anchor,
            class: if active { "slide slide--{anchor} active" } else { "slide slide--{anchor}" },
            {children}
        }
    }
}

#[component]
fn DeckNav() -> Element {
    let engine = use_context::<Signal<SlideEngine>>();
    let content = use_context::<Signal<BoundContent>>();
    let deck = use_coroutine_handle::<DeckEvent>();

    let snapshot = *engine.read().nav();
    let progress = snapshot.progress_percent();
    let counter = snapshot.counter_label();
    let scroll_label = content.read().text("intro.scroll").to_string();

    rsx! {
        nav { class: "deck-dots", aria_label: "Slides",
            for dot in dots(snapshot.total) {
                button {
                    key: "{dot.target}",
                    r#type: "button",
                    class: if snapshot.is_active(&dot) { "dot active" } else { "dot" },
                    aria_label: "{dot.target + 1}",
                    onclick: move |_| deck.send(DeckEvent::Jump(dot.target)),
                }
            }
        }
        div { class: "deck-progress",
            div { class: "deck-progress__bar", style: "height: {progress}%" }
            span { class: "deck-progress__counter", "{counter}" }
        }
        button {
            r#type: "button",
            class: if snapshot.scroll_indicator_visible { "scroll-indicator" } else { "scroll-indicator scroll-indicator--hidden" },
            tabindex: if snapshot.scroll_indicator_visible { "0" } else { "-1" },
            onclick: move |_| deck.send(DeckEvent::Step(Intent::Advance)),
            span { class: "scroll-indicator__label", "{scroll_label}" }
            span { class: "scroll-indicator__arrow", aria_hidden: "true" }
        }
    }
}
