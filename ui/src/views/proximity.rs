//! "Getting here" slide: departure cities with direct flights.

use dioxus::prelude::*;

use crate::i18n::BoundContent;
use crate::slides::SlideFrame;

/// Departure cities, north to south as drawn on the flight map.
pub const DEPARTURES: [&str; 10] = [
    "Amsterdam",
    "Berlin",
    "London",
    "Brussels",
    "Paris",
    "Geneva",
    "Barcelona",
    "Rome",
    "Madrid",
    "Lisbon",
];

#[component]
pub fn ProximitySlide() -> Element {
    let content = use_context::<Signal<BoundContent>>();
    let content = content.read();

    rsx! {
        SlideFrame { index: 3, anchor: "proximite",
            div { class: "slide__content proximity",
                h2 { class: "slide__title", {content.text("proximite.title")} }
                p { class: "proximity__lead", {content.text("proximite.lead")} }
                div { class: "flight-map",
                    ul { class: "flight-map__origins",
                        for city in DEPARTURES {
                            li { key: "{city}", class: "city", "{city}" }
                        }
                    }
                    div { class: "flight-map__destination",
                        span { class: "city city--destination", {content.text("proximite.destination")} }
                    }
                }
            }
        }
    }
}
