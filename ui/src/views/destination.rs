use dioxus::prelude::*;

use crate::components::VideoBackdrop;
use crate::config::SiteConfig;
use crate::i18n::BoundContent;
use crate::slides::SlideFrame;

#[component]
pub fn DestinationSlide() -> Element {
    let config = use_context::<SiteConfig>();
    let content = use_context::<Signal<BoundContent>>();
    let first_video: Vec<String> = config.background_videos.iter().take(1).cloned().collect();
    let content = content.read();

    rsx! {
        SlideFrame { index: 1, anchor: "almanarre",
            div { class: "slide__backdrop slide__backdrop--almanarre", aria_hidden: "true",
                VideoBackdrop { id: "video-almanarre", slide: 1, sources: first_video }
            }
            div { class: "slide__content destination",
                h2 { class: "slide__title", {content.text("almanarre.title")} }
                p { class: "destination__lead", {content.text("almanarre.lead")} }
                ul { class: "destination__features",
                    li { class: "feature feature--wind", {content.text("almanarre.wind")} }
                    li { class: "feature feature--water", {content.text("almanarre.water")} }
                    li { class: "feature feature--life", {content.text("almanarre.life")} }
                }
            }
        }
    }
}
