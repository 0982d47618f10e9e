use dioxus::prelude::*;

use crate::components::VideoBackdrop;
use crate::config::SiteConfig;
use crate::i18n::BoundContent;
use crate::slides::{DeckEvent, SlideFrame};

/// Index of the packages slide, where the intro call to action leads.
const PACKAGES_SLIDE: usize = 2;

#[component]
pub fn IntroSlide() -> Element {
    let config = use_context::<SiteConfig>();
    let content = use_context::<Signal<BoundContent>>();
    let deck = use_coroutine_handle::<DeckEvent>();
    let content = content.read();

    rsx! {
        SlideFrame { index: 0, anchor: "intro",
            div { class: "slide__backdrop slide__backdrop--intro", aria_hidden: "true",
                VideoBackdrop {
                    id: "video-intro",
                    slide: 0,
                    sources: config.background_videos.clone(),
                    rotate_ms: config.video_rotate_ms,
                }
            }
            div { class: "slide__content intro",
                h1 { class: "intro__title", {content.text("intro.title")} }
                p { class: "intro__subtitle", {content.text("intro.subtitle")} }
                p { class: "intro__slogan", {content.text("intro.slogan")} }
                button {
                    r#type: "button",
                    class: "btn btn--primary intro__cta",
                    onclick: move |_| deck.send(DeckEvent::Jump(PACKAGES_SLIDE)),
                    {content.text("intro.btn")}
                }
            }
        }
    }
}
