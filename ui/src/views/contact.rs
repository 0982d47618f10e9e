use dioxus::prelude::*;

use crate::contact::ContactPanel;
use crate::i18n::BoundContent;
use crate::slides::{SlideFrame, CONTACT_SLIDE};

#[component]
pub fn ContactSlide() -> Element {
    let content = use_context::<Signal<BoundContent>>();
    let content = content.read();

    rsx! {
        SlideFrame { index: CONTACT_SLIDE, anchor: "contact",
            div { class: "slide__content contact",
                h2 { class: "slide__title", {content.text("contact.title")} }
                p { class: "contact__lead", {content.text("contact.lead")} }
                ContactPanel {}
            }
        }
    }
}
