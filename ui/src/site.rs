//! Root of the page: shared state, the deck and its overlays.

use dioxus::prelude::*;

use crate::components::language::use_language_switcher;
use crate::components::{IntroLoader, Notice, NoticeToast, SiteHeader, SoundToggle, VideoSound};
use crate::config::SiteConfig;
use crate::slides::{use_slide_deck, SlideDeck};
use crate::views::{
    ContactSlide, DestinationSlide, IntroSlide, Package, PackageModal, PackagesSlide,
    ProximitySlide,
};

/// Expects a [`SiteConfig`] in context.
#[component]
pub fn Site() -> Element {
    let config = use_context::<SiteConfig>();

    let notice = use_signal(|| None::<Notice>);
    use_context_provider(|| notice);
    let mut open_package = use_signal(|| None::<Package>);
    use_context_provider(|| open_package);
    let sound = use_signal(VideoSound::default);
    use_context_provider(|| sound);

    use_language_switcher(&config, notice);
    let close_modals = use_callback(move |()| open_package.set(None));
    use_slide_deck(&config, close_modals);

    rsx! {
        IntroLoader {}
        SiteHeader {}
        SlideDeck {
            IntroSlide {}
            DestinationSlide {}
            PackagesSlide {}
            ProximitySlide {}
            ContactSlide {}
        }
        PackageModal {}
        NoticeToast {}
        SoundToggle {}
    }
}
