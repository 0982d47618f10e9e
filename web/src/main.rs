use dioxus::logger::tracing::{info, Level};
use dioxus::prelude::*;

use ui::config::SiteConfig;
use ui::Site;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::init(Level::INFO).expect("logger failed to init");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_context_provider(SiteConfig::from_build_env);
    use_hook(move || info!(availability = %config.availability_url, "site starting"));

    rsx! {
        // Global app resources
        document::Title { "EXPERIENCE · Kite & Wing Retreats" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Site {}
    }
}
