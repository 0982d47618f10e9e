//! Packages slide: the two retreat cards, the availability listing and the
//! detail modal.

use dioxus::prelude::*;

use crate::availability::{load_retreats, AvailabilityLoads, AvailabilityState, Status};
use crate::config::SiteConfig;
use crate::core::fetch::{FeedSource, HttpSource};
use crate::core::format::{format_date_long, format_price};
use crate::i18n::{BoundContent, LanguageController};
use crate::slides::{DeckEvent, SlideFrame, CONTACT_SLIDE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Package {
    Kite,
    Wing,
}

impl Package {
    pub const ALL: [Package; 2] = [Package::Kite, Package::Wing];

    fn name_key(self) -> &'static str {
        match self {
            Package::Kite => "formules.kite.name",
            Package::Wing => "formules.wing.name",
        }
    }

    fn desc_key(self) -> &'static str {
        match self {
            Package::Kite => "formules.kite.desc",
            Package::Wing => "formules.wing.desc",
        }
    }

    fn modifier(self) -> &'static str {
        match self {
            Package::Kite => "kite",
            Package::Wing => "wing",
        }
    }
}

#[component]
pub fn PackagesSlide() -> Element {
    let content = use_context::<Signal<BoundContent>>();
    let mut open = use_context::<Signal<Option<Package>>>();
    let deck = use_coroutine_handle::<DeckEvent>();
    let content = content.read();

    rsx! {
        SlideFrame { index: 2, anchor: "formules",
            div { class: "slide__content",
                h2 { class: "slide__title", {content.text("formules.title")} }
                p { class: "slide__subtitle", {content.text("formules.subtitle")} }

                div { class: "packages",
                    for package in Package::ALL {
                        article { key: "{package.modifier()}", class: "package package--{package.modifier()}",
                            h3 { class: "package__name", {content.text(package.name_key())} }
                            p { class: "package__desc", {content.text(package.desc_key())} }
                            div { class: "package__actions",
                                button {
                                    r#type: "button",
                                    class: "btn btn--ghost",
                                    onclick: move |_| open.set(Some(package)),
                                    {content.text("formules.details")}
                                }
                                button {
                                    r#type: "button",
                                    class: "btn btn--primary",
                                    onclick: move |_| deck.send(DeckEvent::Jump(CONTACT_SLIDE)),
                                    {content.text("formules.book")}
                                }
                            }
                        }
                    }
                }

                AvailabilityPanel {}
            }
        }
    }
}

fn refresh_availability(
    url: String,
    mut loads: Signal<AvailabilityLoads>,
    mut state: Signal<AvailabilityState>,
) {
    spawn(async move {
        let ticket = loads.with_mut(|l| l.begin());
        state.set(AvailabilityState::Loading);
        let fetched = HttpSource::default().get_text(&url).await;
        if let Some(next) = loads.peek().finish(ticket, fetched) {
            state.set(next);
        }
    });
}

fn status_label(status: &Status, content: &BoundContent) -> String {
    match (status.label_key(), status) {
        (Some(key), _) => content.text(key).to_string(),
        (None, Status::Other(raw)) => raw.clone(),
        (None, _) => String::new(),
    }
}

#[component]
fn AvailabilityPanel() -> Element {
    let config = use_context::<SiteConfig>();
    let content = use_context::<Signal<BoundContent>>();
    let controller = use_context::<Signal<LanguageController>>();
    let loads = use_signal(AvailabilityLoads::default);
    let state = use_signal(AvailabilityState::default);

    let url = config.availability_url.clone();
    use_hook(move || refresh_availability(url, loads, state));

    let locale = controller.read().current();
    let content = content.read();

    let body = match &*state.read() {
        AvailabilityState::Loading => rsx! {
            p { class: "availability__loading", {content.text("availability.loading")} }
        },
        AvailabilityState::Failed => rsx! {
            p { class: "availability__error", {content.text("availability.error")} }
            p { class: "availability__error-detail", {content.text("availability.error_detail")} }
        },
        AvailabilityState::Loaded(sheet) if sheet.records.is_empty() => rsx! {
            p { class: "availability__empty", {content.text("availability.empty")} }
        },
        AvailabilityState::Loaded(sheet) => rsx! {
            h4 { class: "availability__title", {content.text("availability.title")} }
            ul {
                class: "dates-list",
                onwheel: move |evt| evt.stop_propagation(),
                ontouchstart: move |evt| evt.stop_propagation(),
                ontouchend: move |evt| evt.stop_propagation(),
                for (i, record) in sheet.records.iter().enumerate() {
                    li {
                        key: "{i}",
                        class: if record.is_available() { "date-item available" } else { "date-item" },
                        span { class: "date-range",
                            "{format_date_long(record.start, locale)} - {format_date_long(record.end, locale)}"
                        }
                        span { class: "price", "{format_price(record.price, locale)}" }
                        span { class: "status {record.status.css_class()}",
                            "{status_label(&record.status, &content)}"
                        }
                    }
                }
            }
        },
    };

    rsx! {
        div { id: "dates-disponibles", class: "availability", {body} }
    }
}

/// Detail modal for the open package, with the retreat weeks feed.
#[component]
pub fn PackageModal() -> Element {
    let config = use_context::<SiteConfig>();
    let content = use_context::<Signal<BoundContent>>();
    let mut open = use_context::<Signal<Option<Package>>>();
    let deck = use_coroutine_handle::<DeckEvent>();

    let retreats_url = config.absolute(&config.retreats_url);
    let retreats = use_resource(move || {
        let url = retreats_url.clone();
        async move { load_retreats(&HttpSource::default(), &url).await }
    });

    let Some(package) = open() else {
        return rsx! {};
    };
    let content = content.read();

    let dates = match &*retreats.read() {
        Some(Some(data)) if !data.dates.is_empty() => rsx! {
            ul { class: "modal__dates",
                for (i, date) in data.dates.iter().enumerate() {
                    li {
                        key: "{i}",
                        class: if date.available { "retreat-date available" } else { "retreat-date" },
                        span { class: "retreat-date__range", "{date.start} - {date.end}" }
                        span { class: "retreat-date__status",
                            if date.available {
                                {content.text("formules.available")}
                            } else {
                                {content.text("formules.full")}
                            }
                        }
                    }
                }
            }
        },
        Some(_) => rsx! {
            p { class: "modal__soon", {content.text("formules.dates_soon")} }
        },
        None => rsx! {},
    };

    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| open.set(None),
            div {
                class: "modal modal--{package.modifier()}",
                role: "dialog",
                aria_modal: "true",
                onclick: move |evt| evt.stop_propagation(),
                onwheel: move |evt| evt.stop_propagation(),
                button {
                    r#type: "button",
                    class: "modal__close",
                    aria_label: content.text("formules.close"),
                    onclick: move |_| open.set(None),
                    "×"
                }
                h3 { class: "modal__title", {content.text(package.name_key())} }
                p { class: "modal__desc", {content.text(package.desc_key())} }
                h4 { class: "modal__dates-title", {content.text("formules.dates_title")} }
                {dates}
                button {
                    r#type: "button",
                    class: "btn btn--primary contact-trigger",
                    onclick: move |_| {
                        open.set(None);
                        deck.send(DeckEvent::Jump(CONTACT_SLIDE));
                    },
                    {content.text("formules.book")}
                }
            }
        }
    }
}
