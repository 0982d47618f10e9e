use std::collections::BTreeMap;

use dioxus::prelude::*;
use tracing::{info, warn};

use super::draft::{clear_draft, load_draft, save_draft};
use super::form::{ContactForm, Field, FieldError, LEVELS};
use crate::components::notice::{show_notice, Notice, NoticeKind};
use crate::config::SiteConfig;
use crate::core::fetch::HttpSource;
use crate::core::storage::PlatformStore;
use crate::i18n::BoundContent;

#[component]
pub fn ContactPanel() -> Element {
    let config = use_context::<SiteConfig>();
    let content = use_context::<Signal<BoundContent>>();
    let notice = use_context::<Signal<Option<Notice>>>();

    let draft_key = config.draft_key.clone();
    let mut form = use_signal(move || load_draft(&PlatformStore, &draft_key));
    let mut errors = use_signal(BTreeMap::<Field, FieldError>::new);
    let mut sending = use_signal(|| false);

    let draft_key = config.draft_key.clone();
    let on_edit = use_callback(move |(field, value): (Field, String)| {
        form.with_mut(|f| f.set(field, value));
        save_draft(&PlatformStore, &draft_key, &form.peek());
        if errors.peek().contains_key(&field) {
            errors.with_mut(|e| e.remove(&field));
        }
    });

    let on_blur = use_callback(move |field: Field| {
        let checked = form.with_peek(|f| f.is_filled(field).then(|| f.validate_field(field)));
        match checked {
            Some(Err(err)) => {
                errors.with_mut(|e| e.insert(field, err));
            }
            Some(Ok(())) => {
                errors.with_mut(|e| e.remove(&field));
            }
            None => {}
        }
    });

    let endpoint = config.contact_endpoint.clone();
    let draft_key = config.draft_key.clone();
    let notice_ms = config.notice_ms;
    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if sending() {
            return;
        }
        let snapshot = form();
        if snapshot.is_bot() {
            warn!("honeypot filled; dropping contact submission");
            return;
        }

        let failing = snapshot.validate();
        if !failing.is_empty() {
            errors.set(failing);
            let text = content.read().text("contact.invalid").to_string();
            show_notice(notice, Notice::new(NoticeKind::Error, text), notice_ms);
            return;
        }
        errors.set(BTreeMap::new());

        let Some(endpoint) = endpoint.clone() else {
            let text = content.read().text("contact.unavailable").to_string();
            show_notice(notice, Notice::new(NoticeKind::Error, text), notice_ms);
            return;
        };

        let draft_key = draft_key.clone();
        sending.set(true);
        spawn(async move {
            let sent = HttpSource::default()
                .post_json(&endpoint, &snapshot.submission())
                .await;
            sending.set(false);
            let (kind, key) = match sent {
                Ok(()) => {
                    info!("contact request sent");
                    form.set(ContactForm::default());
                    clear_draft(&PlatformStore, &draft_key);
                    (NoticeKind::Success, "contact.sent")
                }
                Err(err) => {
                    warn!("contact request failed: {err}");
                    (NoticeKind::Error, "contact.failed")
                }
            };
            let text = content.read().text(key).to_string();
            show_notice(notice, Notice::new(kind, text), notice_ms);
        });
    };

    let current = form.read();
    let failing = errors.read();
    let content = content.read();
    let error_text = |field: Field| {
        failing
            .get(&field)
            .map(|err| content.text(err.message_key()).to_string())
    };

    rsx! {
        form {
            id: "contactForm",
            class: "contact-form",
            novalidate: true,
            onsubmit: on_submit,
            onwheel: move |evt| evt.stop_propagation(),
            ontouchstart: move |evt| evt.stop_propagation(),
            ontouchend: move |evt| evt.stop_propagation(),
            div { class: "contact-form__row",
                FieldInput {
                    field: Field::FirstName,
                    name: "firstname",
                    placeholder: content.placeholder("contact.firstname").to_string(),
                    value: current.first_name.clone(),
                    error: error_text(Field::FirstName).unwrap_or_default(),
                    on_edit: on_edit,
                    on_blur: on_blur,
                }
                FieldInput {
                    field: Field::LastName,
                    name: "lastname",
                    placeholder: content.placeholder("contact.lastname").to_string(),
                    value: current.last_name.clone(),
                    error: error_text(Field::LastName).unwrap_or_default(),
                    on_edit: on_edit,
                    on_blur: on_blur,
                }
            }
            div { class: "contact-form__row",
                FieldInput {
                    field: Field::Email,
                    name: "email",
                    input_type: "email",
                    placeholder: content.placeholder("contact.email").to_string(),
                    value: current.email.clone(),
                    error: error_text(Field::Email).unwrap_or_default(),
                    on_edit: on_edit,
                    on_blur: on_blur,
                }
                FieldInput {
                    field: Field::Phone,
                    name: "phone",
                    input_type: "tel",
                    placeholder: content.placeholder("contact.phone").to_string(),
                    value: current.phone.clone(),
                    error: error_text(Field::Phone).unwrap_or_default(),
                    on_edit: on_edit,
                    on_blur: on_blur,
                }
            }

            div { class: "form-group",
                select {
                    name: "level",
                    class: if failing.contains_key(&Field::Level) { "error" } else { "" },
                    value: "{current.level}",
                    onchange: move |e| on_edit.call((Field::Level, e.value())),
                    onblur: move |_| on_blur.call(Field::Level),
                    option { value: "", disabled: true, {content.option_label("contact.level.placeholder")} }
                    for (code, label_key) in LEVELS {
                        option { key: "{code}", value: code, {content.option_label(label_key)} }
                    }
                }
                if let Some(message) = error_text(Field::Level) {
                    span { class: "field-error", "{message}" }
                }
            }

            div { class: "form-group",
                textarea {
                    name: "message",
                    rows: "4",
                    class: if failing.contains_key(&Field::Message) { "error" } else { "" },
                    placeholder: content.placeholder("contact.message"),
                    value: "{current.message}",
                    oninput: move |e| on_edit.call((Field::Message, e.value())),
                    onblur: move |_| on_blur.call(Field::Message),
                }
                if let Some(message) = error_text(Field::Message) {
                    span { class: "field-error", "{message}" }
                }
            }

            div { class: "form-group form-group--consent",
                label { class: "consent",
                    input {
                        r#type: "checkbox",
                        name: "consent",
                        checked: current.consent,
                        onchange: move |e| on_edit.call((Field::Consent, e.checked().to_string())),
                    }
                    span { {content.text("contact.consent")} }
                }
                if let Some(message) = error_text(Field::Consent) {
                    span { class: "field-error", "{message}" }
                }
            }

            input {
                r#type: "text",
                name: "website",
                class: "contact-form__trap",
                tabindex: "-1",
                autocomplete: "off",
                aria_hidden: "true",
                value: "{current.website}",
                oninput: move |e| form.with_mut(|f| f.website = e.value()),
            }

            button {
                r#type: "submit",
                class: "btn btn--primary contact-form__submit",
                disabled: sending(),
                if sending() {
                    {content.text("contact.sending")}
                } else {
                    {content.text("contact.submit")}
                }
            }
        }
    }
}

#[component]
fn FieldInput(
    field: Field,
    name: &'static str,
    #[props(default = "text")] input_type: &'static str,
    placeholder: String,
    value: String,
    /// Inline message; empty when the field is fine.
    error: String,
    on_edit: Callback<(Field, String)>,
    on_blur: Callback<Field>,
) -> Element {
    rsx! {
        div { class: "form-group",
            input {
                r#type: input_type,
                name: name,
                class: if error.is_empty() { "" } else { "error" },
                placeholder: placeholder,
                value: value,
                oninput: move |e| on_edit.call((field, e.value())),
                onblur: move |_| on_blur.call(field),
            }
            if !error.is_empty() {
                span { class: "field-error", "{error}" }
            }
        }
    }
}
