//! Bilingual (FR/EN) content layer.
//!
//! This module wires together:
//! - [`store`]: locale dictionaries (nested JSON trees) loaded from the
//!   translation feed, with built-in dictionaries embedded via `rust-embed`
//!   as the fallback
//! - [`binder`]: the page's translation bindings and the single pass that
//!   writes resolved strings into them
//! - [`controller`]: the locale state machine (switch, persist, discard
//!   stale loads)
//!
//! Usage in a component:
//! ```ignore
//! let content = use_context::<Signal<BoundContent>>();
//! rsx! { h1 { {content.read().text("intro.title")} } }
//! ```
//!
//! Every key a view reads must be listed in [`bindings::SITE_BINDINGS`] and
//! present in both built-in dictionaries; the completeness tests enforce it.

pub mod binder;
pub mod bindings;
pub mod controller;
pub mod store;

pub use binder::{BindingTarget, BoundContent, ContentBinder, TranslationBinding};
pub use controller::{LanguageController, SwitchOutcome, SwitchTicket};
pub use store::{resolve, TranslationStore, TranslationTree};

use std::fmt;

/// The two supported locales. French is the page's initial language.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    Fr,
    En,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::Fr, Locale::En];

    pub fn code(self) -> &'static str {
        match self {
            Locale::Fr => "fr",
            Locale::En => "en",
        }
    }

    pub fn parse(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "fr" => Some(Locale::Fr),
            "en" => Some(Locale::En),
            _ => None,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
