//! Every translated slot on the page, fixed for the page's lifetime.

use super::binder::TranslationBinding as B;

pub const SITE_BINDINGS: &[B] = &[
    B::text("loader.text"),
    // header
    B::text("nav.intro"),
    B::text("nav.almanarre"),
    B::text("nav.formules"),
    B::text("nav.proximite"),
    B::text("nav.contact"),
    // intro
    B::text("intro.title"),
    B::text("intro.subtitle"),
    B::text("intro.slogan"),
    B::text("intro.btn"),
    B::text("intro.scroll"),
    // destination
    B::text("almanarre.title"),
    B::text("almanarre.lead"),
    B::text("almanarre.wind"),
    B::text("almanarre.water"),
    B::text("almanarre.life"),
    // packages
    B::text("formules.title"),
    B::text("formules.subtitle"),
    B::text("formules.kite.name"),
    B::text("formules.kite.desc"),
    B::text("formules.wing.name"),
    B::text("formules.wing.desc"),
    B::text("formules.details"),
    B::text("formules.book"),
    B::text("formules.close"),
    B::text("formules.dates_title"),
    B::text("formules.dates_soon"),
    B::text("formules.available"),
    B::text("formules.full"),
    B::text("availability.title"),
    B::text("availability.loading"),
    B::text("availability.empty"),
    B::text("availability.error"),
    B::text("availability.error_detail"),
    B::text("availability.status.disponible"),
    B::text("availability.status.complet"),
    B::text("availability.status.reserve"),
    // map
    B::text("proximite.title"),
    B::text("proximite.lead"),
    B::text("proximite.destination"),
    // contact
    B::text("contact.title"),
    B::text("contact.lead"),
    B::placeholder("contact.firstname"),
    B::placeholder("contact.lastname"),
    B::placeholder("contact.email"),
    B::placeholder("contact.phone"),
    B::option_label("contact.level.placeholder"),
    B::option_label("contact.level.beginner"),
    B::option_label("contact.level.intermediate"),
    B::option_label("contact.level.advanced"),
    B::placeholder("contact.message"),
    B::text("contact.consent"),
    B::text("contact.submit"),
    B::text("contact.sending"),
    B::text("contact.errors.required"),
    B::text("contact.errors.email"),
    B::text("contact.errors.phone"),
    B::text("contact.errors.select"),
    B::text("contact.errors.consent"),
    B::text("contact.invalid"),
    B::text("contact.sent"),
    B::text("contact.failed"),
    B::text("contact.unavailable"),
    B::text("notices.language_failed"),
    // background video
    B::text("video.sound_on"),
    B::text("video.sound_off"),
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::i18n::store::built_in;
    use crate::i18n::Locale;

    #[test]
    fn keys_are_unique() {
        let mut seen = HashSet::new();
        for binding in SITE_BINDINGS {
            assert!(seen.insert(binding.key), "duplicate binding {}", binding.key);
        }
    }

    #[test]
    fn every_binding_resolves_in_both_built_ins() {
        for locale in Locale::ALL {
            let tree = built_in(locale).unwrap();
            let missing: Vec<_> = SITE_BINDINGS
                .iter()
                .filter(|b| tree.resolve(b.key).is_none())
                .map(|b| b.key)
                .collect();
            assert!(missing.is_empty(), "{locale} missing {missing:?}");
        }
    }
}
