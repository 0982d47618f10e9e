//! Locale state machine.
//!
//! A switch is split in two so the async fetch can sit in between:
//! [`LanguageController::begin`] issues a ticket, and
//! [`LanguageController::complete`] applies the loaded dictionary only if
//! that ticket is still the latest one issued.

use tracing::{info, warn};

use super::binder::{ApplyReport, BoundContent, ContentBinder};
use super::store::TranslationTree;
use super::Locale;
use crate::core::error::{StorageError, SwitchError};
use crate::core::generation::{Generation, Ticket};
use crate::core::storage::KeyValueStore;

/// A switch in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwitchTicket {
    locale: Locale,
    ticket: Ticket,
}

impl SwitchTicket {
    pub fn locale(&self) -> Locale {
        self.locale
    }
}

#[derive(Debug)]
pub enum SwitchOutcome {
    /// Dictionary applied and state committed. `persisted` is false when
    /// the preference could not be stored (the switch still counts).
    Applied {
        locale: Locale,
        report: ApplyReport,
        persisted: bool,
    },
    /// A newer request superseded this one; nothing was touched.
    Stale,
    /// No dictionary could be produced; state and page are unchanged.
    Failed(SwitchError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageController {
    current: Locale,
    generation: Generation,
}

impl Default for LanguageController {
    fn default() -> Self {
        Self::new(Locale::Fr)
    }
}

impl LanguageController {
    pub fn new(initial: Locale) -> Self {
        Self {
            current: initial,
            generation: Generation::default(),
        }
    }

    /// The committed locale; this is also the active-language indicator.
    pub fn current(&self) -> Locale {
        self.current
    }

    /// Start switching to `lang`. Asking for the committed locale is a no-op
    /// for the page, but it still supersedes any switch still in flight.
    pub fn begin(&mut self, lang: Locale) -> Option<SwitchTicket> {
        let ticket = self.generation.issue();
        if lang == self.current {
            return None;
        }
        Some(SwitchTicket {
            locale: lang,
            ticket,
        })
    }

    /// Finish a switch with the result of loading its dictionary.
    pub fn complete<S>(
        &mut self,
        ticket: SwitchTicket,
        loaded: Result<TranslationTree, SwitchError>,
        binder: &ContentBinder,
        content: &mut BoundContent,
        store: &S,
        preference_key: &str,
    ) -> SwitchOutcome
    where
        S: KeyValueStore + ?Sized,
    {
        if !self.generation.is_current(ticket.ticket) {
            warn!("discarding stale {} dictionary", ticket.locale);
            return SwitchOutcome::Stale;
        }
        let tree = match loaded {
            Ok(tree) => tree,
            Err(err) => {
                warn!("language switch to {} failed: {err}", ticket.locale);
                return SwitchOutcome::Failed(err);
            }
        };

        let report = binder.apply_all(&tree, content);
        let persisted = match save_preference(store, preference_key, ticket.locale) {
            Ok(()) => true,
            Err(err) => {
                warn!("could not persist language preference: {err}");
                false
            }
        };
        self.current = ticket.locale;
        info!(
            locale = ticket.locale.code(),
            applied = report.applied,
            missing = report.missing,
            "language switched"
        );
        SwitchOutcome::Applied {
            locale: ticket.locale,
            report,
            persisted,
        }
    }
}

/// Stored language preference. Unknown codes read as absent.
pub fn saved_preference<S>(store: &S, key: &str) -> Result<Option<Locale>, StorageError>
where
    S: KeyValueStore + ?Sized,
{
    Ok(store.get(key)?.as_deref().and_then(Locale::parse))
}

pub fn save_preference<S>(store: &S, key: &str, locale: Locale) -> Result<(), StorageError>
where
    S: KeyValueStore + ?Sized,
{
    store.set(key, locale.code())
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;
    use crate::core::error::FeedError;
    use crate::core::fetch::testing::CannedSource;
    use crate::core::storage::testing::{BrokenStore, MemoryStore};
    use crate::i18n::binder::TranslationBinding;
    use crate::i18n::store::{built_in, TranslationStore};

    const KEY: &str = "almanarre.lang";

    fn binder() -> ContentBinder {
        ContentBinder::new(&[
            TranslationBinding::text("intro.btn"),
            TranslationBinding::placeholder("contact.email"),
        ])
    }

    fn french_page() -> BoundContent {
        let mut content = BoundContent::default();
        binder().apply_all(&built_in(Locale::Fr).unwrap(), &mut content);
        content
    }

    #[test]
    fn switch_applies_persists_and_commits() {
        let mut ctl = LanguageController::default();
        let mut content = french_page();
        let store = MemoryStore::default();
        let ticket = ctl.begin(Locale::En).unwrap();
        let loaded = block_on(TranslationStore::new(CannedSource::default(), "x").load(ticket.locale()));

        let outcome = ctl.complete(ticket, loaded, &binder(), &mut content, &store, KEY);

        assert!(matches!(outcome, SwitchOutcome::Applied { locale: Locale::En, persisted: true, .. }));
        assert_eq!(ctl.current(), Locale::En);
        assert_eq!(content.text("intro.btn"), "Book Your Experience");
        assert_eq!(saved_preference(&store, KEY).unwrap(), Some(Locale::En));
    }

    #[test]
    fn second_switch_to_same_locale_is_noop() {
        let mut ctl = LanguageController::default();
        let mut content = french_page();
        let store = MemoryStore::default();
        let ticket = ctl.begin(Locale::En).unwrap();
        ctl.complete(ticket, built_in(Locale::En).map_err(no_dict), &binder(), &mut content, &store, KEY);
        let snapshot = content.clone();

        assert!(ctl.begin(Locale::En).is_none());
        assert_eq!(ctl.current(), Locale::En);
        assert_eq!(content, snapshot);
    }

    #[test]
    fn failure_keeps_previous_state_and_text() {
        let mut ctl = LanguageController::default();
        let mut content = french_page();
        let before = content.clone();
        let ticket = ctl.begin(Locale::En).unwrap();
        let err = SwitchError::NoDictionary {
            locale: "en",
            source: FeedError::MissingLocale("en"),
        };

        let outcome = ctl.complete(ticket, Err(err), &binder(), &mut content, &MemoryStore::default(), KEY);

        assert!(matches!(outcome, SwitchOutcome::Failed(_)));
        assert_eq!(ctl.current(), Locale::Fr);
        assert_eq!(content, before);
    }

    #[test]
    fn storage_failure_does_not_block_switch() {
        let mut ctl = LanguageController::default();
        let mut content = french_page();
        let ticket = ctl.begin(Locale::En).unwrap();
        let outcome = ctl.complete(
            ticket,
            built_in(Locale::En).map_err(no_dict),
            &binder(),
            &mut content,
            &BrokenStore,
            KEY,
        );
        assert!(matches!(outcome, SwitchOutcome::Applied { persisted: false, .. }));
        assert_eq!(ctl.current(), Locale::En);
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut ctl = LanguageController::default();
        let mut content = french_page();
        let store = MemoryStore::default();
        let to_en = ctl.begin(Locale::En).unwrap();
        // user clicks FR again before the EN dictionary arrives
        assert!(ctl.begin(Locale::Fr).is_none());

        let outcome = ctl.complete(to_en, built_in(Locale::En).map_err(no_dict), &binder(), &mut content, &store, KEY);

        assert!(matches!(outcome, SwitchOutcome::Stale));
        assert_eq!(ctl.current(), Locale::Fr);
        assert_eq!(content, french_page());
        assert_eq!(saved_preference(&store, KEY).unwrap(), None);
    }

    #[test]
    fn preference_lookup_reports_outcomes() {
        let store = MemoryStore::default();
        assert_eq!(saved_preference(&store, KEY).unwrap(), None);
        store.set(KEY, "klingon").unwrap();
        assert_eq!(saved_preference(&store, KEY).unwrap(), None);
        save_preference(&store, KEY, Locale::En).unwrap();
        assert_eq!(saved_preference(&store, KEY).unwrap(), Some(Locale::En));
        assert!(saved_preference(&BrokenStore, KEY).is_err());
    }

    fn no_dict(source: FeedError) -> SwitchError {
        SwitchError::NoDictionary { locale: "en", source }
    }
}
