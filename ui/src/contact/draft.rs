//! In-progress contact form values cached across visits.

use tracing::warn;

use super::form::ContactForm;
use crate::core::storage::{load_json, save_json, KeyValueStore};

/// Restore the cached draft; storage trouble reads as "no draft".
pub fn load_draft<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> ContactForm {
    match load_json(store, key) {
        Ok(Some(form)) => form,
        Ok(None) => ContactForm::default(),
        Err(err) => {
            warn!("ignoring contact draft: {err}");
            ContactForm::default()
        }
    }
}

pub fn save_draft<S: KeyValueStore + ?Sized>(store: &S, key: &str, form: &ContactForm) {
    if let Err(err) = save_json(store, key, form) {
        warn!("contact draft not saved: {err}");
    }
}

pub fn clear_draft<S: KeyValueStore + ?Sized>(store: &S, key: &str) {
    if let Err(err) = store.remove(key) {
        warn!("contact draft not cleared: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::storage::testing::{BrokenStore, MemoryStore};

    const KEY: &str = "draft";

    #[test]
    fn draft_survives_reload() {
        let store = MemoryStore::default();
        let form = ContactForm {
            first_name: "Jo".into(),
            message: "Deux places en juillet ?".into(),
            ..ContactForm::default()
        };
        save_draft(&store, KEY, &form);
        assert_eq!(load_draft(&store, KEY), form);
        clear_draft(&store, KEY);
        assert_eq!(load_draft(&store, KEY), ContactForm::default());
    }

    #[test]
    fn broken_storage_degrades_to_empty_form() {
        save_draft(&BrokenStore, KEY, &ContactForm::default());
        assert_eq!(load_draft(&BrokenStore, KEY), ContactForm::default());
        clear_draft(&BrokenStore, KEY);
    }

    #[test]
    fn corrupt_draft_is_ignored() {
        let store = MemoryStore::default();
        store.set(KEY, "[1,2").unwrap();
        assert_eq!(load_draft(&store, KEY), ContactForm::default());
    }
}
