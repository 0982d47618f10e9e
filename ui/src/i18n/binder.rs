//! Applies a locale dictionary to every bound element of the page.
//!
//! Each binding decides at construction how its string is consumed (body
//! text, placeholder or option label). [`ContentBinder::apply_all`] builds
//! the next [`BoundContent`] in one pass and swaps it in, so the page is
//! never left half in one locale and half in another.

use std::collections::HashMap;

use tracing::debug;

use super::store::TranslationTree;

/// How an element consumes its translated string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BindingTarget {
    /// Element body text.
    Text,
    /// `placeholder` of an input or textarea.
    Placeholder,
    /// Label of an `<option>`.
    OptionLabel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranslationBinding {
    pub key: &'static str,
    pub target: BindingTarget,
}

impl TranslationBinding {
    pub const fn text(key: &'static str) -> Self {
        Self {
            key,
            target: BindingTarget::Text,
        }
    }

    pub const fn placeholder(key: &'static str) -> Self {
        Self {
            key,
            target: BindingTarget::Placeholder,
        }
    }

    pub const fn option_label(key: &'static str) -> Self {
        Self {
            key,
            target: BindingTarget::OptionLabel,
        }
    }
}

/// A resolved string, tagged with the slot it belongs in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoundValue {
    Text(String),
    Placeholder(String),
    OptionLabel(String),
}

impl BoundValue {
    fn new(target: BindingTarget, value: &str) -> Self {
        match target {
            BindingTarget::Text => Self::Text(value.to_string()),
            BindingTarget::Placeholder => Self::Placeholder(value.to_string()),
            BindingTarget::OptionLabel => Self::OptionLabel(value.to_string()),
        }
    }
}

/// What views render from. Lookups of unbound keys, or through the wrong
/// accessor for a key's target, give an empty string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoundContent {
    values: HashMap<&'static str, BoundValue>,
}

impl BoundContent {
    pub fn text(&self, key: &str) -> &str {
        match self.values.get(key) {
            Some(BoundValue::Text(value)) => value,
            _ => "",
        }
    }

    pub fn placeholder(&self, key: &str) -> &str {
        match self.values.get(key) {
            Some(BoundValue::Placeholder(value)) => value,
            _ => "",
        }
    }

    pub fn option_label(&self, key: &str) -> &str {
        match self.values.get(key) {
            Some(BoundValue::OptionLabel(value)) => value,
            _ => "",
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Counts from one [`ContentBinder::apply_all`] pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplyReport {
    pub applied: usize,
    pub missing: usize,
}

#[derive(Debug, Clone)]
pub struct ContentBinder {
    bindings: Vec<TranslationBinding>,
}

impl ContentBinder {
    pub fn new(bindings: &[TranslationBinding]) -> Self {
        Self {
            bindings: bindings.to_vec(),
        }
    }

    pub fn bindings(&self) -> &[TranslationBinding] {
        &self.bindings
    }

    /// Write every resolvable binding; keys missing from `tree` keep the
    /// value they had before.
    pub fn apply_all(&self, tree: &TranslationTree, content: &mut BoundContent) -> ApplyReport {
        let mut next = content.values.clone();
        let mut report = ApplyReport::default();
        for binding in &self.bindings {
            match tree.resolve(binding.key) {
                Some(value) => {
                    next.insert(binding.key, BoundValue::new(binding.target, value));
                    report.applied += 1;
                }
                None => {
                    debug!(key = binding.key, "no translation; keeping previous text");
                    report.missing += 1;
                }
            }
        }
        content.values = next;
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::store::{built_in, parse_feed};
    use crate::i18n::Locale;

    fn tree(json: &str) -> TranslationTree {
        parse_feed(&format!(r#"{{ "fr": {json} }}"#), Locale::Fr).unwrap()
    }

    fn binder() -> ContentBinder {
        ContentBinder::new(&[
            TranslationBinding::text("intro.title"),
            TranslationBinding::placeholder("contact.email"),
            TranslationBinding::option_label("contact.level.beginner"),
        ])
    }

    #[test]
    fn values_land_in_their_slot() {
        let mut content = BoundContent::default();
        let dict = tree(
            r#"{ "intro": { "title": "T" }, "contact": { "email": "E", "level": { "beginner": "B" } } }"#,
        );
        let report = binder().apply_all(&dict, &mut content);
        assert_eq!(report, ApplyReport { applied: 3, missing: 0 });
        assert_eq!(content.text("intro.title"), "T");
        assert_eq!(content.placeholder("contact.email"), "E");
        assert_eq!(content.option_label("contact.level.beginner"), "B");
        assert_eq!(content.text("contact.email"), "");
    }

    #[test]
    fn missing_keys_keep_previous_text() {
        let mut content = BoundContent::default();
        binder().apply_all(&tree(r#"{ "intro": { "title": "Avant" } }"#), &mut content);
        let report = binder().apply_all(&tree(r#"{ "contact": { "email": "E" } }"#), &mut content);
        assert_eq!(report.missing, 2);
        assert_eq!(content.text("intro.title"), "Avant");
        assert_eq!(content.placeholder("contact.email"), "E");
    }

    #[test]
    fn empty_dictionary_applies_without_error() {
        let mut content = BoundContent::default();
        let report = binder().apply_all(&TranslationTree::default(), &mut content);
        assert_eq!(report.applied, 0);
        assert!(content.is_empty());
    }

    #[test]
    fn built_in_english_applies_fully() {
        let mut content = BoundContent::default();
        let dict = built_in(Locale::En).unwrap();
        let report = binder().apply_all(&dict, &mut content);
        assert_eq!(report.missing, 0);
        assert_eq!(content.option_label("contact.level.beginner"), "Beginner");
    }
}
