//! Locale dictionaries: loading, fallback and dotted-path lookup.

use std::collections::BTreeSet;

use rust_embed::Embed;
use serde_json::{Map, Value};
use tracing::warn;

use super::Locale;
use crate::core::error::{FeedError, SwitchError};
use crate::core::fetch::FeedSource;

/// Built-in dictionaries, same shape as the translation feed.
#[derive(Embed)]
#[folder = "i18n"]
struct BuiltIn;

const BUILT_IN_FILE: &str = "translations.json";

/// A nested string tree for one locale. Replaced wholesale on every switch.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TranslationTree(Map<String, Value>);

impl TranslationTree {
    pub fn resolve(&self, path: &str) -> Option<&str> {
        resolve_in(&self.0, path)
    }

    /// Dotted paths of every string leaf.
    pub fn leaf_keys(&self) -> BTreeSet<String> {
        let mut keys = BTreeSet::new();
        collect_leaves(&self.0, "", &mut keys);
        keys
    }
}

/// Walk `path` segment by segment through `dict`. Missing segments, or a
/// path ending on a non-string node, yield `None`.
pub fn resolve<'a>(dict: &'a Value, path: &str) -> Option<&'a str> {
    dict.as_object().and_then(|map| resolve_in(map, path))
}

fn resolve_in<'a>(map: &'a Map<String, Value>, path: &str) -> Option<&'a str> {
    let mut segments = path.split('.');
    let first = segments.next()?;
    let mut node = map.get(first)?;
    for segment in segments {
        node = node.as_object()?.get(segment)?;
    }
    node.as_str()
}

fn collect_leaves(map: &Map<String, Value>, prefix: &str, out: &mut BTreeSet<String>) {
    for (key, value) in map {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match value {
            Value::Object(inner) => collect_leaves(inner, &path, out),
            Value::String(_) => {
                out.insert(path);
            }
            _ => {}
        }
    }
}

/// Extract one locale from a `{ "fr": {...}, "en": {...} }` document.
pub fn parse_feed(body: &str, locale: Locale) -> Result<TranslationTree, FeedError> {
    let mut all: Map<String, Value> = serde_json::from_str(body)?;
    match all.remove(locale.code()) {
        Some(Value::Object(tree)) => Ok(TranslationTree(tree)),
        _ => Err(FeedError::MissingLocale(locale.code())),
    }
}

/// The dictionary compiled into the binary for `locale`.
pub fn built_in(locale: Locale) -> Result<TranslationTree, FeedError> {
    let file = BuiltIn::get(BUILT_IN_FILE).ok_or(FeedError::MissingLocale(locale.code()))?;
    let body = String::from_utf8_lossy(&file.data);
    parse_feed(&body, locale)
}

/// Loads dictionaries from the translation feed.
#[derive(Debug, Clone)]
pub struct TranslationStore<S> {
    source: S,
    url: String,
}

impl<S: FeedSource> TranslationStore<S> {
    pub fn new(source: S, url: impl Into<String>) -> Self {
        Self {
            source,
            url: url.into(),
        }
    }

    /// Feed dictionary for `locale`, or the built-in one when the feed is
    /// unreachable or malformed. Fails only if both are unusable.
    pub async fn load(&self, locale: Locale) -> Result<TranslationTree, SwitchError> {
        let fetched = match self.source.get_text(&self.url).await {
            Ok(body) => parse_feed(&body, locale),
            Err(err) => Err(err.into()),
        };
        match fetched {
            Ok(tree) => Ok(tree),
            Err(err) => {
                warn!("translation feed unusable for {locale} ({err}); using built-in dictionary");
                built_in(locale).map_err(|source| SwitchError::NoDictionary {
                    locale: locale.code(),
                    source,
                })
            }
        }
    }
}
