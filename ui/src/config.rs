//! Site-wide settings: feed locations, timing constants and storage keys.
//!
//! The running page reads a single [`SiteConfig`] from Dioxus context; the
//! web crate provides [`SiteConfig::default()`] unless it overrides a field.

use serde::Deserialize;
use url::Url;

/// Published spreadsheet export listing retreat weeks.
pub const AVAILABILITY_CSV_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vTng9bRDKt0g2VzXx_8u0invSVm3ISmrZ6F8m7diXNTQx_JaSsbyxeTsBzieI3GnPSKSF6msi7BMdKz/pub?gid=1762476459&single=true&output=csv";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// JSON document shaped `{ "fr": {...}, "en": {...} }`.
    pub translations_url: String,
    /// JSON document with a `dates` array for the package modal.
    pub retreats_url: String,
    /// CSV export (start, end, price, status).
    pub availability_url: String,
    /// Background videos, relative to the page. The intro alternates
    /// through all of them; the destination slide shows the first.
    pub background_videos: Vec<String>,
    /// Period of the intro video alternation.
    pub video_rotate_ms: u64,
    /// Where contact submissions are POSTed. `None` disables sending.
    pub contact_endpoint: Option<String>,
    /// Cooldown after a slide change during which gestures are ignored.
    pub transition_cooldown_ms: f64,
    /// Minimum vertical travel for a touch swipe to count.
    pub swipe_threshold_px: f64,
    /// Lifetime of a transient notice.
    pub notice_ms: u64,
    /// How long the intro loader stays up.
    pub loader_ms: u64,
    pub language_key: String,
    pub draft_key: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            translations_url: "data/translations.json".to_string(),
            retreats_url: "data/retreats.json".to_string(),
            availability_url: AVAILABILITY_CSV_URL.to_string(),
            background_videos: vec![
                "assets/videos/video1.mp4".to_string(),
                "assets/videos/video2.mp4".to_string(),
            ],
            video_rotate_ms: 30_000,
            contact_endpoint: None,
            transition_cooldown_ms: 800.0,
            swipe_threshold_px: 50.0,
            notice_ms: 4000,
            loader_ms: 2000,
            language_key: "almanarre.lang".to_string(),
            draft_key: "almanarre.contact-draft".to_string(),
        }
    }
}

impl SiteConfig {
    /// Build-time overrides: `ALMANARRE_CONFIG` may hold a JSON object with
    /// any subset of the fields. Invalid JSON falls back to the defaults.
    pub fn from_build_env() -> Self {
        match option_env!("ALMANARRE_CONFIG") {
            Some(raw) => Self::from_json(raw),
            None => Self::default(),
        }
    }

    pub fn from_json(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_else(|err| {
            tracing::warn!("ignoring invalid site config ({err}); using defaults");
            Self::default()
        })
    }

    /// Resolve a relative feed path against the current page URL on the
    /// web. Absolute URLs and native builds pass through untouched.
    pub fn absolute(&self, url: &str) -> String {
        match page_href() {
            Some(page) => resolve_against(&page, url),
            None => url.to_string(),
        }
    }
}

/// Join `url` onto `page` the way the browser resolves a relative link, so
/// a site served from a subpath fetches its feeds from beside the page.
/// Anything that fails to parse comes back unchanged.
pub fn resolve_against(page: &str, url: &str) -> String {
    Url::parse(page)
        .and_then(|base| base.join(url))
        .map(String::from)
        .unwrap_or_else(|_| url.to_string())
}

#[cfg(target_arch = "wasm32")]
fn page_href() -> Option<String> {
    web_sys::window().and_then(|w| w.location().href().ok())
}

#[cfg(not(target_arch = "wasm32"))]
fn page_href() -> Option<String> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_site_timings() {
        let cfg = SiteConfig::default();
        assert_eq!(cfg.transition_cooldown_ms, 800.0);
        assert_eq!(cfg.swipe_threshold_px, 50.0);
        assert!(cfg.contact_endpoint.is_none());
        assert_eq!(cfg.background_videos.len(), 2);
        assert_eq!(cfg.video_rotate_ms, 30_000);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = SiteConfig::from_json(r#"{ "contact_endpoint": "https://example.org/f" }"#);
        assert_eq!(cfg.contact_endpoint.as_deref(), Some("https://example.org/f"));
        assert_eq!(cfg.notice_ms, 4000);
    }

    #[test]
    fn invalid_json_falls_back() {
        assert_eq!(SiteConfig::from_json("{ nope"), SiteConfig::default());
    }

    #[test]
    fn absolute_urls_pass_through() {
        let cfg = SiteConfig::default();
        assert_eq!(cfg.absolute("https://a.b/c.csv"), "https://a.b/c.csv");
        assert_eq!(cfg.absolute("data/x.json"), "data/x.json");
    }

    #[test]
    fn relative_feeds_resolve_beside_the_page() {
        assert_eq!(
            resolve_against("https://host/site-romain/", "data/translations.json"),
            "https://host/site-romain/data/translations.json"
        );
        assert_eq!(
            resolve_against("https://host/site-romain/index.html#contact", "data/retreats.json"),
            "https://host/site-romain/data/retreats.json"
        );
        assert_eq!(
            resolve_against("https://host/", "data/retreats.json"),
            "https://host/data/retreats.json"
        );
    }

    #[test]
    fn rooted_and_absolute_feeds_ignore_the_page_path() {
        assert_eq!(
            resolve_against("https://host/site-romain/", "/data/x.json"),
            "https://host/data/x.json"
        );
        assert_eq!(
            resolve_against("https://host/site-romain/", "https://a.b/c.csv"),
            "https://a.b/c.csv"
        );
        assert_eq!(resolve_against("not a url", "data/x.json"), "data/x.json");
    }
}
