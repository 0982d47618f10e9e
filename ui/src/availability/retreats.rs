//! Retreat weeks listed in the package modal (`retreats.json`).

use serde::Deserialize;

use crate::core::error::FeedError;
use crate::core::fetch::FeedSource;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RetreatDate {
    pub start: String,
    pub end: String,
    #[serde(default)]
    pub available: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RetreatData {
    #[serde(default)]
    pub dates: Vec<RetreatDate>,
}

pub fn parse_retreats(body: &str) -> Result<RetreatData, FeedError> {
    Ok(serde_json::from_str(body)?)
}

/// `None` when the document is missing or invalid; the modal then shows
/// its "dates coming soon" message.
pub async fn load_retreats<S: FeedSource>(source: &S, url: &str) -> Option<RetreatData> {
    let parsed = match source.get_text(url).await {
        Ok(body) => parse_retreats(&body),
        Err(err) => Err(err.into()),
    };
    match parsed {
        Ok(data) if !data.dates.is_empty() => Some(data),
        Ok(_) => None,
        Err(err) => {
            tracing::warn!("retreat data unavailable: {err}");
            None
        }
    }
}
