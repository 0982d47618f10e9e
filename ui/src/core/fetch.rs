//! Plain HTTP GET/POST for the feeds and the contact form.
//!
//! `reqwest` uses the browser's `fetch` on wasm32 and rustls natively, so the
//! same code path serves both targets.

use std::future::Future;

use crate::core::error::FetchError;

/// Anything that can hand back the body of a URL. The HTTP implementation
/// is [`HttpSource`]; tests substitute canned responses.
pub trait FeedSource {
    fn get_text(&self, url: &str) -> impl Future<Output = Result<String, FetchError>>;
}

#[derive(Debug, Default, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
}

impl FeedSource for HttpSource {
    async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| FetchError::Transport {
                url: url.to_string(),
                reason: err.to_string(),
            })?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        response.text().await.map_err(|err| FetchError::Body {
            url: url.to_string(),
            reason: err.to_string(),
        })
    }
}

impl HttpSource {
    /// POST `body` as JSON; only the status matters to callers.
    pub async fn post_json<T: serde::Serialize + ?Sized>(
        &self,
        url: &str,
        body: &T,
    ) -> Result<(), FetchError> {
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|err| FetchError::Transport {
                url: url.to_string(),
                reason: err.to_string(),
            })?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            })
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::HashMap;

    use super::*;

    /// Serves fixed bodies by URL; unknown URLs answer 404.
    #[derive(Debug, Default)]
    pub struct CannedSource {
        pub bodies: HashMap<String, String>,
    }

    impl CannedSource {
        pub fn with(url: &str, body: &str) -> Self {
            let mut bodies = HashMap::new();
            bodies.insert(url.to_string(), body.to_string());
            Self { bodies }
        }
    }

    impl FeedSource for CannedSource {
        async fn get_text(&self, url: &str) -> Result<String, FetchError> {
            self.bodies.get(url).cloned().ok_or(FetchError::Status {
                url: url.to_string(),
                status: 404,
            })
        }
    }
}
