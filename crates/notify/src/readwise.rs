//! Readwise API client.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::error::NotifyError;

/// Request timeout for the highlights fetch.
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// One saved excerpt returned by Readwise.
#[derive(Debug, Clone, Deserialize)]
pub struct Highlight {
    /// Excerpt text.
    pub text: String,
    /// Title of the source the excerpt was saved from.
    pub title: String,
    /// Source author, when Readwise knows it.
    #[serde(default)]
    pub author: Option<String>,
    /// Link back to the source, when available.
    #[serde(default)]
    pub source_url: Option<String>,
}

/// Response envelope of the daily review endpoint.
#[derive(Debug, Deserialize)]
struct ReviewResponse {
    highlights: Vec<Highlight>,
}

/// Client for the Readwise highlights endpoint.
pub struct ReadwiseClient {
    endpoint: String,
    api_token: String,
    client: Client,
}

impl ReadwiseClient {
    /// Create a client for the given endpoint and token.
    pub fn new(endpoint: String, api_token: String) -> Result<Self, NotifyError> {
        let client = Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .map_err(|e| NotifyError::UpstreamFetch {
                reason: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            endpoint,
            api_token,
            client,
        })
    }

    /// Fetch the recent highlights, in the order Readwise returns them.
    ///
    /// A non-success status or an undeserializable body surfaces as
    /// [`NotifyError::UpstreamFetch`].
    pub async fn fetch_recent(&self) -> Result<Vec<Highlight>, NotifyError> {
        debug!(endpoint = %self.endpoint, "Fetching highlights");

        // Readwise uses the `Token` scheme, not `Bearer`.
        let response = self
            .client
            .get(&self.endpoint)
            .header("Authorization", format!("Token {}", self.api_token))
            .send()
            .await
            .map_err(|e| NotifyError::UpstreamFetch {
                reason: format!("request failed: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NotifyError::UpstreamFetch {
                reason: format!("Readwise returned {status}: {body}"),
            });
        }

        let review: ReviewResponse =
            response
                .json()
                .await
                .map_err(|e| NotifyError::UpstreamFetch {
                    reason: format!("malformed response body: {e}"),
                })?;

        debug!(count = review.highlights.len(), "Fetched highlights");
        Ok(review.highlights)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_deserializes_without_optional_fields() {
        let highlight: Highlight = serde_json::from_str(
            r#"{"text": "An excerpt.", "title": "A Book", "id": 123, "note": ""}"#,
        )
        .unwrap();

        assert_eq!(highlight.text, "An excerpt.");
        assert_eq!(highlight.title, "A Book");
        assert!(highlight.author.is_none());
        assert!(highlight.source_url.is_none());
    }

    #[test]
    fn test_highlight_tolerates_null_optional_fields() {
        let highlight: Highlight = serde_json::from_str(
            r#"{"text": "t", "title": "T", "author": null, "source_url": null}"#,
        )
        .unwrap();

        assert!(highlight.author.is_none());
        assert!(highlight.source_url.is_none());
    }
}
