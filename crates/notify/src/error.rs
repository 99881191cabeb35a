//! Error types for the notifier.

use thiserror::Error;

/// Errors that can occur during a notifier run.
///
/// Every variant is terminal for the run: nothing is retried internally,
/// and no delivery is attempted after a fetch failure.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// Required environment variable is missing
    #[error("{name} environment variable not set")]
    Config { name: &'static str },

    /// Fetching highlights from Readwise failed
    #[error("highlight fetch failed: {reason}")]
    UpstreamFetch { reason: String },

    /// Posting the digest to the webhook failed
    #[error("digest delivery failed: {reason}")]
    Delivery { reason: String },
}
