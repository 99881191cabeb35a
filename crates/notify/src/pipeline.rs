//! Run orchestration: fetch, render, deliver.

use chrono::Utc;
use tracing::info;

use crate::config::Config;
use crate::digest;
use crate::error::NotifyError;
use crate::readwise::ReadwiseClient;
use crate::slack::SlackWebhook;

/// Outcome of one notifier run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOutcome {
    /// Number of highlights returned by the fetch.
    pub fetched: usize,
    /// Whether a digest was posted to the webhook.
    pub delivered: bool,
}

/// Execute one run: fetch recent highlights, render them, deliver the digest.
///
/// Zero fetched highlights is a successful no-op; nothing is posted. The
/// fetch completes before any delivery is attempted, so a run has either
/// zero or one outbound message.
pub async fn run(config: &Config) -> Result<RunOutcome, NotifyError> {
    run_inner(config, false).await
}

/// Like [`run`], but log the rendered digest instead of delivering it.
pub async fn dry_run(config: &Config) -> Result<RunOutcome, NotifyError> {
    run_inner(config, true).await
}

async fn run_inner(config: &Config, dry_run: bool) -> Result<RunOutcome, NotifyError> {
    let readwise = ReadwiseClient::new(config.highlights_url.clone(), config.api_token.clone())?;
    let highlights = readwise.fetch_recent().await?;

    if highlights.is_empty() {
        info!("No recent highlights; nothing to deliver");
        return Ok(RunOutcome {
            fetched: 0,
            delivered: false,
        });
    }

    let digest = digest::render(&highlights, Utc::now());

    if dry_run {
        info!(count = highlights.len(), digest = %digest, "Dry run, skipping delivery");
        return Ok(RunOutcome {
            fetched: highlights.len(),
            delivered: false,
        });
    }

    let webhook = SlackWebhook::new(config.webhook_url.clone())?;
    webhook.send(&digest).await?;

    info!(count = highlights.len(), "Delivered highlight digest");
    Ok(RunOutcome {
        fetched: highlights.len(),
        delivered: true,
    })
}
