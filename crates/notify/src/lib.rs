//! Forward recent Readwise highlights to a Slack webhook.
//!
//! One run: read `API_TOKEN` and `WEBHOOK_URL` from the environment, fetch
//! the recent highlights from Readwise, render them into one mrkdwn digest,
//! and post it to the webhook. The job is stateless between runs; scheduling
//! (cron, CronJob, manual) lives outside this crate.
//!
//! # Usage
//!
//! ```no_run
//! # async fn example() -> Result<(), readwise_notify::NotifyError> {
//! use readwise_notify::{pipeline, Config};
//!
//! let config = Config::from_env()?;
//! let outcome = pipeline::run(&config).await?;
//! println!("fetched {}, delivered: {}", outcome.fetched, outcome.delivered);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! - `API_TOKEN`: Readwise API token (required)
//! - `WEBHOOK_URL`: Slack incoming webhook URL (required)
//! - `HIGHLIGHTS_URL`: override of the highlights endpoint (optional)
//!
//! Missing required configuration aborts the run before any network call.

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod digest;
pub mod error;
pub mod pipeline;
pub mod readwise;
pub mod slack;

pub use config::Config;
pub use error::NotifyError;
pub use pipeline::RunOutcome;
pub use readwise::Highlight;
