//! Digest rendering.
//!
//! Pure formatting of fetched highlights into one Slack mrkdwn message.
//! Rendering never fails; absent optional fields are simply left out.

use std::fmt::Write;

use chrono::{DateTime, Utc};

use crate::readwise::Highlight;

/// Render all highlights of a run into one mrkdwn digest.
///
/// One block per highlight, in input order: the quoted excerpt, then an
/// attribution line with the source title, the author if present, and a
/// link back to the source if present.
#[must_use]
pub fn render(highlights: &[Highlight], generated_at: DateTime<Utc>) -> String {
    let mut out = format!(
        ":books: *Readwise highlights* ({count}) | {date}\n",
        count = highlights.len(),
        date = generated_at.format("%B %d, %Y"),
    );

    for highlight in highlights {
        out.push('\n');
        out.push_str(&render_block(highlight));
    }

    out
}

/// Render a single highlight block.
fn render_block(highlight: &Highlight) -> String {
    let mut block = String::new();

    // Multi-line excerpts keep the quote prefix on every line.
    for line in highlight.text.lines() {
        let _ = writeln!(block, "> {line}");
    }

    let _ = write!(block, "_{}_", highlight.title);

    if let Some(author) = highlight.author.as_deref().filter(|a| !a.trim().is_empty()) {
        let _ = write!(block, ", {author}");
    }

    if let Some(url) = highlight
        .source_url
        .as_deref()
        .filter(|u| !u.trim().is_empty())
    {
        let _ = write!(block, " (<{url}|source>)");
    }

    block.push('\n');
    block
}
