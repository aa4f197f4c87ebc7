//! Cover-image enrichment for portfolio entries.
//!
//! Portfolio entries link to external pages. When an entry has no `cover`
//! image, this step fetches the linked page and pulls the social-preview
//! image out of its `<meta>` tags: `og:image` first, `twitter:image` as the
//! fallback. Discovered covers are written back into the portfolio
//! collection file so future builds skip the network round-trip.
//!
//! ## Degradation, Not Failure
//!
//! Enrichment never aborts a build. Every per-entry result is an
//! [`EnrichOutcome`] — found, no tag present, or failed with a reason — and
//! a failure simply leaves `cover` unset. The distinction between "the page
//! has no preview image" and "the network was unreachable" is preserved for
//! diagnostics even though both degrade the same way.
//!
//! ## Injection
//!
//! The network edge is a trait, [`CoverFetcher`]. The pipeline hands in
//! [`HttpFetcher`] (ureq, per-request timeout, browser-like user agent);
//! tests hand in stubs. Fetches are independent per entry and run in
//! parallel with rayon — cover assignment has no cross-entry dependency, so
//! the observable output is unchanged.

use crate::content::PortfolioEntry;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use ureq::Agent;

#[derive(Error, Debug)]
pub enum SaveError {
    #[error("failed to write portfolio collection {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to serialize portfolio collection: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result of one enrichment attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum EnrichOutcome {
    /// A preview image URL was discovered and assigned.
    Found(String),
    /// The page was fetched fine but carries no `og:image` or
    /// `twitter:image` tag.
    NoImageTag,
    /// Network error, timeout, or unreadable response. Cover stays unset.
    Failed(String),
}

impl std::fmt::Display for EnrichOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnrichOutcome::Found(url) => write!(f, "found {url}"),
            EnrichOutcome::NoImageTag => write!(f, "no preview image tag"),
            EnrichOutcome::Failed(reason) => write!(f, "failed: {reason}"),
        }
    }
}

/// Fetches a preview image URL for an external page.
///
/// `Sync` because fetches fan out across rayon workers.
pub trait CoverFetcher: Sync {
    fn fetch_cover(&self, url: &str) -> EnrichOutcome;
}

/// Real fetcher: HTTP GET with a timeout, then meta-tag extraction.
pub struct HttpFetcher {
    agent: Agent,
    user_agent: String,
}

impl HttpFetcher {
    pub fn new(timeout: Duration, user_agent: &str) -> Self {
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .build()
            .into();
        Self {
            agent,
            user_agent: user_agent.to_string(),
        }
    }
}

impl CoverFetcher for HttpFetcher {
    fn fetch_cover(&self, url: &str) -> EnrichOutcome {
        let response = match self
            .agent
            .get(url)
            .header("User-Agent", &self.user_agent)
            .call()
        {
            Ok(r) => r,
            Err(e) => return EnrichOutcome::Failed(e.to_string()),
        };
        let body = match response.into_body().read_to_string() {
            Ok(b) => b,
            Err(e) => return EnrichOutcome::Failed(e.to_string()),
        };
        match extract_preview_image(&body) {
            Some(image) => EnrichOutcome::Found(image),
            None => EnrichOutcome::NoImageTag,
        }
    }
}

/// Per-entry outcomes from one enrichment pass, in collection order.
#[derive(Debug, Default)]
pub struct EnrichReport {
    /// `(entry url, outcome)` for every entry that was missing a cover.
    pub attempts: Vec<(String, EnrichOutcome)>,
}

impl EnrichReport {
    /// Number of covers discovered — when non-zero the collection file
    /// needs rewriting.
    pub fn updated(&self) -> usize {
        self.attempts
            .iter()
            .filter(|(_, o)| matches!(o, EnrichOutcome::Found(_)))
            .count()
    }
}

/// Fill in missing covers. Entries that already have one are never touched.
pub fn enrich_portfolio(
    entries: &mut [PortfolioEntry],
    fetcher: &dyn CoverFetcher,
) -> EnrichReport {
    let outcomes: Vec<Option<(String, EnrichOutcome)>> = entries
        .par_iter_mut()
        .map(|entry| {
            if entry.cover.is_some() {
                return None;
            }
            let outcome = fetcher.fetch_cover(&entry.url);
            if let EnrichOutcome::Found(image) = &outcome {
                entry.cover = Some(image.clone());
            }
            Some((entry.url.clone(), outcome))
        })
        .collect();

    EnrichReport {
        attempts: outcomes.into_iter().flatten().collect(),
    }
}

/// Overwrite the portfolio collection file with the enriched entries.
///
/// Pretty-printed with 2-space indentation; non-ASCII characters are written
/// verbatim (serde_json never escapes them).
pub fn save_portfolio(path: &Path, entries: &[PortfolioEntry]) -> Result<(), SaveError> {
    let json = serde_json::to_string_pretty(entries)?;
    fs::write(path, json).map_err(|source| SaveError::Io {
        path: path.to_path_buf(),
        source,
    })
}

// ============================================================================
// Meta-tag extraction
// ============================================================================

/// Scan an HTML document for a social-preview image URL.
///
/// Looks at every `<meta>` tag, preferring `property="og:image"` over
/// `name="twitter:image"` regardless of the order they appear in. Attribute
/// order within a tag does not matter; quoting with `"`, `'`, or nothing is
/// accepted. This is a tag scanner, not an HTML parser — preview tags live
/// in `<head>` and are flat, so attribute-level parsing is all that's needed.
pub fn extract_preview_image(html: &str) -> Option<String> {
    let mut twitter = None;

    // ASCII lowering keeps byte offsets aligned with the original text
    let lower = html.to_ascii_lowercase();
    let mut at = 0;
    while let Some(pos) = lower[at..].find("<meta") {
        let start = at + pos + "<meta".len();
        let end = match lower[start..].find('>') {
            Some(e) => start + e,
            None => break,
        };
        let attrs = parse_attributes(&html[start..end]);
        let content = attrs.iter().find(|(k, _)| k == "content").map(|(_, v)| v);

        if let Some(content) = content
            && !content.is_empty()
        {
            let is = |key: &str, value: &str| {
                attrs
                    .iter()
                    .any(|(k, v)| k == key && v.eq_ignore_ascii_case(value))
            };
            if is("property", "og:image") {
                return Some(content.clone());
            }
            if twitter.is_none() && is("name", "twitter:image") {
                twitter = Some(content.clone());
            }
        }
        at = end;
    }

    twitter
}

/// Parse `key="value"` pairs from the inside of a tag.
///
/// Keys are lowercased; values keep their original case (image URLs are
/// case-sensitive).
fn parse_attributes(tag: &str) -> Vec<(String, String)> {
    let mut attrs = Vec::new();
    let bytes = tag.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        // Skip whitespace and stray slashes
        while i < bytes.len() && (bytes[i].is_ascii_whitespace() || bytes[i] == b'/') {
            i += 1;
        }
        let key_start = i;
        while i < bytes.len() && !bytes[i].is_ascii_whitespace() && bytes[i] != b'=' {
            i += 1;
        }
        if i == key_start {
            break;
        }
        let key = tag[key_start..i].to_lowercase();

        // Optional `= value`
        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        let mut value = String::new();
        if i < bytes.len() && bytes[i] == b'=' {
            i += 1;
            while i < bytes.len() && bytes[i].is_ascii_whitespace() {
                i += 1;
            }
            if i < bytes.len() && (bytes[i] == b'"' || bytes[i] == b'\'') {
                let quote = bytes[i];
                i += 1;
                let val_start = i;
                while i < bytes.len() && bytes[i] != quote {
                    i += 1;
                }
                value = tag[val_start..i].to_string();
                i += 1; // past the closing quote
            } else {
                let val_start = i;
                while i < bytes.len() && !bytes[i].is_ascii_whitespace() {
                    i += 1;
                }
                value = tag[val_start..i].to_string();
            }
        }
        attrs.push((key, value));
    }

    attrs
}
