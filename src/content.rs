//! Content loading and normalization.
//!
//! Reads the two collection files — the portfolio collection and the blog
//! collection — and normalizes their records into typed entries. All field
//! defaulting happens here, once, at load time:
//!
//! - `title` falls back to the entry's `slug`
//! - `summary` falls back to the first 120 characters of the document body
//! - `tags` falls back to the empty set
//!
//! ## Failure Taxonomy
//!
//! Structural problems are fatal: a collection file that exists but does not
//! parse as a JSON array means the project is corrupt, and the build aborts.
//! Per-entry problems are not: a missing blog collection yields an empty
//! list, and a blog entry whose document file is absent is skipped. Both are
//! reported as [`LoadWarning`]s so the caller can surface them without
//! stopping the build.

use crate::config::Project;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed collection file {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// A recoverable, per-entry problem found while loading content.
///
/// Warnings never stop the build; they are collected and reported.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadWarning {
    /// The blog collection file does not exist — build proceeds with no posts.
    MissingBlogCollection(PathBuf),
    /// A blog entry references a document file that does not exist — the
    /// entry is skipped, all others still build.
    MissingDocument { slug: String, path: PathBuf },
    /// A blog entry has no `markdown` field at all — skipped.
    NoDocumentPath { slug: String },
}

impl std::fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadWarning::MissingBlogCollection(path) => {
                write!(f, "blog collection not found: {}", path.display())
            }
            LoadWarning::MissingDocument { slug, path } => {
                write!(f, "document for '{slug}' not found: {}", path.display())
            }
            LoadWarning::NoDocumentPath { slug } => {
                write!(f, "blog entry '{slug}' has no document path")
            }
        }
    }
}

/// A portfolio entry, identified by its `url`.
///
/// This struct is both the load schema and the write-back schema: the
/// enrichment step may fill in `cover` and rewrite the whole collection.
/// Absent optional fields stay absent on rewrite (`cover` in particular is
/// not serialized as `null`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioEntry {
    pub title: String,
    /// Identity key and the link target; also what enrichment fetches.
    pub url: String,
    /// Display-only date string — never parsed or sorted on.
    pub date: String,
    pub tags: Vec<String>,
    pub summary: String,
    /// Preview image URL. Empty strings normalize to `None` at load time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,
}

impl Default for PortfolioEntry {
    fn default() -> Self {
        Self {
            title: String::new(),
            url: String::new(),
            date: String::new(),
            tags: Vec::new(),
            summary: String::new(),
            cover: None,
        }
    }
}

/// Raw blog record as it appears in the collection file.
#[derive(Debug, Deserialize)]
struct RawBlogEntry {
    slug: String,
    title: Option<String>,
    date: Option<String>,
    tags: Option<Vec<String>>,
    summary: Option<String>,
    /// Document file path, relative to the project root.
    markdown: Option<PathBuf>,
}

/// A normalized blog entry with its document body already read.
///
/// Identified by `slug`, which is also the output filename stem
/// (`blog/<slug>.html`).
#[derive(Debug, Clone)]
pub struct BlogPost {
    pub slug: String,
    pub title: String,
    pub date: String,
    pub tags: Vec<String>,
    pub summary: String,
    /// Document path as written in the collection file.
    pub source: PathBuf,
    /// Raw markdown body.
    pub body: String,
}

/// Number of characters of the raw body used when no summary is given.
const SUMMARY_CHARS: usize = 120;

/// Load the portfolio collection.
///
/// A missing file is treated as an empty collection (new projects start
/// without one); a file that fails to parse is fatal. Empty-string covers
/// normalize to `None` so the enrichment step sees one shape of "missing".
pub fn load_portfolio(project: &Project) -> Result<Vec<PortfolioEntry>, LoadError> {
    let path = project.portfolio_file();
    if !path.exists() {
        return Ok(Vec::new());
    }
    let content = fs::read_to_string(&path)?;
    let mut entries: Vec<PortfolioEntry> =
        serde_json::from_str(&content).map_err(|source| LoadError::Json { path, source })?;
    for entry in &mut entries {
        if entry.cover.as_deref() == Some("") {
            entry.cover = None;
        }
    }
    Ok(entries)
}

/// Load the blog collection and read each entry's document body.
///
/// Returns the normalized posts in collection order plus any per-entry
/// warnings. Entries whose document is missing are skipped, not fatal.
pub fn load_blog(project: &Project) -> Result<(Vec<BlogPost>, Vec<LoadWarning>), LoadError> {
    let path = project.blog_file();
    let mut warnings = Vec::new();

    if !path.exists() {
        warnings.push(LoadWarning::MissingBlogCollection(path));
        return Ok((Vec::new(), warnings));
    }

    let content = fs::read_to_string(&path)?;
    let raw: Vec<RawBlogEntry> =
        serde_json::from_str(&content).map_err(|source| LoadError::Json { path, source })?;

    let mut posts = Vec::with_capacity(raw.len());
    for entry in raw {
        let Some(source) = entry.markdown else {
            warnings.push(LoadWarning::NoDocumentPath { slug: entry.slug });
            continue;
        };
        let doc_path = project.resolve(&source);
        if !doc_path.exists() {
            warnings.push(LoadWarning::MissingDocument {
                slug: entry.slug,
                path: doc_path,
            });
            continue;
        }
        let body = fs::read_to_string(&doc_path)?;

        posts.push(BlogPost {
            title: entry.title.unwrap_or_else(|| entry.slug.clone()),
            date: entry.date.unwrap_or_default(),
            tags: entry.tags.unwrap_or_default(),
            summary: entry
                .summary
                .unwrap_or_else(|| body.chars().take(SUMMARY_CHARS).collect()),
            slug: entry.slug,
            source,
            body,
        });
    }

    Ok((posts, warnings))
}
