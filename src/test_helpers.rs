//! Shared test utilities.
//!
//! [`ProjectFixture`] builds a throwaway project directory in a tempdir;
//! [`StubFetcher`] stands in for the network during enrichment tests.
//!
//! ```rust
//! let fixture = ProjectFixture::new()
//!     .document("hi.md", "# Hello")
//!     .blog(r#"[{"slug": "hi", "markdown": "data/blog/markdown/hi.md"}]"#)
//!     .portfolio(r#"[{"url": "https://x.test", "tags": []}]"#)
//!     .build();
//! let project = fixture.project();
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

use crate::config::Project;
use crate::content::{BlogPost, PortfolioEntry};
use crate::enrich::{CoverFetcher, EnrichOutcome};

// =========================================================================
// Project fixtures
// =========================================================================

/// Builder for a project directory laid out like a real one.
#[derive(Default)]
pub struct ProjectFixture {
    portfolio: Option<String>,
    blog: Option<String>,
    documents: Vec<(String, String)>,
    static_files: Vec<(String, String)>,
}

/// A materialized fixture. Keep it alive for as long as the project is used —
/// dropping it deletes the directory.
pub struct BuiltFixture {
    tmp: TempDir,
}

impl ProjectFixture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Portfolio collection file content (raw JSON).
    pub fn portfolio(mut self, json: &str) -> Self {
        self.portfolio = Some(json.to_string());
        self
    }

    /// Blog collection file content (raw JSON).
    pub fn blog(mut self, json: &str) -> Self {
        self.blog = Some(json.to_string());
        self
    }

    /// A document file under `data/blog/markdown/`.
    pub fn document(mut self, name: &str, body: &str) -> Self {
        self.documents.push((name.to_string(), body.to_string()));
        self
    }

    /// A file under `static/` (name may contain subdirectories).
    pub fn static_file(mut self, name: &str, content: &str) -> Self {
        self.static_files
            .push((name.to_string(), content.to_string()));
        self
    }

    pub fn build(self) -> BuiltFixture {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();

        if let Some(json) = &self.portfolio {
            fs::write(root.join("articles.json"), json).unwrap();
        }
        if let Some(json) = &self.blog {
            fs::create_dir_all(root.join("data")).unwrap();
            fs::write(root.join("data/blog.json"), json).unwrap();
        }
        for (name, body) in &self.documents {
            let dir = root.join("data/blog/markdown");
            fs::create_dir_all(&dir).unwrap();
            fs::write(dir.join(name), body).unwrap();
        }
        for (name, content) in &self.static_files {
            let path = root.join("static").join(name);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, content).unwrap();
        }

        BuiltFixture { tmp }
    }
}

impl BuiltFixture {
    pub fn root(&self) -> &Path {
        self.tmp.path()
    }

    /// Open the fixture as a project (default config).
    pub fn project(&self) -> Project {
        Project::open(self.tmp.path()).unwrap()
    }
}

// =========================================================================
// Entry constructors
// =========================================================================

/// A minimal blog post with the given slug and tags.
pub fn post_with_tags(slug: &str, tags: &[&str]) -> BlogPost {
    BlogPost {
        slug: slug.to_string(),
        title: slug.to_string(),
        date: String::new(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        summary: String::new(),
        source: format!("data/blog/markdown/{slug}.md").into(),
        body: String::new(),
    }
}

/// A minimal portfolio entry with the given url and tags.
pub fn project_with_tags(url: &str, tags: &[&str]) -> PortfolioEntry {
    PortfolioEntry {
        url: url.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        ..PortfolioEntry::default()
    }
}

// =========================================================================
// Network stub
// =========================================================================

/// Canned [`CoverFetcher`]: known URLs yield a cover, everything else fails
/// as unreachable.
pub struct StubFetcher {
    covers: HashMap<String, EnrichOutcome>,
}

impl StubFetcher {
    /// Every URL fails as unreachable.
    pub fn unreachable() -> Self {
        Self {
            covers: HashMap::new(),
        }
    }

    /// One URL resolves to a cover image.
    pub fn with_cover(url: &str, image: &str) -> Self {
        let mut covers = HashMap::new();
        covers.insert(url.to_string(), EnrichOutcome::Found(image.to_string()));
        Self { covers }
    }

    /// One URL fetches fine but has no preview tag.
    pub fn without_tag(url: &str) -> Self {
        let mut covers = HashMap::new();
        covers.insert(url.to_string(), EnrichOutcome::NoImageTag);
        Self { covers }
    }
}

impl CoverFetcher for StubFetcher {
    fn fetch_cover(&self, url: &str) -> EnrichOutcome {
        self.covers
            .get(url)
            .cloned()
            .unwrap_or_else(|| EnrichOutcome::Failed("connection refused".to_string()))
    }
}
