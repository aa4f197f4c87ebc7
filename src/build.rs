//! The build pipeline.
//!
//! A build is one linear, stateless pass over a project:
//!
//! ```text
//! load → enrich covers → render documents → index tags → render pages → write
//! ```
//!
//! Nothing persists between runs except the enrichment write-back, which
//! mutates the *input* (the portfolio collection file) so future builds skip
//! the network call. Running the same build twice over unchanged inputs
//! produces byte-identical pages.
//!
//! Recoverable per-entry problems (missing documents, unreachable URLs) are
//! collected into the [`BuildReport`]; structural problems (malformed
//! collection JSON, unwritable output root) abort the run with a
//! [`BuildError`].

use crate::config::Project;
use crate::content::{self, LoadError, LoadWarning};
use crate::enrich::{self, CoverFetcher, EnrichReport, SaveError};
use crate::publish;
use crate::render;
use crate::tags::TagIndex;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Save(#[from] SaveError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// What a build produced, for display by the caller.
#[derive(Debug)]
pub struct BuildReport {
    pub output_dir: PathBuf,
    /// `(title, output path)` per generated post page, collection order.
    pub posts: Vec<(String, String)>,
    pub portfolio_entries: usize,
    /// `(tag, entry count)` per generated tag page, discovery order.
    pub tags: Vec<(String, usize)>,
    /// Files mirrored into `static/`; `None` when the project has none.
    pub static_files: Option<usize>,
    pub warnings: Vec<LoadWarning>,
    /// Enrichment outcomes; `None` when enrichment was skipped.
    pub enrich: Option<EnrichReport>,
    /// Whether discovered covers were written back to the collection file.
    pub portfolio_rewritten: bool,
}

impl BuildReport {
    /// Total number of pages written (posts + two indexes + tag pages).
    pub fn page_count(&self) -> usize {
        self.posts.len() + self.tags.len() + 2
    }
}

/// Run the full pipeline for one project.
///
/// `fetcher` is the network edge for cover enrichment; pass `None` to skip
/// enrichment entirely (entries publish as-is, no write-back).
pub fn build(
    project: &Project,
    fetcher: Option<&dyn CoverFetcher>,
) -> Result<BuildReport, BuildError> {
    // Load. Portfolio first — enrichment may rewrite its file before
    // anything else happens.
    let mut portfolio = content::load_portfolio(project)?;

    let mut portfolio_rewritten = false;
    let enrich_report = match fetcher {
        Some(fetcher) => {
            let report = enrich::enrich_portfolio(&mut portfolio, fetcher);
            if report.updated() > 0 {
                enrich::save_portfolio(&project.portfolio_file(), &portfolio)?;
                portfolio_rewritten = true;
            }
            Some(report)
        }
        None => None,
    };

    let (posts, warnings) = content::load_blog(project)?;

    // Index before rendering; render_post keeps collection order, so the
    // indices in each bucket stay valid for the rendered slice.
    let index = TagIndex::build(&posts, &portfolio);
    let rendered: Vec<render::RenderedPost> = posts.into_iter().map(render::render_post).collect();

    // Write the output tree.
    let output = project.output_dir();
    let site = project.config.title.as_str();
    publish::ensure_output_dirs(&output)?;

    for post in &rendered {
        let page = render::render_post_page(post, site);
        publish::write_page(&output, &post.href, &page.into_string())?;
    }

    let blog_index = render::render_blog_index(&rendered, site);
    publish::write_page(&output, "index.html", &blog_index.into_string())?;

    let portfolio_index = render::render_portfolio_index(&portfolio, site);
    publish::write_page(&output, "portfolio/index.html", &portfolio_index.into_string())?;

    for bucket in index.buckets() {
        let page = render::render_tag_page(bucket, &rendered, &portfolio, site);
        publish::write_page(&output, &render::tag_href(&bucket.tag), &page.into_string())?;
    }

    let static_files = publish::mirror_static(&project.static_dir(), &output)?;

    Ok(BuildReport {
        output_dir: output,
        posts: rendered
            .iter()
            .map(|p| (p.post.title.clone(), p.href.clone()))
            .collect(),
        portfolio_entries: portfolio.len(),
        tags: index
            .buckets()
            .iter()
            .map(|b| (b.tag.clone(), b.entries.len()))
            .collect(),
        static_files,
        warnings,
        enrich: enrich_report,
        portfolio_rewritten,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{ProjectFixture, StubFetcher};
    use std::fs;

    #[test]
    fn write_back_only_when_a_cover_was_discovered() {
        let fixture = ProjectFixture::new()
            .portfolio(r#"[{"title": "X", "url": "https://x.test", "tags": []}]"#)
            .build();
        let project = fixture.project();
        let before = fs::read_to_string(project.portfolio_file()).unwrap();

        // Unreachable network: build completes, no write-back
        let offline = StubFetcher::unreachable();
        let report = build(&project, Some(&offline)).unwrap();
        assert!(!report.portfolio_rewritten);
        assert_eq!(
            fs::read_to_string(project.portfolio_file()).unwrap(),
            before
        );

        // Reachable: cover discovered, collection rewritten
        let fetcher = StubFetcher::with_cover("https://x.test", "https://cdn.test/x.png");
        let report = build(&project, Some(&fetcher)).unwrap();
        assert!(report.portfolio_rewritten);
        let after = fs::read_to_string(project.portfolio_file()).unwrap();
        assert!(after.contains("https://cdn.test/x.png"));
    }

    #[test]
    fn skipping_enrichment_leaves_input_untouched() {
        let fixture = ProjectFixture::new()
            .portfolio(r#"[{"title": "X", "url": "https://x.test", "tags": []}]"#)
            .build();
        let project = fixture.project();
        let before = fs::read_to_string(project.portfolio_file()).unwrap();

        let report = build(&project, None).unwrap();

        assert!(report.enrich.is_none());
        assert_eq!(
            fs::read_to_string(project.portfolio_file()).unwrap(),
            before
        );
    }

    #[test]
    fn report_counts_pages() {
        let fixture = ProjectFixture::new()
            .document("hi.md", "# Hello")
            .blog(
                r#"[{"slug": "hi", "title": "Hi", "tags": ["intro"], "markdown": "data/blog/markdown/hi.md"}]"#,
            )
            .portfolio(r#"[{"title": "P", "url": "https://p.test", "tags": ["intro", "work"]}]"#)
            .build();

        let report = build(&fixture.project(), None).unwrap();

        assert_eq!(report.posts, vec![("Hi".to_string(), "blog/hi.html".to_string())]);
        assert_eq!(report.portfolio_entries, 1);
        assert_eq!(
            report.tags,
            vec![("intro".to_string(), 2), ("work".to_string(), 1)]
        );
        // 1 post + 2 tag pages + blog index + portfolio index
        assert_eq!(report.page_count(), 5);
    }

    #[test]
    fn static_assets_mirrored_into_output() {
        let fixture = ProjectFixture::new()
            .static_file("css/extra.css", "body{}")
            .build();

        let report = build(&fixture.project(), None).unwrap();

        assert_eq!(report.static_files, Some(1));
        let copied = fixture.root().join("dist/static/css/extra.css");
        assert_eq!(fs::read_to_string(copied).unwrap(), "body{}");
    }

    #[test]
    fn unwritable_output_root_is_fatal() {
        let fixture = ProjectFixture::new().build();
        let mut project = fixture.project();
        // A file where the output directory should go
        fs::write(project.root.join("dist"), "in the way").unwrap();
        project.config.paths.output = "dist".into();

        assert!(matches!(
            build(&project, None),
            Err(BuildError::Io(_))
        ));
    }
}
