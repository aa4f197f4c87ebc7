//! CLI output formatting.
//!
//! The build pipeline returns data ([`BuildReport`]); this module turns it
//! into display lines. Each section has a pure `format_*` function returning
//! `Vec<String>` for testability, and [`print_build_report`] writes them to
//! the right streams: the report to stdout, warnings and enrichment failures
//! to stderr. The GUI collaborator streams both back to its log view and
//! keys "build had problems" on stderr being non-empty.
//!
//! ```text
//! Blog (2 posts)
//! 001 Hi → blog/hi.html
//! 002 Notes → blog/notes.html
//! Portfolio (3 entries) → portfolio/index.html
//! Tags (2)
//! 001 intro (2 entries) → tag/intro.html
//! 002 rust (1 entry) → tag/rust.html
//! Static: 12 files mirrored
//! Build complete: dist
//! ```

use crate::build::BuildReport;
use crate::content::LoadWarning;
use crate::enrich::{EnrichOutcome, EnrichReport};

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

/// Format the build report body (stdout).
pub fn format_build_report(report: &BuildReport) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(format!("Blog ({})", plural(report.posts.len(), "post", "posts")));
    for (i, (title, href)) in report.posts.iter().enumerate() {
        lines.push(format!("{} {} → {}", format_index(i + 1), title, href));
    }

    lines.push(format!(
        "Portfolio ({}) → portfolio/index.html",
        plural(report.portfolio_entries, "entry", "entries")
    ));

    lines.push(format!("Tags ({})", report.tags.len()));
    for (i, (tag, count)) in report.tags.iter().enumerate() {
        lines.push(format!(
            "{} {} ({}) → tag/{}.html",
            format_index(i + 1),
            tag,
            plural(*count, "entry", "entries"),
            tag
        ));
    }

    if let Some(enrich) = &report.enrich {
        lines.extend(format_enrichment(enrich, report.portfolio_rewritten));
    }

    match report.static_files {
        Some(n) => lines.push(format!("Static: {} mirrored", plural(n, "file", "files"))),
        None => lines.push("Static: no static directory".to_string()),
    }

    lines.push(format!("Build complete: {}", report.output_dir.display()));
    lines
}

/// Format the enrichment section. Only discovered covers show here; failures
/// go to stderr via [`format_diagnostics`].
fn format_enrichment(report: &EnrichReport, rewritten: bool) -> Vec<String> {
    let mut lines = Vec::new();
    if report.attempts.is_empty() {
        return lines;
    }
    lines.push(format!(
        "Enrichment ({} attempted, {} found)",
        report.attempts.len(),
        report.updated()
    ));
    for (url, outcome) in &report.attempts {
        if let EnrichOutcome::Found(image) = outcome {
            lines.push(format!("    {url} → {image}"));
        }
    }
    if rewritten {
        lines.push("    portfolio collection updated".to_string());
    }
    lines
}

/// Format non-fatal diagnostics (stderr): load warnings plus enrichment
/// attempts that did not produce a cover.
pub fn format_diagnostics(warnings: &[LoadWarning], enrich: Option<&EnrichReport>) -> Vec<String> {
    let mut lines = Vec::new();
    for warning in warnings {
        lines.push(format!("Warning: {warning}"));
    }
    if let Some(report) = enrich {
        for (url, outcome) in &report.attempts {
            match outcome {
                EnrichOutcome::Found(_) => {}
                EnrichOutcome::NoImageTag => {
                    lines.push(format!("Warning: no preview image at {url}"));
                }
                EnrichOutcome::Failed(reason) => {
                    lines.push(format!("Warning: cover fetch for {url} failed: {reason}"));
                }
            }
        }
    }
    lines
}

/// Print a report: body to stdout, diagnostics to stderr.
pub fn print_build_report(report: &BuildReport) {
    for line in format_build_report(report) {
        println!("{line}");
    }
    for line in format_diagnostics(&report.warnings, report.enrich.as_ref()) {
        eprintln!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn report() -> BuildReport {
        BuildReport {
            output_dir: PathBuf::from("dist"),
            posts: vec![("Hi".to_string(), "blog/hi.html".to_string())],
            portfolio_entries: 2,
            tags: vec![("intro".to_string(), 2)],
            static_files: Some(3),
            warnings: vec![],
            enrich: None,
            portfolio_rewritten: false,
        }
    }

    #[test]
    fn report_lists_posts_with_index_and_path() {
        let lines = format_build_report(&report());
        assert!(lines.contains(&"Blog (1 post)".to_string()));
        assert!(lines.contains(&"001 Hi → blog/hi.html".to_string()));
    }

    #[test]
    fn report_lists_tag_pages() {
        let lines = format_build_report(&report());
        assert!(lines.contains(&"001 intro (2 entries) → tag/intro.html".to_string()));
    }

    #[test]
    fn report_ends_with_completion_line() {
        let lines = format_build_report(&report());
        assert_eq!(lines.last().unwrap(), "Build complete: dist");
    }

    #[test]
    fn missing_static_dir_noted() {
        let mut r = report();
        r.static_files = None;
        let lines = format_build_report(&r);
        assert!(lines.contains(&"Static: no static directory".to_string()));
    }

    #[test]
    fn enrichment_section_shows_found_covers_and_rewrite() {
        let mut r = report();
        r.enrich = Some(EnrichReport {
            attempts: vec![
                (
                    "https://a.test".to_string(),
                    EnrichOutcome::Found("https://cdn.test/a.png".to_string()),
                ),
                ("https://b.test".to_string(), EnrichOutcome::NoImageTag),
            ],
        });
        r.portfolio_rewritten = true;

        let lines = format_build_report(&r);
        assert!(lines.contains(&"Enrichment (2 attempted, 1 found)".to_string()));
        assert!(lines.contains(&"    https://a.test → https://cdn.test/a.png".to_string()));
        assert!(lines.contains(&"    portfolio collection updated".to_string()));
    }

    #[test]
    fn diagnostics_cover_warnings_and_failed_fetches() {
        let warnings = vec![LoadWarning::MissingBlogCollection(PathBuf::from(
            "data/blog.json",
        ))];
        let enrich = EnrichReport {
            attempts: vec![(
                "https://down.test".to_string(),
                EnrichOutcome::Failed("timeout".to_string()),
            )],
        };

        let lines = format_diagnostics(&warnings, Some(&enrich));
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("blog collection not found"));
        assert!(lines[1].contains("https://down.test"));
        assert!(lines[1].contains("timeout"));
    }

    #[test]
    fn no_diagnostics_when_clean() {
        assert!(format_diagnostics(&[], None).is_empty());
    }
}
