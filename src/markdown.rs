//! Markdown document rendering.
//!
//! Converts a blog entry's raw document body into embeddable HTML using
//! [pulldown-cmark](https://docs.rs/pulldown-cmark). CommonMark covers
//! everything the pipeline needs — headings, emphasis, lists, links, images,
//! and fenced code blocks (rendered as `<pre><code>`).
//!
//! Metadata comes exclusively from the blog collection file; document files
//! carry no front matter, so the whole body is markdown.

use pulldown_cmark::{Parser, html};

/// Render a raw markdown body to an HTML fragment.
///
/// Deterministic: identical input yields identical output.
pub fn render_markdown(body: &str) -> String {
    let parser = Parser::new(body);
    let mut out = String::with_capacity(body.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headings() {
        let html = render_markdown("# Hello");
        assert!(html.contains("<h1>Hello</h1>"));
    }

    #[test]
    fn emphasis() {
        let html = render_markdown("This is **bold** and *italic*.");
        assert!(html.contains("<strong>bold</strong>"));
        assert!(html.contains("<em>italic</em>"));
    }

    #[test]
    fn lists() {
        let html = render_markdown("- one\n- two\n");
        assert!(html.contains("<ul>"));
        assert!(html.contains("<li>one</li>"));
    }

    #[test]
    fn links_and_images() {
        let html = render_markdown("[here](https://example.test) ![alt](img.png)");
        assert!(html.contains(r#"<a href="https://example.test">here</a>"#));
        assert!(html.contains(r#"<img src="img.png" alt="alt""#));
    }

    #[test]
    fn fenced_code_blocks() {
        let html = render_markdown("```rust\nfn main() {}\n```");
        assert!(html.contains("<pre><code"));
        assert!(html.contains("fn main() {}"));
    }

    #[test]
    fn code_block_content_is_escaped() {
        let html = render_markdown("```\n<script>alert(1)</script>\n```");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn deterministic() {
        let body = "# T\n\nsome *body* text\n";
        assert_eq!(render_markdown(body), render_markdown(body));
    }
}
