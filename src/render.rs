//! Page rendering.
//!
//! Produces the four page kinds — post page, blog index, portfolio index,
//! and tag page — using [maud](https://maud.lambda.xyz/) for compile-time
//! HTML templating. Templates are type-safe Rust code with automatic XSS
//! escaping; the only unescaped insertion is the markdown-rendered post body,
//! which goes in via `PreEscaped`.
//!
//! Every page carries the same SEO head: a `<title>`, a description, and a
//! comma-joined keyword string derived from tags. Rendering is deterministic
//! for identical input, and collection order is preserved everywhere — the
//! indexes show entries in the order the source JSON lists them, with no
//! implicit sort by date.
//!
//! The stylesheet is embedded at compile time, so generated sites need no
//! template or asset directory beyond their own `static/`.

use crate::content::{BlogPost, PortfolioEntry};
use crate::markdown::render_markdown;
use crate::tags::{TagBucket, TagRef};
use maud::{DOCTYPE, Markup, PreEscaped, html};

const CSS: &str = include_str!("../static/style.css");

/// A blog entry with its document body rendered to HTML and its output
/// location fixed. Ephemeral — recomputed on every build.
#[derive(Debug, Clone)]
pub struct RenderedPost {
    pub post: BlogPost,
    /// Rendered document body, embeddable HTML.
    pub html: String,
    /// Output path relative to the output root, e.g. `blog/hi.html`.
    /// A pure function of the slug.
    pub href: String,
}

/// Render a post's document body and derive its output path.
pub fn render_post(post: BlogPost) -> RenderedPost {
    let html = render_markdown(&post.body);
    let href = post_href(&post.slug);
    RenderedPost { post, html, href }
}

/// Output path for a post, relative to the output root.
pub fn post_href(slug: &str) -> String {
    format!("blog/{slug}.html")
}

/// Output path for a tag page, relative to the output root.
pub fn tag_href(tag: &str) -> String {
    format!("tag/{tag}.html")
}

/// SEO head values shared by every page kind.
struct PageMeta {
    title: String,
    description: String,
    keywords: String,
}

/// Comma-joined keyword string from a tag list.
fn keywords(tags: &[String]) -> String {
    tags.join(",")
}

// ============================================================================
// Document chrome
// ============================================================================

/// Base HTML document: head with SEO meta, embedded CSS, site header.
fn base_document(meta: &PageMeta, site: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta name="description" content=(meta.description);
                @if !meta.keywords.is_empty() {
                    meta name="keywords" content=(meta.keywords);
                }
                title { (meta.title) " | " (site) }
                style { (PreEscaped(CSS)) }
            }
            body {
                (site_header(site))
                main {
                    (content)
                }
            }
        }
    }
}

fn site_header(site: &str) -> Markup {
    html! {
        header.site-header {
            a.site-name href="/" { (site) }
            nav {
                a href="/" { "Blog" }
                a href="/portfolio/" { "Portfolio" }
            }
        }
    }
}

fn tag_list(tags: &[String]) -> Markup {
    html! {
        @if !tags.is_empty() {
            ul.tag-list {
                @for tag in tags {
                    li { a href={ "/" (tag_href(tag)) } { (tag) } }
                }
            }
        }
    }
}

// ============================================================================
// Entry cards
// ============================================================================

/// Blog post card used on the blog index and tag pages.
fn post_card(post: &RenderedPost) -> Markup {
    html! {
        article.entry-card {
            h2 { a href={ "/" (post.href) } { (post.post.title) } }
            @if !post.post.date.is_empty() {
                span.date { (post.post.date) }
            }
            p { (post.post.summary) }
            (tag_list(&post.post.tags))
        }
    }
}

/// Portfolio card used on the portfolio index and tag pages. Links out to
/// the external project page.
fn project_card(entry: &PortfolioEntry) -> Markup {
    html! {
        article.entry-card {
            @if let Some(cover) = &entry.cover {
                img.cover src=(cover) alt=(entry.title) loading="lazy";
            }
            h2 {
                a href=(entry.url) target="_blank" rel="noopener" { (entry.title) }
            }
            @if !entry.date.is_empty() {
                span.date { (entry.date) }
            }
            p { (entry.summary) }
            (tag_list(&entry.tags))
        }
    }
}

// ============================================================================
// Page renderers
// ============================================================================

/// One page per blog entry: the rendered document plus its metadata.
pub fn render_post_page(post: &RenderedPost, site: &str) -> Markup {
    let meta = PageMeta {
        title: post.post.title.clone(),
        description: post.post.summary.clone(),
        keywords: keywords(&post.post.tags),
    };
    let content = html! {
        article.post {
            h1 { (post.post.title) }
            @if !post.post.date.is_empty() {
                span.date { (post.post.date) }
            }
            (tag_list(&post.post.tags))
            div.post-body {
                (PreEscaped(post.html.as_str()))
            }
        }
    };
    base_document(&meta, site, content)
}

/// The blog index: every rendered post in collection order.
pub fn render_blog_index(posts: &[RenderedPost], site: &str) -> Markup {
    let meta = PageMeta {
        title: "Blog".to_string(),
        description: "Latest blog posts".to_string(),
        keywords: "blog,posts".to_string(),
    };
    let content = html! {
        h1 { "Blog" }
        @for post in posts {
            (post_card(post))
        }
    };
    base_document(&meta, site, content)
}

/// The portfolio index: every portfolio entry in collection order.
pub fn render_portfolio_index(entries: &[PortfolioEntry], site: &str) -> Markup {
    let meta = PageMeta {
        title: "Portfolio".to_string(),
        description: "Selected work and projects".to_string(),
        keywords: "portfolio,projects".to_string(),
    };
    let content = html! {
        h1 { "Portfolio" }
        @for entry in entries {
            (project_card(entry))
        }
    };
    base_document(&meta, site, content)
}

/// One page per distinct tag, listing that tag's entries in index order.
pub fn render_tag_page(
    bucket: &TagBucket,
    posts: &[RenderedPost],
    portfolio: &[PortfolioEntry],
    site: &str,
) -> Markup {
    let meta = PageMeta {
        title: bucket.tag.clone(),
        description: format!("Entries tagged {}", bucket.tag),
        keywords: bucket.tag.clone(),
    };
    let content = html! {
        h1 { (bucket.tag) }
        @for entry in &bucket.entries {
            @match *entry {
                TagRef::Post(i) => (post_card(&posts[i])),
                TagRef::Project(i) => (project_card(&portfolio[i])),
            }
        }
    };
    base_document(&meta, site, content)
}
