//! # foliogen
//!
//! A minimal static site generator for combined blog and portfolio sites.
//! Two JSON collection files are the data source: blog entries reference
//! markdown document files, portfolio entries link out to external project
//! pages. One build produces a cross-linked static site — post pages, a blog
//! index, a portfolio index, and one page per tag.
//!
//! # Architecture: One Linear Pipeline
//!
//! ```text
//! load → enrich covers → render documents → index tags → render pages → write
//! ```
//!
//! A build is stateless: every invocation is a full rebuild from the source
//! files. The one deliberate exception is cover enrichment, which writes
//! discovered `og:image` URLs back into the portfolio collection file — a
//! cache in the *input* so future builds skip the network.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Explicit project root + `site.toml` loading and validation |
//! | [`content`] | Collection loading, schema defaults, per-entry warnings |
//! | [`markdown`] | Document body → embeddable HTML (pulldown-cmark) |
//! | [`enrich`] | Best-effort `og:image`/`twitter:image` fetch for portfolio links |
//! | [`tags`] | Tag → entries index, discovery order, no normalization |
//! | [`render`] | The four page templates (Maud, auto-escaped) |
//! | [`publish`] | Output tree writing and the static-asset mirror |
//! | [`build`] | Pipeline orchestration and the build report |
//! | [`output`] | CLI display formatting for build reports |
//!
//! # Design Decisions
//!
//! ## Maud Over Template Engines
//!
//! Pages are generated with [Maud](https://maud.lambda.xyz/), a compile-time
//! HTML macro system. Malformed markup is a build error, interpolation is
//! auto-escaped (the only `PreEscaped` insertion is the markdown-rendered
//! post body), and there is no template directory to ship or get out of
//! sync. The stylesheet is embedded with `include_str!` for the same reason.
//!
//! ## Degradation Over Failure
//!
//! Per-entry problems never kill a build: a missing document file skips that
//! entry, an unreachable portfolio URL leaves its cover unset. Both surface
//! as warnings on stderr. Only structural problems — malformed collection
//! JSON, an unwritable output root — abort the run. The GUI that drives
//! builds as a subprocess shows stdout/stderr verbatim, so the split between
//! the two streams is the whole error-severity story.
//!
//! ## No Implicit Sort
//!
//! Indexes show entries in the order the source JSON lists them, and tag
//! pages in discovery order. The collection file is the ordering authority;
//! nothing re-sorts by date behind the user's back.

pub mod build;
pub mod config;
pub mod content;
pub mod enrich;
pub mod markdown;
pub mod output;
pub mod publish;
pub mod render;
pub mod tags;

#[cfg(test)]
pub(crate) mod test_helpers;
