//! Tag indexing.
//!
//! Builds the tag → entries mapping that drives the per-tag pages. One
//! two-phase pass: every blog post first, then every portfolio entry, each
//! appended to the list of every tag it declares. Order everywhere is
//! discovery order — no sorting, and no normalization of tag names (a tag
//! differing only by case is a distinct tag).
//!
//! Buckets hold [`TagRef`] indices into the caller's post/portfolio slices
//! rather than the entries themselves, so the index borrows nothing and the
//! page renderer resolves references when it needs the actual records.

use crate::content::{BlogPost, PortfolioEntry};

/// Reference to an entry in one of the two input collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagRef {
    /// Index into the blog post slice.
    Post(usize),
    /// Index into the portfolio slice.
    Project(usize),
}

/// All entries declaring one tag, in discovery order.
#[derive(Debug)]
pub struct TagBucket {
    pub tag: String,
    pub entries: Vec<TagRef>,
}

/// Mapping from tag to the entries carrying it.
///
/// Bucket order is first-occurrence order, which makes tag page generation
/// deterministic for identical input.
#[derive(Debug, Default)]
pub struct TagIndex {
    buckets: Vec<TagBucket>,
}

impl TagIndex {
    /// Index blog posts, then portfolio entries.
    pub fn build(posts: &[BlogPost], portfolio: &[PortfolioEntry]) -> Self {
        let mut index = TagIndex::default();
        for (i, post) in posts.iter().enumerate() {
            for tag in &post.tags {
                index.insert(tag, TagRef::Post(i));
            }
        }
        for (i, entry) in portfolio.iter().enumerate() {
            for tag in &entry.tags {
                index.insert(tag, TagRef::Project(i));
            }
        }
        index
    }

    fn insert(&mut self, tag: &str, entry: TagRef) {
        match self.buckets.iter_mut().find(|b| b.tag == tag) {
            Some(bucket) => bucket.entries.push(entry),
            None => self.buckets.push(TagBucket {
                tag: tag.to_string(),
                entries: vec![entry],
            }),
        }
    }

    pub fn buckets(&self) -> &[TagBucket] {
        &self.buckets
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    #[cfg(test)]
    fn get(&self, tag: &str) -> Option<&TagBucket> {
        self.buckets.iter().find(|b| b.tag == tag)
    }
}
