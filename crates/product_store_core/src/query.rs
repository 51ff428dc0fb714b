use serde::{Deserialize, Serialize};

use crate::error::QueryError;

/// How the per-tag membership tests of a [`TagFilter`] combine.
///
/// `Any` is an explicit opt-in via `mode=or`; any other mode value,
/// including an absent one, falls back to `All`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TagMatchMode {
    All,
    Any,
}

/// An engine-agnostic tag predicate: one membership test per tag, combined
/// with AND or OR. Backends either evaluate it in place via
/// [`TagFilter::matches`] or render it into their native filter syntax.
///
/// Construction goes through [`compile_tag_filter`], which guarantees the
/// tag list is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagFilter {
    tags: Vec<String>,
    mode: TagMatchMode,
}

impl TagFilter {
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn mode(&self) -> TagMatchMode {
        self.mode
    }

    /// Evaluates the predicate against an item's tags. Membership is
    /// case-sensitive, exact-match string equality.
    pub fn matches(&self, item_tags: &[String]) -> bool {
        match self.mode {
            TagMatchMode::All => self.tags.iter().all(|tag| item_tags.contains(tag)),
            TagMatchMode::Any => self.tags.iter().any(|tag| item_tags.contains(tag)),
        }
    }
}

/// Compiles the raw `tags` and `mode` query parameters into a [`TagFilter`].
///
/// `raw_tags` is split on commas; empty segments from doubled or trailing
/// commas are dropped rather than treated as errors. Surviving tags keep
/// their input order, untrimmed and undeduplicated. A filter that ends up
/// with zero tags is rejected.
pub fn compile_tag_filter(
    raw_tags: Option<&str>,
    mode: Option<&str>,
) -> Result<TagFilter, QueryError> {
    let raw = raw_tags.ok_or(QueryError::MissingTags)?;

    let tags: Vec<String> = raw
        .split(',')
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect();

    if tags.is_empty() {
        return Err(QueryError::NoUsableTags);
    }

    let mode = match mode {
        Some("or") => TagMatchMode::Any,
        _ => TagMatchMode::All,
    };

    Ok(TagFilter { tags, mode })
}
