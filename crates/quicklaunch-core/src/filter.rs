//! Substring filtering of the catalog.
//!
//! The filter never ranks or reorders: a [`FilteredView`] is always a
//! subsequence of the catalog in catalog order.

use crate::catalog::{Catalog, LaunchableItem};
use nucleo_matcher::{Config, Matcher, Utf32Str};
use tracing::debug;

/// Catalog positions of the items matching a query, in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilteredView {
    indices: Vec<usize>,
}

impl FilteredView {
    /// View over every item of a catalog with `len` items.
    #[must_use]
    pub fn identity(len: usize) -> Self {
        Self {
            indices: (0..len).collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Catalog index of the item at `position` in this view.
    #[must_use]
    pub fn catalog_index(&self, position: usize) -> Option<usize> {
        self.indices.get(position).copied()
    }

    /// Resolve the view against the catalog it was computed from.
    pub fn items<'a>(&'a self, catalog: &'a Catalog) -> impl Iterator<Item = &'a LaunchableItem> {
        self.indices.iter().filter_map(|&i| catalog.get(i))
    }
}

/// Case-insensitive substring filter.
pub struct FilterEngine {
    matcher: Matcher,
}

impl FilterEngine {
    #[must_use]
    pub fn new() -> Self {
        // Both sides are lowercased before matching, so the matcher compares exactly
        let mut config = Config::DEFAULT;
        config.ignore_case = false;
        config.normalize = false;
        Self {
            matcher: Matcher::new(config),
        }
    }

    /// Items whose key contains `query`, ignoring case. An empty query keeps everything.
    pub fn recompute(&mut self, catalog: &Catalog, query: &str) -> FilteredView {
        if query.is_empty() {
            return FilteredView::identity(catalog.len());
        }

        let needle = query.to_lowercase();
        let mut lowered = String::new();
        let indices: Vec<usize> = catalog
            .iter()
            .enumerate()
            .filter(|(_, item)| self.key_contains(&item.key, &needle, &mut lowered))
            .map(|(i, _)| i)
            .collect();

        debug!(
            "Filter {:?} matched {} of {} items",
            query,
            indices.len(),
            catalog.len()
        );

        FilteredView { indices }
    }

    // The matcher keeps one char per grapheme cluster, so non-ASCII keys are
    // compared on their full lowercase text instead.
    fn key_contains(&mut self, key: &str, needle: &str, lowered: &mut String) -> bool {
        if !key.is_ascii() {
            return key.to_lowercase().contains(needle);
        }
        if !needle.is_ascii() {
            return false;
        }

        lowered.clear();
        lowered.extend(key.chars().map(|c| c.to_ascii_lowercase()));
        self.matcher
            .substring_match(
                Utf32Str::Ascii(lowered.as_bytes()),
                Utf32Str::Ascii(needle.as_bytes()),
            )
            .is_some()
    }
}

impl Default for FilterEngine {
    fn default() -> Self {
        Self::new()
    }
}
