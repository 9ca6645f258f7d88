//! The launchable-item catalog.
//!
//! A [`Catalog`] is loaded once from a [`CatalogSource`] and never changes
//! afterwards. Everything downstream refers to items by their position in
//! the catalog, so duplicate display names cannot make activation ambiguous.

mod desktop;

pub use desktop::{DesktopCatalogSource, DesktopEntry, parse_desktop_entry, strip_field_codes};

use crate::Result;
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::{info, warn};

/// One launchable application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchableItem {
    /// Display name. Used for filtering, not for identity.
    pub key: String,
    /// Icon name or path, passed through untouched.
    pub icon: Option<String>,
    /// Command line handed to the process launcher.
    pub exec: String,
    /// Where the item came from (a `.desktop` file for the desktop source).
    pub source: Option<PathBuf>,
}

impl LaunchableItem {
    pub fn new(key: impl Into<String>, exec: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            icon: None,
            exec: exec.into(),
            source: None,
        }
    }

    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    #[must_use]
    pub fn with_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = Some(source.into());
        self
    }
}

/// Enumerates launchable items. Called once at startup.
pub trait CatalogSource {
    /// Load the full, ordered item list.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be enumerated at all.
    fn load_catalog(&self) -> Result<Vec<LaunchableItem>>;
}

/// In-memory source, mostly for tests and one-shot CLI use.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalogSource {
    items: Vec<LaunchableItem>,
}

impl StaticCatalogSource {
    #[must_use]
    pub fn new(items: Vec<LaunchableItem>) -> Self {
        Self { items }
    }
}

impl CatalogSource for StaticCatalogSource {
    fn load_catalog(&self) -> Result<Vec<LaunchableItem>> {
        Ok(self.items.clone())
    }
}

/// Immutable, ordered snapshot of launchable items.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<LaunchableItem>,
}

impl Catalog {
    #[must_use]
    pub fn new(items: Vec<LaunchableItem>) -> Self {
        let catalog = Self { items };
        let duplicates = catalog.duplicate_keys();
        if !duplicates.is_empty() {
            warn!(
                "Catalog has {} duplicate names (items stay distinct by position): {:?}",
                duplicates.len(),
                duplicates
            );
        }
        catalog
    }

    /// Load a catalog from `source`.
    ///
    /// # Errors
    ///
    /// Propagates the source's error. Startup should treat it as fatal.
    pub fn load(source: &dyn CatalogSource) -> Result<Self> {
        let items = source.load_catalog()?;
        info!("Loaded catalog with {} items", items.len());
        Ok(Self::new(items))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&LaunchableItem> {
        self.items.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LaunchableItem> {
        self.items.iter()
    }

    #[must_use]
    pub fn items(&self) -> &[LaunchableItem] {
        &self.items
    }

    /// Names that occur more than once, in order of first appearance.
    #[must_use]
    pub fn duplicate_keys(&self) -> Vec<&str> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for item in &self.items {
            *counts.entry(item.key.as_str()).or_default() += 1;
        }

        let mut seen = Vec::new();
        for item in &self.items {
            let key = item.key.as_str();
            if counts.get(key).copied().unwrap_or(0) > 1 && !seen.contains(&key) {
                seen.push(key);
            }
        }
        seen
    }
}
