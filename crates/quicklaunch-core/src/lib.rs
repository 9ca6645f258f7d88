//! Core of the quicklaunch palette.
//!
//! Loads a catalog of launchable applications, narrows it with a
//! case-insensitive substring query, pages the result and tracks a
//! wrapping selection cursor. Activation hands the selected command to a
//! fire-and-forget [`dispatch::ProcessLauncher`].

pub mod catalog;
pub mod config;
pub mod dispatch;
pub mod filter;
pub mod pagination;
pub mod palette;
pub mod selection;

mod error;

#[cfg(test)]
mod tests;

pub use catalog::{Catalog, CatalogSource, LaunchableItem};
pub use dispatch::{CommandDispatcher, ProcessLauncher, ShellLauncher};
pub use error::{Error, Result};
pub use filter::{FilterEngine, FilteredView};
pub use pagination::PageSize;
pub use palette::{PageView, Palette};
pub use selection::{Command, Outcome, SelectionController, SelectionState};
