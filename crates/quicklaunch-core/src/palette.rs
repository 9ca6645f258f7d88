//! The palette: catalog, query, selection and dispatcher wired together.
//!
//! One `Palette` value is the single owner of all mutable launcher state.
//! The presentation layer feeds it query edits and [`Command`]s and reads
//! back a [`PageView`] after each one.

use crate::catalog::{Catalog, LaunchableItem};
use crate::dispatch::CommandDispatcher;
use crate::filter::FilterEngine;
use crate::pagination::PageSize;
use crate::selection::{Command, Outcome, SelectionController, SelectionState};
use tracing::debug;

/// Everything the presentation layer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView<'a> {
    /// Items on the current page, in order.
    pub items: Vec<&'a LaunchableItem>,
    /// Highlighted row within `items`.
    pub selected: Option<usize>,
    pub page_index: usize,
    pub page_count: usize,
    pub total_matches: usize,
    pub catalog_len: usize,
}

impl PageView<'_> {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total_matches == 0
    }

    #[must_use]
    pub fn selected_item(&self) -> Option<&LaunchableItem> {
        self.items.get(self.selected?).copied()
    }
}

pub struct Palette {
    catalog: Catalog,
    query: String,
    filter: FilterEngine,
    selection: SelectionController,
    dispatcher: CommandDispatcher,
}

impl Palette {
    #[must_use]
    pub fn new(catalog: Catalog, page_size: PageSize, dispatcher: CommandDispatcher) -> Self {
        let mut filter = FilterEngine::new();
        let view = filter.recompute(&catalog, "");
        Self {
            selection: SelectionController::new(view, page_size),
            catalog,
            query: String::new(),
            filter,
            dispatcher,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn selection(&self) -> SelectionState {
        self.selection.state()
    }

    /// Replace the query, recompute the view and reset the cursor.
    /// Setting the same query again changes nothing.
    pub fn set_query(&mut self, query: &str) {
        if query == self.query {
            return;
        }
        self.query = query.to_string();
        let view = self.filter.recompute(&self.catalog, &self.query);
        self.selection.replace_view(view);
    }

    /// Handle one command. Activation is forwarded to the dispatcher and the
    /// returned outcome says whether the launch request was accepted.
    pub fn apply(&mut self, command: Command) -> Outcome {
        let mut outcome = self.selection.apply(command);

        if let Outcome::Activated {
            catalog_index,
            launched,
        } = &mut outcome
        {
            *launched = self
                .catalog
                .get(*catalog_index)
                .is_some_and(|item| self.dispatcher.dispatch(&item.exec));
        }

        debug!("{command:?} -> {outcome:?}, state {:?}", self.selection.state());
        outcome
    }

    #[must_use]
    pub fn page_view(&self) -> PageView<'_> {
        let view = self.selection.view();
        let range = self.selection.visible_range();
        let items = view.indices()[range]
            .iter()
            .filter_map(|&i| self.catalog.get(i))
            .collect();

        PageView {
            items,
            selected: self.selection.selected_in_page(),
            page_index: self.selection.state().page().unwrap_or(0),
            page_count: self.selection.page_count(),
            total_matches: view.len(),
            catalog_len: self.catalog.len(),
        }
    }
}

impl std::fmt::Debug for Palette {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Palette")
            .field("catalog_len", &self.catalog.len())
            .field("query", &self.query)
            .field("selection", &self.selection.state())
            .finish_non_exhaustive()
    }
}
