//! Selection and paging state machine.
//!
//! [`SelectionState`] transitions are pure: each takes the current state plus
//! the view length and page size, and returns the next state. The
//! [`SelectionController`] owns one state together with the view it indexes.
//!
//! While the view is non-empty the state always satisfies
//! `index < len` and `page == page_of(index)`. Every navigation wraps.

use crate::filter::FilteredView;
use crate::pagination::{PageSize, page_bounds, page_count, page_of};
use std::ops::Range;

/// Navigation and activation commands the input layer can issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    MoveDown,
    MoveUp,
    PageNext,
    PagePrev,
    Activate,
}

/// Where the cursor is. `Empty` when the view has no items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionState {
    Empty,
    Selected { index: usize, page: usize },
}

impl SelectionState {
    /// State for a freshly loaded or freshly filtered view: first item, first page.
    #[must_use]
    pub fn initial(len: usize) -> Self {
        if len == 0 {
            Self::Empty
        } else {
            Self::Selected { index: 0, page: 0 }
        }
    }

    #[must_use]
    pub fn index(self) -> Option<usize> {
        match self {
            Self::Empty => None,
            Self::Selected { index, .. } => Some(index),
        }
    }

    #[must_use]
    pub fn page(self) -> Option<usize> {
        match self {
            Self::Empty => None,
            Self::Selected { page, .. } => Some(page),
        }
    }

    fn at(index: usize, page_size: PageSize) -> Self {
        Self::Selected {
            index,
            page: page_of(index, page_size),
        }
    }

    #[must_use]
    pub fn move_down(self, len: usize, page_size: PageSize) -> Self {
        match self {
            Self::Selected { index, .. } if len > 0 => Self::at((index + 1) % len, page_size),
            _ => self,
        }
    }

    #[must_use]
    pub fn move_up(self, len: usize, page_size: PageSize) -> Self {
        match self {
            Self::Selected { index, .. } if len > 0 => {
                Self::at((index + len - 1) % len, page_size)
            }
            _ => self,
        }
    }

    #[must_use]
    pub fn page_next(self, len: usize, page_size: PageSize) -> Self {
        self.flip(len, page_size, |page, pages| (page + 1) % pages)
    }

    #[must_use]
    pub fn page_prev(self, len: usize, page_size: PageSize) -> Self {
        self.flip(len, page_size, |page, pages| (page + pages - 1) % pages)
    }

    /// Move to another page keeping the cursor's row on the page.
    /// Lands on the last item when the target page is too short for that row.
    fn flip(
        self,
        len: usize,
        page_size: PageSize,
        target: impl FnOnce(usize, usize) -> usize,
    ) -> Self {
        let Self::Selected { index, page } = self else {
            return self;
        };
        let pages = page_count(len, page_size);
        if pages == 0 {
            return self;
        }

        let offset = index - page * page_size.get();
        let new_page = target(page, pages);
        let new_index = (new_page * page_size.get() + offset).min(len - 1);

        Self::Selected {
            index: new_index,
            page: new_page,
        }
    }

    /// Apply a navigation command. `Activate` never changes the state.
    #[must_use]
    pub fn step(self, command: Command, len: usize, page_size: PageSize) -> Self {
        match command {
            Command::MoveDown => self.move_down(len, page_size),
            Command::MoveUp => self.move_up(len, page_size),
            Command::PageNext => self.page_next(len, page_size),
            Command::PagePrev => self.page_prev(len, page_size),
            Command::Activate => self,
        }
    }
}

/// What a command did to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The cursor or page changed (or stayed put on a single-item view).
    Moved,
    /// The item at this catalog position was activated. `launched` tells whether
    /// a launch request went out; the controller alone never launches, so it
    /// reports `false` and the palette fills in the dispatch result.
    Activated { catalog_index: usize, launched: bool },
    /// Nothing to act on; the view is empty.
    Ignored,
}

/// Owns the current filtered view and the cursor into it.
#[derive(Debug, Clone)]
pub struct SelectionController {
    view: FilteredView,
    page_size: PageSize,
    state: SelectionState,
}

impl SelectionController {
    #[must_use]
    pub fn new(view: FilteredView, page_size: PageSize) -> Self {
        let state = SelectionState::initial(view.len());
        Self {
            view,
            page_size,
            state,
        }
    }

    /// Swap in a recomputed view. The cursor resets to the first item.
    pub fn replace_view(&mut self, view: FilteredView) {
        self.state = SelectionState::initial(view.len());
        self.view = view;
    }

    pub fn apply(&mut self, command: Command) -> Outcome {
        let Some(index) = self.state.index() else {
            return Outcome::Ignored;
        };

        if command == Command::Activate {
            return match self.view.catalog_index(index) {
                Some(catalog_index) => Outcome::Activated {
                    catalog_index,
                    launched: false,
                },
                None => Outcome::Ignored,
            };
        }

        self.state = self.state.step(command, self.view.len(), self.page_size);
        Outcome::Moved
    }

    #[must_use]
    pub fn state(&self) -> SelectionState {
        self.state
    }

    #[must_use]
    pub fn view(&self) -> &FilteredView {
        &self.view
    }

    #[must_use]
    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    #[must_use]
    pub fn page_count(&self) -> usize {
        page_count(self.view.len(), self.page_size)
    }

    /// View positions shown on the current page. Empty range when nothing matches.
    #[must_use]
    pub fn visible_range(&self) -> Range<usize> {
        self.state
            .page()
            .and_then(|page| page_bounds(page, self.view.len(), self.page_size))
            .unwrap_or(0..0)
    }

    /// Cursor row within the current page.
    #[must_use]
    pub fn selected_in_page(&self) -> Option<usize> {
        let index = self.state.index()?;
        Some(index - self.visible_range().start)
    }

    /// Catalog position of the selected item.
    #[must_use]
    pub fn selected_catalog_index(&self) -> Option<usize> {
        self.view.catalog_index(self.state.index()?)
    }
}
