//! Loading / error / data state shared by every server-backed list.
//!
//! DESIGN
//! ======
//! A page fetches on mount and again on an explicit retry. Success always
//! replaces the list wholesale. Failure differs by origin: a mount fetch
//! leaves the list empty, while a manual retry keeps whatever loaded last so
//! the user does not lose data they were already looking at.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

/// Why a fetch was issued.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadKind {
    /// First load when the page mounts (or its identity changes).
    Mount,
    /// User-initiated retry or a reload following a mutation.
    Manual,
}

/// What a page should render for a list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewPhase {
    Loading,
    /// Failed with nothing to show.
    Failed,
    Empty,
    Populated,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ListView<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for ListView<T> {
    fn default() -> Self {
        Self { items: Vec::new(), loading: true, error: None }
    }
}

impl<T> ListView<T> {
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn succeed(&mut self, items: Vec<T>) {
        self.items = items;
        self.loading = false;
        self.error = None;
    }

    pub fn fail(&mut self, kind: LoadKind, message: String) {
        if kind == LoadKind::Mount {
            self.items.clear();
        }
        self.loading = false;
        self.error = Some(message);
    }

    /// Surface an error without touching the list or the loading flag.
    pub fn report(&mut self, message: String) {
        self.error = Some(message);
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    pub fn phase(&self) -> ViewPhase {
        if self.loading {
            ViewPhase::Loading
        } else if !self.items.is_empty() {
            ViewPhase::Populated
        } else if self.error.is_some() {
            ViewPhase::Failed
        } else {
            ViewPhase::Empty
        }
    }
}
