//! Selection by identity.
//!
//! Both dashboards follow the same "click, select, show details" pattern. The
//! selection only ever stores an identifier; the selected item is re-resolved
//! against the current data whenever it is needed, so a stale reference can't
//! outlive the data it pointed into.

/// Anything with a stable identifier unique within its collection.
pub trait Identified {
    fn id(&self) -> &str;
}

/// Holds at most one selected identity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    selected: Option<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `item`, returning the previously selected identity.
    pub fn select<T: Identified>(&mut self, item: &T) -> Option<String> {
        self.selected.replace(item.id().to_string())
    }

    /// Clear the selection, returning what was selected.
    pub fn clear(&mut self) -> Option<String> {
        self.selected.take()
    }

    pub fn id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn is_selected<T: Identified>(&self, item: &T) -> bool {
        self.selected.as_deref() == Some(item.id())
    }

    /// Find the selected item in `items`.
    pub fn resolve<'a, T: Identified>(&self, items: &'a [T]) -> Option<&'a T> {
        let id = self.selected.as_deref()?;
        items.iter().find(|item| item.id() == id)
    }

    /// Drop the selection unless `keep` accepts the selected identity.
    ///
    /// Returns true if a selection was dropped.
    pub fn retain<F: FnOnce(&str) -> bool>(&mut self, keep: F) -> bool {
        match self.selected.as_deref() {
            Some(id) if !keep(id) => {
                self.selected = None;
                true
            }
            _ => false,
        }
    }
}
