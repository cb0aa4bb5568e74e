use super::{visible, Categorized, FILTER_ALL};

/// Inline disclosure state for one mounted grid.
///
/// `expanded` is only changed by [`activate`](Self::activate) and
/// [`escape`](Self::escape). Changing the filter never touches it, so a card
/// hidden by a filter change stays expanded and reappears expanded when the
/// filter brings it back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridState {
    expanded: Option<String>,
    filter: String,
}

impl Default for GridState {
    fn default() -> Self {
        Self::new()
    }
}

impl GridState {
    /// Fresh state: nothing expanded, filter `all`.
    pub fn new() -> Self {
        Self {
            expanded: None,
            filter: FILTER_ALL.to_string(),
        }
    }

    pub fn expanded_id(&self) -> Option<&str> {
        self.expanded.as_deref()
    }

    pub fn active_filter(&self) -> &str {
        &self.filter
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.as_deref() == Some(id)
    }

    /// Toggle `id`: collapse it if it is expanded, otherwise expand it and
    /// implicitly collapse any other card.
    pub fn activate(&mut self, id: &str) {
        if self.is_expanded(id) {
            tracing::debug!(card = id, "collapse");
            self.expanded = None;
        } else {
            tracing::debug!(card = id, previous = ?self.expanded, "expand");
            self.expanded = Some(id.to_string());
        }
    }

    /// Escape key: collapse the expanded card. Returns whether anything changed.
    pub fn escape(&mut self) -> bool {
        self.expanded.take().is_some()
    }

    pub fn set_filter(&mut self, category: &str) {
        self.filter = category.to_string();
    }

    /// Entries visible under the active filter, in source order.
    pub fn visible<'a, T: Categorized>(&self, entries: &'a [T]) -> Vec<&'a T> {
        visible(entries, &self.filter)
    }

    /// True when a card is expanded but filtered out of view.
    pub fn expanded_hidden<T: Categorized>(&self, entries: &[T]) -> bool {
        match self.expanded.as_deref() {
            Some(id) => !self.visible(entries).iter().any(|e| e.id() == id),
            None => false,
        }
    }
}
