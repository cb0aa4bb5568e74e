/// Popup overlay state: zero or one open entry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PopupState {
    open: Option<String>,
}

impl PopupState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `id`, replacing any popup already open.
    pub fn open(&mut self, id: &str) {
        if let Some(previous) = self.open.as_deref() {
            if previous != id {
                tracing::debug!(card = id, previous, "replace popup");
            }
        }
        self.open = Some(id.to_string());
    }

    /// Backdrop click or close control.
    pub fn close(&mut self) {
        self.open = None;
    }

    pub fn current(&self) -> Option<&str> {
        self.open.as_deref()
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.open.as_deref() == Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_b_replaces_a() {
        let mut popup = PopupState::new();
        popup.open("core");
        popup.open("tech");
        assert_eq!(popup.current(), Some("tech"));
        assert!(!popup.is_open("core"));
    }

    #[test]
    fn reopening_same_entry_keeps_it_open() {
        let mut popup = PopupState::new();
        popup.open("core");
        popup.open("core");
        assert!(popup.is_open("core"));
    }

    #[test]
    fn close_clears() {
        let mut popup = PopupState::new();
        popup.open("mission");
        popup.close();
        assert_eq!(popup.current(), None);
        popup.close();
        assert_eq!(popup, PopupState::new());
    }
}
