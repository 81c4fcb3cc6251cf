//! View state for the main screen
//!
//! Tabs and modal dialogs. At most one modal is open at a time.

use serde::{Deserialize, Serialize};

/// Main content tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Tab {
    /// Game cards grid
    #[default]
    Games,
    /// Building purchase panel
    Buildings,
}

/// Overlay dialogs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Modal {
    /// Arcade mini-game
    MiniGame,
    /// Token conversion stub
    Convert,
}

/// Active tab and open modal
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiState {
    pub tab: Tab,
    modal: Option<Modal>,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    pub fn modal(&self) -> Option<Modal> {
        self.modal
    }

    pub fn is_open(&self, modal: Modal) -> bool {
        self.modal == Some(modal)
    }

    /// Open a modal. Refused while another one is showing.
    pub fn open(&mut self, modal: Modal) -> bool {
        match self.modal {
            None => {
                self.modal = Some(modal);
                true
            }
            Some(open) => open == modal,
        }
    }

    /// Close whatever modal is open, returning it
    pub fn close(&mut self) -> Option<Modal> {
        self.modal.take()
    }
}

/// Balance as shown in the bottom bar, e.g. `12.5 $SATO`
pub fn format_balance(balance: f64, currency: &str) -> String {
    format!("{:.1} {}", balance, currency)
}

/// Building production label, e.g. `+0.5 $SATO/s`
pub fn format_rate(rate: f64, currency: &str) -> String {
    format!("+{} {}/s", rate, currency)
}

/// Building price label, e.g. `250 $SATO`
pub fn format_cost(cost: f64, currency: &str) -> String {
    format!("{} {}", cost, currency)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modals_are_exclusive() {
        let mut ui = UiState::new();
        assert!(ui.open(Modal::MiniGame));
        assert!(!ui.open(Modal::Convert));
        assert!(ui.is_open(Modal::MiniGame));
        assert!(!ui.is_open(Modal::Convert));

        assert_eq!(ui.close(), Some(Modal::MiniGame));
        assert_eq!(ui.close(), None);
        assert!(ui.open(Modal::Convert));
        assert_eq!(ui.modal(), Some(Modal::Convert));
    }

    #[test]
    fn test_reopening_same_modal_is_ok() {
        let mut ui = UiState::new();
        assert!(ui.open(Modal::Convert));
        assert!(ui.open(Modal::Convert));
    }

    #[test]
    fn test_tabs() {
        let mut ui = UiState::new();
        assert_eq!(ui.tab, Tab::Games);
        ui.select_tab(Tab::Buildings);
        assert_eq!(ui.tab, Tab::Buildings);
    }

    #[test]
    fn test_formatting() {
        assert_eq!(format_balance(10.0, "$SATO"), "10.0 $SATO");
        assert_eq!(format_balance(12.34, "$SATO"), "12.3 $SATO");
        assert_eq!(format_rate(0.5, "$SATO"), "+0.5 $SATO/s");
        assert_eq!(format_rate(20.0, "$SATO"), "+20 $SATO/s");
        assert_eq!(format_cost(2000.0, "$SATO"), "2000 $SATO");
    }
}
