//! Local UI chrome state for the navbar panels.
//!
//! DESIGN
//! ======
//! Keeps panel visibility out of the chat state so closing the chat dialog
//! never touches the conversation log.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Visibility of the two navbar panels. Both start closed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub chat_open: bool,
    pub side_menu_open: bool,
}

impl UiState {
    pub fn toggle_side_menu(&mut self) {
        self.side_menu_open = !self.side_menu_open;
    }

    pub fn close_side_menu(&mut self) {
        self.side_menu_open = false;
    }

    /// The chat icon only opens; closing goes through the dialog's close button.
    pub fn open_chat(&mut self) {
        self.chat_open = true;
    }

    pub fn close_chat(&mut self) {
        self.chat_open = false;
    }
}
