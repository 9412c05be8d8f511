//! Application state shared by the app shell and its components.

use crate::data::library::{GameId, Library};

pub struct AppState {
    /// Set to request the main loop to exit.
    pub exit: bool,
    pub library: Library,
    /// Snapshot of the game under the cursor, for the status bar.
    pub selected: Option<GameId>,
    /// Active single-list platform key, `None` in multi-list display.
    pub single_list: Option<String>,
    pub status_message: Option<String>,
    pub error_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            exit: false,
            library: Library::sample(),
            selected: None,
            single_list: None,
            status_message: None,
            error_message: None,
        }
    }
}

impl AppState {
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.error_message = None;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error_message = Some(message.into());
    }

    pub fn clear_messages(&mut self) {
        self.status_message = None;
        self.error_message = None;
    }
}
