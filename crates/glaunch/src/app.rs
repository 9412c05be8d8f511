use std::io;
use std::path::PathBuf;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::components::{Component, EventResult, status_bar::StatusBar};
use crate::data::storage::LibraryStore;
use crate::screens::library::LibraryScreen;
use crate::state::AppState;

pub struct App {
    state: AppState,
    status_bar: StatusBar,
    library_screen: LibraryScreen,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// App over the built-in sample library, for running without a data
    /// directory.
    pub fn new() -> Self {
        Self::from_state(AppState::default())
    }

    /// Load the library from the data directory, seeding a sample file on
    /// first run. An unreadable file leaves the sample library in place
    /// and reports the failure through the status bar.
    pub fn with_data_dir(data_dir: PathBuf) -> Self {
        let store = LibraryStore::new(&data_dir);
        let mut state = AppState::default();
        match store.load_or_seed() {
            Ok(library) => state.library = library,
            Err(e) => {
                tracing::warn!("Failed to load library from {:?}: {e}", store.path());
                state.set_error(format!(
                    "Could not read {}; showing the sample library",
                    store.path().display()
                ));
            }
        }
        Self::from_state(state)
    }

    fn from_state(mut state: AppState) -> Self {
        let library_screen = LibraryScreen::new(&state);
        state.selected = library_screen.selected_game();
        Self {
            state,
            status_bar: StatusBar::new(),
            library_screen,
        }
    }

    /// Runs the application's main loop until the user quits.
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        while !self.state.exit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }
        Ok(())
    }

    fn draw(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // Library
                Constraint::Length(2), // Status bar
            ])
            .split(frame.area());

        self.library_screen.render(frame, chunks[0], &self.state);
        self.status_bar.render(frame, chunks[1], &self.state);
    }

    fn handle_events(&mut self) -> io::Result<()> {
        match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event)
            }
            _ => {}
        };
        Ok(())
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) {
        // Global key bindings
        match key_event.code {
            KeyCode::Char('q') if key_event.modifiers.is_empty() => {
                self.state.exit = true;
                return;
            }
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.exit = true;
                return;
            }
            KeyCode::Esc => {
                self.state.clear_messages();
                return;
            }
            _ => {}
        }

        match self.library_screen.handle_key(key_event, &mut self.state) {
            EventResult::Handled => {}
            EventResult::NotHandled => {
                tracing::trace!("unhandled key: {:?}", key_event.code);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
        app.handle_key_event(KeyEvent::new(code, modifiers));
    }

    #[test]
    fn test_q_requests_exit() {
        let mut app = App::new();
        press(&mut app, KeyCode::Char('q'), KeyModifiers::NONE);
        assert!(app.state.exit);
    }

    #[test]
    fn test_ctrl_c_requests_exit() {
        let mut app = App::new();
        press(&mut app, KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.state.exit);
    }

    #[test]
    fn test_esc_clears_messages() {
        let mut app = App::new();
        app.state.set_status("Launching...");
        press(&mut app, KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(app.state.status_message, None);
    }

    #[test]
    fn test_new_app_has_initial_selection() {
        let app = App::new();
        assert!(app.state.selected.is_some());
    }

    #[test]
    fn test_unmapped_key_changes_nothing() {
        let mut app = App::new();
        let before = app.state.selected;
        press(&mut app, KeyCode::Char('x'), KeyModifiers::NONE);
        assert!(!app.state.exit);
        assert_eq!(app.state.selected, before);
    }

    #[test]
    fn test_corrupt_library_file_surfaces_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("library.json"), "not json").unwrap();

        let app = App::with_data_dir(dir.path().to_path_buf());
        let error = app.state.error_message.clone().unwrap();
        assert!(error.contains("library.json"));
        // The session still has something to show.
        assert!(!app.state.library.games.is_empty());
        assert!(app.state.selected.is_some());
    }
}
