//! The library screen: the multilist view over the game library.
//!
//! Owns the view and its data source, maps key presses to navigation, and
//! turns the view's selection/activation events into app state updates.

use std::cell::RefCell;
use std::rc::Rc;

use crossterm::event::{KeyCode, KeyEvent};
use glaunch_core::{ListMode, MultilistSource, MultilistView};
use ratatui::{Frame, layout::Rect};

use crate::components::{Component, EventResult};
use crate::data::library::GameId;
use crate::data::source::LibrarySource;
use crate::state::AppState;
use crate::util::styles::focused_block_with_help;

enum ScreenEvent {
    Selected(GameId),
    Opened(GameId),
}

pub struct LibraryScreen {
    view: MultilistView<LibrarySource>,
    /// Events queued by the view's listeners during a key dispatch,
    /// drained into `AppState` before the handler returns.
    pending: Rc<RefCell<Vec<ScreenEvent>>>,
}

impl LibraryScreen {
    pub fn new(state: &AppState) -> Self {
        let mut view = MultilistView::new();
        view.set_source(LibrarySource::new(&state.library));

        let pending: Rc<RefCell<Vec<ScreenEvent>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = pending.clone();
        view.on_selection_changed(move |event| {
            sink.borrow_mut().push(ScreenEvent::Selected(event.item));
        });
        let sink = pending.clone();
        view.on_item_opened(move |event| {
            sink.borrow_mut().push(ScreenEvent::Opened(event.item));
        });

        Self { view, pending }
    }

    /// Game currently under the cursor, if any.
    pub fn selected_game(&self) -> Option<GameId> {
        let source = self.view.source()?;
        let cursor = self.view.cursor();
        source.item(cursor.sublist, cursor.item)
    }

    /// Restrict the display to the platform under the cursor; pressing
    /// again on an already-pinned view goes back to multi-list.
    fn pin_cursor_sublist(&mut self, state: &mut AppState) {
        if matches!(self.view.mode(), ListMode::Single { .. }) {
            self.view.multi_list_mode();
            state.single_list = None;
            return;
        }
        let Some(key) = self
            .view
            .source()
            .and_then(|source| source.sublist_keys().get(self.view.cursor().sublist).cloned())
        else {
            return;
        };
        self.view.single_list_mode(&key);
        state.single_list = Some(key);
    }

    fn drain_events(&mut self, state: &mut AppState) {
        for event in self.pending.borrow_mut().drain(..) {
            match event {
                ScreenEvent::Selected(id) => {
                    state.selected = Some(id);
                }
                ScreenEvent::Opened(id) => {
                    let Some(game) = state.library.get(id) else {
                        continue;
                    };
                    tracing::info!(
                        title = %game.title,
                        platform = game.platform.name(),
                        "launch requested"
                    );
                    state.set_status(format!(
                        "Launching {} via {}...",
                        game.title,
                        game.platform.name()
                    ));
                }
            }
        }
    }
}

impl Component for LibraryScreen {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.view.move_down(),
            KeyCode::Up | KeyCode::Char('k') => self.view.move_up(),
            KeyCode::Right | KeyCode::PageDown => self.view.next_sublist(),
            KeyCode::Left | KeyCode::PageUp => self.view.prev_sublist(),
            KeyCode::Home | KeyCode::Char('g') => self.view.move_home(),
            KeyCode::End | KeyCode::Char('G') => self.view.move_end(),
            KeyCode::Enter => self.view.open_selected(),
            KeyCode::Char('h') | KeyCode::Char('<') => self.view.scroll_left(),
            KeyCode::Char('l') | KeyCode::Char('>') => self.view.scroll_right(),
            KeyCode::Char('s') => self.pin_cursor_sublist(state),
            KeyCode::Char('m') => {
                self.view.multi_list_mode();
                state.single_list = None;
            }
            _ => return EventResult::NotHandled,
        }
        self.drain_events(state);
        EventResult::Handled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let title = match &state.single_list {
            Some(key) => format!(" LIBRARY · {key} "),
            None => " LIBRARY ".to_string(),
        };
        let block = focused_block_with_help(&title, true, "[Enter] launch [s]ingle [m]ulti");
        let inner = block.inner(area);
        frame.render_widget(block, area);
        self.view.render(frame, inner);
    }
}
