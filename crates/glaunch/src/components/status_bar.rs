use super::{Component, EventResult};
use crate::state::AppState;
use crate::util::format::format_playtime;
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const HELP_TEXT: &str =
    "↑/↓: game | ←/→: platform | Home/End: jump | Enter: launch | s/m: single/all | h/l: scroll | q: quit";

pub struct StatusBar;

impl StatusBar {
    pub fn new() -> Self {
        Self
    }

    fn selection_summary(state: &AppState) -> Option<String> {
        let game = state.library.get(state.selected?)?;
        let installed = if game.installed { "installed" } else { "not installed" };
        Some(format!(
            "{} [{} · {} · {}]",
            game.title,
            game.platform.name(),
            installed,
            format_playtime(game.playtime_min),
        ))
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for StatusBar {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let content = if let Some(error) = &state.error_message {
            Line::from(vec![
                Span::styled("Error: ", Style::default().fg(Color::Red)),
                Span::raw(error.clone()),
            ])
        } else if let Some(status) = &state.status_message {
            Line::from(Span::raw(status.clone()))
        } else if let Some(summary) = Self::selection_summary(state) {
            Line::from(vec![
                Span::raw(summary),
                Span::styled(
                    format!("   {HELP_TEXT}"),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        } else {
            Line::from(Span::styled(HELP_TEXT, Style::default().fg(Color::DarkGray)))
        };

        let paragraph = Paragraph::new(content).block(Block::default().borders(Borders::TOP));

        frame.render_widget(paragraph, area);
    }
}
