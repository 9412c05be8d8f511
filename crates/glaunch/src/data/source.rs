//! Adapter exposing a [`Library`] to the multilist view.
//!
//! Groups games by platform in first-seen library order and pre-renders
//! row labels once, so the view's render pass is lookups only. The source
//! is an immutable snapshot: when the library changes, the owning screen
//! builds a fresh one and re-assigns it.

use glaunch_core::MultilistSource;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use crate::data::library::{GameId, Library};
use crate::util::format::format_playtime;
use crate::util::styles::{DIM_COLOR, SELECTION_COLOR};

struct Row {
    id: GameId,
    label: String,
    installed: bool,
}

pub struct LibrarySource {
    keys: Vec<String>,
    sublists: Vec<Vec<Row>>,
    max_width: usize,
}

impl LibrarySource {
    pub fn new(library: &Library) -> Self {
        let mut keys: Vec<String> = Vec::new();
        let mut sublists: Vec<Vec<Row>> = Vec::new();

        for game in &library.games {
            let key = game.platform.name();
            let index = match keys.iter().position(|k| k == key) {
                Some(index) => index,
                None => {
                    keys.push(key.to_string());
                    sublists.push(Vec::new());
                    keys.len() - 1
                }
            };
            let marker = if game.installed { "✓" } else { " " };
            let label = if game.playtime_min > 0 {
                format!(
                    "[{marker}] {} · {}",
                    game.title,
                    format_playtime(game.playtime_min)
                )
            } else {
                format!("[{marker}] {}", game.title)
            };
            sublists[index].push(Row {
                id: game.id,
                label,
                installed: game.installed,
            });
        }

        let max_width = sublists
            .iter()
            .flatten()
            .map(|row| UnicodeWidthStr::width(row.label.as_str()))
            .max()
            .unwrap_or(0);

        Self {
            keys,
            sublists,
            max_width,
        }
    }
}

impl MultilistSource for LibrarySource {
    type Item = GameId;

    fn sublist_keys(&self) -> &[String] {
        &self.keys
    }

    fn count_by_key(&self, key: &str) -> usize {
        self.keys
            .iter()
            .position(|k| k == key)
            .map(|index| self.sublists[index].len())
            .unwrap_or(0)
    }

    fn item(&self, sublist: usize, index: usize) -> Option<GameId> {
        Some(self.sublists.get(sublist)?.get(index)?.id)
    }

    fn max_row_width(&self) -> usize {
        self.max_width
    }

    fn render_row(
        &self,
        sublist: usize,
        index: usize,
        selected: bool,
        _width: u16,
        left: usize,
    ) -> Line<'static> {
        let row = &self.sublists[sublist][index];
        let base = if row.installed {
            Style::default()
        } else {
            Style::default().fg(DIM_COLOR)
        };
        let style = if selected {
            base.fg(SELECTION_COLOR).add_modifier(Modifier::BOLD)
        } else {
            base
        };
        let visible: String = row.label.chars().skip(left).collect();
        Line::from(Span::styled(visible, style))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::library::{Game, Platform};

    fn game(id: u64, title: &str, platform: Platform, installed: bool) -> Game {
        Game {
            id: GameId(id),
            title: title.to_string(),
            platform,
            installed,
            playtime_min: 0,
        }
    }

    fn mixed_library() -> Library {
        Library {
            games: vec![
                game(1, "Half-Life 2", Platform::Steam, true),
                game(2, "The Witcher 3", Platform::Gog, true),
                game(3, "Portal 2", Platform::Steam, false),
                game(4, "Celeste", Platform::Itch, true),
            ],
        }
    }

    #[test]
    fn test_sublists_follow_first_seen_platform_order() {
        let source = LibrarySource::new(&mixed_library());
        assert_eq!(source.sublist_keys(), &["Steam", "GOG", "itch.io"]);
        assert_eq!(source.count_by_key("Steam"), 2);
        assert_eq!(source.count_by_key("GOG"), 1);
        assert_eq!(source.count_at(2), 1);
        assert_eq!(source.total_count(), 4);
    }

    #[test]
    fn test_unknown_key_counts_zero() {
        let source = LibrarySource::new(&mixed_library());
        assert_eq!(source.count_by_key("Uplay"), 0);
    }

    #[test]
    fn test_item_lookup_returns_game_ids() {
        let source = LibrarySource::new(&mixed_library());
        assert_eq!(source.item(0, 0), Some(GameId(1)));
        assert_eq!(source.item(0, 1), Some(GameId(3)));
        assert_eq!(source.item(1, 0), Some(GameId(2)));
        assert_eq!(source.item(0, 2), None);
        assert_eq!(source.item(9, 0), None);
    }

    #[test]
    fn test_labels_carry_install_marker_and_playtime() {
        let mut library = mixed_library();
        library.games[0].playtime_min = 90;
        let source = LibrarySource::new(&library);
        let selected = source.render_row(0, 0, true, 80, 0);
        let text: String = selected.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "[✓] Half-Life 2 · 1h 30m");
        let unselected = source.render_row(0, 1, false, 80, 0);
        let text: String = unselected.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "[ ] Portal 2");
    }

    #[test]
    fn test_render_row_applies_horizontal_offset() {
        let source = LibrarySource::new(&mixed_library());
        let line = source.render_row(0, 0, false, 80, 4);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "Half-Life 2");
    }

    #[test]
    fn test_max_row_width_tracks_widest_label() {
        let source = LibrarySource::new(&mixed_library());
        // "[✓] The Witcher 3" is the widest label in the fixture.
        assert_eq!(source.max_row_width(), "[x] The Witcher 3".len());
    }

    #[test]
    fn test_empty_library_is_an_empty_source() {
        let source = LibrarySource::new(&Library::default());
        assert!(source.sublist_keys().is_empty());
        assert_eq!(source.total_count(), 0);
        assert_eq!(source.max_row_width(), 0);
    }
}
