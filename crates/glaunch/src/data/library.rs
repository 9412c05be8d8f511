//! Game library records.
//!
//! Flat, serde-backed game list. How entries get here (platform scanners,
//! manual edits of the JSON file) is outside this crate's concern; the UI
//! only reads.

use serde::{Deserialize, Serialize};

/// Stable identifier of a library entry, reported through selection and
/// activation events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameId(pub u64);

/// Store platform a game belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    Steam,
    Gog,
    Epic,
    Origin,
    Uplay,
    Itch,
    Custom,
}

impl Platform {
    pub fn name(&self) -> &'static str {
        match self {
            Platform::Steam => "Steam",
            Platform::Gog => "GOG",
            Platform::Epic => "Epic",
            Platform::Origin => "Origin",
            Platform::Uplay => "Uplay",
            Platform::Itch => "itch.io",
            Platform::Custom => "Custom",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub id: GameId,
    pub title: String,
    pub platform: Platform,
    pub installed: bool,
    /// Total recorded playtime in minutes.
    #[serde(default)]
    pub playtime_min: u64,
}

/// The whole library, in storage order. Sublist (platform) order in the UI
/// is first-seen order of this list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Library {
    pub games: Vec<Game>,
}

impl Library {
    pub fn get(&self, id: GameId) -> Option<&Game> {
        self.games.iter().find(|game| game.id == id)
    }

    /// Starter library written on first run so the UI has something to
    /// show before any real entries exist.
    pub fn sample() -> Self {
        let entries = [
            ("Half-Life 2", Platform::Steam, true, 1432),
            ("Portal 2", Platform::Steam, true, 760),
            ("Dwarf Fortress", Platform::Steam, false, 0),
            ("The Witcher 3", Platform::Gog, true, 5210),
            ("Cyberpunk 2077", Platform::Gog, false, 0),
            ("Rocket League", Platform::Epic, true, 320),
            ("Celeste", Platform::Itch, true, 942),
        ];
        Self {
            games: entries
                .into_iter()
                .enumerate()
                .map(|(index, (title, platform, installed, playtime_min))| Game {
                    id: GameId(index as u64 + 1),
                    title: title.to_string(),
                    platform,
                    installed,
                    playtime_min,
                })
                .collect(),
        }
    }
}
