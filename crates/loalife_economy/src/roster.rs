//! # Roster
//!
//! Characters grouped by server, plus the per-character choices the player
//! makes (gold earner, excluded, which raids are cleared).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::tables::{Raid, DEFAULT_RAID_CLEARS, MAX_RAIDS_PER_CHARACTER};

/// Gold earners allowed per server.
pub const GOLD_EARNERS_PER_SERVER: usize = 6;

/// A character on the player's account.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    /// Character name. Unique within a server.
    pub character_name: String,
    /// Server the character lives on.
    pub server_name: String,
    /// Item level. Not necessarily an integer.
    pub level: f64,
    /// Class name. Cosmetic.
    pub class_name: String,
}

impl Character {
    /// Creates a character.
    #[must_use]
    pub fn new(
        character_name: impl Into<String>,
        server_name: impl Into<String>,
        level: f64,
        class_name: impl Into<String>,
    ) -> Self {
        Self {
            character_name: character_name.into(),
            server_name: server_name.into(),
            level,
            class_name: class_name.into(),
        }
    }

    /// Key identifying this character across a roster.
    #[must_use]
    pub fn key(&self) -> CharacterKey {
        CharacterKey::new(&self.server_name, &self.character_name)
    }
}

/// (server, character name) identity.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CharacterKey {
    /// Server name.
    pub server: String,
    /// Character name.
    pub name: String,
}

impl CharacterKey {
    /// Creates a key.
    #[must_use]
    pub fn new(server: &str, name: &str) -> Self {
        Self {
            server: server.to_string(),
            name: name.to_string(),
        }
    }
}

/// One server's characters, highest level first.
#[derive(Clone, Debug, PartialEq)]
pub struct ServerRoster {
    /// Server name.
    pub server: String,
    /// Characters sorted by level, descending.
    pub characters: Vec<Character>,
}

/// An account's characters grouped by server.
///
/// Servers keep the order in which they were first seen.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Roster {
    servers: Vec<ServerRoster>,
}

impl Roster {
    /// Groups `characters` by server and sorts each group by level,
    /// highest first. Equal levels keep their input order.
    #[must_use]
    pub fn from_characters(characters: impl IntoIterator<Item = Character>) -> Self {
        let mut servers: Vec<ServerRoster> = Vec::new();
        for character in characters {
            match servers.iter_mut().find(|s| s.server == character.server_name) {
                Some(group) => group.characters.push(character),
                None => servers.push(ServerRoster {
                    server: character.server_name.clone(),
                    characters: vec![character],
                }),
            }
        }
        for group in &mut servers {
            group
                .characters
                .sort_by(|a, b| b.level.total_cmp(&a.level));
        }
        Self { servers }
    }

    /// Servers in roster order.
    #[must_use]
    pub fn servers(&self) -> &[ServerRoster] {
        &self.servers
    }

    /// Looks up one server.
    #[must_use]
    pub fn server(&self, name: &str) -> Option<&ServerRoster> {
        self.servers.iter().find(|s| s.server == name)
    }

    /// Every character in roster order.
    pub fn characters(&self) -> impl Iterator<Item = &Character> {
        self.servers.iter().flat_map(|s| s.characters.iter())
    }

    /// Number of characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.servers.iter().map(|s| s.characters.len()).sum()
    }

    /// True when the roster holds no characters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The player's choices for one character.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterSelection {
    /// Left out of every total.
    #[serde(default)]
    pub excluded: bool,
    /// Takes the gold-bonus variant of raid rewards.
    #[serde(default)]
    pub gold_bonus: bool,
    /// Which of the character's available raids are cleared, by slot index
    /// into [`Raid::available_raids`].
    #[serde(default)]
    pub raid_slots: Vec<bool>,
}

impl CharacterSelection {
    /// True if raid slot `index` is selected. Out-of-range slots are not.
    #[must_use]
    pub fn is_raid_selected(&self, index: usize) -> bool {
        self.raid_slots.get(index).copied().unwrap_or(false)
    }

    /// Default choices for a character at `level`: gold earners clear their
    /// top [`DEFAULT_RAID_CLEARS`] raids, everyone else clears none.
    #[must_use]
    pub fn default_for(level: f64, gold_bonus: bool) -> Self {
        let available = Raid::available_raids(level, MAX_RAIDS_PER_CHARACTER).len();
        Self {
            excluded: false,
            gold_bonus,
            raid_slots: (0..available)
                .map(|slot| gold_bonus && slot < DEFAULT_RAID_CLEARS)
                .collect(),
        }
    }
}

/// Choices for every character of a roster.
///
/// A character without an entry is included, not a gold earner and clears
/// no raids.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selections {
    entries: BTreeMap<CharacterKey, CharacterSelection>,
}

impl Selections {
    /// No choices made.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Default choices: on each server the [`GOLD_EARNERS_PER_SERVER`]
    /// highest-level characters are gold earners.
    #[must_use]
    pub fn defaults(roster: &Roster) -> Self {
        let mut entries = BTreeMap::new();
        for group in roster.servers() {
            for (rank, character) in group.characters.iter().enumerate() {
                let gold_bonus = rank < GOLD_EARNERS_PER_SERVER;
                entries.insert(
                    character.key(),
                    CharacterSelection::default_for(character.level, gold_bonus),
                );
            }
        }
        Self { entries }
    }

    /// Choices for `character`, if any were recorded.
    #[must_use]
    pub fn get(&self, character: &Character) -> Option<&CharacterSelection> {
        self.entries.get(&character.key())
    }

    /// Choices for `character`, created empty if missing.
    pub fn entry(&mut self, character: &Character) -> &mut CharacterSelection {
        self.entries.entry(character.key()).or_default()
    }

    /// Records choices for `character`.
    pub fn set(&mut self, character: &Character, selection: CharacterSelection) {
        self.entries.insert(character.key(), selection);
    }

    /// Excludes every character below `level` and includes every other one.
    pub fn exclude_below_level(&mut self, roster: &Roster, level: f64) {
        for character in roster.characters() {
            self.entry(character).excluded = character.level < level;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Roster {
        Roster::from_characters(vec![
            Character::new("Low", "Luterra", 1540.0, "Bard"),
            Character::new("Main", "Luterra", 1702.5, "Berserker"),
            Character::new("Alt", "Kazeros", 1660.0, "Sorceress"),
            Character::new("Mid", "Luterra", 1640.0, "Gunlancer"),
        ])
    }

    #[test]
    fn test_grouping_keeps_first_seen_server_order() {
        let r = roster();
        let servers: Vec<_> = r.servers().iter().map(|s| s.server.as_str()).collect();
        assert_eq!(servers, vec!["Luterra", "Kazeros"]);
        assert_eq!(r.len(), 4);
    }

    #[test]
    fn test_characters_sorted_by_level() {
        let r = roster();
        let names: Vec<_> = r
            .server("Luterra")
            .unwrap()
            .characters
            .iter()
            .map(|c| c.character_name.as_str())
            .collect();
        assert_eq!(names, vec!["Main", "Mid", "Low"]);
    }

    #[test]
    fn test_slot_out_of_range_is_unselected() {
        let selection = CharacterSelection {
            raid_slots: vec![true, false],
            ..CharacterSelection::default()
        };
        assert!(selection.is_raid_selected(0));
        assert!(!selection.is_raid_selected(1));
        assert!(!selection.is_raid_selected(17));
    }

    #[test]
    fn test_default_selection() {
        let earner = CharacterSelection::default_for(1700.0, true);
        assert_eq!(earner.raid_slots, vec![true, true, true, false, false, false]);

        let other = CharacterSelection::default_for(1700.0, false);
        assert!(other.raid_slots.iter().all(|&s| !s));

        let low = CharacterSelection::default_for(1610.0, true);
        assert_eq!(low.raid_slots, vec![true, true]);
    }

    #[test]
    fn test_only_top_six_are_gold_earners() {
        let characters = (0..8).map(|i| Character::new(format!("C{i}"), "Luterra", 1600.0 + f64::from(i), "Bard"));
        let r = Roster::from_characters(characters);
        let selections = Selections::defaults(&r);

        let earners = r
            .characters()
            .filter(|c| selections.get(c).is_some_and(|s| s.gold_bonus))
            .count();
        assert_eq!(earners, GOLD_EARNERS_PER_SERVER);
        let lowest = r.characters().last().unwrap();
        assert!(!selections.get(lowest).unwrap().gold_bonus);
    }

    #[test]
    fn test_exclude_below_level() {
        let r = roster();
        let mut selections = Selections::defaults(&r);
        selections.exclude_below_level(&r, 1650.0);

        let excluded: Vec<_> = r
            .characters()
            .filter(|c| selections.get(c).unwrap().excluded)
            .map(|c| c.character_name.as_str())
            .collect();
        assert_eq!(excluded, vec!["Mid", "Low"]);

        selections.exclude_below_level(&r, 0.0);
        assert!(r.characters().all(|c| !selections.get(c).unwrap().excluded));
    }
}
