//! Wire types for the Life RPG backend.
//!
//! Every field the server may omit carries an explicit serde default, so a
//! partial payload hydrates to the documented fallback values once, at the
//! deserialization boundary, instead of being patched per call site.

use serde::{Deserialize, Serialize};

// ============================================================================
// Stats
// ============================================================================

/// The five allocatable attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stat {
    Strength,
    Intelligence,
    Willpower,
    Vitality,
    Charisma,
}

impl Stat {
    /// Every stat, in the order the backend and the UI list them.
    pub const ALL: [Stat; 5] = [
        Stat::Strength,
        Stat::Intelligence,
        Stat::Willpower,
        Stat::Vitality,
        Stat::Charisma,
    ];

    /// Key used on the wire. The backend speaks Korean.
    pub fn key(&self) -> &'static str {
        match self {
            Stat::Strength => "힘",
            Stat::Intelligence => "지능",
            Stat::Willpower => "의지력",
            Stat::Vitality => "체력",
            Stat::Charisma => "매력",
        }
    }

    /// English label shown next to the wire key.
    pub fn label(&self) -> &'static str {
        match self {
            Stat::Strength => "Strength",
            Stat::Intelligence => "Intelligence",
            Stat::Willpower => "Willpower",
            Stat::Vitality => "Health",
            Stat::Charisma => "Charisma",
        }
    }
}

fn default_stat_value() -> u8 {
    5
}

/// The five stat values, keyed on the wire by their Korean names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBlock {
    #[serde(rename = "힘", default = "default_stat_value")]
    pub strength: u8,
    #[serde(rename = "지능", default = "default_stat_value")]
    pub intelligence: u8,
    #[serde(rename = "의지력", default = "default_stat_value")]
    pub willpower: u8,
    #[serde(rename = "체력", default = "default_stat_value")]
    pub vitality: u8,
    #[serde(rename = "매력", default = "default_stat_value")]
    pub charisma: u8,
}

impl StatBlock {
    pub fn get(&self, stat: Stat) -> u8 {
        match stat {
            Stat::Strength => self.strength,
            Stat::Intelligence => self.intelligence,
            Stat::Willpower => self.willpower,
            Stat::Vitality => self.vitality,
            Stat::Charisma => self.charisma,
        }
    }

    pub fn set(&mut self, stat: Stat, value: u8) {
        match stat {
            Stat::Strength => self.strength = value,
            Stat::Intelligence => self.intelligence = value,
            Stat::Willpower => self.willpower = value,
            Stat::Vitality => self.vitality = value,
            Stat::Charisma => self.charisma = value,
        }
    }

    /// Sum of all five values.
    pub fn total(&self) -> u32 {
        Stat::ALL.iter().map(|stat| self.get(*stat) as u32).sum()
    }
}

impl Default for StatBlock {
    fn default() -> Self {
        Self {
            strength: default_stat_value(),
            intelligence: default_stat_value(),
            willpower: default_stat_value(),
            vitality: default_stat_value(),
            charisma: default_stat_value(),
        }
    }
}

// ============================================================================
// Player state
// ============================================================================

fn default_level() -> u32 {
    1
}

fn default_xp_to_next_level() -> u32 {
    100
}

/// Authoritative player state as the server reports it.
///
/// The client never mutates this beyond replacing it wholesale with the
/// latest server snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerData {
    #[serde(default = "default_level")]
    pub level: u32,
    #[serde(default)]
    pub xp: u32,
    #[serde(default = "default_xp_to_next_level")]
    pub xp_to_next_level: u32,
    #[serde(default)]
    pub gold: u32,
    #[serde(default)]
    pub stat_points: u32,
    #[serde(default)]
    pub stats: StatBlock,
    #[serde(default)]
    pub inventory: Vec<InventoryItem>,
    #[serde(default)]
    pub active_quests: Vec<QuestView>,
}

impl Default for PlayerData {
    fn default() -> Self {
        Self {
            level: default_level(),
            xp: 0,
            xp_to_next_level: default_xp_to_next_level(),
            gold: 0,
            stat_points: 0,
            stats: StatBlock::default(),
            inventory: Vec::new(),
            active_quests: Vec::new(),
        }
    }
}

/// An inventory entry. The backend stores plain item names but hands out
/// richer objects for shop stock, so both shapes appear on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InventoryItem {
    Plain(String),
    Detailed {
        name: String,
        #[serde(default)]
        effect: Option<String>,
    },
}

impl InventoryItem {
    /// Display form: the bare name, or `name (effect)` for detailed items.
    pub fn display(&self) -> String {
        match self {
            InventoryItem::Plain(name) => name.clone(),
            InventoryItem::Detailed { name, effect } => {
                format!("{} ({})", name, effect.as_deref().unwrap_or("no effect"))
            }
        }
    }
}

fn default_quest_name() -> String {
    "Unnamed Quest".to_string()
}

fn default_quest_description() -> String {
    "No description.".to_string()
}

fn default_quest_status() -> String {
    "N/A".to_string()
}

/// One active quest, exactly as listed in the quests panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestView {
    #[serde(default = "default_quest_name")]
    pub name: String,
    #[serde(default = "default_quest_description")]
    pub description: String,
    #[serde(default = "default_quest_status")]
    pub status: String,
}

// ============================================================================
// Chat history
// ============================================================================

/// One prior conversation turn. Roles are "user" for the player, "model"
/// for the GM; anything else renders as a system line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub parts: Vec<String>,
}

impl HistoryEntry {
    /// The displayable text of this turn. Parts are separate paragraphs and
    /// keep their own lines.
    pub fn text(&self) -> String {
        self.parts.join("\n")
    }
}

// ============================================================================
// Endpoint responses
// ============================================================================

/// Response to `POST /game/initialize`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InitializeResponse {
    #[serde(default)]
    pub player_data: PlayerData,
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
}

/// Response to `POST /game/send_message`: everything one game turn can
/// produce. `gm_response` is an empty string for turns the server answered
/// without the GM (for example backend slash commands).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TurnResponse {
    #[serde(default)]
    pub command_response: Option<String>,
    #[serde(default)]
    pub gm_response: String,
    #[serde(default)]
    pub quest_updates: Vec<String>,
    #[serde(default)]
    pub new_achievements: Vec<String>,
    #[serde(default)]
    pub player_data: PlayerData,
    #[serde(default)]
    pub image_url: Option<String>,
}
