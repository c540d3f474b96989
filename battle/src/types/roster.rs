//! Roster records and hydration into battle-ready combatants
//!
//! The roster provider is external (a wallet, a save file, a fixture);
//! this module only defines the record shape it hands over and the
//! total conversion into [`Combatant`]. Missing or invalid numeric data
//! silently defaults from level, per the engine's
//! normalize-don't-reject policy.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::{MoveCatalog, builtin_catalog};
use crate::types::combatant::{Combatant, Rarity, Side};

/// Explicit stat block as supplied by some roster providers
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatBlock {
    pub hp: Option<u32>,
    pub attack: Option<u32>,
    pub defense: Option<u32>,
    pub speed: Option<u32>,
}

/// An externally owned creature record, prior to hydration
///
/// Every field except `name` is optional; stats are read from the
/// nested `stats` block first, then from the flat fields, then derived
/// from level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterEntry {
    #[serde(rename = "tokenId", default)]
    pub token_id: Option<u64>,

    pub name: String,

    #[serde(default)]
    pub image: Option<String>,

    #[serde(default)]
    pub level: Option<i64>,

    #[serde(default)]
    pub rarity: Option<String>,

    #[serde(default)]
    pub stats: Option<StatBlock>,

    #[serde(default)]
    pub hp: Option<u32>,
    #[serde(default)]
    pub attack: Option<u32>,
    #[serde(default)]
    pub defense: Option<u32>,
    #[serde(default)]
    pub speed: Option<u32>,
}

impl RosterEntry {
    /// A minimal entry carrying only a name; everything else defaults
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            token_id: None,
            name: name.into(),
            image: None,
            level: None,
            rarity: None,
            stats: None,
            hp: None,
            attack: None,
            defense: None,
            speed: None,
        }
    }

    /// An entry with an explicit stat block
    pub fn with_stats(
        name: impl Into<String>,
        level: i64,
        rarity: &str,
        hp: u32,
        attack: u32,
        defense: u32,
        speed: u32,
    ) -> Self {
        let mut entry = Self::named(name);
        entry.level = Some(level);
        entry.rarity = Some(rarity.to_string());
        entry.stats = Some(StatBlock {
            hp: Some(hp),
            attack: Some(attack),
            defense: Some(defense),
            speed: Some(speed),
        });
        entry
    }

    /// Stable key identifying this entry within a roster
    pub fn key(&self) -> String {
        match self.token_id {
            Some(token) => format!("owned-{token}"),
            None => format!("owned-{}", self.name),
        }
    }

    /// Level normalized to a positive integer (invalid/absent => 1)
    pub fn level_or_default(&self) -> u32 {
        match self.level {
            Some(l) if l > 0 => l as u32,
            _ => 1,
        }
    }
}

/// Errors from parsing an external roster document
///
/// Hydration itself is total; only JSON ingestion can fail.
#[derive(Error, Debug)]
pub enum RosterError {
    #[error("malformed roster document: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("roster document contains no entries")]
    Empty,
}

/// Parse a roster provider's JSON document into entries
pub fn load_roster(json: &str) -> Result<Vec<RosterEntry>, RosterError> {
    let entries: Vec<RosterEntry> = serde_json::from_str(json)?;
    if entries.is_empty() {
        return Err(RosterError::Empty);
    }
    Ok(entries)
}

/// Hydrate a roster entry into a battle-ready combatant using the
/// built-in move catalog
///
/// Guarantees: full HP, not fainted, a non-empty move list (fallback
/// repertoire for unknown names), and a PP map initialized to each
/// move's cap. Never fails.
pub fn hydrate(entry: &RosterEntry, side: Side) -> Combatant {
    hydrate_with(entry, side, builtin_catalog())
}

/// Hydrate against a caller-supplied move catalog
pub fn hydrate_with(entry: &RosterEntry, side: Side, catalog: &MoveCatalog) -> Combatant {
    let level = entry.level_or_default();
    let stats = entry.stats.clone().unwrap_or_default();

    let max_hp = stats.hp.or(entry.hp).unwrap_or(60 + 8 * level);
    let attack = stats.attack.or(entry.attack).unwrap_or(25 + 5 * level);
    let defense = stats.defense.or(entry.defense).unwrap_or(20 + 4 * level);
    let speed = stats.speed.or(entry.speed).unwrap_or(20 + 4 * level);

    let prefix = match side {
        Side::Player => "player",
        Side::Ai => "ai",
    };

    let moves = catalog.resolve(&entry.name).into_moves();
    let pp = moves.iter().map(|m| (m.id.clone(), m.pp_max)).collect();

    Combatant {
        id: format!("{prefix}-{}", entry.key()),
        name: entry.name.clone(),
        rarity: Rarity::from_label(entry.rarity.as_deref().unwrap_or("Common")),
        level,
        max_hp,
        hp: max_hp,
        attack,
        defense,
        speed,
        moves,
        pp,
        side,
    }
}
