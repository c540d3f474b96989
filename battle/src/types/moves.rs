//! Move records

use serde::{Deserialize, Serialize};

/// A named action a combatant can use in battle.
///
/// `power`, `accuracy` and `pp_max` are fixed for the lifetime of the
/// move; only the owning combatant's PP counter changes as the move is
/// used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Move {
    /// Stable key derived from owner + move name, used for PP bookkeeping
    pub id: String,

    /// Display name (e.g., "Thunderbolt")
    pub name: String,

    /// Flavor type string (e.g., "Electric"); no balance effect
    pub kind: String,

    /// Base power, >= 0
    pub power: u32,

    /// Hit chance as a fraction in [0, 1]
    pub accuracy: f64,

    /// Maximum uses per battle, >= 1
    pub pp_max: u32,
}

impl Move {
    /// Create a move owned by `owner_key`, normalizing the bounded fields
    pub fn new(
        owner_key: &str,
        name: impl Into<String>,
        kind: impl Into<String>,
        power: u32,
        accuracy: f64,
        pp_max: u32,
    ) -> Self {
        let name = name.into();
        Self {
            id: move_id(owner_key, &name),
            name,
            kind: kind.into(),
            power,
            accuracy: accuracy.clamp(0.0, 1.0),
            pp_max: pp_max.max(1),
        }
    }
}

/// Derive the stable move id from its owner key and name
pub fn move_id(owner_key: &str, name: &str) -> String {
    format!("{owner_key}-{name}")
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}
