//! Combatant state types

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::moves::Move;

/// Cosmetic rarity tier carried through from the roster record
///
/// Has no balance effect in the battle core but must round-trip back to
/// the caller unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    /// Parse a roster-supplied label, defaulting to Common
    pub fn from_label(label: &str) -> Self {
        match label {
            "Rare" => Rarity::Rare,
            "Epic" => Rarity::Epic,
            "Legendary" => Rarity::Legendary,
            _ => Rarity::Common,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
        }
    }
}

/// Which side controls a combatant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Player,
    Ai,
}

impl Side {
    /// The opposing side
    pub fn opponent(&self) -> Side {
        match self {
            Side::Player => Side::Ai,
            Side::Ai => Side::Player,
        }
    }
}

/// A battle-ready creature with mutable HP and PP counters
///
/// Constructed fresh from roster data at the start of a session and
/// discarded once results are reported upward. Identity fields (name,
/// rarity, level, stats, move list) never change during a battle; only
/// `hp` and the PP map mutate, and only through the engine's resolution
/// step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Combatant {
    /// Opaque identifier, unique within a battle session
    pub id: String,

    /// Display name, also the move-catalog lookup key
    pub name: String,

    pub rarity: Rarity,

    /// Level, >= 1; feeds stat defaults and damage scaling
    pub level: u32,

    pub max_hp: u32,

    /// Current HP, 0 <= hp <= max_hp
    pub hp: u32,

    pub attack: u32,
    pub defense: u32,
    pub speed: u32,

    /// Ordered move list, 1 to 4 entries, never empty
    pub moves: Vec<Move>,

    /// Remaining uses per move id; floors at 0
    pub pp: HashMap<String, u32>,

    pub side: Side,
}

impl Combatant {
    /// Whether this combatant is out of the fight
    pub fn is_fainted(&self) -> bool {
        self.hp == 0
    }

    /// Current HP as a percentage of max (0-100)
    pub fn hp_percent(&self) -> u32 {
        if self.max_hp == 0 {
            return 0;
        }
        (self.hp * 100) / self.max_hp
    }

    /// Apply damage, flooring HP at 0
    pub fn take_damage(&mut self, amount: u32) {
        self.hp = self.hp.saturating_sub(amount);
    }

    /// Remaining PP for a move id (0 for unknown ids)
    pub fn pp_remaining(&self, move_id: &str) -> u32 {
        self.pp.get(move_id).copied().unwrap_or(0)
    }

    /// Spend one PP of a move, flooring at 0
    pub fn spend_pp(&mut self, move_id: &str) {
        if let Some(left) = self.pp.get_mut(move_id) {
            *left = left.saturating_sub(1);
        }
    }

    /// Moves that still have PP remaining, in move-list order
    pub fn usable_moves(&self) -> Vec<&Move> {
        self.moves
            .iter()
            .filter(|m| self.pp_remaining(&m.id) > 0)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::roster::{RosterEntry, hydrate};

    fn sample() -> Combatant {
        hydrate(&RosterEntry::named("Testmon"), Side::Player)
    }

    #[test]
    fn test_rarity_from_label() {
        assert_eq!(Rarity::from_label("Epic"), Rarity::Epic);
        assert_eq!(Rarity::from_label("Legendary"), Rarity::Legendary);
        assert_eq!(Rarity::from_label("shiny"), Rarity::Common);
        assert_eq!(Rarity::from_label(""), Rarity::Common);
    }

    #[test]
    fn test_side_opponent() {
        assert_eq!(Side::Player.opponent(), Side::Ai);
        assert_eq!(Side::Ai.opponent(), Side::Player);
    }

    #[test]
    fn test_take_damage_floors_at_zero() {
        let mut c = sample();
        let max = c.max_hp;

        c.take_damage(5);
        assert_eq!(c.hp, max - 5);
        assert!(!c.is_fainted());

        c.take_damage(max * 2);
        assert_eq!(c.hp, 0);
        assert!(c.is_fainted());
    }

    #[test]
    fn test_pp_decrements_by_one_and_floors() {
        let mut c = sample();
        let id = c.moves[0].id.clone();
        let cap = c.moves[0].pp_max;

        for used in 1..=cap {
            c.spend_pp(&id);
            assert_eq!(c.pp_remaining(&id), cap - used);
        }

        // Exhausted: stays at 0, never negative
        c.spend_pp(&id);
        c.spend_pp(&id);
        assert_eq!(c.pp_remaining(&id), 0);
    }

    #[test]
    fn test_usable_moves_excludes_exhausted() {
        let mut c = sample();
        let total = c.moves.len();
        let id = c.moves[0].id.clone();

        assert_eq!(c.usable_moves().len(), total);

        for _ in 0..c.moves[0].pp_max {
            c.spend_pp(&id);
        }
        assert_eq!(c.usable_moves().len(), total - 1);
    }

    #[test]
    fn test_hp_percent() {
        let mut c = sample();
        assert_eq!(c.hp_percent(), 100);
        c.hp = c.max_hp / 2;
        assert_eq!(c.hp_percent(), 50);
        c.hp = 0;
        assert_eq!(c.hp_percent(), 0);
    }
}
