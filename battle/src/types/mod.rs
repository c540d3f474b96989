//! Domain types for battle resolution

mod combatant;
mod moves;
mod roster;

pub use combatant::{Combatant, Rarity, Side};
pub use moves::{Move, move_id};
pub use roster::{RosterEntry, RosterError, StatBlock, hydrate, hydrate_with, load_roster};
