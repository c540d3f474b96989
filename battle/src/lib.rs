//! Combatant types and the phased 1v1 battle engine for the arena.
//!
//! This crate is the interactive half of the battle core: it hydrates
//! externally owned roster records into battle-ready combatants and
//! drives one player-vs-AI best-of-3 tournament turn by turn.
//!
//! # Overview
//!
//! ```text
//! roster provider (JSON records)
//!        │
//!        ▼
//! arena-battle (hydration + session engine) ← THIS CRATE
//!        │
//!        ├─> presentation layer (phases, HP bars, dialogue, toasts)
//!        ├─> economy layer (earned reward, exactly once)
//!        └─> arena-tourney (batch round-robin over the same combatants)
//! ```
//!
//! # Main Types
//!
//! - [`RosterEntry`] / [`load_roster`] / [`hydrate`] - external records
//!   and their total conversion into combatants
//! - [`Combatant`], [`Move`], [`Rarity`], [`Side`] - domain types
//! - [`MoveCatalog`] / [`Repertoire`] - species move resolution with an
//!   explicit fallback variant for unknown names
//! - [`BattleSession`] - the lineup/turn/resolution state machine
//!
//! # Example Usage
//!
//! ```
//! use arena_battle::{BattleSession, Command, Phase, RosterEntry};
//!
//! let roster: Vec<RosterEntry> = ["Pikachu", "Eevee", "Gengar"]
//!     .into_iter()
//!     .map(RosterEntry::named)
//!     .collect();
//! let keys: Vec<String> = roster.iter().map(|e| e.key()).collect();
//!
//! let mut session = BattleSession::seeded(roster, 7);
//! for key in keys {
//!     session.handle(Command::ToggleSelect(key));
//! }
//! session.handle(Command::StartBattle);
//!
//! while session.phase() != Phase::BattleOver {
//!     match session.phase() {
//!         Phase::PlayerTurn => {
//!             let mv = session.active_pair().unwrap().0.moves[0].id.clone();
//!             session.handle(Command::UseMove(mv));
//!         }
//!         _ => session.advance(),
//!     }
//! }
//! let earned = session.take_earned().unwrap();
//! # let _ = earned;
//! ```

pub mod ai;
pub mod catalog;
pub mod damage;
pub mod reward;
pub mod session;
pub mod types;

// Re-export main types at crate root for convenience
pub use catalog::{MoveCatalog, Repertoire, builtin_catalog, normalize_name};
pub use session::{BattleSession, Command, LastDamage, Phase};
pub use types::{
    Combatant, Move, Rarity, RosterEntry, RosterError, Side, StatBlock, hydrate, hydrate_with,
    load_roster, move_id,
};
