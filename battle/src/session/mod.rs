//! Interactive battle session state machine

mod engine;
mod team;

pub use engine::{BattleSession, Command, LastDamage, Phase};
