//! Batch round-robin tournament simulator over arena combatants.
//!
//! The non-interactive half of the battle core: where
//! `arena-battle` drives one fight turn by turn for a player,
//! this crate scores an entire pool of combatants pairwise in a
//! single synchronous call. It owns private working copies of HP,
//! never tracks PP, and is safe to run off the interactive loop
//! entirely (e.g., on a worker thread).
//!
//! # Example Usage
//!
//! ```
//! use arena_battle::{RosterEntry, Side, hydrate};
//! use arena_tourney::run_round_robin;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let pool: Vec<_> = ["Pikachu", "Gengar", "Arcanine"]
//!     .into_iter()
//!     .map(|name| hydrate(&RosterEntry::named(name), Side::Player))
//!     .collect();
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let outcome = run_round_robin(&pool, &mut rng);
//! assert_eq!(outcome.results.len(), 3);
//! assert_eq!(outcome.table[0].played, 2);
//! ```

pub mod sim;
pub mod standings;

pub use sim::{MAX_ROUNDS, MatchReport, Winner, simulate_match};
pub use standings::{RoundRobin, StandingRow, run_round_robin};
