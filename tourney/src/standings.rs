//! Round-robin standings

use std::collections::HashMap;

use arena_battle::{Combatant, Side};
use rand::Rng;

use crate::sim::{MatchReport, Winner, simulate_match};

/// Per-combatant aggregate of round-robin performance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandingRow {
    pub combatant_id: String,
    pub name: String,
    pub side: Side,
    pub played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    /// 3 per win, 1 per draw
    pub points: u32,
    /// Tiebreak score: +10 for a decisive win, -10 for a decisive loss
    pub hp_diff: i32,
}

impl StandingRow {
    fn new(combatant: &Combatant) -> Self {
        Self {
            combatant_id: combatant.id.clone(),
            name: combatant.name.clone(),
            side: combatant.side,
            played: 0,
            wins: 0,
            draws: 0,
            losses: 0,
            points: 0,
            hp_diff: 0,
        }
    }

    fn record_win(&mut self) {
        self.played += 1;
        self.wins += 1;
        self.points += 3;
        self.hp_diff += 10;
    }

    fn record_loss(&mut self) {
        self.played += 1;
        self.losses += 1;
        self.hp_diff -= 10;
    }

    fn record_draw(&mut self) {
        self.played += 1;
        self.draws += 1;
        self.points += 1;
    }
}

/// Ranked standings plus the individual match records behind them
#[derive(Debug, Clone)]
pub struct RoundRobin {
    /// Sorted descending by points, then by HP differential
    pub table: Vec<StandingRow>,
    pub results: Vec<MatchReport>,
}

/// Play every unordered pair in `pool` to a finish and rank the results
///
/// A pure batch computation: no timers, no suspension, and no mutation
/// of the input combatants. For a pool of size n it always produces
/// exactly n*(n-1)/2 match results.
pub fn run_round_robin(pool: &[Combatant], rng: &mut impl Rng) -> RoundRobin {
    let mut standings: HashMap<String, StandingRow> = pool
        .iter()
        .map(|c| (c.id.clone(), StandingRow::new(c)))
        .collect();

    let mut results = Vec::with_capacity(pool.len() * pool.len().saturating_sub(1) / 2);

    for i in 0..pool.len() {
        for j in (i + 1)..pool.len() {
            let a = &pool[i];
            let b = &pool[j];

            let report = simulate_match(a, b, rng);
            match report.winner {
                Winner::A => {
                    if let Some(row) = standings.get_mut(&a.id) {
                        row.record_win();
                    }
                    if let Some(row) = standings.get_mut(&b.id) {
                        row.record_loss();
                    }
                }
                Winner::B => {
                    if let Some(row) = standings.get_mut(&b.id) {
                        row.record_win();
                    }
                    if let Some(row) = standings.get_mut(&a.id) {
                        row.record_loss();
                    }
                }
                Winner::Draw => {
                    if let Some(row) = standings.get_mut(&a.id) {
                        row.record_draw();
                    }
                    if let Some(row) = standings.get_mut(&b.id) {
                        row.record_draw();
                    }
                }
            }
            results.push(report);
        }
    }

    let mut table: Vec<StandingRow> = standings.into_values().collect();
    table.sort_by(|x, y| {
        y.points
            .cmp(&x.points)
            .then_with(|| y.hp_diff.cmp(&x.hp_diff))
    });

    RoundRobin { table, results }
}
