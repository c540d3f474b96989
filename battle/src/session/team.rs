//! Opponent team construction

use rand::Rng;
use rand::seq::SliceRandom;

use crate::types::{Combatant, RosterEntry, Side, hydrate};

/// Fixed pool of house opponents used when the caller's roster alone
/// cannot fill a team
fn house_pool() -> Vec<RosterEntry> {
    vec![
        RosterEntry::with_stats("Pidgeotto", 8, "Common", 64, 52, 44, 56),
        RosterEntry::with_stats("Kadabra", 10, "Rare", 55, 70, 38, 72),
        RosterEntry::with_stats("Arcanine", 12, "Epic", 90, 88, 72, 74),
        RosterEntry::with_stats("Gyarados", 13, "Epic", 95, 92, 79, 70),
        RosterEntry::with_stats("Gengar", 11, "Epic", 60, 85, 55, 80),
        RosterEntry::with_stats("Machamp", 12, "Rare", 88, 84, 70, 55),
    ]
}

/// Synthetic filler combatant for slot `n` (1-based)
fn filler(n: usize) -> RosterEntry {
    RosterEntry::with_stats(format!("Trainer Bot {n}"), 1, "Common", 80, 30, 20, 20)
}

/// Draft an AI team of exactly 3 combatants
///
/// Draws distinct entries at random from the caller's own roster pool
/// first (the opponent "uses similar creatures"), tops up from the
/// house pool, and pads with synthetic filler bots if both run short.
pub(crate) fn draft_opponents(roster: &[RosterEntry], rng: &mut impl Rng) -> Vec<Combatant> {
    let mut picks: Vec<RosterEntry> = Vec::with_capacity(3);

    let mut indices: Vec<usize> = (0..roster.len()).collect();
    indices.shuffle(rng);
    picks.extend(indices.into_iter().take(3).map(|i| roster[i].clone()));

    if picks.len() < 3 {
        let mut house = house_pool();
        house.shuffle(rng);
        picks.extend(house.into_iter().take(3 - picks.len()));
    }

    while picks.len() < 3 {
        picks.push(filler(picks.len() + 1));
    }

    picks
        .iter()
        .enumerate()
        .map(|(slot, entry)| {
            let mut combatant = hydrate(entry, Side::Ai);
            // Slot suffix keeps ids unique even when the draft mirrors
            // a creature the player also fields
            combatant.id = format!("{}-{}", combatant.id, slot);
            combatant
        })
        .collect()
}
