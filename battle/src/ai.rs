//! AI move selection policy

use rand::Rng;

use crate::damage::damage;
use crate::types::{Combatant, Move};

/// Pick a move for a non-player-controlled combatant
///
/// Candidates are the moves with PP remaining; if every move is
/// exhausted the full list is considered so resource exhaustion never
/// blocks a turn. Each candidate is scored as its projected damage plus
/// a small uniform tiebreak in [0, 5], and the highest score wins.
///
/// Returns `None` only for a combatant with no moves at all, which
/// hydration never produces.
pub fn choose_move<'a>(
    actor: &'a Combatant,
    opponent: &Combatant,
    rng: &mut impl Rng,
) -> Option<&'a Move> {
    let usable = actor.usable_moves();
    let pool: Vec<&Move> = if usable.is_empty() {
        actor.moves.iter().collect()
    } else {
        usable
    };

    let mut best: Option<(u32, &Move)> = None;
    for mv in pool {
        let score = damage(actor, opponent, mv, rng) + rng.gen_range(0..=5);
        match best {
            Some((top, _)) if top >= score => {}
            _ => best = Some((score, mv)),
        }
    }
    best.map(|(_, mv)| mv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{RosterEntry, Side, hydrate};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn dummy(name: &str) -> Combatant {
        hydrate(&RosterEntry::named(name), Side::Ai)
    }

    #[test]
    fn test_prefers_clearly_stronger_move() {
        let mut actor = dummy("Scorer");
        actor.moves = vec![
            Move::new("scorer", "Tap", "Normal", 1, 1.0, 10),
            Move::new("scorer", "Obliterate", "Normal", 200, 1.0, 10),
        ];
        actor.pp = actor.moves.iter().map(|m| (m.id.clone(), m.pp_max)).collect();
        let opponent = dummy("Target");

        // Power gap (0.55 * 199) dwarfs the combined noise ranges, so
        // the stronger move wins for every seed.
        for seed in 0..50 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let chosen = choose_move(&actor, &opponent, &mut rng).unwrap();
            assert_eq!(chosen.name, "Obliterate");
        }
    }

    #[test]
    fn test_skips_exhausted_moves() {
        let mut actor = dummy("Drained");
        let opponent = dummy("Target");

        let strong = actor
            .moves
            .iter()
            .max_by_key(|m| m.power)
            .unwrap()
            .id
            .clone();
        actor.pp.insert(strong.clone(), 0);

        let mut rng = ChaCha8Rng::seed_from_u64(9);
        for _ in 0..30 {
            let chosen = choose_move(&actor, &opponent, &mut rng).unwrap();
            assert_ne!(chosen.id, strong);
        }
    }

    #[test]
    fn test_full_exhaustion_falls_back_to_all_moves() {
        let mut actor = dummy("Empty");
        let opponent = dummy("Target");
        for id in actor.pp.keys().cloned().collect::<Vec<_>>() {
            actor.pp.insert(id, 0);
        }

        let mut rng = ChaCha8Rng::seed_from_u64(3);
        assert!(choose_move(&actor, &opponent, &mut rng).is_some());
    }

    #[test]
    fn test_no_moves_yields_none() {
        let mut actor = dummy("Hollow");
        actor.moves.clear();
        actor.pp.clear();
        let opponent = dummy("Target");

        let mut rng = ChaCha8Rng::seed_from_u64(4);
        assert!(choose_move(&actor, &opponent, &mut rng).is_none());
    }
}
