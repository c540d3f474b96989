//! Interactive damage model
//!
//! All randomness flows through the caller-supplied RNG so fights are
//! reproducible under a fixed seed.

use rand::Rng;

use crate::types::{Combatant, Move};

/// Compute the damage a landed move deals to the defender
///
/// `attack + 0.55 * power - 0.6 * defense + noise`, where `noise` is a
/// uniform integer in [0, 6], floored and clamped to a minimum of 1: a
/// hit always deals at least 1 damage. Accuracy is the caller's
/// concern; this is only invoked for moves that hit.
pub fn damage(attacker: &Combatant, defender: &Combatant, mv: &Move, rng: &mut impl Rng) -> u32 {
    let noise = rng.gen_range(0..=6) as f64;
    let raw = attacker.attack as f64 + mv.power as f64 * 0.55 - defender.defense as f64 * 0.6
        + noise;
    (raw.floor() as i64).max(1) as u32
}

/// Roll whether a move hits
///
/// Strict comparison against a uniform draw in [0, 1): accuracy 0.0
/// never hits, accuracy 1.0 always does.
pub fn accuracy_roll(mv: &Move, rng: &mut impl Rng) -> bool {
    rng.gen_range(0.0..1.0) < mv.accuracy
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{RosterEntry, Side, hydrate};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn combatant(attack: u32, defense: u32, speed: u32) -> Combatant {
        let entry = RosterEntry::with_stats("Testmon", 5, "Common", 100, attack, defense, speed);
        hydrate(&entry, Side::Player)
    }

    #[test]
    fn test_damage_never_below_one() {
        let weakling = combatant(1, 0, 10);
        let tank = combatant(10, 500, 10);
        let mv = Move::new("test", "Poke", "Normal", 0, 1.0, 5);

        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..200 {
            assert!(damage(&weakling, &tank, &mv, &mut rng) >= 1);
        }
    }

    #[test]
    fn test_damage_stays_within_noise_bounds() {
        let attacker = combatant(50, 20, 10);
        let defender = combatant(30, 40, 10);
        let mv = Move::new("test", "Slam", "Normal", 70, 0.9, 5);

        // 50 + 70*0.55 - 40*0.6 = 64.5; noise adds 0..=6
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..200 {
            let dmg = damage(&attacker, &defender, &mv, &mut rng);
            assert!((64..=70).contains(&dmg), "out of bounds: {dmg}");
        }
    }

    #[test]
    fn test_damage_is_deterministic_under_a_fixed_seed() {
        let attacker = combatant(50, 20, 10);
        let defender = combatant(30, 40, 10);
        let mv = Move::new("test", "Slam", "Normal", 70, 0.9, 5);

        let mut a = ChaCha8Rng::seed_from_u64(123);
        let mut b = ChaCha8Rng::seed_from_u64(123);
        let first: Vec<u32> = (0..20).map(|_| damage(&attacker, &defender, &mv, &mut a)).collect();
        let second: Vec<u32> = (0..20).map(|_| damage(&attacker, &defender, &mv, &mut b)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_accuracy_zero_always_misses() {
        let mv = Move::new("test", "Wild Guess", "Normal", 90, 0.0, 5);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..500 {
            assert!(!accuracy_roll(&mv, &mut rng));
        }
    }

    #[test]
    fn test_accuracy_one_always_hits() {
        let mv = Move::new("test", "Sure Hit", "Normal", 40, 1.0, 5);
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        for _ in 0..500 {
            assert!(accuracy_roll(&mv, &mut rng));
        }
    }
}
