//! Non-interactive match simulation
//!
//! The fire-and-forget fast path: no phases, no PP tracking, no
//! per-species movesets. Each turn draws from a small generic move
//! pool and the whole match resolves synchronously on working copies
//! of HP, so the live interactive session is never touched.

use arena_battle::Combatant;
use rand::Rng;
use tracing::trace;
use uuid::Uuid;

/// Generic move pool used by every simulated combatant
const MOVES: [(&str, u32); 4] = [
    ("Quick Strike", 14),
    ("Heavy Slam", 22),
    ("Power Burst", 18),
    ("Focus Hit", 20),
];

/// Rounds before a simulated match is called as a draw
pub const MAX_ROUNDS: u32 = 30;

/// Outcome of one simulated match, relative to the (a, b) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    A,
    B,
    Draw,
}

/// Full record of one simulated match
#[derive(Debug, Clone)]
pub struct MatchReport {
    pub match_id: Uuid,
    pub a_id: String,
    pub b_id: String,
    pub winner: Winner,
    pub rounds: u32,
    /// Per-turn textual log, for auditability
    pub log: Vec<String>,
}

/// Damage for the batch formula: attack and defense scale with level,
/// multiplied by a uniform variance in [0.85, 1.15], floored, clamped
/// to [3, 40]
fn sim_damage(attacker: &Combatant, defender: &Combatant, power: u32, rng: &mut impl Rng) -> u32 {
    let atk = attacker.attack as f64 * (1.0 + attacker.level as f64 / 20.0);
    let def = defender.defense as f64 * (1.0 + defender.level as f64 / 30.0);
    let raw = atk * power as f64 / (def + 25.0);
    let variance = rng.gen_range(0.85..1.15);
    ((raw * variance).floor() as i64).clamp(3, 40) as u32
}

/// Play one complete match between `a` and `b`
///
/// The faster combatant acts first (ties favor the left operand) and
/// turns then alternate strictly, re-evaluated never. Inputs are not
/// mutated; HP is tracked on working copies.
pub fn simulate_match(a: &Combatant, b: &Combatant, rng: &mut impl Rng) -> MatchReport {
    let match_id = Uuid::new_v4();
    let mut log = Vec::new();

    let mut a_hp = a.hp;
    let mut b_hp = b.hp;

    let a_first = a.speed >= b.speed;

    log.push(format!("Match: {} vs {}", a.name, b.name));
    log.push(format!(
        "First: {}",
        if a_first { &a.name } else { &b.name }
    ));

    let mut rounds = 0;
    while a_hp > 0 && b_hp > 0 && rounds < MAX_ROUNDS {
        rounds += 1;

        // Strict alternation from the fixed first actor
        let a_acts = (rounds % 2 == 1) == a_first;

        let (name, power) = MOVES[rng.gen_range(0..MOVES.len())];
        if a_acts {
            let dmg = sim_damage(a, b, power, rng);
            b_hp = b_hp.saturating_sub(dmg);
            log.push(format!(
                "R{rounds}: {} used {name} (-{dmg}) -> {} HP {b_hp}/{}",
                a.name, b.name, b.hp
            ));
        } else {
            let dmg = sim_damage(b, a, power, rng);
            a_hp = a_hp.saturating_sub(dmg);
            log.push(format!(
                "R{rounds}: {} used {name} (-{dmg}) -> {} HP {a_hp}/{}",
                b.name, a.name, a.hp
            ));
        }
    }

    let winner = if b_hp == 0 && a_hp > 0 {
        Winner::A
    } else if a_hp == 0 && b_hp > 0 {
        Winner::B
    } else {
        Winner::Draw
    };

    log.push(match winner {
        Winner::A => format!("Result: {} WINS", a.name),
        Winner::B => format!("Result: {} WINS", b.name),
        Winner::Draw => "Result: DRAW".to_string(),
    });
    trace!(%match_id, rounds, ?winner, "simulated match");

    MatchReport {
        match_id,
        a_id: a.id.clone(),
        b_id: b.id.clone(),
        winner,
        rounds,
        log,
    }
}
