//! BattleSession - the phased single-match state machine
//!
//! One interactive player-vs-AI tournament: lineup selection, three
//! 1v1 matches played turn by turn, and a settled reward. The caller
//! feeds [`Command`]s in and pumps [`BattleSession::advance`] for every
//! step the engine takes on its own; [`BattleSession::suggested_delay`]
//! tells a presentation layer how long to wait before the next pump so
//! animations can keep up. A headless caller advances immediately.

use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ai;
use crate::damage::{accuracy_roll, damage};
use crate::reward::settle_tournament;
use crate::session::team::draft_opponents;
use crate::types::{Combatant, Move, RosterEntry, Side, hydrate};

/// Named state controlling which inputs are currently valid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Caller is picking exactly 3 combatants
    Lineup,
    /// A match is being announced; advances on its own
    MatchIntro,
    /// Awaiting the player's move choice
    PlayerTurn,
    /// The AI acts on the next advance
    AiTurn,
    /// A move has landed; the next advance checks for faints
    Resolving,
    /// Match result recorded; advances to the next match or the end
    MatchOver,
    /// Terminal: tournament settled
    BattleOver,
}

/// Caller-issued commands
///
/// Out-of-phase commands are silently ignored; the engine defends
/// against stale input itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Toggle a roster entry (by its key) in or out of the lineup
    ToggleSelect(String),
    /// Begin the tournament; requires exactly 3 selected
    StartBattle,
    /// Use a move (by id) of the active player combatant
    UseMove(String),
    /// Return to lineup; valid from lineup or the terminal phase
    Reset,
}

/// Summary of the most recent resolution for the caller to render
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LastDamage {
    /// Side that was hit (or missed)
    pub target: Side,
    /// Damage dealt; 0 on a miss
    pub amount: u32,
    pub move_name: String,
}

/// An interactive best-of-3 battle session
///
/// Owns the combatant data exclusively for the duration of a battle:
/// callers may read for rendering but all HP/PP mutation happens in
/// the resolution step.
#[derive(Debug)]
pub struct BattleSession {
    roster: Vec<RosterEntry>,
    rng: StdRng,

    phase: Phase,
    selected: Vec<String>,

    player_team: Vec<Combatant>,
    ai_team: Vec<Combatant>,

    /// Current match, 0..=2
    match_index: usize,
    turn: Side,

    dialogue: String,
    log: Vec<String>,
    last_damage: Option<LastDamage>,
    toast: Option<String>,

    player_wins: u32,
    ai_wins: u32,

    /// Settled reward, handed out once via `take_earned`
    earned: Option<u32>,
}

impl BattleSession {
    /// Create a session over a caller-supplied roster
    pub fn new(roster: Vec<RosterEntry>) -> Self {
        Self::with_rng(roster, StdRng::from_entropy())
    }

    /// Create a session with a fixed seed, for reproducible fights
    pub fn seeded(roster: Vec<RosterEntry>, seed: u64) -> Self {
        Self::with_rng(roster, StdRng::seed_from_u64(seed))
    }

    fn with_rng(roster: Vec<RosterEntry>, rng: StdRng) -> Self {
        Self {
            roster,
            rng,
            phase: Phase::Lineup,
            selected: Vec::new(),
            player_team: Vec::new(),
            ai_team: Vec::new(),
            match_index: 0,
            turn: Side::Player,
            dialogue: "Choose your lineup.".to_string(),
            log: Vec::new(),
            last_damage: None,
            toast: None,
            player_wins: 0,
            ai_wins: 0,
            earned: None,
        }
    }

    // === Command handling ===

    /// Apply a caller command; out-of-phase commands are no-ops
    pub fn handle(&mut self, command: Command) {
        match command {
            Command::ToggleSelect(key) if self.phase == Phase::Lineup => self.toggle_select(key),
            Command::StartBattle if self.phase == Phase::Lineup => self.start_battle(),
            Command::UseMove(id) if self.phase == Phase::PlayerTurn => {
                self.resolve_attack(Side::Player, &id);
            }
            Command::Reset if matches!(self.phase, Phase::Lineup | Phase::BattleOver) => {
                self.reset();
            }
            command => {
                debug!(phase = ?self.phase, ?command, "ignoring out-of-phase command");
            }
        }
    }

    /// Perform the engine's next automatic step, if any
    ///
    /// Replaces the deferred callbacks of a timer-driven loop: the
    /// caller pumps this after each transition (optionally sleeping
    /// for [`suggested_delay`](Self::suggested_delay) first).
    pub fn advance(&mut self) {
        match self.phase {
            Phase::MatchIntro => self.begin_turn(),
            Phase::AiTurn => self.ai_act(),
            Phase::Resolving => self.check_faints(),
            Phase::MatchOver => self.next_match_or_end(),
            Phase::Lineup | Phase::PlayerTurn | Phase::BattleOver => {}
        }
    }

    /// Presentation pacing before the next `advance`
    ///
    /// Purely cosmetic; phase order is identical if the caller ignores
    /// this and advances immediately.
    pub fn suggested_delay(&self) -> Option<Duration> {
        match self.phase {
            Phase::MatchIntro => Some(Duration::from_millis(350)),
            Phase::AiTurn => Some(Duration::from_millis(700)),
            Phase::Resolving => Some(Duration::from_millis(550)),
            Phase::MatchOver => Some(Duration::from_millis(650)),
            _ => None,
        }
    }

    // === Lineup ===

    fn toggle_select(&mut self, key: String) {
        if let Some(pos) = self.selected.iter().position(|k| *k == key) {
            self.selected.remove(pos);
        } else if self.selected.len() < 3 {
            // Over-selection is rejected silently: the set just stops
            // growing at 3
            self.selected.push(key);
        }
    }

    fn start_battle(&mut self) {
        if self.selected.len() != 3 {
            return;
        }

        let chosen: Vec<&RosterEntry> = self
            .roster
            .iter()
            .filter(|entry| self.selected.contains(&entry.key()))
            .take(3)
            .collect();
        if chosen.len() != 3 {
            return;
        }

        self.player_team = chosen
            .into_iter()
            .map(|entry| hydrate(entry, Side::Player))
            .collect();
        self.ai_team = draft_opponents(&self.roster, &mut self.rng);

        self.match_index = 0;
        self.player_wins = 0;
        self.ai_wins = 0;
        self.last_damage = None;
        self.earned = None;
        self.toast = None;
        self.log.clear();

        self.turn = first_actor(&self.player_team[0], &self.ai_team[0]);
        self.set_phase(Phase::MatchIntro);
        let opener = match self.turn {
            Side::Player => "You go first.",
            Side::Ai => "Enemy goes first.",
        };
        self.push_line(format!("Match 1/3 begins! {opener}"));
    }

    fn reset(&mut self) {
        let roster = std::mem::take(&mut self.roster);
        let rng = self.rng.clone();
        *self = Self::with_rng(roster, rng);
    }

    // === Turn flow ===

    fn begin_turn(&mut self) {
        let mi = self.match_index;
        match self.turn {
            Side::Player => {
                self.set_phase(Phase::PlayerTurn);
                self.push_line(format!("What will {} do?", self.player_team[mi].name));
            }
            Side::Ai => {
                self.set_phase(Phase::AiTurn);
                self.push_line(format!("Enemy {} is thinking…", self.ai_team[mi].name));
            }
        }
    }

    fn ai_act(&mut self) {
        let mi = self.match_index;
        let chosen = ai::choose_move(&self.ai_team[mi], &self.player_team[mi], &mut self.rng)
            .map(|mv| mv.id.clone());
        match chosen {
            Some(id) => self.resolve_attack(Side::Ai, &id),
            None => {
                // A combatant without moves cannot be hydrated; hand
                // the turn back rather than stall
                debug!("AI combatant has no moves, passing turn");
                self.turn = Side::Player;
                self.begin_turn();
            }
        }
    }

    fn resolve_attack(&mut self, attacker_side: Side, requested: &str) {
        let mi = self.match_index;

        let chosen: Move = {
            let attacker = match attacker_side {
                Side::Player => &self.player_team[mi],
                Side::Ai => &self.ai_team[mi],
            };
            match substitute_move(attacker, requested) {
                Some(mv) => mv.clone(),
                None => return,
            }
        };

        let announce = match attacker_side {
            Side::Player => format!("{} used {}!", self.player_team[mi].name, chosen.name),
            Side::Ai => format!("Enemy {} used {}!", self.ai_team[mi].name, chosen.name),
        };
        self.push_line(announce);

        let hit = accuracy_roll(&chosen, &mut self.rng);
        let mut dealt = 0;
        if hit {
            let (attacker, defender) = match attacker_side {
                Side::Player => (&self.player_team[mi], &self.ai_team[mi]),
                Side::Ai => (&self.ai_team[mi], &self.player_team[mi]),
            };
            dealt = damage(attacker, defender, &chosen, &mut self.rng);

            match attacker_side {
                Side::Player => self.ai_team[mi].take_damage(dealt),
                Side::Ai => self.player_team[mi].take_damage(dealt),
            }
        }

        // PP is spent whether or not the move lands
        match attacker_side {
            Side::Player => self.player_team[mi].spend_pp(&chosen.id),
            Side::Ai => self.ai_team[mi].spend_pp(&chosen.id),
        }

        let target = attacker_side.opponent();
        let defender_name = match target {
            Side::Player => self.player_team[mi].name.clone(),
            Side::Ai => self.ai_team[mi].name.clone(),
        };

        self.last_damage = Some(LastDamage {
            target,
            amount: dealt,
            move_name: chosen.name.clone(),
        });
        self.turn = attacker_side;
        self.set_phase(Phase::Resolving);

        if hit {
            self.push_line(format!("{defender_name} took {dealt} damage!"));
        } else {
            self.push_line("But it missed!".to_string());
        }
    }

    fn check_faints(&mut self) {
        let mi = self.match_index;
        let player_down = self.player_team[mi].is_fainted();
        let ai_down = self.ai_team[mi].is_fainted();

        if !player_down && !ai_down {
            self.turn = self.turn.opponent();
            self.begin_turn();
            return;
        }

        // Both at zero is only reachable if a combatant entered the
        // match already fainted; guarded as a draw rather than left
        // undefined
        let winner = match (player_down, ai_down) {
            (true, true) => None,
            (true, false) => Some(Side::Ai),
            (false, true) => Some(Side::Player),
            (false, false) => unreachable!(),
        };

        let match_no = mi + 1;
        match winner {
            Some(Side::Player) => {
                self.player_wins += 1;
                self.toast = Some(format!("Match {match_no} Won!"));
                self.push_line(format!("You won Match {match_no}!"));
            }
            Some(Side::Ai) => {
                self.ai_wins += 1;
                self.toast = Some(format!("Match {match_no} Lost"));
                self.push_line(format!("You lost Match {match_no}…"));
            }
            None => {
                self.toast = Some(format!("Match {match_no} Draw"));
                self.push_line(format!("Match {match_no} ended in a draw!"));
            }
        }
        self.set_phase(Phase::MatchOver);
    }

    fn next_match_or_end(&mut self) {
        if self.match_index >= 2 {
            self.end_tournament();
            return;
        }

        self.match_index += 1;
        let mi = self.match_index;
        self.turn = first_actor(&self.player_team[mi], &self.ai_team[mi]);
        self.last_damage = None;
        self.set_phase(Phase::MatchIntro);
        let opener = match self.turn {
            Side::Player => "You go first.",
            Side::Ai => "Enemy goes first.",
        };
        self.push_line(format!("Match {}/3 begins! {opener}", mi + 1));
    }

    fn end_tournament(&mut self) {
        let earned = settle_tournament(self.player_wins, self.ai_wins);
        self.earned = Some(earned);
        self.set_phase(Phase::BattleOver);

        let (line, toast) = if self.player_wins > self.ai_wins {
            ("You won the tournament!", "Tournament Won!")
        } else if self.player_wins < self.ai_wins {
            ("You lost the tournament…", "Tournament Lost")
        } else {
            ("Tournament ended in a draw.", "Tournament Draw")
        };
        self.push_line(line.to_string());
        self.toast = Some(toast.to_string());
        debug!(
            player_wins = self.player_wins,
            ai_wins = self.ai_wins,
            earned,
            "tournament settled"
        );
    }

    // === Queries ===

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whose turn it currently is (or last was, while resolving)
    pub fn turn(&self) -> Side {
        self.turn
    }

    /// Latest human-readable status line
    pub fn dialogue(&self) -> &str {
        &self.dialogue
    }

    /// Cumulative battle log
    pub fn log(&self) -> &[String] {
        &self.log
    }

    pub fn last_damage(&self) -> Option<&LastDamage> {
        self.last_damage.as_ref()
    }

    /// Current match number, 0..=2
    pub fn match_index(&self) -> usize {
        self.match_index
    }

    pub fn player_wins(&self) -> u32 {
        self.player_wins
    }

    pub fn ai_wins(&self) -> u32 {
        self.ai_wins
    }

    /// Keys currently selected in the lineup
    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn player_team(&self) -> &[Combatant] {
        &self.player_team
    }

    pub fn ai_team(&self) -> &[Combatant] {
        &self.ai_team
    }

    /// The combatants fighting the current match
    pub fn active_pair(&self) -> Option<(&Combatant, &Combatant)> {
        let player = self.player_team.get(self.match_index)?;
        let ai = self.ai_team.get(self.match_index)?;
        Some((player, ai))
    }

    /// Take the transient match/tournament notification, if one is up
    pub fn take_toast(&mut self) -> Option<String> {
        self.toast.take()
    }

    /// Take the settled reward; the economy layer receives it exactly
    /// once per completed tournament
    pub fn take_earned(&mut self) -> Option<u32> {
        self.earned.take()
    }

    fn set_phase(&mut self, phase: Phase) {
        debug!(from = ?self.phase, to = ?phase, "phase transition");
        self.phase = phase;
    }

    fn push_line(&mut self, line: String) {
        self.dialogue = line.clone();
        self.log.push(line);
    }
}

/// First actor per match: speed comparison, ties favor the player
fn first_actor(player: &Combatant, ai: &Combatant) -> Side {
    if player.speed >= ai.speed {
        Side::Player
    } else {
        Side::Ai
    }
}

/// Resolve the move actually used: the requested move if it has PP,
/// else the first move with PP, else the first move overall
fn substitute_move<'a>(attacker: &'a Combatant, requested: &str) -> Option<&'a Move> {
    attacker
        .moves
        .iter()
        .find(|m| m.id == requested && attacker.pp_remaining(&m.id) > 0)
        .or_else(|| {
            attacker
                .moves
                .iter()
                .find(|m| attacker.pp_remaining(&m.id) > 0)
        })
        .or_else(|| attacker.moves.first())
}
