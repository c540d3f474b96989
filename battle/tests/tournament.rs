//! End-to-end headless tournament playthrough

use arena_battle::{BattleSession, Command, Phase, Side, load_roster, reward::settle_tournament};

const ROSTER_JSON: &str = r#"[
    {
        "tokenId": 1,
        "name": "Pikachu",
        "level": 9,
        "rarity": "Rare",
        "stats": { "hp": 70, "attack": 60, "defense": 42, "speed": 85 }
    },
    {
        "tokenId": 2,
        "name": "Arcanine",
        "level": 12,
        "rarity": "Epic",
        "stats": { "hp": 90, "attack": 88, "defense": 72, "speed": 74 }
    },
    {
        "tokenId": 3,
        "name": "Eevee",
        "level": 6,
        "rarity": "Rare",
        "hp": 66,
        "attack": 48,
        "defense": 38,
        "speed": 55
    },
    { "name": "Mysterymon", "level": 4 }
]"#;

/// Drive a seeded session from lineup to the terminal phase,
/// returning how many engine steps it took
fn play_to_completion(session: &mut BattleSession) -> u32 {
    let mut steps = 0;
    while session.phase() != Phase::BattleOver {
        steps += 1;
        assert!(steps < 10_000, "session failed to terminate");

        match session.phase() {
            Phase::PlayerTurn => {
                let mv = session.active_pair().unwrap().0.moves[0].id.clone();
                session.handle(Command::UseMove(mv));
            }
            _ => session.advance(),
        }
    }
    steps
}

fn start_session(seed: u64) -> BattleSession {
    let roster = load_roster(ROSTER_JSON).unwrap();
    let keys: Vec<String> = roster.iter().take(3).map(|e| e.key()).collect();

    let mut session = BattleSession::seeded(roster, seed);
    for key in keys {
        session.handle(Command::ToggleSelect(key));
    }
    session.handle(Command::StartBattle);
    assert_eq!(session.phase(), Phase::MatchIntro);
    session
}

#[test]
fn test_full_tournament_reaches_settlement() {
    let mut session = start_session(2024);
    play_to_completion(&mut session);

    // Three matches were recorded one way or another
    let decisive = session.player_wins() + session.ai_wins();
    assert!(decisive <= 3);
    assert_eq!(session.match_index(), 2);

    // Reward matches the settlement formula and pays exactly once
    let expected = settle_tournament(session.player_wins(), session.ai_wins());
    assert_eq!(session.take_earned(), Some(expected));
    assert_eq!(session.take_earned(), None);
}

#[test]
fn test_fixed_seed_replays_identically() {
    let mut first = start_session(55);
    let mut second = start_session(55);

    play_to_completion(&mut first);
    play_to_completion(&mut second);

    assert_eq!(first.log(), second.log());
    assert_eq!(first.player_wins(), second.player_wins());
    assert_eq!(first.ai_wins(), second.ai_wins());
}

#[test]
fn test_log_narrates_every_match() {
    let mut session = start_session(91);
    play_to_completion(&mut session);

    let log = session.log();
    for n in 1..=3 {
        assert!(
            log.iter().any(|line| line.starts_with(&format!("Match {n}/3 begins!"))),
            "missing intro for match {n}"
        );
    }
    assert!(log.iter().any(|line| line.contains("used")));
    assert!(log.iter().any(|line| line.contains("damage!") || line.contains("missed")));
    assert!(log.last().unwrap().contains("tournament") || log.last().unwrap().contains("Tournament"));
}

#[test]
fn test_teams_are_exactly_three_a_side() {
    let session = start_session(7);
    assert_eq!(session.player_team().len(), 3);
    assert_eq!(session.ai_team().len(), 3);
    assert!(session.player_team().iter().all(|c| c.side == Side::Player));
    assert!(session.ai_team().iter().all(|c| c.side == Side::Ai));
    assert!(session.player_team().iter().all(|c| !c.moves.is_empty()));
}

#[test]
fn test_hp_only_moves_downward_during_a_match() {
    let mut session = start_session(33);

    let mut steps = 0;
    let mut last_hp: Option<(usize, u32, u32)> = None;
    while session.phase() != Phase::BattleOver {
        steps += 1;
        assert!(steps < 10_000);

        if let Some((player, ai)) = session.active_pair() {
            let snapshot = (session.match_index(), player.hp, ai.hp);
            if let Some((mi, p, a)) = last_hp {
                if mi == snapshot.0 {
                    assert!(snapshot.1 <= p, "player HP increased mid-match");
                    assert!(snapshot.2 <= a, "AI HP increased mid-match");
                }
            }
            last_hp = Some(snapshot);
        }

        match session.phase() {
            Phase::PlayerTurn => {
                let mv = session.active_pair().unwrap().0.moves[0].id.clone();
                session.handle(Command::UseMove(mv));
            }
            _ => session.advance(),
        }
    }
}
