//! Reward settlement for completed tournaments

/// Convert a finished best-of-3 tournament into a reward quantity
///
/// 5 per match won, 2 per drawn match, plus a 20 champion bonus when
/// the player finished strictly ahead. The external economy layer
/// receives the amount exactly once, via
/// [`BattleSession::take_earned`](crate::session::BattleSession::take_earned).
pub fn settle_tournament(player_wins: u32, ai_wins: u32) -> u32 {
    let draws = 3u32.saturating_sub(player_wins + ai_wins);
    let base = player_wins * 5 + draws * 2;
    let champion_bonus = if player_wins > ai_wins { 20 } else { 0 };
    base + champion_bonus
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_champion_payout() {
        // 2 wins, 1 loss, no draws: 2*5 + 0*2 + 20
        assert_eq!(settle_tournament(2, 1), 30);
    }

    #[test]
    fn test_drawn_tournament_pays_no_bonus() {
        // 1 win, 1 loss, 1 draw: 1*5 + 1*2
        assert_eq!(settle_tournament(1, 1), 7);
    }

    #[test]
    fn test_sweep_and_shutout() {
        assert_eq!(settle_tournament(3, 0), 35);
        assert_eq!(settle_tournament(0, 3), 0);
    }

    #[test]
    fn test_all_draws_still_pay() {
        assert_eq!(settle_tournament(0, 0), 6);
    }
}
