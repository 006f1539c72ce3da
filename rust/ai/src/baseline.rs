//! Baseline policies: a calling station and a simple threshold player.
//!
//! Both are deterministic, which makes them the reference opponents for
//! reproducibility tests and a floor for comparing smarter policies.

use holdem_engine::cards::{Card, Rank};
use holdem_engine::player::Player;
use holdem_engine::policy::{DecisionPolicy, RoundView};
use holdem_engine::records::Street;

/// Calls every action it is offered. Useful as a fully predictable seat:
/// with a fixed session seed, a table of calling stations replays the
/// exact same hand every time.
#[derive(Debug, Clone, Default)]
pub struct CallingStation;

impl DecisionPolicy for CallingStation {
    fn act(&mut self, _player: &Player, _view: &RoundView<'_>) -> String {
        "call".to_string()
    }

    fn name(&self) -> &str {
        "caller"
    }
}

/// Preflop gate shared by the simple policies: play a pocket pair or any
/// hand holding a ten-or-better, fold the rest.
pub(crate) fn playable_start(hole: &[Card]) -> bool {
    match hole {
        [a, b] => a.rank == b.rank || a.rank >= Rank::Ten || b.rank >= Rank::Ten,
        _ => false,
    }
}

/// Folds weak starting hands preflop and calls from the flop on.
#[derive(Debug, Clone, Default)]
pub struct SimplePolicy;

impl DecisionPolicy for SimplePolicy {
    fn act(&mut self, player: &Player, view: &RoundView<'_>) -> String {
        if view.stage == Street::Preflop && !playable_start(player.hole_cards()) {
            return "fold".to_string();
        }
        "call".to_string()
    }

    fn name(&self) -> &str {
        "simple"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use holdem_engine::cards::parse_cards;

    fn view(stage: Street) -> RoundView<'static> {
        RoundView {
            board: &[],
            pot: 0,
            current_bet: 20,
            stage,
            big_blind: 20,
            opponents: 2,
        }
    }

    fn player_with(hole: &str) -> Player {
        let mut p = Player::new("test", 1_000);
        p.reset_for_new_hand();
        p.give_hole(parse_cards(hole).unwrap());
        p
    }

    #[test]
    fn calling_station_always_calls() {
        let mut policy = CallingStation;
        let p = player_with("2h 7d");
        assert_eq!(policy.act(&p, &view(Street::Preflop)), "call");
        assert_eq!(policy.act(&p, &view(Street::River)), "call");
    }

    #[test]
    fn simple_folds_trash_preflop() {
        let mut policy = SimplePolicy;
        assert_eq!(
            policy.act(&player_with("2h 7d"), &view(Street::Preflop)),
            "fold"
        );
        assert_eq!(
            policy.act(&player_with("Th 2d"), &view(Street::Preflop)),
            "call"
        );
        assert_eq!(
            policy.act(&player_with("3h 3d"), &view(Street::Preflop)),
            "call"
        );
    }

    #[test]
    fn simple_calls_postflop() {
        let mut policy = SimplePolicy;
        assert_eq!(
            policy.act(&player_with("2h 7d"), &view(Street::Flop)),
            "call"
        );
    }
}
