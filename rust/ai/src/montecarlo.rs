//! Policies that estimate their win rate before acting.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use holdem_engine::cards::Card;
use holdem_engine::equity::{WinRateEstimator, DEFAULT_TRIALS};
use holdem_engine::player::Player;
use holdem_engine::policy::{DecisionPolicy, RoundView};
use holdem_engine::records::Street;

use crate::baseline::playable_start;

fn hole_pair(hole: &[Card]) -> Option<[Card; 2]> {
    match hole {
        [a, b] => Some([*a, *b]),
        _ => None,
    }
}

/// Plays preflop on a simple starting-hand gate, then estimates the win
/// rate against the live opponents each street: above 0.7 it jams, above
/// 0.4 it calls, otherwise it folds.
#[derive(Debug)]
pub struct MonteCarloPolicy {
    estimator: WinRateEstimator,
    trials: u32,
}

impl MonteCarloPolicy {
    pub fn new_with_seed(seed: u64) -> Self {
        Self::with_trials(seed, DEFAULT_TRIALS)
    }

    pub fn with_trials(seed: u64, trials: u32) -> Self {
        Self {
            estimator: WinRateEstimator::new_with_seed(seed),
            trials: trials.max(1),
        }
    }

    fn win_rate(&mut self, hero: [Card; 2], view: &RoundView<'_>) -> Option<f64> {
        self.estimator
            .estimate(hero, view.board, view.opponents, self.trials)
            .ok()
    }
}

impl DecisionPolicy for MonteCarloPolicy {
    fn act(&mut self, player: &Player, view: &RoundView<'_>) -> String {
        if view.stage == Street::Preflop {
            let token = if playable_start(player.hole_cards()) {
                "call"
            } else {
                "fold"
            };
            return token.to_string();
        }
        let Some(hero) = hole_pair(player.hole_cards()) else {
            return "call".to_string();
        };
        let Some(win_rate) = self.win_rate(hero, view) else {
            return "call".to_string();
        };
        let token = if win_rate > 0.7 {
            "allin"
        } else if win_rate > 0.4 {
            "call"
        } else {
            "fold"
        };
        token.to_string()
    }

    fn name(&self) -> &str {
        "monte-carlo"
    }
}

/// A raising variant of the Monte Carlo player: pot-raises its strongest
/// spots, double-raises good ones, and once in a while turns a hopeless
/// hand into a tagged bluff raise.
#[derive(Debug)]
pub struct AggressivePolicy {
    estimator: WinRateEstimator,
    rng: ChaCha20Rng,
    trials: u32,
}

impl AggressivePolicy {
    /// Chance of bluff-raising instead of folding a weak hand.
    const BLUFF_FREQUENCY: f64 = 0.1;

    pub fn new_with_seed(seed: u64) -> Self {
        Self {
            estimator: WinRateEstimator::new_with_seed(seed),
            // decorrelated from the estimator stream
            rng: ChaCha20Rng::seed_from_u64(seed.wrapping_add(1)),
            trials: DEFAULT_TRIALS,
        }
    }
}

impl DecisionPolicy for AggressivePolicy {
    fn act(&mut self, player: &Player, view: &RoundView<'_>) -> String {
        if view.stage == Street::Preflop {
            let token = if playable_start(player.hole_cards()) {
                "raise_2"
            } else {
                "fold"
            };
            return token.to_string();
        }
        let Some(hero) = hole_pair(player.hole_cards()) else {
            return "call".to_string();
        };
        let win_rate = match self
            .estimator
            .estimate(hero, view.board, view.opponents, self.trials)
        {
            Ok(p) => p,
            Err(_) => return "call".to_string(),
        };
        let token = if win_rate > 0.75 {
            "raise_pot"
        } else if win_rate > 0.55 {
            "raise_2"
        } else if win_rate > 0.4 {
            "call"
        } else if self.rng.random_bool(Self::BLUFF_FREQUENCY) {
            "bluff_raise_2"
        } else {
            "fold"
        };
        token.to_string()
    }

    fn name(&self) -> &str {
        "aggressive"
    }
}
