use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::EngineError;
use crate::hand::evaluate_best_hand;

/// Trial count used by the shipped policies when none is configured.
pub const DEFAULT_TRIALS: u32 = 500;

/// Monte Carlo win-rate estimator. One generator per estimator; every
/// trial deals from its own filtered deck seeded off that generator, so
/// trials stay independent and a fixed seed reproduces the estimate.
#[derive(Debug)]
pub struct WinRateEstimator {
    rng: ChaCha20Rng,
}

impl WinRateEstimator {
    pub fn new_with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Estimates the probability that `hero` beats or ties every opponent
    /// by showdown, in `[0, 1]`. Ties against the field weigh half a win.
    ///
    /// Each trial completes the board to five cards and deals two cards to
    /// each simulated opponent from a deck that excludes the known cards.
    /// With zero opponents there is no competing hand and the estimate is
    /// exactly 1.0. Accuracy is statistical: more trials, less variance.
    pub fn estimate(
        &mut self,
        hero: [Card; 2],
        board: &[Card],
        opponents: usize,
        trials: u32,
    ) -> Result<f64, EngineError> {
        if trials == 0 {
            // no samples, no claimed equity
            return Ok(0.0);
        }
        let mut known: Vec<Card> = hero.to_vec();
        known.extend_from_slice(board);
        let missing = 5usize.saturating_sub(board.len());

        let mut weight = 0.0;
        for _ in 0..trials {
            let mut deck = Deck::without(self.rng.next_u64(), &known);
            deck.shuffle();

            let mut full_board = board.to_vec();
            full_board.extend(deck.deal(missing)?);

            let mut hero_cards = hero.to_vec();
            hero_cards.extend_from_slice(&full_board);
            let hero_rank = evaluate_best_hand(&hero_cards)?;

            let mut best = hero_rank;
            let mut contested = false;
            for _ in 0..opponents {
                let mut opp_cards = deck.deal(2)?;
                opp_cards.extend_from_slice(&full_board);
                let opp_rank = evaluate_best_hand(&opp_cards)?;
                if opp_rank > best {
                    best = opp_rank;
                    contested = false;
                } else if opp_rank == best {
                    contested = true;
                }
            }
            if hero_rank == best {
                weight += if contested { 0.5 } else { 1.0 };
            }
        }
        Ok(weight / f64::from(trials))
    }
}
