use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::EngineError;

/// An ordered run of distinct cards with a deal cursor and its own seeded
/// generator. Determinism is a property of the seed, never of wall-clock
/// time.
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
    rng: ChaCha20Rng,
}

impl Deck {
    /// Full 52-card deck in canonical order. Call [`Deck::shuffle`] before
    /// dealing a hand; the initial order is deliberately unshuffled.
    pub fn new_with_seed(seed: u64) -> Self {
        Self {
            cards: full_deck(),
            position: 0,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Deck with a caller-supplied set of known cards removed. The equity
    /// estimator uses this to complete boards without re-dealing cards that
    /// are already visible. Same invariants as the full deck.
    pub fn without(seed: u64, excluded: &[Card]) -> Self {
        let cards = full_deck()
            .into_iter()
            .filter(|c| !excluded.contains(c))
            .collect();
        Self {
            cards,
            position: 0,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// In-place uniform permutation of the undealt remainder.
    pub fn shuffle(&mut self) {
        let at = self.position;
        self.cards[at..].shuffle(&mut self.rng);
    }

    /// Restores the full 52-card deck in canonical order. The generator
    /// keeps its state, so successive hands draw fresh permutations.
    pub fn reset(&mut self) {
        self.cards = full_deck();
        self.position = 0;
    }

    /// Removes and returns the first `n` cards. `n = 0` returns an empty
    /// vec without touching the deck; `n` beyond the remaining length fails
    /// before any card moves.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>, EngineError> {
        let remaining = self.remaining();
        if n > remaining {
            return Err(EngineError::InsufficientCards {
                requested: n,
                remaining,
            });
        }
        let dealt = self.cards[self.position..self.position + n].to_vec();
        self.position += n;
        Ok(dealt)
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }

    /// The undealt cards, in deal order.
    pub fn remaining_cards(&self) -> &[Card] {
        &self.cards[self.position..]
    }
}
