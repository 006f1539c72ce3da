use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Default starting stack for each player in chips
pub const STARTING_STACK: u32 = 1_000;

/// A player as the engine sees them: a name, a chip stack that persists
/// across hands, hole cards and an in-game flag that reset every hand, and
/// an optional seat tag that decision policies may read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    name: String,
    stack: u32,
    hole: Vec<Card>,
    in_game: bool,
    position: Option<String>,
}

impl Player {
    pub fn new(name: impl Into<String>, stack: u32) -> Self {
        Self {
            name: name.into(),
            stack,
            hole: Vec::with_capacity(2),
            in_game: false,
            position: None,
        }
    }

    pub fn with_position(name: impl Into<String>, stack: u32, position: impl Into<String>) -> Self {
        Self {
            position: Some(position.into()),
            ..Self::new(name, stack)
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stack(&self) -> u32 {
        self.stack
    }

    pub fn hole_cards(&self) -> &[Card] {
        &self.hole
    }

    pub fn is_in_game(&self) -> bool {
        self.in_game
    }

    pub fn position(&self) -> Option<&str> {
        self.position.as_deref()
    }

    /// Clears the hole cards and re-enters the player if they still have
    /// chips. Called at the start of every hand; the stack carries over.
    pub fn reset_for_new_hand(&mut self) {
        self.hole.clear();
        self.in_game = self.stack > 0;
    }

    pub fn give_hole(&mut self, cards: Vec<Card>) {
        self.hole = cards;
    }

    pub fn fold(&mut self) {
        self.in_game = false;
    }

    /// Moves up to `amount` chips out of the stack and returns how many
    /// actually moved. Never underflows; a short stack simply pays less.
    pub fn contribute(&mut self, amount: u32) -> u32 {
        let bet = amount.min(self.stack);
        self.stack -= bet;
        bet
    }

    pub fn add_chips(&mut self, amount: u32) {
        self.stack = self.stack.saturating_add(amount);
    }
}
