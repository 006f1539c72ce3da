use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::hand::HandRank;

/// Represents a betting street in Texas Hold'em.
/// The four public-information phases of a hand.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Street {
    /// Before the flop (hole cards dealt)
    Preflop,
    /// After the flop (3 community cards)
    Flop,
    /// After the turn (4th community card)
    Turn,
    /// After the river (5th community card)
    River,
}

impl Street {
    pub fn name(&self) -> &'static str {
        match self {
            Street::Preflop => "Preflop",
            Street::Flop => "Flop",
            Street::Turn => "Turn",
            Street::River => "River",
        }
    }
}

/// One applied player action, with the chips it actually moved.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AppliedAction {
    Fold,
    Call { amount: u32 },
    Raise { amount: u32 },
    AllIn { amount: u32 },
}

/// Records a single player action during a hand, in the order it happened.
/// External loggers consume these; the engine never writes them anywhere.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub player: String,
    pub street: Street,
    pub action: AppliedAction,
    /// Logging-only tag carried over from a `bluff_`-prefixed token.
    #[serde(default)]
    pub bluff: bool,
}

/// What `advance_stage` reports back: the hand either continues to the
/// next street or ends one of two ways.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum HandOutcome {
    /// The street just played, the board so far, and the running pot.
    Continue {
        stage: Street,
        board: Vec<Card>,
        pot: u32,
    },
    /// Everyone else dropped out; the last contender takes the whole pot.
    AllFolded { winner: String, pot: u32 },
    /// Best 7-card hands compared; the pot splits evenly among `winners`.
    /// `rank` is the winning strength, or `None` when nobody was left to
    /// show down and the pot stays undistributed.
    Showdown {
        winners: Vec<String>,
        pot: u32,
        rank: Option<HandRank>,
    },
}

impl HandOutcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, HandOutcome::Continue { .. })
    }
}

/// Complete record of one finished hand: board, chronological actions,
/// outcome, and the stacks after payout. The timestamp is left for the
/// writer to inject (RFC3339), the engine holds no clock.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandRecord {
    pub hand_no: u32,
    pub seed: Option<u64>,
    pub board: Vec<Card>,
    pub actions: Vec<ActionRecord>,
    pub outcome: HandOutcome,
    pub stacks: Vec<(String, u32)>,
    #[serde(default)]
    pub ts: Option<String>,
}
