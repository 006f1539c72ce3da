use thiserror::Error;

/// Failures raised by the engine. All variants are synchronous and are
/// reported before any state mutation, so a failed call leaves deck, pot
/// and stacks untouched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("invalid card token: {token:?}")]
    InvalidCardSpec { token: String },
    #[error("cannot deal {requested} cards, {remaining} remaining")]
    InsufficientCards { requested: usize, remaining: usize },
    #[error("hand evaluation takes 2..=7 cards, got {given}")]
    InvalidHandSize { given: usize },
    #[error("a session needs at least 2 players, got {given}")]
    InvalidPlayerCount { given: usize },
    #[error("no hand in progress")]
    NoHandInProgress,
    #[error("hand already in progress")]
    HandInProgress,
}
