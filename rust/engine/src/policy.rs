use crate::cards::Card;
use crate::player::Player;
use crate::records::Street;

/// The visible state a decision policy is handed for one action. Carries
/// everything a policy may legitimately read, including the live opponent
/// count, so implementations need no back-reference into the session.
#[derive(Debug, Clone, Copy)]
pub struct RoundView<'a> {
    pub board: &'a [Card],
    pub pot: u32,
    /// Price to call on this street.
    pub current_bet: u32,
    pub stage: Street,
    pub big_blind: u32,
    /// Opponents still contesting the pot (all-in players included).
    pub opponents: usize,
}

/// The seam between the betting engine and whoever plays the seats.
/// Implementations are supplied by the caller and are treated as pure,
/// promptly-returning functions of the state they are given.
pub trait DecisionPolicy {
    /// Chooses an action token for the acting player. Recognized tokens
    /// are `fold`, `call`, `allin`, `raise_pot` and `raise_<multiplier>`;
    /// a `bluff_` prefix marks a raise for logging only. Anything else
    /// plays as `call`.
    fn act(&mut self, player: &Player, view: &RoundView<'_>) -> String;

    fn name(&self) -> &str;
}

/// Raise sizing carried inside a parsed raise token.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub(crate) enum RaiseSize {
    /// `raise_pot`: bet the current pot.
    Pot,
    /// `raise_<m>`: bet `m` times the current bet level.
    Multiplier(u32),
}

/// Closed action vocabulary. Tokens are parsed exactly once, at the
/// engine boundary; nothing downstream ever re-reads the string.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub(crate) enum Action {
    Fold,
    Call,
    AllIn,
    Raise(RaiseSize),
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub(crate) struct ParsedAction {
    pub kind: Action,
    pub bluff: bool,
}

/// Maps a policy's token to an [`Action`]. Unrecognized tokens resolve to
/// `call` so a malformed policy response never halts a session.
pub(crate) fn parse_action(token: &str) -> ParsedAction {
    let (token, bluff) = match token.strip_prefix("bluff_") {
        Some(rest) => (rest, true),
        None => (token, false),
    };
    let kind = match token {
        "fold" => Action::Fold,
        "call" => Action::Call,
        "allin" => Action::AllIn,
        "raise_pot" => Action::Raise(RaiseSize::Pot),
        _ => match token.strip_prefix("raise_").and_then(|m| m.parse().ok()) {
            Some(mult) => Action::Raise(RaiseSize::Multiplier(mult)),
            None => Action::Call,
        },
    };
    ParsedAction { kind, bluff }
}
