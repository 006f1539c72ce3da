use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::EngineError;
use crate::hand::{evaluate_best_hand, HandRank};
use crate::player::Player;
use crate::policy::{parse_action, Action, DecisionPolicy, RaiseSize, RoundView};
use crate::records::{ActionRecord, AppliedAction, HandOutcome, HandRecord, Street};

/// Where the session's state machine currently stands. `Idle` means no
/// hand has been started yet; `Complete` means the last one finished and
/// the next [`Session::start_hand`] begins a fresh one.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Stage {
    Idle,
    Preflop,
    Flop,
    Turn,
    River,
    Showdown,
    Complete,
}

/// One chair at the table: a player plus the policy that acts for them.
pub struct Seat {
    pub player: Player,
    pub policy: Box<dyn DecisionPolicy>,
}

impl Seat {
    pub fn new(player: Player, policy: Box<dyn DecisionPolicy>) -> Self {
        Self { player, policy }
    }
}

/// A table session: owns the deck (and with it the session RNG), the
/// players and their policies, and the state of the hand in progress.
/// Fixing the seed makes every deal and board of the session reproducible.
///
/// The lifecycle is driven from outside: `start_hand` deals, then repeated
/// `advance_stage` calls play one street each until the returned
/// [`HandOutcome`] is terminal.
pub struct Session {
    deck: Deck,
    seats: Vec<Seat>,
    big_blind: u32,
    seed: u64,
    stage: Stage,
    board: Vec<Card>,
    pot: u32,
    current_bet: u32,
    hand_no: u32,
    actions: Vec<ActionRecord>,
    last_outcome: Option<HandOutcome>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("seats", &self.seats.len())
            .field("big_blind", &self.big_blind)
            .field("seed", &self.seed)
            .field("stage", &self.stage)
            .field("board", &self.board)
            .field("pot", &self.pot)
            .field("current_bet", &self.current_bet)
            .field("hand_no", &self.hand_no)
            .field("actions", &self.actions.len())
            .field("last_outcome", &self.last_outcome)
            .finish()
    }
}

impl Session {
    pub fn new(seats: Vec<Seat>, big_blind: u32, seed: u64) -> Result<Self, EngineError> {
        if seats.len() < 2 {
            return Err(EngineError::InvalidPlayerCount { given: seats.len() });
        }
        Ok(Self {
            deck: Deck::new_with_seed(seed),
            seats,
            big_blind,
            seed,
            stage: Stage::Idle,
            board: Vec::with_capacity(5),
            pot: 0,
            current_bet: big_blind,
            hand_no: 0,
            actions: Vec::new(),
            last_outcome: None,
        })
    }

    /// Begins a new hand: fresh shuffled deck, empty board, zero pot, and
    /// two hole cards to every player who still has chips. Players without
    /// chips sit the hand out. Fails if a hand is already running.
    pub fn start_hand(&mut self) -> Result<(), EngineError> {
        match self.stage {
            Stage::Idle | Stage::Complete => {}
            _ => return Err(EngineError::HandInProgress),
        }
        let funded = self.seats.iter().filter(|s| s.player.stack() > 0).count();
        let required = 2 * funded + 5;
        if required > 52 {
            return Err(EngineError::InsufficientCards {
                requested: required,
                remaining: 52,
            });
        }

        self.deck.reset();
        self.deck.shuffle();
        self.pot = 0;
        self.current_bet = self.big_blind;
        self.board.clear();
        self.actions.clear();
        self.last_outcome = None;
        self.hand_no += 1;
        for seat in &mut self.seats {
            seat.player.reset_for_new_hand();
        }
        for i in 0..self.seats.len() {
            if self.seats[i].player.is_in_game() {
                let hole = self.deck.deal(2)?;
                self.seats[i].player.give_hole(hole);
            }
        }
        self.stage = Stage::Preflop;
        Ok(())
    }

    /// Plays the next street: deals its community cards, runs one betting
    /// round, and either ends the hand or parks at the following stage.
    /// This is the sole transition driver; call it until the outcome is
    /// terminal.
    pub fn advance_stage(&mut self) -> Result<HandOutcome, EngineError> {
        let street = match self.stage {
            Stage::Preflop => Street::Preflop,
            Stage::Flop => Street::Flop,
            Stage::Turn => Street::Turn,
            Stage::River => Street::River,
            Stage::Idle | Stage::Showdown | Stage::Complete => {
                return Err(EngineError::NoHandInProgress)
            }
        };
        let to_deal = match street {
            Street::Preflop => 0,
            Street::Flop => 3,
            Street::Turn | Street::River => 1,
        };
        if to_deal > 0 {
            let mut dealt = self.deck.deal(to_deal)?;
            self.board.append(&mut dealt);
        }

        self.run_betting_round(street);

        let live: Vec<usize> = (0..self.seats.len())
            .filter(|&i| {
                let p = &self.seats[i].player;
                p.is_in_game() && p.stack() > 0
            })
            .collect();
        if let [winner] = live[..] {
            // Everyone else folded or is felted. An all-in player still
            // holds live cards but has stack 0, so a lone chip-holder is
            // paid here without a showdown against them; see DESIGN.md.
            let pot = self.pot;
            self.seats[winner].player.add_chips(pot);
            let outcome = HandOutcome::AllFolded {
                winner: self.seats[winner].player.name().to_string(),
                pot,
            };
            self.stage = Stage::Complete;
            self.last_outcome = Some(outcome.clone());
            return Ok(outcome);
        }

        if street == Street::River {
            self.stage = Stage::Showdown;
            let outcome = self.resolve_showdown()?;
            self.stage = Stage::Complete;
            self.last_outcome = Some(outcome.clone());
            return Ok(outcome);
        }

        self.stage = match street {
            Street::Preflop => Stage::Flop,
            Street::Flop => Stage::Turn,
            _ => Stage::River,
        };
        Ok(HandOutcome::Continue {
            stage: street,
            board: self.board.clone(),
            pot: self.pot,
        })
    }

    /// One pass over the seats in order; every player still contesting
    /// with chips behind gets exactly one action for this street.
    fn run_betting_round(&mut self, street: Street) {
        self.current_bet = self.big_blind;
        for i in 0..self.seats.len() {
            {
                let p = &self.seats[i].player;
                if !p.is_in_game() || p.stack() == 0 {
                    continue;
                }
            }
            let opponents = self
                .seats
                .iter()
                .enumerate()
                .filter(|(j, s)| *j != i && s.player.is_in_game())
                .count();
            let view = RoundView {
                board: &self.board,
                pot: self.pot,
                current_bet: self.current_bet,
                stage: street,
                big_blind: self.big_blind,
                opponents,
            };
            let token = {
                let Seat { player, policy } = &mut self.seats[i];
                policy.act(player, &view)
            };
            let parsed = parse_action(&token);

            let player = &mut self.seats[i].player;
            let applied = match parsed.kind {
                Action::Fold => {
                    player.fold();
                    AppliedAction::Fold
                }
                Action::Call => {
                    let amount = player.contribute(self.current_bet);
                    self.pot += amount;
                    // a call that empties the stack takes the player out
                    if player.stack() == 0 {
                        player.fold();
                    }
                    AppliedAction::Call { amount }
                }
                Action::AllIn => {
                    let all = player.stack();
                    let amount = player.contribute(all);
                    self.pot += amount;
                    // stays in the hand with nothing left to act on
                    AppliedAction::AllIn { amount }
                }
                Action::Raise(size) => {
                    let target = match size {
                        RaiseSize::Pot => self.pot,
                        RaiseSize::Multiplier(m) => self.current_bet.saturating_mul(m),
                    };
                    // a raise never lowers the price to call
                    let target = target.max(self.current_bet);
                    let amount = player.contribute(target);
                    self.pot += amount;
                    if amount > self.current_bet {
                        // new price for players yet to act in this pass;
                        // earlier actors are not re-solicited
                        self.current_bet = amount;
                    }
                    if player.stack() == 0 {
                        // underfunded raise: capping made it an all-in
                        AppliedAction::AllIn { amount }
                    } else {
                        AppliedAction::Raise { amount }
                    }
                }
            };
            self.actions.push(ActionRecord {
                player: player.name().to_string(),
                street,
                action: applied,
                bluff: parsed.bluff,
            });
        }
    }

    /// Terminal computation, not a player-facing round: compare the best
    /// 7-card hand of everyone still in, split the pot by integer division
    /// among the best. A split remainder is not distributed.
    fn resolve_showdown(&mut self) -> Result<HandOutcome, EngineError> {
        let pot = self.pot;
        let mut best: Option<HandRank> = None;
        let mut leaders: Vec<usize> = Vec::new();
        for (i, seat) in self.seats.iter().enumerate() {
            if !seat.player.is_in_game() {
                continue;
            }
            let mut cards = seat.player.hole_cards().to_vec();
            cards.extend_from_slice(&self.board);
            let rank = evaluate_best_hand(&cards)?;
            match best {
                None => {
                    best = Some(rank);
                    leaders = vec![i];
                }
                Some(b) if rank > b => {
                    best = Some(rank);
                    leaders = vec![i];
                }
                Some(b) if rank == b => leaders.push(i),
                Some(_) => {}
            }
        }
        if leaders.is_empty() {
            return Ok(HandOutcome::Showdown {
                winners: Vec::new(),
                pot,
                rank: None,
            });
        }
        let share = pot / leaders.len() as u32;
        for &i in &leaders {
            self.seats[i].player.add_chips(share);
        }
        Ok(HandOutcome::Showdown {
            winners: leaders
                .iter()
                .map(|&i| self.seats[i].player.name().to_string())
                .collect(),
            pot,
            rank: best,
        })
    }

    /// Summary of the last completed hand, or `None` while one is running.
    pub fn hand_record(&self) -> Option<HandRecord> {
        let outcome = self.last_outcome.clone()?;
        Some(HandRecord {
            hand_no: self.hand_no,
            seed: Some(self.seed),
            board: self.board.clone(),
            actions: self.actions.clone(),
            outcome,
            stacks: self
                .seats
                .iter()
                .map(|s| (s.player.name().to_string(), s.player.stack()))
                .collect(),
            ts: None,
        })
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn board(&self) -> &[Card] {
        &self.board
    }

    pub fn pot(&self) -> u32 {
        self.pot
    }

    pub fn big_blind(&self) -> u32 {
        self.big_blind
    }

    pub fn hand_no(&self) -> u32 {
        self.hand_no
    }

    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.seats.iter().map(|s| &s.player)
    }

    /// Actions taken so far in the current (or just-completed) hand.
    pub fn actions(&self) -> &[ActionRecord] {
        &self.actions
    }
}
