//! Rank command: evaluate a hand given as card tokens.

use std::io::Write;

use holdem_engine::cards::parse_cards;
use holdem_engine::hand::evaluate_best_hand;

use crate::error::CliError;

/// Parses 2..=7 card tokens, evaluates the best 5-card hand, and prints
/// the category name with its tiebreak ranks.
pub fn handle_rank_command(cards: &str, out: &mut dyn Write) -> Result<(), CliError> {
    let cards = parse_cards(cards)?;
    let rank = evaluate_best_hand(&cards)?;
    let tiebreak: Vec<u8> = rank.tiebreak.iter().copied().filter(|&v| v != 0).collect();
    writeln!(out, "{} {:?}", rank.category, tiebreak)?;
    Ok(())
}
