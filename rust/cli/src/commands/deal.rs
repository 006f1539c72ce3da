//! Deal command handler for single hand dealing and display.

use std::io::Write;

use holdem_engine::deck::Deck;

use crate::error::CliError;

/// Deals hole cards for `players` seats and a full 5-card board from one
/// shuffled deck, printing every card. Seeded for reproducibility; an
/// omitted seed draws a random one.
pub fn handle_deal_command(
    seed: Option<u64>,
    players: usize,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    if !(2..=10).contains(&players) {
        return Err(CliError::InvalidInput(
            "players must be between 2 and 10".to_string(),
        ));
    }
    let base_seed = seed.unwrap_or_else(rand::random);
    let mut deck = Deck::new_with_seed(base_seed);
    deck.shuffle();

    writeln!(out, "Seed: {}", base_seed)?;
    for i in 0..players {
        let hole = deck.deal(2)?;
        writeln!(out, "Hole P{}: {} {}", i + 1, hole[0], hole[1])?;
    }
    let board = deck.deal(5)?;
    writeln!(
        out,
        "Board: {} {} {} {} {}",
        board[0], board[1], board[2], board[3], board[4]
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deal_is_deterministic_for_a_seed() {
        let mut out1 = Vec::new();
        let mut out2 = Vec::new();
        handle_deal_command(Some(12345), 2, &mut out1).unwrap();
        handle_deal_command(Some(12345), 2, &mut out2).unwrap();
        assert_eq!(out1, out2);
    }

    #[test]
    fn deal_prints_every_seat_and_the_board() {
        let mut out = Vec::new();
        handle_deal_command(Some(42), 4, &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        for line in ["Hole P1:", "Hole P2:", "Hole P3:", "Hole P4:", "Board:"] {
            assert!(output.contains(line), "missing {line:?}");
        }
    }

    #[test]
    fn deal_rejects_bad_player_counts() {
        let mut out = Vec::new();
        assert!(handle_deal_command(Some(1), 1, &mut out).is_err());
        assert!(handle_deal_command(Some(1), 11, &mut out).is_err());
    }

    #[test]
    fn deal_without_seed_succeeds() {
        let mut out = Vec::new();
        handle_deal_command(None, 2, &mut out).unwrap();
        assert!(!out.is_empty());
    }
}
