//! Equity command: front-end for the Monte Carlo win-rate estimator.

use std::io::Write;

use holdem_engine::cards::parse_cards;
use holdem_engine::equity::WinRateEstimator;

use crate::config::Config;
use crate::error::CliError;

pub fn handle_equity_command(
    hole: &str,
    board: &str,
    opponents: usize,
    trials: Option<u32>,
    seed: Option<u64>,
    cfg: &Config,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let hole_cards = parse_cards(hole)?;
    let &[a, b] = hole_cards.as_slice() else {
        return Err(CliError::InvalidInput(
            "hole must be exactly 2 cards".to_string(),
        ));
    };
    let board_cards = parse_cards(board)?;
    if board_cards.len() > 5 {
        return Err(CliError::InvalidInput(
            "board holds at most 5 cards".to_string(),
        ));
    }

    let trials = trials.unwrap_or(cfg.trials);
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);
    let mut estimator = WinRateEstimator::new_with_seed(seed);
    let win_rate = estimator.estimate([a, b], &board_cards, opponents, trials)?;

    writeln!(
        out,
        "win rate: {:.4} ({} opponents, {} trials, seed {})",
        win_rate, opponents, trials, seed
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> Config {
        Config::default()
    }

    #[test]
    fn zero_opponents_report_certainty() {
        let mut out = Vec::new();
        handle_equity_command("Ah Ad", "", 0, Some(50), Some(1), &cfg(), &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.starts_with("win rate: 1.0000"));
    }

    #[test]
    fn fixed_seed_is_reproducible() {
        let mut out1 = Vec::new();
        let mut out2 = Vec::new();
        handle_equity_command("Qh Qd", "Kc 7d 2h", 2, Some(200), Some(9), &cfg(), &mut out1)
            .unwrap();
        handle_equity_command("Qh Qd", "Kc 7d 2h", 2, Some(200), Some(9), &cfg(), &mut out2)
            .unwrap();
        assert_eq!(out1, out2);
    }

    #[test]
    fn rejects_bad_hole_and_board() {
        let mut out = Vec::new();
        assert!(handle_equity_command("Ah", "", 1, None, Some(1), &cfg(), &mut out).is_err());
        assert!(
            handle_equity_command("Ah Ad", "Kc 7d 2h 3s 4s 5s", 1, None, Some(1), &cfg(), &mut out)
                .is_err()
        );
        assert!(handle_equity_command("Ah Zz", "", 1, None, Some(1), &cfg(), &mut out).is_err());
    }
}
