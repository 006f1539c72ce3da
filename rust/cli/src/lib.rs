//! # holdem-cli: Command-Line Driver for the Hold'em Engine
//!
//! Thin front-end over `holdem-engine` and `holdem-ai`. The entry point
//! is [`run`], which parses arguments and dispatches to a subcommand
//! handler with injected output streams, returning the process exit code.
//!
//! ## Subcommands
//!
//! - `deal`: deal a seeded hand for inspection
//! - `rank`: evaluate a hand given as card tokens
//! - `equity`: Monte Carlo win-rate estimate for a hole pair
//! - `sim`: run complete hands between named policies
//! - `cfg`: show effective configuration
//!
//! ```no_run
//! use std::io;
//! let args = vec!["holdem", "deal", "--seed", "42"];
//! let code = holdem_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```

use std::io::Write;

use clap::Parser;

pub mod cli;
mod commands;
pub mod config;
mod error;

use cli::{Commands, HoldemCli};
pub use error::CliError;

/// Parses command-line arguments and runs the matching subcommand.
/// Returns the exit code: 0 on success, 2 on any error. Help and version
/// requests print to `out` and exit 0.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();
    let cli = match HoldemCli::try_parse_from(&argv) {
        Err(e) => {
            use clap::error::ErrorKind;
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return 2;
                    }
                    0
                }
                _ => {
                    let _ = writeln!(err, "{}", e);
                    2
                }
            };
        }
        Ok(cli) => cli,
    };

    let result = match cli.cmd {
        Commands::Deal { seed, players } => commands::handle_deal_command(seed, players, out),
        Commands::Rank { cards } => commands::handle_rank_command(&cards, out),
        Commands::Equity {
            hole,
            board,
            opponents,
            trials,
            seed,
        } => config::load()
            .map_err(|e| CliError::Config(e.to_string()))
            .and_then(|cfg| {
                commands::handle_equity_command(&hole, &board, opponents, trials, seed, &cfg, out)
            }),
        Commands::Sim {
            hands,
            policies,
            seed,
            big_blind,
            starting_stack,
            json,
        } => config::load()
            .map_err(|e| CliError::Config(e.to_string()))
            .and_then(|cfg| {
                commands::handle_sim_command(
                    hands,
                    &policies,
                    seed,
                    big_blind,
                    starting_stack,
                    json,
                    &cfg,
                    out,
                )
            }),
        Commands::Cfg => commands::handle_cfg_command(out),
    };

    match result {
        Ok(()) => 0,
        Err(e) => {
            let _ = writeln!(err, "Error: {}", e);
            2
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn run_argv(args: &[&str]) -> (i32, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(args.to_vec(), &mut out, &mut err);
        (
            code,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn help_prints_to_stdout_and_exits_zero() {
        let (code, out, _) = run_argv(&["holdem", "--help"]);
        assert_eq!(code, 0);
        assert!(out.contains("deal"));
        assert!(out.contains("sim"));
    }

    #[test]
    fn unknown_command_exits_two() {
        let (code, _, err) = run_argv(&["holdem", "shuffleboard"]);
        assert_eq!(code, 2);
        assert!(!err.is_empty());
    }

    #[test]
    fn deal_dispatches() {
        let (code, out, _) = run_argv(&["holdem", "deal", "--seed", "42"]);
        assert_eq!(code, 0);
        assert!(out.contains("Hole P1:"));
        assert!(out.contains("Board:"));
    }

    #[test]
    fn rank_dispatches() {
        let (code, out, _) = run_argv(&["holdem", "rank", "--cards", "As Ks Qs Js Ts"]);
        assert_eq!(code, 0);
        assert!(out.contains("Straight Flush"));
    }

    #[test]
    fn rank_reports_bad_tokens() {
        let (code, _, err) = run_argv(&["holdem", "rank", "--cards", "As Xx"]);
        assert_eq!(code, 2);
        assert!(err.contains("invalid card token"));
    }

    #[test]
    #[serial]
    fn equity_dispatches() {
        let (code, out, _) = run_argv(&[
            "holdem", "equity", "--hole", "Ah Ad", "--opponents", "0", "--trials", "10", "--seed",
            "1",
        ]);
        assert_eq!(code, 0);
        assert!(out.contains("win rate: 1.0000"));
    }

    #[test]
    #[serial]
    fn sim_dispatches() {
        let (code, out, _) = run_argv(&[
            "holdem",
            "sim",
            "--hands",
            "1",
            "--policies",
            "caller,caller",
            "--seed",
            "5",
        ]);
        assert_eq!(code, 0);
        assert!(out.contains("--- Hand 1 ---"));
    }
}
