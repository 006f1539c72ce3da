//! Command-line surface: the clap derive tree for the `holdem` binary.

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "holdem", version, about = "Texas Hold'em simulation engine")]
pub struct HoldemCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Deal a seeded hand for inspection
    Deal {
        /// RNG seed; random when omitted
        #[arg(long)]
        seed: Option<u64>,
        /// Number of hole-card pairs to deal
        #[arg(long, default_value_t = 2)]
        players: usize,
    },
    /// Evaluate the best 5-card hand within 2..=7 card tokens
    Rank {
        /// Whitespace-separated card tokens, e.g. "As Ks Qs Js Ts"
        #[arg(long)]
        cards: String,
    },
    /// Monte Carlo win-rate estimate for a hole pair
    Equity {
        /// Exactly two card tokens, e.g. "Ah Ad"
        #[arg(long)]
        hole: String,
        /// 0 to 5 visible board tokens
        #[arg(long, default_value = "")]
        board: String,
        #[arg(long, default_value_t = 1)]
        opponents: usize,
        /// Trial count; defaults from configuration
        #[arg(long)]
        trials: Option<u32>,
        /// RNG seed; random when omitted
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Run complete hands between named policies
    Sim {
        #[arg(long, default_value_t = 5)]
        hands: u32,
        /// Comma-separated policy names, one per seat
        #[arg(long, default_value = "simple,monte-carlo,caller")]
        policies: String,
        /// Session seed; defaults from configuration, else random
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        big_blind: Option<u32>,
        #[arg(long)]
        starting_stack: Option<u32>,
        /// Emit one JSON hand record per line instead of the commentary
        #[arg(long)]
        json: bool,
    },
    /// Show effective configuration and where each value came from
    Cfg,
}
