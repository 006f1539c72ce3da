//! Command handler modules for the holdem CLI.
//!
//! One module per subcommand, each exposing a single handler:
//! `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`. Output
//! streams come in as `&mut dyn Write` so tests can capture them, and all
//! failures propagate through [`crate::error::CliError`].

pub mod cfg;
pub mod deal;
pub mod equity;
pub mod rank;
pub mod sim;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use equity::handle_equity_command;
pub use rank::handle_rank_command;
pub use sim::handle_sim_command;
