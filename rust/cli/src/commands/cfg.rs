//! Cfg command: print the effective configuration with value sources.

use std::io::Write;

use crate::config;
use crate::error::CliError;

pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let resolved = config::load_with_sources().map_err(|e| CliError::Config(e.to_string()))?;
    let cfg = &resolved.config;
    let src = &resolved.sources;

    writeln!(out, "Configuration:")?;
    writeln!(
        out,
        "  big_blind      = {} ({})",
        cfg.big_blind,
        src.big_blind.as_str()
    )?;
    writeln!(
        out,
        "  starting_stack = {} ({})",
        cfg.starting_stack,
        src.starting_stack.as_str()
    )?;
    writeln!(
        out,
        "  trials         = {} ({})",
        cfg.trials,
        src.trials.as_str()
    )?;
    match cfg.seed {
        Some(seed) => writeln!(out, "  seed           = {} ({})", seed, src.seed.as_str())?,
        None => writeln!(out, "  seed           = random ({})", src.seed.as_str())?,
    }
    Ok(())
}
