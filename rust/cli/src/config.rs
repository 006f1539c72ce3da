use serde::{Deserialize, Serialize};
use std::fs;

use holdem_engine::equity::DEFAULT_TRIALS;
use holdem_engine::player::STARTING_STACK;

/// Effective settings for the CLI commands. Defaults are overridden by an
/// optional TOML file (path in `HOLDEM_CONFIG`), which in turn is
/// overridden per value by environment variables.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub big_blind: u32,
    pub starting_stack: u32,
    pub trials: u32,
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            big_blind: 20,
            starting_stack: STARTING_STACK,
            trials: DEFAULT_TRIALS,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

impl ValueSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueSource::Default => "default",
            ValueSource::File => "file",
            ValueSource::Env => "env",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub big_blind: ValueSource,
    pub starting_stack: ValueSource,
    pub trials: ValueSource,
    pub seed: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            big_blind: ValueSource::Default,
            starting_stack: ValueSource::Default,
            trials: ValueSource::Default,
            seed: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "failed to read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "failed to parse config file: {}", e),
            ConfigError::Invalid(msg) => write!(f, "{}", msg),
        }
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("HOLDEM_CONFIG") {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.big_blind {
            cfg.big_blind = v;
            sources.big_blind = ValueSource::File;
        }
        if let Some(v) = f.starting_stack {
            cfg.starting_stack = v;
            sources.starting_stack = ValueSource::File;
        }
        if let Some(v) = f.trials {
            cfg.trials = v;
            sources.trials = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var("HOLDEM_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid HOLDEM_SEED".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(bb) = std::env::var("HOLDEM_BIG_BLIND")
        && !bb.is_empty()
    {
        cfg.big_blind = bb
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid HOLDEM_BIG_BLIND".into()))?;
        sources.big_blind = ValueSource::Env;
    }
    if let Ok(stack) = std::env::var("HOLDEM_STARTING_STACK")
        && !stack.is_empty()
    {
        cfg.starting_stack = stack
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid HOLDEM_STARTING_STACK".into()))?;
        sources.starting_stack = ValueSource::Env;
    }
    if let Ok(trials) = std::env::var("HOLDEM_TRIALS")
        && !trials.is_empty()
    {
        cfg.trials = trials
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid HOLDEM_TRIALS".into()))?;
        sources.trials = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    big_blind: Option<u32>,
    #[serde(default)]
    starting_stack: Option<u32>,
    #[serde(default)]
    trials: Option<u32>,
    #[serde(default)]
    seed: Option<u64>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.big_blind == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: big_blind must be >0".into(),
        ));
    }
    if cfg.starting_stack == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: starting_stack must be >0".into(),
        ));
    }
    if cfg.trials == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: trials must be >0".into(),
        ));
    }
    Ok(())
}
