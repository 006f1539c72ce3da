//! # holdem-ai: Decision Policies for the Hold'em Engine
//!
//! Ready-made [`DecisionPolicy`] implementations for driving simulated
//! players, from a plain calling station to a Monte Carlo player that
//! estimates its win rate before acting.
//!
//! ## Policies
//!
//! - `caller` ([`CallingStation`]): calls everything; the reference
//!   policy for deterministic end-to-end tests
//! - `simple` ([`SimplePolicy`]): folds weak starts preflop, then calls
//! - `monte-carlo` ([`MonteCarloPolicy`]): postflop decisions from an
//!   estimated win rate against the live opponents
//! - `aggressive` ([`AggressivePolicy`]): raises for value and
//!   occasionally fires a tagged bluff raise
//!
//! ## Quick Start
//!
//! ```rust
//! use holdem_ai::create_policy;
//!
//! let policy = create_policy("monte-carlo", 42).expect("known policy");
//! assert_eq!(policy.name(), "monte-carlo");
//! assert!(create_policy("psychic", 42).is_none());
//! ```

use holdem_engine::policy::DecisionPolicy;

pub mod baseline;
pub mod montecarlo;

pub use baseline::{CallingStation, SimplePolicy};
pub use montecarlo::{AggressivePolicy, MonteCarloPolicy};

/// Builds a policy by its registry name, or `None` for an unknown name.
/// `seed` feeds the policies that sample; the stateless ones ignore it.
pub fn create_policy(name: &str, seed: u64) -> Option<Box<dyn DecisionPolicy>> {
    match name {
        "caller" => Some(Box::new(CallingStation)),
        "simple" => Some(Box::new(SimplePolicy)),
        "monte-carlo" => Some(Box::new(MonteCarloPolicy::new_with_seed(seed))),
        "aggressive" => Some(Box::new(AggressivePolicy::new_with_seed(seed))),
        _ => None,
    }
}

/// The names accepted by [`create_policy`], for help text and validation.
pub fn policy_names() -> &'static [&'static str] {
    &["caller", "simple", "monte-carlo", "aggressive"]
}
