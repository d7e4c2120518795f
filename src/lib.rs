//! Heads-up hold'em hand strength, potential, and betting decisions.
//!
//! The crate estimates how a two-card pocket fares against every possible
//! opponent pocket, projects that strength one street ahead, and feeds the
//! result with pot risk and self-observed aggression into a stochastic
//! betting strategy.
pub mod cards;
pub mod equity;
pub mod error;
pub mod evaluation;
pub mod metrics;
pub mod preflop;
pub mod strategy;

pub use error::Error;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Win rates, hand strength, potentials, and random thresholds.
pub type Probability = f64;
/// Pot sizes, stacks, and bet amounts.
pub type Chips = u32;

// ============================================================================
// NUMERICS
// ============================================================================
/// Substituted for any zero denominator.
pub const EPSILON: f64 = 1e-5;

// ============================================================================
// PREFLOP PARAMETERS
// ============================================================================
/// Monte Carlo trials per preflop odds estimate.
pub const SIMULATIONS: usize = 50_000;

// ============================================================================
// STRATEGY PARAMETERS
// ============================================================================
/// Bounds of the uniform draw behind each agent's aggression factor.
pub const AGGRESSION_LO: f64 = 0.5;
pub const AGGRESSION_HI: f64 = 0.9;
/// Strength at or above which an unaggressive agent sizes a bet large.
pub const LARGE_BET_STRENGTH: Probability = 0.75;

// ============================================================================
// CONFIGURATION
// ============================================================================
/// Tunables for a decision strategy. Missing fields keep their defaults.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    /// Monte Carlo trials for preflop odds.
    pub simulations: usize,
    /// Ignore negative potential when blending effective strength.
    pub aggressive: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            simulations: SIMULATIONS,
            aggressive: true,
        }
    }
}

// ============================================================================
// LOGGING
// ============================================================================
/// Initialize terminal logging.
#[cfg(feature = "cli")]
pub fn log() {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let config = serde_json::from_str::<Config>(r#"{"simulations": 10}"#).unwrap();
        assert!(config.aggressive);
        assert_eq!(config.simulations, 10);
        let config = serde_json::from_str::<Config>(r#"{"aggressive": false}"#).unwrap();
        assert!(!config.aggressive);
        assert_eq!(config.simulations, SIMULATIONS);
    }
}
