use super::intent::Intent;
use crate::AGGRESSION_HI;
use crate::AGGRESSION_LO;
use crate::metrics::aggression;
use rand::Rng;

/// What an agent remembers about its own play this game.
///
/// Counters only move through [`Memory::commit`]. The aggression factor
/// is drawn once per agent and survives [`Memory::reset`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Memory {
    bets: u32,
    raises: u32,
    checks: u32,
    factor: f64,
}

impl Memory {
    /// Fresh counters with a factor of round(1 / U(0.5, 0.9)).
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let u = rng.random_range(AGGRESSION_LO..AGGRESSION_HI);
        Self::from((1. / u).round())
    }
    pub fn bets(&self) -> u32 {
        self.bets
    }
    pub fn raises(&self) -> u32 {
        self.raises
    }
    pub fn checks(&self) -> u32 {
        self.checks
    }
    pub fn factor(&self) -> f64 {
        self.factor
    }
    pub fn aggression(&self) -> f64 {
        aggression(self.bets, self.raises, self.checks)
    }
    /// Record an intent that was sent to the host.
    pub fn commit(&mut self, intent: &Intent) {
        match intent {
            Intent::Check => self.checks += 1,
            Intent::Bet { .. } => self.bets += 1,
            Intent::Raise { .. } => self.raises += 1,
            Intent::Call { .. } | Intent::Fold => {}
        }
    }
    /// Zero the counters for a new game.
    pub fn reset(&mut self) {
        self.bets = 0;
        self.raises = 0;
        self.checks = 0;
    }
}

/// Fresh counters with a fixed aggression factor.
impl From<f64> for Memory {
    fn from(factor: f64) -> Self {
        Self {
            bets: 0,
            raises: 0,
            checks: 0,
            factor,
        }
    }
}
