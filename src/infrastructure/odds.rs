use crate::domain::ports::OddsSource;
use rand::Rng;

/// Uniformly samples a bookmaker price from the configured band.
/// Stands in for a live odds feed; each call is an independent draw.
#[derive(Debug, Clone)]
pub struct SimulatedOdds;

impl SimulatedOdds {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SimulatedOdds {
    fn default() -> Self {
        Self::new()
    }
}

impl OddsSource for SimulatedOdds {
    fn sample(&self, lo: f64, hi: f64) -> f64 {
        let mut rng = rand::rng();
        rng.random_range(lo..hi)
    }
}

/// Constant odds source for tests or pure logic verification.
#[derive(Debug, Clone)]
pub struct FixedOdds(pub f64);

impl OddsSource for FixedOdds {
    fn sample(&self, _lo: f64, _hi: f64) -> f64 {
        self.0
    }
}
