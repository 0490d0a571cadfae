use crate::domain::model::decision::{
    DEFAULT_MAX_STAKE, DEFAULT_ODDS_CEILING, DEFAULT_ODDS_FLOOR, DEFAULT_VALUE_THRESHOLD,
};
use anyhow::{Context, Result};
use std::env;

/// Default page size for recent-prediction listings.
pub const DEFAULT_LIST_LIMIT: usize = 50;

/// Runtime configuration of the engine.
///
/// Model weights are deliberately not configurable; changing them changes
/// model behavior and belongs to a version bump, not an env var. What lives
/// here is the market simulation band, the value-bet policy and listing
/// defaults.
#[derive(Debug, Clone)]
pub struct Config {
    pub odds_floor: f64,
    pub odds_ceiling: f64,
    pub value_threshold: f64,
    pub max_stake: f64,
    pub default_list_limit: usize,
    pub seed_samples: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            odds_floor: DEFAULT_ODDS_FLOOR,
            odds_ceiling: DEFAULT_ODDS_CEILING,
            value_threshold: DEFAULT_VALUE_THRESHOLD,
            max_stake: DEFAULT_MAX_STAKE,
            default_list_limit: DEFAULT_LIST_LIMIT,
            seed_samples: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let odds_floor = env::var("FORMCAST_ODDS_FLOOR")
            .unwrap_or_else(|_| DEFAULT_ODDS_FLOOR.to_string())
            .parse::<f64>()
            .context("Failed to parse FORMCAST_ODDS_FLOOR")?;

        let odds_ceiling = env::var("FORMCAST_ODDS_CEILING")
            .unwrap_or_else(|_| DEFAULT_ODDS_CEILING.to_string())
            .parse::<f64>()
            .context("Failed to parse FORMCAST_ODDS_CEILING")?;

        if odds_ceiling <= odds_floor {
            anyhow::bail!(
                "FORMCAST_ODDS_CEILING ({}) must be greater than FORMCAST_ODDS_FLOOR ({})",
                odds_ceiling,
                odds_floor
            );
        }

        let value_threshold = env::var("FORMCAST_VALUE_THRESHOLD")
            .unwrap_or_else(|_| DEFAULT_VALUE_THRESHOLD.to_string())
            .parse::<f64>()
            .context("Failed to parse FORMCAST_VALUE_THRESHOLD")?;

        let max_stake = env::var("FORMCAST_MAX_STAKE")
            .unwrap_or_else(|_| DEFAULT_MAX_STAKE.to_string())
            .parse::<f64>()
            .context("Failed to parse FORMCAST_MAX_STAKE")?;

        let default_list_limit = env::var("FORMCAST_DEFAULT_LIST_LIMIT")
            .unwrap_or_else(|_| DEFAULT_LIST_LIMIT.to_string())
            .parse::<usize>()
            .context("Failed to parse FORMCAST_DEFAULT_LIST_LIMIT")?;

        let seed_samples = env::var("FORMCAST_SEED_SAMPLES")
            .unwrap_or_else(|_| "true".to_string())
            .parse::<bool>()
            .unwrap_or(true);

        Ok(Config {
            odds_floor,
            odds_ceiling,
            value_threshold,
            max_stake,
            default_list_limit,
            seed_samples,
        })
    }
}
