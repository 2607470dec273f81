//! # Market Sentiment
//!
//! Regime switching and the Market Sentiment Index (MSI).
//!
//! Each month the regime is redrawn with `switch_probability` from the
//! stationary regime probabilities (the draw may land on the current regime).
//! MSI is then sampled uniformly from `[msi_min, msi_max]` and scaled by the
//! regime's multiplier.
//!
//! | Regime | Probability | MSI × | Demand × |
//! |--------|-------------|-------|----------|
//! | Bull | 25% | 1.2 | 1.15 |
//! | Normal | 50% | 1.0 | 1.00 |
//! | Bear | 25% | 0.8 | 0.85 |

use crate::config::{MarketConfig, RegimeParams};
use crate::error::{Result, SimError};
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Market regime
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketRegime {
    Bull,
    #[default]
    Normal,
    Bear,
}

impl MarketRegime {
    /// All regimes in draw order
    pub const ALL: [MarketRegime; 3] = [Self::Bull, Self::Normal, Self::Bear];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Bull => "Bull",
            Self::Normal => "Normal",
            Self::Bear => "Bear",
        }
    }
}

impl fmt::Display for MarketRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Regime state plus sampling parameters
#[derive(Clone, Debug)]
pub struct MarketModel {
    config: MarketConfig,
    regime_index: WeightedIndex<f64>,
    current: MarketRegime,
}

impl MarketModel {
    pub fn new(config: &MarketConfig) -> Result<Self> {
        let weights = MarketRegime::ALL.map(|r| config.regimes.get(r).probability);
        let regime_index = WeightedIndex::new(weights)
            .map_err(|e| SimError::invalid("market.regimes", e.to_string()))?;

        Ok(Self {
            config: config.clone(),
            regime_index,
            current: config.initial_regime,
        })
    }

    pub fn regime(&self) -> MarketRegime {
        self.current
    }

    pub fn params(&self) -> &RegimeParams {
        self.config.regimes.get(self.current)
    }

    /// Possibly switch regime for the coming month
    pub fn transition<R: Rng + ?Sized>(&mut self, rng: &mut R) -> MarketRegime {
        if rng.gen_bool(self.config.switch_probability) {
            let next = MarketRegime::ALL[self.regime_index.sample(rng)];
            if next != self.current {
                tracing::debug!(from = %self.current, to = %next, "market regime switch");
            }
            self.current = next;
        }
        self.current
    }

    /// Sample this month's MSI under the current regime
    pub fn sample_msi<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let base = rng.gen_range(self.config.msi_min..=self.config.msi_max);
        base * self.params().msi_multiplier
    }
}
