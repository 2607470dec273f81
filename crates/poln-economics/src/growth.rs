//! # Mission Growth
//!
//! Monthly intensity of new missions.
//!
//! | Model | Intensity λ(t) |
//! |-------|----------------|
//! | Compound | λ(1) = initial, λ(t+1) = λ(t) · (1 + rate / 100) |
//! | Logistic | initial + (K − initial) / (1 + e^(−r (t − t0))) |
//!
//! Both are scaled by a seasonal factor `1 + A · sin(2π (t − 1) / period)`.
//! Monthly volume never exceeds [`MAX_MONTHLY_MISSIONS`].

use crate::config::GrowthConfig;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Upper bound on missions started in one month
pub const MAX_MONTHLY_MISSIONS: f64 = 1e9;

/// Shape of the adoption curve
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrowthModel {
    /// Fixed monthly percentage growth
    #[default]
    Compound,
    /// S-curve saturating at the carrying capacity
    Logistic,
}

/// Stateful mission-volume curve
#[derive(Clone, Debug)]
pub struct GrowthCurve {
    config: GrowthConfig,
    /// Compound intensity carried between months
    compound_level: f64,
}

impl GrowthCurve {
    pub fn new(config: &GrowthConfig) -> Self {
        Self {
            config: config.clone(),
            compound_level: config.initial_new_missions.min(MAX_MONTHLY_MISSIONS),
        }
    }

    /// Seasonal multiplier for `month`
    pub fn seasonality(&self, month: u32) -> f64 {
        let amplitude = self.config.seasonality_amplitude;
        if amplitude == 0.0 {
            return 1.0;
        }
        let phase = 2.0 * PI * (month.saturating_sub(1)) as f64 / self.config.seasonality_period as f64;
        1.0 + amplitude * phase.sin()
    }

    /// Trend intensity for `month` before seasonality
    pub fn trend(&self, month: u32) -> f64 {
        match self.config.model {
            GrowthModel::Compound => self.compound_level,
            GrowthModel::Logistic => {
                let initial = self.config.initial_new_missions;
                let k = self.config.carrying_capacity;
                let x = -self.config.growth_rate * (month as f64 - self.config.inflection_month);
                initial + (k - initial) / (1.0 + x.exp())
            }
        }
    }

    /// Expected new missions for `month`
    pub fn intensity(&self, month: u32) -> f64 {
        (self.trend(month) * self.seasonality(month)).max(0.0)
    }

    /// Whole missions started in `month`; advances the compound level
    pub fn next_missions(&mut self, month: u32, demand_multiplier: f64) -> u64 {
        let missions = (self.intensity(month) * demand_multiplier)
            .clamp(0.0, MAX_MONTHLY_MISSIONS)
            .floor() as u64;
        if self.config.model == GrowthModel::Compound {
            let next = self.compound_level * (1.0 + self.config.adoption_growth_rate / 100.0);
            self.compound_level = next.min(MAX_MONTHLY_MISSIONS);
        }
        missions
    }
}
