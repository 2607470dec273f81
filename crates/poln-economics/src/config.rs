//! # Simulation Configuration
//!
//! Parameter set for a tokenomics run. Loaded in layers:
//!
//! 1. built-in defaults (every field is optional in the file)
//! 2. a TOML or JSON file, format picked from the extension
//! 3. `POLN__<SECTION>__<FIELD>` environment variables
//!
//! ```toml
//! [simulation]
//! years = [1, 3, 5]
//! seed = 42
//!
//! [fees]
//! protocol_fee_rate = 0.05
//!
//! [[private_sales]]
//! name = "seed"
//! tokens_sold = 50000000
//! vesting_period = 12
//! ```

use crate::error::{Result, SimError};
use crate::growth::GrowthModel;
use crate::market::MarketRegime;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment prefix for overrides (`POLN__FEES__STAKING_RATE=0.4`)
pub const ENV_PREFIX: &str = "POLN";

/// Environment key separator
pub const ENV_SEPARATOR: &str = "__";

/// Longest simulated horizon, also the longest mission duration
pub const MAX_HORIZON_MONTHS: u32 = 1_200;

/// Complete simulation configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Horizons, seed and calendar
    #[serde(default)]
    pub simulation: SimulationSettings,

    /// Supply, price and allocation
    #[serde(default)]
    pub token: TokenConfig,

    /// Lockup and vesting per cohort
    #[serde(default)]
    pub vesting: VestingConfig,

    /// Mission fee economics
    #[serde(default)]
    pub fees: FeeConfig,

    /// Price response to demand
    #[serde(default)]
    pub pricing: PricingConfig,

    /// Sentiment and regime switching
    #[serde(default)]
    pub market: MarketConfig,

    /// Mission volume curve
    #[serde(default)]
    pub growth: GrowthConfig,

    /// Treasury-funded reward emission
    #[serde(default)]
    pub rewards: RewardsConfig,

    /// Treasury operating spend
    #[serde(default)]
    pub dao: DaoConfig,

    /// Private sale tranches
    #[serde(default = "default_private_sales")]
    pub private_sales: Vec<PrivateSale>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            simulation: SimulationSettings::default(),
            token: TokenConfig::default(),
            vesting: VestingConfig::default(),
            fees: FeeConfig::default(),
            pricing: PricingConfig::default(),
            market: MarketConfig::default(),
            growth: GrowthConfig::default(),
            rewards: RewardsConfig::default(),
            dao: DaoConfig::default(),
            private_sales: default_private_sales(),
        }
    }
}

/// Horizons, seed and calendar
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationSettings {
    /// Each entry is an independent run of `years * months_per_year` months
    #[serde(default = "default_years")]
    pub years: Vec<u32>,

    #[serde(default = "default_months_per_year")]
    pub months_per_year: u32,

    /// PRNG seed; every horizon restarts from it
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Calendar date of month 1
    #[serde(default = "default_start_date")]
    pub start_date: NaiveDate,
}

fn default_years() -> Vec<u32> {
    vec![1, 3, 5]
}

fn default_months_per_year() -> u32 {
    12
}

fn default_seed() -> u64 {
    42
}

fn default_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or_default()
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            years: default_years(),
            months_per_year: default_months_per_year(),
            seed: default_seed(),
            start_date: default_start_date(),
        }
    }
}

impl SimulationSettings {
    /// Months simulated for a horizon of `years`
    pub fn months_for(&self, years: u32) -> u32 {
        years.saturating_mul(self.months_per_year)
    }
}

/// Supply, price and genesis allocation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenConfig {
    /// Tokens minted at genesis
    pub total_supply: f64,

    /// Launch price in USD
    pub initial_price: f64,

    /// Fractions of total supply held back at genesis
    pub distribution: TokenDistribution,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            total_supply: 1_000_000_000.0,
            initial_price: 0.05,
            distribution: TokenDistribution::default(),
        }
    }
}

/// Genesis allocation as fractions of total supply
///
/// Whatever is left after these and the private sales is circulating from day one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenDistribution {
    pub builders: f64,
    pub dao_treasury: f64,
    pub airdrops: f64,
    pub initiator_rewards: f64,
    pub testnet_partners: f64,
}

impl Default for TokenDistribution {
    fn default() -> Self {
        Self {
            builders: 0.15,
            dao_treasury: 0.30,
            airdrops: 0.05,
            initiator_rewards: 0.10,
            testnet_partners: 0.05,
        }
    }
}

impl TokenDistribution {
    /// Sum of all fractions
    pub fn total(&self) -> f64 {
        self.builders + self.dao_treasury + self.airdrops + self.initiator_rewards + self.testnet_partners
    }
}

/// A private sale tranche
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PrivateSale {
    pub name: String,
    pub tokens_sold: f64,
    /// Months before the first release
    #[serde(default)]
    pub lockup_period: u32,
    /// Months of linear release; 0 unlocks everything at once
    #[serde(default)]
    pub vesting_period: u32,
}

fn default_private_sales() -> Vec<PrivateSale> {
    vec![
        PrivateSale {
            name: "seed".to_string(),
            tokens_sold: 50_000_000.0,
            lockup_period: 0,
            vesting_period: 12,
        },
        PrivateSale {
            name: "strategic".to_string(),
            tokens_sold: 30_000_000.0,
            lockup_period: 0,
            vesting_period: 6,
        },
        PrivateSale {
            name: "public".to_string(),
            tokens_sold: 20_000_000.0,
            lockup_period: 0,
            vesting_period: 0,
        },
    ]
}

/// Lockup followed by linear vesting
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CohortSchedule {
    pub lockup_months: u32,
    pub vesting_months: u32,
}

/// Vesting per stakeholder cohort
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VestingConfig {
    pub builders: CohortSchedule,

    /// Falls back to the builders schedule
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initiator_rewards: Option<CohortSchedule>,

    /// Airdrop tokens stay locked when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub airdrops: Option<CohortSchedule>,

    /// Release testnet/partner tokens at genesis
    pub testnet_partners_immediate: bool,
}

impl Default for VestingConfig {
    fn default() -> Self {
        Self {
            builders: CohortSchedule {
                lockup_months: 12,
                vesting_months: 24,
            },
            initiator_rewards: None,
            airdrops: None,
            testnet_partners_immediate: true,
        }
    }
}

impl VestingConfig {
    /// Effective initiator schedule
    pub fn initiator_schedule(&self) -> CohortSchedule {
        self.initiator_rewards.unwrap_or(self.builders)
    }
}

/// Mission fee economics
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeeConfig {
    /// USD cost of one mission
    pub project_cost: f64,
    /// Share of the project cost charged as protocol fee
    pub protocol_fee_rate: f64,
    /// Share of the fee the fellowship stakes (burnt on failure)
    pub staking_rate: f64,
    pub mission_success_rate: f64,
    /// Floor for a fee converted to tokens
    pub min_fee_tokens: f64,
}

impl Default for FeeConfig {
    fn default() -> Self {
        Self {
            project_cost: 10_000.0,
            protocol_fee_rate: 0.05,
            staking_rate: 0.5,
            mission_success_rate: 0.8,
            min_fee_tokens: 1e-6,
        }
    }
}

/// Price response to net demand
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    /// Price elasticity coefficient (PEC)
    pub elasticity: f64,
    /// Absolute cap on the monthly relative price change
    pub max_monthly_change: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            elasticity: 1.5,
            max_monthly_change: 0.1,
        }
    }
}

/// Parameters of one market regime
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegimeParams {
    /// Stationary draw probability
    pub probability: f64,
    /// Scales the sampled MSI
    pub msi_multiplier: f64,
    /// Scales the month's new missions
    pub demand_multiplier: f64,
}

/// The three regimes
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegimeTable {
    pub bull: RegimeParams,
    pub normal: RegimeParams,
    pub bear: RegimeParams,
}

impl Default for RegimeTable {
    fn default() -> Self {
        Self {
            bull: RegimeParams {
                probability: 0.25,
                msi_multiplier: 1.2,
                demand_multiplier: 1.15,
            },
            normal: RegimeParams {
                probability: 0.5,
                msi_multiplier: 1.0,
                demand_multiplier: 1.0,
            },
            bear: RegimeParams {
                probability: 0.25,
                msi_multiplier: 0.8,
                demand_multiplier: 0.85,
            },
        }
    }
}

impl RegimeTable {
    /// Parameters for a regime
    pub fn get(&self, regime: MarketRegime) -> &RegimeParams {
        match regime {
            MarketRegime::Bull => &self.bull,
            MarketRegime::Normal => &self.normal,
            MarketRegime::Bear => &self.bear,
        }
    }
}

/// Market sentiment configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketConfig {
    pub msi_min: f64,
    pub msi_max: f64,
    /// Chance per month of redrawing the regime
    pub switch_probability: f64,
    pub initial_regime: MarketRegime,
    pub regimes: RegimeTable,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            msi_min: 0.8,
            msi_max: 1.2,
            switch_probability: 0.1,
            initial_regime: MarketRegime::Normal,
            regimes: RegimeTable::default(),
        }
    }
}

/// Mission volume curve
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrowthConfig {
    pub model: GrowthModel,
    /// New missions in month 1
    pub initial_new_missions: f64,
    /// Percent per month (compound model)
    pub adoption_growth_rate: f64,
    /// Saturation level of monthly new missions (logistic model)
    pub carrying_capacity: f64,
    /// Steepness of the S-curve (logistic model)
    pub growth_rate: f64,
    /// Month of fastest growth (logistic model)
    pub inflection_month: f64,
    pub seasonality_amplitude: f64,
    pub seasonality_period: u32,
    /// Months from start to resolution
    pub mission_duration: u32,
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self {
            model: GrowthModel::Compound,
            initial_new_missions: 10.0,
            adoption_growth_rate: 5.0,
            carrying_capacity: 500.0,
            growth_rate: 0.15,
            inflection_month: 36.0,
            seasonality_amplitude: 0.0,
            seasonality_period: 12,
            mission_duration: 3,
        }
    }
}

/// Treasury-funded rewards emission
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewardsConfig {
    /// Tokens per month moved from the treasury into the rewards pool
    pub initial_monthly_emission: f64,
    /// Yearly reduction of the emission
    pub annual_decay: f64,
    /// Share of the pool paid out in a month with successful missions
    pub payout_fraction: f64,
}

impl Default for RewardsConfig {
    fn default() -> Self {
        Self {
            initial_monthly_emission: 0.0,
            annual_decay: 0.0,
            payout_fraction: 1.0,
        }
    }
}

/// Treasury consumption
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DaoConfig {
    /// Operating spend per month in USD
    pub monthly_spend_usd: f64,
}

impl SimulationConfig {
    /// Load from an optional file plus `POLN__*` environment overrides, then validate
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(true));
        }
        let settings = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true),
            )
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        tracing::debug!(?path, horizons = ?config.simulation.years, "configuration loaded");
        Ok(config)
    }

    /// Parse a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a JSON document
    pub fn from_json_str(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content).map_err(|e| SimError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| SimError::Encode(e.to_string()))
    }

    /// Private sale tokens across all tranches
    pub fn private_sale_tokens(&self) -> f64 {
        self.private_sales.iter().map(|s| s.tokens_sold).sum()
    }

    /// Check every parameter against its domain
    pub fn validate(&self) -> Result<()> {
        let sim = &self.simulation;
        if sim.years.is_empty() {
            return Err(SimError::invalid("simulation.years", "at least one horizon is required"));
        }
        if let Some(y) = sim.years.iter().find(|y| **y == 0) {
            return Err(SimError::invalid("simulation.years", format!("horizon must be >= 1, got {}", y)));
        }
        if sim.months_per_year == 0 || sim.months_per_year > MAX_HORIZON_MONTHS {
            return Err(SimError::invalid(
                "simulation.months_per_year",
                format!("must lie in [1, {}], got {}", MAX_HORIZON_MONTHS, sim.months_per_year),
            ));
        }
        if let Some(y) = sim.years.iter().find(|y| sim.months_for(**y) > MAX_HORIZON_MONTHS) {
            return Err(SimError::invalid(
                "simulation.years",
                format!(
                    "horizon of {} years exceeds {} months",
                    y, MAX_HORIZON_MONTHS
                ),
            ));
        }

        non_negative("token.total_supply", self.token.total_supply)?;
        non_negative("token.initial_price", self.token.initial_price)?;
        if self.token.initial_price == 0.0 {
            return Err(SimError::invalid("token.initial_price", "must be > 0"));
        }

        let d = &self.token.distribution;
        unit("token.distribution.builders", d.builders)?;
        unit("token.distribution.dao_treasury", d.dao_treasury)?;
        unit("token.distribution.airdrops", d.airdrops)?;
        unit("token.distribution.initiator_rewards", d.initiator_rewards)?;
        unit("token.distribution.testnet_partners", d.testnet_partners)?;

        for (i, sale) in self.private_sales.iter().enumerate() {
            non_negative(&format!("private_sales[{}].tokens_sold", i), sale.tokens_sold)?;
        }
        let allocated = d.total() * self.token.total_supply + self.private_sale_tokens();
        if allocated > self.token.total_supply * (1.0 + 1e-9) {
            return Err(SimError::invalid(
                "token.distribution",
                format!(
                    "allocations plus private sales ({:.0}) exceed total supply ({:.0})",
                    allocated, self.token.total_supply
                ),
            ));
        }

        let f = &self.fees;
        non_negative("fees.project_cost", f.project_cost)?;
        unit("fees.protocol_fee_rate", f.protocol_fee_rate)?;
        unit("fees.staking_rate", f.staking_rate)?;
        unit("fees.mission_success_rate", f.mission_success_rate)?;
        non_negative("fees.min_fee_tokens", f.min_fee_tokens)?;

        non_negative("pricing.elasticity", self.pricing.elasticity)?;
        unit("pricing.max_monthly_change", self.pricing.max_monthly_change)?;

        let m = &self.market;
        non_negative("market.msi_min", m.msi_min)?;
        non_negative("market.msi_max", m.msi_max)?;
        if m.msi_min > m.msi_max {
            return Err(SimError::invalid(
                "market.msi_min",
                format!("must not exceed msi_max ({} > {})", m.msi_min, m.msi_max),
            ));
        }
        unit("market.switch_probability", m.switch_probability)?;
        let mut probability_sum = 0.0;
        for regime in MarketRegime::ALL {
            let params = m.regimes.get(regime);
            let name = regime.name().to_lowercase();
            unit(&format!("market.regimes.{}.probability", name), params.probability)?;
            non_negative(&format!("market.regimes.{}.msi_multiplier", name), params.msi_multiplier)?;
            non_negative(&format!("market.regimes.{}.demand_multiplier", name), params.demand_multiplier)?;
            probability_sum += params.probability;
        }
        if (probability_sum - 1.0).abs() > 1e-6 {
            return Err(SimError::invalid(
                "market.regimes",
                format!("probabilities must sum to 1, got {}", probability_sum),
            ));
        }

        let g = &self.growth;
        non_negative("growth.initial_new_missions", g.initial_new_missions)?;
        if !g.adoption_growth_rate.is_finite() || g.adoption_growth_rate <= -100.0 {
            return Err(SimError::invalid("growth.adoption_growth_rate", "must be a finite percentage above -100"));
        }
        non_negative("growth.carrying_capacity", g.carrying_capacity)?;
        non_negative("growth.growth_rate", g.growth_rate)?;
        if !g.inflection_month.is_finite() {
            return Err(SimError::invalid("growth.inflection_month", "must be finite"));
        }
        unit("growth.seasonality_amplitude", g.seasonality_amplitude)?;
        if g.seasonality_amplitude >= 1.0 {
            return Err(SimError::invalid("growth.seasonality_amplitude", "must be < 1"));
        }
        if g.seasonality_period == 0 {
            return Err(SimError::invalid("growth.seasonality_period", "must be >= 1"));
        }
        if g.mission_duration == 0 || g.mission_duration > MAX_HORIZON_MONTHS {
            return Err(SimError::invalid(
                "growth.mission_duration",
                format!("must lie in [1, {}], got {}", MAX_HORIZON_MONTHS, g.mission_duration),
            ));
        }

        non_negative("rewards.initial_monthly_emission", self.rewards.initial_monthly_emission)?;
        unit("rewards.annual_decay", self.rewards.annual_decay)?;
        unit("rewards.payout_fraction", self.rewards.payout_fraction)?;

        non_negative("dao.monthly_spend_usd", self.dao.monthly_spend_usd)?;

        Ok(())
    }
}

fn non_negative(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(SimError::invalid(field, format!("must be a finite non-negative number, got {}", value)));
    }
    Ok(())
}

fn unit(field: &str, value: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(SimError::invalid(field, format!("must lie in [0, 1], got {}", value)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_of(err: SimError) -> String {
        match err {
            SimError::InvalidConfig { field, .. } => field,
            other => panic!("expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = SimulationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.simulation.years, vec![1, 3, 5]);
        assert_eq!(config.simulation.months_for(3), 36);
        assert_eq!(config.private_sales.len(), 3);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = SimulationConfig::from_toml_str(
            r#"
            [simulation]
            years = [2]

            [fees]
            staking_rate = 0.25

            [growth]
            model = "logistic"
            "#,
        )
        .unwrap();

        assert_eq!(config.simulation.years, vec![2]);
        assert_eq!(config.simulation.seed, 42);
        assert_eq!(config.fees.staking_rate, 0.25);
        assert_eq!(config.fees.protocol_fee_rate, 0.05);
        assert_eq!(config.growth.model, GrowthModel::Logistic);
        assert_eq!(config.private_sales, default_private_sales());
    }

    #[test]
    fn test_toml_roundtrip_of_defaults() {
        let config = SimulationConfig::default();
        let text = config.to_toml_string().unwrap();
        let parsed = SimulationConfig::from_toml_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_json_document() {
        let config = SimulationConfig::from_json_str(
            r#"{
                "simulation": { "years": [1], "start_date": "2026-03-01" },
                "market": { "initial_regime": "bull" },
                "private_sales": []
            }"#,
        )
        .unwrap();
        assert_eq!(config.market.initial_regime, MarketRegime::Bull);
        assert_eq!(config.simulation.start_date, NaiveDate::from_ymd_opt(2026, 3, 1).unwrap());
        assert!(config.private_sales.is_empty());
    }

    #[test]
    fn test_rejects_rate_out_of_range() {
        let mut config = SimulationConfig::default();
        config.fees.staking_rate = 1.5;
        assert_eq!(field_of(config.validate().unwrap_err()), "fees.staking_rate");
    }

    #[test]
    fn test_rejects_over_allocation() {
        let mut config = SimulationConfig::default();
        config.token.distribution.dao_treasury = 0.9;
        assert_eq!(field_of(config.validate().unwrap_err()), "token.distribution");
    }

    #[test]
    fn test_rejects_bad_regime_probabilities() {
        let mut config = SimulationConfig::default();
        config.market.regimes.bull.probability = 0.5;
        assert_eq!(field_of(config.validate().unwrap_err()), "market.regimes");
    }

    #[test]
    fn test_rejects_inverted_msi_range() {
        let mut config = SimulationConfig::default();
        config.market.msi_min = 1.5;
        assert_eq!(field_of(config.validate().unwrap_err()), "market.msi_min");
    }

    #[test]
    fn test_rejects_zero_duration_and_horizon() {
        let mut config = SimulationConfig::default();
        config.growth.mission_duration = 0;
        assert_eq!(field_of(config.validate().unwrap_err()), "growth.mission_duration");

        let mut config = SimulationConfig::default();
        config.simulation.years = vec![1, 0];
        assert_eq!(field_of(config.validate().unwrap_err()), "simulation.years");
    }

    #[test]
    fn test_rejects_oversized_horizon_and_duration() {
        let mut config = SimulationConfig::default();
        config.simulation.years = vec![1, u32::MAX / 4];
        assert_eq!(field_of(config.validate().unwrap_err()), "simulation.years");
        assert_eq!(config.simulation.months_for(u32::MAX / 4), u32::MAX);

        let mut config = SimulationConfig::default();
        config.simulation.years = vec![100];
        assert!(config.validate().is_ok());
        config.simulation.years = vec![101];
        assert_eq!(field_of(config.validate().unwrap_err()), "simulation.years");

        let mut config = SimulationConfig::default();
        config.simulation.months_per_year = u32::MAX;
        assert_eq!(field_of(config.validate().unwrap_err()), "simulation.months_per_year");

        let mut config = SimulationConfig::default();
        config.growth.mission_duration = u32::MAX;
        assert_eq!(field_of(config.validate().unwrap_err()), "growth.mission_duration");
    }

    #[test]
    fn test_rejects_zero_price() {
        let mut config = SimulationConfig::default();
        config.token.initial_price = 0.0;
        assert_eq!(field_of(config.validate().unwrap_err()), "token.initial_price");
    }

    #[test]
    fn test_initiator_schedule_inherits_builders() {
        let mut vesting = VestingConfig::default();
        assert_eq!(vesting.initiator_schedule(), vesting.builders);

        let own = CohortSchedule {
            lockup_months: 3,
            vesting_months: 6,
        };
        vesting.initiator_rewards = Some(own);
        assert_eq!(vesting.initiator_schedule(), own);
    }
}
