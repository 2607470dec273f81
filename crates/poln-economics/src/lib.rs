//! # POLN Economics - Tokenomics Simulation Model
//!
//! Month-by-month projection of the $POLN token economy: supply, price,
//! staking, burns, rewards and the DAO treasury.
//!
//! ## Key Features
//!
//! - **Cohort vesting**: lockup then linear release for builders, initiators,
//!   airdrops and every private sale tranche
//! - **Mission growth**: compound or logistic adoption with seasonality
//! - **Market regimes**: bull/normal/bear switching scaling sentiment and demand
//! - **Fee economics**: protocol fees, fellowship stakes burnt on failure
//! - **Treasury**: rewards emission and operating spend drawn from the DAO
//!
//! ## Monthly Flow
//!
//! ```text
//! ┌────────────┐   ┌─────────┐   ┌──────────┐   ┌─────────────┐   ┌───────┐
//! │ regime/MSI │──▶│ vesting │──▶│ missions │──▶│ rewards/DAO │──▶│ price │──▶ record
//! └────────────┘   └─────────┘   └──────────┘   └─────────────┘   └───────┘
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod growth;
pub mod ledger;
pub mod market;
pub mod missions;
pub mod pricing;
pub mod vesting;

// Re-exports
pub use config::{
    CohortSchedule, DaoConfig, FeeConfig, GrowthConfig, MarketConfig, PricingConfig, PrivateSale,
    RewardsConfig, SimulationConfig, SimulationSettings, TokenConfig, TokenDistribution, VestingConfig,
    MAX_HORIZON_MONTHS,
};
pub use engine::{run_horizons, simulate, RunSummary, SimulationRun, Simulator};
pub use error::{Result, SimError};
pub use growth::{GrowthCurve, GrowthModel, MAX_MONTHLY_MISSIONS};
pub use ledger::{Ledger, MonthlyRecord};
pub use market::{MarketModel, MarketRegime};
pub use missions::{FeeModel, MissionBook, MissionCohort, Settlement};
pub use vesting::{Cohort, VestingSchedule};

/// $POLN token constants
pub mod constants {
    /// Token symbol
    pub const SYMBOL: &str = "POLN";

    /// Token name
    pub const NAME: &str = "Pollen";

    /// Default configuration file name
    pub const DEFAULT_CONFIG_FILE: &str = "poln.toml";

    /// Default results directory
    pub const DEFAULT_RESULTS_DIR: &str = "results";
}

pub use constants::*;
