//! # Monthly Ledger
//!
//! Economic state advanced by the simulator, and the immutable record emitted
//! for each simulated month.
//!
//! ## Genesis
//!
//! ```text
//! total supply
//! ├── builders            (vesting)
//! ├── initiator rewards   (vesting, builders schedule by default)
//! ├── airdrops            (locked unless scheduled)
//! ├── testnet & partners  (liquid at genesis by default)
//! ├── DAO treasury
//! ├── private sales       (per-tranche vesting)
//! └── remainder           (circulating)
//! ```

use crate::config::SimulationConfig;
use crate::market::MarketRegime;
use crate::missions::{MissionBook, Settlement};
use crate::vesting::{Cohort, VestingSchedule};
use serde::{Deserialize, Serialize};

/// One simulated month
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRecord {
    /// 1-based month index
    pub month: u32,
    /// Calendar month (`YYYY-MM`)
    pub period: String,
    pub regime: MarketRegime,
    pub market_sentiment_index: f64,
    pub circulating_supply: f64,
    pub total_supply: f64,
    /// USD
    pub token_price: f64,
    pub net_token_demand: f64,
    pub tokens_staked: f64,
    pub tokens_burnt: f64,
    pub total_burnt_tokens: f64,
    pub tokens_fee_distributed: f64,
    pub tokens_fee_to_dao: f64,
    pub dao_treasury: f64,
    /// Released from vesting this month
    pub tokens_vested: f64,
    pub rewards_pool: f64,
    pub rewards_distributed: f64,
    pub treasury_spent: f64,
    pub new_missions: u64,
    pub completed_missions: u64,
    pub successful_missions: u64,
    pub ongoing_missions: u64,
}

/// Mutable economic state
#[derive(Clone, Debug)]
pub struct Ledger {
    /// Last completed month (0 at genesis)
    pub month: u32,
    pub initial_total_supply: f64,
    pub total_supply: f64,
    pub circulating_supply: f64,
    pub token_price: f64,
    pub dao_treasury: f64,
    pub rewards_pool: f64,
    pub total_burnt: f64,
    pub vesting: Vec<VestingSchedule>,
    pub missions: MissionBook,
}

impl Ledger {
    /// Allocate supply and release whatever is liquid at genesis
    pub fn genesis(config: &SimulationConfig) -> Self {
        let total = config.token.total_supply;
        let dist = &config.token.distribution;
        let vesting_config = &config.vesting;

        let builders = total * dist.builders;
        let initiator = total * dist.initiator_rewards;
        let airdrops = total * dist.airdrops;
        let testnet = total * dist.testnet_partners;
        let treasury = total * dist.dao_treasury;

        let mut vesting = vec![
            VestingSchedule::from_cohort(Cohort::Builders, builders, vesting_config.builders),
            VestingSchedule::from_cohort(
                Cohort::InitiatorRewards,
                initiator,
                vesting_config.initiator_schedule(),
            ),
            match vesting_config.airdrops {
                Some(schedule) => VestingSchedule::from_cohort(Cohort::Airdrops, airdrops, schedule),
                None => VestingSchedule::locked(Cohort::Airdrops, airdrops),
            },
        ];
        if !vesting_config.testnet_partners_immediate {
            vesting.push(VestingSchedule::from_cohort(
                Cohort::TestnetPartners,
                testnet,
                vesting_config.builders,
            ));
        }
        vesting.extend(config.private_sales.iter().map(VestingSchedule::from_private_sale));

        let held_back = builders + initiator + airdrops + testnet + treasury + config.private_sale_tokens();
        let mut circulating = (total - held_back).max(0.0);
        if vesting_config.testnet_partners_immediate {
            circulating += testnet;
        }
        for schedule in vesting.iter_mut() {
            circulating += schedule.genesis_release();
        }

        for schedule in &vesting {
            tracing::trace!(
                cohort = %schedule.cohort.name(),
                tokens = schedule.total,
                lockup = schedule.lockup_months,
                vesting = schedule.vesting_months,
                "vesting schedule"
            );
        }
        tracing::debug!(
            total,
            circulating,
            treasury,
            cohorts = vesting.len(),
            "genesis allocation"
        );

        Self {
            month: 0,
            initial_total_supply: total,
            total_supply: total,
            circulating_supply: circulating.min(total),
            token_price: config.token.initial_price,
            dao_treasury: treasury,
            rewards_pool: 0.0,
            total_burnt: 0.0,
            vesting,
            missions: MissionBook::new(),
        }
    }

    /// Release every cohort's tokens for `month` into circulation
    pub fn release_vesting(&mut self, month: u32) -> f64 {
        let released: f64 = self.vesting.iter_mut().map(|s| s.release(month)).sum();
        self.circulating_supply += released;
        released
    }

    /// Tokens still locked in vesting
    pub fn locked_tokens(&self) -> f64 {
        self.vesting.iter().map(|s| s.remaining()).sum()
    }

    /// Burn stakes of failed missions and route their fees to the treasury.
    ///
    /// Stakes are held in circulating tokens, so at most the circulating
    /// supply burns. Returns the tokens actually burnt.
    pub fn apply_settlement(&mut self, settlement: &Settlement) -> f64 {
        let burnt = settlement.tokens_burnt.clamp(0.0, self.circulating_supply.max(0.0));
        if burnt < settlement.tokens_burnt {
            tracing::trace!(
                month = self.month + 1,
                requested = settlement.tokens_burnt,
                burnt,
                "burn capped at circulating supply"
            );
        }
        self.total_burnt += burnt;
        self.total_supply -= burnt;
        self.dao_treasury += settlement.fee_to_dao;
        self.circulating_supply -= burnt;
        burnt
    }

    /// Move up to `emission` tokens from the treasury into the rewards pool
    pub fn fund_rewards(&mut self, emission: f64) -> f64 {
        let funded = emission.min(self.dao_treasury).max(0.0);
        self.dao_treasury -= funded;
        self.rewards_pool += funded;
        funded
    }

    /// Pay `fraction` of the rewards pool into circulation
    pub fn pay_rewards(&mut self, fraction: f64) -> f64 {
        let paid = self.rewards_pool * fraction;
        self.rewards_pool -= paid;
        self.circulating_supply += paid;
        paid
    }

    /// Release up to `tokens` from the treasury into circulation
    pub fn spend_treasury(&mut self, tokens: f64) -> f64 {
        let spent = tokens.min(self.dao_treasury).max(0.0);
        self.dao_treasury -= spent;
        self.circulating_supply += spent;
        spent
    }

    /// Keep circulating supply within `[0, total_supply]`
    pub fn clamp_circulating(&mut self) {
        if self.circulating_supply > self.total_supply {
            tracing::trace!(
                month = self.month + 1,
                excess = self.circulating_supply - self.total_supply,
                "circulating supply clamped to total supply"
            );
            self.circulating_supply = self.total_supply;
        }
        if self.circulating_supply < 0.0 {
            self.circulating_supply = 0.0;
        }
    }
}
