//! # Simulation Engine
//!
//! Advances the [`Ledger`] one month at a time. Step order:
//!
//! 1. regime transition, MSI draw
//! 2. vesting releases
//! 3. new missions from the growth curve
//! 4. resolution of missions ending this month (fees, stakes, burns)
//! 5. rewards emission and payout
//! 6. DAO operating spend
//! 7. supply clamps and price update
//! 8. record

use crate::config::SimulationConfig;
use crate::error::Result;
use crate::growth::GrowthCurve;
use crate::ledger::{Ledger, MonthlyRecord};
use crate::market::{MarketModel, MarketRegime};
use crate::missions::FeeModel;
use crate::pricing;
use chrono::Months;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Month-by-month tokenomics simulator
pub struct Simulator {
    config: SimulationConfig,
    ledger: Ledger,
    market: MarketModel,
    growth: GrowthCurve,
    fees: FeeModel,
    rng: ChaCha8Rng,
}

impl Simulator {
    /// Validate `config` and start from genesis
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        let ledger = Ledger::genesis(&config);
        let market = MarketModel::new(&config.market)?;
        let growth = GrowthCurve::new(&config.growth);
        let fees = FeeModel::new(&config.fees);
        let rng = ChaCha8Rng::seed_from_u64(config.simulation.seed);

        Ok(Self {
            config,
            ledger,
            market,
            growth,
            fees,
            rng,
        })
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Calendar label (`YYYY-MM`) of a 1-based month
    pub fn period_label(&self, month: u32) -> String {
        let start = self.config.simulation.start_date;
        start
            .checked_add_months(Months::new(month.saturating_sub(1)))
            .unwrap_or(start)
            .format("%Y-%m")
            .to_string()
    }

    /// Tokens moved into the rewards pool in `month`
    pub fn reward_emission(&self, month: u32) -> f64 {
        let rewards = &self.config.rewards;
        let year = (month.saturating_sub(1) / self.config.simulation.months_per_year) as i32;
        rewards.initial_monthly_emission * (1.0 - rewards.annual_decay).powi(year)
    }

    /// Advance one month
    pub fn step(&mut self) -> Result<MonthlyRecord> {
        let month = self.ledger.month + 1;

        let regime = self.market.transition(&mut self.rng);
        let msi = self.market.sample_msi(&mut self.rng);

        let vested = self.ledger.release_vesting(month);
        self.ledger.clamp_circulating();

        let demand_multiplier = self.market.params().demand_multiplier;
        let new_missions = self.growth.next_missions(month, demand_multiplier);
        self.ledger
            .missions
            .start(month, new_missions, self.config.growth.mission_duration);

        let completed = self.ledger.missions.complete(month);
        let succeeded = self.fees.draw_successes(completed, &mut self.rng)?;
        let settlement = self.fees.settle(completed, succeeded, self.ledger.token_price);
        let burnt = self.ledger.apply_settlement(&settlement);

        self.ledger.fund_rewards(self.reward_emission(month));
        let rewards_distributed = if settlement.succeeded > 0 {
            self.ledger.pay_rewards(self.config.rewards.payout_fraction)
        } else {
            0.0
        };

        let spend_usd = self.config.dao.monthly_spend_usd;
        let treasury_spent = if spend_usd > 0.0 && self.ledger.token_price > 0.0 {
            self.ledger.spend_treasury(spend_usd / self.ledger.token_price)
        } else {
            0.0
        };

        self.ledger.clamp_circulating();

        self.ledger.token_price = pricing::next_price(
            self.ledger.token_price,
            settlement.net_demand,
            self.ledger.circulating_supply,
            msi,
            &self.config.pricing,
        );
        self.ledger.month = month;

        let record = MonthlyRecord {
            month,
            period: self.period_label(month),
            regime,
            market_sentiment_index: msi,
            circulating_supply: self.ledger.circulating_supply,
            total_supply: self.ledger.total_supply,
            token_price: self.ledger.token_price,
            net_token_demand: settlement.net_demand,
            tokens_staked: settlement.tokens_staked,
            tokens_burnt: burnt,
            total_burnt_tokens: self.ledger.total_burnt,
            tokens_fee_distributed: settlement.fee_distributed,
            tokens_fee_to_dao: settlement.fee_to_dao,
            dao_treasury: self.ledger.dao_treasury,
            tokens_vested: vested,
            rewards_pool: self.ledger.rewards_pool,
            rewards_distributed,
            treasury_spent,
            new_missions,
            completed_missions: completed,
            successful_missions: settlement.succeeded,
            ongoing_missions: self.ledger.missions.ongoing(),
        };

        tracing::debug!(
            month,
            regime = %regime,
            price = record.token_price,
            circulating = record.circulating_supply,
            completed,
            failed = settlement.failed(),
            burnt,
            "month simulated"
        );

        Ok(record)
    }

    /// Advance `months` months
    pub fn run(&mut self, months: u32) -> Result<Vec<MonthlyRecord>> {
        (0..months).map(|_| self.step()).collect()
    }
}

/// Aggregate view of one run
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub years: u32,
    pub months: u32,
    pub seed: u64,
    pub initial_price: f64,
    pub final_price: f64,
    pub min_price: f64,
    pub max_price: f64,
    pub final_circulating_supply: f64,
    pub final_total_supply: f64,
    pub total_burnt_tokens: f64,
    pub final_dao_treasury: f64,
    pub missions_started: u64,
    pub missions_completed: u64,
    pub missions_succeeded: u64,
    /// Succeeded / completed, 0 when nothing completed
    pub success_ratio: f64,
    pub total_rewards_distributed: f64,
    pub total_treasury_spent: f64,
    pub bull_months: u32,
    pub normal_months: u32,
    pub bear_months: u32,
}

impl RunSummary {
    pub fn from_records(years: u32, seed: u64, initial_price: f64, records: &[MonthlyRecord]) -> Self {
        let last = records.last();
        let missions_completed = saturating_total(records, |r| r.completed_missions);
        let missions_succeeded = saturating_total(records, |r| r.successful_missions);
        let regime_months = |regime: MarketRegime| records.iter().filter(|r| r.regime == regime).count() as u32;

        Self {
            years,
            months: records.len() as u32,
            seed,
            initial_price,
            final_price: last.map_or(initial_price, |r| r.token_price),
            min_price: records.iter().map(|r| r.token_price).fold(initial_price, f64::min),
            max_price: records.iter().map(|r| r.token_price).fold(initial_price, f64::max),
            final_circulating_supply: last.map_or(0.0, |r| r.circulating_supply),
            final_total_supply: last.map_or(0.0, |r| r.total_supply),
            total_burnt_tokens: last.map_or(0.0, |r| r.total_burnt_tokens),
            final_dao_treasury: last.map_or(0.0, |r| r.dao_treasury),
            missions_started: saturating_total(records, |r| r.new_missions),
            missions_completed,
            missions_succeeded,
            success_ratio: if missions_completed > 0 {
                missions_succeeded as f64 / missions_completed as f64
            } else {
                0.0
            },
            total_rewards_distributed: records.iter().map(|r| r.rewards_distributed).sum(),
            total_treasury_spent: records.iter().map(|r| r.treasury_spent).sum(),
            bull_months: regime_months(MarketRegime::Bull),
            normal_months: regime_months(MarketRegime::Normal),
            bear_months: regime_months(MarketRegime::Bear),
        }
    }
}

fn saturating_total(records: &[MonthlyRecord], count: impl Fn(&MonthlyRecord) -> u64) -> u64 {
    records.iter().fold(0u64, |n, r| n.saturating_add(count(r)))
}

/// Records and summary of one horizon
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimulationRun {
    pub years: u32,
    pub records: Vec<MonthlyRecord>,
    pub summary: RunSummary,
}

/// Simulate a single horizon from genesis
pub fn simulate(config: &SimulationConfig, years: u32) -> Result<SimulationRun> {
    let months = config.simulation.months_for(years);
    tracing::info!(years, months, seed = config.simulation.seed, "simulating horizon");

    let mut simulator = Simulator::new(config.clone())?;
    let records = simulator.run(months)?;
    let summary = RunSummary::from_records(years, config.simulation.seed, config.token.initial_price, &records);

    tracing::info!(
        years,
        final_price = summary.final_price,
        circulating = summary.final_circulating_supply,
        burnt = summary.total_burnt_tokens,
        treasury = summary.final_dao_treasury,
        "horizon complete"
    );

    Ok(SimulationRun {
        years,
        records,
        summary,
    })
}

/// One independent run per configured horizon
pub fn run_horizons(config: &SimulationConfig) -> Result<Vec<SimulationRun>> {
    config
        .simulation
        .years
        .iter()
        .map(|&years| simulate(config, years))
        .collect()
}
