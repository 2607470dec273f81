//! # Missions
//!
//! Missions start in monthly cohorts and resolve together after
//! `mission_duration` months. Each resolved mission pays a protocol fee in
//! $POLN and the fellowship stakes part of it:
//!
//! | Outcome | Fee | Stake | Net demand |
//! |---------|-----|-------|------------|
//! | Success | distributed to the fellowship | returned | + fee |
//! | Failure | sent to the DAO treasury | burnt | + fee − stake |

use crate::config::FeeConfig;
use crate::error::{Result, SimError};
use rand::Rng;
use rand_distr::{Binomial, Distribution};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Missions started in the same month
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissionCohort {
    pub start_month: u32,
    /// Month in which the cohort resolves
    pub end_month: u32,
    pub count: u64,
}

/// Active missions ordered by end month
#[derive(Clone, Debug, Default)]
pub struct MissionBook {
    active: VecDeque<MissionCohort>,
}

impl MissionBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start `count` missions in `month` lasting `duration` months
    pub fn start(&mut self, month: u32, count: u64, duration: u32) {
        if count == 0 {
            return;
        }
        let end_month = month.saturating_add(duration.max(1) - 1);
        // Constant duration keeps the queue sorted by end month
        self.active.push_back(MissionCohort {
            start_month: month,
            end_month,
            count,
        });
    }

    /// Remove and count every mission ending in `month`
    pub fn complete(&mut self, month: u32) -> u64 {
        let mut completed: u64 = 0;
        while let Some(cohort) = self.active.front() {
            if cohort.end_month > month {
                break;
            }
            completed = completed.saturating_add(cohort.count);
            self.active.pop_front();
        }
        completed
    }

    /// Missions still running
    pub fn ongoing(&self) -> u64 {
        self.active.iter().fold(0u64, |n, c| n.saturating_add(c.count))
    }
}

/// Token flows produced by resolving one month's missions
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Settlement {
    pub completed: u64,
    pub succeeded: u64,
    /// Fee per mission in tokens
    pub fee_per_mission: f64,
    pub tokens_staked: f64,
    pub tokens_burnt: f64,
    pub fee_distributed: f64,
    pub fee_to_dao: f64,
    pub net_demand: f64,
}

impl Settlement {
    pub fn failed(&self) -> u64 {
        self.completed.saturating_sub(self.succeeded)
    }
}

/// Converts mission outcomes into token flows at a given price
#[derive(Clone, Debug)]
pub struct FeeModel {
    config: FeeConfig,
}

impl FeeModel {
    pub fn new(config: &FeeConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Protocol fee for one mission in tokens
    pub fn fee_tokens(&self, price: f64) -> f64 {
        let fee_usd = self.config.project_cost * self.config.protocol_fee_rate;
        let fee = if price > 0.0 { fee_usd / price } else { 0.0 };
        fee.max(self.config.min_fee_tokens)
    }

    /// Draw how many of `completed` missions succeeded
    pub fn draw_successes<R: Rng + ?Sized>(&self, completed: u64, rng: &mut R) -> Result<u64> {
        if completed == 0 {
            return Ok(0);
        }
        let binomial = Binomial::new(completed, self.config.mission_success_rate)
            .map_err(|e| SimError::invalid("fees.mission_success_rate", e.to_string()))?;
        Ok(binomial.sample(rng))
    }

    /// Token flows for `completed` missions of which `succeeded` succeeded
    pub fn settle(&self, completed: u64, succeeded: u64, price: f64) -> Settlement {
        let succeeded = succeeded.min(completed);
        let failed = (completed - succeeded) as f64;
        let fee = self.fee_tokens(price);
        let stake = fee * self.config.staking_rate;

        Settlement {
            completed,
            succeeded,
            fee_per_mission: fee,
            tokens_staked: stake * completed as f64,
            tokens_burnt: stake * failed,
            fee_distributed: fee * succeeded as f64,
            fee_to_dao: fee * failed,
            net_demand: fee * succeeded as f64 + (fee - stake) * failed,
        }
    }
}
