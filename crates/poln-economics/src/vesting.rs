//! # Vesting Schedules
//!
//! Lockup followed by linear monthly release, one schedule per cohort.
//!
//! ```text
//! tokens
//!   ▲                      ┌──────── total
//!   │                   ╱
//!   │                ╱     total / vesting_months per month
//!   │             ╱
//!   │────────────┘
//!   └────────────┬──────────┬──────▶ month
//!             lockup    lockup + vesting
//! ```
//!
//! A schedule with `vesting_months == 0` is a cliff: everything unlocks in
//! month `lockup + 1`, or at genesis when there is no lockup.

use crate::config::{CohortSchedule, PrivateSale};
use serde::{Deserialize, Serialize};

/// Stakeholder cohort a schedule belongs to
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cohort {
    Builders,
    InitiatorRewards,
    Airdrops,
    TestnetPartners,
    PrivateSale(String),
}

impl Cohort {
    pub fn name(&self) -> String {
        match self {
            Self::Builders => "builders".to_string(),
            Self::InitiatorRewards => "initiator_rewards".to_string(),
            Self::Airdrops => "airdrops".to_string(),
            Self::TestnetPartners => "testnet_partners".to_string(),
            Self::PrivateSale(name) => format!("private_sale:{}", name),
        }
    }
}

/// Release curve for one cohort
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VestingSchedule {
    pub cohort: Cohort,
    /// Tokens under this schedule
    pub total: f64,
    pub lockup_months: u32,
    pub vesting_months: u32,
    /// Released so far, never above `total`
    released: f64,
}

impl VestingSchedule {
    pub fn new(cohort: Cohort, total: f64, lockup_months: u32, vesting_months: u32) -> Self {
        Self {
            cohort,
            total: total.max(0.0),
            lockup_months,
            vesting_months,
            released: 0.0,
        }
    }

    pub fn from_cohort(cohort: Cohort, total: f64, schedule: CohortSchedule) -> Self {
        Self::new(cohort, total, schedule.lockup_months, schedule.vesting_months)
    }

    pub fn from_private_sale(sale: &PrivateSale) -> Self {
        Self::new(
            Cohort::PrivateSale(sale.name.clone()),
            sale.tokens_sold,
            sale.lockup_period,
            sale.vesting_period,
        )
    }

    /// Schedule that never releases within any horizon
    pub fn locked(cohort: Cohort, total: f64) -> Self {
        Self::new(cohort, total, u32::MAX, 0)
    }

    /// Tokens released so far
    pub fn released(&self) -> f64 {
        self.released
    }

    /// Tokens still locked
    pub fn remaining(&self) -> f64 {
        (self.total - self.released).max(0.0)
    }

    /// Whether the whole amount is liquid at genesis
    pub fn is_liquid_at_genesis(&self) -> bool {
        self.lockup_months == 0 && self.vesting_months == 0
    }

    /// Monthly amount during the vesting window
    pub fn per_month(&self) -> f64 {
        if self.vesting_months == 0 {
            self.total
        } else {
            self.total / self.vesting_months as f64
        }
    }

    /// Release the genesis portion, if any
    pub fn genesis_release(&mut self) -> f64 {
        if self.is_liquid_at_genesis() {
            self.take(self.total)
        } else {
            0.0
        }
    }

    /// Tokens unlocked in `month` (1-based)
    pub fn release(&mut self, month: u32) -> f64 {
        if self.remaining() <= 0.0 || month <= self.lockup_months {
            return 0.0;
        }
        let vesting_end = self.lockup_months.saturating_add(self.vesting_months.max(1));
        if month > vesting_end {
            return 0.0;
        }
        let amount = if month == vesting_end {
            // Float residue from the linear split lands in the final month
            self.remaining()
        } else {
            self.per_month()
        };
        self.take(amount)
    }

    fn take(&mut self, amount: f64) -> f64 {
        let amount = amount.min(self.remaining());
        self.released += amount;
        amount
    }
}
