//! Demand-driven price response.
//!
//! `Δ = clamp(PEC · net_demand / circulating · MSI, ±max_monthly_change)`

use crate::config::PricingConfig;

/// Relative price change for one month
pub fn price_change(net_demand: f64, circulating: f64, msi: f64, config: &PricingConfig) -> f64 {
    if circulating <= 0.0 {
        return 0.0;
    }
    let ratio = net_demand / circulating;
    let change = config.elasticity * ratio * msi;
    let cap = config.max_monthly_change;
    if change.abs() > cap {
        tracing::trace!(change, cap, "price change clamped");
    }
    change.clamp(-cap, cap)
}

/// Price after applying one month's change
pub fn next_price(price: f64, net_demand: f64, circulating: f64, msi: f64, config: &PricingConfig) -> f64 {
    price * (1.0 + price_change(net_demand, circulating, msi, config))
}
