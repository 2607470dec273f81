//! Run summaries: JSON artifact and the console interpretation block.

use crate::error::Result;
use poln_economics::{RunSummary, SimulationRun, SYMBOL};
use std::fmt::Write as _;
use std::path::Path;

/// Write the summary as pretty JSON
pub fn write_summary(path: &Path, summary: &RunSummary) -> Result<()> {
    let json = serde_json::to_string_pretty(summary)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Human-readable interpretation of a finished run
pub fn interpretation(run: &SimulationRun) -> String {
    let s = &run.summary;
    let price_change = if s.initial_price > 0.0 {
        (s.final_price / s.initial_price - 1.0) * 100.0
    } else {
        0.0
    };

    let mut out = String::new();
    let _ = writeln!(out, "--- Interpretation after {} years ---", run.years);
    let _ = writeln!(out, "Final Token Price: ${:.4} ({:+.2}%)", s.final_price, price_change);
    let _ = writeln!(out, "Price Range: ${:.4} - ${:.4}", s.min_price, s.max_price);
    let _ = writeln!(out, "Final Circulating Supply: {:.2} {}", s.final_circulating_supply, SYMBOL);
    let _ = writeln!(out, "Total Tokens Burnt: {:.2} {}", s.total_burnt_tokens, SYMBOL);
    let _ = writeln!(out, "DAO Treasury Balance: {:.2} {}", s.final_dao_treasury, SYMBOL);
    let _ = writeln!(
        out,
        "Missions: {} started, {} completed, {:.1}% successful",
        s.missions_started,
        s.missions_completed,
        s.success_ratio * 100.0
    );
    if s.total_rewards_distributed > 0.0 || s.total_treasury_spent > 0.0 {
        let _ = writeln!(
            out,
            "Treasury Outflows: {:.2} rewards, {:.2} operations",
            s.total_rewards_distributed, s.total_treasury_spent
        );
    }
    let _ = writeln!(
        out,
        "Market Regimes: {} bull / {} normal / {} bear months",
        s.bull_months, s.normal_months, s.bear_months
    );
    out.push_str("----------------------------------------");
    out
}
