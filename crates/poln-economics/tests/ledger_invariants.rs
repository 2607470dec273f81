//! Integration tests for the monthly ledger
//!
//! These tests run full horizons and check the accounting invariants that
//! must hold for every month of every run.

use poln_economics::{
    simulate, CohortSchedule, GrowthModel, MonthlyRecord, SimulationConfig, Simulator,
    MAX_HORIZON_MONTHS, MAX_MONTHLY_MISSIONS,
};
use proptest::prelude::*;

fn assert_invariants(config: &SimulationConfig, records: &[MonthlyRecord]) {
    let initial_supply = config.token.total_supply;
    let cap = config.pricing.max_monthly_change;
    let mut previous_price = config.token.initial_price;

    for r in records {
        assert!(r.circulating_supply >= 0.0, "month {} circulating < 0", r.month);
        assert!(
            r.circulating_supply <= r.total_supply + 1e-6,
            "month {} circulating exceeds total",
            r.month
        );
        assert!(r.dao_treasury >= 0.0, "month {} treasury < 0", r.month);
        assert!(r.rewards_pool >= 0.0, "month {} rewards pool < 0", r.month);

        let conserved = r.total_supply + r.total_burnt_tokens;
        assert!(
            (conserved - initial_supply).abs() <= initial_supply * 1e-9 + 1e-6,
            "month {} supply not conserved: {}",
            r.month,
            conserved
        );

        let change = r.token_price / previous_price - 1.0;
        assert!(change.abs() <= cap + 1e-12, "month {} price moved {}", r.month, change);
        assert!(r.token_price > 0.0);
        previous_price = r.token_price;

        assert!(r.successful_missions <= r.completed_missions);
        assert!(r.tokens_burnt <= r.tokens_staked + 1e-9);
    }
}

mod horizon_tests {
    use super::*;

    #[test]
    fn test_default_horizons_hold_invariants() {
        let config = SimulationConfig::default();
        for years in [1, 3, 5] {
            let run = simulate(&config, years).unwrap();
            assert_eq!(run.records.len() as u32, years * 12);
            assert_invariants(&config, &run.records);
        }
    }

    #[test]
    fn test_logistic_growth_with_treasury_flows() {
        let mut config = SimulationConfig::default();
        config.growth.model = GrowthModel::Logistic;
        config.growth.seasonality_amplitude = 0.3;
        config.rewards.initial_monthly_emission = 2_000_000.0;
        config.rewards.annual_decay = 0.2;
        config.rewards.payout_fraction = 0.5;
        config.dao.monthly_spend_usd = 50_000.0;

        let run = simulate(&config, 10).unwrap();
        assert_invariants(&config, &run.records);
        assert!(run.summary.total_rewards_distributed > 0.0);
        assert!(run.summary.total_treasury_spent > 0.0);

        let late_missions = run.records[100].new_missions;
        let early_missions = run.records[0].new_missions;
        assert!(late_missions > early_missions);
    }

    #[test]
    fn test_all_vesting_released_over_long_horizon() {
        let mut config = SimulationConfig::default();
        config.vesting.airdrops = Some(CohortSchedule {
            lockup_months: 6,
            vesting_months: 12,
        });
        config.vesting.testnet_partners_immediate = false;

        let mut simulator = Simulator::new(config.clone()).unwrap();
        let records = simulator.run(60).unwrap();

        assert!(simulator.ledger().locked_tokens() < 1e-3);
        let vested: f64 = records.iter().map(|r| r.tokens_vested).sum();
        let d = &config.token.distribution;
        let expected = config.token.total_supply
            * (d.builders + d.initiator_rewards + d.airdrops + d.testnet_partners)
            + config.private_sale_tokens()
            - 20_000_000.0; // public tranche is liquid at genesis
        assert!((vested - expected).abs() < 1.0, "vested {} expected {}", vested, expected);
    }

    #[test]
    fn test_no_vesting_during_builder_lockup_without_private_sales() {
        let mut config = SimulationConfig::default();
        config.private_sales.clear();
        let run = simulate(&config, 1).unwrap();
        assert!(run.records.iter().all(|r| r.tokens_vested == 0.0));
    }

    #[test]
    fn test_runaway_adoption_stays_bounded() {
        for rate in [50.0, 1_000.0] {
            let mut config = SimulationConfig::default();
            config.growth.adoption_growth_rate = rate;

            let run = simulate(&config, 10).unwrap();
            assert_eq!(run.records.len(), 120);
            assert_invariants(&config, &run.records);

            let cap = MAX_MONTHLY_MISSIONS as u64;
            assert!(run.records.iter().all(|r| r.new_missions <= cap));
            // Saturated curve scaled by at worst the bear demand multiplier
            assert!(run.records[119].new_missions >= (MAX_MONTHLY_MISSIONS * 0.85) as u64);
            assert!(run.summary.missions_started >= run.summary.missions_completed);
            assert!(run.summary.missions_completed >= run.summary.missions_succeeded);
        }
    }

    #[test]
    fn test_longest_mission_duration_runs() {
        let mut config = SimulationConfig::default();
        config.growth.mission_duration = MAX_HORIZON_MONTHS;

        let run = simulate(&config, 5).unwrap();
        assert!(run.records.iter().all(|r| r.completed_missions == 0));
        assert_eq!(run.records[59].ongoing_missions, run.summary.missions_started);
        assert_eq!(run.summary.total_burnt_tokens, 0.0);
    }

    #[test]
    fn test_demo_config_runs() {
        let config =
            SimulationConfig::from_toml_str(include_str!("../../../demos/logistic-bear.toml")).unwrap();
        assert_eq!(config.growth.model, GrowthModel::Logistic);
        assert_eq!(config.private_sales.len(), 2);

        for years in config.simulation.years.clone() {
            let run = simulate(&config, years).unwrap();
            assert_invariants(&config, &run.records);
        }
    }

    #[test]
    fn test_summary_matches_last_record() {
        let config = SimulationConfig::default();
        let run = simulate(&config, 3).unwrap();
        let last = run.records.last().unwrap();

        assert_eq!(run.summary.final_price, last.token_price);
        assert_eq!(run.summary.final_circulating_supply, last.circulating_supply);
        assert_eq!(run.summary.total_burnt_tokens, last.total_burnt_tokens);
        assert_eq!(run.summary.final_dao_treasury, last.dao_treasury);
        assert_eq!(
            run.summary.bull_months + run.summary.normal_months + run.summary.bear_months,
            36
        );
        assert!(run.summary.min_price <= run.summary.final_price);
        assert!(run.summary.max_price >= run.summary.final_price);
    }
}

mod property_tests {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_invariants_hold(
            seed in any::<u64>(),
            success in 0.0f64..=1.0,
            staking in 0.0f64..=1.0,
            elasticity in 0.0f64..10.0,
            switch in 0.0f64..=1.0,
            growth in 0.0f64..15.0,
        ) {
            let mut config = SimulationConfig::default();
            config.simulation.seed = seed;
            config.fees.mission_success_rate = success;
            config.fees.staking_rate = staking;
            config.pricing.elasticity = elasticity;
            config.market.switch_probability = switch;
            config.growth.adoption_growth_rate = growth;

            let run = simulate(&config, 3).unwrap();
            prop_assert_eq!(run.records.len(), 36);
            assert_invariants(&config, &run.records);
        }

        #[test]
        fn prop_deterministic_for_seed(seed in any::<u64>()) {
            let mut config = SimulationConfig::default();
            config.simulation.seed = seed;
            let a = simulate(&config, 1).unwrap();
            let b = simulate(&config, 1).unwrap();
            prop_assert_eq!(a.records, b.records);
        }
    }
}
