use commcalc_common::input::CommissionInput;
use tracing::debug;

use crate::tiers::{count_commission_rate, margin_commission_rate};

/// Average number of weeks in a month.
pub const WEEKS_PER_MONTH: f64 = 4.3;

/// Everything derived from one [`CommissionInput`]. Rates are in percentage points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Commission {
    pub monthly_gross_profit: f64,
    pub margin_commission_rate: f64,
    pub toa_commission_rate: f64,
    pub monthly_commission: f64,
}

pub fn monthly_gross_profit(input: &CommissionInput) -> f64 {
    input.gm_per_week() * WEEKS_PER_MONTH * input.toa()
}

pub fn compute(input: &CommissionInput) -> Commission {
    let monthly_gross_profit = monthly_gross_profit(input);
    let margin_commission_rate = margin_commission_rate(input.avg_percent());
    let toa_commission_rate = count_commission_rate(input.toa());
    let monthly_commission =
        monthly_gross_profit * (margin_commission_rate + toa_commission_rate) / 100.0;

    debug!(
        monthly_gross_profit,
        margin_commission_rate, toa_commission_rate, monthly_commission, "computed commission"
    );

    Commission {
        monthly_gross_profit,
        margin_commission_rate,
        toa_commission_rate,
        monthly_commission,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(toa: f64, avg: f64, gm: f64) -> CommissionInput {
        CommissionInput::new(toa, avg, gm).unwrap()
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < 1e-9, "{actual} != {expected}");
    }

    #[test]
    fn scenario_mid_tiers() {
        let result = compute(&input(15.0, 16.0, 400.0));
        assert_close(result.monthly_gross_profit, 25800.0);
        assert_eq!(result.margin_commission_rate, 3.00);
        assert_eq!(result.toa_commission_rate, 2.50);
        assert_close(result.monthly_commission, 1419.0);
    }

    #[test]
    fn scenario_small_team() {
        let result = compute(&input(10.0, 20.0, 300.0));
        assert_close(result.monthly_gross_profit, 12900.0);
        assert_eq!(result.margin_commission_rate, 4.75);
        assert_eq!(result.toa_commission_rate, 2.00);
        assert_close(result.monthly_commission, 870.75);
    }

    #[test]
    fn margin_just_below_twenty_stays_in_lower_tier() {
        let result = compute(&input(10.0, 19.99, 300.0));
        assert_eq!(result.margin_commission_rate, 4.50);
        assert_close(result.monthly_commission, 838.5);
    }

    #[test]
    fn margin_exactly_twenty_five_takes_top_rate() {
        let result = compute(&input(15.0, 25.0, 400.0));
        assert_eq!(result.margin_commission_rate, 7.25);
    }

    #[test]
    fn zero_margin_still_earns_count_rate() {
        let result = compute(&input(30.0, 0.0, 100.0));
        assert_eq!(result.margin_commission_rate, 0.0);
        assert_eq!(result.toa_commission_rate, 4.0);
        assert_close(result.monthly_commission, 100.0 * 4.3 * 30.0 * 0.04);
    }

    #[test]
    fn compute_is_repeatable() {
        let value = input(17.5, 21.37, 512.25);
        let first = compute(&value);
        let second = compute(&value);
        assert_eq!(first.monthly_gross_profit.to_bits(), second.monthly_gross_profit.to_bits());
        assert_eq!(first.monthly_commission.to_bits(), second.monthly_commission.to_bits());
        assert_eq!(first, second);
    }
}
