/// One step of a rate table: values strictly below `below` earn `rate`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tier {
    pub below: f64,
    pub rate: f64,
}

const fn tier(below: f64, rate: f64) -> Tier {
    Tier { below, rate }
}

/// Ordered rate table with a trailing default for everything at or above the last bound.
///
/// Tiers are checked in ascending order and the first one whose bound is
/// strictly greater than the value wins. Each bound is therefore the inclusive
/// lower edge of the next tier.
#[derive(Debug)]
pub struct TierTable {
    pub name: &'static str,
    pub tiers: &'static [Tier],
    pub top_rate: f64,
}

impl TierTable {
    pub fn rate_for(&self, value: f64) -> f64 {
        self.tiers
            .iter()
            .find(|tier| value < tier.below)
            .map_or(self.top_rate, |tier| tier.rate)
    }

    /// `(lower, upper, rate)` per tier. `lower` is `None` for the first tier,
    /// `upper` is `None` for the open-ended top tier.
    pub fn ranges(&self) -> Vec<(Option<f64>, Option<f64>, f64)> {
        let mut lower = None;
        let mut out = Vec::with_capacity(self.tiers.len() + 1);
        for tier in self.tiers {
            out.push((lower, Some(tier.below), tier.rate));
            lower = Some(tier.below);
        }
        out.push((lower, None, self.top_rate));
        out
    }
}

pub static MARGIN_TIERS: TierTable = TierTable {
    name: "Margin %",
    tiers: &[
        tier(10.00, 0.00),
        tier(17.00, 3.00),
        tier(17.51, 3.25),
        tier(18.00, 3.50),
        tier(18.51, 3.75),
        tier(19.00, 4.00),
        tier(19.51, 4.25),
        tier(20.00, 4.50),
        tier(20.51, 4.75),
        tier(21.00, 5.00),
        tier(21.51, 5.25),
        tier(22.00, 5.50),
        tier(22.51, 5.75),
        tier(23.00, 6.00),
        tier(23.51, 6.25),
        tier(24.00, 6.50),
        tier(24.51, 6.75),
        tier(25.00, 7.00),
    ],
    top_rate: 7.25,
};

pub static COUNT_TIERS: TierTable = TierTable {
    name: "TOA %",
    tiers: &[
        tier(11.0, 2.00),
        tier(13.0, 2.25),
        tier(16.0, 2.50),
        tier(18.0, 2.75),
        tier(21.0, 3.00),
        tier(24.0, 3.25),
        tier(27.0, 3.50),
        tier(30.0, 3.75),
    ],
    top_rate: 4.00,
};

/// Commission rate, in percentage points, earned for an average margin percentage.
pub fn margin_commission_rate(margin: f64) -> f64 {
    MARGIN_TIERS.rate_for(margin)
}

/// Commission rate, in percentage points, earned for a staffing count.
pub fn count_commission_rate(count: f64) -> f64 {
    COUNT_TIERS.rate_for(count)
}
