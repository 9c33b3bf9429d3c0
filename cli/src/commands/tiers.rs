use colored::*;
use commcalc_common::config::Config;
use commcalc_common::format;
use commcalc_core::tiers::{COUNT_TIERS, MARGIN_TIERS, TierTable};

use crate::cprint;
use crate::terminal::{colors, print};

pub fn tiers(cfg: &Config) {
    print_table(&MARGIN_TIERS, cfg);
    cprint!();
    print_table(&COUNT_TIERS, cfg);
}

fn print_table(table: &TierTable, cfg: &Config) {
    print::header(&format!("{} tiers", table.name), cfg);
    let rows = table
        .ranges()
        .into_iter()
        .map(|(lower, upper, rate)| {
            (
                range_label(lower, upper),
                format::percent(rate).color(colors::ACCENT),
            )
        })
        .collect();
    print::as_tree_one_level(rows);
}

pub fn range_label(lower: Option<f64>, upper: Option<f64>) -> String {
    match (lower, upper) {
        (None, Some(upper)) => format!("< {upper:.2}"),
        (Some(lower), Some(upper)) => format!("{lower:.2} to < {upper:.2}"),
        (Some(lower), None) => format!(">= {lower:.2}"),
        (None, None) => "any".to_string(),
    }
}
