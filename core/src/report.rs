//! The one-row summary the calculator produces.
//!
//! Column names and order are shared by the terminal table, the CSV export and
//! the spreadsheet export.

use commcalc_common::format;
use commcalc_common::input::CommissionInput;
use serde::Serialize;

use crate::engine::{self, Commission};

pub const COLUMNS: [&str; 7] = [
    "TOA",
    "AVG %",
    "GM $/Week",
    "Monthly GP ($)",
    "Margin %",
    "TOA %",
    "Monthly Commission ($)",
];

/// How a column is shown and exported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Number,
    Percent,
    Currency,
}

pub const COLUMN_KINDS: [ColumnKind; 7] = [
    ColumnKind::Number,
    ColumnKind::Percent,
    ColumnKind::Currency,
    ColumnKind::Currency,
    ColumnKind::Percent,
    ColumnKind::Percent,
    ColumnKind::Currency,
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryRow {
    #[serde(rename = "TOA")]
    pub toa: f64,
    #[serde(rename = "AVG %")]
    pub avg_percent: f64,
    #[serde(rename = "GM $/Week")]
    pub gm_per_week: f64,
    #[serde(rename = "Monthly GP ($)")]
    pub monthly_gross_profit: f64,
    #[serde(rename = "Margin %")]
    pub margin_commission_rate: f64,
    #[serde(rename = "TOA %")]
    pub toa_commission_rate: f64,
    #[serde(rename = "Monthly Commission ($)")]
    pub monthly_commission: f64,
}

impl SummaryRow {
    pub fn new(input: &CommissionInput, commission: &Commission) -> Self {
        Self {
            toa: input.toa(),
            avg_percent: input.avg_percent(),
            gm_per_week: input.gm_per_week(),
            monthly_gross_profit: commission.monthly_gross_profit,
            margin_commission_rate: commission.margin_commission_rate,
            toa_commission_rate: commission.toa_commission_rate,
            monthly_commission: commission.monthly_commission,
        }
    }

    /// Runs the engine and wraps the result.
    pub fn compute(input: &CommissionInput) -> Self {
        Self::new(input, &engine::compute(input))
    }

    /// Margin rate plus TOA rate, in percentage points.
    pub fn combined_rate(&self) -> f64 {
        self.margin_commission_rate + self.toa_commission_rate
    }

    /// Raw values in [`COLUMNS`] order.
    pub fn values(&self) -> [f64; 7] {
        [
            self.toa,
            self.avg_percent,
            self.gm_per_week,
            self.monthly_gross_profit,
            self.margin_commission_rate,
            self.toa_commission_rate,
            self.monthly_commission,
        ]
    }

    /// Display strings in [`COLUMNS`] order.
    pub fn display_values(&self) -> [String; 7] {
        let values = self.values();
        std::array::from_fn(|idx| display(COLUMN_KINDS[idx], values[idx]))
    }

    /// `(column, display value)` pairs in [`COLUMNS`] order.
    pub fn cells(&self) -> Vec<(&'static str, String)> {
        COLUMNS.into_iter().zip(self.display_values()).collect()
    }
}

pub fn display(kind: ColumnKind, value: f64) -> String {
    match kind {
        ColumnKind::Number => format::fixed2(value),
        ColumnKind::Percent => format::percent(value),
        ColumnKind::Currency => format::currency(value),
    }
}
