use colored::*;
use commcalc_common::format;
use commcalc_core::SummaryRow;
use unicode_width::UnicodeWidthStr;

use crate::terminal::{colors, print};

pub const TITLE: &str = "Monthly GP vs. Monthly Commission";
const PARTIAL_BLOCKS: [&str; 8] = ["", "▏", "▎", "▍", "▌", "▋", "▊", "▉"];

/// A bar `width` cells long at `max`, drawn with eighth-block resolution.
pub fn bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 || value <= 0.0 {
        return String::new();
    }
    let eighths = ((value / max).min(1.0) * (width * 8) as f64).round() as usize;
    let mut out = "█".repeat(eighths / 8);
    out.push_str(PARTIAL_BLOCKS[eighths % 8]);
    // Anything positive stays visible.
    if out.is_empty() {
        out.push_str(PARTIAL_BLOCKS[1]);
    }
    out
}

fn metrics(row: &SummaryRow) -> [(&'static str, f64, Color); 2] {
    [
        ("Monthly GP ($)", row.monthly_gross_profit, colors::GP_BAR),
        ("Monthly Commission ($)", row.monthly_commission, colors::COMMISSION_BAR),
    ]
}

pub fn chart_lines(row: &SummaryRow) -> Vec<String> {
    let metrics = metrics(row);
    let label_width = metrics.iter().map(|(label, ..)| label.width()).max().unwrap_or(0);
    let max = metrics.iter().map(|(_, amount, _)| *amount).fold(0.0, f64::max);
    // Leaves room for the label, a space and the SI annotation.
    let bar_width = print::TOTAL_WIDTH.saturating_sub(label_width + 8);

    let mut lines: Vec<String> = metrics
        .iter()
        .map(|(label, amount, color)| {
            format!(
                "{}{} {} {}",
                " ".repeat(label_width - label.width()),
                label.color(colors::TEXT_DEFAULT),
                bar(*amount, max, bar_width).color(*color),
                format::si(*amount).bold()
            )
        })
        .collect();

    let axis = format!("{}└{}", " ".repeat(label_width), "─".repeat(bar_width + 1));
    lines.push(axis.color(colors::SEPARATOR).to_string());
    lines.push(format!("{}{}", " ".repeat(label_width + 2), "Amount ($)".dimmed()));
    lines
}

pub fn print_chart(row: &SummaryRow) {
    for line in chart_lines(row) {
        print::print(&line);
    }
}
