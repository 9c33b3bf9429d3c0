use colored::*;
use commcalc_core::SummaryRow;
use commcalc_core::report::{COLUMN_KINDS, ColumnKind};
use console::{Alignment, pad_str};

use crate::terminal::{colors, print};

const CELL_PADDING: usize = 2;

/// Width of every column: the wider of header and value, plus padding.
pub fn column_widths(cells: &[(&str, String)]) -> Vec<usize> {
    cells
        .iter()
        .map(|(name, value)| {
            console::measure_text_width(name).max(console::measure_text_width(value)) + CELL_PADDING
        })
        .collect()
}

/// Total printed width of the boxed table, borders included.
pub fn table_width(widths: &[usize]) -> usize {
    widths.iter().sum::<usize>() + widths.len() + 1
}

fn border(widths: &[usize], left: &str, mid: &str, right: &str) -> String {
    let segments: Vec<String> = widths.iter().map(|w| "─".repeat(*w)).collect();
    format!("{left}{}{right}", segments.join(mid))
        .color(colors::SEPARATOR)
        .to_string()
}

fn line(cells: Vec<String>, widths: &[usize]) -> String {
    let bar = "│".color(colors::SEPARATOR).to_string();
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| pad_str(cell, *width, Alignment::Center, None).into_owned())
        .collect();
    format!("{bar}{}{bar}", padded.join(bar.as_str()))
}

/// The single-row summary as a boxed table.
pub fn boxed_lines(row: &SummaryRow) -> Vec<String> {
    let cells = row.cells();
    let widths = column_widths(&cells);

    let headers: Vec<String> = cells
        .iter()
        .map(|(name, _)| name.color(colors::PRIMARY).bold().to_string())
        .collect();
    let values: Vec<String> = cells
        .iter()
        .zip(COLUMN_KINDS)
        .map(|((_, value), kind)| match kind {
            ColumnKind::Currency => value.color(colors::MONEY).bold().to_string(),
            _ => value.color(colors::TEXT_DEFAULT).to_string(),
        })
        .collect();

    vec![
        border(&widths, "┌", "┬", "┐"),
        line(headers, &widths),
        border(&widths, "├", "┼", "┤"),
        line(values, &widths),
        border(&widths, "└", "┴", "┘"),
    ]
}

/// Whether the boxed table fits. Output that is not a terminal has no width limit.
pub fn fits(table_width: usize, term_cols: Option<u16>) -> bool {
    term_cols.is_none_or(|cols| table_width <= cols as usize)
}

/// Prints the summary, as a table when the terminal is wide enough and as
/// aligned `key: value` lines otherwise.
pub fn print_summary(row: &SummaryRow) {
    let cells = row.cells();
    let term = console::Term::stdout();
    let term_cols = term.is_term().then(|| term.size().1);

    if fits(table_width(&column_widths(&cells)), term_cols) {
        for line in boxed_lines(row) {
            print::print(&line);
        }
        return;
    }

    print::set_key_width(cells.iter().map(|(name, _)| *name));
    for ((name, value), kind) in cells.into_iter().zip(COLUMN_KINDS) {
        match kind {
            ColumnKind::Currency => print::aligned_line(name, value.color(colors::MONEY).bold()),
            _ => print::aligned_line(name, value),
        }
    }
}
