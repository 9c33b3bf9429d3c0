use colored::*;
use commcalc_common::config::Config;
use commcalc_common::error::InputError;
use commcalc_common::format;
use commcalc_common::input::{FormState, InputField};
use commcalc_core::SummaryRow;
use tracing::{error, warn};

use crate::cprint;
use crate::terminal::{chart, colors, print, table};

/// One full render cycle: the form, then either the results or the reason
/// there are none.
pub fn render(form: &FormState, cfg: &Config) -> Result<SummaryRow, InputError> {
    print_form(form, cfg);

    let input = form.validate().inspect_err(report_input_error)?;
    let row = SummaryRow::compute(&input);

    if cfg.show_headers() {
        cprint!();
    }
    print::header("commission calculator", cfg);
    if cfg.show_headers() {
        print::print_status("Here is your calculated commission:");
    }
    table::print_summary(&row);

    if cfg.show_chart() {
        cprint!();
        print::header(chart::TITLE, cfg);
        chart::print_chart(&row);
    }

    if cfg.show_banner() {
        print_total(&row);
    }
    Ok(row)
}

fn print_total(row: &SummaryRow) {
    let amount: ColoredString = format::currency(row.monthly_commission).bold().green();
    let rate: ColoredString = format::percent(row.combined_rate())
        .bold()
        .yellow();
    let output: String = format!("Monthly Commission: {amount} at {rate} of Monthly GP")
        .color(colors::TEXT_DEFAULT)
        .to_string();

    print::fat_separator();
    print::centerln(&output);
}

pub fn report_input_error(err: &InputError) {
    if err.is_fatal() {
        error!("{err}");
    } else {
        warn!("{err}");
    }
}

fn print_form(form: &FormState, cfg: &Config) {
    if !cfg.show_headers() {
        return;
    }

    print::header("inputs", cfg);
    print::set_key_width(InputField::ALL.iter().map(|field| field.label()));
    for field in InputField::ALL {
        match form.get(field) {
            Some(value) => print::aligned_line(field.label(), value.to_string()),
            None => print::aligned_line(
                field.label(),
                format!("unset ({})", field.placeholder()).color(colors::UNSET).italic(),
            ),
        }
    }
}
