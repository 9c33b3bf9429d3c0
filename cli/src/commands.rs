pub mod calc;
pub mod session;
pub mod tiers;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use commcalc_common::input::parse_amount;
use commcalc_core::export::{DEFAULT_CSV_NAME, DEFAULT_XLSX_NAME};

#[derive(Parser)]
#[command(name = "commcalc")]
#[command(version, about = "Monthly commission calculator for staffing accounts.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Reduce output (-q hides the banner and chart, -qq prints only the table)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Do not draw the bar chart
    #[arg(long, global = true)]
    pub no_chart: bool,

    /// Disable coloured output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Show debug logs
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute the commission once from the given inputs
    #[command(alias = "c")]
    Calc {
        /// Number of TOA (Ex. 15)
        #[arg(long, allow_negative_numbers = true, value_parser = parse_amount)]
        toa: Option<f64>,
        /// Average margin percentage (Ex. 16%)
        #[arg(long, allow_negative_numbers = true, value_parser = parse_amount)]
        avg: Option<f64>,
        /// Gross margin dollars per week (Ex. $400)
        #[arg(long, alias = "gm", allow_negative_numbers = true, value_parser = parse_amount)]
        gm_week: Option<f64>,
        /// Also save the result as CSV
        #[arg(long, num_args = 0..=1, default_missing_value = DEFAULT_CSV_NAME)]
        csv: Option<PathBuf>,
        /// Also save the result as an Excel workbook
        #[arg(long, num_args = 0..=1, default_missing_value = DEFAULT_XLSX_NAME)]
        xlsx: Option<PathBuf>,
    },
    /// Fill in the inputs interactively; the screen redraws after each change
    #[command(alias = "s")]
    Session {
        /// Directory for exports saved without an explicit path
        #[arg(long, default_value = ".")]
        export_dir: PathBuf,
    },
    /// Print both commission rate tables
    #[command(alias = "t")]
    Tiers,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_line_is_consistent() {
        CommandLine::command().debug_assert();
    }

    #[test]
    fn calc_accepts_formatted_amounts() {
        let cli = CommandLine::try_parse_from([
            "commcalc", "calc", "--toa", "15", "--avg", "16%", "--gm", "$400",
        ])
        .unwrap();
        match cli.command {
            Commands::Calc { toa, avg, gm_week, csv, xlsx } => {
                assert_eq!(toa, Some(15.0));
                assert_eq!(avg, Some(16.0));
                assert_eq!(gm_week, Some(400.0));
                assert!(csv.is_none() && xlsx.is_none());
            }
            _ => panic!("expected calc"),
        }
    }

    #[test]
    fn bare_export_flags_use_default_names() {
        let cli = CommandLine::try_parse_from(["commcalc", "calc", "--csv", "--xlsx"]).unwrap();
        match cli.command {
            Commands::Calc { toa, csv, xlsx, .. } => {
                assert_eq!(toa, None);
                assert_eq!(csv, Some(PathBuf::from(DEFAULT_CSV_NAME)));
                assert_eq!(xlsx, Some(PathBuf::from(DEFAULT_XLSX_NAME)));
            }
            _ => panic!("expected calc"),
        }
    }

    #[test]
    fn negative_values_reach_validation() {
        let cli = CommandLine::try_parse_from(["commcalc", "calc", "--toa", "-2"]).unwrap();
        match cli.command {
            Commands::Calc { toa, .. } => assert_eq!(toa, Some(-2.0)),
            _ => panic!("expected calc"),
        }
    }

    #[test]
    fn quiet_is_counted() {
        let cli = CommandLine::try_parse_from(["commcalc", "-qq", "tiers"]).unwrap();
        assert_eq!(cli.quiet, 2);
    }
}
