mod commands;
mod render;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, Commands, calc, session, tiers};
use commcalc_common::config::Config;
use commcalc_common::input::FormState;
use terminal::{logging, print};

fn main() -> anyhow::Result<ExitCode> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose);
    if commands.no_color {
        colored::control::set_override(false);
    }

    let mut cfg = Config {
        quiet: commands.quiet,
        no_chart: commands.no_chart,
        ..Config::default()
    };

    match commands.command {
        Commands::Calc {
            toa,
            avg,
            gm_week,
            csv,
            xlsx,
        } => {
            print::banner(&cfg);
            let form = FormState::new(toa, avg, gm_week);
            calc::calc(form, &calc::Exports { csv, xlsx }, &cfg)
        }
        Commands::Session { export_dir } => {
            cfg.export_dir = export_dir;
            session::session(&cfg)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Tiers => {
            print::banner(&cfg);
            tiers::tiers(&cfg);
            Ok(ExitCode::SUCCESS)
        }
    }
}
