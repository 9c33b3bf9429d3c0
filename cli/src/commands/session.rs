use std::io::{self, BufRead};
use std::path::PathBuf;
use std::str::FromStr;

use colored::*;
use commcalc_common::config::Config;
use commcalc_common::input::{FormState, InputField, parse_amount};
use commcalc_core::SummaryRow;
use commcalc_core::export::ExportFormat;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use tracing::{debug, error, warn};

use crate::commands::tiers;
use crate::cprint;
use crate::render::render;
use crate::terminal::{colors, print};

const HELP: &[(&str, &str)] = &[
    ("toa N", "set the number of TOA"),
    ("avg N", "set the average margin %"),
    ("gm N", "set the gross margin $ per week"),
    ("unset FIELD", "clear one field (toa, avg, gm)"),
    ("reset", "clear every field"),
    ("csv [PATH]", "save the result as CSV"),
    ("xlsx [PATH]", "save the result as an Excel workbook"),
    ("tiers", "show the rate tables"),
    ("quit", "leave the calculator"),
];

#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    Set(InputField, f64),
    Unset(InputField),
    Reset,
    Export(ExportFormat, Option<PathBuf>),
    Tiers,
    Help,
    Quit,
}

impl FromStr for SessionCommand {
    type Err = String;

    /// Parses one line of user input. `toa 15` and `toa=15` are equivalent.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim().replacen('=', " ", 1);
        let (head, rest) = match line.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim()),
            None => (line.as_str(), ""),
        };

        let no_args = |cmd: SessionCommand| {
            if rest.is_empty() {
                Ok(cmd)
            } else {
                Err(format!("'{head}' takes no arguments"))
            }
        };
        let optional_path = || (!rest.is_empty()).then(|| PathBuf::from(rest));

        match head.to_ascii_lowercase().as_str() {
            "" => Err("empty command".to_string()),
            "reset" => no_args(SessionCommand::Reset),
            "tiers" => no_args(SessionCommand::Tiers),
            "help" | "?" => no_args(SessionCommand::Help),
            "quit" | "exit" | "q" => no_args(SessionCommand::Quit),
            "unset" | "clear" => Ok(SessionCommand::Unset(rest.parse()?)),
            "csv" => Ok(SessionCommand::Export(ExportFormat::Csv, optional_path())),
            "xlsx" | "excel" => Ok(SessionCommand::Export(ExportFormat::Xlsx, optional_path())),
            other => {
                let field: InputField = other
                    .parse()
                    .map_err(|_| format!("unknown command '{head}', type 'help' for the list"))?;
                if rest.is_empty() {
                    return Err(format!("missing value for {field} ({})", field.placeholder()));
                }
                Ok(SessionCommand::Set(field, parse_amount(rest)?))
            }
        }
    }
}

/// Work that has to happen after the screen is redrawn, so its output stays visible.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Export(ExportFormat, PathBuf),
    Tiers,
    Help,
}

#[derive(Debug, PartialEq)]
pub enum Step {
    Continue(Option<Action>),
    Quit,
}

pub struct Session<'a> {
    form: FormState,
    cfg: &'a Config,
}

impl<'a> Session<'a> {
    pub fn new(cfg: &'a Config) -> Self {
        Self {
            form: FormState::default(),
            cfg,
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn apply(&mut self, command: SessionCommand) -> Step {
        debug!("session command: {command:?}");
        let action = match command {
            SessionCommand::Set(field, value) => {
                self.form.set(field, Some(value));
                None
            }
            SessionCommand::Unset(field) => {
                self.form.set(field, None);
                None
            }
            SessionCommand::Reset => {
                self.form.reset();
                None
            }
            SessionCommand::Export(format, path) => {
                let path = path.unwrap_or_else(|| self.cfg.export_dir.join(format.default_file_name()));
                Some(Action::Export(format, path))
            }
            SessionCommand::Tiers => Some(Action::Tiers),
            SessionCommand::Help => Some(Action::Help),
            SessionCommand::Quit => return Step::Quit,
        };
        Step::Continue(action)
    }

    fn redraw(&self) -> anyhow::Result<Option<SummaryRow>> {
        if console::Term::stdout().is_term() {
            execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))?;
        }
        print::banner(self.cfg);
        Ok(render(self.form(), self.cfg).ok())
    }

    fn perform(&self, action: Action, row: Option<&SummaryRow>) {
        cprint!();
        match action {
            Action::Export(format, path) => match row {
                Some(row) => {
                    if let Err(err) = format.write(row, &path) {
                        error!("Export failed: {err}");
                    }
                }
                None => warn!("Nothing to export yet, fill in valid inputs first."),
            },
            Action::Tiers => tiers::tiers(self.cfg),
            Action::Help => print_help(self.cfg),
        }
    }
}

fn print_help(cfg: &Config) {
    print::header("commands", cfg);
    let rows = HELP
        .iter()
        .map(|(usage, what)| (usage.to_string(), what.color(colors::TEXT_DEFAULT)))
        .collect();
    print::as_tree_one_level(rows);
}

pub fn session(cfg: &Config) -> anyhow::Result<()> {
    let mut session = Session::new(cfg);
    let mut pending: Option<Action> = None;
    let mut notice: Option<String> = None;
    let mut lines = io::stdin().lock().lines();

    loop {
        let row = session.redraw()?;
        if let Some(action) = pending.take() {
            session.perform(action, row.as_ref());
        }
        if let Some(msg) = notice.take() {
            warn!("{msg}");
        }

        cprint!();
        print::print_status(format!(
            "Enter a command ({} for the list):",
            "help".color(colors::ACCENT)
        ));

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<SessionCommand>() {
            Ok(command) => match session.apply(command) {
                Step::Quit => break,
                Step::Continue(action) => pending = action,
            },
            Err(msg) => notice = Some(msg),
        }
    }

    print::end_of_program(cfg);
    Ok(())
}
