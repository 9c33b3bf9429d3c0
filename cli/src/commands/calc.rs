use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use commcalc_common::config::Config;
use commcalc_common::input::FormState;
use commcalc_core::export::ExportFormat;

use crate::render::render;
use crate::terminal::print;

pub struct Exports {
    pub csv: Option<PathBuf>,
    pub xlsx: Option<PathBuf>,
}

impl Exports {
    fn requested(&self) -> impl Iterator<Item = (ExportFormat, &PathBuf)> {
        [(ExportFormat::Csv, &self.csv), (ExportFormat::Xlsx, &self.xlsx)]
            .into_iter()
            .filter_map(|(format, path)| path.as_ref().map(|p| (format, p)))
    }
}

/// Single render cycle. Missing inputs are a warning and still exit cleanly;
/// out-of-range inputs exit with failure.
pub fn calc(form: FormState, exports: &Exports, cfg: &Config) -> anyhow::Result<ExitCode> {
    let row = match render(&form, cfg) {
        Ok(row) => row,
        Err(err) if err.is_fatal() => return Ok(ExitCode::FAILURE),
        Err(_) => return Ok(ExitCode::SUCCESS),
    };

    for (format, path) in exports.requested() {
        format
            .write(&row, path)
            .with_context(|| format!("failed to export {}", path.display()))?;
    }

    print::end_of_program(cfg);
    Ok(ExitCode::SUCCESS)
}
