use std::path::PathBuf;

pub struct Config {
    /// Output reduction level.
    ///
    /// `1` hides the banner and the chart, `2` prints the summary table only.
    pub quiet: u8,
    /// Skips the bar chart even when `quiet` is 0.
    pub no_chart: bool,
    /// Directory used for exports when no explicit path is given.
    pub export_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            quiet: 0,
            no_chart: false,
            export_dir: PathBuf::from("."),
        }
    }
}

impl Config {
    pub fn show_banner(&self) -> bool {
        self.quiet == 0
    }

    pub fn show_headers(&self) -> bool {
        self.quiet < 2
    }

    pub fn show_chart(&self) -> bool {
        self.quiet == 0 && !self.no_chart
    }
}
