//! Report settings.
//!
//! Settings are layered, later layers overriding earlier ones:
//!
//! 1. built-in defaults
//! 2. `queens-report.toml` in the working directory, or the file given
//!    with `--config`
//! 3. `QUEENS_REPORT_*` environment variables (a `.env` file is honoured)
//! 4. command-line flags

use config::{Config, ConfigError, Environment, File};
use queens_report_core::series::DEFAULT_MIN_BOARD_WIDTH;
use queens_report_results::io::{RESULTS_DIR, RESULTS_FILE};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Prefix of environment variables read as settings.
pub const ENV_PREFIX: &str = "QUEENS_REPORT";

/// Settings file looked up when `--config` is not given.
pub const CONFIG_FILE: &str = "queens-report.toml";

/// Default analyser options file.
pub const ANALYSE_FILE: &str = "analyse.json";

/// Effective report settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSettings {
    /// Results JSON document.
    pub results_file: PathBuf,
    /// Directory scanned for runner logs.
    pub results_dir: PathBuf,
    /// Analyser descriptor file.
    pub analyse_file: PathBuf,
    /// Smallest board width included in size series.
    pub min_board_width: u32,
    /// Log filter used when `RUST_LOG` is unset.
    pub log_level: String,
    /// Emit logs as JSON lines.
    pub log_json: bool,
}

impl ReportSettings {
    /// Load settings from defaults, the settings file and the environment.
    ///
    /// An explicitly given `config_file` must exist; the default one is
    /// optional.
    pub fn load(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with(
            config_file,
            Environment::with_prefix(ENV_PREFIX).try_parsing(true),
        )
    }

    /// Like [`ReportSettings::load`] with a caller-supplied environment layer.
    pub fn load_with(
        config_file: Option<&Path>,
        environment: Environment,
    ) -> Result<Self, ConfigError> {
        let file = match config_file {
            Some(path) => File::from(path).required(true),
            None => File::with_name(CONFIG_FILE).required(false),
        };

        Config::builder()
            .set_default("results_file", RESULTS_FILE)?
            .set_default("results_dir", RESULTS_DIR)?
            .set_default("analyse_file", ANALYSE_FILE)?
            .set_default("min_board_width", i64::from(DEFAULT_MIN_BOARD_WIDTH))?
            .set_default("log_level", "info")?
            .set_default("log_json", false)?
            .add_source(file)
            .add_source(environment)
            .build()?
            .try_deserialize()
    }
}
