use std::{env, path::PathBuf};

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::{
    cli::AppCli,
    errors::{AppError, AppResult},
    util::parse_log_level,
};

const CONFIG_PATH_ENV: &str = "FLV_PROBE_CONFIG";
const ENV_PREFIX: &str = "FLV_PROBE";

#[derive(Debug, Deserialize)]
pub(crate) struct Logger {
    pub(crate) level: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Probe {
    pub(crate) chunk_size: usize,
    pub(crate) verify_round_trip: bool,
    pub(crate) dump_metadata: bool,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AppConfig {
    pub(crate) logger: Logger,
    pub(crate) probe: Probe,
}

impl AppConfig {
    /// Defaults, then the config file if one is given, then `FLV_PROBE_*` variables
    /// such as `FLV_PROBE_PROBE__CHUNK_SIZE`.
    pub(crate) fn new(config_path: Option<PathBuf>) -> AppResult<Self> {
        let config_path = config_path.or_else(|| env::var_os(CONFIG_PATH_ENV).map(PathBuf::from));
        let mut builder = Config::builder()
            .set_default("logger.level", "info")?
            .set_default("probe.chunk_size", 4096_i64)?
            .set_default("probe.verify_round_trip", true)?
            .set_default("probe.dump_metadata", true)?;
        if let Some(path) = config_path {
            builder = builder.add_source(File::from(path));
        }
        let result = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        let config = result.try_deserialize()?;
        Ok(config)
    }

    pub(crate) fn apply(&mut self, cli_args: &AppCli) -> AppResult<()> {
        if let Some(level) = &cli_args.log_level {
            self.logger.level = level.clone();
        }

        if let Some(chunk_size) = cli_args.chunk_size {
            self.probe.chunk_size = chunk_size;
        }

        if cli_args.no_verify {
            self.probe.verify_round_trip = false;
        }

        Ok(())
    }

    pub(crate) fn validate(&self) -> AppResult<()> {
        let _ = parse_log_level(&self.logger.level)?;

        if self.probe.chunk_size == 0 {
            return Err(AppError::ConfigError(ConfigError::Message(
                "the probe chunk size must be greater than zero".to_owned(),
            )));
        }

        Ok(())
    }
}
