mod cli;
mod config;
mod errors;
mod probe;
mod util;

use std::process::ExitCode;

use clap::Parser;
use cli::AppCli;
use config::AppConfig;
use errors::AppResult;
use time::macros::format_description;
use tracing::{self, Dispatch};
use tracing_subscriber::{self, EnvFilter, filter::LevelFilter, fmt::time::LocalTime};
use util::parse_log_level;

fn load_config(cli: &AppCli) -> AppResult<AppConfig> {
    let mut config = AppConfig::new(cli.config.clone())?;
    config.apply(cli)?;
    config.validate()?;
    Ok(config)
}

fn init_logger(level: &str) -> AppResult<()> {
    let level = parse_log_level(level)?;
    let subscriber = tracing_subscriber::fmt()
        .with_timer(LocalTime::new(format_description!(
            "[year]-[month]-[day] [hour]:[minute]:[second] [unix_timestamp precision:nanosecond]"
        )))
        // Use a more compact, abbreviated log format
        .compact()
        // Display source code file paths
        .with_file(true)
        // Display source code line numbers
        .with_line_number(true)
        // display the event's target (module path)
        .with_target(true)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::from_level(level).into())
                .with_env_var("FLV_PROBE_LOG")
                .from_env_lossy(),
        )
        .finish();
    tracing::dispatcher::set_global_default(Dispatch::new(subscriber))?;
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = AppCli::parse();
    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("flv_probe: {}", err);
            return ExitCode::FAILURE;
        }
    };
    if let Err(err) = init_logger(&config.logger.level) {
        eprintln!("flv_probe: {}", err);
        return ExitCode::FAILURE;
    }

    tracing::info!(
        "probing {:?}, chunk size: {}, verify: {}",
        cli.input,
        config.probe.chunk_size,
        config.probe.verify_round_trip
    );

    match probe::run(&cli.input, &config.probe).await {
        Ok(report) => {
            tracing::info!(
                "done, {} audio, {} video, {} script, {} unknown tags, {} payload errors, {} bytes",
                report.audio_tags,
                report.video_tags,
                report.script_tags,
                report.unknown_tags,
                report.payload_errors,
                report.bytes_consumed
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!("probe failed: {}", err);
            ExitCode::FAILURE
        }
    }
}
