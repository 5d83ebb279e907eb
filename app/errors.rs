use std::io;

use config::ConfigError;
use flv_formats::errors::FLVError;
use thiserror::Error;
use tracing::dispatcher::SetGlobalDefaultError;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),
    #[error("logger error: {0}")]
    LoggerError(#[from] SetGlobalDefaultError),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("flv stream error: {0}")]
    StreamError(#[from] FLVError),
    #[error("rebuilt stream differs from the input at byte {offset}, input {input_len} bytes, rebuilt {rebuilt_len} bytes")]
    RoundTripMismatch {
        offset: usize,
        input_len: usize,
        rebuilt_len: usize,
    },
}

pub(crate) type AppResult<T> = Result<T, AppError>;
