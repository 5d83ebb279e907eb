use config::ConfigError;

use crate::errors::{AppError, AppResult};

pub(crate) fn parse_log_level(level: &str) -> AppResult<tracing::Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(tracing::Level::TRACE),
        "debug" => Ok(tracing::Level::DEBUG),
        "info" => Ok(tracing::Level::INFO),
        "warn" => Ok(tracing::Level::WARN),
        "error" => Ok(tracing::Level::ERROR),
        other => Err(AppError::ConfigError(ConfigError::Message(format!(
            "got unexpected log level: {}",
            other
        )))),
    }
}

/// Offset of the first byte where the two buffers disagree, including a length difference.
pub(crate) fn first_difference(lhs: &[u8], rhs: &[u8]) -> Option<usize> {
    lhs.iter()
        .zip(rhs.iter())
        .position(|(l, r)| l != r)
        .or_else(|| (lhs.len() != rhs.len()).then(|| lhs.len().min(rhs.len())))
}
