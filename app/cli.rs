use std::path::PathBuf;

use clap::Parser;

/// Decode an FLV file chunk by chunk, log what it holds and check that it rebuilds byte for byte
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub(crate) struct AppCli {
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub(crate) config: Option<PathBuf>,
    #[arg(long, value_name = "LOG_LEVEL")]
    pub(crate) log_level: Option<String>,
    /// Bytes handed to the demuxer per read
    #[arg(long, value_name = "BYTES")]
    pub(crate) chunk_size: Option<usize>,
    /// Skip rebuilding the stream and comparing it with the input
    #[arg(long)]
    pub(crate) no_verify: bool,
    #[arg(value_name = "INPUT")]
    pub(crate) input: PathBuf,
}
