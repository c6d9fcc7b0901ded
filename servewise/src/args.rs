use std::path::PathBuf;

use clap::Parser;

/// Servewise LLM deployment recommender
#[derive(Debug, Parser)]
#[command(name = "servewise", about = "Rank GPU serving configurations for an LLM workload")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "servewise.toml", env = "SERVEWISE_CONFIG")]
    pub config: PathBuf,

    /// Recommendation request as JSON; reads stdin when omitted or `-`
    #[arg(short, long)]
    pub request: Option<PathBuf>,

    /// Keep configurations within the near-miss tolerance of the SLO
    #[arg(long)]
    pub near_miss: bool,

    /// Override the number of entries per ranked list
    #[arg(long)]
    pub top_n: Option<usize>,

    /// Log filter used when `RUST_LOG` is unset
    #[arg(long, default_value = "info", env = "SERVEWISE_LOG")]
    pub log_level: String,

    /// Print compact JSON instead of pretty-printed
    #[arg(long)]
    pub compact: bool,
}

impl Args {
    /// Whether the request should be read from stdin
    pub fn request_from_stdin(&self) -> bool {
        self.request.as_ref().is_none_or(|path| path.as_os_str() == "-")
    }
}
