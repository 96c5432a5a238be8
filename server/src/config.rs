//! Server configuration from command line flags and environment.

use std::path::PathBuf;

use clap::Parser;

use crate::session::DEFAULT_CONTENT_TTL_MINUTES;

/// Runtime configuration for the mocksmith server.
#[derive(Debug, Clone, Parser)]
#[command(name = "mocksmith", about = "Mock data server with hash-seeded sessions")]
pub struct ServerConfig {
    /// Address to bind the listener to.
    #[arg(long, env = "MOCKSMITH_BIND", default_value = "0.0.0.0")]
    pub bind: String,

    /// Port to listen on.
    #[arg(long, env = "MOCKSMITH_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Directory of reference dataset JSON files. Embedded datasets are
    /// used when unset.
    #[arg(long, env = "MOCKSMITH_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Seconds between expired-entry sweeps of the cache.
    #[arg(long, env = "MOCKSMITH_SWEEP_INTERVAL_SECS", default_value_t = 30)]
    pub sweep_interval_secs: u64,

    /// Lifetime of cached rendered documents, in minutes.
    #[arg(long, env = "MOCKSMITH_CONTENT_TTL_MINUTES", default_value_t = DEFAULT_CONTENT_TTL_MINUTES)]
    pub content_ttl_minutes: i64,
}
