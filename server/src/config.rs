use std::net::SocketAddr;

use clap::Parser;
use search::ProviderConfig;

/// Command line configuration for the server.
#[derive(Debug, Clone, Parser)]
#[command(name = "server", about = "Job search aggregator HTTP server")]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:3000")]
    pub bind: SocketAddr,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,

    #[command(flatten)]
    pub provider: ProviderConfig,
}
