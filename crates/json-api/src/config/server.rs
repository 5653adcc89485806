//! Server Config

use clap::Args;

use crate::state::DEFAULT_MAX_RECEIPT_BYTES;

/// Server runtime network settings.
#[derive(Debug, Args)]
pub struct ServerRuntimeConfig {
    /// Server host address
    #[arg(short = 'H', long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Server port
    #[arg(short, long, env = "SERVER_PORT", default_value = "8698")]
    pub port: u16,

    /// Seconds in-flight requests get to finish after a shutdown signal
    #[arg(long, env = "SHUTDOWN_GRACE_SECONDS", default_value_t = 10_u64)]
    pub shutdown_grace_seconds: u64,

    /// Largest payment receipt accepted at checkout, in bytes after decoding
    #[arg(long, env = "MAX_RECEIPT_BYTES", default_value_t = DEFAULT_MAX_RECEIPT_BYTES)]
    pub max_receipt_bytes: usize,
}

impl ServerRuntimeConfig {
    /// Get the socket address for binding.
    #[must_use]
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
