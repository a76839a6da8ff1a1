use super::{socket_addr, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_UPSTREAM_URL, MAX_REQUEST_TIMEOUT_SECS};
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url, Validate};
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(name = "employee-gateway", version)]
#[command(about = "HTTP gateway in front of the employee records API")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_UPSTREAM_URL)]
    pub upstream_url: String,

    #[arg(long, default_value = DEFAULT_HOST)]
    pub host: String,

    #[arg(long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    #[arg(long, help = "Upstream request timeout in seconds (transport default when unset)")]
    pub request_timeout_secs: Option<u64>,

    #[arg(long, value_name = "FILE", help = "TOML config file; overrides the flags above")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl ConfigProvider for CliConfig {
    fn upstream_endpoint(&self) -> &str {
        &self.upstream_url
    }

    fn listen_addr(&self) -> Result<SocketAddr> {
        socket_addr("host", &self.host, self.port)
    }

    fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("upstream_url", &self.upstream_url)?;
        validate_non_empty_string("host", &self.host)?;
        if let Some(secs) = self.request_timeout_secs {
            validate_range("request_timeout_secs", secs, 1, MAX_REQUEST_TIMEOUT_SECS)?;
        }
        self.listen_addr().map(|_| ())
    }
}
