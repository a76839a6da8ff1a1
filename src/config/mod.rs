#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::TomlConfig;

use crate::utils::error::{GatewayError, Result};
use std::net::{IpAddr, SocketAddr};

pub const DEFAULT_UPSTREAM_URL: &str = "http://localhost:8112/api/v1/employee";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8111;
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;

pub(crate) fn socket_addr(field_name: &str, host: &str, port: u16) -> Result<SocketAddr> {
    let ip: IpAddr = host
        .trim()
        .parse()
        .map_err(|e| GatewayError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: host.to_string(),
            reason: format!("Host must be an IP address: {}", e),
        })?;
    Ok(SocketAddr::from((ip, port)))
}
