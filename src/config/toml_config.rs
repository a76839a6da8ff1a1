use super::{socket_addr, DEFAULT_HOST, DEFAULT_PORT, MAX_REQUEST_TIMEOUT_SECS};
use crate::core::ConfigProvider;
use crate::utils::error::{GatewayError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    pub endpoint: String,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `employee_gateway=debug`
    pub level: Option<String>,
    /// `compact` (default) or `json`
    pub format: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(GatewayError::Io)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| GatewayError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${EMPLOYEE_API_URL})，找不到的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| GatewayError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn log_directive(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    pub fn json_logs(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.format.as_deref())
            .is_some_and(|f| f.eq_ignore_ascii_case("json"))
    }
}

impl ConfigProvider for TomlConfig {
    fn upstream_endpoint(&self) -> &str {
        &self.upstream.endpoint
    }

    fn listen_addr(&self) -> Result<SocketAddr> {
        socket_addr("server.host", &self.server.host, self.server.port)
    }

    fn request_timeout(&self) -> Option<Duration> {
        self.upstream.timeout_seconds.map(Duration::from_secs)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_url("upstream.endpoint", &self.upstream.endpoint)?;
        validate_non_empty_string("server.host", &self.server.host)?;
        if let Some(secs) = self.upstream.timeout_seconds {
            validate_range("upstream.timeout_seconds", secs, 1, MAX_REQUEST_TIMEOUT_SECS)?;
        }

        if let Some(format) = self.logging.as_ref().and_then(|l| l.format.as_deref()) {
            let valid_formats = ["compact", "json"];
            if !valid_formats.contains(&format.to_ascii_lowercase().as_str()) {
                return Err(GatewayError::InvalidConfigValueError {
                    field: "logging.format".to_string(),
                    value: format.to_string(),
                    reason: format!("Unsupported format. Valid formats: {}", valid_formats.join(", ")),
                });
            }
        }

        self.listen_addr().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[server]
host = "0.0.0.0"
port = 9000

[upstream]
endpoint = "http://localhost:8112/api/v1/employee"
timeout_seconds = 10

[logging]
level = "employee_gateway=debug"
format = "json"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.listen_addr().unwrap().to_string(), "0.0.0.0:9000");
        assert_eq!(config.upstream_endpoint(), "http://localhost:8112/api/v1/employee");
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(10)));
        assert_eq!(config.log_directive(), Some("employee_gateway=debug"));
        assert!(config.json_logs());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_server_section_defaults() {
        let config = TomlConfig::from_toml_str(
            r#"
[upstream]
endpoint = "https://employees.example.com/api/v1/employee"
"#,
        )
        .unwrap();

        assert_eq!(config.listen_addr().unwrap().to_string(), "127.0.0.1:8111");
        assert!(config.request_timeout().is_none());
        assert!(config.log_directive().is_none());
        assert!(!config.json_logs());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("EMPLOYEE_GATEWAY_TEST_UPSTREAM", "http://upstream:8112/api/v1/employee");

        let config = TomlConfig::from_toml_str(
            r#"
[upstream]
endpoint = "${EMPLOYEE_GATEWAY_TEST_UPSTREAM}"
"#,
        )
        .unwrap();
        assert_eq!(config.upstream_endpoint(), "http://upstream:8112/api/v1/employee");

        let config = TomlConfig::from_toml_str(
            r#"
[upstream]
endpoint = "${EMPLOYEE_GATEWAY_TEST_UNSET_VARIABLE}"
"#,
        )
        .unwrap();
        assert_eq!(config.upstream_endpoint(), "${EMPLOYEE_GATEWAY_TEST_UNSET_VARIABLE}");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_values_fail_validation() {
        let config = TomlConfig::from_toml_str(
            r#"
[upstream]
endpoint = "http://localhost:8112/api/v1/employee"
timeout_seconds = 0
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());

        let config = TomlConfig::from_toml_str(
            r#"
[upstream]
endpoint = "http://localhost:8112/api/v1/employee"

[logging]
format = "xml"
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_upstream_section_is_parse_error() {
        let err = TomlConfig::from_toml_str("[server]\nport = 1\n").unwrap_err();
        assert!(matches!(err, GatewayError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[upstream]\nendpoint = \"http://localhost:8112/api/v1/employee\"\n\n[server]\nport = 8200"
        )
        .unwrap();

        let config = TomlConfig::from_file(file.path()).unwrap();
        assert_eq!(config.listen_addr().unwrap().port(), 8200);

        assert!(matches!(
            TomlConfig::from_file("/definitely/not/here.toml"),
            Err(GatewayError::Io(_))
        ));
    }
}
