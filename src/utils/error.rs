use thiserror::Error;

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    #[error("Upstream {operation} returned HTTP {status}")]
    UpstreamStatus { operation: &'static str, status: u16 },

    #[error("Upstream payload error: {message}")]
    UpstreamPayload { message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Server error: {message}")]
    Server { message: String },
}

impl GatewayError {
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            GatewayError::ConfigError { .. }
                | GatewayError::ConfigValidationError { .. }
                | GatewayError::InvalidConfigValueError { .. }
        )
    }

    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            GatewayError::Upstream(_) | GatewayError::UpstreamStatus { .. } => {
                "The employee service could not be reached".to_string()
            }
            GatewayError::UpstreamPayload { .. } | GatewayError::Serialization(_) => {
                "The employee service returned an unexpected response".to_string()
            }
            GatewayError::Io(e) => format!("I/O failure: {}", e),
            GatewayError::Server { message } => format!("The gateway failed to serve: {}", message),
            _ => format!("Invalid configuration: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            GatewayError::Upstream(_) | GatewayError::UpstreamStatus { .. } => {
                "Check that the upstream endpoint is running and reachable"
            }
            GatewayError::UpstreamPayload { .. } | GatewayError::Serialization(_) => {
                "Verify the upstream endpoint points at the employee API"
            }
            GatewayError::Io(_) => "Check file paths and permissions",
            GatewayError::Server { .. } => "Make sure the listen address is free and valid",
            GatewayError::ConfigValidationError { .. } => "Check the TOML file for missing sections or typos",
            _ => "Review the configuration values and try again",
        }
    }
}

pub type Result<T> = std::result::Result<T, GatewayError>;
