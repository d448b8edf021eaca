//! Configuration validation module

use crate::config::{CartConfig, LoggingConfig, ServerConfig};

/// Trait for validating configuration sections
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Configuration validation error
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Server configuration error: {message}")]
    Server { message: String },

    #[error("Cart configuration error: {message}")]
    Cart { message: String },

    #[error("Logging configuration error: {message}")]
    Logging { message: String },
}

impl ValidationError {
    pub fn server(message: impl Into<String>) -> Self {
        Self::Server {
            message: message.into(),
        }
    }

    pub fn cart(message: impl Into<String>) -> Self {
        Self::Cart {
            message: message.into(),
        }
    }

    pub fn logging(message: impl Into<String>) -> Self {
        Self::Logging {
            message: message.into(),
        }
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        // Note: u16 cannot exceed 65535, so we only need to check for 0
        if self.port == 0 {
            return Err(ValidationError::server(format!(
                "Port must be in range 1-65535, got {}",
                self.port
            )));
        }

        if self.host.is_empty() {
            return Err(ValidationError::server("Host cannot be empty".to_string()));
        }

        if self.request_timeout_seconds == 0 {
            return Err(ValidationError::server(
                "Request timeout must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

impl Validate for CartConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.session_ttl_minutes == 0 {
            return Err(ValidationError::cart(
                "Session TTL must be greater than 0 minutes".to_string(),
            ));
        }

        if self.feedback_clear_ms == 0 {
            return Err(ValidationError::cart(
                "feedback_clear_ms must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        match self.format.as_str() {
            "json" | "pretty" | "compact" => {}
            other => {
                return Err(ValidationError::logging(format!(
                    "Unknown log format: {}. Must be one of: json, pretty, compact",
                    other
                )));
            }
        }

        if self.level.is_empty() {
            return Err(ValidationError::logging(
                "Log level cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}
