use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Completion request rejected: HTTP {status}: {body}")]
    CompletionError { status: u16, body: String },

    #[error("Empty completion: {message}")]
    EmptyCompletionError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, PlanError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Network,
    Processing,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PlanError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PlanError::ApiError(_) | PlanError::CompletionError { .. } => ErrorCategory::Network,
            PlanError::EmptyCompletionError { .. } | PlanError::SerializationError(_) => {
                ErrorCategory::Processing
            }
            PlanError::ConfigError { .. }
            | PlanError::MissingConfigError { .. }
            | PlanError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            PlanError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 遠端失敗會被 fallback 吸收,浮到最外層時只是警告性質
            PlanError::ApiError(_)
            | PlanError::CompletionError { .. }
            | PlanError::EmptyCompletionError { .. } => ErrorSeverity::Medium,
            PlanError::SerializationError(_) => ErrorSeverity::High,
            PlanError::ConfigError { .. }
            | PlanError::MissingConfigError { .. }
            | PlanError::InvalidConfigValueError { .. } => ErrorSeverity::Critical,
            PlanError::IoError(_) => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            PlanError::ApiError(_) => {
                "Check network connectivity and the completion endpoint URL".to_string()
            }
            PlanError::CompletionError { status, .. } if *status == 429 => {
                "The provider is rate limiting; retry later or rely on fallback plans".to_string()
            }
            PlanError::CompletionError { .. } => {
                "Verify the API key and model name are accepted by the provider".to_string()
            }
            PlanError::EmptyCompletionError { .. } => {
                "Retry the request; the provider returned no usable text".to_string()
            }
            PlanError::SerializationError(_) => {
                "Check that the request body is valid JSON with the expected fields".to_string()
            }
            PlanError::ConfigError { .. } | PlanError::MissingConfigError { .. } => {
                "Set the OPENAI_API_KEY environment variable (and OPENAI_MODEL if needed)"
                    .to_string()
            }
            PlanError::InvalidConfigValueError { field, .. } => {
                format!("Correct the value supplied for '{}'", field)
            }
            PlanError::IoError(_) => "Check file permissions and the output path".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PlanError::ApiError(_) => "Could not reach the plan generation service".to_string(),
            PlanError::CompletionError { status, .. } => {
                format!("The plan generation service refused the request (HTTP {})", status)
            }
            PlanError::EmptyCompletionError { .. } => {
                "The plan generation service returned an empty answer".to_string()
            }
            PlanError::SerializationError(_) => "The request could not be understood".to_string(),
            PlanError::ConfigError { message } => format!("Configuration problem: {}", message),
            PlanError::MissingConfigError { field } => {
                format!("Missing configuration: {}", field)
            }
            PlanError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid {}: {}", field, reason)
            }
            PlanError::IoError(_) => "Could not write the generated plan".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_errors_are_critical_configuration() {
        let missing = PlanError::MissingConfigError {
            field: "OPENAI_API_KEY".to_string(),
        };
        assert_eq!(missing.category(), ErrorCategory::Configuration);
        assert_eq!(missing.severity(), ErrorSeverity::Critical);

        let invalid = PlanError::InvalidConfigValueError {
            field: "api_base".to_string(),
            value: "not-a-url".to_string(),
            reason: "Invalid URL format".to_string(),
        };
        assert_eq!(invalid.category(), ErrorCategory::Configuration);
        assert_eq!(invalid.severity(), ErrorSeverity::Critical);
    }

    #[test]
    fn remote_failures_are_medium_network_errors() {
        let rejected = PlanError::CompletionError {
            status: 429,
            body: "rate limited".to_string(),
        };
        assert_eq!(rejected.category(), ErrorCategory::Network);
        assert_eq!(rejected.severity(), ErrorSeverity::Medium);
    }

    #[test]
    fn io_errors_are_high_severity_system_errors() {
        let io = PlanError::from(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert_eq!(io.category(), ErrorCategory::System);
        assert_eq!(io.severity(), ErrorSeverity::High);
    }
}
