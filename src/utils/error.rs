use thiserror::Error;

/// Ways an input can break the finder's preconditions.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputViolation {
    #[error("sequence has {len} element(s), at least 2 are required")]
    TooShort { len: usize },

    #[error("target is not a finite number")]
    NonFiniteTarget,

    #[error("element at position {position} is not a finite number")]
    NonFiniteElement { position: usize },

    #[error("sequence is not sorted in non-decreasing order (position {position} is smaller than its predecessor)")]
    NotSorted { position: usize },
}

#[derive(Error, Debug)]
pub enum PairSumError {
    #[error("Invalid input: {0}")]
    InvalidInput(InputViolation),

    #[error("No pair sums to {target}")]
    NotFound { target: String },

    #[error("Parse error in {field}: '{value}' ({reason})")]
    ParseError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Search,
    Configuration,
    System,
}

impl From<InputViolation> for PairSumError {
    fn from(violation: InputViolation) -> Self {
        PairSumError::InvalidInput(violation)
    }
}

impl PairSumError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PairSumError::InvalidInput(_) | PairSumError::ParseError { .. } => ErrorCategory::Input,
            PairSumError::NotFound { .. } => ErrorCategory::Search,
            PairSumError::ConfigError { .. }
            | PairSumError::InvalidConfigValueError { .. }
            | PairSumError::TomlError(_) => ErrorCategory::Configuration,
            PairSumError::IoError(_) | PairSumError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, PairSumError::InvalidInput(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, PairSumError::NotFound { .. })
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PairSumError::InvalidInput(InputViolation::TooShort { .. }) => {
                "Please enter at least two numbers".to_string()
            }
            PairSumError::InvalidInput(InputViolation::NonFiniteTarget) => {
                "Please enter a valid target number".to_string()
            }
            PairSumError::InvalidInput(InputViolation::NonFiniteElement { position }) => {
                format!("Number at position {} is not a valid number", position)
            }
            PairSumError::InvalidInput(InputViolation::NotSorted { position }) => {
                format!(
                    "Numbers must be sorted in non-decreasing order (check position {})",
                    position
                )
            }
            PairSumError::NotFound { target } => {
                format!("No two numbers add up to {}", target)
            }
            PairSumError::ParseError { field, value, .. } => {
                format!("Please enter a valid {}: '{}' is not understood", field, value)
            }
            PairSumError::ConfigError { message } => message.clone(),
            PairSumError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
            PairSumError::IoError(e) => format!("File access failed: {}", e),
            PairSumError::TomlError(e) => format!("Problem set is not valid TOML: {}", e),
            PairSumError::SerializationError(e) => format!("Could not serialize result: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => {
                "Enter comma separated numbers in ascending order, e.g. 2, 7, 11, 15, and a numeric target"
            }
            ErrorCategory::Search => "Pick a target that is the sum of two of the numbers",
            ErrorCategory::Configuration => "Check the problem set file against the documented format",
            ErrorCategory::System => "Check file paths and permissions, then retry",
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Input => 1,
            ErrorCategory::Search => 2,
            ErrorCategory::Configuration | ErrorCategory::System => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, PairSumError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_and_exit_codes() {
        let too_short = PairSumError::from(InputViolation::TooShort { len: 1 });
        assert_eq!(too_short.category(), ErrorCategory::Input);
        assert_eq!(too_short.exit_code(), 1);
        assert!(too_short.is_invalid_input());

        let not_found = PairSumError::NotFound { target: "10".to_string() };
        assert_eq!(not_found.category(), ErrorCategory::Search);
        assert_eq!(not_found.exit_code(), 2);
        assert!(not_found.is_not_found());

        let config = PairSumError::ConfigError { message: "no problems".to_string() };
        assert_eq!(config.exit_code(), 3);
    }

    #[test]
    fn test_display_messages() {
        let err = PairSumError::from(InputViolation::NotSorted { position: 3 });
        assert!(err.to_string().starts_with("Invalid input:"));
        assert!(err.user_friendly_message().contains("position 3"));

        let err = PairSumError::NotFound { target: "10".to_string() };
        assert_eq!(err.to_string(), "No pair sums to 10");
    }
}
