use thiserror::Error;

#[derive(Error, Debug)]
pub enum UniversityError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Scenario parsing error: {message}")]
    ConfigParse { message: String },

    #[error("Invalid value for '{field}': {reason} (got '{value}')")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfig { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Output,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    High,
    Critical,
}

impl ErrorSeverity {
    /// 依嚴重程度決定程序結束碼
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl UniversityError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            UniversityError::Io(_) | UniversityError::Serialization(_) => ErrorCategory::Output,
            UniversityError::ConfigParse { .. }
            | UniversityError::InvalidConfigValue { .. }
            | UniversityError::MissingConfig { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Output => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            UniversityError::Io(_) => "Check that standard output is writable and the scenario file exists",
            UniversityError::Serialization(_) => "Report this as a bug; the scenario could not be rendered",
            UniversityError::ConfigParse { .. } => "Make sure the scenario file is valid TOML",
            UniversityError::InvalidConfigValue { .. } => "Fix the highlighted field in the scenario file",
            UniversityError::MissingConfig { .. } => "Add the missing section to the scenario file",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            UniversityError::InvalidConfigValue { field, reason, .. } => {
                format!("Scenario field '{}' is invalid: {}", field, reason)
            }
            UniversityError::MissingConfig { field } => {
                format!("Scenario is missing '{}'", field)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, UniversityError>;
