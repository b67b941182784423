use thiserror::Error;

#[derive(Error, Debug)]
pub enum FixletError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Malformed row at line {line}: expected at least {expected} fields, found {found}")]
    MalformedRowError {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("Quoting error at line {line}: {reason}")]
    QuotingError { line: u64, reason: &'static str },

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Session IO error: {0}")]
    SessionError(std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Load,
    Config,
    Runtime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl FixletError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FixletError::IoError(_)
            | FixletError::CsvError(_)
            | FixletError::MalformedRowError { .. }
            | FixletError::QuotingError { .. } => ErrorCategory::Load,
            FixletError::TomlError(_)
            | FixletError::ConfigError { .. }
            | FixletError::InvalidConfigValueError { .. } => ErrorCategory::Config,
            FixletError::SessionError(_) => ErrorCategory::Runtime,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Config => ErrorSeverity::Medium,
            ErrorCategory::Load => ErrorSeverity::High,
            ErrorCategory::Runtime => ErrorSeverity::Critical,
        }
    }

    /// Process exit code; 2 is left to clap for usage errors.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Load => 1,
            ErrorCategory::Runtime => 3,
            ErrorCategory::Config => 4,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            FixletError::IoError(e) => format!("Error loading CSV: {}", e),
            FixletError::CsvError(e) => format!("Error loading CSV: {}", e),
            FixletError::MalformedRowError { line, found, .. } => format!(
                "Error loading CSV: row on line {} has only {} field(s)",
                line, found
            ),
            FixletError::QuotingError { line, reason } => {
                format!("Error loading CSV: line {}: {}", line, reason)
            }
            FixletError::SessionError(e) => format!("Session aborted: {}", e),
            other => format!("Invalid configuration: {}", other),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            FixletError::IoError(_) => "Check that the file exists and is readable",
            FixletError::CsvError(_) => {
                "Check quoting and that every row has the same number of fields as the header"
            }
            FixletError::MalformedRowError { .. } => {
                "Each row needs SiteID, FxiletID, Name, Criticality, RelevantComputerCount"
            }
            FixletError::QuotingError { .. } => {
                "Close every quoted field and double any quote inside it (\"\")"
            }
            FixletError::SessionError(_) => "Check that stdin and stdout are still open",
            _ => "Fix the settings file or command-line options and retry",
        }
    }
}

pub type Result<T> = std::result::Result<T, FixletError>;
