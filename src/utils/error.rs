use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("end date {end} must not precede start date {start}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("Invalid date format: {value}. Expected YYYY-MM-DD")]
    InvalidDate { value: String },

    #[error("Date range too large. Max {max_days} days.")]
    RangeTooLarge { days: i64, max_days: i64 },

    #[error("Missing required query parameter: {name}")]
    MissingParameter { name: String },

    #[error("Invalid query string: {message}")]
    InvalidQuery { message: String },

    #[error("Upstream error {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    #[error("Timeout while fetching upstream data (after {seconds}s)")]
    UpstreamTimeout { seconds: u64 },

    #[error("Unexpected upstream payload: {message}")]
    UpstreamFormat { message: String },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// 呼叫端輸入錯誤（日期、範圍）
    Input,
    /// 上游資料來源錯誤
    Upstream,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ReportError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ReportError::InvalidRange { .. }
            | ReportError::InvalidDate { .. }
            | ReportError::RangeTooLarge { .. }
            | ReportError::MissingParameter { .. }
            | ReportError::InvalidQuery { .. } => ErrorCategory::Input,
            ReportError::UpstreamStatus { .. }
            | ReportError::UpstreamTimeout { .. }
            | ReportError::UpstreamFormat { .. }
            | ReportError::ApiError(_) => ErrorCategory::Upstream,
            ReportError::ConfigError { .. }
            | ReportError::ConfigValidationError { .. }
            | ReportError::InvalidConfigValueError { .. }
            | ReportError::MissingConfigError { .. } => ErrorCategory::Configuration,
            ReportError::CsvError(_)
            | ReportError::IoError(_)
            | ReportError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Upstream => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 錯誤是否應由呼叫端修正（對應 HTTP 4xx）
    pub fn is_client_error(&self) -> bool {
        self.category() == ErrorCategory::Input
    }

    /// CLI 結束碼
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Configuration => 1,
            ErrorCategory::Input => 2,
            ErrorCategory::Upstream => 3,
            ErrorCategory::System => 4,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ReportError::InvalidRange { .. } => {
                "Swap the dates so that start_date is on or before end_date".to_string()
            }
            ReportError::InvalidDate { .. } => {
                "Use the YYYY-MM-DD format, e.g. 2024-01-31".to_string()
            }
            ReportError::MissingParameter { .. } | ReportError::InvalidQuery { .. } => {
                "Pass both start_date and end_date, e.g. ?start_date=2024-01-01&end_date=2024-01-31"
                    .to_string()
            }
            ReportError::RangeTooLarge { max_days, .. } => {
                format!("Split the request into ranges of at most {} days", max_days)
            }
            ReportError::UpstreamStatus { .. } | ReportError::UpstreamFormat { .. } => {
                "Check that the record source endpoint is reachable and returns a JSON array"
                    .to_string()
            }
            ReportError::UpstreamTimeout { .. } => {
                "Retry later or raise the request timeout".to_string()
            }
            ReportError::ApiError(_) => {
                "Check network connectivity and the record source URL".to_string()
            }
            ReportError::ConfigError { .. }
            | ReportError::ConfigValidationError { .. }
            | ReportError::InvalidConfigValueError { .. }
            | ReportError::MissingConfigError { .. } => {
                "Review the configuration file and command-line arguments".to_string()
            }
            ReportError::IoError(_) => {
                "Check that the output directory exists and is writable".to_string()
            }
            ReportError::CsvError(_) | ReportError::SerializationError(_) => {
                "This is likely a bug; please report it with the failing date range".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Input => format!("Invalid request: {}", self),
            ErrorCategory::Upstream => format!("Could not load sales records: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::System => format!("Internal error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
