use crate::adapters::export::OutputFormat;
use crate::adapters::http_source::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECONDS};
use crate::core::engine::DEFAULT_MAX_RANGE_DAYS;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    parse_date, validate_path, validate_positive_number, validate_url, Validate,
};
use chrono::NaiveDate;
use clap::Parser;
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(name = "sales-report")]
#[command(about = "Deterministic daily sales report with a 3-day rolling average")]
pub struct CliConfig {
    /// First day of the report (YYYY-MM-DD)
    #[arg(long)]
    pub start_date: String,

    /// Last day of the report, inclusive (YYYY-MM-DD)
    #[arg(long)]
    pub end_date: String,

    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub api_endpoint: String,

    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECONDS)]
    pub timeout_seconds: u64,

    #[arg(long, default_value_t = DEFAULT_MAX_RANGE_DAYS)]
    pub max_range_days: i64,

    /// Directory to write the report into; prints to stdout when omitted
    #[arg(long)]
    pub output_path: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn date_range(&self) -> Result<(NaiveDate, NaiveDate)> {
        Ok((parse_date(&self.start_date)?, parse_date(&self.end_date)?))
    }
}

impl ConfigProvider for CliConfig {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    fn max_range_days(&self) -> i64 {
        self.max_range_days
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_endpoint", &self.api_endpoint)?;
        validate_positive_number("timeout_seconds", self.timeout_seconds, 1)?;
        validate_positive_number("max_range_days", self.max_range_days, 0)?;
        if let Some(output_path) = &self.output_path {
            validate_path("output_path", output_path)?;
        }
        Ok(())
    }
}
