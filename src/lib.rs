pub mod adapters;
#[cfg(feature = "server")]
pub mod api;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::ServiceConfig;

pub use adapters::{
    export::{OutputFormat, ReportExporter},
    http_source::HttpRecordSource,
    storage::LocalStorage,
};
pub use crate::core::{engine::ReportEngine, report::compute_report};
pub use domain::model::{DailyEntry, DailySeries, DaySlot, Record, Report, Summary, TopDay};
pub use utils::error::{ReportError, Result};
