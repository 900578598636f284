pub mod aggregator;
pub mod engine;
pub mod extractor;
pub mod report;
pub mod synthesizer;

pub use crate::domain::model::{DailySeries, DaySlot, Record, Report};
pub use crate::domain::ports::{ConfigProvider, RecordSource, Storage};
pub use crate::utils::error::Result;
