use crate::core::report::compute_report;
use crate::domain::model::Report;
use crate::domain::ports::RecordSource;
use crate::utils::error::Result;
use crate::utils::validation::validate_date_span;
use chrono::NaiveDate;

pub const DEFAULT_MAX_RANGE_DAYS: i64 = 365;

/// 串接記錄來源與核心計算：驗證區間 → 取得記錄 → 產生報表
pub struct ReportEngine<S: RecordSource> {
    source: S,
    max_range_days: i64,
}

impl<S: RecordSource> ReportEngine<S> {
    pub fn new(source: S) -> Self {
        Self::with_max_range_days(source, DEFAULT_MAX_RANGE_DAYS)
    }

    pub fn with_max_range_days(source: S, max_range_days: i64) -> Self {
        Self {
            source,
            max_range_days,
        }
    }

    pub async fn run(&self, start: NaiveDate, end: NaiveDate) -> Result<Report> {
        tracing::info!("Building sales report for {} .. {}", start, end);

        // 先驗證區間，避免無謂的上游請求
        validate_date_span(start, end, self.max_range_days)?;

        tracing::debug!("Fetching records from source");
        let records = self.source.fetch_records().await?;
        tracing::info!("Fetched {} records", records.len());

        let report = compute_report(&records, start, end)?;
        tracing::info!(
            "Report ready: {} days, total sales {}",
            report.summary.days,
            report.summary.total_sales
        );

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Record;
    use crate::utils::error::ReportError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct StaticSource {
        records: Vec<Record>,
        calls: Arc<AtomicUsize>,
    }

    impl StaticSource {
        fn new(records: Vec<Record>) -> Self {
            Self {
                records,
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }
    }

    #[async_trait]
    impl RecordSource for StaticSource {
        async fn fetch_records(&self) -> Result<Vec<Record>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.records.clone())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl RecordSource for FailingSource {
        async fn fetch_records(&self) -> Result<Vec<Record>> {
            Err(ReportError::UpstreamTimeout { seconds: 20 })
        }
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[tokio::test]
    async fn test_run_computes_report_from_source() {
        let source = StaticSource::new(vec![Record::new("ab", "cd"), Record::new("x", "")]);
        let engine = ReportEngine::new(source);

        let report = engine.run(date("2024-01-01"), date("2024-01-02")).await.unwrap();

        assert_eq!(report.daily[0].sales, 4.0);
        assert_eq!(report.daily[1].sales, 1.0);
        assert_eq!(report.summary.total_sales, 5.0);
    }

    #[tokio::test]
    async fn test_run_validates_before_fetching() {
        let source = StaticSource::new(vec![]);
        let calls = source.calls.clone();
        let engine = ReportEngine::with_max_range_days(source, 30);

        let too_large = engine.run(date("2024-01-01"), date("2024-03-01")).await;
        assert!(matches!(too_large, Err(ReportError::RangeTooLarge { .. })));

        let inverted = engine.run(date("2024-01-02"), date("2024-01-01")).await;
        assert!(matches!(inverted, Err(ReportError::InvalidRange { .. })));

        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_run_propagates_source_errors() {
        let engine = ReportEngine::new(FailingSource);

        let result = engine.run(date("2024-01-01"), date("2024-01-01")).await;
        assert!(matches!(result, Err(ReportError::UpstreamTimeout { seconds: 20 })));
    }
}
