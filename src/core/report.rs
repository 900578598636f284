use crate::core::{aggregator, synthesizer};
use crate::domain::model::{Record, Report};
use crate::utils::error::Result;
use chrono::NaiveDate;

/// 核心入口：記錄 → 每日序列 → 報表。純函式，不做 I/O。
pub fn compute_report(records: &[Record], start: NaiveDate, end: NaiveDate) -> Result<Report> {
    let series = synthesizer::synthesize(records, start, end)?;
    let report = aggregator::aggregate(&series);

    tracing::debug!(
        records = records.len(),
        days = report.summary.days,
        total_sales = report.summary.total_sales,
        "computed sales report"
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ReportError;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_compute_report_single_day() {
        let records = vec![Record::new("ab", "cd"), Record::new("x", "")];
        let report = compute_report(&records, date("2024-01-01"), date("2024-01-01")).unwrap();

        assert_eq!(report.daily.len(), 1);
        assert_eq!(report.daily[0].sales, 5.0);
        assert_eq!(report.daily[0].rolling_avg_3, 5.0);
        assert_eq!(report.top5_days.len(), 1);
        assert_eq!(report.summary.total_sales, 5.0);
        assert_eq!(report.summary.days, 1);
        assert_eq!(report.summary.mean_daily_sales, 5.0);
    }

    #[test]
    fn test_compute_report_rejects_inverted_range() {
        let result = compute_report(&[], date("2024-03-01"), date("2024-02-01"));
        assert!(matches!(result, Err(ReportError::InvalidRange { .. })));
    }
}
