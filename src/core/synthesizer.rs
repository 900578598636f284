use crate::core::extractor;
use crate::domain::model::{DailySeries, DaySlot, Record};
use crate::utils::error::{ReportError, Result};
use chrono::NaiveDate;

/// 建立 [start, end] 的每日序列，並將記錄金額依位置循環分配：
/// 第 i 筆記錄累加到第 `i % 天數` 天。
pub fn synthesize(records: &[Record], start: NaiveDate, end: NaiveDate) -> Result<DailySeries> {
    if end < start {
        return Err(ReportError::InvalidRange { start, end });
    }

    let day_count = (end - start).num_days() as usize + 1;
    let mut slots: Vec<DaySlot> = start.iter_days().take(day_count).map(DaySlot::empty).collect();

    for (i, record) in records.iter().enumerate() {
        slots[i % day_count].total += extractor::amount(record);
    }

    tracing::trace!(
        records = records.len(),
        days = day_count,
        "synthesized daily series"
    );

    Ok(DailySeries::from_slots(slots))
}
