use crate::domain::model::{DailyEntry, DailySeries, DateRange, DaySlot, Report, Summary, TopDay};

pub const ROLLING_WINDOW: usize = 3;
pub const TOP_DAYS: usize = 5;

/// 由每日序列產生報表：移動平均、前五名、彙總
pub fn aggregate(series: &DailySeries) -> Report {
    let averages = rolling_average(series.slots(), ROLLING_WINDOW);

    let daily = series
        .iter()
        .zip(averages)
        .map(|(slot, rolling_avg_3)| DailyEntry {
            date: slot.date,
            sales: slot.total as f64,
            rolling_avg_3,
        })
        .collect();

    Report {
        range: DateRange {
            start_date: series.start_date(),
            end_date: series.end_date(),
        },
        daily,
        top5_days: top_days(series, TOP_DAYS),
        summary: summarize(series),
    }
}

/// 尾隨視窗平均；序列開頭不足一個視窗時以現有天數計算
pub fn rolling_average(slots: &[DaySlot], window: usize) -> Vec<f64> {
    let window = window.max(1);

    (0..slots.len())
        .map(|i| {
            let from = (i + 1).saturating_sub(window);
            let span = &slots[from..=i];
            let sum: u64 = span.iter().map(|slot| slot.total).sum();
            sum as f64 / span.len() as f64
        })
        .collect()
}

/// 取金額最高的 n 天；同額時維持日期先後（穩定排序）
pub fn top_days(series: &DailySeries, n: usize) -> Vec<TopDay> {
    let mut ranked: Vec<&DaySlot> = series.iter().collect();
    ranked.sort_by(|a, b| b.total.cmp(&a.total));

    ranked
        .into_iter()
        .take(n)
        .map(|slot| TopDay {
            date: slot.date,
            sales: slot.total as f64,
        })
        .collect()
}

pub fn summarize(series: &DailySeries) -> Summary {
    let total = series.total();
    let days = series.len();

    Summary {
        total_sales: total as f64,
        days,
        mean_daily_sales: total as f64 / days as f64,
    }
}
