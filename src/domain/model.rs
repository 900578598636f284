use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 輸入記錄：只有標題與內文，沒有日期，也沒有身分（只看順序）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
}

impl Record {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    /// 從上游 JSON 物件建立記錄；缺少或非字串的欄位視為空字串
    pub fn from_json_object(obj: &serde_json::Map<String, serde_json::Value>) -> Self {
        let text = |key: &str| {
            obj.get(key)
                .and_then(|v| v.as_str())
                .unwrap_or_default()
                .to_string()
        };

        Self {
            title: text("title"),
            body: text("body"),
        }
    }
}

pub type Amount = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaySlot {
    pub date: NaiveDate,
    pub total: Amount,
}

impl DaySlot {
    pub(crate) fn empty(date: NaiveDate) -> Self {
        Self { date, total: 0 }
    }
}

/// 依日期遞增、逐日無缺漏的每日序列。只能由 synthesizer 建立。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailySeries {
    slots: Vec<DaySlot>,
}

impl DailySeries {
    pub(crate) fn from_slots(slots: Vec<DaySlot>) -> Self {
        debug_assert!(!slots.is_empty());
        debug_assert!(slots
            .windows(2)
            .all(|w| w[0].date.succ_opt() == Some(w[1].date)));
        Self { slots }
    }

    pub fn slots(&self) -> &[DaySlot] {
        &self.slots
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DaySlot> {
        self.slots.iter()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// 合法區間至少一天，恆為 false
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn start_date(&self) -> NaiveDate {
        self.slots[0].date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.slots[self.slots.len() - 1].date
    }

    pub fn total(&self) -> Amount {
        self.slots.iter().map(|slot| slot.total).sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    #[serde(with = "ymd")]
    pub start_date: NaiveDate,
    #[serde(with = "ymd")]
    pub end_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyEntry {
    #[serde(with = "ymd")]
    pub date: NaiveDate,
    pub sales: f64,
    pub rolling_avg_3: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopDay {
    #[serde(with = "ymd")]
    pub date: NaiveDate,
    pub sales: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub total_sales: f64,
    pub days: usize,
    pub mean_daily_sales: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub range: DateRange,
    pub daily: Vec<DailyEntry>,
    pub top5_days: Vec<TopDay>,
    pub summary: Summary,
}

/// 日期以 YYYY-MM-DD 字串序列化
mod ymd {
    use crate::utils::validation::DATE_FORMAT;
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format(DATE_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let s = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&s, DATE_FORMAT).map_err(serde::de::Error::custom)
    }
}
