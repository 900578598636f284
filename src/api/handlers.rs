use crate::adapters::http_source::HttpRecordSource;
use crate::api::{error::AppError, AppState};
use crate::core::engine::ReportEngine;
use crate::core::{ConfigProvider, Report};
use crate::utils::error::ReportError;
use crate::utils::validation::parse_date;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct SummaryQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

fn required<'a>(name: &str, value: &'a Option<String>) -> Result<&'a str, ReportError> {
    value
        .as_deref()
        .ok_or_else(|| ReportError::MissingParameter {
            name: name.to_string(),
        })
}

/// # GET /sales/summary?start_date=YYYY-MM-DD&end_date=YYYY-MM-DD
/// Daily sales with a 3-day rolling average, top-5 days and summary totals.
pub async fn get_sales_summary(
    State(state): State<Arc<AppState>>,
    query: Result<Query<SummaryQuery>, QueryRejection>,
) -> Result<Json<Report>, AppError> {
    // 查詢字串解析失敗也回傳 {"detail": ...}
    let Query(query) = query.map_err(|rejection| ReportError::InvalidQuery {
        message: rejection.body_text(),
    })?;
    let start = parse_date(required("start_date", &query.start_date)?)?;
    let end = parse_date(required("end_date", &query.end_date)?)?;

    // 每個請求各自建立 HTTP client，請求結束即釋放
    let source = HttpRecordSource::from_config(state.config.as_ref())?;
    let engine = ReportEngine::with_max_range_days(source, state.config.max_range_days());

    let report = engine.run(start, end).await?;
    Ok(Json(report))
}

/// # GET /health
pub async fn health() -> &'static str {
    "OK"
}
