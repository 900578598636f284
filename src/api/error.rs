use crate::utils::error::{ErrorCategory, ReportError};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Report(#[from] ReportError),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        let AppError::Report(err) = self;
        match err {
            ReportError::UpstreamTimeout { .. } => StatusCode::GATEWAY_TIMEOUT,
            _ => match err.category() {
                ErrorCategory::Input => StatusCode::BAD_REQUEST,
                ErrorCategory::Upstream => StatusCode::BAD_GATEWAY,
                ErrorCategory::Configuration | ErrorCategory::System => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
        }
    }
}

/// Converts `AppError` into an HTTP response with a `{"detail": ...}` body.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let AppError::Report(err) = self;

        let detail = if status.is_client_error() {
            tracing::debug!(error = %err, "Rejected request.");
            err.to_string()
        } else if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = ?err, "Internal error.");
            format!("Internal error: {}", err)
        } else {
            tracing::warn!(error = %err, suggestion = %err.recovery_suggestion(), "Upstream error.");
            err.to_string()
        };

        let body = Json(json!({ "detail": detail }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn status_of(err: ReportError) -> StatusCode {
        AppError::from(err).status_code()
    }

    #[test]
    fn test_status_mapping() {
        let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

        assert_eq!(
            status_of(ReportError::InvalidRange { start: day, end: day }),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(ReportError::InvalidDate {
                value: "x".to_string()
            }),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(ReportError::RangeTooLarge {
                days: 400,
                max_days: 365
            }),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(ReportError::UpstreamStatus {
                status: 503,
                body: String::new()
            }),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            status_of(ReportError::UpstreamTimeout { seconds: 20 }),
            StatusCode::GATEWAY_TIMEOUT
        );
        assert_eq!(
            status_of(ReportError::ConfigError {
                message: "bad".to_string()
            }),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
