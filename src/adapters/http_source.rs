use crate::core::{ConfigProvider, Record, RecordSource};
use crate::utils::error::{ReportError, Result};
use reqwest::Client;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/posts";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 20;
const ERROR_BODY_PREVIEW_CHARS: usize = 200;

/// 以 HTTP GET 取得 `[{title, body}]` 記錄
pub struct HttpRecordSource {
    endpoint: String,
    timeout: Duration,
    client: Client,
}

impl HttpRecordSource {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(client_build_error)?;
        Ok(Self {
            endpoint: endpoint.into(),
            timeout,
            client,
        })
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        Self::new(config.api_endpoint(), config.request_timeout())
    }

    fn map_request_error(&self, err: reqwest::Error) -> ReportError {
        if err.is_timeout() {
            ReportError::UpstreamTimeout {
                seconds: self.timeout.as_secs(),
            }
        } else {
            ReportError::ApiError(err)
        }
    }
}

#[async_trait::async_trait]
impl RecordSource for HttpRecordSource {
    async fn fetch_records(&self) -> Result<Vec<Record>> {
        tracing::debug!("Making API request to: {}", self.endpoint);
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| self.map_request_error(e))?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        let text = response.text().await.map_err(|e| self.map_request_error(e))?;

        if !status.is_success() {
            return Err(ReportError::UpstreamStatus {
                status: status.as_u16(),
                body: text.chars().take(ERROR_BODY_PREVIEW_CHARS).collect(),
            });
        }

        let json_data: serde_json::Value =
            serde_json::from_str(&text).map_err(|e| ReportError::UpstreamFormat {
                message: format!("response is not valid JSON: {}", e),
            })?;

        records_from_json(json_data)
    }
}

/// client 建立失敗屬本機設定問題，不是上游錯誤
fn client_build_error(err: reqwest::Error) -> ReportError {
    ReportError::ConfigError {
        message: format!("failed to build HTTP client: {}", err),
    }
}

/// 陣列 → 每個物件一筆記錄；單一物件 → 一筆記錄；其他格式視為錯誤
pub fn records_from_json(json_data: serde_json::Value) -> Result<Vec<Record>> {
    match json_data {
        serde_json::Value::Array(items) => {
            let mut records = Vec::with_capacity(items.len());
            for (index, item) in items.into_iter().enumerate() {
                match item {
                    serde_json::Value::Object(obj) => records.push(Record::from_json_object(&obj)),
                    other => {
                        tracing::warn!("Skipping non-object item at index {}: {}", index, other);
                    }
                }
            }
            Ok(records)
        }
        serde_json::Value::Object(obj) => Ok(vec![Record::from_json_object(&obj)]),
        other => Err(ReportError::UpstreamFormat {
            message: format!("expected a JSON array of records, got {}", json_kind(&other)),
        }),
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
