use crate::domain::model::Record;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// 記錄來源：回傳上游提供的記錄，順序即分配順序
#[async_trait]
pub trait RecordSource: Send + Sync {
    async fn fetch_records(&self) -> Result<Vec<Record>>;
}

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn request_timeout(&self) -> Duration;
    fn max_range_days(&self) -> i64;
}
