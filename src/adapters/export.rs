use crate::core::{Report, Storage};
use crate::utils::error::{ReportError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Json,
    Csv,
}

impl OutputFormat {
    pub fn file_name(&self) -> &'static str {
        match self {
            OutputFormat::Json => "sales_report.json",
            OutputFormat::Csv => "sales_report.csv",
        }
    }

    pub fn render(&self, report: &Report) -> Result<String> {
        match self {
            OutputFormat::Json => render_json(report),
            OutputFormat::Csv => render_daily_csv(report),
        }
    }
}

pub fn render_json(report: &Report) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// 只輸出每日明細：date,sales,rolling_avg_3
pub fn render_daily_csv(report: &Report) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for entry in &report.daily {
        writer.serialize(entry)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ReportError::IoError(e.into_error()))?;

    String::from_utf8(bytes).map_err(|e| {
        ReportError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    })
}

/// 將報表寫入儲存空間，回傳相對檔名
pub struct ReportExporter<S: Storage> {
    storage: S,
}

impl<S: Storage> ReportExporter<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub async fn export(&self, report: &Report, format: OutputFormat) -> Result<String> {
        let content = format.render(report)?;
        let file_name = format.file_name();

        tracing::debug!("Writing {} ({} bytes) to storage", file_name, content.len());
        self.storage.write_file(file_name, content.as_bytes()).await?;

        Ok(file_name.to_string())
    }
}
