use chrono::NaiveDate;
use httpmock::prelude::*;
use sales_report::{HttpRecordSource, LocalStorage, OutputFormat, Report, ReportEngine, ReportExporter};
use std::time::Duration;
use tempfile::TempDir;
use tokio_test::assert_ok;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

async fn build_report(server: &MockServer) -> Report {
    let source = HttpRecordSource::new(server.url("/posts"), Duration::from_secs(5)).unwrap();
    let engine = ReportEngine::new(source);
    engine.run(date("2024-01-01"), date("2024-01-03")).await.unwrap()
}

async fn posts_server() -> MockServer {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/posts");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!([
                    {"title": "aaa", "body": "bbb"},
                    {"title": "cc", "body": ""},
                    {"title": "", "body": "d"},
                    {"title": "e", "body": "f"}
                ]));
        })
        .await;
    server
}

#[tokio::test]
async fn test_export_json_report_to_local_storage() {
    let server = posts_server().await;
    let report = build_report(&server).await;

    let temp_dir = TempDir::new().unwrap();
    let storage = LocalStorage::new(temp_dir.path().to_str().unwrap());
    let exporter = ReportExporter::new(storage);

    let file_name = assert_ok!(exporter.export(&report, OutputFormat::Json).await);
    assert_eq!(file_name, "sales_report.json");

    let written = std::fs::read_to_string(temp_dir.path().join("sales_report.json")).unwrap();
    let parsed: Report = serde_json::from_str(&written).unwrap();
    assert_eq!(parsed.range, report.range);
    assert_eq!(parsed.top5_days, report.top5_days);
    assert_eq!(parsed.summary.total_sales, 11.0);
    assert_eq!(parsed.summary.days, 3);

    // 6+2 → 第一天, 2 → 第二天, 1 → 第三天
    let sales: Vec<f64> = parsed.daily.iter().map(|d| d.sales).collect();
    assert_eq!(sales, vec![8.0, 2.0, 1.0]);
}

#[tokio::test]
async fn test_export_csv_report_to_local_storage() {
    let server = posts_server().await;
    let report = build_report(&server).await;

    let temp_dir = TempDir::new().unwrap();
    let storage = LocalStorage::new(temp_dir.path().join("out").to_str().unwrap());
    let exporter = ReportExporter::new(storage);

    let file_name = assert_ok!(exporter.export(&report, OutputFormat::Csv).await);
    assert_eq!(file_name, "sales_report.csv");

    let written = std::fs::read_to_string(temp_dir.path().join("out/sales_report.csv")).unwrap();
    let mut reader = csv::Reader::from_reader(written.as_bytes());
    let headers = reader.headers().unwrap().clone();
    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        vec!["date", "sales", "rolling_avg_3"]
    );

    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 3);
    assert_eq!(&rows[0][0], "2024-01-01");
    assert_eq!(rows[1][1].parse::<f64>().unwrap(), 2.0);
    assert_eq!(rows[2][2].parse::<f64>().unwrap(), 11.0 / 3.0);
}
