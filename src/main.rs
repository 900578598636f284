use clap::Parser;
use sales_report::core::ConfigProvider;
use sales_report::utils::{logger, validation::Validate};
use sales_report::{
    CliConfig, HttpRecordSource, LocalStorage, ReportEngine, ReportError, ReportExporter,
};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting sales-report CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = run(&config).await {
        tracing::error!(
            "❌ Report failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        // 輸出用戶友好的錯誤信息
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        std::process::exit(e.exit_code());
    }
}

async fn run(config: &CliConfig) -> Result<(), ReportError> {
    // 驗證配置
    config.validate()?;
    let (start, end) = config.date_range()?;

    let source = HttpRecordSource::from_config(config)?;
    let engine = ReportEngine::with_max_range_days(source, config.max_range_days());
    let report = engine.run(start, end).await?;

    match &config.output_path {
        Some(output_path) => {
            let storage = LocalStorage::new(output_path.clone());
            let exporter = ReportExporter::new(storage.clone());
            let file_name = exporter.export(&report, config.format).await?;
            let full_path = storage.full_path(&file_name);

            tracing::info!("📁 Output saved to: {}", full_path);
            println!("✅ Report saved to: {}", full_path);
        }
        None => {
            println!("{}", config.format.render(&report)?);
        }
    }

    Ok(())
}
