use anyhow::Context;
use clap::Parser;
use sales_report::utils::{logger, validation::Validate};
use sales_report::ServiceConfig;

#[derive(Parser)]
#[command(name = "sales-server")]
#[command(about = "HTTP service exposing GET /sales/summary")]
struct Args {
    /// Path to TOML configuration file; built-in defaults are used when omitted
    #[arg(short, long)]
    config: Option<String>,

    /// Override the bind address from config (e.g. 127.0.0.1:8000)
    #[arg(long)]
    bind: Option<String>,

    /// Override the record source endpoint from config
    #[arg(long)]
    api_endpoint: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 載入 TOML 配置
    let mut config = match &args.config {
        Some(path) => ServiceConfig::from_file(path)
            .with_context(|| format!("failed to load config file '{}'", path))?,
        None => ServiceConfig::default(),
    };

    // 應用命令列覆蓋設定
    if let Some(bind) = args.bind {
        config.server.bind = bind;
    }
    if let Some(endpoint) = args.api_endpoint {
        config.source.endpoint = endpoint;
    }

    logger::init_server_logger(config.logging.json, &config.logging.level);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    let addr = config.bind_addr()?;
    sales_report::api::run_server(config, addr).await
}
