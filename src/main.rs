use std::time::Duration;

use clap::Parser;
use facescan_signup::config::toml_config::TomlConfig;
use facescan_signup::core::export::export_csv;
use facescan_signup::domain::ports::{ConfigProvider, SignupStore};
use facescan_signup::utils::error::ErrorSeverity;
use facescan_signup::utils::{logger, validation::Validate};
use facescan_signup::{
    CliConfig, HttpCollector, JsonFileStore, Result, SignupEngine, SignupSubmitter, SubmitError,
};

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting facescan-signup CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    match dispatch(&cli).await {
        Ok(()) => {}
        Err(e) => {
            // 記錄詳細錯誤信息
            tracing::error!(
                "❌ Signup submission failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            // 輸出用戶友好的錯誤信息
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

async fn dispatch(cli: &CliConfig) -> Result<()> {
    match &cli.config {
        Some(path) => {
            let config = TomlConfig::from_file(path)?;
            check_config(&config);
            let monitor = cli.monitor || config.monitoring_enabled();
            run(cli, &config, monitor).await
        }
        None => {
            check_config(cli);
            run(cli, cli, cli.monitor).await
        }
    }
}

fn check_config<C: Validate>(config: &C) {
    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }
}

async fn run<C: ConfigProvider>(cli: &CliConfig, config: &C, monitor: bool) -> Result<()> {
    let store = JsonFileStore::new(config.store_path(), config.namespace());

    if cli.list {
        let records = store.load().await?;
        if records.is_empty() {
            println!("No signups captured yet");
        } else {
            for record in &records {
                println!("{}  {}", record.wire_timestamp(), record.email);
            }
        }
        return Ok(());
    }

    if let Some(path) = &cli.export {
        let count = export_csv(&store, path).await?;
        tracing::info!("📁 Exported {} signups to {}", count, path);
        println!("📁 Exported {} signups to {}", count, path);
        return Ok(());
    }

    let email = cli
        .email
        .as_deref()
        .ok_or_else(|| SubmitError::MissingConfig {
            field: "email".to_string(),
        })?;

    let collector = match config.collector_endpoint() {
        Some(endpoint) => Some(HttpCollector::new(
            endpoint,
            config.encoding(),
            Duration::from_secs(config.timeout_seconds()),
        )?),
        None => None,
    };

    let submitter = SignupSubmitter::new(collector, store);
    let engine = SignupEngine::new_with_monitoring(submitter, monitor);

    let delivery = engine.run(email).await?;

    tracing::info!("✅ Signup submitted successfully!");
    println!("✅ You're on the list! ({})", delivery);

    Ok(())
}
