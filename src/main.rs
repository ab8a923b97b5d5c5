use clap::Parser;
use openapi_split::utils::{logger, validation::Validate};
use openapi_split::{CliConfig, LocalStorage, SplitEngine};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting openapi-split CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let output_path = config.output_path.clone();
    let storage = LocalStorage::new(output_path.clone());
    let engine = SplitEngine::new(storage, config);

    match engine.run().await {
        Ok(summary) => {
            if summary.all_succeeded() {
                tracing::info!("✅ Spec split completed successfully!");
                println!(
                    "✅ Spec split completed: {} files written",
                    summary.total_written()
                );
            } else {
                tracing::warn!("⚠️ Spec split finished with failed sections");
                println!(
                    "⚠️ Spec split finished with failed sections ({} files written)",
                    summary.total_written()
                );
            }
            println!("📁 Output saved under: {}", output_path);
        }
        Err(e) => {
            tracing::error!("❌ Spec processing failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }

    Ok(())
}
