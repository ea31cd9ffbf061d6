use anyhow::Context;
use clap::Parser;
use quantum_depot::core::ConfigProvider;
use quantum_depot::utils::error::ErrorSeverity;
use quantum_depot::utils::logger;
use quantum_depot::{run_console, CliConfig, Session, StatusFormat};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 先載入配置，日誌格式取決於最終的輸出格式
    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            logger::init_cli_logger(cli.verbose);
            tracing::error!("❌ Configuration failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(2);
        }
    };

    // 初始化日誌
    match config.status_format() {
        StatusFormat::Json => logger::init_json_logger(cli.verbose),
        StatusFormat::Text => logger::init_cli_logger(cli.verbose),
    }

    tracing::info!("Starting quantum-depot control panel");
    if let Some(path) = &cli.config {
        tracing::info!("📁 Configuration loaded from: {}", path);
    }
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
        tracing::debug!("Resolved config: {:?}", config);
    }

    let mut session = Session::from_config(&config).context("failed to start session")?;

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    match run_console(&mut session, stdin.lock(), &mut stdout) {
        Ok(()) => {
            tracing::info!(
                "✅ Session ended normally with {} objects",
                session.inventory().len()
            );
        }
        Err(e) => {
            tracing::error!(
                "❌ Session aborted: {} (Severity: {:?})",
                e,
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            // 崩潰屬於致命錯誤，整個程序結束
            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High | ErrorSeverity::Critical => 1,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
