use airport_directory::server::start_server;
use airport_directory::utils::error::{DirectoryError, ErrorSeverity};
use airport_directory::utils::{logger, validation::Validate};
use airport_directory::{CliConfig, DirectoryConfig, TomlConfig};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_server_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting airport-directory proxy");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config: Box<dyn DirectoryConfig> = match cli.config.clone() {
        Some(path) => {
            tracing::info!("📄 Loading configuration from {}", path);
            match TomlConfig::from_file(path).and_then(|c| c.validate().map(|_| c)) {
                Ok(config) => Box::new(config),
                Err(e) => fail(e),
            }
        }
        None => {
            if let Err(e) = cli.validate() {
                fail(e);
            }
            Box::new(cli)
        }
    };

    if let Err(e) = start_server(config.as_ref()).await {
        fail(e);
    }

    Ok(())
}

fn fail(e: DirectoryError) -> ! {
    tracing::error!(
        "❌ airport-directory failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 建議: {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code)
}
