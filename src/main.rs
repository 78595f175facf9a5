use clap::Parser;
use rambler_horoscopes::config::cli::Command;
use rambler_horoscopes::utils::error::ErrorCategory;
use rambler_horoscopes::utils::logger;
use rambler_horoscopes::{Cli, HoroscopeClient, HoroscopeError};

async fn run(cli: &Cli, client: &HoroscopeClient) -> Result<serde_json::Value, HoroscopeError> {
    let output = match &cli.command {
        Command::Profile { sign } => serde_json::to_value(client.zodiac_profile(*sign).await?)?,
        Command::Horoscope {
            sign,
            horoscope_type,
            period,
        } => serde_json::to_value(client.horoscope(*sign, *horoscope_type, *period).await?)?,
        Command::Types { sign } => serde_json::to_value(client.available_types(*sign).await?)?,
        Command::Periods {
            sign,
            horoscope_type,
        } => serde_json::to_value(client.available_periods(*sign, *horoscope_type).await?)?,
    };
    Ok(output)
}

fn exit_code(error: &HoroscopeError) -> i32 {
    match error.category() {
        ErrorCategory::Configuration => 1,
        ErrorCategory::Network => 2,
        ErrorCategory::Data => 3,
    }
}

fn fail(error: HoroscopeError) -> ! {
    tracing::error!(
        "❌ Request failed: {} (Category: {:?})",
        error,
        error.category()
    );
    eprintln!("❌ {}", error);
    eprintln!("💡 {}", error.recovery_suggestion());
    std::process::exit(exit_code(&error));
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let file_config = cli.load_file_config().unwrap_or_else(|e| fail(e));

    // 初始化日誌
    logger::init_logger(
        file_config.logging.level.as_deref(),
        cli.verbose,
        cli.log_json || file_config.logging.json.unwrap_or(false),
    );

    // 其餘欄位在合併命令列參數後由 HoroscopeClient::new 檢查
    if let Err(e) = file_config.validate_logging() {
        fail(e);
    }

    let config = cli.client_config(&file_config);
    tracing::debug!("Client config: {:?}", config);

    let client = HoroscopeClient::new(config).unwrap_or_else(|e| fail(e));

    match run(&cli, &client).await {
        Ok(output) => {
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(())
        }
        Err(e) => fail(e),
    }
}
