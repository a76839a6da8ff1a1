use clap::Parser;
use employee_gateway::server::{self, AppState};
use employee_gateway::utils::{logger, validation::Validate};
use employee_gateway::{
    CliConfig, ConfigProvider, EmployeeQueryService, GatewayError, HttpEmployeeClient, TomlConfig,
};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    // 有指定設定檔時以 TOML 為準
    let toml_config = match cli.config.as_deref().map(TomlConfig::from_file).transpose() {
        Ok(config) => config,
        Err(e) => {
            // 日誌尚未初始化，只能直接輸出
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    match &toml_config {
        Some(config) if config.json_logs() || cli.json_logs => {
            logger::init_json_logger(cli.verbose, config.log_directive())
        }
        Some(config) => logger::init_cli_logger(cli.verbose, config.log_directive()),
        None if cli.json_logs => logger::init_json_logger(cli.verbose, None),
        None => logger::init_cli_logger(cli.verbose, None),
    }

    tracing::info!("Starting employee-gateway");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let result = match toml_config {
        Some(config) => run(config).await,
        None => run(cli).await,
    };

    if let Err(e) = result {
        tracing::error!("❌ employee-gateway failed: {}", e);
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

        let exit_code = if e.is_config_error() { 1 } else { 2 };
        std::process::exit(exit_code);
    }
}

async fn run<C: ConfigProvider + Validate>(config: C) -> Result<(), GatewayError> {
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        return Err(e);
    }

    let addr = config.listen_addr()?;
    let client = HttpEmployeeClient::from_config(&config)?;
    tracing::info!("Upstream employee API: {}", client.endpoint());

    let state = AppState::new(EmployeeQueryService::new(client));
    server::serve(addr, state).await
}
