use clap::Parser;
use maps_search::utils::logger;
use maps_search::{CliConfig, GoogleMapsClient, OutputFormat, RestaurantSearch, SearchError};

fn exit_code(e: &SearchError) -> i32 {
    match e {
        _ if e.is_config_error() => 1,
        SearchError::IoError(_) => 1,
        SearchError::ExternalServiceError { .. } => 2,
        _ => 3,
    }
}

async fn run(config: &CliConfig) -> maps_search::Result<String> {
    let resolved = config.resolve()?;
    tracing::debug!("Search settings: {:?}", resolved.settings);

    let client = GoogleMapsClient::new(resolved.api_key.as_str(), resolved.settings.base_url.as_str());
    let search = RestaurantSearch::new(client, &resolved.settings);

    match config.format {
        OutputFormat::Text => search.search(&resolved.address).await,
        OutputFormat::Json => {
            let restaurants = search.lookup(&resolved.address).await?;
            Ok(serde_json::to_string_pretty(&restaurants)?)
        }
    }
}

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting maps-search");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    match run(&config).await {
        Ok(output) => {
            println!("{}", output.trim_end());
        }
        Err(e) => {
            tracing::error!("Search failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(exit_code(&e));
        }
    }
}
