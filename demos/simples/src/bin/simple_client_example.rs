use pardot_client::application::client::Client;
use pardot_client::application::config::Config;
use pardot_client::application::interfaces::prospect::ProspectService;
use pardot_client::model::requests::IdField;
use pardot_client::utils::setup_logger;
use std::env;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    setup_logger();

    info!("Starting simple client example");

    // Credentials come from PARDOT_* environment variables or a .env file
    let client = Client::new(Config::new())?;
    info!("✓ Client created, login happens on the first call");

    let email = env::var("PARDOT_PROSPECT_EMAIL").unwrap_or_else(|_| "jane@example.com".into());
    let prospect = client.read_prospect(IdField::Email, &email, None).await?;

    info!(
        "Prospect: {}",
        serde_json::to_string_pretty(&prospect.into_value())?
    );

    Ok(())
}
