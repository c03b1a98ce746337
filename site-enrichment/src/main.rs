use clap::Parser;
use dotenv::dotenv;
use shared_types::LatLong;
use site_enrichment::{EnrichmentClient, EnrichmentConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Print the site profile the dashboard would attach to a map click.
#[derive(Parser, Debug)]
#[command(name = "enrich", version, about)]
struct Cli {
    /// Latitude in degrees, -90 to 90
    #[arg(allow_hyphen_values = true)]
    lat: f64,
    /// Longitude in degrees, -180 to 180
    #[arg(allow_hyphen_values = true)]
    long: f64,
    /// Emit the profile as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,site_enrichment=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let at = LatLong::new(cli.lat, cli.long)?;

    let config = EnrichmentConfig::from_env();
    if config.openweather_api_key.is_none() {
        tracing::warn!("OPENWEATHER_API_KEY is not set, weather will be reported as N/A");
    }
    let client = EnrichmentClient::from_config(&config)?;
    let profile = client.enrich(at).await;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&profile)?);
    } else {
        println!("Location:    {}", profile.place);
        println!("Coordinates: {at}");
        println!("Soil type:   {}", profile.soil_type);
        println!("Temperature: {}", profile.temperature);
        println!("Humidity:    {}", profile.humidity);
        println!("Moisture:    {}", profile.moisture);
        println!("Zone name:   {}", profile.zone_name());
    }

    Ok(())
}
