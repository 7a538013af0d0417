use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info};

use mail_origins::config::SourceConfig;
use mail_origins::geo::{GeoProvider, StaticGeoTable};
use mail_origins::pipeline::{MapPayload, OriginPipeline};
use mail_origins::source::{FixtureSource, MailSource, batch_window, collect_messages};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = SourceConfig::from_env();

    let input_path = std::env::var("MAIL_ORIGINS_INPUT")
        .unwrap_or_else(|_| "./data/messages.json".to_string());
    let geo_path = std::env::var("MAIL_ORIGINS_GEO_TABLE")
        .unwrap_or_else(|_| "./data/geo-table.json".to_string());

    info!(
        input = %input_path,
        geo_table = %geo_path,
        query = %config.query,
        max = config.max_messages,
        "Mail Origins starting"
    );

    let source = FixtureSource::from_file(Path::new(&input_path))?;
    let geo: Arc<dyn GeoProvider> = Arc::new(StaticGeoTable::from_file(Path::new(&geo_path))?);

    let stream = source.fetch(&config.query, config.max_messages).await?;
    let messages = collect_messages(stream).await?;

    if let Some((first, last)) = batch_window(&messages) {
        debug!(%first, %last, "Batch delivery window");
    }
    info!(count = messages.len(), "Collected message batch");

    let pipeline = OriginPipeline::new(geo);
    let bubbles = pipeline.run(&messages);

    let payload = MapPayload::new(&bubbles)?;
    println!("{}", serde_json::to_string(&payload)?);

    Ok(())
}
