use std::sync::Arc;

use satisfactory_exporter::api;
use satisfactory_exporter::config::ExporterConfig;
use satisfactory_exporter::metrics::{ProcessCollector, Registry, ServerStateCollector};
use satisfactory_exporter::satisfactory::SatisfactoryClient;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "satisfactory_exporter=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let config = ExporterConfig::from_env()?;
    let client = SatisfactoryClient::new(&config)?;

    let mut registry = Registry::new();
    registry.register(Box::new(ServerStateCollector::new(client)));
    match ProcessCollector::new() {
        Ok(collector) => registry.register(Box::new(collector)),
        Err(error) => tracing::warn!(error = %error, "Process metrics unavailable"),
    }

    tracing::info!(
        host = %config.host,
        port = config.port,
        insecure = config.insecure,
        "satisfactory-exporter initialized"
    );

    api::serve(Arc::new(registry)).await?;

    Ok(())
}
