use download_event_relay::{
    host, logging, AppError, DownloadEventRelay, LocalEventSource, RelayConfig,
};
use tokio::io::BufReader;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    logging::init_logging();

    let config = RelayConfig::from_env()?;
    let relay = DownloadEventRelay::from_current(&config)?;
    let source = LocalEventSource::new();
    relay.register(&source);

    tracing::info!(endpoint = %relay.endpoint(), "reading host events from stdin");

    let result = host::pump_host_events(BufReader::new(tokio::io::stdin()), &source).await;

    // Deliveries already started run to completion even if stdin failed.
    relay.shutdown().await;

    let dispatched = result?;
    tracing::info!(dispatched, "host closed stdin");
    Ok(())
}
