use std::collections::HashSet;
use std::sync::Arc;

use tokio::runtime::Handle;
use tokio_util::task::TaskTracker;
use tracing::{debug, trace, warn};

use crate::{
    api::{CompanionClient, RelayConfig, RelayError},
    domain::{
        AppError, DeliveryPhase, DownloadItem, DownloadNotification, HostResponse,
        RequestDetails, ResourceType,
    },
    host::{EventKind, EventSource, HostEvent, ALL_URLS},
    utils::filename_from_url,
};

/// Watches the host's request and download events and forwards each one to the
/// companion. Deliveries are detached tasks; nothing they do reaches the host.
#[derive(Clone)]
pub struct DownloadEventRelay {
    client: CompanionClient,
    request_types: Arc<HashSet<ResourceType>>,
    runtime: Handle,
    deliveries: TaskTracker,
}

impl DownloadEventRelay {
    pub fn new(config: &RelayConfig, runtime: Handle) -> Self {
        Self {
            client: CompanionClient::new(config),
            request_types: Arc::new(config.request_types.clone()),
            runtime,
            deliveries: TaskTracker::new(),
        }
    }

    /// Builds a relay on the tokio runtime the caller is running in.
    pub fn from_current(config: &RelayConfig) -> Result<Self, AppError> {
        let runtime = Handle::try_current().map_err(|_| AppError::NoRuntime)?;
        Ok(Self::new(config, runtime))
    }

    pub fn endpoint(&self) -> &url::Url {
        self.client.endpoint()
    }

    /// Subscribes to both event kinds on `source`.
    pub fn register(&self, source: &dyn EventSource) {
        let relay = self.clone();
        source.subscribe(
            EventKind::BeforeRequest,
            Arc::new(move |event| match event {
                HostEvent::Request(details) => relay.on_before_request(&details),
                HostEvent::Download(_) => HostResponse::Continue,
            }),
        );

        let relay = self.clone();
        source.subscribe(
            EventKind::DeterminingFilename,
            Arc::new(move |event| match event {
                HostEvent::Download(item) => relay.on_determining_filename(&item),
                HostEvent::Request(_) => HostResponse::Continue,
            }),
        );

        debug!(endpoint = %self.client.endpoint(), filter = ALL_URLS, "download relay registered");
    }

    /// Request path: only allow-listed classifications are relayed, with the
    /// file name taken from the last path segment. The request always proceeds.
    pub fn on_before_request(&self, details: &RequestDetails) -> HostResponse {
        if self.request_types.contains(&details.resource_type) {
            self.notify(&details.url, filename_from_url(&details.url));
        } else {
            trace!(url = %details.url, kind = details.resource_type.as_str(), "request type not relayed");
        }
        HostResponse::Continue
    }

    /// Download path: url and suggested name are relayed verbatim and the
    /// browser keeps its own suggestion.
    pub fn on_determining_filename(&self, item: &DownloadItem) -> HostResponse {
        self.notify(&item.url, &item.filename);
        HostResponse::Continue
    }

    /// Spawns one delivery and returns immediately. The task handle is dropped.
    pub fn notify(&self, url: &str, filename: &str) {
        let notification = DownloadNotification::new(url, filename);
        let client = self.client.clone();
        self.deliveries.spawn_on(
            async move {
                deliver(&client, notification).await;
            },
            &self.runtime,
        );
    }

    /// Number of deliveries still running.
    pub fn in_flight(&self) -> usize {
        self.deliveries.len()
    }

    /// Waits for every delivery already started to finish. Nothing is aborted.
    /// Events arriving afterwards are still relayed; call this once the host is done.
    pub async fn shutdown(&self) {
        self.deliveries.close();
        self.deliveries.wait().await;
        debug!("all deliveries finished");
    }
}

/// Sends `notification` once and reports where it ended up. Failures are logged
/// and swallowed.
pub async fn deliver(client: &CompanionClient, notification: DownloadNotification) -> DeliveryPhase {
    let mut phase = DeliveryPhase::Created;
    trace!(url = %notification.url, ?phase, "notification created");

    phase = DeliveryPhase::Sent;
    trace!(url = %notification.url, ?phase, "posting notification");

    phase = match client.send(&notification).await {
        Ok(()) => DeliveryPhase::Acknowledged,
        Err(RelayError::Rejected { status }) => {
            warn!(url = %notification.url, %status, "companion rejected download notification");
            DeliveryPhase::Failed
        }
        Err(RelayError::Unreachable(e)) => {
            warn!(url = %notification.url, error = %e, "companion unreachable, notification dropped");
            DeliveryPhase::Failed
        }
    };
    debug_assert!(phase.is_final());

    debug!(url = %notification.url, filename = %notification.filename, ?phase, "delivery finished");
    phase
}
