use std::collections::HashMap;

use parking_lot::RwLock;

use crate::domain::HostResponse;

use super::{EventHandler, EventKind, EventSource, HostEvent};

/// In-process event source: handlers are kept per kind and run synchronously
/// on [`dispatch`](LocalEventSource::dispatch).
#[derive(Default)]
pub struct LocalEventSource {
    handlers: RwLock<HashMap<EventKind, Vec<EventHandler>>>,
}

impl LocalEventSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handler_count(&self, kind: EventKind) -> usize {
        self.handlers.read().get(&kind).map_or(0, Vec::len)
    }

    /// Runs every handler subscribed to the event's kind, in registration order.
    pub fn dispatch(&self, event: HostEvent) -> Vec<HostResponse> {
        // Clone the handler list so a handler may subscribe without deadlocking.
        let handlers = self
            .handlers
            .read()
            .get(&event.kind())
            .cloned()
            .unwrap_or_default();

        handlers
            .iter()
            .map(|handler| handler(event.clone()))
            .collect()
    }
}

impl EventSource for LocalEventSource {
    fn subscribe(&self, kind: EventKind, handler: EventHandler) {
        self.handlers.write().entry(kind).or_default().push(handler);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DownloadItem, RequestDetails, ResourceType};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_dispatch_routes_by_kind() {
        let source = LocalEventSource::new();
        let requests = Arc::new(AtomicUsize::new(0));
        let counter = requests.clone();
        source.subscribe(
            EventKind::BeforeRequest,
            Arc::new(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
                HostResponse::Cancel
            }),
        );

        let responses = source.dispatch(HostEvent::Request(RequestDetails {
            url: "https://example.com/".to_string(),
            resource_type: ResourceType::Image,
        }));
        assert_eq!(responses, vec![HostResponse::Cancel]);

        let responses = source.dispatch(HostEvent::Download(DownloadItem {
            url: "https://example.com/a.zip".to_string(),
            filename: "a.zip".to_string(),
        }));
        assert!(responses.is_empty());
        assert_eq!(requests.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_responses_follow_registration_order() {
        let source = LocalEventSource::new();
        source.subscribe(
            EventKind::DeterminingFilename,
            Arc::new(|_| HostResponse::Continue),
        );
        source.subscribe(
            EventKind::DeterminingFilename,
            Arc::new(|_| HostResponse::SuggestFilename("renamed.bin".to_string())),
        );
        assert_eq!(source.handler_count(EventKind::DeterminingFilename), 2);
        assert_eq!(source.handler_count(EventKind::BeforeRequest), 0);

        let responses = source.dispatch(HostEvent::Download(DownloadItem {
            url: "https://example.com/a.zip".to_string(),
            filename: "a.zip".to_string(),
        }));
        assert_eq!(
            responses,
            vec![
                HostResponse::Continue,
                HostResponse::SuggestFilename("renamed.bin".to_string())
            ]
        );
    }
}
