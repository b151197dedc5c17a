//! Boundary to the browser's event facility.
//!
//! The relay only needs `subscribe(kind, handler)`. Anything that can deliver
//! the two event kinds below can host it.

mod lines;
mod local;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::{DownloadItem, HostResponse, RequestDetails};

pub use lines::pump_host_events;
pub use local::LocalEventSource;

/// URL filter used for the request subscription: every locator matches.
pub const ALL_URLS: &str = "<all_urls>";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// An outbound request was observed. Subscribed for [`ALL_URLS`] in
    /// blocking mode, so the handler's answer decides whether it proceeds.
    BeforeRequest,
    /// A download's target name is about to be finalized.
    DeterminingFilename,
}

/// One delivery from the host. On the wire (see the binary) it is tagged by
/// `event`: `before_request` or `determining_filename`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event")]
pub enum HostEvent {
    #[serde(rename = "before_request")]
    Request(RequestDetails),
    #[serde(rename = "determining_filename")]
    Download(DownloadItem),
}

impl HostEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            HostEvent::Request(_) => EventKind::BeforeRequest,
            HostEvent::Download(_) => EventKind::DeterminingFilename,
        }
    }
}

pub type EventHandler = Arc<dyn Fn(HostEvent) -> HostResponse + Send + Sync + 'static>;

/// A facility that notifies registered handlers of browser activity.
pub trait EventSource {
    fn subscribe(&self, kind: EventKind, handler: EventHandler);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ResourceType;

    #[test]
    fn test_wire_events() {
        let event: HostEvent = serde_json::from_str(
            r#"{"event":"before_request","url":"https://example.com/a.iso","type":"main_frame"}"#,
        )
        .unwrap();
        assert_eq!(event.kind(), EventKind::BeforeRequest);
        assert_eq!(
            event,
            HostEvent::Request(RequestDetails {
                url: "https://example.com/a.iso".to_string(),
                resource_type: ResourceType::MainFrame,
            })
        );

        let event: HostEvent = serde_json::from_str(
            r#"{"event":"determining_filename","url":"https://example.com/dl","filename":"a.iso"}"#,
        )
        .unwrap();
        assert_eq!(event.kind(), EventKind::DeterminingFilename);

        assert!(serde_json::from_str::<HostEvent>(r#"{"event":"on_created","url":"x"}"#).is_err());
    }
}
