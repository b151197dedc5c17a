use serde::{Deserialize, Serialize};

/// Discriminator carried by every notification sent to the companion.
pub const NOTIFICATION_TYPE: &str = "download";

/// Body of the POST sent to the companion service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadNotification {
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
    pub filename: String,
}

impl DownloadNotification {
    pub fn new(url: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            kind: NOTIFICATION_TYPE.to_string(),
            url: url.into(),
            filename: filename.into(),
        }
    }
}

/// Lifecycle of a single notification. There is no way back from a final phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryPhase {
    Created,
    Sent,
    Acknowledged,
    Failed,
}

impl DeliveryPhase {
    pub fn is_final(self) -> bool {
        matches!(self, DeliveryPhase::Acknowledged | DeliveryPhase::Failed)
    }
}

/// Request classification as reported by the browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    MainFrame,
    SubFrame,
    Stylesheet,
    Script,
    Image,
    Font,
    Object,
    #[serde(rename = "xmlhttprequest")]
    XmlHttpRequest,
    Ping,
    CspReport,
    Media,
    #[serde(rename = "websocket")]
    WebSocket,
    Other,
}

impl ResourceType {
    pub fn as_str(self) -> &'static str {
        match self {
            ResourceType::MainFrame => "main_frame",
            ResourceType::SubFrame => "sub_frame",
            ResourceType::Stylesheet => "stylesheet",
            ResourceType::Script => "script",
            ResourceType::Image => "image",
            ResourceType::Font => "font",
            ResourceType::Object => "object",
            ResourceType::XmlHttpRequest => "xmlhttprequest",
            ResourceType::Ping => "ping",
            ResourceType::CspReport => "csp_report",
            ResourceType::Media => "media",
            ResourceType::WebSocket => "websocket",
            ResourceType::Other => "other",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        const ALL: [ResourceType; 13] = [
            ResourceType::MainFrame,
            ResourceType::SubFrame,
            ResourceType::Stylesheet,
            ResourceType::Script,
            ResourceType::Image,
            ResourceType::Font,
            ResourceType::Object,
            ResourceType::XmlHttpRequest,
            ResourceType::Ping,
            ResourceType::CspReport,
            ResourceType::Media,
            ResourceType::WebSocket,
            ResourceType::Other,
        ];
        let name = name.trim();
        ALL.into_iter().find(|t| t.as_str() == name)
    }
}

/// Descriptor delivered for an outbound request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestDetails {
    pub url: String,
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
}

/// Descriptor delivered when the browser is about to settle a download's file name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadItem {
    /// Source locator of the download.
    pub url: String,
    /// The browser's own suggested name.
    pub filename: String,
}

/// What a handler hands back to the host.
///
/// `Cancel` and `SuggestFilename` exist because the host accepts them; the relay
/// only ever answers `Continue`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostResponse {
    Continue,
    Cancel,
    SuggestFilename(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_notification_wire_shape() {
        let n = DownloadNotification::new("https://example.com/a.zip", "a.zip");
        let value = serde_json::to_value(&n).unwrap();
        assert_eq!(
            value,
            json!({ "type": "download", "url": "https://example.com/a.zip", "filename": "a.zip" })
        );
    }

    #[test]
    fn test_resource_type_names() {
        assert_eq!(ResourceType::parse("xmlhttprequest"), Some(ResourceType::XmlHttpRequest));
        assert_eq!(ResourceType::parse(" main_frame "), Some(ResourceType::MainFrame));
        assert_eq!(ResourceType::parse("beacon"), None);

        let parsed: ResourceType = serde_json::from_str("\"csp_report\"").unwrap();
        assert_eq!(parsed, ResourceType::CspReport);
        assert_eq!(serde_json::to_string(&ResourceType::WebSocket).unwrap(), "\"websocket\"");
    }

    #[test]
    fn test_final_phases() {
        assert!(!DeliveryPhase::Created.is_final());
        assert!(!DeliveryPhase::Sent.is_final());
        assert!(DeliveryPhase::Acknowledged.is_final());
        assert!(DeliveryPhase::Failed.is_final());
    }
}
