//! Observe browser download activity and relay a best-effort notification of
//! each event to a companion process listening on `localhost:8080`.

pub mod api;
pub mod application;
pub mod domain;
pub mod host;
pub mod logging;
pub mod utils;

pub use api::{CompanionClient, RelayConfig, RelayError};
pub use application::DownloadEventRelay;
pub use domain::{AppError, DownloadNotification, HostResponse};
pub use host::{EventKind, EventSource, HostEvent, LocalEventSource};
