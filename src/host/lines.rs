use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::warn;

use super::{HostEvent, LocalEventSource};

/// Feeds newline-delimited JSON host events from `reader` into `source` until EOF.
///
/// A line that is not a valid event (bad JSON, unknown event, not UTF-8) is
/// logged and skipped. Only read errors end the loop early. Returns how many
/// events were dispatched.
pub async fn pump_host_events<R>(mut reader: R, source: &LocalEventSource) -> std::io::Result<usize>
where
    R: AsyncBufRead + Unpin,
{
    let mut buf = Vec::new();
    let mut dispatched = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            return Ok(dispatched);
        }

        let line = buf.trim_ascii();
        if line.is_empty() {
            continue;
        }

        match serde_json::from_slice::<HostEvent>(line) {
            Ok(event) => {
                source.dispatch(event);
                dispatched += 1;
            }
            Err(e) => warn!(error = %e, "skipping malformed host event"),
        }
    }
}
