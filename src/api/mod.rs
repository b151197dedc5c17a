pub mod client;
pub mod models;

pub use client::{CompanionClient, RelayError};
pub use models::RelayConfig;
