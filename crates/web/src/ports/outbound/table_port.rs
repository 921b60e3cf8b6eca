//! Table Port - row access on the provider's Postgres tables

use serde_json::Value;
use thiserror::Error;

use super::TransportError;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("table request failed: {0}")]
    Transport(#[from] TransportError),

    #[error("table api returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("invalid rows in response: {0}")]
    Decode(String),
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait TablePort: Send + Sync {
    /// Rows where every `(column, value)` pair matches exactly.
    /// Without an access token the request runs with the anonymous key.
    async fn select(
        &self,
        table: &str,
        filters: &[(String, String)],
        access_token: Option<String>,
    ) -> Result<Vec<Value>, TableError>;

    async fn insert(
        &self,
        table: &str,
        row: &Value,
        access_token: Option<String>,
    ) -> Result<(), TableError>;
}
