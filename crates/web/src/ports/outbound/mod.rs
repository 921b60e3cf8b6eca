//! Outbound ports - Interfaces for external services
//!
//! These ports define the contracts that infrastructure adapters must implement,
//! allowing application services to interact with external systems without
//! depending on concrete implementations.

pub mod auth_port;
pub mod http_port;
pub mod platform;
pub mod platform_port;
pub mod table_port;
pub mod webhook_port;

pub use auth_port::{AuthPort, SessionSource, SignUpOutcome};
pub use http_port::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, TransportError};
pub use platform::{
    storage_keys, DocumentProvider, LogProvider, SleepProvider, StorageProvider, TimeProvider,
};
pub use platform_port::PlatformPort;
pub use table_port::{TableError, TablePort};
pub use webhook_port::{ApiError, ApiErrorCode, WebhookPort};

#[cfg(test)]
pub use http_port::MockHttpTransport;
#[cfg(test)]
pub use webhook_port::MockWebhookPort;
