pub mod api;
pub mod error;
pub mod services;

pub use api::WebhookClient;
pub use error::{TripServiceError, DEFAULT_REQUEST_TIMEOUT_MS};
