pub mod auth_provider;
pub mod http_client;
pub mod platform;
pub mod table_client;

pub use auth_provider::ProviderAuthClient;
pub use http_client::HttpClient;
pub use table_client::RestTableClient;
