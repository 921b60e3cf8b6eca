//! HTTP transport adapters
//!
//! The transport is selected at compile time: reqwest on desktop, gloo-net
//! (fetch) in the browser. Both implement `HttpTransport`.

#[cfg(not(target_arch = "wasm32"))]
mod desktop;

#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
pub use desktop::ReqwestTransport as HttpClient;

#[cfg(target_arch = "wasm32")]
pub use wasm::FetchTransport as HttpClient;
