//! Tripmate Shared - wire types for the client's external services
//!
//! - Trip webhook payloads and response extraction
//! - Auth provider (GoTrue-style) request/response bodies
//! - Table rows for the provider's REST table API
//!
//! # Design Principles
//!
//! 1. **No business logic** - serialization and conversion into domain types only
//! 2. **WASM compatible** - must compile for both native and wasm32 targets

pub mod envelope;
pub mod provider;
pub mod tables;
pub mod webhook;

pub use envelope::{decode_list, WireError};
pub use provider::{
    PasswordGrantRequest, ProviderErrorBody, ProviderUser, RecoverRequest, SignUpRequest,
    SignUpResponse, TokenResponse, UserMetadata,
};
pub use tables::{ProfileRow, PROFILES_TABLE};
pub use webhook::{extract_itinerary_text, GenerateTripPayload, SignupNotification};
