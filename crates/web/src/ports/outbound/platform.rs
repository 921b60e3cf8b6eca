//! Platform abstraction ports for cross-platform compatibility
//!
//! These traits abstract platform-specific operations so that:
//! 1. Application/presentation code remains platform-agnostic
//! 2. Platform-specific code is isolated in infrastructure
//! 3. Code becomes easily testable with mock implementations
//!
//! The traits are object safe; `crate::state::Platform` holds one
//! `Arc<dyn _>` per provider.

use std::{future::Future, pin::Pin};

/// Time operations abstraction
pub trait TimeProvider: Send + Sync + 'static {
    /// Get current time in milliseconds since epoch
    fn now_millis(&self) -> u64;
}

/// Async sleep abstraction
///
/// Used for toast auto-dismiss and the planner's staged progress messages.
pub trait SleepProvider: Send + Sync + 'static {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>>;
}

/// Persistent storage abstraction (localStorage/file-based)
pub trait StorageProvider: Send + Sync + 'static {
    /// Save a string value with the given key
    fn save(&self, key: &str, value: &str);

    /// Load a string value by key, returns None if not found
    fn load(&self, key: &str) -> Option<String>;

    /// Remove a value by key
    fn remove(&self, key: &str);
}

/// Logging abstraction
pub trait LogProvider: Send + Sync + 'static {
    fn info(&self, msg: &str);
    fn error(&self, msg: &str);
    fn debug(&self, msg: &str);
    fn warn(&self, msg: &str);
}

/// Browser document operations (page title, etc.)
pub trait DocumentProvider: Send + Sync + 'static {
    /// Set the browser page title (no-op on desktop)
    fn set_page_title(&self, title: &str);
}

/// Storage key constants
///
/// These are kept in the ports layer as they define the contract for
/// what keys are used across the application.
pub mod storage_keys {
    /// Persisted auth session (JSON)
    pub const AUTH_SESSION: &str = "tripmate_auth_session";

    /// Planner form of the last submitted trip (JSON)
    pub const TRIP_FORM_DATA: &str = "trip_form_data";
    /// Itinerary text returned by the webhook
    pub const TRIP_RESPONSE: &str = "trip_response";
    /// RFC3339 time the response was saved
    pub const TRIP_TIMESTAMP: &str = "trip_timestamp";

    /// Every key owned by the trip round trip
    pub const TRIP_KEYS: [&str; 3] = [TRIP_FORM_DATA, TRIP_RESPONSE, TRIP_TIMESTAMP];
}
