//! In-memory platform for tests
//!
//! Storage lives in a shared map, the clock is settable and sleeps resolve
//! immediately. Clones share state so a test can keep a handle while the
//! `Platform` owns another.

use crate::ports::outbound::platform::{
    DocumentProvider, LogProvider, SleepProvider, StorageProvider, TimeProvider,
};
use crate::state::Platform;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::{future::Future, pin::Pin};

/// 2026-10-16T12:00:00Z
pub const DEFAULT_NOW_MILLIS: u64 = 1_792_152_000_000;

#[derive(Clone)]
pub struct MockTimeProvider {
    now: Arc<AtomicU64>,
}

impl Default for MockTimeProvider {
    fn default() -> Self {
        Self::at(DEFAULT_NOW_MILLIS)
    }
}

impl MockTimeProvider {
    pub fn at(millis: u64) -> Self {
        Self {
            now: Arc::new(AtomicU64::new(millis)),
        }
    }

    pub fn set(&self, millis: u64) {
        self.now.store(millis, Ordering::SeqCst);
    }

    pub fn advance(&self, millis: u64) {
        self.now.fetch_add(millis, Ordering::SeqCst);
    }
}

impl TimeProvider for MockTimeProvider {
    fn now_millis(&self) -> u64 {
        self.now.load(Ordering::SeqCst)
    }
}

/// Resolves immediately and records the requested durations
#[derive(Clone, Default)]
pub struct MockSleepProvider {
    calls: Arc<Mutex<Vec<u64>>>,
}

impl MockSleepProvider {
    pub fn calls(&self) -> Vec<u64> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

impl SleepProvider for MockSleepProvider {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(ms);
        }
        Box::pin(async {})
    }
}

#[derive(Clone, Default)]
pub struct MockStorageProvider {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MockStorageProvider {
    pub fn contains(&self, key: &str) -> bool {
        self.values
            .lock()
            .map(|v| v.contains_key(key))
            .unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.values.lock().map(|v| v.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl StorageProvider for MockStorageProvider {
    fn save(&self, key: &str, value: &str) {
        if let Ok(mut values) = self.values.lock() {
            values.insert(key.to_string(), value.to_string());
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        self.values.lock().ok().and_then(|v| v.get(key).cloned())
    }

    fn remove(&self, key: &str) {
        if let Ok(mut values) = self.values.lock() {
            values.remove(key);
        }
    }
}

#[derive(Clone, Default)]
pub struct MockLogProvider;

impl LogProvider for MockLogProvider {
    fn info(&self, msg: &str) {
        tracing::info!("{}", msg);
    }

    fn error(&self, msg: &str) {
        tracing::error!("{}", msg);
    }

    fn debug(&self, msg: &str) {
        tracing::debug!("{}", msg);
    }

    fn warn(&self, msg: &str) {
        tracing::warn!("{}", msg);
    }
}

#[derive(Clone, Default)]
pub struct MockDocumentProvider {
    title: Arc<Mutex<Option<String>>>,
}

impl MockDocumentProvider {
    pub fn title(&self) -> Option<String> {
        self.title.lock().ok().and_then(|t| t.clone())
    }
}

impl DocumentProvider for MockDocumentProvider {
    fn set_page_title(&self, title: &str) {
        if let Ok(mut current) = self.title.lock() {
            *current = Some(title.to_string());
        }
    }
}

/// Handles onto the providers inside a mock `Platform`
#[derive(Clone, Default)]
pub struct MockPlatform {
    pub time: MockTimeProvider,
    pub sleep: MockSleepProvider,
    pub storage: MockStorageProvider,
    pub document: MockDocumentProvider,
}

impl MockPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn platform(&self) -> Platform {
        Platform::new(
            self.time.clone(),
            self.sleep.clone(),
            self.storage.clone(),
            MockLogProvider,
            self.document.clone(),
        )
    }
}

/// Mock platform with default clock and empty storage
pub fn create_mock_platform() -> Platform {
    MockPlatform::new().platform()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::PlatformPort;

    #[test]
    fn platform_shares_state_with_handles() {
        let mock = MockPlatform::new();
        let platform = mock.platform();

        platform.storage_save("trip_response", "ok");
        assert!(mock.storage.contains("trip_response"));

        mock.time.advance(1_000);
        assert_eq!(platform.now_millis(), DEFAULT_NOW_MILLIS + 1_000);
        assert_eq!(platform.now().to_rfc3339(), "2026-10-16T12:00:01+00:00");

        platform.set_page_title("Tripmate");
        assert_eq!(mock.document.title().as_deref(), Some("Tripmate"));
    }
}
