//! The platform bundle handed to services and the UI
//!
//! Each target builds one in `infrastructure::platform::create_platform`
//! from its own providers. `main` puts it into context behind
//! `Arc<dyn PlatformPort>` and components read it with `use_platform()`.
//! Tests build it from `MockPlatform`.

use std::{future::Future, pin::Pin, sync::Arc};

use crate::ports::outbound::{
    DocumentProvider, LogProvider, PlatformPort, SleepProvider, StorageProvider, TimeProvider,
};

#[derive(Clone)]
pub struct Platform {
    time: Arc<dyn TimeProvider>,
    sleep: Arc<dyn SleepProvider>,
    storage: Arc<dyn StorageProvider>,
    log: Arc<dyn LogProvider>,
    document: Arc<dyn DocumentProvider>,
}

impl Platform {
    pub fn new(
        time: impl TimeProvider,
        sleep: impl SleepProvider,
        storage: impl StorageProvider,
        log: impl LogProvider,
        document: impl DocumentProvider,
    ) -> Self {
        Self {
            time: Arc::new(time),
            sleep: Arc::new(sleep),
            storage: Arc::new(storage),
            log: Arc::new(log),
            document: Arc::new(document),
        }
    }
}

impl PlatformPort for Platform {
    fn now_millis(&self) -> u64 {
        self.time.now_millis()
    }

    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        self.sleep.sleep_ms(ms)
    }

    fn storage_save(&self, key: &str, value: &str) {
        self.storage.save(key, value)
    }

    fn storage_load(&self, key: &str) -> Option<String> {
        self.storage.load(key)
    }

    fn storage_remove(&self, key: &str) {
        self.storage.remove(key)
    }

    fn log_info(&self, msg: &str) {
        self.log.info(msg)
    }

    fn log_error(&self, msg: &str) {
        self.log.error(msg)
    }

    fn log_debug(&self, msg: &str) {
        self.log.debug(msg)
    }

    fn log_warn(&self, msg: &str) {
        self.log.warn(msg)
    }

    fn set_page_title(&self, title: &str) {
        self.document.set_page_title(title)
    }
}
