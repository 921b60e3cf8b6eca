//! Toast notifications
//!
//! Toasts stack at the bottom of the page and dismiss themselves after
//! `TOAST_DURATION_MS` using the platform timer. The timer runs on the root
//! scope so a toast raised right before navigating still goes away.

use dioxus::core::spawn_forever;
use dioxus::prelude::*;

use crate::ui::Platform;

pub const TOAST_DURATION_MS: u64 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Success => "toast toast-success",
            Self::Error => "toast toast-error",
            Self::Info => "toast toast-info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Copy)]
pub struct ToastState {
    pub toasts: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

impl ToastState {
    pub fn new() -> Self {
        Self {
            toasts: Signal::new(Vec::new()),
            next_id: Signal::new(0),
        }
    }

    /// Show a toast and schedule its dismissal
    pub fn show(&mut self, platform: &Platform, kind: ToastKind, message: impl Into<String>) {
        let id = {
            let mut next = self.next_id.write();
            *next += 1;
            *next
        };
        self.toasts.write().push(Toast {
            id,
            kind,
            message: message.into(),
        });

        let sleep = platform.sleep_ms(TOAST_DURATION_MS);
        let mut state = *self;
        let _ = spawn_forever(async move {
            sleep.await;
            state.dismiss(id);
        });
    }

    pub fn success(&mut self, platform: &Platform, message: impl Into<String>) {
        self.show(platform, ToastKind::Success, message);
    }

    pub fn error(&mut self, platform: &Platform, message: impl Into<String>) {
        let message = message.into();
        platform.log_warn(&message);
        self.show(platform, ToastKind::Error, message);
    }

    pub fn info(&mut self, platform: &Platform, message: impl Into<String>) {
        self.show(platform, ToastKind::Info, message);
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.write().retain(|t| t.id != id);
    }
}

impl Default for ToastState {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to access the ToastState from context
pub fn use_toast_state() -> ToastState {
    use_context::<ToastState>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{
        cell::RefCell,
        future::Future,
        pin::Pin,
        rc::Rc,
        sync::{Arc, Mutex},
        time::Duration,
    };

    use dioxus::dioxus_core::{NoOpMutations, VirtualDom};
    use futures_channel::oneshot;

    use crate::ports::outbound::PlatformPort;

    /// Sleeps that only finish once the test opens their gate
    #[derive(Default)]
    struct GatedPlatform {
        gates: Mutex<Vec<oneshot::Sender<()>>>,
    }

    impl GatedPlatform {
        fn open_all(&self) {
            for gate in self.gates.lock().unwrap().drain(..) {
                let _ = gate.send(());
            }
        }
    }

    impl PlatformPort for GatedPlatform {
        fn now_millis(&self) -> u64 {
            0
        }
        fn sleep_ms(&self, _ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
            let (tx, rx) = oneshot::channel();
            self.gates.lock().unwrap().push(tx);
            Box::pin(async move {
                let _ = rx.await;
            })
        }
        fn storage_save(&self, _key: &str, _value: &str) {}
        fn storage_load(&self, _key: &str) -> Option<String> {
            None
        }
        fn storage_remove(&self, _key: &str) {}
        fn log_info(&self, _msg: &str) {}
        fn log_error(&self, _msg: &str) {}
        fn log_debug(&self, _msg: &str) {}
        fn log_warn(&self, _msg: &str) {}
        fn set_page_title(&self, _title: &str) {}
    }

    type Handles = Rc<RefCell<Option<(ToastState, Signal<bool>)>>>;

    fn app() -> Element {
        let toasts = use_context_provider(ToastState::new);
        let page_open = use_signal(|| true);
        let handles = use_context::<Handles>();
        use_hook(|| *handles.borrow_mut() = Some((toasts, page_open)));

        let shown = toasts.toasts.read().len();
        rsx! {
            span { "{shown}" }
            if page_open() {
                RaisingPage {}
            }
        }
    }

    #[component]
    fn RaisingPage() -> Element {
        let platform = use_context::<Platform>();
        let toasts = use_toast_state();
        use_hook(|| {
            let mut toasts = toasts;
            toasts.success(&platform, "Seu roteiro está pronto!");
        });
        rsx! { p { "planner" } }
    }

    #[tokio::test]
    async fn test_toast_dismissed_after_raising_page_unmounts() {
        let gate = Arc::new(GatedPlatform::default());
        let platform: Platform = gate.clone();
        let handles: Handles = Rc::new(RefCell::new(None));

        let mut dom = VirtualDom::new(app)
            .with_root_context(handles.clone())
            .with_root_context(platform);
        dom.rebuild_in_place();

        let (toasts, mut page_open) = handles.borrow().clone().unwrap();
        assert_eq!(dom.in_runtime(|| toasts.toasts.read().len()), 1);

        // Navigate away from the page that raised the toast
        dom.in_runtime(|| page_open.set(false));
        let _ = tokio::time::timeout(Duration::from_millis(200), dom.wait_for_work()).await;
        dom.render_immediate(&mut NoOpMutations);

        gate.open_all();
        let _ = tokio::time::timeout(Duration::from_secs(1), dom.wait_for_work()).await;
        dom.render_immediate(&mut NoOpMutations);

        assert!(dom.in_runtime(|| toasts.toasts.read().is_empty()));
    }

    #[tokio::test]
    async fn test_dismiss_removes_only_matching_toast() {
        let gate = Arc::new(GatedPlatform::default());
        let platform: Platform = gate.clone();
        let handles: Handles = Rc::new(RefCell::new(None));

        let mut dom = VirtualDom::new(app)
            .with_root_context(handles.clone())
            .with_root_context(platform.clone());
        dom.rebuild_in_place();

        let (mut toasts, _) = handles.borrow().clone().unwrap();
        dom.in_runtime(|| toasts.info(&platform, "Você saiu da sua conta."));
        let ids: Vec<u64> =
            dom.in_runtime(|| toasts.toasts.read().iter().map(|t| t.id).collect());
        assert_eq!(ids.len(), 2);

        dom.in_runtime(|| toasts.dismiss(ids[0]));
        let left = dom.in_runtime(|| toasts.toasts.read().clone());
        assert_eq!(left.len(), 1);
        assert_eq!(left[0].id, ids[1]);
        assert_eq!(left[0].kind, ToastKind::Info);
    }
}
