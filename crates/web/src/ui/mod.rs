use crate::ports::outbound::PlatformPort;
use dioxus::prelude::*;
use futures_util::StreamExt;
use std::sync::Arc;

pub mod presentation;
pub mod routes;

pub use routes::Route;

use presentation::services::use_services;
use presentation::state::{AuthState, ToastState};

/// Shell variant for UI layout selection.
/// This is passed via Dioxus context from the composition root.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ShellKind {
    #[default]
    Desktop,
    Mobile,
}

impl ShellKind {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "desktop" => Some(Self::Desktop),
            "mobile" => Some(Self::Mobile),
            _ => None,
        }
    }

    /// Layout for a viewport of the given width in CSS pixels
    pub fn for_width(width: f64) -> Self {
        if width < 768.0 {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }
}

/// Type alias for the platform port used throughout the UI
pub type Platform = Arc<dyn PlatformPort>;

/// Hook to access the Platform from Dioxus context
pub fn use_platform() -> Platform {
    use_context::<Platform>()
}

pub fn app() -> Element {
    rsx! {
        AppRoot {}
    }
}

#[component]
fn AppRoot() -> Element {
    // Provided by the composition root (see `crates/web/src/main.rs`).
    let shell = use_context::<ShellKind>();
    let services = use_services();

    // These must be created inside an active Dioxus runtime.
    let auth_state = use_context_provider(AuthState::new);
    use_context_provider(ToastState::new);

    // Subscribe before restoring so the initial session event is not missed
    use_hook(move || {
        let mut events = services.auth.subscribe();
        let auth = services.auth.clone();
        let mut auth_state = auth_state;
        spawn(async move {
            while let Some(event) = events.next().await {
                let refresh_name = auth_state.apply(event);
                if refresh_name {
                    let name = auth.display_name().await;
                    auth_state.set_display_name(name);
                }
            }
            tracing::debug!("Auth event stream closed");
        });

        let auth = services.auth.clone();
        spawn(async move {
            auth.restore().await;
        });
    });

    rsx! {
        document::Stylesheet {
            href: asset!("/assets/css/main.css"),
        }

        {
            match shell {
                ShellKind::Desktop => rsx! {
                    DesktopShell {
                        Router::<routes::Route> {}
                    }
                },
                ShellKind::Mobile => rsx! {
                    MobileShell {
                        Router::<routes::Route> {}
                    }
                },
            }
        }
    }
}

#[component]
fn DesktopShell(children: Element) -> Element {
    rsx! {
        div {
            class: "shell shell-desktop",
            {children}
        }
    }
}

#[component]
fn MobileShell(children: Element) -> Element {
    rsx! {
        div {
            class: "shell shell-mobile",
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_kind_parsing_and_width() {
        assert_eq!(ShellKind::parse(" MOBILE "), Some(ShellKind::Mobile));
        assert_eq!(ShellKind::parse("desktop"), Some(ShellKind::Desktop));
        assert_eq!(ShellKind::parse("watch"), None);
        assert_eq!(ShellKind::for_width(375.0), ShellKind::Mobile);
        assert_eq!(ShellKind::for_width(1280.0), ShellKind::Desktop);
    }
}
