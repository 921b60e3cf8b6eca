//! Tripmate web client - composition root binary.

use std::sync::Arc;

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tripmate_web::infrastructure::{platform::create_platform, HttpClient};
use tripmate_web::ports::outbound::{HttpTransport, PlatformPort};
use tripmate_web::ui::presentation::Services;
use tripmate_web::{AppConfig, ShellKind};

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tripmate_web=debug,dioxus=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    tracing::info!("Starting Tripmate");

    let config = AppConfig::from_env();

    // Platform
    let platform: Arc<dyn PlatformPort> = Arc::new(create_platform());

    // HTTP
    let transport: Arc<dyn HttpTransport> = Arc::new(HttpClient::new());

    // Shell kind (desktop vs mobile layout)
    let shell = config.shell.unwrap_or_else(detect_shell);

    let services = Services::new(&config, platform.clone(), transport);
    tracing::debug!(
        api = %config.api_base_url,
        auth = %config.auth_url,
        ?shell,
        "Services wired"
    );

    #[allow(unused_mut)]
    let mut builder = dioxus::LaunchBuilder::new();

    #[cfg(not(target_arch = "wasm32"))]
    {
        let head = format!("<style>{}</style>", load_css());
        let cfg = dioxus_desktop::Config::new()
            .with_window(dioxus_desktop::WindowBuilder::new().with_title("Tripmate"))
            .with_custom_head(head);
        builder = builder.with_cfg(cfg);
    }

    builder
        .with_context(platform)
        .with_context(shell)
        .with_context(services)
        .launch(tripmate_web::app);
}

#[cfg(target_arch = "wasm32")]
fn detect_shell() -> ShellKind {
    let width = web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(1024.0);
    ShellKind::for_width(width)
}

#[cfg(not(target_arch = "wasm32"))]
fn detect_shell() -> ShellKind {
    ShellKind::default()
}

/// Stylesheet inlined into the desktop window when running outside `dx`
#[cfg(not(target_arch = "wasm32"))]
fn load_css() -> String {
    let css_path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/css/main.css");
    std::fs::read_to_string(&css_path).unwrap_or_else(|e| {
        tracing::warn!(path = %css_path.display(), error = %e, "Stylesheet not found");
        String::new()
    })
}
