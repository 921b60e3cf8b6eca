//! Tripmate web client.
//!
//! UI, application services and infrastructure adapters in one crate.
//! The browser and desktop builds differ only in the adapters selected by
//! `cfg(target_arch)`.

pub mod application;
pub mod config;
pub mod infrastructure;
pub mod ports;
pub mod state;
pub mod ui;

pub use config::AppConfig;
pub use ui::app;
pub use ui::{use_platform, Platform, Route, ShellKind};
