//! Signal-backed UI state shared through Dioxus context

pub mod auth_state;
pub mod toast_state;

pub use auth_state::{use_auth_state, AuthState};
pub use toast_state::{use_toast_state, Toast, ToastKind, ToastState, TOAST_DURATION_MS};
