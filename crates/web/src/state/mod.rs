//! Shared state handed to services and components

mod platform;

pub use platform::Platform;
