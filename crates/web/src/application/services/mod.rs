//! Application services
//!
//! Services implement the site's use cases on top of port traits; they never
//! see concrete infrastructure.

pub mod auth_service;
pub mod catalog_service;
pub mod profile_service;
pub mod trip_service;
pub mod trip_store;

#[cfg(test)]
pub(crate) mod testing;

pub use auth_service::{AuthService, SignupNotifier};
pub use catalog_service::CatalogService;
pub use profile_service::ProfileService;
pub use trip_service::TripService;
pub use trip_store::TripStore;
