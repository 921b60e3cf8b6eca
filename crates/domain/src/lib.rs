//! Tripmate Domain - core types for trip planning.
//!
//! Pure data and validation. No I/O, no platform code, WASM compatible.

extern crate self as tripmate_domain;

pub mod auth;
pub mod common;
pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use auth::{
    AuthError, AuthErrorCode, AuthEvent, AuthSession, AuthUser, ResetPasswordForm, SignInForm,
    SignUpForm,
};
pub use entities::{
    builtin_offers, builtin_packages, ItineraryContent, StoredTrip, TravelOffer, TravelPackage,
    TripFormData, TripFormError, TripRequest, UserTrip,
};
pub use error::DomainError;
pub use ids::{OfferId, PackageId, TripId, UserId};
pub use value_objects::{format_currency_input, Budget};
