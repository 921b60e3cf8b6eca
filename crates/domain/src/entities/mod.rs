//! Domain entities

mod catalog;
mod trip;

pub use catalog::{builtin_offers, builtin_packages, TravelOffer, TravelPackage, UserTrip};
pub use trip::{ItineraryContent, StoredTrip, TripFormData, TripFormError, TripRequest};
