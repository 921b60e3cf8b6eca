//! Reusable UI components

pub mod footer;
pub mod form_field;
pub mod navbar;
pub mod offer_card;
pub mod package_card;
pub mod toast;
pub mod trip_form;

pub use footer::Footer;
pub use form_field::FormField;
pub use navbar::Navbar;
pub use offer_card::OfferCard;
pub use package_card::PackageCard;
pub use toast::ToastHost;
pub use trip_form::TripForm;
