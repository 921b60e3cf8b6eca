//! Pure helpers shared by the domain and the client.

pub mod datetime;
pub mod string;

pub use datetime::{parse_datetime, parse_datetime_or};
pub use string::{is_blank, none_if_blank};
