//! Value objects

mod budget;

pub use budget::{format_currency_input, Budget};
