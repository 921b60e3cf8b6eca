//! Budget value object
//!
//! The planner's budget field is a controlled text input that is reformatted
//! as Brazilian currency on every keystroke. Digits typed are read as cents,
//! so typing `500000` shows `R$ 5.000,00`.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Monetary amount in BRL, stored as whole cents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Budget {
    cents: u64,
}

impl Budget {
    pub const fn from_cents(cents: u64) -> Self {
        Self { cents }
    }

    /// Rounds to the nearest cent; negative and non-finite inputs become zero.
    pub fn from_reais(amount: f64) -> Self {
        if !amount.is_finite() || amount <= 0.0 {
            return Self::default();
        }
        Self {
            cents: (amount * 100.0).round() as u64,
        }
    }

    /// Parse free currency text by keeping only its digits (as cents).
    ///
    /// Saturates instead of overflowing on absurdly long input.
    pub fn parse(text: &str) -> Self {
        let cents = text
            .chars()
            .filter_map(|c| c.to_digit(10))
            .fold(0u64, |acc, d| {
                acc.saturating_mul(10).saturating_add(u64::from(d))
            });
        Self { cents }
    }

    pub fn cents(&self) -> u64 {
        self.cents
    }

    pub fn as_f64(&self) -> f64 {
        self.cents as f64 / 100.0
    }

    pub fn is_zero(&self) -> bool {
        self.cents == 0
    }

    /// pt-BR currency text: `R$ 12.345,67`
    pub fn format(&self) -> String {
        let reais = self.cents / 100;
        let cents = self.cents % 100;

        let digits = reais.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(ch);
        }

        format!("R$ {},{:02}", grouped, cents)
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

// On the wire a budget is a plain number of reais.
impl Serialize for Budget {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

impl<'de> Deserialize<'de> for Budget {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = f64::deserialize(deserializer)?;
        Ok(Self::from_reais(amount))
    }
}

/// Reformat a budget input as the user types. Clearing every digit clears
/// the field instead of leaving `R$ 0,00` behind.
pub fn format_currency_input(text: &str) -> String {
    if !text.chars().any(|c| c.is_ascii_digit()) {
        return String::new();
    }
    Budget::parse(text).format()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_are_read_as_cents() {
        assert_eq!(Budget::parse("500000").cents(), 500_000);
        assert_eq!(Budget::parse("R$ 5.000,00").cents(), 500_000);
        assert_eq!(Budget::parse("abc").cents(), 0);
    }

    #[test]
    fn formats_with_thousands_separator() {
        assert_eq!(Budget::from_cents(0).format(), "R$ 0,00");
        assert_eq!(Budget::from_cents(5).format(), "R$ 0,05");
        assert_eq!(Budget::from_cents(99_900).format(), "R$ 999,00");
        assert_eq!(Budget::from_cents(500_000).format(), "R$ 5.000,00");
        assert_eq!(Budget::from_cents(123_456_789).format(), "R$ 1.234.567,89");
    }

    #[test]
    fn live_input_formatting() {
        assert_eq!(format_currency_input("1"), "R$ 0,01");
        assert_eq!(format_currency_input("R$ 0,012"), "R$ 0,12");
        assert_eq!(format_currency_input("R$ 0,1"), "R$ 0,01");
        assert_eq!(format_currency_input(""), "");
        assert_eq!(format_currency_input("R$ ,"), "");
    }

    #[test]
    fn numeric_value_in_reais() {
        assert_eq!(Budget::parse("R$ 3.250,50").as_f64(), 3250.5);
    }

    #[test]
    fn long_input_saturates() {
        let budget = Budget::parse(&"9".repeat(40));
        assert_eq!(budget.cents(), u64::MAX);
    }

    #[test]
    fn wire_format_is_reais() {
        let json = serde_json::to_string(&Budget::from_cents(189_990)).unwrap();
        assert_eq!(json, "1899.9");
        let back: Budget = serde_json::from_str("1899.9").unwrap();
        assert_eq!(back.cents(), 189_990);
    }

    #[test]
    fn negative_amounts_clamp_to_zero() {
        assert!(Budget::from_reais(-10.0).is_zero());
        assert!(Budget::from_reais(f64::NAN).is_zero());
    }
}
