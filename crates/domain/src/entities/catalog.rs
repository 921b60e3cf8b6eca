//! Packages, offers and saved trips
//!
//! The listings shown on the marketing pages. They are normally fetched from
//! the webhook; the built-in catalog is what the site shows when that fails.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ids::{OfferId, PackageId, TripId};
use crate::value_objects::Budget;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelPackage {
    pub id: PackageId,
    pub title: String,
    pub destination: String,
    pub nights: u32,
    pub price: Budget,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl TravelPackage {
    pub fn price_per_night(&self) -> Option<Budget> {
        if self.nights == 0 {
            return None;
        }
        Some(Budget::from_cents(self.price.cents() / u64::from(self.nights)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelOffer {
    pub id: OfferId,
    pub title: String,
    pub destination: String,
    pub original_price: Budget,
    pub discounted_price: Budget,
    pub valid_until: NaiveDate,
}

impl TravelOffer {
    /// Whole-percent discount; zero when the "discount" is not one.
    pub fn discount_percent(&self) -> u32 {
        let original = self.original_price.cents();
        let discounted = self.discounted_price.cents();
        if original == 0 || discounted >= original {
            return 0;
        }
        let saved = (original - discounted) as f64 / original as f64;
        (saved * 100.0).round() as u32
    }

    pub fn is_valid_on(&self, date: NaiveDate) -> bool {
        date <= self.valid_until
    }
}

/// A trip previously generated for a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserTrip {
    pub id: TripId,
    pub origin: String,
    pub destination: String,
    #[serde(default)]
    pub departure_date: Option<NaiveDate>,
    #[serde(default)]
    pub return_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub summary: Option<String>,
}

fn package(
    id: u128,
    title: &str,
    destination: &str,
    nights: u32,
    price_cents: u64,
    highlights: &[&str],
) -> TravelPackage {
    TravelPackage {
        id: PackageId::from_uuid(Uuid::from_u128(id)),
        title: title.to_string(),
        destination: destination.to_string(),
        nights,
        price: Budget::from_cents(price_cents),
        highlights: highlights.iter().map(|h| h.to_string()).collect(),
        image_url: None,
    }
}

pub fn builtin_packages() -> Vec<TravelPackage> {
    vec![
        package(
            0x0001,
            "Rio Clássico",
            "Rio de Janeiro",
            4,
            189_990,
            &["Cristo Redentor", "Pão de Açúcar", "Passeio em Copacabana"],
        ),
        package(
            0x0002,
            "Nordeste Essencial",
            "Salvador",
            5,
            249_900,
            &["Pelourinho", "Praia do Forte", "Culinária baiana"],
        ),
        package(
            0x0003,
            "Serra Gaúcha",
            "Gramado",
            3,
            159_900,
            &["Rua Coberta", "Vinícolas", "Lago Negro"],
        ),
        package(
            0x0004,
            "Paraíso em Noronha",
            "Fernando de Noronha",
            6,
            689_000,
            &["Baía do Sancho", "Mergulho guiado", "Pôr do sol no Boldró"],
        ),
    ]
}

fn offer(
    id: u128,
    title: &str,
    destination: &str,
    original_cents: u64,
    discounted_cents: u64,
    valid_until: (i32, u32, u32),
) -> Option<TravelOffer> {
    let (y, m, d) = valid_until;
    Some(TravelOffer {
        id: OfferId::from_uuid(Uuid::from_u128(id)),
        title: title.to_string(),
        destination: destination.to_string(),
        original_price: Budget::from_cents(original_cents),
        discounted_price: Budget::from_cents(discounted_cents),
        valid_until: NaiveDate::from_ymd_opt(y, m, d)?,
    })
}

pub fn builtin_offers() -> Vec<TravelOffer> {
    [
        offer(0x0101, "Fim de semana em Paraty", "Paraty", 129_900, 97_400, (2026, 12, 31)),
        offer(0x0102, "Bonito Aventura", "Bonito", 319_900, 255_900, (2026, 11, 30)),
        offer(0x0103, "Floripa Verão", "Florianópolis", 219_000, 175_200, (2027, 2, 28)),
    ]
    .into_iter()
    .flatten()
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_is_stable() {
        let first = builtin_packages();
        let second = builtin_packages();
        assert_eq!(first, second);
        assert_eq!(builtin_offers().len(), 3);
    }

    #[test]
    fn discount_is_rounded_percentage() {
        let offers = builtin_offers();
        let paraty = &offers[0];
        assert_eq!(paraty.discount_percent(), 25);
    }

    #[test]
    fn price_increase_is_not_a_discount() {
        let mut offer = builtin_offers().remove(0);
        offer.discounted_price = Budget::from_cents(offer.original_price.cents() + 1);
        assert_eq!(offer.discount_percent(), 0);
    }

    #[test]
    fn offer_expires_after_valid_until() {
        let offer = builtin_offers().remove(0);
        let last_day = offer.valid_until;
        assert!(offer.is_valid_on(last_day));
        assert!(!offer.is_valid_on(last_day.succ_opt().unwrap()));
    }

    #[test]
    fn per_night_price() {
        let rio = builtin_packages().remove(0);
        assert_eq!(rio.price_per_night(), Some(Budget::from_cents(47_497)));
    }

    #[test]
    fn package_reads_remote_json() {
        let json = r#"{
            "id": "00000000-0000-0000-0000-000000000009",
            "title": "Chapada",
            "destination": "Lençóis",
            "nights": 4,
            "price": 2100.5
        }"#;
        let pkg: TravelPackage = serde_json::from_str(json).unwrap();
        assert_eq!(pkg.price.cents(), 210_050);
        assert!(pkg.highlights.is_empty());
    }
}
