//! Trip request lifecycle
//!
//! A trip starts as [`TripFormData`] bound to the planner's inputs, becomes a
//! [`TripRequest`] on submit, and ends up as a [`StoredTrip`] once the
//! webhook answered and the result was persisted locally.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::{Validate, ValidationError};

use crate::auth::AuthUser;
use crate::common::{is_blank, none_if_blank};
use crate::value_objects::Budget;

fn default_travelers() -> u32 {
    1
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if is_blank(value) {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Planner form state.
///
/// Only origin, destination and both dates are required. A return date
/// earlier than the departure date is accepted here; the planner only
/// discourages it through the date picker bounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct TripFormData {
    #[validate(custom(function = "not_blank"))]
    pub origin: String,
    #[validate(custom(function = "not_blank"))]
    pub destination: String,
    #[validate(required)]
    pub departure_date: Option<NaiveDate>,
    #[validate(required)]
    pub return_date: Option<NaiveDate>,
    #[serde(default = "default_travelers")]
    pub travelers: u32,
    /// Budget exactly as shown in the input (`R$ 5.000,00`)
    #[serde(default)]
    pub budget_text: String,
    #[serde(default)]
    pub preferences: String,
}

impl Default for TripFormData {
    fn default() -> Self {
        Self {
            origin: String::new(),
            destination: String::new(),
            departure_date: None,
            return_date: None,
            travelers: default_travelers(),
            budget_text: String::new(),
            preferences: String::new(),
        }
    }
}

/// Field names in the order they appear on the form.
const REQUIRED_FIELDS: [&str; 4] = ["origin", "destination", "departure_date", "return_date"];

impl TripFormData {
    /// Check the required fields. Nothing is sent anywhere when this fails.
    pub fn validate(&self) -> Result<(), TripFormError> {
        match Validate::validate(self) {
            Ok(()) => Ok(()),
            Err(errors) => {
                let invalid = errors.field_errors();
                let fields = REQUIRED_FIELDS
                    .iter()
                    .copied()
                    .filter(|name| invalid.keys().any(|k| k.to_string() == *name))
                    .collect();
                Err(TripFormError::MissingRequiredFields { fields })
            }
        }
    }

    pub fn budget(&self) -> Budget {
        Budget::parse(&self.budget_text)
    }

    pub fn nights(&self) -> Option<i64> {
        match (self.departure_date, self.return_date) {
            (Some(from), Some(to)) => Some((to - from).num_days()),
            _ => None,
        }
    }
}

/// Errors raised before a trip request leaves the client
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TripFormError {
    #[error("Preencha origem, destino e as datas da viagem.")]
    MissingRequiredFields { fields: Vec<&'static str> },
}

/// Payload for a single itinerary generation
#[derive(Debug, Clone, PartialEq)]
pub struct TripRequest {
    pub origin: String,
    pub destination: String,
    pub departure_date: NaiveDate,
    pub return_date: NaiveDate,
    pub travelers: u32,
    pub budget: Budget,
    pub budget_formatted: String,
    pub preferences: Option<String>,
    pub user: AuthUser,
    pub requested_at: DateTime<Utc>,
}

impl TripRequest {
    pub fn from_form(
        form: &TripFormData,
        user: &AuthUser,
        now: DateTime<Utc>,
    ) -> Result<Self, TripFormError> {
        form.validate()?;

        let (Some(departure_date), Some(return_date)) = (form.departure_date, form.return_date)
        else {
            return Err(TripFormError::MissingRequiredFields {
                fields: vec!["departure_date", "return_date"],
            });
        };

        let budget = form.budget();
        Ok(Self {
            origin: form.origin.trim().to_string(),
            destination: form.destination.trim().to_string(),
            departure_date,
            return_date,
            travelers: form.travelers.max(1),
            budget,
            budget_formatted: if budget.is_zero() {
                String::new()
            } else {
                budget.format()
            },
            preferences: none_if_blank(&form.preferences),
            user: user.clone(),
            requested_at: now,
        })
    }
}

/// Itinerary as read back from local storage
#[derive(Debug, Clone, PartialEq)]
pub enum ItineraryContent {
    Text(String),
    Json(serde_json::Value),
}

impl ItineraryContent {
    /// Interpret a stored response. A JSON string unwraps to its text, other
    /// JSON is kept structured, and anything unparseable is plain text.
    pub fn from_stored(raw: &str) -> Self {
        match serde_json::from_str::<serde_json::Value>(raw) {
            Ok(serde_json::Value::String(text)) => Self::Text(text),
            Ok(value) => Self::Json(value),
            Err(_) => Self::Text(raw.to_string()),
        }
    }

    pub fn display_text(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Json(value) => {
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
            }
        }
    }
}

/// The last planned trip, as persisted on this device
#[derive(Debug, Clone, PartialEq)]
pub struct StoredTrip {
    pub form: TripFormData,
    pub response: ItineraryContent,
    pub saved_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::UserId;
    use chrono::TimeZone;

    fn filled_form() -> TripFormData {
        TripFormData {
            origin: "São Paulo".to_string(),
            destination: "Rio de Janeiro".to_string(),
            departure_date: NaiveDate::from_ymd_opt(2025, 7, 10),
            return_date: NaiveDate::from_ymd_opt(2025, 7, 15),
            travelers: 2,
            budget_text: "R$ 5.000,00".to_string(),
            preferences: "  praia e gastronomia ".to_string(),
        }
    }

    fn user() -> AuthUser {
        AuthUser {
            id: UserId::new(),
            email: "ana@example.com".to_string(),
            full_name: Some("Ana".to_string()),
        }
    }

    #[test]
    fn complete_form_passes() {
        assert_eq!(filled_form().validate(), Ok(()));
    }

    #[test]
    fn empty_form_reports_every_required_field_in_order() {
        let err = TripFormData::default().validate().unwrap_err();
        assert_eq!(
            err,
            TripFormError::MissingRequiredFields {
                fields: vec!["origin", "destination", "departure_date", "return_date"],
            }
        );
        assert_eq!(
            err.to_string(),
            "Preencha origem, destino e as datas da viagem."
        );
    }

    #[test]
    fn whitespace_destination_is_missing() {
        let form = TripFormData {
            destination: "   ".to_string(),
            ..filled_form()
        };
        let TripFormError::MissingRequiredFields { fields } = form.validate().unwrap_err();
        assert_eq!(fields, vec!["destination"]);
    }

    #[test]
    fn return_before_departure_is_not_rejected() {
        let form = TripFormData {
            return_date: NaiveDate::from_ymd_opt(2025, 7, 1),
            ..filled_form()
        };
        assert!(form.validate().is_ok());
        assert_eq!(form.nights(), Some(-9));
    }

    #[test]
    fn request_carries_budget_in_both_forms() {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        let request = TripRequest::from_form(&filled_form(), &user(), now).unwrap();

        assert_eq!(request.budget.as_f64(), 5000.0);
        assert_eq!(request.budget_formatted, "R$ 5.000,00");
        assert_eq!(request.preferences.as_deref(), Some("praia e gastronomia"));
        assert_eq!(request.travelers, 2);
        assert_eq!(request.requested_at, now);
    }

    #[test]
    fn request_without_budget_leaves_formatted_empty() {
        let form = TripFormData {
            budget_text: String::new(),
            travelers: 0,
            ..filled_form()
        };
        let request = TripRequest::from_form(&form, &user(), Utc::now()).unwrap();
        assert!(request.budget.is_zero());
        assert_eq!(request.budget_formatted, "");
        assert_eq!(request.travelers, 1);
    }

    #[test]
    fn stored_json_string_unwraps_to_text() {
        assert_eq!(
            ItineraryContent::from_stored("\"Dia 1: praia\""),
            ItineraryContent::Text("Dia 1: praia".to_string())
        );
    }

    #[test]
    fn stored_plain_text_survives_parse_failure() {
        let raw = "Dia 1: Cristo Redentor\nDia 2: Pão de Açúcar";
        assert_eq!(
            ItineraryContent::from_stored(raw),
            ItineraryContent::Text(raw.to_string())
        );
    }

    #[test]
    fn stored_object_stays_structured() {
        let content = ItineraryContent::from_stored(r#"{"days":[1,2]}"#);
        assert!(matches!(content, ItineraryContent::Json(_)));
        assert!(content.display_text().contains("\"days\""));
    }

    #[test]
    fn form_round_trips_through_storage_json() {
        let json = serde_json::to_string(&filled_form()).unwrap();
        let back: TripFormData = serde_json::from_str(&json).unwrap();
        assert_eq!(back, filled_form());
    }

    #[test]
    fn legacy_form_json_without_optional_fields_loads() {
        let form: TripFormData = serde_json::from_str(
            r#"{"origin":"Recife","destination":"Natal","departure_date":null,"return_date":null}"#,
        )
        .unwrap();
        assert_eq!(form.travelers, 1);
        assert!(form.budget_text.is_empty());
    }
}
