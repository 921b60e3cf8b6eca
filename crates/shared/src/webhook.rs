//! Trip webhook wire format

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use tripmate_domain::{AuthUser, TripRequest};

/// Body of `POST /trips/generate`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateTripPayload {
    pub origin: String,
    pub destination: String,
    pub departure_date: NaiveDate,
    pub return_date: NaiveDate,
    pub travelers: u32,
    /// Budget in reais
    pub budget: f64,
    pub budget_formatted: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferences: Option<String>,
    pub user_id: Uuid,
    pub user_email: String,
    pub requested_at: DateTime<Utc>,
}

impl From<&TripRequest> for GenerateTripPayload {
    fn from(request: &TripRequest) -> Self {
        Self {
            origin: request.origin.clone(),
            destination: request.destination.clone(),
            departure_date: request.departure_date,
            return_date: request.return_date,
            travelers: request.travelers,
            budget: request.budget.as_f64(),
            budget_formatted: request.budget_formatted.clone(),
            preferences: request.preferences.clone(),
            user_id: *request.user.id.as_uuid(),
            user_email: request.user.email.clone(),
            requested_at: request.requested_at,
        }
    }
}

/// Fields the generation workflow may wrap its text in, by priority
const ITINERARY_FIELDS: [&str; 3] = ["content", "message", "result"];

/// Pick the itinerary text out of a raw webhook response.
///
/// A JSON object with a string `content`, `message` or `result` yields that
/// string. Any other body is returned untouched.
pub fn extract_itinerary_text(raw: &str) -> String {
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(raw) {
        for field in ITINERARY_FIELDS {
            if let Some(Value::String(text)) = map.get(field) {
                return text.clone();
            }
        }
    }
    raw.to_string()
}

/// Fire-and-forget notification posted after an account is created
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignupNotification {
    pub event: String,
    pub user_id: Uuid,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl SignupNotification {
    pub const EVENT: &'static str = "user_signed_up";

    pub fn for_user(user: &AuthUser, now: DateTime<Utc>) -> Self {
        Self {
            event: Self::EVENT.to_string(),
            user_id: *user.id.as_uuid(),
            email: user.email.clone(),
            full_name: user.full_name.clone(),
            created_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tripmate_domain::{TripFormData, UserId};

    #[test]
    fn content_field_is_extracted() {
        let raw = r#"{"content":"Dia 1: Copacabana","message":"ignored"}"#;
        assert_eq!(extract_itinerary_text(raw), "Dia 1: Copacabana");
    }

    #[test]
    fn message_then_result_are_fallbacks() {
        assert_eq!(extract_itinerary_text(r#"{"message":"m"}"#), "m");
        assert_eq!(extract_itinerary_text(r#"{"result":"r","other":1}"#), "r");
    }

    #[test]
    fn non_string_field_keeps_raw_body() {
        let raw = r#"{"content":{"days":3}}"#;
        assert_eq!(extract_itinerary_text(raw), raw);
    }

    #[test]
    fn plain_text_and_arrays_are_verbatim() {
        assert_eq!(extract_itinerary_text("Roteiro pronto"), "Roteiro pronto");
        let raw = r#"[{"content":"x"}]"#;
        assert_eq!(extract_itinerary_text(raw), raw);
    }

    #[test]
    fn payload_serializes_budget_as_number() {
        let form = TripFormData {
            origin: "São Paulo".to_string(),
            destination: "Rio de Janeiro".to_string(),
            departure_date: NaiveDate::from_ymd_opt(2025, 7, 10),
            return_date: NaiveDate::from_ymd_opt(2025, 7, 15),
            travelers: 2,
            budget_text: "R$ 3.500,00".to_string(),
            preferences: String::new(),
        };
        let user = AuthUser {
            id: UserId::new(),
            email: "ana@example.com".to_string(),
            full_name: None,
        };
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
        let request = TripRequest::from_form(&form, &user, now).unwrap();

        let json = serde_json::to_value(GenerateTripPayload::from(&request)).unwrap();
        assert_eq!(json["origin"], "São Paulo");
        assert_eq!(json["budget"], 3500.0);
        assert_eq!(json["budget_formatted"], "R$ 3.500,00");
        assert_eq!(json["departure_date"], "2025-07-10");
        assert!(json.get("preferences").is_none());
    }
}
