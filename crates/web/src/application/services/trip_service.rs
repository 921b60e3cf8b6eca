//! Trip planning use case
//!
//! Validates the planner form, sends one generation request and persists the
//! answer for the result page.

use std::sync::Arc;

use tripmate_domain::{ItineraryContent, StoredTrip, TripFormData, TripRequest};
use tripmate_shared::extract_itinerary_text;

use crate::application::error::TripServiceError;
use crate::application::services::TripStore;
use crate::ports::outbound::{PlatformPort, SessionSource, WebhookPort};

#[derive(Clone)]
pub struct TripService {
    webhook: Arc<dyn WebhookPort>,
    session: Arc<dyn SessionSource>,
    store: TripStore,
    platform: Arc<dyn PlatformPort>,
}

impl TripService {
    pub fn new(
        webhook: Arc<dyn WebhookPort>,
        session: Arc<dyn SessionSource>,
        store: TripStore,
        platform: Arc<dyn PlatformPort>,
    ) -> Self {
        Self {
            webhook,
            session,
            store,
            platform,
        }
    }

    /// Generate an itinerary for `form` and store it.
    ///
    /// Nothing is sent when the form is incomplete or nobody is signed in.
    pub async fn plan_trip(&self, form: &TripFormData) -> Result<StoredTrip, TripServiceError> {
        form.validate()?;
        let user = self
            .session
            .current_user()
            .ok_or(TripServiceError::NotSignedIn)?;

        let now = self.platform.now();
        let request = TripRequest::from_form(form, &user, now)?;

        let raw = self.webhook.generate_trip(&request).await?;
        tracing::info!(
            destination = %request.destination,
            bytes = raw.len(),
            "Itinerary received"
        );

        self.store.save(form, &raw, now);
        Ok(StoredTrip {
            form: form.clone(),
            response: ItineraryContent::from_stored(&extract_itinerary_text(&raw)),
            saved_at: now,
        })
    }

    pub fn last_trip(&self) -> Option<StoredTrip> {
        self.store.load()
    }

    /// Forget the stored trip before planning a new one
    pub fn start_over(&self) {
        self.store.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::platform::mock::MockPlatform;
    use crate::ports::outbound::{
        storage_keys, ApiError, ApiErrorCode, MockWebhookPort, StorageProvider,
    };
    use chrono::NaiveDate;
    use mockall::predicate::function;
    use tripmate_domain::{AuthUser, UserId};

    struct FakeSession(Option<AuthUser>);

    impl SessionSource for FakeSession {
        fn access_token(&self) -> Option<String> {
            self.0.as_ref().map(|_| "jwt".to_string())
        }

        fn current_user(&self) -> Option<AuthUser> {
            self.0.clone()
        }
    }

    fn user() -> AuthUser {
        AuthUser {
            id: UserId::new(),
            email: "ana@example.com".into(),
            full_name: Some("Ana".into()),
        }
    }

    fn form() -> TripFormData {
        TripFormData {
            origin: "São Paulo".into(),
            destination: "Rio de Janeiro".into(),
            departure_date: NaiveDate::from_ymd_opt(2025, 7, 10),
            return_date: NaiveDate::from_ymd_opt(2025, 7, 15),
            travelers: 2,
            budget_text: "R$ 5.000,00".into(),
            preferences: "praia".into(),
        }
    }

    fn service(webhook: MockWebhookPort, user: Option<AuthUser>) -> (MockPlatform, TripService) {
        let mock = MockPlatform::new();
        let platform: Arc<dyn PlatformPort> = Arc::new(mock.platform());
        let service = TripService::new(
            Arc::new(webhook),
            Arc::new(FakeSession(user)),
            TripStore::new(platform.clone()),
            platform,
        );
        (mock, service)
    }

    #[tokio::test]
    async fn test_incomplete_form_makes_no_request() {
        let mut webhook = MockWebhookPort::new();
        webhook.expect_generate_trip().never();
        let (mock, service) = service(webhook, Some(user()));

        let err = service
            .plan_trip(&TripFormData {
                destination: String::new(),
                ..form()
            })
            .await
            .unwrap_err();

        assert_eq!(
            err.user_message(),
            "Preencha origem, destino e as datas da viagem."
        );
        assert!(mock.storage.is_empty());
    }

    #[tokio::test]
    async fn test_signed_out_makes_no_request() {
        let mut webhook = MockWebhookPort::new();
        webhook.expect_generate_trip().never();
        let (_mock, service) = service(webhook, None);

        let err = service.plan_trip(&form()).await.unwrap_err();
        assert_eq!(err, TripServiceError::NotSignedIn);
        assert!(err.is_auth());
    }

    #[tokio::test]
    async fn test_success_stores_response_for_result_page() {
        let mut webhook = MockWebhookPort::new();
        webhook
            .expect_generate_trip()
            .with(function(|r: &TripRequest| {
                r.origin == "São Paulo"
                    && r.destination == "Rio de Janeiro"
                    && r.budget.cents() == 500_000
                    && r.preferences.as_deref() == Some("praia")
            }))
            .times(1)
            .returning(|_| Ok(r#"{"result":"Dia 1: Lapa"}"#.to_string()));
        let (mock, service) = service(webhook, Some(user()));

        let trip = service.plan_trip(&form()).await.unwrap();

        assert_eq!(trip.response, ItineraryContent::Text("Dia 1: Lapa".into()));
        assert_eq!(
            mock.storage.load(storage_keys::TRIP_RESPONSE).as_deref(),
            Some("Dia 1: Lapa")
        );
        assert_eq!(service.last_trip(), Some(trip));
    }

    #[tokio::test]
    async fn test_webhook_error_keeps_previous_trip() {
        let mut webhook = MockWebhookPort::new();
        webhook
            .expect_generate_trip()
            .returning(|_| Err(ApiError::from_status(401, "")));
        let (mock, service) = service(webhook, Some(user()));
        mock.storage.save(storage_keys::TRIP_RESPONSE, "roteiro antigo");

        let err = service.plan_trip(&form()).await.unwrap_err();

        assert!(matches!(&err, TripServiceError::Api(e) if e.code == ApiErrorCode::Auth));
        assert_eq!(err.user_message(), "Sua sessão expirou. Faça login novamente.");
        assert_eq!(
            mock.storage.load(storage_keys::TRIP_RESPONSE).as_deref(),
            Some("roteiro antigo")
        );
    }

    #[tokio::test]
    async fn test_start_over_clears_the_store() {
        let (mock, service) = service(MockWebhookPort::new(), Some(user()));
        mock.storage.save(storage_keys::TRIP_RESPONSE, "x");
        mock.storage.save(storage_keys::TRIP_TIMESTAMP, "y");

        service.start_over();

        assert!(service.last_trip().is_none());
        assert!(mock.storage.is_empty());
    }
}
