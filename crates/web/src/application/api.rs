//! Webhook client
//!
//! Every call is authenticated with the bearer token of the current session
//! and bounded by a fixed timeout. A missing session fails fast without
//! touching the network.

use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tripmate_domain::{TravelOffer, TravelPackage, TripRequest, UserId, UserTrip};
use tripmate_shared::{decode_list, GenerateTripPayload};

use crate::ports::outbound::{
    ApiError, ApiErrorCode, HttpRequest, HttpResponse, HttpTransport, SessionSource, WebhookPort,
};

#[derive(Clone)]
pub struct WebhookClient {
    transport: Arc<dyn HttpTransport>,
    session: Arc<dyn SessionSource>,
    base_url: String,
    timeout: Duration,
}

impl WebhookClient {
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        session: Arc<dyn SessionSource>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            transport,
            session,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let Some(token) = self.session.access_token() else {
            tracing::warn!(url = %request.url, "Webhook call without a session");
            return Err(ApiError::new(ApiErrorCode::Auth));
        };
        let request = request.bearer(&token).timeout(self.timeout);
        let url = request.url.clone();

        let response = self.transport.send(request).await.map_err(|e| {
            tracing::warn!(url = %url, error = %e, "Webhook request failed");
            ApiError::from(e)
        })?;

        if !response.is_success() {
            tracing::warn!(url = %url, status = response.status, "Webhook returned an error");
            return Err(ApiError::from_status(response.status, &response.body));
        }
        Ok(response)
    }

    async fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
        resource: &str,
    ) -> Result<Vec<T>, ApiError> {
        let response = self.send(HttpRequest::get(self.url(path))).await?;
        let value: Value = serde_json::from_str(&response.body)
            .map_err(|e| ApiError::new(ApiErrorCode::Unknown).with_detail(e.to_string()))?;
        decode_list(value, resource)
            .map_err(|e| ApiError::new(ApiErrorCode::Unknown).with_detail(e.to_string()))
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
impl WebhookPort for WebhookClient {
    async fn generate_trip(&self, request: &TripRequest) -> Result<String, ApiError> {
        let payload = GenerateTripPayload::from(request);
        let http = HttpRequest::post(self.url("/trips/generate"))
            .json(&payload)
            .map_err(ApiError::from)?;

        tracing::info!(
            origin = %payload.origin,
            destination = %payload.destination,
            "Requesting itinerary"
        );
        let response = self.send(http).await?;
        Ok(response.body)
    }

    async fn get_packages(&self) -> Result<Vec<TravelPackage>, ApiError> {
        self.get_list("/packages", "packages").await
    }

    async fn get_offers(&self) -> Result<Vec<TravelOffer>, ApiError> {
        self.get_list("/offers", "offers").await
    }

    async fn get_user_trips(&self, user_id: UserId) -> Result<Vec<UserTrip>, ApiError> {
        self.get_list(&format!("/users/{}/trips", user_id), "trips").await
    }
}
