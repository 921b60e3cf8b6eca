//! Offers, packages and a user's past trips
//!
//! Listings come from the webhook when it answers and from the built-in
//! catalog when it does not.

use std::sync::Arc;

use tripmate_domain::{
    builtin_offers, builtin_packages, AuthUser, TravelOffer, TravelPackage, UserTrip,
};

use crate::ports::outbound::{ApiError, WebhookPort};

#[derive(Clone)]
pub struct CatalogService {
    webhook: Arc<dyn WebhookPort>,
}

impl CatalogService {
    pub fn new(webhook: Arc<dyn WebhookPort>) -> Self {
        Self { webhook }
    }

    pub async fn packages(&self) -> Vec<TravelPackage> {
        match self.webhook.get_packages().await {
            Ok(packages) if !packages.is_empty() => packages,
            Ok(_) => builtin_packages(),
            Err(e) => {
                tracing::warn!(code = ?e.code, detail = ?e.detail, "Using built-in packages");
                builtin_packages()
            }
        }
    }

    pub async fn offers(&self) -> Vec<TravelOffer> {
        match self.webhook.get_offers().await {
            Ok(offers) if !offers.is_empty() => offers,
            Ok(_) => builtin_offers(),
            Err(e) => {
                tracing::warn!(code = ?e.code, detail = ?e.detail, "Using built-in offers");
                builtin_offers()
            }
        }
    }

    /// First `limit` packages, for the landing page
    pub async fn featured_packages(&self, limit: usize) -> Vec<TravelPackage> {
        let mut packages = self.packages().await;
        packages.truncate(limit);
        packages
    }

    /// Newest first
    pub async fn user_trips(&self, user: &AuthUser) -> Result<Vec<UserTrip>, ApiError> {
        let mut trips = self.webhook.get_user_trips(user.id).await?;
        trips.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(trips)
    }
}
