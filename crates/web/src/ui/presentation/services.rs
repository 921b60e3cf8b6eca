//! Service providers for the presentation layer
//!
//! This module provides Dioxus context providers for application services.
//! Components can use the `use_*_service` hooks to access services without
//! depending on infrastructure implementations.

use dioxus::prelude::*;
use std::sync::Arc;

use crate::application::api::WebhookClient;
use crate::application::services::{
    AuthService, CatalogService, ProfileService, SignupNotifier, TripService, TripStore,
};
use crate::config::AppConfig;
use crate::infrastructure::{ProviderAuthClient, RestTableClient};
use crate::ports::outbound::{HttpTransport, PlatformPort, SessionSource, WebhookPort};

/// All services wrapped for context provision
#[derive(Clone)]
pub struct Services {
    pub auth: Arc<AuthService>,
    pub trips: Arc<TripService>,
    pub catalog: Arc<CatalogService>,
}

impl Services {
    /// Wire every service from the configuration and the two shared
    /// adapters (platform and HTTP transport)
    pub fn new(
        config: &AppConfig,
        platform: Arc<dyn PlatformPort>,
        transport: Arc<dyn HttpTransport>,
    ) -> Self {
        let timeout = config.request_timeout();

        let provider = ProviderAuthClient::new(
            transport.clone(),
            platform.clone(),
            config.auth_url.as_str(),
            config.auth_anon_key.as_str(),
            timeout,
        );
        let tables = RestTableClient::new(
            transport.clone(),
            config.auth_url.as_str(),
            config.auth_anon_key.as_str(),
            timeout,
        );
        let notifier = config
            .signup_webhook_url
            .as_ref()
            .map(|url| SignupNotifier::new(transport.clone(), url.as_str(), timeout));

        let auth = Arc::new(AuthService::new(
            Arc::new(provider),
            platform.clone(),
            ProfileService::new(Arc::new(tables)),
            notifier,
        ));

        let session: Arc<dyn SessionSource> = auth.clone();
        let webhook: Arc<dyn WebhookPort> = Arc::new(WebhookClient::new(
            transport,
            session.clone(),
            config.api_base_url.as_str(),
            timeout,
        ));

        Self {
            trips: Arc::new(TripService::new(
                webhook.clone(),
                session,
                TripStore::new(platform.clone()),
                platform,
            )),
            catalog: Arc::new(CatalogService::new(webhook)),
            auth,
        }
    }
}

/// Hook to access the service bundle from context
pub fn use_services() -> Services {
    use_context::<Services>()
}

/// Hook to access the AuthService from context
pub fn use_auth_service() -> Arc<AuthService> {
    let services = use_context::<Services>();
    services.auth.clone()
}

/// Hook to access the TripService from context
pub fn use_trip_service() -> Arc<TripService> {
    let services = use_context::<Services>();
    services.trips.clone()
}

/// Hook to access the CatalogService from context
pub fn use_catalog_service() -> Arc<CatalogService> {
    let services = use_context::<Services>();
    services.catalog.clone()
}
