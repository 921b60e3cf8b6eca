//! Webhook Port - trip generation and catalog endpoints
//!
//! Errors are bucketed coarsely: by HTTP status for answered requests and by
//! failure mode for requests that never got one. Each bucket has exactly one
//! user-facing message.

use thiserror::Error;
use tripmate_domain::{TravelOffer, TravelPackage, TripRequest, UserId, UserTrip};

use super::TransportError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiErrorCode {
    /// 401
    Auth,
    /// 400
    Validation,
    /// 404
    NotFound,
    /// 5xx
    Server,
    Timeout,
    Network,
    Aborted,
    Unknown,
}

impl ApiErrorCode {
    pub fn from_status(status: u16) -> Self {
        match status {
            401 => Self::Auth,
            400 => Self::Validation,
            404 => Self::NotFound,
            500..=599 => Self::Server,
            _ => Self::Unknown,
        }
    }

    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Auth => "Sua sessão expirou. Faça login novamente.",
            Self::Validation => "Os dados enviados são inválidos. Revise o formulário.",
            Self::NotFound => "Recurso não encontrado.",
            Self::Server => "O servidor encontrou um erro. Tente novamente em instantes.",
            Self::Timeout => "A solicitação demorou demais para responder. Tente novamente.",
            Self::Network => "Falha de conexão. Verifique sua internet.",
            Self::Aborted => "A solicitação foi cancelada.",
            Self::Unknown => "Ocorreu um erro inesperado.",
        }
    }
}

/// Webhook failure, carrying the message shown to the user
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ApiError {
    pub code: ApiErrorCode,
    pub message: String,
    pub status: Option<u16>,
    /// Response body or transport detail, for logs only
    pub detail: Option<String>,
}

impl ApiError {
    pub fn new(code: ApiErrorCode) -> Self {
        Self {
            code,
            message: code.user_message().to_string(),
            status: None,
            detail: None,
        }
    }

    pub fn from_status(status: u16, body: &str) -> Self {
        Self {
            status: Some(status),
            detail: (!body.is_empty()).then(|| body.to_string()),
            ..Self::new(ApiErrorCode::from_status(status))
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

impl From<TransportError> for ApiError {
    fn from(err: TransportError) -> Self {
        let code = match &err {
            TransportError::Timeout => ApiErrorCode::Timeout,
            TransportError::Aborted => ApiErrorCode::Aborted,
            TransportError::Network(_) => ApiErrorCode::Network,
            TransportError::InvalidRequest(_) => ApiErrorCode::Unknown,
        };
        Self::new(code).with_detail(err.to_string())
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait WebhookPort: Send + Sync {
    /// Raw response text of the generation workflow
    async fn generate_trip(&self, request: &TripRequest) -> Result<String, ApiError>;

    async fn get_packages(&self) -> Result<Vec<TravelPackage>, ApiError>;

    async fn get_offers(&self) -> Result<Vec<TravelOffer>, ApiError>;

    async fn get_user_trips(&self, user_id: UserId) -> Result<Vec<UserTrip>, ApiError>;
}

#[cfg(test)]
mockall::mock! {
    /// Mock webhook for service tests
    pub WebhookPort {}

    #[async_trait::async_trait]
    impl WebhookPort for WebhookPort {
        async fn generate_trip(&self, request: &TripRequest) -> Result<String, ApiError>;
        async fn get_packages(&self) -> Result<Vec<TravelPackage>, ApiError>;
        async fn get_offers(&self) -> Result<Vec<TravelOffer>, ApiError>;
        async fn get_user_trips(&self, user_id: UserId) -> Result<Vec<UserTrip>, ApiError>;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_buckets() {
        assert_eq!(ApiErrorCode::from_status(401), ApiErrorCode::Auth);
        assert_eq!(ApiErrorCode::from_status(400), ApiErrorCode::Validation);
        assert_eq!(ApiErrorCode::from_status(404), ApiErrorCode::NotFound);
        assert_eq!(ApiErrorCode::from_status(500), ApiErrorCode::Server);
        assert_eq!(ApiErrorCode::from_status(503), ApiErrorCode::Server);
        assert_eq!(ApiErrorCode::from_status(403), ApiErrorCode::Unknown);
        assert_eq!(ApiErrorCode::from_status(429), ApiErrorCode::Unknown);
    }

    #[test]
    fn unauthorized_shows_exactly_the_auth_message() {
        let err = ApiError::from_status(401, r#"{"error":"jwt expired"}"#);
        assert_eq!(err.to_string(), "Sua sessão expirou. Faça login novamente.");
        assert_eq!(err.status, Some(401));
        assert_eq!(err.detail.as_deref(), Some(r#"{"error":"jwt expired"}"#));
    }

    #[test]
    fn transport_failures_have_their_own_codes() {
        let timeout = ApiError::from(TransportError::Timeout);
        assert_eq!(timeout.code, ApiErrorCode::Timeout);
        assert_eq!(
            timeout.message,
            "A solicitação demorou demais para responder. Tente novamente."
        );
        assert_eq!(
            ApiError::from(TransportError::Network("dns".into())).code,
            ApiErrorCode::Network
        );
        assert_eq!(
            ApiError::from(TransportError::Aborted).code,
            ApiErrorCode::Aborted
        );
    }
}
