//! Service layer error types

use thiserror::Error;
use tripmate_domain::TripFormError;

use crate::ports::outbound::ApiError;

/// Webhook requests are aborted after this long unless configured otherwise
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 60_000;

/// Why planning a trip failed
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TripServiceError {
    #[error(transparent)]
    Form(#[from] TripFormError),

    #[error("Faça login para planejar sua viagem.")]
    NotSignedIn,

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl TripServiceError {
    /// Message for the toast
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    pub fn is_auth(&self) -> bool {
        matches!(self, Self::NotSignedIn)
            || matches!(self, Self::Api(e) if e.code == crate::ports::outbound::ApiErrorCode::Auth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::ApiErrorCode;

    #[test]
    fn test_messages_come_from_the_wrapped_error() {
        let form = TripServiceError::from(TripFormError::MissingRequiredFields {
            fields: vec!["origin"],
        });
        assert_eq!(
            form.user_message(),
            "Preencha origem, destino e as datas da viagem."
        );

        let api = TripServiceError::from(ApiError::from_status(401, ""));
        assert_eq!(api.user_message(), "Sua sessão expirou. Faça login novamente.");
        assert!(api.is_auth());
        assert!(!TripServiceError::from(ApiError::new(ApiErrorCode::Server)).is_auth());
    }
}
