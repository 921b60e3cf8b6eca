//! Auth provider REST client (GoTrue-compatible `/auth/v1/*`)
//!
//! Every request carries the project's anonymous `apikey`. Provider error
//! bodies are translated into `AuthError` with a localized message.

use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use tripmate_domain::{AuthError, AuthErrorCode, AuthSession, AuthUser};
use tripmate_shared::{
    PasswordGrantRequest, ProviderErrorBody, ProviderUser, RecoverRequest, SignUpRequest,
    SignUpResponse, TokenResponse, UserMetadata,
};

use crate::ports::outbound::{
    AuthPort, HttpRequest, HttpResponse, HttpTransport, PlatformPort, SignUpOutcome,
};

pub struct ProviderAuthClient {
    transport: Arc<dyn HttpTransport>,
    platform: Arc<dyn PlatformPort>,
    base_url: String,
    anon_key: String,
    timeout: Duration,
}

impl ProviderAuthClient {
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        platform: Arc<dyn PlatformPort>,
        base_url: impl Into<String>,
        anon_key: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            transport,
            platform,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            anon_key: anon_key.into(),
            timeout,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.base_url, path)
    }

    fn request(&self, request: HttpRequest) -> HttpRequest {
        request
            .header("apikey", self.anon_key.as_str())
            .timeout(self.timeout)
    }

    fn authed(&self, request: HttpRequest, access_token: Option<&str>) -> HttpRequest {
        let token = access_token.unwrap_or(&self.anon_key).to_string();
        self.request(request).bearer(&token)
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, AuthError> {
        let now = self.platform.now();
        let response = self.transport.send(request).await.map_err(|e| {
            tracing::warn!(error = %e, "Auth provider unreachable");
            AuthError::network(now)
        })?;

        if response.is_success() {
            return Ok(response);
        }

        let body = ProviderErrorBody::parse(&response.body);
        tracing::debug!(
            status = response.status,
            code = ?body.code(),
            "Auth provider rejected request"
        );
        Err(AuthError::from_provider(
            response.status,
            body.code(),
            body.message(),
            self.platform.now(),
        ))
    }

    fn decode<T: DeserializeOwned>(&self, response: &HttpResponse) -> Result<T, AuthError> {
        serde_json::from_str(&response.body).map_err(|e| {
            tracing::error!(error = %e, "Unexpected auth provider response");
            AuthError::new(AuthErrorCode::Unknown, self.platform.now())
        })
    }

    fn into_user(&self, user: ProviderUser) -> Result<AuthUser, AuthError> {
        user.into_auth_user().map_err(|e| {
            tracing::error!(error = %e, "Auth provider returned an unusable user");
            AuthError::new(AuthErrorCode::Unknown, self.platform.now())
        })
    }

    fn into_session(&self, token: TokenResponse) -> Result<AuthSession, AuthError> {
        let now = self.platform.now();
        token.into_session(now).map_err(|e| {
            tracing::error!(error = %e, "Auth provider returned an unusable session");
            AuthError::new(AuthErrorCode::Unknown, now)
        })
    }

    fn json(
        &self,
        request: HttpRequest,
        body: &impl serde::Serialize,
    ) -> Result<HttpRequest, AuthError> {
        request
            .json(body)
            .map_err(|_| AuthError::new(AuthErrorCode::Unknown, self.platform.now()))
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
impl AuthPort for ProviderAuthClient {
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        full_name: Option<String>,
    ) -> Result<SignUpOutcome, AuthError> {
        let body = SignUpRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
            data: UserMetadata { full_name },
        };
        let request = self.json(self.request(HttpRequest::post(self.url("signup"))), &body)?;
        let response = self.send(request).await?;

        match self.decode::<SignUpResponse>(&response)? {
            SignUpResponse::Session(token) => {
                Ok(SignUpOutcome::SignedIn(self.into_session(token)?))
            }
            SignUpResponse::User(user) => {
                Ok(SignUpOutcome::ConfirmationPending(self.into_user(user)?))
            }
        }
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, AuthError> {
        let body = PasswordGrantRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        let request = self.json(
            self.request(HttpRequest::post(self.url("token?grant_type=password"))),
            &body,
        )?;
        let response = self.send(request).await?;
        let token: TokenResponse = self.decode(&response)?;
        self.into_session(token)
    }

    async fn reset_password(
        &self,
        email: &str,
        redirect_to: Option<String>,
    ) -> Result<(), AuthError> {
        let recover = self.url("recover");
        let url = match redirect_to {
            Some(redirect) => {
                url::Url::parse_with_params(&recover, [("redirect_to", redirect)])
                    .map(String::from)
                    .unwrap_or(recover)
            }
            None => recover,
        };
        let body = RecoverRequest {
            email: email.trim().to_string(),
        };
        let request = self.json(self.request(HttpRequest::post(url)), &body)?;
        self.send(request).await?;
        Ok(())
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), AuthError> {
        let request = self.authed(HttpRequest::post(self.url("logout")), Some(access_token));
        self.send(request).await?;
        Ok(())
    }

    async fn get_user(&self, access_token: &str) -> Result<AuthUser, AuthError> {
        let request = self.authed(HttpRequest::get(self.url("user")), Some(access_token));
        let response = self.send(request).await?;
        let user: ProviderUser = self.decode(&response)?;
        self.into_user(user)
    }
}
