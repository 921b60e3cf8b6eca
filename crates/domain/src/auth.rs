//! Authentication vocabulary
//!
//! Whatever the auth provider reports is normalized into these types so the
//! UI only ever sees one error shape: `{code, message, timestamp}`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::Validate;

use crate::ids::UserId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: UserId,
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
}

impl AuthUser {
    /// Name for greetings; falls back to the local part of the e-mail.
    pub fn display_name(&self) -> String {
        if let Some(name) = self.full_name.as_deref().filter(|n| !n.trim().is_empty()) {
            return name.trim().to_string();
        }
        self.email
            .split('@')
            .next()
            .unwrap_or_default()
            .to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_at: DateTime<Utc>,
    pub user: AuthUser,
}

impl AuthSession {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// Auth state changes, in the order the provider reports them
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthEvent {
    /// Emitted once after the persisted session was restored (or not)
    InitialSession(Option<AuthSession>),
    SignedIn(AuthSession),
    SignedOut,
    PasswordRecovery,
    UserUpdated(AuthUser),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthErrorCode {
    InvalidCredentials,
    EmailNotConfirmed,
    UserAlreadyExists,
    WeakPassword,
    PasswordMismatch,
    InvalidEmail,
    MissingName,
    RateLimited,
    SessionMissing,
    Network,
    Unknown,
}

impl AuthErrorCode {
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "E-mail ou senha incorretos.",
            Self::EmailNotConfirmed => "Confirme seu e-mail antes de entrar.",
            Self::UserAlreadyExists => "Este e-mail já está cadastrado.",
            Self::WeakPassword => "A senha deve ter pelo menos 6 caracteres.",
            Self::PasswordMismatch => "As senhas não coincidem.",
            Self::InvalidEmail => "Informe um e-mail válido.",
            Self::MissingName => "Informe seu nome completo.",
            Self::RateLimited => "Muitas tentativas. Aguarde alguns minutos e tente novamente.",
            Self::SessionMissing => "Você precisa entrar na sua conta para continuar.",
            Self::Network => "Falha de conexão. Verifique sua internet.",
            Self::Unknown => "Não foi possível concluir a operação.",
        }
    }
}

/// Uniform auth failure
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct AuthError {
    pub code: AuthErrorCode,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl AuthError {
    pub fn new(code: AuthErrorCode, now: DateTime<Utc>) -> Self {
        Self {
            code,
            message: code.default_message().to_string(),
            timestamp: now,
        }
    }

    pub fn session_missing(now: DateTime<Utc>) -> Self {
        Self::new(AuthErrorCode::SessionMissing, now)
    }

    pub fn network(now: DateTime<Utc>) -> Self {
        Self::new(AuthErrorCode::Network, now)
    }

    /// Translate a provider error object.
    ///
    /// The provider is inconsistent: newer endpoints send a machine-readable
    /// `error_code`, older ones only a human message, so both are checked.
    pub fn from_provider(
        status: u16,
        error_code: Option<&str>,
        message: &str,
        now: DateTime<Utc>,
    ) -> Self {
        let lower = message.to_ascii_lowercase();
        let code = match error_code {
            Some("invalid_credentials") | Some("invalid_grant") => {
                AuthErrorCode::InvalidCredentials
            }
            Some("email_not_confirmed") => AuthErrorCode::EmailNotConfirmed,
            Some("user_already_exists") | Some("email_exists") => {
                AuthErrorCode::UserAlreadyExists
            }
            Some("weak_password") => AuthErrorCode::WeakPassword,
            Some("email_address_invalid") | Some("validation_failed") => {
                AuthErrorCode::InvalidEmail
            }
            Some("over_request_rate_limit") | Some("over_email_send_rate_limit") => {
                AuthErrorCode::RateLimited
            }
            _ if status == 429 => AuthErrorCode::RateLimited,
            _ if lower.contains("invalid login credentials") => AuthErrorCode::InvalidCredentials,
            _ if lower.contains("email not confirmed") => AuthErrorCode::EmailNotConfirmed,
            _ if lower.contains("already registered") => AuthErrorCode::UserAlreadyExists,
            _ if lower.contains("password should be") => AuthErrorCode::WeakPassword,
            _ if lower.contains("validate email") || lower.contains("invalid format") => {
                AuthErrorCode::InvalidEmail
            }
            _ => AuthErrorCode::Unknown,
        };

        let message = if code == AuthErrorCode::Unknown && !message.trim().is_empty() {
            message.trim().to_string()
        } else {
            code.default_message().to_string()
        };

        Self {
            code,
            message,
            timestamp: now,
        }
    }

    fn from_validation(errors: &validator::ValidationErrors, now: DateTime<Utc>) -> Self {
        let invalid = errors.field_errors();
        let has = |field: &str| invalid.keys().any(|k| k.to_string() == field);
        let code = if has("full_name") {
            AuthErrorCode::MissingName
        } else if has("email") {
            AuthErrorCode::InvalidEmail
        } else if has("password") {
            AuthErrorCode::WeakPassword
        } else if has("password_confirmation") {
            AuthErrorCode::PasswordMismatch
        } else {
            AuthErrorCode::Unknown
        };
        Self::new(code, now)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct SignUpForm {
    #[validate(length(min = 2))]
    pub full_name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 6))]
    pub password: String,
    #[validate(must_match(other = "password"))]
    pub password_confirmation: String,
}

impl SignUpForm {
    pub fn check(&self, now: DateTime<Utc>) -> Result<(), AuthError> {
        let trimmed = Self {
            full_name: self.full_name.trim().to_string(),
            email: self.email.trim().to_string(),
            ..self.clone()
        };
        trimmed
            .validate()
            .map_err(|e| AuthError::from_validation(&e, now))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct SignInForm {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

impl SignInForm {
    pub fn check(&self, now: DateTime<Utc>) -> Result<(), AuthError> {
        match self.validate() {
            Ok(()) => Ok(()),
            // An empty password is a failed login, not a password policy issue
            Err(e) if e.field_errors().keys().any(|k| k.to_string() == "password") => {
                Err(AuthError::new(AuthErrorCode::InvalidCredentials, now))
            }
            Err(e) => Err(AuthError::from_validation(&e, now)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct ResetPasswordForm {
    #[validate(email)]
    pub email: String,
}

impl ResetPasswordForm {
    pub fn check(&self, now: DateTime<Utc>) -> Result<(), AuthError> {
        self.validate()
            .map_err(|e| AuthError::from_validation(&e, now))
    }
}
