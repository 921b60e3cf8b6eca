//! Hand-written fakes shared by the service tests.

use std::sync::Mutex;

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde_json::Value;
use tripmate_domain::{AuthError, AuthErrorCode, AuthSession, AuthUser, UserId};

use crate::ports::outbound::{AuthPort, SignUpOutcome, TableError, TablePort};

/// In-memory rows; `fail` makes every call answer 500
#[derive(Default)]
pub struct FakeTables {
    pub rows: Mutex<Vec<(String, Value)>>,
    pub fail: bool,
}

impl FakeTables {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn rows_in(&self, table: &str) -> Vec<Value> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .filter(|(t, _)| t == table)
            .map(|(_, row)| row.clone())
            .collect()
    }

    fn unavailable() -> TableError {
        TableError::Status {
            status: 500,
            body: String::new(),
        }
    }
}

#[async_trait::async_trait]
impl TablePort for FakeTables {
    async fn select(
        &self,
        table: &str,
        filters: &[(String, String)],
        _access_token: Option<String>,
    ) -> Result<Vec<Value>, TableError> {
        if self.fail {
            return Err(Self::unavailable());
        }
        Ok(self
            .rows_in(table)
            .into_iter()
            .filter(|row| {
                filters
                    .iter()
                    .all(|(col, val)| row[col.as_str()].as_str() == Some(val.as_str()))
            })
            .collect())
    }

    async fn insert(
        &self,
        table: &str,
        row: &Value,
        _access_token: Option<String>,
    ) -> Result<(), TableError> {
        if self.fail {
            return Err(Self::unavailable());
        }
        self.rows
            .lock()
            .unwrap()
            .push((table.to_string(), row.clone()));
        Ok(())
    }
}

pub const PASSWORD: &str = "segredo1";

pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap()
}

pub fn user() -> AuthUser {
    AuthUser {
        id: UserId::from_uuid(uuid::Uuid::from_u128(0xA11CE)),
        email: "ana@example.com".into(),
        full_name: Some("Ana Souza".into()),
    }
}

pub fn session(expires_at: DateTime<Utc>) -> AuthSession {
    AuthSession {
        access_token: "jwt".into(),
        refresh_token: "refresh".into(),
        expires_at,
        user: user(),
    }
}

/// Provider that knows one account (`user()` / `PASSWORD`)
pub struct FakeAuth {
    /// Sign-up answers with a session instead of a pending confirmation
    pub auto_confirm: bool,
    pub calls: Mutex<Vec<String>>,
}

impl FakeAuth {
    pub fn new(auto_confirm: bool) -> Self {
        Self {
            auto_confirm,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: &str) {
        self.calls.lock().unwrap().push(call.to_string());
    }
}

#[async_trait::async_trait]
impl AuthPort for FakeAuth {
    async fn sign_up(
        &self,
        email: &str,
        _password: &str,
        full_name: Option<String>,
    ) -> Result<SignUpOutcome, AuthError> {
        self.record("sign_up");
        if email == user().email {
            return Err(AuthError::new(AuthErrorCode::UserAlreadyExists, now()));
        }
        let created = AuthUser {
            id: UserId::new(),
            email: email.to_string(),
            full_name,
        };
        Ok(if self.auto_confirm {
            SignUpOutcome::SignedIn(AuthSession {
                user: created,
                ..session(now() + Duration::hours(1))
            })
        } else {
            SignUpOutcome::ConfirmationPending(created)
        })
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, AuthError> {
        self.record("sign_in");
        if email == user().email && password == PASSWORD {
            Ok(session(now() + Duration::hours(1)))
        } else {
            Err(AuthError::new(AuthErrorCode::InvalidCredentials, now()))
        }
    }

    async fn reset_password(
        &self,
        _email: &str,
        _redirect_to: Option<String>,
    ) -> Result<(), AuthError> {
        self.record("reset_password");
        Ok(())
    }

    async fn sign_out(&self, _access_token: &str) -> Result<(), AuthError> {
        self.record("sign_out");
        Err(AuthError::network(now()))
    }

    async fn get_user(&self, access_token: &str) -> Result<AuthUser, AuthError> {
        self.record("get_user");
        if access_token == "jwt" {
            Ok(AuthUser {
                full_name: Some("Ana S.".into()),
                ..user()
            })
        } else {
            Err(AuthError::session_missing(now()))
        }
    }
}
