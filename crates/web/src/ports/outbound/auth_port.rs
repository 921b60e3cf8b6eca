//! Auth Port - the third-party auth provider seen from the client
//!
//! Only the provider calls live here. Session bookkeeping (memory, storage,
//! change events) is owned by `AuthService`.

use tripmate_domain::{AuthError, AuthSession, AuthUser};

/// Result of a successful sign-up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignUpOutcome {
    /// E-mail confirmation is off; the user is signed in right away
    SignedIn(AuthSession),
    /// Account created, waiting for the confirmation link
    ConfirmationPending(AuthUser),
}

impl SignUpOutcome {
    pub fn user(&self) -> &AuthUser {
        match self {
            Self::SignedIn(session) => &session.user,
            Self::ConfirmationPending(user) => user,
        }
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait AuthPort: Send + Sync {
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        full_name: Option<String>,
    ) -> Result<SignUpOutcome, AuthError>;

    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, AuthError>;

    /// Sends the recovery e-mail; `redirect_to` is where its link lands
    async fn reset_password(&self, email: &str, redirect_to: Option<String>)
        -> Result<(), AuthError>;

    async fn sign_out(&self, access_token: &str) -> Result<(), AuthError>;

    async fn get_user(&self, access_token: &str) -> Result<AuthUser, AuthError>;
}

/// Read access to the signed-in session
pub trait SessionSource: Send + Sync {
    /// Bearer token of the current session
    fn access_token(&self) -> Option<String>;

    fn current_user(&self) -> Option<AuthUser>;
}
