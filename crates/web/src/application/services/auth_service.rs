//! Session bookkeeping on top of the auth provider
//!
//! The provider only answers requests. This service owns what the site
//! needs around them: the current session in memory, its copy in storage,
//! and the stream of `AuthEvent`s the UI listens to.

use std::sync::{Arc, Mutex, RwLock};
use std::time::Duration;

use futures_channel::mpsc::{unbounded, UnboundedReceiver, UnboundedSender};
use tripmate_domain::{
    AuthError, AuthEvent, AuthSession, AuthUser, ResetPasswordForm, SignInForm, SignUpForm,
};
use tripmate_shared::SignupNotification;

use crate::application::services::ProfileService;
use crate::ports::outbound::{
    storage_keys, AuthPort, HttpRequest, HttpTransport, PlatformPort, SessionSource,
    SignUpOutcome,
};

/// Posts a `SignupNotification` to an external automation webhook
#[derive(Clone)]
pub struct SignupNotifier {
    transport: Arc<dyn HttpTransport>,
    url: String,
    timeout: Duration,
}

impl SignupNotifier {
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        url: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            transport,
            url: url.into(),
            timeout,
        }
    }

    /// Failures are logged and dropped
    pub async fn notify(&self, notification: &SignupNotification) {
        let request = match HttpRequest::post(self.url.as_str())
            .timeout(self.timeout)
            .json(notification)
        {
            Ok(request) => request,
            Err(e) => {
                tracing::warn!(error = %e, "Could not build sign-up notification");
                return;
            }
        };

        match self.transport.send(request).await {
            Ok(response) if response.is_success() => {
                tracing::debug!(user_id = %notification.user_id, "Sign-up notification sent");
            }
            Ok(response) => {
                tracing::warn!(status = response.status, "Sign-up notification rejected");
            }
            Err(e) => {
                tracing::warn!(error = %e, "Sign-up notification failed");
            }
        }
    }
}

pub struct AuthService {
    auth: Arc<dyn AuthPort>,
    platform: Arc<dyn PlatformPort>,
    profiles: ProfileService,
    notifier: Option<SignupNotifier>,
    session: RwLock<Option<AuthSession>>,
    subscribers: Mutex<Vec<UnboundedSender<AuthEvent>>>,
}

impl AuthService {
    pub fn new(
        auth: Arc<dyn AuthPort>,
        platform: Arc<dyn PlatformPort>,
        profiles: ProfileService,
        notifier: Option<SignupNotifier>,
    ) -> Self {
        Self {
            auth,
            platform,
            profiles,
            notifier,
            session: RwLock::new(None),
            subscribers: Mutex::new(Vec::new()),
        }
    }

    /// Receive every event emitted from now on
    pub fn subscribe(&self) -> UnboundedReceiver<AuthEvent> {
        let (tx, rx) = unbounded();
        self.subscribers
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .push(tx);
        rx
    }

    fn emit(&self, event: AuthEvent) {
        let mut subscribers = self.subscribers.lock().unwrap_or_else(|p| p.into_inner());
        subscribers.retain(|tx| tx.unbounded_send(event.clone()).is_ok());
    }

    fn set_session(&self, session: Option<AuthSession>) {
        match &session {
            Some(s) => match serde_json::to_string(s) {
                Ok(json) => self.platform.storage_save(storage_keys::AUTH_SESSION, &json),
                Err(e) => tracing::error!(error = %e, "Failed to serialize session"),
            },
            None => self.platform.storage_remove(storage_keys::AUTH_SESSION),
        }
        *self.session.write().unwrap_or_else(|p| p.into_inner()) = session;
    }

    /// Restore the persisted session, dropping it when expired or corrupt.
    /// Emits `InitialSession` either way.
    pub fn initialize(&self) -> Option<AuthSession> {
        let now = self.platform.now();
        let restored = self
            .platform
            .storage_load(storage_keys::AUTH_SESSION)
            .and_then(|json| match serde_json::from_str::<AuthSession>(&json) {
                Ok(session) => Some(session),
                Err(e) => {
                    tracing::warn!(error = %e, "Discarding corrupt stored session");
                    None
                }
            })
            .filter(|session| {
                let live = !session.is_expired(now);
                if !live {
                    tracing::info!("Stored session expired");
                }
                live
            });

        self.set_session(restored.clone());
        tracing::info!(signed_in = restored.is_some(), "Auth initialized");
        self.emit(AuthEvent::InitialSession(restored.clone()));
        restored
    }

    pub fn current_session(&self) -> Option<AuthSession> {
        self.session
            .read()
            .unwrap_or_else(|p| p.into_inner())
            .clone()
    }

    pub fn is_signed_in(&self) -> bool {
        self.current_session().is_some()
    }

    pub async fn sign_up(&self, form: &SignUpForm) -> Result<SignUpOutcome, AuthError> {
        form.check(self.platform.now())?;

        let outcome = self
            .auth
            .sign_up(
                form.email.trim(),
                &form.password,
                Some(form.full_name.trim().to_string()),
            )
            .await?;
        tracing::info!(
            confirmed = matches!(outcome, SignUpOutcome::SignedIn(_)),
            "Account created"
        );

        let access_token = match &outcome {
            SignUpOutcome::SignedIn(session) => {
                self.set_session(Some(session.clone()));
                self.emit(AuthEvent::SignedIn(session.clone()));
                Some(session.access_token.clone())
            }
            SignUpOutcome::ConfirmationPending(_) => None,
        };

        let user = outcome.user();
        if let Err(e) = self.profiles.create_profile(user, access_token).await {
            tracing::warn!(error = %e, "Profile row not created");
        }
        if let Some(notifier) = &self.notifier {
            notifier
                .notify(&SignupNotification::for_user(user, self.platform.now()))
                .await;
        }

        Ok(outcome)
    }

    pub async fn sign_in(&self, form: &SignInForm) -> Result<AuthSession, AuthError> {
        form.check(self.platform.now())?;

        let session = self.auth.sign_in(form.email.trim(), &form.password).await?;
        tracing::info!(user_id = %session.user.id, "Signed in");

        self.set_session(Some(session.clone()));
        self.emit(AuthEvent::SignedIn(session.clone()));
        Ok(session)
    }

    /// Request the recovery e-mail
    pub async fn reset_password(
        &self,
        form: &ResetPasswordForm,
        redirect_to: Option<String>,
    ) -> Result<(), AuthError> {
        form.check(self.platform.now())?;
        self.auth
            .reset_password(form.email.trim(), redirect_to)
            .await?;
        self.emit(AuthEvent::PasswordRecovery);
        Ok(())
    }

    /// Always signs out locally, even when the provider call fails
    pub async fn sign_out(&self) {
        let Some(session) = self.current_session() else {
            return;
        };
        if let Err(e) = self.auth.sign_out(&session.access_token).await {
            tracing::warn!(error = %e, "Provider sign-out failed");
        }
        self.set_session(None);
        tracing::info!("Signed out");
        self.emit(AuthEvent::SignedOut);
    }

    /// Re-read the user from the provider and keep the session in sync
    pub async fn refresh_user(&self) -> Result<AuthUser, AuthError> {
        let session = self
            .current_session()
            .ok_or_else(|| AuthError::session_missing(self.platform.now()))?;
        let user = self.auth.get_user(&session.access_token).await?;

        if user != session.user {
            self.set_session(Some(AuthSession {
                user: user.clone(),
                ..session
            }));
            self.emit(AuthEvent::UserUpdated(user.clone()));
        }
        Ok(user)
    }

    /// Restore the stored session, then pick up profile edits made elsewhere
    pub async fn restore(&self) -> Option<AuthSession> {
        let restored = self.initialize()?;
        match self.refresh_user().await {
            Ok(_) => self.current_session(),
            Err(e) => {
                tracing::warn!(error = %e, "Could not refresh the restored user");
                Some(restored)
            }
        }
    }

    /// Name for the navbar
    pub async fn display_name(&self) -> Option<String> {
        let session = self.current_session()?;
        Some(
            self.profiles
                .display_name(&session.user, Some(session.access_token))
                .await,
        )
    }
}

impl SessionSource for AuthService {
    fn access_token(&self) -> Option<String> {
        self.current_session().map(|s| s.access_token)
    }

    fn current_user(&self) -> Option<AuthUser> {
        self.current_session().map(|s| s.user)
    }
}
