//! Auth state management using Dioxus signals
//!
//! Mirrors `AuthService` for rendering. Updated only from the service's
//! event stream (see `AppRoot`).

use dioxus::prelude::*;
use tripmate_domain::{AuthEvent, AuthSession, AuthUser};

#[derive(Clone, Copy)]
pub struct AuthState {
    pub session: Signal<Option<AuthSession>>,
    /// Profile name for the navbar, loaded after sign-in
    pub display_name: Signal<Option<String>>,
    /// False until the stored session has been restored (or not)
    pub initialized: Signal<bool>,
    /// Set after a recovery e-mail was requested
    pub recovery_sent: Signal<bool>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            session: Signal::new(None),
            display_name: Signal::new(None),
            initialized: Signal::new(false),
            recovery_sent: Signal::new(false),
        }
    }

    pub fn user(&self) -> Option<AuthUser> {
        self.session.read().as_ref().map(|s| s.user.clone())
    }

    pub fn is_signed_in(&self) -> bool {
        self.session.read().is_some()
    }

    /// Name to greet the user with
    pub fn greeting_name(&self) -> Option<String> {
        self.display_name
            .read()
            .clone()
            .or_else(|| self.user().map(|u| u.display_name()))
    }

    /// Apply an auth event. Returns true when the profile name should be
    /// (re)loaded.
    pub fn apply(&mut self, event: AuthEvent) -> bool {
        match event {
            AuthEvent::InitialSession(session) => {
                let signed_in = session.is_some();
                self.session.set(session);
                self.initialized.set(true);
                signed_in
            }
            AuthEvent::SignedIn(session) => {
                self.session.set(Some(session));
                self.recovery_sent.set(false);
                true
            }
            AuthEvent::SignedOut => {
                self.session.set(None);
                self.display_name.set(None);
                false
            }
            AuthEvent::PasswordRecovery => {
                self.recovery_sent.set(true);
                false
            }
            AuthEvent::UserUpdated(user) => {
                let current = self.session.read().clone();
                if let Some(session) = current {
                    self.session.set(Some(AuthSession { user, ..session }));
                }
                true
            }
        }
    }

    pub fn set_display_name(&mut self, name: Option<String>) {
        self.display_name.set(name);
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to access the AuthState from context
pub fn use_auth_state() -> AuthState {
    use_context::<AuthState>()
}
