//! Signed-in user and the queue of mocked backend requests.
//!
//! There is no backend. Sign-in, sign-up and booking confirmation are queued
//! as [`PendingRequest`]s and resolved one per timer tick, which is how the
//! plugin imitates network latency.

use serde::{Deserialize, Serialize};

/// Id given to every mock user.
pub const MOCK_USER_ID: &str = "1";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
}

/// Authentication state owned by `AppState`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    SignedOut,
    SignedIn(User),
}

impl Session {
    /// Signs in with any email; the display name is the part before `@`.
    pub fn sign_in(&mut self, email: &str) {
        let name = email.split('@').next().unwrap_or(email).to_string();
        tracing::debug!(email = %email, "signed in");
        *self = Self::SignedIn(User {
            id: MOCK_USER_ID.to_string(),
            email: email.to_string(),
            name,
        });
    }

    pub fn sign_up(&mut self, email: &str, name: &str) {
        tracing::debug!(email = %email, "signed up");
        *self = Self::SignedIn(User {
            id: MOCK_USER_ID.to_string(),
            email: email.to_string(),
            name: name.to_string(),
        });
    }

    pub fn sign_out(&mut self) {
        tracing::debug!("signed out");
        *self = Self::SignedOut;
    }

    #[must_use]
    pub const fn user(&self) -> Option<&User> {
        match self {
            Self::SignedIn(user) => Some(user),
            Self::SignedOut => None,
        }
    }

    #[must_use]
    pub const fn is_signed_in(&self) -> bool {
        matches!(self, Self::SignedIn(_))
    }
}

/// A mocked call waiting for its timer tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingRequest {
    SignIn {
        email: String,
    },
    SignUp {
        email: String,
        name: String,
    },
    ConfirmBooking {
        /// e.g. `"2023 Tesla Model 3"`
        car: String,
        vendor: String,
        price_per_day: u32,
    },
}

impl PendingRequest {
    /// Status line shown while the request is outstanding.
    #[must_use]
    pub const fn status(&self) -> &'static str {
        match self {
            Self::SignIn { .. } => "Signing in...",
            Self::SignUp { .. } => "Creating account...",
            Self::ConfirmBooking { .. } => "Confirming booking...",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_in_derives_name_from_email() {
        let mut session = Session::default();
        assert!(!session.is_signed_in());

        session.sign_in("ada@example.com");
        let user = session.user().unwrap();
        assert_eq!(user.id, "1");
        assert_eq!(user.name, "ada");
        assert_eq!(user.email, "ada@example.com");
    }

    #[test]
    fn sign_in_without_at_uses_whole_email() {
        let mut session = Session::default();
        session.sign_in("ada");
        assert_eq!(session.user().unwrap().name, "ada");
    }

    #[test]
    fn sign_up_then_sign_out() {
        let mut session = Session::default();
        session.sign_up("grace@example.com", "Grace Hopper");
        assert_eq!(session.user().unwrap().name, "Grace Hopper");
        session.sign_out();
        assert_eq!(session, Session::SignedOut);
    }
}
