//! Email/password authentication against the provider's auth service.
//!
//! A successful sign-in stores the bearer session inside the client; every
//! subsequent table or storage request carries it so row-level access
//! rules apply to the administrator rather than the anonymous key.

use serde::{Deserialize, Serialize};

use crate::client::ProviderClient;
use crate::error::{ProviderError, Result};

/// The signed-in administrator as reported by the auth service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthUser {
    pub id: String,
    pub email: Option<String>,
}

/// Bearer session returned by a password grant.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthSession {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    pub user: AuthUser,
}

#[derive(Serialize)]
struct PasswordGrant<'a> {
    email: &'a str,
    password: &'a str,
}

impl ProviderClient {
    /// Sign in with email and password.  On success the session is kept
    /// for all later requests and the user is returned.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<AuthUser> {
        let url = format!("{}/auth/v1/token?grant_type=password", self.base_url());

        let response = self
            .authorize(self.http.post(&url))
            .json(&PasswordGrant { email, password })
            .send()
            .await?;

        if !response.status().is_success() {
            let err = Self::error_for(response).await;
            let message = match err {
                ProviderError::Api { message, .. } => message,
                other => other.to_string(),
            };
            return Err(ProviderError::AuthFailed(message));
        }

        let session: AuthSession = response
            .json()
            .await
            .map_err(|e| ProviderError::Decode(e.to_string()))?;
        let user = session.user.clone();

        if let Ok(mut guard) = self.session.write() {
            *guard = Some(session);
        }

        tracing::info!(email = %email, "Signed in");
        Ok(user)
    }

    /// Sign out and drop the stored session.  The local session is cleared
    /// even when the revocation request fails.
    pub async fn sign_out(&self) -> Result<()> {
        let url = format!("{}/auth/v1/logout", self.base_url());
        let result = self.authorize(self.http.post(&url)).send().await;

        if let Ok(mut guard) = self.session.write() {
            *guard = None;
        }

        match result {
            Ok(response) if !response.status().is_success() => {
                tracing::warn!(status = %response.status(), "Sign-out not acknowledged by provider");
            }
            Err(e) => {
                tracing::warn!(error = %e, "Sign-out request failed");
            }
            _ => tracing::info!("Signed out"),
        }
        Ok(())
    }

    /// Whether a session is currently held.
    pub fn is_authenticated(&self) -> bool {
        self.session
            .read()
            .map(|guard| guard.is_some())
            .unwrap_or(false)
    }

    /// The signed-in user, if any.
    pub fn current_user(&self) -> Option<AuthUser> {
        self.session
            .read()
            .ok()
            .and_then(|guard| guard.as_ref().map(|s| s.user.clone()))
    }
}
