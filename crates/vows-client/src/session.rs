//! Session wiring for the admin dashboard and the public site.
//!
//! One [`ProviderClient`] is shared by every manager; the auth boundary
//! lives here: settings are public data and load immediately, while FAQs,
//! invites and the guest dashboard only load once an administrator has
//! signed in.

use std::sync::Arc;

use tokio::sync::mpsc::UnboundedReceiver;

use vows_provider::{ProviderClient, ProviderConfig};
use vows_shared::ValidationError;

use crate::error::ClientError;
use crate::faq::FaqManager;
use crate::guests::GuestManager;
use crate::invites::InviteManager;
use crate::notify::{Notice, Notifier};
use crate::rsvp::RsvpService;
use crate::settings::SettingsManager;

pub struct AdminSession {
    provider: Arc<ProviderClient>,
    pub guests: GuestManager<ProviderClient>,
    pub faqs: FaqManager<ProviderClient>,
    pub invites: InviteManager<ProviderClient>,
    pub settings: SettingsManager<ProviderClient, ProviderClient>,
    pub rsvp: RsvpService<ProviderClient>,
}

impl AdminSession {
    /// Build a session against the configured provider.  The returned
    /// receiver carries every transient notice the managers emit.
    pub fn connect(config: ProviderConfig) -> (Self, UnboundedReceiver<Notice>) {
        let (notifier, rx) = Notifier::channel();
        let provider = Arc::new(ProviderClient::new(config));
        let site_origin = provider.site_origin().to_string();

        let session = Self {
            guests: GuestManager::new(provider.clone(), notifier.clone()),
            faqs: FaqManager::new(provider.clone(), notifier.clone()),
            invites: InviteManager::new(provider.clone(), notifier.clone(), site_origin),
            settings: SettingsManager::new(provider.clone(), provider.clone(), notifier.clone()),
            rsvp: RsvpService::new(provider.clone(), notifier),
            provider,
        };
        (session, rx)
    }

    /// Load the public data, and the admin data too when a session is
    /// already held.
    pub async fn bootstrap(&mut self) {
        self.settings.load().await;
        if self.is_authenticated() {
            self.load_admin_data().await;
        }
    }

    /// Sign in and load the admin-only data.  A rejected sign-in is
    /// returned for inline display on the login form, not as a notice.
    pub async fn sign_in(&mut self, email: &str, password: &str) -> Result<(), ClientError> {
        if email.trim().is_empty() {
            return Err(ValidationError::Required("email").into());
        }
        if password.is_empty() {
            return Err(ValidationError::Required("password").into());
        }

        self.provider.sign_in(email.trim(), password).await?;
        self.load_admin_data().await;
        Ok(())
    }

    /// Sign out and drop the admin-only caches.
    pub async fn sign_out(&mut self) {
        if let Err(e) = self.provider.sign_out().await {
            tracing::warn!(error = %e, "Sign-out failed");
        }
        self.guests.clear();
        self.faqs.clear();
        self.invites.clear();
    }

    pub fn is_authenticated(&self) -> bool {
        self.provider.is_authenticated()
    }

    pub fn current_user(&self) -> Option<vows_provider::auth::AuthUser> {
        self.provider.current_user()
    }

    async fn load_admin_data(&mut self) {
        // Each refresh logs its own failure; a partial load still leaves a
        // usable session and any section can be retried from the UI.
        if let Err(e) = self.faqs.refresh().await {
            tracing::warn!(error = %e, "FAQ load failed");
        }
        if let Err(e) = self.invites.refresh().await {
            tracing::warn!(error = %e, "Invite load failed");
        }
        if let Err(e) = self.guests.refresh().await {
            tracing::warn!(error = %e, "Guest dashboard load failed");
        }
    }
}
