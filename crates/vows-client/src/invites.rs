//! Custom invite issuing and management.
//!
//! Unlike guest edits, invite operations are not optimistic: creation
//! prepends the server-returned row only on success, and status flips or
//! deletes touch the local list only after the remote call came back.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use vows_shared::constants::MAX_PARTY_SIZE;
use vows_shared::invite::{build_invite_url, generate_invite_code};
use vows_shared::models::{CustomInvite, NewCustomInvite};
use vows_shared::ValidationError;

use crate::error::ClientError;
use crate::notify::Notifier;
use crate::remote::InvitesRemote;
use crate::rsvp::is_valid_email;

/// Caller-supplied fields for a new invite.
#[derive(Debug, Clone)]
pub struct InviteDraft {
    pub guest_name: String,
    pub guest_email: Option<String>,
    pub max_party_size: u32,
    pub custom_message: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
}

pub struct InviteManager<R: InvitesRemote> {
    remote: Arc<R>,
    notifier: Notifier,
    site_origin: String,
    invites: Vec<CustomInvite>,
}

impl<R: InvitesRemote> InviteManager<R> {
    pub fn new(remote: Arc<R>, notifier: Notifier, site_origin: impl Into<String>) -> Self {
        Self {
            remote,
            notifier,
            site_origin: site_origin.into(),
            invites: Vec::new(),
        }
    }

    /// The cached invite list, newest first.
    pub fn invites(&self) -> &[CustomInvite] {
        &self.invites
    }

    /// Re-fetch the full invite list.
    pub async fn refresh(&mut self) -> Result<(), ClientError> {
        match self.remote.list().await {
            Ok(rows) => {
                tracing::debug!(count = rows.len(), "Invites loaded");
                self.invites = rows;
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load invites");
                Err(e.into())
            }
        }
    }

    /// Issue a new invite and return its code.
    ///
    /// A fresh code is drawn, the record inserted, and on success the
    /// server's row is prepended locally.  On failure local state is left
    /// untouched and one error notice fires.
    pub async fn create(&mut self, draft: InviteDraft) -> Result<String, ClientError> {
        let guest_name = draft.guest_name.trim();
        if guest_name.is_empty() {
            return Err(ValidationError::Required("guest name").into());
        }
        if draft.max_party_size < 1 || draft.max_party_size > MAX_PARTY_SIZE {
            return Err(ValidationError::PartySizeOutOfRange {
                size: draft.max_party_size,
                max: MAX_PARTY_SIZE,
            }
            .into());
        }
        if let Some(email) = draft.guest_email.as_deref() {
            if !email.is_empty() && !is_valid_email(email) {
                return Err(ValidationError::InvalidEmail.into());
            }
        }

        let new = NewCustomInvite {
            invite_code: generate_invite_code(),
            guest_name: guest_name.to_string(),
            guest_email: draft.guest_email.filter(|e| !e.is_empty()),
            max_party_size: draft.max_party_size,
            custom_message: draft.custom_message.filter(|m| !m.is_empty()),
            expires_at: draft.expires_at,
        };

        match self.remote.insert(&new).await {
            Ok(created) => {
                let code = created.invite_code.clone();
                self.invites.insert(0, created);
                self.notifier.success(
                    "Invite Created",
                    &format!("Custom invite for {guest_name} has been created."),
                );
                Ok(code)
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to create custom invite");
                self.notifier.error(
                    "Error",
                    "Failed to create custom invite. Please try again.",
                );
                Err(e.into())
            }
        }
    }

    /// Activate or deactivate an invite.
    pub async fn set_active(&mut self, id: Uuid, is_active: bool) -> Result<(), ClientError> {
        match self.remote.set_active(id, is_active).await {
            Ok(()) => {
                if let Some(slot) = self.invites.iter_mut().find(|i| i.id == id) {
                    slot.is_active = is_active;
                }
                let verb = if is_active { "activated" } else { "deactivated" };
                self.notifier
                    .success("Status Updated", &format!("Invite has been {verb}."));
                Ok(())
            }
            Err(e) => {
                tracing::error!(id = %id, error = %e, "Failed to update invite status");
                self.notifier
                    .error("Error", "Failed to update invite status.");
                Err(e.into())
            }
        }
    }

    /// Permanently delete an invite.
    pub async fn delete(&mut self, id: Uuid) -> Result<(), ClientError> {
        match self.remote.delete(id).await {
            Ok(()) => {
                self.invites.retain(|i| i.id != id);
                self.notifier.success(
                    "Invite Deleted",
                    "Custom invite has been permanently deleted.",
                );
                Ok(())
            }
            Err(e) => {
                tracing::error!(id = %id, error = %e, "Failed to delete invite");
                self.notifier.error("Error", "Failed to delete invite.");
                Err(e.into())
            }
        }
    }

    /// Resolve an invite code from the public `/rsvp/<code>` landing page.
    pub async fn lookup(&self, code: &str) -> Result<Option<CustomInvite>, ClientError> {
        self.remote.find_by_code(code).await.map_err(Into::into)
    }

    /// The shareable link for an invite code.
    pub fn invite_url(&self, code: &str) -> String {
        build_invite_url(&self.site_origin, code)
    }

    /// Drop the cached list (used on sign-out).
    pub fn clear(&mut self) {
        self.invites.clear();
    }
}
