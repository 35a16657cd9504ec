//! CRUD for custom invite rows.

use uuid::Uuid;

use vows_shared::models::{CustomInvite, NewCustomInvite};

use crate::client::{ProviderClient, Query};
use crate::error::Result;

const TABLE: &str = "custom_invites";

impl ProviderClient {
    /// List every invite, newest first.
    pub async fn list_invites(&self) -> Result<Vec<CustomInvite>> {
        self.select_rows(TABLE, Query::new().order_desc("created_at"))
            .await
    }

    /// Insert a new invite and return the created row.
    pub async fn insert_invite(&self, new: &NewCustomInvite) -> Result<CustomInvite> {
        let created = self.insert_row::<CustomInvite, _>(TABLE, new).await?;
        tracing::info!(id = %created.id, code = %created.invite_code, "Invite created");
        Ok(created)
    }

    /// Look an invite up by its shareable code.  Codes are stored
    /// uppercase; the lookup normalises before filtering.
    pub async fn find_invite_by_code(&self, code: &str) -> Result<Option<CustomInvite>> {
        let normalized = code.trim().to_uppercase();
        self.select_one(TABLE, Query::new().eq("invite_code", normalized))
            .await
    }

    /// Flip an invite's active flag.
    pub async fn set_invite_active(&self, id: Uuid, is_active: bool) -> Result<()> {
        self.update_rows(
            TABLE,
            Query::new().eq("id", id),
            &serde_json::json!({ "is_active": is_active }),
        )
        .await?;
        tracing::debug!(id = %id, is_active, "Invite status updated");
        Ok(())
    }

    /// Permanently delete an invite.
    pub async fn delete_invite(&self, id: Uuid) -> Result<()> {
        self.delete_rows(TABLE, Query::new().eq("id", id)).await?;
        tracing::debug!(id = %id, "Invite deleted");
        Ok(())
    }
}
