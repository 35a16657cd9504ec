//! CRUD for RSVP response rows.

use serde::Serialize;
use uuid::Uuid;

use vows_shared::models::{AttendanceStatus, NewResponse, Response};

use crate::client::{ProviderClient, Query};
use crate::error::Result;

const TABLE: &str = "rsvp_responses";

/// Editable subset of a response; server-assigned fields stay untouched.
#[derive(Serialize)]
struct ResponsePatch<'a> {
    name: &'a str,
    email: &'a str,
    attendance_status: AttendanceStatus,
    party_size: u32,
    dietary_restrictions: Option<&'a str>,
}

impl ProviderClient {
    /// List every response, newest first.
    pub async fn list_responses(&self) -> Result<Vec<Response>> {
        self.select_rows(TABLE, Query::new().order_desc("created_at"))
            .await
    }

    /// Insert a new RSVP and return the created row.
    pub async fn insert_response(&self, new: &NewResponse) -> Result<Response> {
        let created = self.insert_row::<Response, _>(TABLE, new).await?;
        tracing::info!(id = %created.id, name = %created.name, "RSVP inserted");
        Ok(created)
    }

    /// Overwrite the editable fields of an existing response.
    pub async fn update_response(&self, row: &Response) -> Result<()> {
        let patch = ResponsePatch {
            name: &row.name,
            email: &row.email,
            attendance_status: row.attendance_status,
            party_size: row.party_size,
            dietary_restrictions: row.dietary_restrictions.as_deref(),
        };
        self.update_rows(TABLE, Query::new().eq("id", row.id), &patch)
            .await?;
        tracing::debug!(id = %row.id, "RSVP updated");
        Ok(())
    }

    /// Permanently delete a response by identity.
    pub async fn delete_response(&self, id: Uuid) -> Result<()> {
        self.delete_rows(TABLE, Query::new().eq("id", id)).await?;
        tracing::debug!(id = %id, "RSVP deleted");
        Ok(())
    }
}
