//! Guest management: the admin dashboard's view of the RSVP responses.
//!
//! Edits and deletes are optimistic.  Every mutating operation captures a
//! snapshot of the whole list, applies the change locally, issues the
//! remote write, and restores the snapshot wholesale when the write fails.
//! Rollback is never field-level; the snapshot is the unit of consistency.
//!
//! Overlapping edits to different rows are independent (each holds its own
//! snapshot).  Overlapping edits to the same row are not coordinated:
//! last-write-wins locally, and a slow failing write can roll back a newer
//! optimistic edit.

use std::sync::Arc;

use uuid::Uuid;

use vows_shared::models::Response;
use vows_shared::RsvpSummary;

use crate::error::ClientError;
use crate::notify::Notifier;
use crate::remote::ResponsesRemote;

pub struct GuestManager<R: ResponsesRemote> {
    remote: Arc<R>,
    notifier: Notifier,
    responses: Vec<Response>,
}

impl<R: ResponsesRemote> GuestManager<R> {
    pub fn new(remote: Arc<R>, notifier: Notifier) -> Self {
        Self {
            remote,
            notifier,
            responses: Vec::new(),
        }
    }

    /// The cached response list, newest first.
    pub fn responses(&self) -> &[Response] {
        &self.responses
    }

    /// Re-fetch the full response list from the remote store.
    pub async fn refresh(&mut self) -> Result<(), ClientError> {
        match self.remote.list().await {
            Ok(rows) => {
                tracing::debug!(count = rows.len(), "RSVP responses loaded");
                self.responses = rows;
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load RSVP responses");
                Err(e.into())
            }
        }
    }

    /// Replace a response with a fully-formed replacement row.
    ///
    /// The local list is updated immediately; a failed remote write
    /// restores the pre-edit list exactly and emits one error notice.
    pub async fn edit(&mut self, replacement: Response) -> Result<(), ClientError> {
        let snapshot = self.responses.clone();

        if let Some(slot) = self.responses.iter_mut().find(|r| r.id == replacement.id) {
            *slot = replacement.clone();
        }

        match self.remote.update(&replacement).await {
            Ok(()) => {
                self.notifier
                    .success("Success", "RSVP response updated successfully.");
                Ok(())
            }
            Err(e) => {
                tracing::error!(id = %replacement.id, error = %e, "Failed to update RSVP response");
                self.responses = snapshot;
                self.notifier.error(
                    "Error",
                    "Failed to update RSVP response. Please try again.",
                );
                Err(e.into())
            }
        }
    }

    /// Remove a response by identity.
    ///
    /// Callers confirm the destructive action before invoking this; there
    /// is no further confirmation here.
    pub async fn delete(&mut self, id: Uuid) -> Result<(), ClientError> {
        let snapshot = self.responses.clone();

        self.responses.retain(|r| r.id != id);

        match self.remote.delete(id).await {
            Ok(()) => {
                self.notifier
                    .success("Success", "RSVP response deleted successfully.");
                Ok(())
            }
            Err(e) => {
                tracing::error!(id = %id, error = %e, "Failed to delete RSVP response");
                self.responses = snapshot;
                self.notifier.error(
                    "Error",
                    "Failed to delete RSVP response. Please try again.",
                );
                Err(e.into())
            }
        }
    }

    /// Case-insensitive filter over name, email, status and dietary note.
    pub fn search(&self, term: &str) -> Vec<&Response> {
        let needle = term.to_lowercase();
        self.responses
            .iter()
            .filter(|r| {
                r.name.to_lowercase().contains(&needle)
                    || r.email.to_lowercase().contains(&needle)
                    || r.attendance_status.to_string().contains(&needle)
                    || r.dietary_restrictions
                        .as_deref()
                        .is_some_and(|d| d.to_lowercase().contains(&needle))
            })
            .collect()
    }

    /// Dashboard counters over the current cache.
    pub fn summary(&self) -> RsvpSummary {
        RsvpSummary::collect(&self.responses)
    }

    /// Render the cached responses as CSV, header row first.
    pub fn export_csv(&self) -> String {
        let mut out = String::from(
            "Name,Email,Attendance Status,Party Size,Dietary Restrictions,Created At\n",
        );
        for r in &self.responses {
            out.push_str(&format!(
                "{},{},{},{},{},{}\n",
                csv_quote(&r.name),
                csv_quote(&r.email),
                csv_quote(&r.attendance_status.to_string()),
                r.party_size,
                csv_quote(r.dietary_restrictions.as_deref().unwrap_or("")),
                csv_quote(&r.created_at.to_rfc3339()),
            ));
        }
        out
    }

    /// Drop the cached list (used on sign-out).
    pub fn clear(&mut self) {
        self.responses.clear();
    }
}

/// Wrap a field in double quotes, doubling any embedded quote.
fn csv_quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}
