//! CRUD for FAQ rows.

use serde::Serialize;
use uuid::Uuid;

use vows_shared::models::{Faq, NewFaq};

use crate::client::{ProviderClient, Query};
use crate::error::Result;

const TABLE: &str = "faqs";

#[derive(Serialize)]
struct FaqPatch<'a> {
    question: &'a str,
    answer: &'a str,
    sort_order: i64,
    is_enabled: bool,
}

impl ProviderClient {
    /// List every FAQ in display order.
    pub async fn list_faqs(&self) -> Result<Vec<Faq>> {
        self.select_rows(TABLE, Query::new().order_asc("sort_order"))
            .await
    }

    /// Insert a new FAQ and return the created row.
    pub async fn insert_faq(&self, new: &NewFaq) -> Result<Faq> {
        let created = self.insert_row::<Faq, _>(TABLE, new).await?;
        tracing::info!(id = %created.id, "FAQ created");
        Ok(created)
    }

    /// Overwrite an FAQ's editable fields and return the stored row.
    pub async fn update_faq(&self, row: &Faq) -> Result<Faq> {
        let patch = FaqPatch {
            question: &row.question,
            answer: &row.answer,
            sort_order: row.sort_order,
            is_enabled: row.is_enabled,
        };
        let updated = self
            .update_rows_returning::<Faq, _>(TABLE, Query::new().eq("id", row.id), &patch)
            .await?;
        tracing::debug!(id = %row.id, "FAQ updated");
        Ok(updated)
    }

    /// Persist a single FAQ's display position.
    pub async fn set_faq_sort_order(&self, id: Uuid, sort_order: i64) -> Result<()> {
        self.update_rows(
            TABLE,
            Query::new().eq("id", id),
            &serde_json::json!({ "sort_order": sort_order }),
        )
        .await?;
        tracing::debug!(id = %id, sort_order, "FAQ position persisted");
        Ok(())
    }

    /// Flip a single FAQ's enabled flag.
    pub async fn set_faq_enabled(&self, id: Uuid, is_enabled: bool) -> Result<()> {
        self.update_rows(
            TABLE,
            Query::new().eq("id", id),
            &serde_json::json!({ "is_enabled": is_enabled }),
        )
        .await
    }

    /// Permanently delete an FAQ.
    pub async fn delete_faq(&self, id: Uuid) -> Result<()> {
        self.delete_rows(TABLE, Query::new().eq("id", id)).await?;
        tracing::debug!(id = %id, "FAQ deleted");
        Ok(())
    }
}
