//! The singleton site-settings row.
//!
//! One record keyed by a fixed identifier; every change is a whole-record
//! upsert, so concurrent administrators race with last-write-wins.

use vows_shared::constants::SETTINGS_ROW_ID;
use vows_shared::models::SiteSettings;

use crate::client::{ProviderClient, Query};
use crate::error::Result;

const TABLE: &str = "site_settings";

impl ProviderClient {
    /// Fetch the settings record; `Ok(None)` when none has been seeded yet.
    pub async fn fetch_settings(&self) -> Result<Option<SiteSettings>> {
        self.select_one(TABLE, Query::new().eq("id", SETTINGS_ROW_ID))
            .await
    }

    /// Write the whole settings record, creating it when missing.
    pub async fn upsert_settings(&self, settings: &SiteSettings) -> Result<()> {
        self.upsert_row(TABLE, settings).await?;
        tracing::debug!("Site settings saved");
        Ok(())
    }
}
