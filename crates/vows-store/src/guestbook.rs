//! Guest-book message cache.
//!
//! The full message list is stored as one JSON document under a fixed key,
//! mirroring how the site keeps it in browser-local storage: read once on
//! load, rewritten wholesale on every new message.

use rusqlite::{params, OptionalExtension};

use vows_shared::models::GuestBookEntry;

use crate::database::Database;
use crate::error::Result;

/// Fixed cache key for the guest-book list.
const GUESTBOOK_KEY: &str = "guestbook-messages";

impl Database {
    /// Load the cached guest-book messages, newest first.  An absent or
    /// never-written cache is an empty list, not an error.
    pub fn load_guestbook(&self) -> Result<Vec<GuestBookEntry>> {
        let json: Option<String> = self
            .conn()
            .query_row(
                "SELECT json FROM kv_cache WHERE key = ?1",
                params![GUESTBOOK_KEY],
                |row| row.get(0),
            )
            .optional()?;

        match json {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(Vec::new()),
        }
    }

    /// Rewrite the entire guest-book list.
    pub fn save_guestbook(&self, entries: &[GuestBookEntry]) -> Result<()> {
        let json = serde_json::to_string(entries)?;
        self.conn().execute(
            "INSERT OR REPLACE INTO kv_cache (key, json) VALUES (?1, ?2)",
            params![GUESTBOOK_KEY, json],
        )?;
        tracing::debug!(count = entries.len(), "Guest book saved");
        Ok(())
    }
}
