//! The visitor guest book.
//!
//! Messages live only in the device-local cache: the list is read once on
//! load and rewritten wholesale on every new message, so entries are
//! invisible to other devices and to the administrator.

use chrono::Utc;
use uuid::Uuid;

use vows_shared::models::GuestBookEntry;
use vows_shared::ValidationError;

use vows_store::Database;

use crate::error::ClientError;

pub struct GuestBook {
    db: Database,
    entries: Vec<GuestBookEntry>,
}

impl GuestBook {
    /// Open the guest book over a local database, reading the cached list.
    pub fn load(db: Database) -> Result<Self, ClientError> {
        let entries = db.load_guestbook()?;
        tracing::debug!(count = entries.len(), "Guest book loaded");
        Ok(Self { db, entries })
    }

    /// Messages, newest first.
    pub fn entries(&self) -> &[GuestBookEntry] {
        &self.entries
    }

    /// Leave a message.  Both fields are required; the new entry is
    /// prepended and the whole list rewritten.  A failed write takes the
    /// prepended entry back out so the cache and the list agree.
    pub fn sign(&mut self, name: &str, message: &str) -> Result<&GuestBookEntry, ClientError> {
        let name = name.trim();
        let message = message.trim();
        if name.is_empty() {
            return Err(ValidationError::Required("name").into());
        }
        if message.is_empty() {
            return Err(ValidationError::Required("message").into());
        }

        let entry = GuestBookEntry {
            id: Uuid::new_v4(),
            name: name.to_string(),
            message: message.to_string(),
            created_at: Utc::now(),
        };

        self.entries.insert(0, entry);
        if let Err(e) = self.db.save_guestbook(&self.entries) {
            self.entries.remove(0);
            tracing::error!(error = %e, "Failed to save guest book");
            return Err(e.into());
        }

        tracing::info!(name = %name, "Guest book signed");
        Ok(&self.entries[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guest_book() -> (GuestBook, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::open_at(&dir.path().join("test.db")).unwrap();
        (GuestBook::load(db).unwrap(), dir)
    }

    #[test]
    fn sign_prepends_and_persists() {
        let (mut book, dir) = guest_book();

        book.sign("Ana", "¡Felicidades!").unwrap();
        book.sign("Luis", "Con cariño").unwrap();

        assert_eq!(book.entries().len(), 2);
        assert_eq!(book.entries()[0].name, "Luis");

        // A fresh load sees the same list.
        let db = Database::open_at(&dir.path().join("test.db")).unwrap();
        let reloaded = GuestBook::load(db).unwrap();
        assert_eq!(reloaded.entries(), book.entries());
    }

    #[test]
    fn empty_fields_are_rejected() {
        let (mut book, _dir) = guest_book();

        assert!(matches!(
            book.sign("  ", "hi"),
            Err(ClientError::Validation(ValidationError::Required("name")))
        ));
        assert!(matches!(
            book.sign("Ana", "  "),
            Err(ClientError::Validation(ValidationError::Required("message")))
        ));
        assert!(book.entries().is_empty());
    }

    #[test]
    fn whitespace_is_trimmed() {
        let (mut book, _dir) = guest_book();

        book.sign("  Ana  ", "  con amor  ").unwrap();
        assert_eq!(book.entries()[0].name, "Ana");
        assert_eq!(book.entries()[0].message, "con amor");
    }
}
