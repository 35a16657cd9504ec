//! # vows-store
//!
//! Device-local persistence.  The only thing stored outside the remote
//! provider is the guest-book message cache: a JSON-serialized list kept
//! in a single-row SQLite table, read on load and rewritten on every new
//! message.  It is scoped to one device and never synced.

pub mod database;
pub mod guestbook;

mod error;

pub use database::Database;
pub use error::StoreError;
