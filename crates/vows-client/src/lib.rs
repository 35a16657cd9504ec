//! # vows-client
//!
//! Session-state layer between the UI and the remote data provider.  Each
//! entity gets a manager that owns its in-memory cache and implements the
//! site's consistency discipline: optimistic mutation with whole-list
//! snapshot rollback for the guest dashboard, per-item position writes for
//! FAQ reordering, non-optimistic inserts for invites, and fire-and-forget
//! whole-record upserts for the settings singleton.
//!
//! Managers never panic on a remote failure; they log it, emit one
//! user-visible notice and return the error.

pub mod faq;
pub mod guestbook;
pub mod guests;
pub mod invites;
pub mod notify;
pub mod remote;
pub mod rsvp;
pub mod session;
pub mod settings;

mod error;

pub use error::ClientError;
pub use notify::{Notice, Notifier, Severity};
pub use session::AdminSession;

use tracing_subscriber::{fmt, EnvFilter};

/// Install the global tracing subscriber.
///
/// Honours `RUST_LOG`; defaults to debug for this workspace's crates and
/// warn for everything else.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("vows_client=debug,vows_provider=debug,vows_store=info,warn")
    });

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}
