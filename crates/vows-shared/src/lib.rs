//! # vows-shared
//!
//! Pure domain logic for the wedding site: the row models exchanged with
//! the remote data provider, attendance classification, the RSVP summary
//! fold, invite-code generation and validation errors.
//!
//! Nothing in this crate performs I/O.

pub mod constants;
pub mod invite;
pub mod models;
pub mod stats;

mod error;

pub use error::ValidationError;
pub use models::*;
pub use stats::RsvpSummary;
