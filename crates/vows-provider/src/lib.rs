//! # vows-provider
//!
//! Client for the hosted backend-as-a-service the site delegates all
//! persistence to: row-level CRUD against four logical tables, email and
//! password authentication, and object storage with public URL retrieval.
//!
//! Every operation is a plain HTTP request/response; there is no custom
//! protocol.  The provider's server side is operated by the hosting
//! service and is not part of this workspace.

pub mod auth;
pub mod client;
pub mod config;
pub mod faqs;
pub mod invites;
pub mod responses;
pub mod settings;
pub mod storage;

mod error;

pub use client::{ProviderClient, Query};
pub use config::ProviderConfig;
pub use error::{ProviderError, Result};
