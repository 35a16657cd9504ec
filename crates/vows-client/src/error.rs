use thiserror::Error;

use vows_provider::ProviderError;
use vows_shared::ValidationError;
use vows_store::StoreError;

/// Any failure a manager operation can surface to its caller.
///
/// Validation failures are raised before a remote call is attempted and
/// are meant for inline display next to the offending field; provider and
/// store failures have already been logged and turned into a notice by the
/// time the caller sees them.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}
