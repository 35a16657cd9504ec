use thiserror::Error;

/// Local validation failures, raised before any remote call is attempted.
///
/// These are shown inline next to the offending field; they never reach
/// the remote data provider.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Party size must be between 1 and {max}, got {size}")]
    PartySizeOutOfRange { size: u32, max: u32 },

    #[error("This invite is no longer active")]
    InviteNotRedeemable,
}
