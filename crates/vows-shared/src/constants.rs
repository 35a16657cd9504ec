/// Application name
pub const APP_NAME: &str = "Vows";

/// Characters an invite code is drawn from (uppercase alphanumerics)
pub const INVITE_CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Invite code length in characters
pub const INVITE_CODE_LENGTH: usize = 6;

/// Path segment of a shareable invite link: `<origin>/rsvp/<code>`
pub const INVITE_PATH_SEGMENT: &str = "rsvp";

/// Fixed identifier of the singleton site-settings row
pub const SETTINGS_ROW_ID: &str = "main";

/// Largest party a public RSVP form accepts
pub const MAX_PARTY_SIZE: u32 = 10;

/// Party-size limit pre-filled on a new custom invite
pub const DEFAULT_MAX_PARTY_SIZE: u32 = 2;

/// Storage bucket holding gallery and background images
pub const IMAGE_BUCKET: &str = "wedding-images";

/// Maximum image upload size in bytes (10 MiB)
pub const MAX_UPLOAD_SIZE: usize = 10 * 1024 * 1024;
