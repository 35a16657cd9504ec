//! Invite codes and shareable links.
//!
//! Codes are short, shareable and only roughly unique: six characters from
//! a 36-symbol alphabet drawn from a thread-local PRNG.  No collision
//! check is made at generation time; the insert path surfaces a conflict
//! from the remote store as an ordinary recoverable error.

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::constants::{INVITE_CODE_ALPHABET, INVITE_CODE_LENGTH, INVITE_PATH_SEGMENT};
use crate::models::CustomInvite;

/// Draw a fresh invite code (uppercase alphanumeric, fixed length).
pub fn generate_invite_code() -> String {
    let mut rng = rand::thread_rng();
    (0..INVITE_CODE_LENGTH)
        .map(|_| {
            let idx = rng.gen_range(0..INVITE_CODE_ALPHABET.len());
            INVITE_CODE_ALPHABET[idx] as char
        })
        .collect()
}

/// Build the shareable URL for an invite code: `<origin>/rsvp/<code>`.
///
/// Pure string concatenation; tolerates a trailing slash on the origin.
pub fn build_invite_url(origin: &str, code: &str) -> String {
    format!(
        "{}/{}/{}",
        origin.trim_end_matches('/'),
        INVITE_PATH_SEGMENT,
        code
    )
}

impl CustomInvite {
    /// Whether the invite can still be used: it must be active and, when an
    /// expiry is set, not past it.
    pub fn is_redeemable(&self, now: DateTime<Utc>) -> bool {
        if !self.is_active {
            return false;
        }
        match self.expires_at {
            Some(expires_at) => now <= expires_at,
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use uuid::Uuid;

    fn invite(is_active: bool, expires_at: Option<DateTime<Utc>>) -> CustomInvite {
        CustomInvite {
            id: Uuid::new_v4(),
            invite_code: generate_invite_code(),
            guest_name: "Ana".to_string(),
            guest_email: None,
            max_party_size: 2,
            custom_message: None,
            is_active,
            expires_at,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn code_has_fixed_length_and_alphabet() {
        for _ in 0..100 {
            let code = generate_invite_code();
            assert_eq!(code.len(), INVITE_CODE_LENGTH);
            assert!(code
                .bytes()
                .all(|b| INVITE_CODE_ALPHABET.contains(&b)));
        }
    }

    #[test]
    fn codes_vary_across_draws() {
        // 100 draws from a 36^6 space colliding into a single value would
        // point at a broken RNG, not bad luck.
        let mut codes: Vec<String> = (0..100).map(|_| generate_invite_code()).collect();
        codes.sort();
        codes.dedup();
        assert!(codes.len() > 1);
    }

    #[test]
    fn invite_url_is_origin_slash_rsvp_slash_code() {
        assert_eq!(
            build_invite_url("https://example.com", "AB12CD"),
            "https://example.com/rsvp/AB12CD"
        );
    }

    #[test]
    fn invite_url_tolerates_trailing_slash() {
        assert_eq!(
            build_invite_url("https://example.com/", "AB12CD"),
            "https://example.com/rsvp/AB12CD"
        );
    }

    #[test]
    fn active_unexpired_invite_is_redeemable() {
        let now = Utc::now();
        assert!(invite(true, None).is_redeemable(now));
        assert!(invite(true, Some(now + Duration::days(1))).is_redeemable(now));
    }

    #[test]
    fn inactive_or_expired_invite_is_not_redeemable() {
        let now = Utc::now();
        assert!(!invite(false, None).is_redeemable(now));
        assert!(!invite(true, Some(now - Duration::seconds(1))).is_redeemable(now));
    }
}
