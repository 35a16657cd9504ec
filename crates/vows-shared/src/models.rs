//! Row models exchanged with the remote data provider.
//!
//! Field names match the remote tables' snake_case columns so every struct
//! serializes directly into a request body and back out of a response row.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Attendance status
// ---------------------------------------------------------------------------

/// A guest's attendance bucket.
///
/// The remote column is nullable text.  Classification is exhaustive: the
/// two known strings map to their bucket and everything else (`NULL`, an
/// empty string, a typo) falls into [`AttendanceStatus::Pending`].  A row
/// is never dropped for carrying an unrecognised status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub enum AttendanceStatus {
    Attending,
    NotAttending,
    #[default]
    Pending,
}

impl From<Option<String>> for AttendanceStatus {
    fn from(raw: Option<String>) -> Self {
        match raw.as_deref() {
            Some("attending") => Self::Attending,
            Some("not attending") => Self::NotAttending,
            _ => Self::Pending,
        }
    }
}

impl From<AttendanceStatus> for Option<String> {
    fn from(status: AttendanceStatus) -> Self {
        match status {
            AttendanceStatus::Attending => Some("attending".to_string()),
            AttendanceStatus::NotAttending => Some("not attending".to_string()),
            AttendanceStatus::Pending => None,
        }
    }
}

impl std::fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Attending => "attending",
            Self::NotAttending => "not attending",
            Self::Pending => "pending",
        };
        write!(f, "{label}")
    }
}

// ---------------------------------------------------------------------------
// Response (rsvp_responses)
// ---------------------------------------------------------------------------

/// One guest's RSVP submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Response {
    /// Server-assigned row identity.
    pub id: Uuid,
    /// Guest display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Attendance bucket; absent on the wire until the guest (or an admin)
    /// sets it.
    #[serde(default)]
    pub attendance_status: AttendanceStatus,
    /// Total number of people in the party, the guest included.
    pub party_size: u32,
    /// Optional free-text dietary note.
    pub dietary_restrictions: Option<String>,
    /// Server-assigned creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a new RSVP; the server assigns `id` and `created_at`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewResponse {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub attendance_status: AttendanceStatus,
    pub party_size: u32,
    pub dietary_restrictions: Option<String>,
}

// ---------------------------------------------------------------------------
// Site settings (site_settings, singleton)
// ---------------------------------------------------------------------------

/// The singleton site-configuration record, keyed by a fixed identifier.
///
/// Mutated via whole-record upsert on every change; partial patches only
/// exist in memory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SiteSettings {
    /// Fixed row id (`"main"`).
    pub id: String,

    // Free-text content
    pub couple_names: String,
    pub subtitle: String,
    pub wedding_date: String,
    pub invitation_text: String,
    pub location: String,
    pub itinerary_content: String,
    pub accommodation_content: String,
    pub gift_registry_content: String,
    pub itinerary_message: String,
    pub accommodation_message: String,
    pub gift_registry_message: String,
    pub contact_phone: String,
    pub contact_email: String,

    // Section visibility flags
    pub show_countdown: bool,
    pub show_rsvp: bool,
    pub show_guest_book: bool,
    pub show_photo_gallery: bool,
    pub show_itinerary: bool,
    pub show_gift_registry: bool,
    pub show_accommodation: bool,
    pub show_contact: bool,
    pub show_background_image: bool,

    // Ordered image lists plus the currently selected background
    pub gallery_images: Vec<String>,
    pub background_images: Vec<String>,
    pub selected_background: String,

    /// Stamped on every save.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            id: crate::constants::SETTINGS_ROW_ID.to_string(),
            couple_names: "Kenia y Gustavo".to_string(),
            subtitle: "NOS CASAMOS".to_string(),
            wedding_date: "21 de noviembre, 2025".to_string(),
            invitation_text: "Te invitamos a celebrar con nosotros".to_string(),
            location: "TBD".to_string(),
            itinerary_content: String::new(),
            accommodation_content: String::new(),
            gift_registry_content: String::new(),
            itinerary_message: String::new(),
            accommodation_message: String::new(),
            gift_registry_message: String::new(),
            contact_phone: "(555) 123-4567".to_string(),
            contact_email: "info@wedding.com".to_string(),
            show_countdown: true,
            show_rsvp: true,
            show_guest_book: true,
            show_photo_gallery: true,
            show_itinerary: true,
            show_gift_registry: true,
            show_accommodation: true,
            show_contact: true,
            show_background_image: true,
            gallery_images: Vec::new(),
            background_images: Vec::new(),
            selected_background: String::new(),
            updated_at: None,
        }
    }
}

// ---------------------------------------------------------------------------
// FAQ (faqs)
// ---------------------------------------------------------------------------

/// One question/answer pair on the public site.
///
/// `sort_order` is the display ordering key: dense, non-negative and kept
/// contiguous with display order after any reorder.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Faq {
    pub id: Uuid,
    pub question: String,
    /// Rich-text HTML produced by an external editor widget.
    pub answer: String,
    pub sort_order: i64,
    pub is_enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Insert payload for a new FAQ entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewFaq {
    pub question: String,
    pub answer: String,
    pub sort_order: i64,
    pub is_enabled: bool,
}

// ---------------------------------------------------------------------------
// Custom invite (custom_invites)
// ---------------------------------------------------------------------------

/// A guest-specific shareable invite with its own party-size limit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CustomInvite {
    pub id: Uuid,
    /// Short uppercase-alphanumeric code embedded in the shareable URL.
    pub invite_code: String,
    pub guest_name: String,
    pub guest_email: Option<String>,
    pub max_party_size: u32,
    pub custom_message: Option<String>,
    pub is_active: bool,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a new custom invite; `is_active` defaults server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCustomInvite {
    pub invite_code: String,
    pub guest_name: String,
    pub guest_email: Option<String>,
    pub max_party_size: u32,
    pub custom_message: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
}

// ---------------------------------------------------------------------------
// Guest book (local only)
// ---------------------------------------------------------------------------

/// A guest-book message.  Persisted only in the device-local cache, never
/// in the remote store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GuestBookEntry {
    pub id: Uuid,
    pub name: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_statuses_classify() {
        assert_eq!(
            AttendanceStatus::from(Some("attending".to_string())),
            AttendanceStatus::Attending
        );
        assert_eq!(
            AttendanceStatus::from(Some("not attending".to_string())),
            AttendanceStatus::NotAttending
        );
    }

    #[test]
    fn unknown_and_missing_statuses_fall_into_pending() {
        assert_eq!(AttendanceStatus::from(None), AttendanceStatus::Pending);
        assert_eq!(
            AttendanceStatus::from(Some("maybe".to_string())),
            AttendanceStatus::Pending
        );
        assert_eq!(
            AttendanceStatus::from(Some(String::new())),
            AttendanceStatus::Pending
        );
    }

    #[test]
    fn response_deserializes_null_status_as_pending() {
        let json = serde_json::json!({
            "id": "7f7e2f3a-3f2f-4d55-9d9f-0a5f8c1c2b3d",
            "name": "Jane Smith",
            "email": "jane@example.com",
            "attendance_status": null,
            "party_size": 1,
            "dietary_restrictions": null,
            "created_at": "2025-06-01T12:00:00Z",
        });

        let response: Response = serde_json::from_value(json).expect("should deserialize");
        assert_eq!(response.attendance_status, AttendanceStatus::Pending);
    }

    #[test]
    fn response_deserializes_without_status_field() {
        let json = serde_json::json!({
            "id": "7f7e2f3a-3f2f-4d55-9d9f-0a5f8c1c2b3d",
            "name": "Jane Smith",
            "email": "jane@example.com",
            "party_size": 2,
            "dietary_restrictions": "Vegetarian",
            "created_at": "2025-06-01T12:00:00Z",
        });

        let response: Response = serde_json::from_value(json).expect("should deserialize");
        assert_eq!(response.attendance_status, AttendanceStatus::Pending);
        assert_eq!(response.party_size, 2);
    }

    #[test]
    fn status_serializes_back_to_wire_strings() {
        let value = serde_json::to_value(AttendanceStatus::Attending).unwrap();
        assert_eq!(value, serde_json::json!("attending"));

        let value = serde_json::to_value(AttendanceStatus::NotAttending).unwrap();
        assert_eq!(value, serde_json::json!("not attending"));

        let value = serde_json::to_value(AttendanceStatus::Pending).unwrap();
        assert_eq!(value, serde_json::Value::Null);
    }

    #[test]
    fn default_settings_keep_every_section_visible() {
        let settings = SiteSettings::default();
        assert_eq!(settings.id, "main");
        assert!(settings.show_rsvp);
        assert!(settings.show_guest_book);
        assert!(settings.show_background_image);
        assert!(settings.gallery_images.is_empty());
    }
}
