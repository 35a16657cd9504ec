//! Public RSVP form submission.
//!
//! Validation runs before any remote call; a failed field blocks the
//! submission and is reported for inline display, never as a toast.

use std::sync::Arc;

use chrono::Utc;

use vows_shared::constants::MAX_PARTY_SIZE;
use vows_shared::models::{AttendanceStatus, CustomInvite, NewResponse, Response};
use vows_shared::ValidationError;

use crate::error::ClientError;
use crate::notify::Notifier;
use crate::remote::ResponsesRemote;

/// What the visitor typed into the RSVP form.
#[derive(Debug, Clone, Default)]
pub struct RsvpForm {
    pub name: String,
    pub email: String,
    pub attendance_status: AttendanceStatus,
    pub party_size: u32,
    pub dietary_restrictions: Option<String>,
}

impl RsvpForm {
    /// Check every field, reporting the first offending one.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::Required("name"));
        }
        if self.email.trim().is_empty() {
            return Err(ValidationError::Required("email"));
        }
        if !is_valid_email(self.email.trim()) {
            return Err(ValidationError::InvalidEmail);
        }
        if self.party_size < 1 || self.party_size > MAX_PARTY_SIZE {
            return Err(ValidationError::PartySizeOutOfRange {
                size: self.party_size,
                max: MAX_PARTY_SIZE,
            });
        }
        Ok(())
    }

    fn into_new_response(self) -> NewResponse {
        NewResponse {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            attendance_status: self.attendance_status,
            party_size: self.party_size,
            dietary_restrictions: self
                .dietary_restrictions
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty()),
        }
    }
}

/// Accepts RSVP submissions from the public site.
pub struct RsvpService<R: ResponsesRemote> {
    remote: Arc<R>,
    notifier: Notifier,
}

impl<R: ResponsesRemote> RsvpService<R> {
    pub fn new(remote: Arc<R>, notifier: Notifier) -> Self {
        Self { remote, notifier }
    }

    /// Validate and submit an RSVP, returning the created row.
    pub async fn submit(&self, form: RsvpForm) -> Result<Response, ClientError> {
        form.validate()?;

        match self.remote.insert(&form.into_new_response()).await {
            Ok(created) => {
                self.notifier.success(
                    "RSVP Submitted Successfully!",
                    "Thank you for your RSVP! We look forward to seeing you.",
                );
                Ok(created)
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to submit RSVP");
                self.notifier.error(
                    "Error Submitting RSVP",
                    "There was an error submitting your RSVP. Please try again.",
                );
                Err(e.into())
            }
        }
    }

    /// Submit through a custom invite link.
    ///
    /// The invite must still be redeemable and caps the party size at its
    /// own limit instead of the public form's.
    pub async fn submit_with_invite(
        &self,
        form: RsvpForm,
        invite: &CustomInvite,
    ) -> Result<Response, ClientError> {
        if !invite.is_redeemable(Utc::now()) {
            return Err(ValidationError::InviteNotRedeemable.into());
        }
        if form.party_size > invite.max_party_size {
            return Err(ValidationError::PartySizeOutOfRange {
                size: form.party_size,
                max: invite.max_party_size,
            }
            .into());
        }
        self.submit(form).await
    }
}

/// Minimal well-formedness check: one `@`, a non-empty local part, and a
/// dotted domain.
pub(crate) fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use uuid::Uuid;

    use vows_provider::ProviderError;

    #[derive(Default)]
    struct MockResponses {
        insert_calls: AtomicUsize,
        fail_inserts: AtomicBool,
    }

    #[async_trait]
    impl ResponsesRemote for MockResponses {
        async fn list(&self) -> vows_provider::Result<Vec<Response>> {
            Ok(Vec::new())
        }

        async fn insert(&self, new: &NewResponse) -> vows_provider::Result<Response> {
            self.insert_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_inserts.load(Ordering::SeqCst) {
                return Err(ProviderError::Api {
                    status: 500,
                    message: "boom".to_string(),
                });
            }
            Ok(Response {
                id: Uuid::new_v4(),
                name: new.name.clone(),
                email: new.email.clone(),
                attendance_status: new.attendance_status,
                party_size: new.party_size,
                dietary_restrictions: new.dietary_restrictions.clone(),
                created_at: Utc::now(),
            })
        }

        async fn update(&self, _row: &Response) -> vows_provider::Result<()> {
            unimplemented!("not used by RsvpService")
        }

        async fn delete(&self, _id: Uuid) -> vows_provider::Result<()> {
            unimplemented!("not used by RsvpService")
        }
    }

    fn form() -> RsvpForm {
        RsvpForm {
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            attendance_status: AttendanceStatus::Attending,
            party_size: 2,
            dietary_restrictions: Some("Vegetarian".to_string()),
        }
    }

    fn invite(max_party_size: u32, is_active: bool) -> CustomInvite {
        CustomInvite {
            id: Uuid::new_v4(),
            invite_code: "AB12CD".to_string(),
            guest_name: "John Doe".to_string(),
            guest_email: None,
            max_party_size,
            custom_message: None,
            is_active,
            expires_at: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn email_well_formedness() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last@sub.example.org"));
        assert!(!is_valid_email("no-at-sign"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("a@nodot"));
        assert!(!is_valid_email("a@.com"));
        assert!(!is_valid_email("a@com."));
    }

    #[test]
    fn validation_blocks_bad_fields() {
        let mut f = form();
        f.name = " ".to_string();
        assert_eq!(f.validate(), Err(ValidationError::Required("name")));

        let mut f = form();
        f.email = "nope".to_string();
        assert_eq!(f.validate(), Err(ValidationError::InvalidEmail));

        let mut f = form();
        f.party_size = 0;
        assert!(matches!(
            f.validate(),
            Err(ValidationError::PartySizeOutOfRange { .. })
        ));

        let mut f = form();
        f.party_size = MAX_PARTY_SIZE + 1;
        assert!(matches!(
            f.validate(),
            Err(ValidationError::PartySizeOutOfRange { .. })
        ));
    }

    #[tokio::test]
    async fn invalid_form_never_reaches_the_remote() {
        let (notifier, _rx) = Notifier::channel();
        let service = RsvpService::new(Arc::new(MockResponses::default()), notifier);

        let mut bad = form();
        bad.email = "nope".to_string();
        assert!(service.submit(bad).await.is_err());
        assert_eq!(service.remote.insert_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn successful_submission_notifies_once() {
        let (notifier, mut rx) = Notifier::channel();
        let service = RsvpService::new(Arc::new(MockResponses::default()), notifier);

        let created = service.submit(form()).await.unwrap();
        assert_eq!(created.name, "John Doe");

        let notice = rx.try_recv().unwrap();
        assert_eq!(notice.severity, crate::Severity::Success);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn failed_submission_surfaces_one_error_notice() {
        let (notifier, mut rx) = Notifier::channel();
        let remote = MockResponses::default();
        remote.fail_inserts.store(true, Ordering::SeqCst);
        let service = RsvpService::new(Arc::new(remote), notifier);

        assert!(service.submit(form()).await.is_err());

        let notice = rx.try_recv().unwrap();
        assert_eq!(notice.severity, crate::Severity::Error);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn invite_submission_respects_the_invite_cap() {
        let (notifier, _rx) = Notifier::channel();
        let service = RsvpService::new(Arc::new(MockResponses::default()), notifier);

        let mut f = form();
        f.party_size = 5;
        let result = service.submit_with_invite(f, &invite(4, true)).await;
        assert!(matches!(
            result,
            Err(ClientError::Validation(
                ValidationError::PartySizeOutOfRange { size: 5, max: 4 }
            ))
        ));
    }

    #[tokio::test]
    async fn inactive_invite_is_rejected() {
        let (notifier, _rx) = Notifier::channel();
        let service = RsvpService::new(Arc::new(MockResponses::default()), notifier);

        let result = service.submit_with_invite(form(), &invite(4, false)).await;
        assert!(matches!(
            result,
            Err(ClientError::Validation(ValidationError::InviteNotRedeemable))
        ));
        assert_eq!(service.remote.insert_calls.load(Ordering::SeqCst), 0);
    }
}
