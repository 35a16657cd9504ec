//! RSVP summary statistics.
//!
//! A pure fold over the full in-memory set of responses; callers re-run it
//! whenever the source set changes.  No I/O.

use serde::Serialize;

use crate::models::{AttendanceStatus, Response};

/// Aggregate counters shown on the admin dashboard.
///
/// Invariant: `attending + not_attending + pending == total` for every
/// input: classification is mutually exclusive and exhaustive, and a row
/// with an unrecognised or missing status counts as pending rather than
/// being dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RsvpSummary {
    pub total: u32,
    pub attending: u32,
    pub not_attending: u32,
    pub pending: u32,
    /// Sum of `party_size` across all rows regardless of status.
    pub total_party_size: u32,
    /// Sum of `max(party_size - 1, 0)`: only the extra members of parties
    /// larger than one.
    pub plus_ones: u32,
}

impl RsvpSummary {
    /// Fold the full response set into a summary.
    pub fn collect(responses: &[Response]) -> Self {
        responses.iter().fold(Self::default(), |mut acc, response| {
            acc.total += 1;
            match response.attendance_status {
                AttendanceStatus::Attending => acc.attending += 1,
                AttendanceStatus::NotAttending => acc.not_attending += 1,
                AttendanceStatus::Pending => acc.pending += 1,
            }
            acc.total_party_size += response.party_size;
            acc.plus_ones += response.party_size.saturating_sub(1);
            acc
        })
    }

    /// Share of guests who answered either way, in percent (0–100).
    /// Zero when there are no responses at all.
    pub fn response_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        f64::from(self.attending + self.not_attending) / f64::from(self.total) * 100.0
    }

    /// Share of guests attending, in percent (0–100).  Zero when there are
    /// no responses at all.
    pub fn attendance_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        f64::from(self.attending) / f64::from(self.total) * 100.0
    }

    /// Average number of plus-ones per attending RSVP.  Zero when nobody
    /// is attending.
    pub fn avg_plus_ones_per_attending(&self) -> f64 {
        if self.attending == 0 {
            return 0.0;
        }
        f64::from(self.plus_ones) / f64::from(self.attending)
    }
}
