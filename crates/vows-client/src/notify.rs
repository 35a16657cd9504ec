//! Transient user-visible notifications.
//!
//! Managers push [`Notice`]s over an unbounded channel; the UI drains the
//! receiver and shows each as a short-lived toast.  When nobody holds the
//! receiver the notice is logged instead of lost silently.

use serde::Serialize;
use tokio::sync::mpsc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    Success,
    Error,
}

/// One short-lived notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub severity: Severity,
    pub title: String,
    pub body: String,
}

/// Sender half handed to every manager.
#[derive(Clone)]
pub struct Notifier {
    tx: mpsc::UnboundedSender<Notice>,
}

impl Notifier {
    /// Create a notifier and the receiver the UI drains.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Notice>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    pub fn success(&self, title: &str, body: &str) {
        self.emit(Notice {
            severity: Severity::Success,
            title: title.to_string(),
            body: body.to_string(),
        });
    }

    pub fn error(&self, title: &str, body: &str) {
        self.emit(Notice {
            severity: Severity::Error,
            title: title.to_string(),
            body: body.to_string(),
        });
    }

    fn emit(&self, notice: Notice) {
        if let Err(e) = self.tx.send(notice) {
            let notice = e.0;
            match notice.severity {
                Severity::Success => tracing::info!(title = %notice.title, "{}", notice.body),
                Severity::Error => tracing::warn!(title = %notice.title, "{}", notice.body),
            }
        }
    }
}
