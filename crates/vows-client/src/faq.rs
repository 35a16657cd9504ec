//! FAQ management and display ordering.
//!
//! `sort_order` is the display position: dense, zero-based and equal to
//! the element's index after every reorder.  The backing store offers no
//! transaction across rows, so a reorder persists each position as its own
//! write; positions already written stay written when a later one fails.

use std::sync::Arc;

use uuid::Uuid;

use vows_shared::models::{Faq, NewFaq};
use vows_shared::ValidationError;

use crate::error::ClientError;
use crate::notify::Notifier;
use crate::remote::FaqsRemote;

pub struct FaqManager<R: FaqsRemote> {
    remote: Arc<R>,
    notifier: Notifier,
    faqs: Vec<Faq>,
}

impl<R: FaqsRemote> FaqManager<R> {
    pub fn new(remote: Arc<R>, notifier: Notifier) -> Self {
        Self {
            remote,
            notifier,
            faqs: Vec::new(),
        }
    }

    /// The cached FAQ list in display order.
    pub fn faqs(&self) -> &[Faq] {
        &self.faqs
    }

    /// Re-fetch the full list, ordered by position.
    pub async fn refresh(&mut self) -> Result<(), ClientError> {
        match self.remote.list().await {
            Ok(rows) => {
                tracing::debug!(count = rows.len(), "FAQs loaded");
                self.faqs = rows;
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load FAQs");
                Err(e.into())
            }
        }
    }

    /// Create a new entry.  Not optimistic: the local list only changes
    /// once the server has returned the created row.
    pub async fn create(&mut self, new: NewFaq) -> Result<(), ClientError> {
        if new.question.trim().is_empty() {
            return Err(ValidationError::Required("question").into());
        }

        match self.remote.insert(&new).await {
            Ok(created) => {
                self.faqs.push(created);
                self.faqs.sort_by_key(|f| f.sort_order);
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to create FAQ");
                self.notifier
                    .error("Error", "Failed to create FAQ. Please try again.");
                Err(e.into())
            }
        }
    }

    /// Overwrite an entry's editable fields.
    pub async fn update(&mut self, row: Faq) -> Result<(), ClientError> {
        match self.remote.update(&row).await {
            Ok(updated) => {
                if let Some(slot) = self.faqs.iter_mut().find(|f| f.id == updated.id) {
                    *slot = updated;
                }
                self.faqs.sort_by_key(|f| f.sort_order);
                Ok(())
            }
            Err(e) => {
                tracing::error!(id = %row.id, error = %e, "Failed to update FAQ");
                self.notifier
                    .error("Error", "Failed to update FAQ. Please try again.");
                Err(e.into())
            }
        }
    }

    /// Flip an entry's enabled flag.
    pub async fn set_enabled(&mut self, id: Uuid, is_enabled: bool) -> Result<(), ClientError> {
        match self.remote.set_enabled(id, is_enabled).await {
            Ok(()) => {
                if let Some(slot) = self.faqs.iter_mut().find(|f| f.id == id) {
                    slot.is_enabled = is_enabled;
                }
                Ok(())
            }
            Err(e) => {
                tracing::error!(id = %id, error = %e, "Failed to toggle FAQ");
                self.notifier
                    .error("Error", "Failed to update FAQ. Please try again.");
                Err(e.into())
            }
        }
    }

    /// Permanently delete an entry.
    pub async fn delete(&mut self, id: Uuid) -> Result<(), ClientError> {
        match self.remote.delete(id).await {
            Ok(()) => {
                self.faqs.retain(|f| f.id != id);
                Ok(())
            }
            Err(e) => {
                tracing::error!(id = %id, error = %e, "Failed to delete FAQ");
                self.notifier
                    .error("Error", "Failed to delete FAQ. Please try again.");
                Err(e.into())
            }
        }
    }

    /// Persist a new total order.
    ///
    /// Each element's position becomes its index in `new_order` and every
    /// position is persisted as an individual write.  All writes are
    /// attempted even when one fails; the first failure is surfaced
    /// afterwards and positions already written are not rolled back.  The
    /// local list is replaced once all writes have been issued, so the
    /// display reflects the order the user chose; a later `refresh`
    /// reconciles with whatever subset actually persisted.
    pub async fn reorder(&mut self, new_order: Vec<Faq>) -> Result<(), ClientError> {
        let mut repositioned = new_order;
        for (index, faq) in repositioned.iter_mut().enumerate() {
            faq.sort_order = index as i64;
        }

        let mut first_error = None;
        for faq in &repositioned {
            if let Err(e) = self.remote.set_sort_order(faq.id, faq.sort_order).await {
                tracing::error!(id = %faq.id, sort_order = faq.sort_order, error = %e,
                    "Failed to persist FAQ position");
                if first_error.is_none() {
                    first_error = Some(e);
                }
            }
        }

        self.faqs = repositioned;

        match first_error {
            None => Ok(()),
            Some(e) => {
                self.notifier
                    .error("Error", "Failed to save the new FAQ order.");
                Err(e.into())
            }
        }
    }

    /// Drop the cached list (used on sign-out).
    pub fn clear(&mut self) {
        self.faqs.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use vows_provider::ProviderError;

    /// In-memory FAQ table that can fail a chosen set of position writes.
    #[derive(Default)]
    struct MockFaqs {
        rows: Mutex<Vec<Faq>>,
        positions_written: Mutex<HashMap<Uuid, i64>>,
        sort_order_calls: AtomicUsize,
        fail_sort_order_for: Mutex<Vec<Uuid>>,
        fail_inserts: std::sync::atomic::AtomicBool,
    }

    fn remote_error() -> ProviderError {
        ProviderError::Api {
            status: 500,
            message: "boom".to_string(),
        }
    }

    #[async_trait]
    impl FaqsRemote for MockFaqs {
        async fn list(&self) -> vows_provider::Result<Vec<Faq>> {
            let mut rows = self.rows.lock().unwrap().clone();
            rows.sort_by_key(|f| f.sort_order);
            Ok(rows)
        }

        async fn insert(&self, new: &NewFaq) -> vows_provider::Result<Faq> {
            if self.fail_inserts.load(Ordering::SeqCst) {
                return Err(remote_error());
            }
            let created = Faq {
                id: Uuid::new_v4(),
                question: new.question.clone(),
                answer: new.answer.clone(),
                sort_order: new.sort_order,
                is_enabled: new.is_enabled,
                created_at: None,
                updated_at: None,
            };
            self.rows.lock().unwrap().push(created.clone());
            Ok(created)
        }

        async fn update(&self, row: &Faq) -> vows_provider::Result<Faq> {
            let mut rows = self.rows.lock().unwrap();
            let slot = rows
                .iter_mut()
                .find(|f| f.id == row.id)
                .ok_or(ProviderError::NotFound)?;
            *slot = row.clone();
            Ok(row.clone())
        }

        async fn set_sort_order(&self, id: Uuid, sort_order: i64) -> vows_provider::Result<()> {
            self.sort_order_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_sort_order_for.lock().unwrap().contains(&id) {
                return Err(remote_error());
            }
            self.positions_written.lock().unwrap().insert(id, sort_order);
            Ok(())
        }

        async fn set_enabled(&self, id: Uuid, is_enabled: bool) -> vows_provider::Result<()> {
            let mut rows = self.rows.lock().unwrap();
            let slot = rows
                .iter_mut()
                .find(|f| f.id == id)
                .ok_or(ProviderError::NotFound)?;
            slot.is_enabled = is_enabled;
            Ok(())
        }

        async fn delete(&self, id: Uuid) -> vows_provider::Result<()> {
            self.rows.lock().unwrap().retain(|f| f.id != id);
            Ok(())
        }
    }

    fn faq(question: &str, sort_order: i64) -> Faq {
        Faq {
            id: Uuid::new_v4(),
            question: question.to_string(),
            answer: format!("<p>{question}</p>"),
            sort_order,
            is_enabled: true,
            created_at: None,
            updated_at: None,
        }
    }

    fn manager_with(rows: Vec<Faq>) -> FaqManager<MockFaqs> {
        let remote = MockFaqs::default();
        *remote.rows.lock().unwrap() = rows.clone();
        let (notifier, _rx) = Notifier::channel();
        let mut manager = FaqManager::new(Arc::new(remote), notifier);
        manager.faqs = rows;
        manager
    }

    #[tokio::test]
    async fn reorder_assigns_index_positions_and_writes_each_one() {
        // [A, B, C] reordered to [C, A, B]
        let a = faq("A", 0);
        let b = faq("B", 1);
        let c = faq("C", 2);
        let mut manager = manager_with(vec![a.clone(), b.clone(), c.clone()]);

        manager
            .reorder(vec![c.clone(), a.clone(), b.clone()])
            .await
            .unwrap();

        let positions: HashMap<Uuid, i64> = manager
            .faqs()
            .iter()
            .map(|f| (f.id, f.sort_order))
            .collect();
        assert_eq!(positions[&c.id], 0);
        assert_eq!(positions[&a.id], 1);
        assert_eq!(positions[&b.id], 2);

        assert_eq!(manager.remote.sort_order_calls.load(Ordering::SeqCst), 3);
        let written = manager.remote.positions_written.lock().unwrap();
        assert_eq!(written[&c.id], 0);
        assert_eq!(written[&a.id], 1);
        assert_eq!(written[&b.id], 2);
    }

    #[tokio::test]
    async fn reorder_attempts_every_write_even_when_one_fails() {
        let a = faq("A", 0);
        let b = faq("B", 1);
        let c = faq("C", 2);
        let mut manager = manager_with(vec![a.clone(), b.clone(), c.clone()]);
        // Fail the first write in the new order (C lands at index 0).
        manager
            .remote
            .fail_sort_order_for
            .lock()
            .unwrap()
            .push(c.id);

        let result = manager
            .reorder(vec![c.clone(), a.clone(), b.clone()])
            .await;

        assert!(result.is_err());
        // All three writes were still attempted.
        assert_eq!(manager.remote.sort_order_calls.load(Ordering::SeqCst), 3);
        // The two that succeeded stay written.
        let written = manager.remote.positions_written.lock().unwrap();
        assert_eq!(written[&a.id], 1);
        assert_eq!(written[&b.id], 2);
        assert!(!written.contains_key(&c.id));
    }

    #[tokio::test]
    async fn create_appends_and_keeps_display_order() {
        let mut manager = manager_with(vec![faq("A", 0), faq("B", 1)]);

        manager
            .create(NewFaq {
                question: "What time?".to_string(),
                answer: "<p>Noon</p>".to_string(),
                sort_order: 2,
                is_enabled: true,
            })
            .await
            .unwrap();

        assert_eq!(manager.faqs().len(), 3);
        assert_eq!(manager.faqs()[2].question, "What time?");
    }

    #[tokio::test]
    async fn create_rejects_an_empty_question_before_any_remote_call() {
        let mut manager = manager_with(Vec::new());

        let result = manager
            .create(NewFaq {
                question: "   ".to_string(),
                answer: String::new(),
                sort_order: 0,
                is_enabled: true,
            })
            .await;

        assert!(matches!(
            result,
            Err(ClientError::Validation(ValidationError::Required("question")))
        ));
        assert!(manager.faqs().is_empty());
    }

    #[tokio::test]
    async fn failed_create_leaves_local_state_untouched() {
        let mut manager = manager_with(vec![faq("A", 0)]);
        manager.remote.fail_inserts.store(true, Ordering::SeqCst);

        let result = manager
            .create(NewFaq {
                question: "Will it rain?".to_string(),
                answer: String::new(),
                sort_order: 1,
                is_enabled: true,
            })
            .await;

        assert!(result.is_err());
        assert_eq!(manager.faqs().len(), 1);
    }

    #[tokio::test]
    async fn set_enabled_updates_the_cached_row() {
        let a = faq("A", 0);
        let mut manager = manager_with(vec![a.clone()]);

        manager.set_enabled(a.id, false).await.unwrap();
        assert!(!manager.faqs()[0].is_enabled);
    }
}
