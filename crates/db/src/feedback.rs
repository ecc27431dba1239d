//! Feedback queries

use common::models::Feedback;

use crate::Store;

/// Feedback addressed to a user, newest first
pub async fn list_for_recipient(store: &Store, recipient_id: &str) -> Vec<Feedback> {
    store.round_trip().await;
    let mut items: Vec<Feedback> = store
        .inner
        .feedback
        .read()
        .await
        .iter()
        .filter(|f| f.recipient_id == recipient_id)
        .cloned()
        .collect();
    items.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
    items
}

/// Append a feedback entry
pub async fn insert(store: &Store, feedback: Feedback) -> Feedback {
    store.round_trip().await;
    store.inner.feedback.write().await.push(feedback.clone());
    feedback
}

/// Total number of feedback entries
pub async fn count(store: &Store) -> usize {
    store.inner.feedback.read().await.len()
}
