use chrono::{DateTime, Utc};
use contracts::domain::a003_inquiry::{Inquiry, InquiryDraft};
use contracts::domain::common::RecordId;
use contracts::shared::list::ListError;

use crate::shared::data::Store;

pub async fn list_all(store: &Store) -> Vec<Inquiry> {
    store.inquiries.read().await.items().to_vec()
}

pub async fn insert(
    store: &Store,
    draft: InquiryDraft,
    created_at: DateTime<Utc>,
) -> Result<Inquiry, ListError> {
    store.inquiries.write().await.insert(draft, created_at).cloned()
}

pub async fn delete(store: &Store, id: RecordId) -> Result<Inquiry, ListError> {
    store.inquiries.write().await.remove(&id)
}

pub async fn reply(store: &Store, id: RecordId, message: &str) -> Result<Inquiry, ListError> {
    store.inquiries.write().await.reply(&id, message).cloned()
}

pub async fn archive(store: &Store, id: RecordId) -> Result<Inquiry, ListError> {
    store.inquiries.write().await.archive(&id).cloned()
}
