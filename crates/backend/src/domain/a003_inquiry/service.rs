use chrono::Utc;
use contracts::domain::a003_inquiry::{Inquiry, InquiryDraft};
use contracts::domain::common::RecordId;
use contracts::shared::list::ListError;

use super::repository;
use crate::shared::data::Store;

pub async fn list_all(store: &Store) -> Vec<Inquiry> {
    repository::list_all(store).await
}

/// Register an incoming inquiry; it always starts as `new`
pub async fn create(store: &Store, draft: InquiryDraft) -> Result<Inquiry, ListError> {
    let inquiry = repository::insert(store, draft, Utc::now()).await?;
    tracing::info!("Inquiry {} received from {}", inquiry.id, inquiry.email);
    Ok(inquiry)
}

pub async fn delete(store: &Store, id: RecordId) -> Result<(), ListError> {
    repository::delete(store, id).await?;
    tracing::info!("Inquiry {} deleted", id);
    Ok(())
}

pub async fn reply(store: &Store, id: RecordId, message: &str) -> Result<Inquiry, ListError> {
    let inquiry = repository::reply(store, id, message).await?;
    tracing::info!("Inquiry {} answered ({} replies)", id, inquiry.replies.len());
    Ok(inquiry)
}

pub async fn archive(store: &Store, id: RecordId) -> Result<Inquiry, ListError> {
    let inquiry = repository::archive(store, id).await?;
    tracing::info!("Inquiry {} archived", id);
    Ok(inquiry)
}
