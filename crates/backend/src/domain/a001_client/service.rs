use chrono::Utc;
use contracts::domain::a001_client::{Client, ClientDraft, ClientPatch};
use contracts::domain::common::RecordId;
use contracts::shared::list::ListError;

use super::repository;
use crate::shared::data::Store;

pub async fn list_all(store: &Store) -> Vec<Client> {
    repository::list_all(store).await
}

pub async fn get_by_id(store: &Store, id: RecordId) -> Result<Client, ListError> {
    repository::get_by_id(store, id).await
}

/// Create a new client; `join_date` defaults to today
pub async fn create(store: &Store, draft: ClientDraft) -> Result<Client, ListError> {
    let client = repository::insert(store, draft, Utc::now()).await?;
    tracing::info!("Client {} created: {}", client.id, client.name);
    Ok(client)
}

pub async fn update(store: &Store, id: RecordId, patch: ClientPatch) -> Result<Client, ListError> {
    let client = repository::update(store, id, &patch).await?;
    tracing::info!("Client {} updated", client.id);
    Ok(client)
}

pub async fn delete(store: &Store, id: RecordId) -> Result<(), ListError> {
    let removed = repository::delete(store, id).await?;
    tracing::info!("Client {} deleted: {}", removed.id, removed.name);
    Ok(())
}
