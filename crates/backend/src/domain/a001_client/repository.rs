use contracts::domain::a001_client::{Client, ClientDraft, ClientPatch};
use contracts::domain::common::RecordId;
use contracts::shared::list::ListError;
use chrono::{DateTime, Utc};

use crate::shared::data::Store;

pub async fn list_all(store: &Store) -> Vec<Client> {
    store.clients.read().await.items().to_vec()
}

pub async fn get_by_id(store: &Store, id: RecordId) -> Result<Client, ListError> {
    store.clients.read().await.get(&id).cloned()
}

pub async fn insert(
    store: &Store,
    draft: ClientDraft,
    created_at: DateTime<Utc>,
) -> Result<Client, ListError> {
    store.clients.write().await.insert(draft, created_at).cloned()
}

pub async fn update(store: &Store, id: RecordId, patch: &ClientPatch) -> Result<Client, ListError> {
    store.clients.write().await.update(&id, patch).cloned()
}

pub async fn delete(store: &Store, id: RecordId) -> Result<Client, ListError> {
    store.clients.write().await.remove(&id)
}
