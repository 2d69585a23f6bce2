use chrono::Utc;
use contracts::domain::a002_service::{Service, ServiceDraft, ServiceId, ServicePatch};
use contracts::shared::list::ListError;

use super::repository;
use crate::shared::data::Store;

pub async fn list_all(store: &Store) -> Vec<Service> {
    repository::list_all(store).await
}

/// Create a service; the id is a fresh UUID
pub async fn create(store: &Store, draft: ServiceDraft) -> Result<Service, ListError> {
    let service = repository::insert(store, draft, Utc::now()).await?;
    tracing::info!("Service {} created: {}", service.id, service.title);
    Ok(service)
}

pub async fn update(
    store: &Store,
    id: &ServiceId,
    patch: ServicePatch,
) -> Result<Service, ListError> {
    let service = repository::update(store, id, &patch).await?;
    tracing::info!("Service {} updated", service.id);
    Ok(service)
}

pub async fn delete(store: &Store, id: &ServiceId) -> Result<(), ListError> {
    let removed = repository::delete(store, id).await?;
    tracing::info!("Service {} deleted: {}", removed.id, removed.title);
    Ok(())
}
