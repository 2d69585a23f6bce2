use chrono::{DateTime, TimeZone, Utc};
use contracts::domain::a002_service::{Service, ServiceDraft, ServiceIcon, ServiceId, ServicePatch};
use contracts::shared::list::ListError;

use crate::shared::data::Store;

/// Catalogue the server starts with
pub fn initial_services() -> Vec<Service> {
    let created_at = Utc
        .with_ymd_and_hms(2024, 1, 15, 9, 0, 0)
        .single()
        .unwrap_or_else(Utc::now);

    [
        (
            "Cloud Infrastructure",
            "Design, migration and 24/7 operation of hybrid and public cloud platforms.",
            ServiceIcon::Cloud,
        ),
        (
            "Cybersecurity",
            "Security audits, threat monitoring and incident response for your systems.",
            ServiceIcon::Shield,
        ),
        (
            "IT Support",
            "Helpdesk and on-site support for teams of every size.",
            ServiceIcon::Monitor,
        ),
        (
            "Network Management",
            "Multi-site network setup, monitoring and maintenance.",
            ServiceIcon::Server,
        ),
        (
            "Database Management",
            "Managed PostgreSQL and MongoDB with backups and tuning.",
            ServiceIcon::Database,
        ),
        (
            "Mobile Device Management",
            "Enrolment, policies and remote wipe for company phones and tablets.",
            ServiceIcon::Smartphone,
        ),
    ]
    .into_iter()
    .map(|(title, description, icon)| Service {
        id: ServiceId::new_v4(),
        title: title.to_string(),
        description: description.to_string(),
        icon,
        created_at,
    })
    .collect()
}

pub async fn list_all(store: &Store) -> Vec<Service> {
    store.services.read().await.items().to_vec()
}

pub async fn count(store: &Store) -> usize {
    store.services.read().await.len()
}

pub async fn insert(
    store: &Store,
    draft: ServiceDraft,
    created_at: DateTime<Utc>,
) -> Result<Service, ListError> {
    store.services.write().await.insert(draft, created_at).cloned()
}

pub async fn update(
    store: &Store,
    id: &ServiceId,
    patch: &ServicePatch,
) -> Result<Service, ListError> {
    store.services.write().await.update(id, patch).cloned()
}

pub async fn delete(store: &Store, id: &ServiceId) -> Result<Service, ListError> {
    store.services.write().await.remove(id)
}
