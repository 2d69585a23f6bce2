use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::domain::common::{require, Facet, ListRecord, RecordDraft, RecordKey};
use crate::shared::list::ListError;

// ============================================================================
// ID
// ============================================================================

/// Opaque service id. The remote API sends it as `_id`; locally created
/// services get a fresh UUID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceId(pub String);

impl ServiceId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl RecordKey for ServiceId {
    fn as_string(&self) -> String {
        self.0.clone()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        let s = s.trim();
        if s.is_empty() {
            return Err("Service id must not be empty".to_string());
        }
        Ok(Self(s.to_string()))
    }

    fn from_sequence(_sequence: u64) -> Self {
        Self::new_v4()
    }

    fn sequence(&self) -> Option<u64> {
        None
    }
}

// ============================================================================
// Icon
// ============================================================================

/// Icon kind of a service card. Any unrecognised value coming from the
/// server is shown as `Server`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ServiceIcon {
    #[default]
    Server,
    Shield,
    Cloud,
    Monitor,
    Smartphone,
    Database,
}

impl Facet for ServiceIcon {
    const ALL: &'static [Self] = &[
        ServiceIcon::Server,
        ServiceIcon::Shield,
        ServiceIcon::Cloud,
        ServiceIcon::Monitor,
        ServiceIcon::Smartphone,
        ServiceIcon::Database,
    ];

    fn key(&self) -> &'static str {
        match self {
            ServiceIcon::Server => "server",
            ServiceIcon::Shield => "shield",
            ServiceIcon::Cloud => "cloud",
            ServiceIcon::Monitor => "monitor",
            ServiceIcon::Smartphone => "smartphone",
            ServiceIcon::Database => "database",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ServiceIcon::Server => "Server",
            ServiceIcon::Shield => "Security",
            ServiceIcon::Cloud => "Cloud",
            ServiceIcon::Monitor => "Monitoring",
            ServiceIcon::Smartphone => "Mobile",
            ServiceIcon::Database => "Database",
        }
    }
}

impl From<String> for ServiceIcon {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<&str> for ServiceIcon {
    fn from(value: &str) -> Self {
        ServiceIcon::from_key(value.trim().to_lowercase().as_str()).unwrap_or_default()
    }
}

impl From<ServiceIcon> for String {
    fn from(icon: ServiceIcon) -> Self {
        icon.key().to_string()
    }
}

// ============================================================================
// Record
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    #[serde(rename = "_id")]
    pub id: ServiceId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: ServiceIcon,
    #[serde(rename = "createdAt", default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ServiceDraft {
    pub title: String,
    pub description: String,
    pub icon: ServiceIcon,
}

impl RecordDraft for ServiceDraft {
    fn validate(&self) -> Result<(), ListError> {
        require("title", &self.title)?;
        require("description", &self.description)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ServicePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<ServiceIcon>,
}

impl From<ServiceDraft> for ServicePatch {
    fn from(d: ServiceDraft) -> Self {
        Self {
            title: Some(d.title),
            description: Some(d.description),
            icon: Some(d.icon),
        }
    }
}

impl From<&Service> for ServiceDraft {
    fn from(s: &Service) -> Self {
        Self {
            title: s.title.clone(),
            description: s.description.clone(),
            icon: s.icon,
        }
    }
}

impl ListRecord for Service {
    type Id = ServiceId;
    type Facet = ServiceIcon;
    type Draft = ServiceDraft;
    type Patch = ServicePatch;

    fn id(&self) -> &ServiceId {
        &self.id
    }

    fn facet(&self) -> ServiceIcon {
        self.icon
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.title]
    }

    fn from_draft(id: ServiceId, draft: ServiceDraft, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: draft.title.trim().to_string(),
            description: draft.description.trim().to_string(),
            icon: draft.icon,
            created_at,
        }
    }

    fn apply_patch(&mut self, patch: &ServicePatch) {
        if let Some(v) = &patch.title {
            self.title = v.trim().to_string();
        }
        if let Some(v) = &patch.description {
            self.description = v.trim().to_string();
        }
        if let Some(v) = patch.icon {
            self.icon = v;
        }
    }

    fn check_patch(patch: &ServicePatch) -> Result<(), ListError> {
        if let Some(title) = &patch.title {
            require("title", title)?;
        }
        if let Some(description) = &patch.description {
            require("description", description)?;
        }
        Ok(())
    }
}

// ============================================================================
// Wire shape
// ============================================================================

/// `GET /api/services/` may answer with a single object or with an array.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::Many(items) => items,
            OneOrMany::One(item) => vec![item],
        }
    }
}

impl<T> From<OneOrMany<T>> for Vec<T> {
    fn from(value: OneOrMany<T>) -> Self {
        value.into_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list::Collection;

    const ONE: &str = r#"{"_id":"6889ec20f7fd","title":"Cloud Hosting","description":"Managed cloud","icon":"cloud","createdAt":"2024-03-01T12:00:00Z"}"#;

    #[test]
    fn single_object_and_array_both_become_a_list() {
        let one: OneOrMany<Service> = serde_json::from_str(ONE).unwrap();
        let services = one.into_vec();
        assert_eq!(services.len(), 1);
        assert_eq!(services[0].id, ServiceId("6889ec20f7fd".into()));
        assert_eq!(services[0].icon, ServiceIcon::Cloud);

        let many: OneOrMany<Service> = serde_json::from_str(&format!("[{ONE},{ONE}]")).unwrap();
        assert_eq!(many.into_vec().len(), 2);

        let empty: OneOrMany<Service> = serde_json::from_str("[]").unwrap();
        assert!(empty.into_vec().is_empty());
    }

    #[test]
    fn unknown_icon_falls_back_to_server() {
        let json = r#"{"_id":"x","title":"Helpdesk","icon":"🛠️"}"#;
        let service: Service = serde_json::from_str(json).unwrap();
        assert_eq!(service.icon, ServiceIcon::Server);
        assert_eq!(service.description, "");
        assert_eq!(ServiceIcon::from("Shield"), ServiceIcon::Shield);
    }

    #[test]
    fn serializes_with_remote_field_names() {
        let service = Service::from_draft(
            ServiceId("abc".into()),
            ServiceDraft {
                title: "Backups".into(),
                description: "Nightly".into(),
                icon: ServiceIcon::Database,
            },
            Utc::now(),
        );
        let value = serde_json::to_value(&service).unwrap();
        assert_eq!(value["_id"], "abc");
        assert_eq!(value["icon"], "database");
        assert!(value.get("createdAt").is_some());
    }

    #[test]
    fn inserted_services_get_distinct_uuids() {
        let mut services: Collection<Service> = Collection::new();
        let draft = ServiceDraft {
            title: "Audit".into(),
            description: "Yearly audit".into(),
            icon: ServiceIcon::Shield,
        };
        let a = services.insert(draft.clone(), Utc::now()).unwrap().id.clone();
        let b = services.insert(draft, Utc::now()).unwrap().id.clone();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(&a.0).is_ok());
    }

    #[test]
    fn missing_description_is_rejected() {
        let mut services: Collection<Service> = Collection::new();
        let err = services
            .insert(
                ServiceDraft {
                    title: "Audit".into(),
                    ..ServiceDraft::default()
                },
                Utc::now(),
            )
            .unwrap_err();
        assert_eq!(err, ListError::MissingField("description"));
    }
}
