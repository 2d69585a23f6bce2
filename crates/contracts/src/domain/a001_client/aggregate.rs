use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::{require, Facet, ListRecord, RecordDraft, RecordId};
use crate::shared::list::ListError;
use crate::shared::money::format_usd;

// ============================================================================
// Enums
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClientStatus {
    #[default]
    Active,
    Pending,
    Inactive,
}

impl Facet for ClientStatus {
    const ALL: &'static [Self] = &[
        ClientStatus::Active,
        ClientStatus::Pending,
        ClientStatus::Inactive,
    ];

    fn key(&self) -> &'static str {
        match self {
            ClientStatus::Active => "active",
            ClientStatus::Pending => "pending",
            ClientStatus::Inactive => "inactive",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ClientStatus::Active => "Active",
            ClientStatus::Pending => "Pending",
            ClientStatus::Inactive => "Inactive",
        }
    }
}

/// Industry of a client; the facet the Clients page filters by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Industry {
    #[default]
    Technology,
    Research,
    Startup,
    Enterprise,
    Consulting,
    Manufacturing,
}

impl Facet for Industry {
    const ALL: &'static [Self] = &[
        Industry::Technology,
        Industry::Research,
        Industry::Startup,
        Industry::Enterprise,
        Industry::Consulting,
        Industry::Manufacturing,
    ];

    fn key(&self) -> &'static str {
        match self {
            Industry::Technology => "technology",
            Industry::Research => "research",
            Industry::Startup => "startup",
            Industry::Enterprise => "enterprise",
            Industry::Consulting => "consulting",
            Industry::Manufacturing => "manufacturing",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Industry::Technology => "Technology",
            Industry::Research => "Research",
            Industry::Startup => "Startup",
            Industry::Enterprise => "Enterprise",
            Industry::Consulting => "Consulting",
            Industry::Manufacturing => "Manufacturing",
        }
    }
}

// ============================================================================
// Record
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub join_date: NaiveDate,
    /// Lifetime spend in cents
    pub total_spent: u64,
    pub services: Vec<String>,
    pub status: ClientStatus,
    pub industry: Industry,
    pub created_at: DateTime<Utc>,
}

impl Client {
    /// Initials shown in the avatar: first letter of the first two words.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().find(|c| c.is_alphanumeric()))
            .take(2)
            .flat_map(|c| c.to_uppercase())
            .collect()
    }

    pub fn total_spent_display(&self) -> String {
        format_usd(self.total_spent)
    }
}

/// Input of the "Add client" dialog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
#[serde(rename_all = "camelCase")]
pub struct ClientDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub join_date: Option<NaiveDate>,
    pub total_spent: u64,
    pub services: Vec<String>,
    pub status: ClientStatus,
    pub industry: Industry,
}

impl RecordDraft for ClientDraft {
    fn validate(&self) -> Result<(), ListError> {
        require("name", &self.name)?;
        require("email", &self.email)
    }
}

/// Fields replaced by the "Edit client" dialog; `None` keeps the current value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ClientPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub total_spent: Option<u64>,
    pub services: Option<Vec<String>>,
    pub status: Option<ClientStatus>,
    pub industry: Option<Industry>,
}

impl From<ClientDraft> for ClientPatch {
    fn from(d: ClientDraft) -> Self {
        Self {
            name: Some(d.name),
            email: Some(d.email),
            phone: Some(d.phone),
            location: Some(d.location),
            total_spent: Some(d.total_spent),
            services: Some(d.services),
            status: Some(d.status),
            industry: Some(d.industry),
        }
    }
}

impl From<&Client> for ClientDraft {
    fn from(c: &Client) -> Self {
        Self {
            name: c.name.clone(),
            email: c.email.clone(),
            phone: c.phone.clone(),
            location: c.location.clone(),
            join_date: Some(c.join_date),
            total_spent: c.total_spent,
            services: c.services.clone(),
            status: c.status,
            industry: c.industry,
        }
    }
}

impl ListRecord for Client {
    type Id = RecordId;
    type Facet = Industry;
    type Draft = ClientDraft;
    type Patch = ClientPatch;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn facet(&self) -> Industry {
        self.industry
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.email, self.industry.label()]
    }

    fn from_draft(id: RecordId, draft: ClientDraft, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: draft.name.trim().to_string(),
            email: draft.email.trim().to_string(),
            phone: draft.phone,
            location: draft.location,
            join_date: draft.join_date.unwrap_or_else(|| created_at.date_naive()),
            total_spent: draft.total_spent,
            services: draft.services,
            status: draft.status,
            industry: draft.industry,
            created_at,
        }
    }

    fn apply_patch(&mut self, patch: &ClientPatch) {
        if let Some(v) = &patch.name {
            self.name = v.trim().to_string();
        }
        if let Some(v) = &patch.email {
            self.email = v.trim().to_string();
        }
        if let Some(v) = &patch.phone {
            self.phone = v.clone();
        }
        if let Some(v) = &patch.location {
            self.location = v.clone();
        }
        if let Some(v) = patch.total_spent {
            self.total_spent = v;
        }
        if let Some(v) = &patch.services {
            self.services = v.clone();
        }
        if let Some(v) = patch.status {
            self.status = v;
        }
        if let Some(v) = patch.industry {
            self.industry = v;
        }
    }

    fn check_patch(patch: &ClientPatch) -> Result<(), ListError> {
        if let Some(name) = &patch.name {
            require("name", name)?;
        }
        if let Some(email) = &patch.email {
            require("email", email)?;
        }
        Ok(())
    }
}

// ============================================================================
// Summary
// ============================================================================

/// Counters shown under the client grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientSummary {
    pub total: usize,
    pub active: usize,
    pub pending: usize,
    /// Sum of `total_spent`, in cents
    pub revenue: u64,
}

impl ClientSummary {
    pub fn of<'a>(clients: impl IntoIterator<Item = &'a Client>) -> Self {
        clients.into_iter().fold(Self::default(), |mut acc, c| {
            acc.total += 1;
            match c.status {
                ClientStatus::Active => acc.active += 1,
                ClientStatus::Pending => acc.pending += 1,
                ClientStatus::Inactive => {}
            }
            acc.revenue += c.total_spent;
            acc
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_client::seed_clients;

    #[test]
    fn summary_of_seed() {
        let clients = seed_clients();
        let summary = ClientSummary::of(&clients);
        assert_eq!(summary.total, 6);
        assert_eq!(summary.active, 4);
        assert_eq!(summary.pending, 1);
        assert_eq!(summary.revenue, 8_103_000);
        assert_eq!(format_usd(summary.revenue), "$81,030");
    }

    #[test]
    fn initials_from_name() {
        let clients = seed_clients();
        let initials: Vec<String> = clients.iter().map(Client::initials).collect();
        assert_eq!(initials, vec!["TI", "IL", "S", "ML", "GS", "EC"]);
    }

    #[test]
    fn status_and_industry_serialize_as_expected() {
        assert_eq!(
            serde_json::to_string(&ClientStatus::Inactive).unwrap(),
            "\"inactive\""
        );
        assert_eq!(
            serde_json::to_string(&Industry::Manufacturing).unwrap(),
            "\"Manufacturing\""
        );
        assert_eq!(Industry::from_key("consulting"), Some(Industry::Consulting));
        assert_eq!(Industry::from_key("Consulting"), None);
    }

    #[test]
    fn draft_without_join_date_uses_creation_day() {
        let created = DateTime::parse_from_rfc3339("2024-05-01T10:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let client = Client::from_draft(
            RecordId(9),
            ClientDraft {
                name: "  Acme  ".into(),
                email: "ops@acme.io".into(),
                ..ClientDraft::default()
            },
            created,
        );
        assert_eq!(client.name, "Acme");
        assert_eq!(client.join_date, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
    }
}
