use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::{require, Facet, ListRecord, RecordDraft, RecordId};
use crate::shared::list::ListError;

// ============================================================================
// Enums
// ============================================================================

/// Processing state of an inquiry; the facet the Contacts tabs filter by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InquiryStatus {
    #[default]
    New,
    InProgress,
    Responded,
    Closed,
}

impl InquiryStatus {
    /// Still waiting for an answer from us.
    pub fn is_open(&self) -> bool {
        matches!(self, InquiryStatus::New | InquiryStatus::InProgress)
    }
}

impl Facet for InquiryStatus {
    const ALL: &'static [Self] = &[
        InquiryStatus::New,
        InquiryStatus::InProgress,
        InquiryStatus::Responded,
        InquiryStatus::Closed,
    ];

    fn key(&self) -> &'static str {
        match self {
            InquiryStatus::New => "new",
            InquiryStatus::InProgress => "in-progress",
            InquiryStatus::Responded => "responded",
            InquiryStatus::Closed => "closed",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            InquiryStatus::New => "New",
            InquiryStatus::InProgress => "In Progress",
            InquiryStatus::Responded => "Responded",
            InquiryStatus::Closed => "Closed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InquiryPriority {
    High,
    #[default]
    Medium,
    Low,
}

impl InquiryPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            InquiryPriority::High => "high",
            InquiryPriority::Medium => "medium",
            InquiryPriority::Low => "low",
        }
    }
}

// ============================================================================
// Record
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub subject: String,
    pub message: String,
    pub priority: InquiryPriority,
    pub status: InquiryStatus,
    pub category: String,
    #[serde(default)]
    pub starred: bool,
    /// Reply texts sent from the console, oldest first
    #[serde(default)]
    pub replies: Vec<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
#[serde(rename_all = "camelCase")]
pub struct InquiryDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub subject: String,
    pub message: String,
    pub priority: InquiryPriority,
    pub category: String,
}

impl RecordDraft for InquiryDraft {
    fn validate(&self) -> Result<(), ListError> {
        require("name", &self.name)?;
        require("email", &self.email)?;
        require("subject", &self.subject)?;
        require("message", &self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct InquiryPatch {
    pub priority: Option<InquiryPriority>,
    pub status: Option<InquiryStatus>,
    pub category: Option<String>,
    pub starred: Option<bool>,
}

impl ListRecord for Inquiry {
    type Id = RecordId;
    type Facet = InquiryStatus;
    type Draft = InquiryDraft;
    type Patch = InquiryPatch;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn facet(&self) -> InquiryStatus {
        self.status
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.email, &self.subject, &self.company]
    }

    fn from_draft(id: RecordId, draft: InquiryDraft, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: draft.name.trim().to_string(),
            email: draft.email.trim().to_string(),
            phone: draft.phone,
            company: draft.company,
            subject: draft.subject.trim().to_string(),
            message: draft.message,
            priority: draft.priority,
            status: InquiryStatus::New,
            category: draft.category,
            starred: false,
            replies: Vec::new(),
            created_at,
        }
    }

    fn apply_patch(&mut self, patch: &InquiryPatch) {
        if let Some(v) = patch.priority {
            self.priority = v;
        }
        if let Some(v) = patch.status {
            self.status = v;
        }
        if let Some(v) = &patch.category {
            self.category = v.clone();
        }
        if let Some(v) = patch.starred {
            self.starred = v;
        }
    }
}

/// Body of `POST /api/inquiries/:id/reply`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ReplyRequest {
    pub message: String,
}

// ============================================================================
// Tab counts
// ============================================================================

/// Per-status counters shown on the Contacts tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryCounts {
    pub all: usize,
    pub new: usize,
    pub in_progress: usize,
    pub responded: usize,
    pub closed: usize,
}

impl InquiryCounts {
    pub fn of<'a>(inquiries: impl IntoIterator<Item = &'a Inquiry>) -> Self {
        inquiries.into_iter().fold(Self::default(), |mut acc, i| {
            acc.all += 1;
            match i.status {
                InquiryStatus::New => acc.new += 1,
                InquiryStatus::InProgress => acc.in_progress += 1,
                InquiryStatus::Responded => acc.responded += 1,
                InquiryStatus::Closed => acc.closed += 1,
            }
            acc
        })
    }

    /// Count for a tab key (`"all"` or a status key); 0 for anything else.
    pub fn for_key(&self, key: &str) -> usize {
        match InquiryStatus::from_key(key) {
            Some(InquiryStatus::New) => self.new,
            Some(InquiryStatus::InProgress) => self.in_progress,
            Some(InquiryStatus::Responded) => self.responded,
            Some(InquiryStatus::Closed) => self.closed,
            None if key == crate::shared::list::filter::ALL_KEY => self.all,
            None => 0,
        }
    }
}
