use std::cell::RefCell;

use async_trait::async_trait;
use chrono::Utc;
use contracts::domain::common::ListRecord;
use contracts::shared::list::Collection;
use web_sys::AbortSignal;

use super::source::{RecordSource, SourceError};

/// Records kept in the page's own memory, starting from seed data
#[derive(Debug)]
pub struct MemorySource<T: ListRecord> {
    collection: RefCell<Collection<T>>,
}

impl<T: ListRecord> MemorySource<T> {
    pub fn new(seed: Vec<T>) -> Self {
        Self {
            collection: RefCell::new(Collection::from_records(seed)),
        }
    }

    pub fn len(&self) -> usize {
        self.collection.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.collection.borrow().is_empty()
    }
}

#[async_trait(?Send)]
impl<T> RecordSource<T> for MemorySource<T>
where
    T: ListRecord + 'static,
{
    async fn list(&self, _signal: Option<AbortSignal>) -> Result<Vec<T>, SourceError> {
        Ok(self.collection.borrow().items().to_vec())
    }

    async fn create(&self, draft: T::Draft, _signal: Option<AbortSignal>) -> Result<T, SourceError> {
        let mut collection = self.collection.borrow_mut();
        let record = collection.insert(draft, Utc::now())?;
        Ok(record.clone())
    }

    async fn update(
        &self,
        id: &T::Id,
        patch: T::Patch,
        _signal: Option<AbortSignal>,
    ) -> Result<T, SourceError> {
        let mut collection = self.collection.borrow_mut();
        let record = collection.update(id, &patch)?;
        Ok(record.clone())
    }

    async fn delete(&self, id: &T::Id, _signal: Option<AbortSignal>) -> Result<(), SourceError> {
        self.collection.borrow_mut().remove(id)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_client::{seed_clients, Client, ClientDraft, ClientPatch};
    use contracts::domain::a003_inquiry::{seed_inquiries, Inquiry, InquiryPatch, InquiryStatus};
    use contracts::domain::common::RecordId;
    use contracts::shared::list::ListError;

    fn clients() -> MemorySource<Client> {
        MemorySource::new(seed_clients())
    }

    fn draft(name: &str) -> ClientDraft {
        ClientDraft {
            name: name.to_string(),
            email: "hello@example.com".to_string(),
            ..ClientDraft::default()
        }
    }

    #[tokio::test]
    async fn lists_seed_in_order() {
        let source = clients();
        let names: Vec<String> = source
            .list(None)
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(
            names,
            vec![
                "TechCorp Inc.",
                "Innovation Labs",
                "StartupXYZ",
                "MegaCorp Ltd.",
                "Global Systems",
                "Enterprise Corp"
            ]
        );
    }

    #[tokio::test]
    async fn create_assigns_fresh_id_even_after_delete() {
        let source = clients();
        let first = source.create(draft("Acme"), None).await.unwrap();
        assert_eq!(first.id, RecordId(7));

        source.delete(&first.id, None).await.unwrap();
        let second = source.create(draft("Acme Two"), None).await.unwrap();
        assert_eq!(second.id, RecordId(8));
        assert_eq!(source.len(), 7);
    }

    #[tokio::test]
    async fn create_rejects_missing_name() {
        let source = clients();
        let err = source.create(ClientDraft::default(), None).await.unwrap_err();
        assert_eq!(err, SourceError::List(ListError::MissingField("name")));
        assert_eq!(source.len(), 6);
    }

    #[tokio::test]
    async fn delete_then_update_reports_not_found() {
        let source = clients();
        source.delete(&RecordId(3), None).await.unwrap();
        assert_eq!(source.len(), 5);

        let err = source
            .update(&RecordId(3), ClientPatch::default(), None)
            .await
            .unwrap_err();
        assert!(err.is_not_found());
        assert!(source.delete(&RecordId(3), None).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn update_returns_patched_record() {
        let source: MemorySource<Inquiry> = MemorySource::new(seed_inquiries());
        let patch = InquiryPatch {
            status: Some(InquiryStatus::Closed),
            starred: Some(true),
            ..InquiryPatch::default()
        };

        let updated = source.update(&RecordId(2), patch, None).await.unwrap();
        assert_eq!(updated.status, InquiryStatus::Closed);
        assert!(updated.starred);

        let listed = source.list(None).await.unwrap();
        assert_eq!(listed[1], updated);
    }

    #[tokio::test]
    async fn listed_records_are_copies() {
        let source: MemorySource<Inquiry> = MemorySource::new(seed_inquiries());
        let mut page_copy = source.list(None).await.unwrap();
        page_copy[0].status = InquiryStatus::Closed;

        let stored = source.list(None).await.unwrap();
        assert_ne!(stored[0].status, InquiryStatus::Closed);
    }

    #[test]
    fn not_found_is_distinguished_from_remote_failures() {
        assert!(SourceError::List(ListError::not_found(4)).is_not_found());
        assert!(!SourceError::Remote("HTTP 404".into()).is_not_found());
        assert_eq!(
            SourceError::List(ListError::not_found(4)).to_string(),
            "Record 4 not found"
        );
    }
}
