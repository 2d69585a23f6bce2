use chrono::{DateTime, Utc};

use crate::domain::common::ListRecord;

use super::{derive_view, Collection, ListError, ListFilter};

/// Everything one list page holds: the collection, the search string and the filter.
#[derive(Debug, Clone)]
pub struct ListState<T: ListRecord> {
    collection: Collection<T>,
    search_term: String,
    filter: ListFilter<T::Facet>,
}

impl<T: ListRecord> Default for ListState<T> {
    fn default() -> Self {
        Self::new(Collection::new())
    }
}

impl<T: ListRecord> ListState<T> {
    pub fn new(collection: Collection<T>) -> Self {
        Self {
            collection,
            search_term: String::new(),
            filter: ListFilter::All,
        }
    }

    pub fn from_records(records: Vec<T>) -> Self {
        Self::new(Collection::from_records(records))
    }

    pub fn collection(&self) -> &Collection<T> {
        &self.collection
    }

    pub fn collection_mut(&mut self) -> &mut Collection<T> {
        &mut self.collection
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn filter(&self) -> ListFilter<T::Facet> {
        self.filter
    }

    /// No validation; the empty string matches everything.
    pub fn set_search_term(&mut self, text: impl Into<String>) {
        self.search_term = text.into();
    }

    /// Accepts `"all"` or a facet key. On error the current filter is kept.
    pub fn set_filter(&mut self, key: &str) -> Result<(), ListError> {
        self.filter = ListFilter::parse(key)?;
        Ok(())
    }

    pub fn set_filter_value(&mut self, filter: ListFilter<T::Facet>) {
        self.filter = filter;
    }

    pub fn add(&mut self, draft: T::Draft) -> Result<&T, ListError> {
        self.add_at(draft, Utc::now())
    }

    pub fn add_at(&mut self, draft: T::Draft, created_at: DateTime<Utc>) -> Result<&T, ListError> {
        self.collection.insert(draft, created_at)
    }

    pub fn update(&mut self, id: &T::Id, patch: &T::Patch) -> Result<&T, ListError> {
        self.collection.update(id, patch)
    }

    pub fn remove(&mut self, id: &T::Id) -> Result<T, ListError> {
        self.collection.remove(id)
    }

    pub fn view(&self, id: &T::Id) -> Result<&T, ListError> {
        self.collection.get(id)
    }

    /// Derived view for rendering, in collection order.
    pub fn visible(&self) -> Vec<&T> {
        derive_view(self.collection.items(), &self.search_term, &self.filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_client::{seed_clients, Client, ClientDraft, ClientPatch, Industry};
    use crate::domain::common::{Facet, RecordId, RecordKey};
    use std::collections::BTreeSet;

    fn seeded() -> ListState<Client> {
        ListState::from_records(seed_clients())
    }

    fn draft(name: &str) -> ClientDraft {
        ClientDraft {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            ..ClientDraft::default()
        }
    }

    fn id_set(state: &ListState<Client>) -> BTreeSet<RecordId> {
        state.collection().ids().into_iter().collect()
    }

    #[test]
    fn search_tech_matches_only_techcorp() {
        let mut state = seeded();
        state.set_search_term("tech");

        let names: Vec<&str> = state.visible().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["TechCorp Inc."]);
    }

    #[test]
    fn search_is_case_insensitive_and_covers_email_and_industry() {
        let mut state = seeded();

        state.set_search_term("GLOBALSYS");
        assert_eq!(state.visible().len(), 1);

        state.set_search_term("consulting");
        let visible = state.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Global Systems");
    }

    #[test]
    fn every_visible_record_contains_the_search_term() {
        let mut state = seeded();
        for term in ["a", "corp", "IO", ".com", "zzz", "Labs"] {
            state.set_search_term(term);
            let needle = term.to_lowercase();
            for client in state.visible() {
                assert!(
                    client
                        .search_fields()
                        .iter()
                        .any(|f| f.to_lowercase().contains(&needle)),
                    "{} does not contain {}",
                    client.name,
                    term
                );
            }
        }
    }

    #[test]
    fn empty_search_shows_everything_in_order() {
        let state = seeded();
        let ids: Vec<u64> = state.visible().iter().map(|c| c.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn filter_restricts_to_facet_and_keeps_order() {
        let mut state = seeded();
        for industry in [Industry::Technology, Industry::Enterprise, Industry::Startup] {
            state.set_filter(industry.key()).unwrap();
            let visible = state.visible();
            assert!(!visible.is_empty());
            assert!(visible.iter().all(|c| c.industry == industry));
        }

        state.set_filter("all").unwrap();
        assert_eq!(state.visible().len(), 6);
    }

    #[test]
    fn unknown_filter_is_rejected_and_filter_kept() {
        let mut state = seeded();
        state.set_filter("research").unwrap();

        let err = state.set_filter("aerospace").unwrap_err();
        assert_eq!(err, ListError::UnknownFilter("aerospace".into()));
        assert_eq!(state.filter(), ListFilter::Only(Industry::Research));
    }

    #[test]
    fn filter_and_search_combine() {
        let mut state = seeded();
        state.set_filter("technology").unwrap();
        state.set_search_term("labs");
        assert!(state.visible().is_empty());
    }

    #[test]
    fn filtering_never_mutates_the_collection() {
        let mut state = seeded();
        let before = id_set(&state);
        state.set_search_term("nothing matches this");
        state.set_filter("startup").unwrap();
        let _ = state.visible();
        assert_eq!(id_set(&state), before);
        assert_eq!(state.collection().len(), 6);
    }

    #[test]
    fn add_assigns_next_id_and_appends() {
        let mut state = seeded();
        let added = state.add(draft("Newco")).unwrap().clone();
        assert_eq!(added.id, RecordId(7));
        assert_eq!(state.collection().items().last().unwrap().name, "Newco");
    }

    #[test]
    fn add_requires_name_and_email() {
        let mut state = seeded();

        let err = state.add(ClientDraft::default()).unwrap_err();
        assert_eq!(err, ListError::MissingField("name"));

        let mut no_email = draft("Nomail");
        no_email.email = "   ".into();
        assert_eq!(
            state.add(no_email).unwrap_err(),
            ListError::MissingField("email")
        );
        assert_eq!(state.collection().len(), 6);
    }

    #[test]
    fn add_then_remove_restores_ids_but_counter_advances() {
        let mut state = seeded();
        let before = id_set(&state);

        let id = state.add(draft("Temp")).unwrap().id;
        state.remove(&id).unwrap();
        assert_eq!(id_set(&state), before);

        let next = state.add(draft("Next")).unwrap().id;
        assert_ne!(next, id);
        assert_eq!(next, RecordId(id.0 + 1));
    }

    #[test]
    fn ids_are_not_reused_after_deleting_from_the_middle() {
        let mut state = seeded();
        state.remove(&RecordId(2)).unwrap();
        state.remove(&RecordId(3)).unwrap();

        // length + 1 would be 5, which is still taken
        let id = state.add(draft("Fresh")).unwrap().id;
        assert_eq!(id, RecordId(7));
        let unique: BTreeSet<_> = state.collection().ids().into_iter().collect();
        assert_eq!(unique.len(), state.collection().len());
    }

    #[test]
    fn remove_three_then_view_reports_not_found() {
        let mut state = seeded();
        let removed = state.remove(&RecordId(3)).unwrap();
        assert_eq!(removed.name, "StartupXYZ");
        assert_eq!(state.collection().len(), 5);
        assert!(!state.collection().contains(&RecordId(3)));

        let err = state.view(&RecordId(3)).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err, ListError::NotFound("3".into()));
    }

    #[test]
    fn remove_and_update_unknown_id_are_not_found() {
        let mut state = seeded();
        assert!(state.remove(&RecordId(99)).unwrap_err().is_not_found());
        assert!(state
            .update(&RecordId(99), &ClientPatch::default())
            .unwrap_err()
            .is_not_found());
        assert_eq!(state.collection().len(), 6);
    }

    #[test]
    fn update_is_idempotent() {
        let mut state = seeded();
        let patch = ClientPatch {
            name: Some("TechCorp International".into()),
            industry: Some(Industry::Enterprise),
            ..ClientPatch::default()
        };

        let once = state.update(&RecordId(1), &patch).unwrap().clone();
        let twice = state.update(&RecordId(1), &patch).unwrap().clone();
        assert_eq!(once, twice);
        assert_eq!(twice.name, "TechCorp International");
        assert_eq!(twice.email, "contact@techcorp.com");
    }

    #[test]
    fn update_cannot_blank_required_field() {
        let mut state = seeded();
        let patch = ClientPatch {
            name: Some("".into()),
            ..ClientPatch::default()
        };
        assert_eq!(
            state.update(&RecordId(1), &patch).unwrap_err(),
            ListError::MissingField("name")
        );
        assert_eq!(state.view(&RecordId(1)).unwrap().name, "TechCorp Inc.");
    }

    #[test]
    fn view_does_not_mutate() {
        let state = seeded();
        let before = state.view(&RecordId(4)).unwrap().clone();
        let again = state.view(&RecordId(4)).unwrap();
        assert_eq!(&before, again);
        assert_eq!(RecordId::from_string("4").unwrap(), before.id);
    }
}
