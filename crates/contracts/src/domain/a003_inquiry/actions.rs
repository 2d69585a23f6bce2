use crate::domain::common::RecordId;
use crate::shared::list::{Collection, ListError};

use super::aggregate::{Inquiry, InquiryStatus};

/// Status actions of the Contacts page. They act on the page's own collection only.
impl Collection<Inquiry> {
    /// Record `message` as sent and mark the inquiry responded.
    pub fn reply(&mut self, id: &RecordId, message: &str) -> Result<&Inquiry, ListError> {
        let message = message.trim();
        if message.is_empty() {
            return Err(ListError::MissingField("message"));
        }
        let inquiry = self.get_mut(id)?;
        inquiry.replies.push(message.to_string());
        inquiry.status = InquiryStatus::Responded;
        Ok(inquiry)
    }

    pub fn archive(&mut self, id: &RecordId) -> Result<&Inquiry, ListError> {
        let inquiry = self.get_mut(id)?;
        inquiry.status = InquiryStatus::Closed;
        Ok(inquiry)
    }

    /// Close every inquiry. Returns how many changed status.
    pub fn archive_all(&mut self) -> usize {
        self.set_status_where(|_| true, InquiryStatus::Closed)
    }

    /// Mark every open inquiry responded. Returns how many changed.
    pub fn bulk_reply(&mut self) -> usize {
        self.set_status_where(|i| i.status.is_open(), InquiryStatus::Responded)
    }

    /// Flip the star flag; returns the new value.
    pub fn toggle_star(&mut self, id: &RecordId) -> Result<bool, ListError> {
        let inquiry = self.get_mut(id)?;
        inquiry.starred = !inquiry.starred;
        Ok(inquiry.starred)
    }

    fn set_status_where(
        &mut self,
        predicate: impl Fn(&Inquiry) -> bool,
        status: InquiryStatus,
    ) -> usize {
        let ids: Vec<RecordId> = self
            .iter()
            .filter(|i| i.status != status && predicate(i))
            .map(|i| i.id)
            .collect();
        for id in &ids {
            if let Ok(inquiry) = self.get_mut(id) {
                inquiry.status = status;
            }
        }
        ids.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_inquiry::{seed_inquiries, InquiryCounts};
    use crate::shared::list::ListState;

    fn seeded() -> Collection<Inquiry> {
        Collection::from_records(seed_inquiries())
    }

    #[test]
    fn reply_marks_responded_and_keeps_text() {
        let mut inquiries = seeded();
        let inquiry = inquiries
            .reply(&RecordId(1), "  We can start next week.  ")
            .unwrap();
        assert_eq!(inquiry.status, InquiryStatus::Responded);
        assert_eq!(inquiry.replies, vec!["We can start next week.".to_string()]);
    }

    #[test]
    fn empty_reply_is_rejected_and_nothing_changes() {
        let mut inquiries = seeded();
        assert_eq!(
            inquiries.reply(&RecordId(1), "   ").unwrap_err(),
            ListError::MissingField("message")
        );
        assert_eq!(inquiries.get(&RecordId(1)).unwrap().status, InquiryStatus::New);
    }

    #[test]
    fn actions_on_unknown_id_are_not_found() {
        let mut inquiries = seeded();
        assert!(inquiries.reply(&RecordId(42), "hi").unwrap_err().is_not_found());
        assert!(inquiries.archive(&RecordId(42)).unwrap_err().is_not_found());
        assert!(inquiries.toggle_star(&RecordId(42)).unwrap_err().is_not_found());
    }

    #[test]
    fn bulk_reply_touches_only_open_inquiries() {
        let mut inquiries = seeded();
        // seed: 2 new, 2 in-progress, 1 responded, 1 closed
        assert_eq!(inquiries.bulk_reply(), 4);
        let counts = InquiryCounts::of(inquiries.iter());
        assert_eq!(counts.responded, 5);
        assert_eq!(counts.closed, 1);
        assert_eq!(inquiries.bulk_reply(), 0);
    }

    #[test]
    fn archive_all_counts_changes() {
        let mut inquiries = seeded();
        assert_eq!(inquiries.archive_all(), 5);
        assert!(inquiries.iter().all(|i| i.status == InquiryStatus::Closed));
    }

    #[test]
    fn toggle_star_flips() {
        let mut inquiries = seeded();
        assert_eq!(inquiries.toggle_star(&RecordId(2)), Ok(true));
        assert_eq!(inquiries.toggle_star(&RecordId(2)), Ok(false));
    }

    #[test]
    fn status_tabs_filter_and_count() {
        let mut state = ListState::from_records(seed_inquiries());
        let counts = InquiryCounts::of(state.collection().iter());
        assert_eq!(counts.all, 6);
        assert_eq!(counts.for_key("new"), 2);
        assert_eq!(counts.for_key("in-progress"), 2);
        assert_eq!(counts.for_key("all"), 6);

        state.set_filter("in-progress").unwrap();
        let names: Vec<&str> = state.visible().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Michael Chen", "James Wilson"]);

        state.set_filter("all").unwrap();
        state.set_search_term("SECURITY");
        let names: Vec<&str> = state.visible().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Emily Rodriguez", "James Wilson"]);
    }
}
