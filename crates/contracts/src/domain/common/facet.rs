use std::fmt::Debug;

/// Closed set of values a list can be filtered by (industry, status, icon kind...).
///
/// `key` is the wire/URL form, `label` is what the UI shows.
pub trait Facet: Copy + Eq + Debug + 'static {
    /// Every admissible value, in display order.
    const ALL: &'static [Self];

    fn key(&self) -> &'static str;

    fn label(&self) -> &'static str;

    fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.key() == key)
    }
}
