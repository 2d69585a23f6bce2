use crate::domain::common::{Facet, ListRecord};

use super::ListError;

/// Sentinel accepted by [`ListFilter::parse`] meaning "no restriction".
pub const ALL_KEY: &str = "all";

/// Active facet restriction of a list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListFilter<F> {
    #[default]
    All,
    Only(F),
}

impl<F: Facet> ListFilter<F> {
    /// Accepts `"all"` or one of `F::ALL` keys; anything else is rejected.
    pub fn parse(key: &str) -> Result<Self, ListError> {
        if key == ALL_KEY {
            return Ok(ListFilter::All);
        }
        F::from_key(key)
            .map(ListFilter::Only)
            .ok_or_else(|| ListError::UnknownFilter(key.to_string()))
    }

    pub fn key(&self) -> &'static str {
        match self {
            ListFilter::All => ALL_KEY,
            ListFilter::Only(f) => f.key(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ListFilter::All => "All",
            ListFilter::Only(f) => f.label(),
        }
    }

    pub fn admits(&self, value: &F) -> bool {
        match self {
            ListFilter::All => true,
            ListFilter::Only(f) => f == value,
        }
    }

    /// `All` followed by every facet value, the order filter tabs are shown in.
    pub fn choices() -> Vec<Self> {
        std::iter::once(ListFilter::All)
            .chain(F::ALL.iter().copied().map(ListFilter::Only))
            .collect()
    }
}

/// Visible subset of `items`: facet admitted by `filter` AND `search` found in a
/// searchable field. Keeps the order of `items`; never mutates them.
pub fn derive_view<'a, T: ListRecord>(
    items: &'a [T],
    search: &str,
    filter: &ListFilter<T::Facet>,
) -> Vec<&'a T> {
    let needle = search.to_lowercase();
    items
        .iter()
        .filter(|item| filter.admits(&item.facet()))
        .filter(|item| item.matches_search(&needle))
        .collect()
}
