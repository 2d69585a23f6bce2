//! List-management contract: an ordered collection of records with a search
//! string and a facet filter, plus the derived view pages render.

pub mod collection;
pub mod error;
pub mod filter;
pub mod state;

pub use collection::Collection;
pub use error::ListError;
pub use filter::{derive_view, ListFilter};
pub use state::ListState;
