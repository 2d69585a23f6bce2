//! Common types and traits for all list records

pub mod facet;
pub mod list_record;
pub mod record_key;

// Re-exports
pub use facet::Facet;
pub use list_record::{require, ListRecord, RecordDraft};
pub use record_key::{RecordId, RecordKey};
