//! Data access for list pages: one [`RecordSource`] interface, an in-memory and an
//! HTTP implementation.

pub mod http;
pub mod memory;
pub mod source;

pub use http::HttpSource;
pub use memory::MemorySource;
pub use source::{RecordSource, SourceError};
