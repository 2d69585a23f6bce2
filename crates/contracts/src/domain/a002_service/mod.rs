pub mod aggregate;

pub use aggregate::{OneOrMany, Service, ServiceDraft, ServiceIcon, ServiceId, ServicePatch};
