pub mod aggregate;
pub mod seed;

pub use aggregate::{Client, ClientDraft, ClientPatch, ClientStatus, ClientSummary, Industry};
pub use seed::seed_clients;
