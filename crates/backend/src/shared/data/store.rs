use std::sync::Arc;

use contracts::domain::a001_client::{seed_clients, Client};
use contracts::domain::a002_service::Service;
use contracts::domain::a003_inquiry::{seed_inquiries, Inquiry};
use contracts::shared::list::Collection;
use tokio::sync::RwLock;

use crate::shared::config::Config;
use crate::system::auth::AuthKeys;

/// In-memory record collections of the development server.
///
/// Every collection sits behind its own lock, so a slow writer on one list
/// never blocks readers of another.
#[derive(Debug, Default)]
pub struct Store {
    pub clients: RwLock<Collection<Client>>,
    pub services: RwLock<Collection<Service>>,
    pub inquiries: RwLock<Collection<Inquiry>>,
}

impl Store {
    pub fn new(clients: Vec<Client>, services: Vec<Service>, inquiries: Vec<Inquiry>) -> Self {
        Self {
            clients: RwLock::new(Collection::from_records(clients)),
            services: RwLock::new(Collection::from_records(services)),
            inquiries: RwLock::new(Collection::from_records(inquiries)),
        }
    }

    /// Demo data the console shows on first start.
    pub fn seeded() -> Self {
        Self::new(
            seed_clients(),
            crate::domain::a002_service::repository::initial_services(),
            seed_inquiries(),
        )
    }
}

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub auth: Arc<AuthKeys>,
    pub store: Arc<Store>,
}

impl AppState {
    pub fn new(config: Config, auth: AuthKeys, store: Store) -> Self {
        Self {
            config: Arc::new(config),
            auth: Arc::new(auth),
            store: Arc::new(store),
        }
    }
}
