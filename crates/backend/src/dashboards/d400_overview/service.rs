use chrono::{DateTime, Duration, Utc};
use contracts::dashboards::d400_overview::{DashboardStats, MessageStats, ProjectStats};
use contracts::domain::a001_client::ClientStatus;

use crate::shared::config::DashboardConfig;
use crate::shared::data::Store;

const RECENT_DAYS: i64 = 7;

/// Counters for the dashboard cards, computed at `now`.
///
/// Clients stand in for projects: every client is one project, pending
/// clients are pending projects.
pub async fn get_stats(store: &Store, dashboard: &DashboardConfig, now: DateTime<Utc>) -> DashboardStats {
    let since = now - Duration::days(RECENT_DAYS);

    let projects = {
        let clients = store.clients.read().await;
        ProjectStats {
            total: clients.len() as u64,
            pending: clients
                .iter()
                .filter(|c| c.status == ClientStatus::Pending)
                .count() as u64,
            last7_days: clients.iter().filter(|c| c.created_at >= since).count() as u64,
        }
    };

    let services = store.services.read().await.len() as u64;

    let messages = MessageStats {
        last7_days: store
            .inquiries
            .read()
            .await
            .iter()
            .filter(|i| i.created_at >= since)
            .count() as u64,
    };

    DashboardStats {
        projects,
        services,
        messages,
        team: dashboard.team,
        blogs: dashboard.blogs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_client::ClientDraft;

    #[tokio::test]
    async fn test_stats_from_seed() {
        let store = Store::seeded();
        let dashboard = DashboardConfig { team: 8, blogs: 5 };
        let stats = get_stats(&store, &dashboard, Utc::now()).await;

        assert_eq!(stats.projects.total, 6);
        assert_eq!(stats.projects.pending, 1);
        // seed data is dated 2022-2023
        assert_eq!(stats.projects.last7_days, 0);
        assert_eq!(stats.messages.last7_days, 0);
        assert_eq!(stats.services, 6);
        assert_eq!((stats.team, stats.blogs), (8, 5));
    }

    #[tokio::test]
    async fn test_recent_clients_counted() {
        let store = Store::seeded();
        store
            .clients
            .write()
            .await
            .insert(
                ClientDraft {
                    name: "Fresh Co".into(),
                    email: "hi@fresh.co".into(),
                    ..ClientDraft::default()
                },
                Utc::now(),
            )
            .unwrap();

        let stats = get_stats(&store, &DashboardConfig::default(), Utc::now()).await;
        assert_eq!(stats.projects.total, 7);
        assert_eq!(stats.projects.last7_days, 1);
    }
}
