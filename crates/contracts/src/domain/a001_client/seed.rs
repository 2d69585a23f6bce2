use chrono::{NaiveDate, TimeZone, Utc};

use super::aggregate::{Client, ClientStatus, Industry};
use crate::domain::common::RecordId;

struct Row {
    id: u64,
    name: &'static str,
    email: &'static str,
    phone: &'static str,
    location: &'static str,
    joined: (i32, u32, u32),
    total_spent_dollars: u64,
    services: &'static [&'static str],
    status: ClientStatus,
    industry: Industry,
}

const ROWS: &[Row] = &[
    Row {
        id: 1,
        name: "TechCorp Inc.",
        email: "contact@techcorp.com",
        phone: "+1 (555) 123-4567",
        location: "New York, NY",
        joined: (2023, 1, 15),
        total_spent_dollars: 12_450,
        services: &["Cloud Infrastructure", "Cybersecurity"],
        status: ClientStatus::Active,
        industry: Industry::Technology,
    },
    Row {
        id: 2,
        name: "Innovation Labs",
        email: "hello@innovationlabs.io",
        phone: "+1 (555) 234-5678",
        location: "San Francisco, CA",
        joined: (2023, 3, 22),
        total_spent_dollars: 8_920,
        services: &["IT Support", "Network Management"],
        status: ClientStatus::Active,
        industry: Industry::Research,
    },
    Row {
        id: 3,
        name: "StartupXYZ",
        email: "team@startupxyz.com",
        phone: "+1 (555) 345-6789",
        location: "Austin, TX",
        joined: (2023, 6, 10),
        total_spent_dollars: 5_670,
        services: &["Cloud Infrastructure"],
        status: ClientStatus::Pending,
        industry: Industry::Startup,
    },
    Row {
        id: 4,
        name: "MegaCorp Ltd.",
        email: "it@megacorp.com",
        phone: "+1 (555) 456-7890",
        location: "Chicago, IL",
        joined: (2022, 11, 8),
        total_spent_dollars: 25_890,
        services: &["Cybersecurity", "Database Management", "IT Support"],
        status: ClientStatus::Active,
        industry: Industry::Enterprise,
    },
    Row {
        id: 5,
        name: "Global Systems",
        email: "admin@globalsys.com",
        phone: "+1 (555) 567-8901",
        location: "Seattle, WA",
        joined: (2023, 2, 14),
        total_spent_dollars: 18_340,
        services: &["Network Management", "Cloud Infrastructure"],
        status: ClientStatus::Active,
        industry: Industry::Consulting,
    },
    Row {
        id: 6,
        name: "Enterprise Corp",
        email: "support@enterprise.com",
        phone: "+1 (555) 678-9012",
        location: "Boston, MA",
        joined: (2023, 4, 30),
        total_spent_dollars: 9_760,
        services: &["IT Support"],
        status: ClientStatus::Inactive,
        industry: Industry::Manufacturing,
    },
];

/// Demo client book the Clients page and the dev server start with.
pub fn seed_clients() -> Vec<Client> {
    ROWS.iter()
        .filter_map(|row| {
            let (y, m, d) = row.joined;
            let join_date = NaiveDate::from_ymd_opt(y, m, d)?;
            let created_at = Utc
                .from_utc_datetime(&join_date.and_hms_opt(9, 0, 0)?);
            Some(Client {
                id: RecordId(row.id),
                name: row.name.to_string(),
                email: row.email.to_string(),
                phone: row.phone.to_string(),
                location: row.location.to_string(),
                join_date,
                total_spent: row.total_spent_dollars * 100,
                services: row.services.iter().map(|s| s.to_string()).collect(),
                status: row.status,
                industry: row.industry,
                created_at,
            })
        })
        .collect()
}
