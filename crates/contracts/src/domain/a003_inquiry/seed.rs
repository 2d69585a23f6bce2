use chrono::{DateTime, Utc};

use super::aggregate::{Inquiry, InquiryPriority, InquiryStatus};
use crate::domain::common::RecordId;

struct Row {
    id: u64,
    name: &'static str,
    email: &'static str,
    phone: &'static str,
    company: &'static str,
    subject: &'static str,
    message: &'static str,
    priority: InquiryPriority,
    status: InquiryStatus,
    created_at: &'static str,
    category: &'static str,
}

const ROWS: &[Row] = &[
    Row {
        id: 1,
        name: "Sarah Johnson",
        email: "sarah.johnson@example.com",
        phone: "+1 (555) 123-4567",
        company: "Digital Innovations",
        subject: "Cloud Migration Services",
        message: "We're looking to migrate our current infrastructure to the cloud. Can you provide a consultation and quote?",
        priority: InquiryPriority::High,
        status: InquiryStatus::New,
        created_at: "2023-12-20T10:30:00Z",
        category: "Cloud Services",
    },
    Row {
        id: 2,
        name: "Michael Chen",
        email: "m.chen@techstart.io",
        phone: "+1 (555) 234-5678",
        company: "TechStart Solutions",
        subject: "IT Support Package",
        message: "Our startup needs ongoing IT support. What packages do you offer for small businesses?",
        priority: InquiryPriority::Medium,
        status: InquiryStatus::InProgress,
        created_at: "2023-12-19T14:20:00Z",
        category: "Support",
    },
    Row {
        id: 3,
        name: "Emily Rodriguez",
        email: "emily.r@globalcorp.com",
        phone: "+1 (555) 345-6789",
        company: "GlobalCorp Enterprise",
        subject: "Security Audit Request",
        message: "We need a comprehensive security audit for our enterprise systems. Please provide timeline and pricing.",
        priority: InquiryPriority::High,
        status: InquiryStatus::Responded,
        created_at: "2023-12-18T16:45:00Z",
        category: "Security",
    },
    Row {
        id: 4,
        name: "David Park",
        email: "david@innovatetech.com",
        phone: "+1 (555) 456-7890",
        company: "InnovateTech Labs",
        subject: "Database Management",
        message: "Looking for managed database services for our research platform. Do you handle PostgreSQL and MongoDB?",
        priority: InquiryPriority::Medium,
        status: InquiryStatus::New,
        created_at: "2023-12-17T11:15:00Z",
        category: "Database",
    },
    Row {
        id: 5,
        name: "Lisa Thompson",
        email: "lisa.thompson@retailplus.com",
        phone: "+1 (555) 567-8901",
        company: "RetailPlus Inc.",
        subject: "Network Infrastructure",
        message: "We're expanding to 5 new locations and need network setup. Can you handle multi-site deployments?",
        priority: InquiryPriority::Low,
        status: InquiryStatus::Closed,
        created_at: "2023-12-16T09:30:00Z",
        category: "Networking",
    },
    Row {
        id: 6,
        name: "James Wilson",
        email: "j.wilson@manufacorp.com",
        phone: "+1 (555) 678-9012",
        company: "ManufaCorp",
        subject: "Cybersecurity Consultation",
        message: "Recent security incidents have made us realize we need better protection. Can we schedule a consultation?",
        priority: InquiryPriority::High,
        status: InquiryStatus::InProgress,
        created_at: "2023-12-15T13:20:00Z",
        category: "Security",
    },
];

/// Demo inbox the Contacts page and the dev server start with.
pub fn seed_inquiries() -> Vec<Inquiry> {
    ROWS.iter()
        .filter_map(|row| {
            let created_at = DateTime::parse_from_rfc3339(row.created_at)
                .ok()?
                .with_timezone(&Utc);
            Some(Inquiry {
                id: RecordId(row.id),
                name: row.name.to_string(),
                email: row.email.to_string(),
                phone: row.phone.to_string(),
                company: row.company.to_string(),
                subject: row.subject.to_string(),
                message: row.message.to_string(),
                priority: row.priority,
                status: row.status,
                category: row.category.to_string(),
                starred: false,
                replies: Vec::new(),
                created_at,
            })
        })
        .collect()
}
