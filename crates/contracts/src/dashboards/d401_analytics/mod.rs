pub mod data;

pub use data::{
    bar_percent, client_activity, client_distribution, financial_summary, key_metrics,
    service_metrics, system_health, ClientSegment, FinancialSummary, HealthCheck, KeyMetric,
    MonthActivity, ServiceMetric, SummaryLine,
};
