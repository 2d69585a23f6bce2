use serde::Serialize;

use crate::dashboards::d400_overview::Trend;
use crate::shared::money::format_usd;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeyMetric {
    pub title: &'static str,
    pub value: &'static str,
    pub trend: Trend,
    pub description: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceMetric {
    pub name: &'static str,
    pub clients: u32,
    /// Revenue in cents
    pub revenue: u64,
    pub growth: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthActivity {
    pub month: &'static str,
    pub clients: u32,
    /// Revenue in cents
    pub revenue: u64,
}

/// Share of the client base in one company-size segment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientSegment {
    pub name: &'static str,
    pub share_percent: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthCheck {
    pub name: &'static str,
    pub status: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinancialSummary {
    /// Cents
    pub monthly_revenue: u64,
    /// Cents
    pub ytd_revenue: u64,
    pub profit_margin: &'static str,
    pub growth_rate: &'static str,
}

/// One labelled line of the financial summary card
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryLine {
    pub label: &'static str,
    pub value: String,
    /// Shown in the success colour
    pub positive: bool,
}

impl FinancialSummary {
    pub fn lines(&self) -> Vec<SummaryLine> {
        vec![
            SummaryLine {
                label: "Monthly Revenue",
                value: format_usd(self.monthly_revenue),
                positive: false,
            },
            SummaryLine {
                label: "YTD Revenue",
                value: format_usd(self.ytd_revenue),
                positive: false,
            },
            SummaryLine {
                label: "Profit Margin",
                value: self.profit_margin.to_string(),
                positive: true,
            },
            SummaryLine {
                label: "Growth Rate",
                value: self.growth_rate.to_string(),
                positive: true,
            },
        ]
    }
}

pub fn key_metrics() -> Vec<KeyMetric> {
    vec![
        KeyMetric {
            title: "Revenue Growth",
            value: "+23.5%",
            trend: Trend::Up,
            description: "vs last month",
            icon: "trending-up",
        },
        KeyMetric {
            title: "Client Satisfaction",
            value: "94.2%",
            trend: Trend::Up,
            description: "Average rating",
            icon: "users",
        },
        KeyMetric {
            title: "Service Uptime",
            value: "99.8%",
            trend: Trend::Up,
            description: "This month",
            icon: "server",
        },
        KeyMetric {
            title: "Response Time",
            value: "2.3 hrs",
            trend: Trend::Down,
            description: "Average",
            icon: "activity",
        },
    ]
}

pub fn service_metrics() -> Vec<ServiceMetric> {
    [
        ("Cloud Infrastructure", 45, 13_455, "+12%"),
        ("Cybersecurity Suite", 32, 6_368, "+8%"),
        ("IT Support", 67, 6_633, "+15%"),
        ("Network Management", 28, 4_172, "+5%"),
        ("Database Management", 18, 4_662, "+18%"),
    ]
    .into_iter()
    .map(|(name, clients, dollars, growth)| ServiceMetric {
        name,
        clients,
        revenue: dollars * 100,
        growth,
    })
    .collect()
}

/// Monthly clients and revenue, July to December.
pub fn client_activity() -> Vec<MonthActivity> {
    [
        ("Jul", 85, 28_000),
        ("Aug", 92, 31_000),
        ("Sep", 88, 29_500),
        ("Oct", 105, 35_000),
        ("Nov", 118, 42_000),
        ("Dec", 125, 48_000),
    ]
    .into_iter()
    .map(|(month, clients, dollars)| MonthActivity {
        month,
        clients,
        revenue: dollars * 100,
    })
    .collect()
}

pub fn client_distribution() -> Vec<ClientSegment> {
    [("Enterprise", 45), ("SMB", 35), ("Startup", 20)]
        .into_iter()
        .map(|(name, share_percent)| ClientSegment {
            name,
            share_percent,
        })
        .collect()
}

pub fn system_health() -> Vec<HealthCheck> {
    [
        ("Server Uptime", "99.9%"),
        ("Response Time", "Fast"),
        ("Security Status", "Secure"),
        ("Backup Status", "Current"),
    ]
    .into_iter()
    .map(|(name, status)| HealthCheck { name, status })
    .collect()
}

pub fn financial_summary() -> FinancialSummary {
    FinancialSummary {
        monthly_revenue: 4_823_000,
        ytd_revenue: 42_565_000,
        profit_margin: "34.2%",
        growth_rate: "+18.5%",
    }
}

/// Width of a bar in percent of the largest value of its series.
pub fn bar_percent(value: u64, max: u64) -> u32 {
    if max == 0 {
        return 0;
    }
    let pct = (value.min(max) as f64 / max as f64 * 100.0).round();
    pct as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bars_scale_to_series_maximum() {
        let months = client_activity();
        let max = months.iter().map(|m| m.revenue).max().unwrap_or(0);
        let widths: Vec<u32> = months.iter().map(|m| bar_percent(m.revenue, max)).collect();
        assert_eq!(widths.last(), Some(&100));
        assert_eq!(widths[0], 58);
        assert!(widths.iter().all(|w| *w <= 100));
    }

    #[test]
    fn bar_of_empty_series_is_zero() {
        assert_eq!(bar_percent(10, 0), 0);
        assert_eq!(bar_percent(0, 10), 0);
    }

    #[test]
    fn static_tables_have_expected_shape() {
        assert_eq!(key_metrics().len(), 4);
        assert_eq!(key_metrics()[3].trend, Trend::Down);
        let services = service_metrics();
        assert_eq!(services.len(), 5);
        assert_eq!(services[2].name, "IT Support");
        assert_eq!(services[2].revenue, 663_300);
    }

    #[test]
    fn client_segments_cover_the_whole_base() {
        let segments = client_distribution();
        let names: Vec<&str> = segments.iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["Enterprise", "SMB", "Startup"]);
        assert_eq!(segments.iter().map(|s| s.share_percent).sum::<u32>(), 100);
    }

    #[test]
    fn health_checks_in_display_order() {
        let checks = system_health();
        assert_eq!(checks.len(), 4);
        assert_eq!(checks[0].status, "99.9%");
        assert_eq!(checks[3].name, "Backup Status");
    }

    #[test]
    fn financial_summary_lines() {
        let lines = financial_summary().lines();
        let values: Vec<&str> = lines.iter().map(|l| l.value.as_str()).collect();
        assert_eq!(values, vec!["$48,230", "$425,650", "34.2%", "+18.5%"]);
        assert!(!lines[0].positive);
        assert!(lines[3].positive);
    }
}
