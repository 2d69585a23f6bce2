use serde::{Deserialize, Serialize};

use super::dto::DashboardStats;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

/// Accent of a stat card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardColor {
    Primary,
    Error,
    Warning,
    Success,
}

impl CardColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardColor::Primary => "primary",
            CardColor::Error => "error",
            CardColor::Warning => "warning",
            CardColor::Success => "success",
        }
    }
}

/// One counter card on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatCardData {
    pub title: &'static str,
    pub value: u64,
    pub change: String,
    pub trend: Trend,
    /// Icon name understood by the frontend icon helper
    pub icon: &'static str,
    pub color: CardColor,
}

fn card(
    title: &'static str,
    value: u64,
    change: impl Into<String>,
    trend: Trend,
    icon: &'static str,
    color: CardColor,
) -> StatCardData {
    StatCardData {
        title,
        value,
        change: change.into(),
        trend,
        icon,
        color,
    }
}

/// Map the stats payload to the fixed, ordered list of dashboard cards.
pub fn stat_cards(stats: &DashboardStats) -> Vec<StatCardData> {
    let pending = stats.projects.pending;
    let (pending_change, pending_trend) = if pending > 0 {
        ("+%", Trend::Up)
    } else {
        ("-%", Trend::Down)
    };

    vec![
        card(
            "Total Projects",
            stats.projects.total,
            format!("+{}", stats.projects.last7_days),
            Trend::Up,
            "server",
            CardColor::Primary,
        ),
        card(
            "Pending Projects",
            pending,
            pending_change,
            pending_trend,
            "alert-circle",
            CardColor::Error,
        ),
        card(
            "Total Services",
            stats.services,
            "+0%",
            Trend::Up,
            "dollar-sign",
            CardColor::Warning,
        ),
        card(
            "Messages (7 days)",
            stats.messages.last7_days,
            "+0%",
            Trend::Up,
            "message-square",
            CardColor::Success,
        ),
        card("Team Members", stats.team, "+0%", Trend::Up, "users", CardColor::Primary),
        card("Blogs", stats.blogs, "+0%", Trend::Up, "activity", CardColor::Primary),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d400_overview::dto::{MessageStats, ProjectStats};

    fn stats(pending: u64) -> DashboardStats {
        DashboardStats {
            projects: ProjectStats {
                total: 12,
                pending,
                last7_days: 2,
            },
            services: 6,
            messages: MessageStats { last7_days: 4 },
            team: 8,
            blogs: 5,
        }
    }

    #[test]
    fn maps_every_counter_in_order() {
        let cards = stat_cards(&stats(3));
        let titles: Vec<&str> = cards.iter().map(|c| c.title).collect();
        assert_eq!(
            titles,
            vec![
                "Total Projects",
                "Pending Projects",
                "Total Services",
                "Messages (7 days)",
                "Team Members",
                "Blogs"
            ]
        );
        let values: Vec<u64> = cards.iter().map(|c| c.value).collect();
        assert_eq!(values, vec![12, 3, 6, 4, 8, 5]);
        assert_eq!(cards[0].change, "+2");
        assert_eq!(cards[1].change, "+%");
        assert_eq!(cards[1].trend, Trend::Up);
        assert_eq!(cards[1].color, CardColor::Error);
        assert_eq!(cards[3].icon, "message-square");
    }

    #[test]
    fn no_pending_projects_trends_down() {
        let cards = stat_cards(&stats(0));
        assert_eq!(cards[1].change, "-%");
        assert_eq!(cards[1].trend, Trend::Down);
    }
}
