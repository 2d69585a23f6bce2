pub mod cards;
pub mod dto;

pub use cards::{stat_cards, CardColor, StatCardData, Trend};
pub use dto::{
    parse_stats_response, DashboardStats, DashboardStatsResponse, MessageStats, ProjectStats,
};
