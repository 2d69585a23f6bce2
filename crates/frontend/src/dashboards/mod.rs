pub mod d400_overview;
pub mod d401_analytics;

pub use d400_overview::ui::dashboard::OverviewDashboard;
pub use d401_analytics::ui::dashboard::AnalyticsDashboard;
