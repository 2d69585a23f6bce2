use crate::shared::icons::icon;
use contracts::dashboards::d400_overview::Trend;
use leptos::prelude::*;

/// Group digits with commas: 12450 -> "12,450"
pub fn format_count(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Counter card used by the dashboard and the analytics page
#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    title: String,
    /// Already formatted value
    #[prop(into)]
    value: String,
    /// Change text next to the trend arrow ("+12", "+0%")
    #[prop(into)]
    change: String,
    trend: Trend,
    /// Icon name from the icon() helper
    #[prop(into)]
    icon_name: String,
    /// primary | error | warning | success
    #[prop(optional, into)]
    color: Option<String>,
    /// Optional caption below the value
    #[prop(optional, into)]
    subtitle: Option<String>,
) -> impl IntoView {
    let card_class = format!(
        "stat-card stat-card--{}",
        color.unwrap_or_else(|| "primary".to_string())
    );
    let (arrow, change_class) = match trend {
        Trend::Up => ("trending-up", "stat-card__change stat-card__change--up"),
        Trend::Down => ("trending-down", "stat-card__change stat-card__change--down"),
    };

    view! {
        <div class=card_class>
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{title}</div>
                <div class="stat-card__value">{value}</div>
                <span class=change_class>
                    {icon(arrow)}
                    {change}
                </span>
                {subtitle.map(|s| view! { <div class="stat-card__subtitle">{s}</div> })}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(12_450), "12,450");
        assert_eq!(format_count(1_000_000), "1,000,000");
    }
}
