use serde::{Deserialize, Serialize};

use crate::shared::fetch_state::failure_text;

/// Response of `GET /api/dashboard/stats`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStatsResponse {
    pub data: DashboardStats,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DashboardStats {
    pub projects: ProjectStats,
    /// Number of services offered
    pub services: u64,
    pub messages: MessageStats,
    pub team: u64,
    pub blogs: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectStats {
    pub total: u64,
    pub pending: u64,
    pub last7_days: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageStats {
    pub last7_days: u64,
}

/// Map the stats endpoint's answer (status code and raw body) to the counters or
/// to the message shown in place of the cards
pub fn parse_stats_response(status: u16, body: &str) -> Result<DashboardStats, String> {
    if !(200..300).contains(&status) {
        return Err(failure_text(status, body, "Failed to fetch dashboard stats"));
    }
    serde_json::from_str::<DashboardStatsResponse>(body)
        .map(|response| response.data)
        .map_err(|e| format!("Failed to parse response: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::fetch_state::FetchState;

    const OK_BODY: &str = r#"{"data":{"projects":{"total":12,"pending":3,"last7Days":2},"services":6,"messages":{"last7Days":4},"team":8,"blogs":5}}"#;

    fn settle(status: u16, body: &str) -> FetchState<DashboardStats> {
        let mut state = FetchState::Loading;
        state.resolve(parse_stats_response(status, body));
        state
    }

    #[test]
    fn ok_answer_becomes_ready() {
        let state = settle(200, OK_BODY);
        assert_eq!(state.value().map(|s| s.projects.total), Some(12));
    }

    #[test]
    fn server_error_with_message_fails_with_it() {
        let state = settle(500, r#"{"message":"Database unavailable"}"#);
        assert_eq!(state.error(), Some("Database unavailable"));
    }

    #[test]
    fn server_error_without_body_fails_with_status() {
        let state = settle(500, "");
        assert_eq!(state.error(), Some("Failed to fetch dashboard stats: 500"));
    }

    #[test]
    fn malformed_ok_body_fails() {
        let state = settle(200, r#"{"data":{"projects":{"total":"many"}}}"#);
        let message = state.error().unwrap();
        assert!(message.starts_with("Failed to parse response"));
    }

    #[test]
    fn parses_wire_body() {
        let parsed: DashboardStatsResponse = serde_json::from_str(OK_BODY).unwrap();
        assert_eq!(parsed.data.projects.last7_days, 2);
        assert_eq!(parsed.data.messages.last7_days, 4);
        assert_eq!(parsed.data.blogs, 5);
    }

    #[test]
    fn malformed_body_is_an_error() {
        let body = r#"{"data":{"projects":{"total":"many"}}}"#;
        assert!(serde_json::from_str::<DashboardStatsResponse>(body).is_err());
    }
}
