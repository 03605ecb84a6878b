use serde::{Deserialize, Serialize};

/// Number of recent-activity entries shown on the dashboard.
pub const RECENT_ACTIVITY_LIMIT: usize = 5;

/// Aggregate summary returned by the platform's overview endpoint.
///
/// The record is received wholesale and never mutated; a new fetch replaces
/// it entirely. Every counter is optional: an absent counter means the
/// corresponding stat card is not shown. Defaults for nested fields are
/// applied here, at the deserialization boundary, so render code never has
/// to reach through missing data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardOverview {
    pub total_resumes: Option<u64>,
    pub total_jobs: Option<u64>,
    pub total_hiring_processes: Option<u64>,
    pub total_meetings: Option<u64>,
    pub total_applications: Option<u64>,
    pub statistics: Option<Statistics>,
    #[serde(default)]
    pub recent_activity: Vec<ActivityEntry>,
    pub ai_insights: Option<AiInsights>,
}

/// Nested application-pipeline counters.
///
/// Sub-fields missing from the payload default to 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    #[serde(default)]
    pub active_applications: u64,
    #[serde(default)]
    pub interviews_scheduled: u64,
    #[serde(default)]
    pub offers_extended: u64,
    #[serde(default)]
    pub hires_this_month: u64,
}

/// One entry of the recent-activity feed, display-ordered as received.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub title: String,
    pub timestamp: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: String,
    pub status: Option<String>,
}

/// Optional AI-generated commentary on the pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AiInsights {
    pub summary: String,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

impl DashboardOverview {
    /// Labeled counters for the stat-card grid, in display order.
    /// Absent counters are omitted, hiding exactly their card.
    pub fn stat_cards(&self) -> Vec<(&'static str, u64)> {
        [
            ("Resumes", self.total_resumes),
            ("Jobs", self.total_jobs),
            ("Hiring Processes", self.total_hiring_processes),
            ("Meetings", self.total_meetings),
            ("Applications", self.total_applications),
        ]
        .into_iter()
        .filter_map(|(label, value)| value.map(|v| (label, v)))
        .collect()
    }

    /// The first [`RECENT_ACTIVITY_LIMIT`] activity entries in received
    /// order. No client-side re-sorting.
    pub fn recent_activity_capped(&self) -> &[ActivityEntry] {
        let limit = self.recent_activity.len().min(RECENT_ACTIVITY_LIMIT);
        &self.recent_activity[..limit]
    }

    pub fn has_recent_activity(&self) -> bool {
        !self.recent_activity.is_empty()
    }
}
