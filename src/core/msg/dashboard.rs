use serde::{Deserialize, Serialize};

use crate::domain::overview::DashboardOverview;

/// Messages for the dashboard load lifecycle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DashboardMsg {
    /// Entering the dashboard view; issues exactly one fetch.
    Load,
    /// The fetch for `generation` resolved with a record.
    Loaded {
        generation: u64,
        overview: Box<DashboardOverview>,
    },
    /// The fetch for `generation` failed. All failure causes collapse into
    /// this one message; no classification happens downstream.
    Failed { generation: u64 },
    /// User-initiated retry from the error state.
    Retry,
}
