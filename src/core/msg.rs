use serde::{Deserialize, Serialize};

pub mod dashboard;
pub mod system;
pub mod ui;

use dashboard::DashboardMsg;
use system::SystemMsg;
use ui::UiMsg;

/// Domain messages representing application intent and business logic
/// These are processed by the update function and represent pure domain events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Msg {
    // System operations (delegated to SystemState)
    System(SystemMsg),

    // Dashboard load lifecycle (delegated to DashboardState)
    Dashboard(DashboardMsg),

    // Navigation and landing-view operations (delegated to UiState)
    Ui(UiMsg),
}

impl Msg {
    /// Helper to exclude frequent messages during debugging
    /// Domain messages are generally not frequent (raw messages handle Tick/Render)
    pub fn is_frequent(&self) -> bool {
        false
    }
}
