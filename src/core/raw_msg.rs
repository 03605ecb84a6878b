use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};

use crate::domain::overview::DashboardOverview;

/// Raw messages from external sources (input, network, system)
/// These represent unprocessed external events that need to be translated to domain events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RawMsg {
    // System events
    Tick,
    Render,
    Resize(u16, u16),
    Quit,
    Suspend,
    Resume,

    // User input (raw keyboard events)
    Key(KeyEvent),

    // Network events (overview fetch completion, tagged with its generation)
    OverviewLoaded {
        generation: u64,
        overview: Box<DashboardOverview>,
    },
    OverviewFailed {
        generation: u64,
    },

    // System status
    SystemMessage(String),
    Error(String),
}

impl RawMsg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        matches!(self, RawMsg::Tick | RawMsg::Render)
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyModifiers};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_raw_msg_frequent_detection() {
        assert!(RawMsg::Tick.is_frequent());
        assert!(RawMsg::Render.is_frequent());
        assert!(!RawMsg::Quit.is_frequent());
        assert!(!RawMsg::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)).is_frequent());
        assert!(!RawMsg::OverviewFailed { generation: 1 }.is_frequent());
    }

    #[test]
    fn test_raw_msg_equality() {
        assert_eq!(RawMsg::Quit, RawMsg::Quit);
        assert_eq!(RawMsg::Tick, RawMsg::Tick);
        assert_ne!(RawMsg::Tick, RawMsg::Render);
    }

    #[test]
    fn test_raw_msg_serialization() {
        let msg = RawMsg::OverviewLoaded {
            generation: 2,
            overview: Box::default(),
        };
        let serialized = serde_json::to_string(&msg).expect("serialize");
        let deserialized: RawMsg = serde_json::from_str(&serialized).expect("deserialize");
        assert_eq!(msg, deserialized);
    }
}
