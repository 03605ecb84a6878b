use crate::infrastructure::config::Config;

pub mod dashboard;
pub mod session;
pub mod system;
pub mod ui;

pub use dashboard::{DashboardState, LoadPhase};
pub use session::Session;
pub use system::SystemState;
pub use ui::UiState;

/// Unified application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub ui: UiState,
    pub dashboard: DashboardState,
    pub session: Session,
    pub system: SystemState,
    pub config: ConfigState,
}

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration loaded from file
    pub config: Config,
}

impl AppState {
    /// Initialize AppState with the given session and config.
    pub fn new(session: Session, config: Config) -> Self {
        Self {
            session,
            config: ConfigState { config },
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::domain::route::Route;

    #[test]
    fn test_app_state_default() {
        let state = AppState::default();

        assert_eq!(state.ui.route, Route::Landing);
        assert!(!state.ui.is_uploading);
        assert!(!state.system.should_quit);
        assert!(!state.session.is_authenticated());
    }

    #[test]
    fn test_app_state_new_keeps_session() {
        let session = Session::with_token("tok-123", Some("amira@example.com".to_string()));
        let state = AppState::new(session, Config::default());

        assert!(state.session.is_authenticated());
        assert_eq!(
            state.session.account_email(),
            Some("amira@example.com")
        );
    }
}
