use serde::{Deserialize, Serialize};
use strum::Display;

/// Navigation targets of the client.
///
/// `Landing` and `Dashboard` are full views. The remaining routes render
/// informational panes pointing at the platform web app, which owns those
/// flows; they exist so every navigation target is reachable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum Route {
    #[default]
    Landing,
    Login,
    Register,
    Dashboard,
    ResumeBank,
}

impl Route {
    /// Human-readable pane title.
    pub fn title(self) -> &'static str {
        match self {
            Route::Landing => "Welcome",
            Route::Login => "Sign in",
            Route::Register => "Create account",
            Route::Dashboard => "Dashboard",
            Route::ResumeBank => "Resume bank",
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_route_is_landing() {
        assert_eq!(Route::default(), Route::Landing);
    }

    #[test]
    fn test_route_serialization() {
        let route = Route::ResumeBank;
        let serialized = serde_json::to_string(&route).expect("serialize");
        let deserialized: Route = serde_json::from_str(&serialized).expect("deserialize");
        assert_eq!(route, deserialized);
    }

    #[test]
    fn test_route_titles_are_distinct() {
        let titles = [
            Route::Landing.title(),
            Route::Login.title(),
            Route::Register.title(),
            Route::Dashboard.title(),
            Route::ResumeBank.title(),
        ];
        for (i, a) in titles.iter().enumerate() {
            for b in titles.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
