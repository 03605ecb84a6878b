//! Component collection and management
//!
//! Components are stateless renderers that receive state as parameters.

use ratatui::prelude::*;

use crate::{core::state::AppState, domain::route::Route};

pub mod dashboard;
pub mod info_pane;
pub mod landing;
pub mod status_bar;

pub use dashboard::DashboardView;
pub use info_pane::InfoPane;
pub use landing::LandingView;
pub use status_bar::StatusBar;

/// Collection of all components
pub struct Components {
    pub landing: LandingView,
    pub dashboard: DashboardView,
    pub status_bar: StatusBar,
}

impl Components {
    /// Create a new component collection
    pub fn new() -> Self {
        Self {
            landing: LandingView::new(),
            dashboard: DashboardView::new(),
            status_bar: StatusBar::new(),
        }
    }

    /// Render all components
    ///
    /// This is the main rendering entry point that delegates to the view
    /// selected by the current route, plus the status bar overlay.
    pub fn render(&mut self, frame: &mut Frame<'_>, state: &AppState) {
        let area = frame.area();

        // Create layout: [main area, status bar (2 rows)]
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Min(0), Constraint::Length(2)])
            .split(area);

        match state.ui.route {
            Route::Landing => self.landing.view(state, frame, layout[0]),
            Route::Dashboard => self.dashboard.view(state, frame, layout[0]),
            route => InfoPane::new(route).view(state, frame, layout[0]),
        }

        self.status_bar.view(state, frame, area);
    }
}

impl Default for Components {
    fn default() -> Self {
        Self::new()
    }
}
