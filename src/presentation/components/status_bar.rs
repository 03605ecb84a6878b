use ratatui::{prelude::*, widgets::*};

use crate::{core::state::AppState, domain::route::Route};

/// Two-line status overlay at the bottom of the screen: session identity,
/// then a transient status/loading message.
pub struct StatusBar;

impl StatusBar {
    pub fn new() -> Self {
        Self
    }

    fn identity(state: &AppState) -> String {
        state
            .session
            .account_email()
            .map(str::to_string)
            .unwrap_or_else(|| "not signed in".to_string())
    }

    fn message(state: &AppState) -> String {
        if state.ui.route == Route::Dashboard && state.dashboard.is_loading() {
            return "Loading…".to_string();
        }
        state.system.status_message.clone().unwrap_or_default()
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame<'_>, area: Rect) {
        let layout = Layout::new(
            Direction::Vertical,
            [
                Constraint::Min(0),
                Constraint::Length(1),
                Constraint::Length(1),
            ],
        )
        .split(area);
        frame.render_widget(Clear, layout[1]);
        frame.render_widget(Clear, layout[2]);

        let identity = Span::styled(
            Self::identity(state),
            Style::default().fg(Color::Gray).italic(),
        );
        let identity_line = Paragraph::new(identity).style(Style::default().bg(Color::Black));
        frame.render_widget(identity_line, layout[1]);

        let message_line = Paragraph::new(Self::message(state));
        frame.render_widget(message_line, layout[2]);
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}
