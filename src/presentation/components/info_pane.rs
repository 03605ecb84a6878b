use ratatui::{prelude::*, widgets::*};

use crate::{core::state::AppState, domain::route::Route};

/// Informational pane for routes whose flows live in the platform web app
/// (sign in, registration, resume bank). The pane names the web location
/// and offers the way back; nothing is performed here.
pub struct InfoPane {
    route: Route,
}

impl InfoPane {
    pub fn new(route: Route) -> Self {
        Self { route }
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame<'_>, area: Rect) {
        let base_url = &state.config.config.base_url;

        let mut lines = match self.route {
            Route::Login => vec![
                Line::from("Signing in happens in the web app:"),
                Line::from(Span::styled(
                    format!("{base_url}/login"),
                    Style::default().underlined(),
                )),
                Line::from(""),
                Line::from("Afterwards, add session_token to your config file"),
                Line::from("to open the dashboard here."),
            ],
            Route::Register => vec![
                Line::from("Create your account in the web app:"),
                Line::from(Span::styled(
                    format!("{base_url}/register"),
                    Style::default().underlined(),
                )),
            ],
            Route::ResumeBank => {
                let mut lines = vec![
                    Line::from("Uploads and resume management live in the web app:"),
                    Line::from(Span::styled(
                        format!("{base_url}/resumes"),
                        Style::default().underlined(),
                    )),
                ];
                if state.ui.is_uploading {
                    lines.push(Line::from(""));
                    lines.push(Line::from(Span::styled(
                        "Handing off your upload…",
                        Style::default().fg(Color::Gray).italic(),
                    )));
                }
                lines
            }
            // Landing and Dashboard have dedicated views.
            _ => vec![],
        };

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "[esc] back",
            Style::default().fg(Color::Gray),
        )));

        let block = Block::default()
            .borders(Borders::ALL)
            .title(self.route.title());
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}
