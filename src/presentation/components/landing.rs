use ratatui::{prelude::*, widgets::*};

use crate::{core::state::AppState, domain::text::wrap_text};

const TAGLINE: &str = "Hiring, organized.";

const MARKETING: &[&str] = &[
    "HireTrack keeps every resume, job and hiring process in one place, so \
     your team always knows what happens next.",
    "Track applications from first contact to offer, schedule meetings \
     without the back-and-forth, and let the pipeline insights point out \
     what needs attention.",
];

/// The signed-out landing view: marketing copy, auth hints and the
/// resume-upload affordance. A signed-in session never sees this view.
pub struct LandingView;

impl LandingView {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame<'_>, area: Rect) {
        let layout = Layout::new(
            Direction::Vertical,
            [
                Constraint::Length(2),
                Constraint::Min(0),
                Constraint::Length(5),
            ],
        )
        .split(area);

        let title = vec![
            Line::from(Span::styled("HireTrack", Style::default().bold())),
            Line::from(Span::styled(TAGLINE, Style::default().fg(Color::Gray))),
        ];
        frame.render_widget(Paragraph::new(title), layout[0]);

        let width = layout[1].width.max(1) as usize;
        let mut body_lines: Vec<Line<'_>> = Vec::new();
        for paragraph in MARKETING {
            body_lines.push(Line::from(""));
            for line in wrap_text(paragraph, width).lines() {
                body_lines.push(Line::from(line.to_string()));
            }
        }
        frame.render_widget(Paragraph::new(body_lines), layout[1]);

        let upload_hint = if state.ui.is_uploading {
            Line::from(Span::styled(
                "Opening the resume bank…",
                Style::default().fg(Color::Gray).italic(),
            ))
        } else {
            Line::from("[u] upload a resume (opens the resume bank)")
        };
        let hints = vec![
            Line::from("[l] sign in    [g] create account"),
            Line::from("[d] open dashboard"),
            upload_hint,
            Line::from(Span::styled(
                "[q] quit",
                Style::default().fg(Color::Gray),
            )),
        ];
        frame.render_widget(Paragraph::new(hints), layout[2]);
    }
}

impl Default for LandingView {
    fn default() -> Self {
        Self::new()
    }
}
