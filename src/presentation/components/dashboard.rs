use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::{AppState, LoadPhase},
    domain::overview::DashboardOverview,
    presentation::widgets::{ActivityList, InsightsPanel, StatCard},
};

/// The dashboard view: a pure mapping from the stored overview record (or
/// the loading/error phase) to a visual tree. Each section is gated
/// independently on the presence of its field(s) in the record.
pub struct DashboardView;

impl DashboardView {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame<'_>, area: Rect) {
        match &state.dashboard.phase {
            LoadPhase::Loading => self.view_loading(frame, area),
            LoadPhase::Error(message) => self.view_error(message, frame, area),
            LoadPhase::Ready(overview) => self.view_overview(overview, frame, area),
        }
    }

    fn view_loading(&self, frame: &mut Frame<'_>, area: Rect) {
        let loading = Paragraph::new("Loading dashboard…")
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center);
        frame.render_widget(loading, centered_line(area));
    }

    fn view_error(&self, message: &str, frame: &mut Frame<'_>, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(
                message.to_string(),
                Style::default().fg(Color::Red),
            )),
            Line::from(""),
            Line::from(Span::styled("[r] retry", Style::default().fg(Color::Gray))),
        ];
        let error = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(error, centered_line(area));
    }

    fn view_overview(&self, overview: &DashboardOverview, frame: &mut Frame<'_>, area: Rect) {
        let cards = overview.stat_cards();
        let activity = overview.recent_activity_capped();

        let mut constraints = vec![Constraint::Length(1)];
        if !cards.is_empty() {
            constraints.push(Constraint::Length(4));
        }
        if overview.statistics.is_some() {
            constraints.push(Constraint::Length(3));
        }
        if overview.has_recent_activity() {
            constraints.push(Constraint::Length(activity.len() as u16 + 2));
        }
        if let Some(insights) = &overview.ai_insights {
            let height = InsightsPanel::new(insights).height(area.width.saturating_sub(2));
            constraints.push(Constraint::Length(height));
        }
        constraints.push(Constraint::Min(0));

        let layout = Layout::new(Direction::Vertical, constraints).split(area);
        let mut slots = layout.iter().copied();
        let mut next_slot = move || slots.next().unwrap_or_default();

        let title = Paragraph::new(Span::styled("Dashboard", Style::default().bold()));
        frame.render_widget(title, next_slot());

        if !cards.is_empty() {
            let card_constraints: Vec<Constraint> = cards
                .iter()
                .map(|_| Constraint::Ratio(1, cards.len() as u32))
                .collect();
            let card_layout =
                Layout::new(Direction::Horizontal, card_constraints).split(next_slot());
            for (i, (label, value)) in cards.into_iter().enumerate() {
                frame.render_widget(StatCard::new(label, value), card_layout[i]);
            }
        }

        if let Some(statistics) = &overview.statistics {
            let line = Line::from(vec![
                Span::raw(format!("Active {}", statistics.active_applications)),
                Span::styled("  ·  ", Style::default().fg(Color::DarkGray)),
                Span::raw(format!("Interviews {}", statistics.interviews_scheduled)),
                Span::styled("  ·  ", Style::default().fg(Color::DarkGray)),
                Span::raw(format!("Offers {}", statistics.offers_extended)),
                Span::styled("  ·  ", Style::default().fg(Color::DarkGray)),
                Span::raw(format!("Hires this month {}", statistics.hires_this_month)),
            ]);
            let block = Block::default().borders(Borders::ALL).title("Applications");
            frame.render_widget(Paragraph::new(line).block(block), next_slot());
        }

        if overview.has_recent_activity() {
            frame.render_widget(ActivityList::new(activity), next_slot());
        }

        if let Some(insights) = &overview.ai_insights {
            frame.render_widget(InsightsPanel::new(insights), next_slot());
        }
    }
}

impl Default for DashboardView {
    fn default() -> Self {
        Self::new()
    }
}

/// A one-line area vertically centered within `area`, for short messages.
fn centered_line(area: Rect) -> Rect {
    let layout = Layout::new(
        Direction::Vertical,
        [
            Constraint::Fill(1),
            Constraint::Length(3),
            Constraint::Fill(1),
        ],
    )
    .split(area);
    layout[1]
}
