use ratatui::{prelude::*, widgets::*};

use crate::domain::{
    overview::ActivityEntry,
    status::{status_icon, Badge},
    time::format_timestamp,
};

/// The capped recent-activity feed. Entries render in received order.
pub struct ActivityList<'a> {
    entries: &'a [ActivityEntry],
}

impl<'a> ActivityList<'a> {
    pub fn new(entries: &'a [ActivityEntry]) -> Self {
        Self { entries }
    }

    fn entry_line(entry: &ActivityEntry) -> Line<'_> {
        let status = entry.status.as_deref();
        let badge_style = status
            .map(|s| Badge::from_status(s).style())
            .unwrap_or_default();

        let mut spans = vec![
            Span::styled(status_icon(status), badge_style),
            Span::raw(" "),
            Span::raw(entry.title.as_str()),
        ];

        if !entry.kind.is_empty() {
            spans.push(Span::styled(
                format!("  {}", entry.kind),
                Style::default().fg(Color::DarkGray),
            ));
        }

        if let Some(status) = status {
            spans.push(Span::styled(
                format!("  [{status}]"),
                badge_style,
            ));
        }

        if let Some(timestamp) = &entry.timestamp {
            spans.push(Span::styled(
                format!("  {}", format_timestamp(timestamp)),
                Style::default().fg(Color::Gray),
            ));
        }

        Line::from(spans)
    }
}

impl<'a> Widget for ActivityList<'a> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let block = Block::default()
            .borders(Borders::ALL)
            .title("Recent Activity");
        let lines: Vec<Line<'_>> = self.entries.iter().map(Self::entry_line).collect();
        Paragraph::new(lines).block(block).render(area, buf);
    }
}
