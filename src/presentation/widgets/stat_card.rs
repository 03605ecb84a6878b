use ratatui::{prelude::*, widgets::*};
use thousands::Separable;

/// A single labeled counter tile in the dashboard grid.
pub struct StatCard {
    label: &'static str,
    value: u64,
}

impl StatCard {
    pub fn new(label: &'static str, value: u64) -> Self {
        Self { label, value }
    }
}

impl Widget for StatCard {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let layout = Layout::new(
            Direction::Vertical,
            [Constraint::Length(1), Constraint::Length(1)],
        )
        .split(inner);

        let value = Span::styled(
            self.value.separate_with_commas(),
            Style::default().bold(),
        );
        Paragraph::new(value).render(layout[0], buf);

        let label = Span::styled(self.label, Style::default().fg(Color::Gray));
        Paragraph::new(label).render(layout[1], buf);
    }
}
