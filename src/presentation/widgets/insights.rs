use ratatui::{prelude::*, widgets::*};

use crate::domain::{overview::AiInsights, text::wrap_text};

/// AI-generated pipeline commentary. The summary is always shown; the
/// recommendations block only appears when there are recommendations.
pub struct InsightsPanel<'a> {
    insights: &'a AiInsights,
}

impl<'a> InsightsPanel<'a> {
    pub fn new(insights: &'a AiInsights) -> Self {
        Self { insights }
    }

    /// Lines needed to render within the given width (borders excluded).
    pub fn height(&self, width: u16) -> u16 {
        let summary_lines = wrap_text(&self.insights.summary, width.max(1) as usize)
            .lines()
            .count();
        let recommendation_lines = if self.insights.recommendations.is_empty() {
            0
        } else {
            self.insights.recommendations.len() + 1
        };
        (summary_lines + recommendation_lines) as u16 + 2
    }
}

impl<'a> Widget for InsightsPanel<'a> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let block = Block::default().borders(Borders::ALL).title("AI Insights");
        let inner_width = block.inner(area).width.max(1) as usize;

        let mut lines: Vec<Line<'_>> = wrap_text(&self.insights.summary, inner_width)
            .lines()
            .map(|line| Line::from(line.to_string()))
            .collect();

        if !self.insights.recommendations.is_empty() {
            lines.push(Line::from(Span::styled(
                "Recommendations",
                Style::default().bold(),
            )));
            for recommendation in &self.insights.recommendations {
                lines.push(Line::from(format!("- {recommendation}")));
            }
        }

        Paragraph::new(lines).block(block).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_to_string(insights: &AiInsights) -> String {
        let area = Rect::new(0, 0, 60, 12);
        let mut buffer = Buffer::empty(area);
        InsightsPanel::new(insights).render(area, &mut buffer);
        (0..12)
            .map(|row| {
                buffer.content()[row * 60..(row + 1) * 60]
                    .iter()
                    .map(|c| c.symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_summary_without_recommendations() {
        let insights = AiInsights {
            summary: "Pipeline is healthy".to_string(),
            recommendations: vec![],
        };
        let rendered = render_to_string(&insights);

        assert!(rendered.contains("Pipeline is healthy"));
        assert!(!rendered.contains("Recommendations"));
    }

    #[test]
    fn test_summary_with_recommendations() {
        let insights = AiInsights {
            summary: "Slow interview stage".to_string(),
            recommendations: vec![
                "Add a second interviewer".to_string(),
                "Shorten the take-home".to_string(),
            ],
        };
        let rendered = render_to_string(&insights);

        assert!(rendered.contains("Recommendations"));
        assert!(rendered.contains("- Add a second interviewer"));
        assert!(rendered.contains("- Shorten the take-home"));
    }

    #[test]
    fn test_height_accounts_for_recommendations() {
        let bare = AiInsights {
            summary: "Short".to_string(),
            recommendations: vec![],
        };
        let with_recs = AiInsights {
            summary: "Short".to_string(),
            recommendations: vec!["One".to_string()],
        };

        let bare_height = InsightsPanel::new(&bare).height(40);
        let recs_height = InsightsPanel::new(&with_recs).height(40);
        assert!(recs_height > bare_height);
    }
}
