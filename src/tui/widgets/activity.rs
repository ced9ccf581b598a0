//! Activity tab - full-history activity feed, latest month first

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::tabs::{Tab, TabBar};
use crate::tui::theme::Theme;
use crate::types::MonthlyRecord;

/// Maximum content width (consistent with other views)
const MAX_CONTENT_WIDTH: u16 = 100;

/// Activity feed widget.
///
/// Shows the whole dataset regardless of the period selection, the way
/// the activity log keeps full history next to the filtered KPI cards.
pub struct ActivityView<'a> {
    records: &'a [MonthlyRecord],
    selected_tab: Tab,
    theme: Theme,
}

impl<'a> ActivityView<'a> {
    pub fn new(records: &'a [MonthlyRecord], theme: Theme) -> Self {
        Self {
            records,
            selected_tab: Tab::Activity,
            theme,
        }
    }

    pub fn with_tab(mut self, tab: Tab) -> Self {
        self.selected_tab = tab;
        self
    }

    /// Feed lines, latest month first
    fn build_lines(&self) -> Vec<Line<'a>> {
        let mut lines = Vec::new();
        for record in self.records.iter().rev() {
            lines.push(Line::from(Span::styled(
                record.month.as_str(),
                Style::default()
                    .fg(self.theme.period())
                    .add_modifier(Modifier::BOLD),
            )));

            if record.has_activity() {
                for activity in &record.activities {
                    lines.push(Line::from(vec![
                        Span::styled("  ✓ ", Style::default().fg(self.theme.bar())),
                        Span::styled(activity.as_str(), Style::default().fg(self.theme.text())),
                    ]));
                }
            } else {
                lines.push(Line::from(Span::styled(
                    "  Nil",
                    Style::default().fg(self.theme.muted()),
                )));
            }
            lines.push(Line::from(""));
        }
        lines
    }
}

impl Widget for ActivityView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let content_width = area.width.min(MAX_CONTENT_WIDTH);
        let x_offset = (area.width.saturating_sub(content_width)) / 2;
        let centered_area = Rect {
            x: area.x + x_offset,
            y: area.y,
            width: content_width,
            height: area.height,
        };

        let chunks = Layout::vertical([
            Constraint::Length(1), // Top padding
            Constraint::Length(1), // Tabs
            Constraint::Length(1), // Separator
            Constraint::Length(1), // Title
            Constraint::Length(1), // Blank
            Constraint::Fill(1),   // Feed
        ])
        .split(centered_area);

        TabBar::new(self.selected_tab, self.theme).render(chunks[1], buf);

        let sep = "─".repeat(chunks[2].width as usize);
        buf.set_string(
            chunks[2].x,
            chunks[2].y,
            &sep,
            Style::default().fg(self.theme.muted()),
        );

        Paragraph::new(Line::from(Span::styled(
            "Additional Activities",
            Style::default()
                .fg(self.theme.text())
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .render(chunks[3], buf);

        Paragraph::new(self.build_lines()).render(chunks[5], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Dataset;

    #[test]
    fn test_feed_is_latest_first() {
        let dataset = Dataset::builtin();
        let widget = ActivityView::new(dataset.records(), Theme::Dark);
        let lines = widget.build_lines();

        let months: Vec<String> = lines
            .iter()
            .filter_map(|l| {
                let text: String = l.spans.iter().map(|s| s.content.as_ref()).collect();
                (!text.starts_with("  ") && !text.is_empty()).then_some(text)
            })
            .collect();

        assert_eq!(months, vec!["Nov", "Oct", "September", "August", "July"]);
    }

    #[test]
    fn test_feed_lists_activities() {
        let dataset = Dataset::builtin();
        let widget = ActivityView::new(dataset.records(), Theme::Dark);
        let lines = widget.build_lines();

        let all_text: String = lines
            .iter()
            .flat_map(|l| l.spans.iter().map(|s| s.content.as_ref()))
            .collect();

        assert!(all_text.contains("Benchmark Revamp"));
        assert!(all_text.contains("Hiring (3)"));
    }

    #[test]
    fn test_empty_activity_shows_nil() {
        let mut records = Dataset::builtin().records().to_vec();
        records[0].activities.clear();

        let widget = ActivityView::new(&records, Theme::Dark);
        let lines = widget.build_lines();

        let all_text: String = lines
            .iter()
            .flat_map(|l| l.spans.iter().map(|s| s.content.as_ref()))
            .collect();
        assert!(all_text.contains("Nil"));
    }
}
