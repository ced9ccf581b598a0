//! Charts tab - metric bars over the chart window

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::overview::format_number;
use super::tabs::{Tab, TabBar};
use crate::services::PeriodView;
use crate::tui::theme::Theme;
use crate::types::Metric;

/// Maximum content width (consistent with other views)
const MAX_CONTENT_WIDTH: u16 = 170;

/// Bar rendering config
const MONTH_NAME_WIDTH: usize = 10;
const BAR_WIDTH: usize = 30;

/// Charts widget plotting one metric across the chart window
pub struct ChartsView<'a> {
    view: &'a PeriodView,
    metric: Metric,
    selected_tab: Tab,
    theme: Theme,
}

impl<'a> ChartsView<'a> {
    pub fn new(view: &'a PeriodView, metric: Metric, theme: Theme) -> Self {
        Self {
            view,
            metric,
            selected_tab: Tab::Charts,
            theme,
        }
    }

    pub fn with_tab(mut self, tab: Tab) -> Self {
        self.selected_tab = tab;
        self
    }
}

impl Widget for ChartsView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let content_width = area.width.min(MAX_CONTENT_WIDTH);
        let x_offset = (area.width.saturating_sub(content_width)) / 2;
        let centered_area = Rect {
            x: area.x + x_offset,
            y: area.y,
            width: content_width,
            height: area.height,
        };

        let bar_rows = self.view.chart_window.len() as u16;

        let chunks = Layout::vertical([
            Constraint::Length(1),        // Top padding
            Constraint::Length(1),        // Tabs
            Constraint::Length(1),        // Separator
            Constraint::Length(1),        // Metric selector
            Constraint::Length(1),        // Blank
            Constraint::Length(bar_rows), // Bars
            Constraint::Length(1),        // Blank
            Constraint::Length(1),        // Separator
            Constraint::Length(1),        // Keybindings
            Constraint::Min(0),           // Remaining space
        ])
        .split(centered_area);

        TabBar::new(self.selected_tab, self.theme).render(chunks[1], buf);
        self.render_separator(chunks[2], buf);
        self.render_metric_selector(chunks[3], buf);
        self.render_bars(chunks[5], buf);
        self.render_separator(chunks[7], buf);
        self.render_keybindings(chunks[8], buf);
    }
}

impl ChartsView<'_> {
    fn render_separator(&self, area: Rect, buf: &mut Buffer) {
        let line = "─".repeat(area.width as usize);
        buf.set_string(
            area.x,
            area.y,
            &line,
            Style::default().fg(self.theme.muted()),
        );
    }

    fn render_metric_selector(&self, area: Rect, buf: &mut Buffer) {
        let mut spans: Vec<Span> = Vec::new();
        for (i, metric) in Metric::all().iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" · ", Style::default().fg(self.theme.muted())));
            }
            let style = if *metric == self.metric {
                Style::default()
                    .fg(self.theme.metric_color(*metric))
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(self.theme.muted())
            };
            spans.push(Span::styled(metric.label(), style));
        }

        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .render(area, buf);
    }

    fn render_bars(&self, area: Rect, buf: &mut Buffer) {
        let window = &self.view.chart_window;
        if window.is_empty() {
            return;
        }

        let max_value = window
            .iter()
            .map(|r| self.metric.of_record(r))
            .max()
            .unwrap_or(1)
            .max(1);

        let total_line_width = MONTH_NAME_WIDTH + 2 + BAR_WIDTH + 2 + 12; // name + gap + bar + gap + count
        let x_offset = area.width.saturating_sub(total_line_width as u16) / 2;

        for (i, record) in window.iter().enumerate() {
            let y = area.y + i as u16;
            if y >= area.y + area.height {
                break;
            }

            let value = self.metric.of_record(record);
            let ratio = value as f64 / max_value as f64;
            let filled = (ratio * BAR_WIDTH as f64).round() as usize;
            // A nonzero value always shows at least one cell
            let filled = if value > 0 { filled.max(1) } else { filled };
            let filled = filled.min(BAR_WIDTH);
            let bar = format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled));

            // Only a selected month gets a highlighted row; in quarter
            // mode every row belongs to the selection, so none stands out
            let is_selected_month = record.month == self.view.label;
            let name_style = if is_selected_month {
                Style::default()
                    .fg(self.theme.period())
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(self.theme.text())
            };

            let name_display = format!("{:>width$}", record.month, width = MONTH_NAME_WIDTH);
            let spans = vec![
                Span::styled(name_display, name_style),
                Span::raw("  "),
                Span::styled(bar, Style::default().fg(self.theme.metric_color(self.metric))),
                Span::raw("  "),
                Span::styled(format_number(value), Style::default().fg(self.theme.text())),
            ];

            let line = Line::from(spans);
            buf.set_line(area.x + x_offset, y, &line, area.width - x_offset);
        }
    }

    fn render_keybindings(&self, area: Rect, buf: &mut Buffer) {
        let bindings = Paragraph::new(Line::from(vec![
            Span::styled("↑↓", Style::default().fg(self.theme.accent())),
            Span::styled(": Metric", Style::default().fg(self.theme.muted())),
            Span::raw("  "),
            Span::styled("←→", Style::default().fg(self.theme.accent())),
            Span::styled(": Period", Style::default().fg(self.theme.muted())),
            Span::raw("  "),
            Span::styled("v", Style::default().fg(self.theme.accent())),
            Span::styled(": Month/Quarter", Style::default().fg(self.theme.muted())),
            Span::raw("  "),
            Span::styled("Tab", Style::default().fg(self.theme.accent())),
            Span::styled(": Switch view", Style::default().fg(self.theme.muted())),
        ]))
        .alignment(Alignment::Center);

        bindings.render(area, buf);
    }
}
