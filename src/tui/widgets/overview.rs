//! Overview tab - KPI stat cards with trend indicators

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::tabs::{Tab, TabBar};
use crate::services::PeriodView;
use crate::tui::theme::Theme;
use crate::types::Metric;

/// Format a number with thousand separators (e.g., 1234567 -> "1,234,567")
/// Optimized: no Vec<char> allocation since digits are ASCII
pub fn format_number(n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }

    let s = n.to_string();
    let len = s.len();
    let mut result = String::with_capacity(len + len / 3);

    // Digits are ASCII, so byte indexing is safe
    for (i, ch) in s.bytes().enumerate() {
        if i > 0 && (len - i).is_multiple_of(3) {
            result.push(',');
        }
        result.push(ch as char);
    }

    result
}

/// Maximum content width (keeps layout clean on wide terminals)
const MAX_CONTENT_WIDTH: u16 = 170;

/// Card dimensions
const CARD_WIDTH: u16 = 28;
const CARD_HEIGHT: u16 = 6;

/// Maximum columns for a balanced grid
const FIXED_COLS: usize = 3;

/// Calculate number of cards per row based on available width
fn cards_per_row(width: u16) -> usize {
    let usable_width = width.saturating_sub(4); // padding
    let cards = (usable_width / (CARD_WIDTH + 2)) as usize; // +2 for spacing
    cards.clamp(1, FIXED_COLS)
}

/// Overview widget showing the selected period's KPI cards
pub struct OverviewView<'a> {
    view: &'a PeriodView,
    selected_tab: Tab,
    theme: Theme,
}

impl<'a> OverviewView<'a> {
    pub fn new(view: &'a PeriodView, theme: Theme) -> Self {
        Self {
            view,
            selected_tab: Tab::Overview,
            theme,
        }
    }

    pub fn with_tab(mut self, tab: Tab) -> Self {
        self.selected_tab = tab;
        self
    }
}

impl Widget for OverviewView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let content_width = area.width.min(MAX_CONTENT_WIDTH);
        let x_offset = (area.width.saturating_sub(content_width)) / 2;
        let centered_area = Rect {
            x: area.x + x_offset,
            y: area.y,
            width: content_width,
            height: area.height,
        };

        let cols = cards_per_row(centered_area.width);
        let rows = Metric::all().len().div_ceil(cols);
        let grid_height = (rows as u16) * (CARD_HEIGHT + 1); // +1 for spacing

        let chunks = Layout::vertical([
            Constraint::Length(1),           // Top padding
            Constraint::Length(1),           // Tabs
            Constraint::Length(1),           // Separator
            Constraint::Length(1),           // Period header
            Constraint::Length(1),           // Blank
            Constraint::Length(grid_height), // Card grid
            Constraint::Length(1),           // Separator
            Constraint::Length(1),           // Keybindings
            Constraint::Min(0),              // Remaining space
        ])
        .split(centered_area);

        TabBar::new(self.selected_tab, self.theme).render(chunks[1], buf);
        self.render_separator(chunks[2], buf);
        self.render_header(chunks[3], buf);
        self.render_card_grid(chunks[5], buf, cols);
        self.render_separator(chunks[6], buf);
        self.render_keybindings(chunks[7], buf);
    }
}

impl OverviewView<'_> {
    fn render_separator(&self, area: Rect, buf: &mut Buffer) {
        let line = "─".repeat(area.width as usize);
        buf.set_string(
            area.x,
            area.y,
            &line,
            Style::default().fg(self.theme.muted()),
        );
    }

    fn render_header(&self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![
            Span::styled("Period: ", Style::default().fg(self.theme.muted())),
            Span::styled(
                &self.view.label,
                Style::default()
                    .fg(self.theme.period())
                    .add_modifier(Modifier::BOLD),
            ),
        ];
        match &self.view.previous_label {
            Some(prev) => {
                spans.push(Span::styled(
                    "  vs  ",
                    Style::default().fg(self.theme.muted()),
                ));
                spans.push(Span::styled(
                    prev.as_str(),
                    Style::default().fg(self.theme.text()),
                ));
            }
            None => {
                spans.push(Span::styled(
                    "  (no comparison available)",
                    Style::default().fg(self.theme.muted()),
                ));
            }
        }

        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .render(area, buf);
    }

    fn render_card_grid(&self, area: Rect, buf: &mut Buffer, cols: usize) {
        let cards = self.build_cards();

        let total_cards_width = (cols as u16) * CARD_WIDTH + ((cols - 1) as u16) * 2; // 2 = spacing
        let start_x = area.x + (area.width.saturating_sub(total_cards_width)) / 2;

        for (i, card) in cards.iter().enumerate() {
            let row = i / cols;
            let col = i % cols;

            let card_x = start_x + (col as u16) * (CARD_WIDTH + 2);
            let card_y = area.y + (row as u16) * (CARD_HEIGHT + 1);

            // Skip if card is outside area
            if card_y + CARD_HEIGHT > area.y + area.height {
                continue;
            }

            let card_area = Rect {
                x: card_x,
                y: card_y,
                width: CARD_WIDTH,
                height: CARD_HEIGHT,
            };

            self.render_card(card_area, buf, card);
        }
    }

    fn build_cards(&self) -> Vec<KpiCard> {
        Metric::all()
            .iter()
            .map(|metric| {
                let trend = self.view.trend(*metric);
                let sub = match *metric {
                    // The videos card shows the secondary counter when recorded
                    Metric::Videos => match self.view.videos_secondary() {
                        Some(views) => format!("({} views)", format_number(views)),
                        None => self.prev_line(*metric),
                    },
                    _ => self.prev_line(*metric),
                };

                KpiCard {
                    title: format!("{} ({})", metric.label(), self.view.label),
                    value: format_number(metric.of_aggregate(&self.view.current)),
                    sub,
                    trend_text: format!("{} {}", trend.direction.arrow(), trend.display),
                    trend_color: self.theme.trend_color(trend.direction),
                    color: self.theme.metric_color(*metric),
                }
            })
            .collect()
    }

    fn prev_line(&self, metric: Metric) -> String {
        match self.view.previous_value(metric) {
            Some(prev) => format!("vs {} prev.", format_number(prev)),
            None => String::new(),
        }
    }

    fn render_card(&self, area: Rect, buf: &mut Buffer, card: &KpiCard) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(card.color));
        block.render(area, buf);

        let center = |text: &str| area.x + (area.width.saturating_sub(text.len() as u16)) / 2;

        // Title (line 1 inside border)
        if area.height > 2 {
            buf.set_string(
                center(&card.title),
                area.y + 1,
                &card.title,
                Style::default().fg(card.color),
            );
        }

        // Value (line 2, bold)
        if area.height > 3 {
            buf.set_string(
                center(&card.value),
                area.y + 2,
                &card.value,
                Style::default()
                    .fg(self.theme.text())
                    .add_modifier(Modifier::BOLD),
            );
        }

        // Trend arrow + percent (line 3)
        if area.height > 4 {
            // Arrow glyphs are multi-byte; center on char count
            let x = area.x
                + (area
                    .width
                    .saturating_sub(card.trend_text.chars().count() as u16))
                    / 2;
            buf.set_string(
                x,
                area.y + 3,
                &card.trend_text,
                Style::default().fg(card.trend_color),
            );
        }

        // Comparison sub-line (line 4, muted)
        if area.height > 5 && !card.sub.is_empty() {
            buf.set_string(
                center(&card.sub),
                area.y + 4,
                &card.sub,
                Style::default().fg(self.theme.muted()),
            );
        }
    }

    fn render_keybindings(&self, area: Rect, buf: &mut Buffer) {
        let bindings = Paragraph::new(Line::from(vec![
            Span::styled("←→", Style::default().fg(self.theme.accent())),
            Span::styled(": Period", Style::default().fg(self.theme.muted())),
            Span::raw("  "),
            Span::styled("v", Style::default().fg(self.theme.accent())),
            Span::styled(": Month/Quarter", Style::default().fg(self.theme.muted())),
            Span::raw("  "),
            Span::styled("Tab", Style::default().fg(self.theme.accent())),
            Span::styled(": Switch view", Style::default().fg(self.theme.muted())),
            Span::raw("  "),
            Span::styled("?", Style::default().fg(self.theme.accent())),
            Span::styled(": Help", Style::default().fg(self.theme.muted())),
            Span::raw("  "),
            Span::styled("q", Style::default().fg(self.theme.accent())),
            Span::styled(": Quit", Style::default().fg(self.theme.muted())),
        ]))
        .alignment(Alignment::Center);

        bindings.render(area, buf);
    }
}

/// Internal card representation
struct KpiCard {
    title: String,
    value: String,
    sub: String,
    trend_text: String,
    trend_color: Color,
    color: Color,
}
