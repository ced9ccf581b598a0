//! Insights tab - AI executive summary panel

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::tabs::{Tab, TabBar};
use crate::tui::theme::Theme;

/// Spinner animation frames
const SPINNER_FRAMES: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Advance to the next spinner frame, wrapping
pub fn next_frame(frame: usize) -> usize {
    (frame + 1) % SPINNER_FRAMES.len()
}

fn frame_char(frame: usize) -> char {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}

/// Lifecycle of the summary request: not generated, in flight, settled.
/// Failures settle as displayable text, so there is no error variant.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InsightsState {
    #[default]
    Idle,
    Generating {
        spinner_frame: usize,
    },
    Done {
        text: String,
    },
}

impl InsightsState {
    pub fn is_generating(&self) -> bool {
        matches!(self, Self::Generating { .. })
    }
}

/// Maximum content width (keeps summaries readable on wide terminals)
const MAX_CONTENT_WIDTH: u16 = 100;

/// Insights panel widget
pub struct InsightsPanel<'a> {
    state: &'a InsightsState,
    period_label: &'a str,
    selected_tab: Tab,
    theme: Theme,
}

impl<'a> InsightsPanel<'a> {
    pub fn new(state: &'a InsightsState, period_label: &'a str, theme: Theme) -> Self {
        Self {
            state,
            period_label,
            selected_tab: Tab::Insights,
            theme,
        }
    }

    pub fn with_tab(mut self, tab: Tab) -> Self {
        self.selected_tab = tab;
        self
    }
}

impl Widget for InsightsPanel<'_> {
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
            Constraint::Fill(1),   // Body
            Constraint::Length(1), // Separator
            Constraint::Length(1), // Keybindings
        ])
        .split(centered_area);

        TabBar::new(self.selected_tab, self.theme).render(chunks[1], buf);
        self.render_separator(chunks[2], buf);

        Paragraph::new(Line::from(Span::styled(
            format!("AI Executive Summary ({})", self.period_label),
            Style::default()
                .fg(self.theme.text())
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .render(chunks[3], buf);

        self.render_body(chunks[5], buf);
        self.render_separator(chunks[6], buf);
        self.render_keybindings(chunks[7], buf);
    }
}

impl InsightsPanel<'_> {
    fn render_separator(&self, area: Rect, buf: &mut Buffer) {
        let line = "─".repeat(area.width as usize);
        buf.set_string(
            area.x,
            area.y,
            &line,
            Style::default().fg(self.theme.muted()),
        );
    }

    fn render_body(&self, area: Rect, buf: &mut Buffer) {
        match self.state {
            InsightsState::Idle => {
                let hint = format!(
                    "Press g to analyze marketing performance for {} with Gemini.",
                    self.period_label
                );
                Paragraph::new(Line::from(Span::styled(
                    hint,
                    Style::default().fg(self.theme.muted()),
                )))
                .alignment(Alignment::Center)
                .render(area, buf);
            }
            InsightsState::Generating { spinner_frame } => {
                let text = format!("{} Generating insights...", frame_char(*spinner_frame));
                Paragraph::new(Line::from(Span::styled(
                    text,
                    Style::default().fg(self.theme.accent()),
                )))
                .alignment(Alignment::Center)
                .render(area, buf);
            }
            InsightsState::Done { text } => {
                let lines: Vec<Line> = text
                    .lines()
                    .map(|l| Line::from(Span::styled(l, Style::default().fg(self.theme.text()))))
                    .collect();
                Paragraph::new(lines)
                    .wrap(Wrap { trim: false })
                    .render(area, buf);
            }
        }
    }

    fn render_keybindings(&self, area: Rect, buf: &mut Buffer) {
        let generate_label = match self.state {
            InsightsState::Done { .. } => ": Regenerate",
            _ => ": Generate",
        };
        let bindings = Paragraph::new(Line::from(vec![
            Span::styled("g", Style::default().fg(self.theme.accent())),
            Span::styled(generate_label, Style::default().fg(self.theme.muted())),
            Span::raw("  "),
            Span::styled("Tab", Style::default().fg(self.theme.accent())),
            Span::styled(": Switch view", Style::default().fg(self.theme.muted())),
            Span::raw("  "),
            Span::styled("q", Style::default().fg(self.theme.accent())),
            Span::styled(": Quit", Style::default().fg(self.theme.muted())),
        ]))
        .alignment(Alignment::Center);

        bindings.render(area, buf);
    }
}
