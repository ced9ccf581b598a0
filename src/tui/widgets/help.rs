//! Help popup widget - displays keyboard shortcuts

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::tui::theme::Theme;

/// Version from Cargo.toml
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Width and height of the help popup
const POPUP_WIDTH: u16 = 46;
const POPUP_HEIGHT: u16 = 16;

/// Help popup widget showing keyboard shortcuts
pub struct HelpPopup {
    theme: Theme,
}

impl HelpPopup {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// Calculate centered popup area
    pub fn centered_area(area: Rect) -> Rect {
        let x = area.x + (area.width.saturating_sub(POPUP_WIDTH)) / 2;
        let y = area.y + (area.height.saturating_sub(POPUP_HEIGHT)) / 2;
        Rect {
            x,
            y,
            width: POPUP_WIDTH.min(area.width),
            height: POPUP_HEIGHT.min(area.height),
        }
    }

    fn key_line(&self, key: &'static str, desc: &'static str) -> Line<'static> {
        Line::from(vec![
            Span::raw("  "),
            Span::styled(
                format!("{:<12}", key),
                Style::default().fg(self.theme.accent()),
            ),
            Span::styled(desc, Style::default().fg(self.theme.text())),
        ])
    }

    fn section_line(&self, title: &'static str) -> Line<'static> {
        Line::from(Span::styled(
            format!("  {}", title),
            Style::default()
                .fg(self.theme.muted())
                .add_modifier(Modifier::BOLD),
        ))
    }
}

impl Default for HelpPopup {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

impl Widget for HelpPopup {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Clear the area first (for overlay effect)
        Clear.render(area, buf);

        let title = format!(" mktdash v{} ", VERSION);
        let block = Block::default()
            .title(title)
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.accent()));

        let inner = block.inner(area);
        block.render(area, buf);

        let lines = vec![
            Line::from(""),
            self.section_line("Navigation"),
            self.key_line("Tab / S-Tab", "Switch view"),
            self.key_line("1-4", "Jump to view"),
            self.key_line("← / →", "Previous / next period"),
            self.key_line("v", "Toggle month / quarter mode"),
            self.key_line("↑ / ↓", "Cycle chart metric"),
            Line::from(""),
            self.section_line("Actions"),
            self.key_line("g", "Generate AI summary"),
            self.key_line("?", "Toggle this help"),
            self.key_line("q / Esc", "Quit"),
            Line::from(""),
            Line::from(Span::styled(
                "  Press any key to close",
                Style::default().fg(self.theme.muted()),
            )),
        ];

        Paragraph::new(lines).render(inner, buf);
    }
}
