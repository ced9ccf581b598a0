//! Terminal theme detection and color definitions

use ratatui::style::Color;

use crate::services::TrendDirection;
use crate::types::Metric;

/// Terminal color scheme (dark or light background)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Auto-detect terminal theme from background luminance.
    /// Must be called **before** entering raw mode (ratatui::init).
    /// Falls back to Dark if detection fails.
    pub fn detect() -> Self {
        match terminal_light::luma() {
            Ok(luma) if luma > 0.6 => Self::Light,
            _ => Self::Dark,
        }
    }

    /// Primary text color (headers, body text)
    pub fn text(self) -> Color {
        match self {
            Self::Dark => Color::White,
            Self::Light => Color::Black,
        }
    }

    /// Active/accent color (selected tabs, keybinding keys, selected period)
    pub fn accent(self) -> Color {
        match self {
            Self::Dark => Color::Cyan,
            Self::Light => Color::Indexed(25), // dark blue (ANSI 256)
        }
    }

    /// Secondary/muted text (separators, inactive tabs, hints)
    pub fn muted(self) -> Color {
        match self {
            Self::Dark => Color::DarkGray,
            Self::Light => Color::Gray,
        }
    }

    /// Period label color (month and quarter names)
    pub fn period(self) -> Color {
        match self {
            Self::Dark => Color::Yellow,
            Self::Light => Color::Indexed(130), // dark orange/yellow (ANSI 256)
        }
    }

    /// Bar/positive indicator color
    pub fn bar(self) -> Color {
        match self {
            Self::Dark => Color::Green,
            Self::Light => Color::Indexed(22), // dark green (ANSI 256)
        }
    }

    /// Error/negative indicator color
    pub fn error(self) -> Color {
        match self {
            Self::Dark => Color::Red,
            Self::Light => Color::Indexed(124), // dark red (ANSI 256)
        }
    }

    /// Blue stat highlight (newsletters card)
    pub fn stat_blue(self) -> Color {
        match self {
            Self::Dark => Color::Blue,
            Self::Light => Color::Indexed(25), // dark blue (ANSI 256)
        }
    }

    /// Magenta stat highlight (campaigns card)
    pub fn stat_magenta(self) -> Color {
        match self {
            Self::Dark => Color::Magenta,
            Self::Light => Color::Indexed(90), // dark magenta (ANSI 256)
        }
    }

    /// Trend arrow/percent color
    pub fn trend_color(self, direction: TrendDirection) -> Color {
        match direction {
            TrendDirection::Up => self.bar(),
            TrendDirection::Down => self.error(),
            TrendDirection::Neutral => self.muted(),
        }
    }

    /// Card and bar color per KPI metric
    pub fn metric_color(self, metric: Metric) -> Color {
        match metric {
            Metric::Traffic => self.accent(),
            Metric::Videos => self.period(),
            Metric::Newsletters => self.stat_blue(),
            Metric::Blogs => self.bar(),
            Metric::Campaigns => self.stat_magenta(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_theme_colors() {
        let t = Theme::Dark;
        assert_eq!(t.text(), Color::White);
        assert_eq!(t.accent(), Color::Cyan);
        assert_eq!(t.muted(), Color::DarkGray);
        assert_eq!(t.period(), Color::Yellow);
        assert_eq!(t.bar(), Color::Green);
        assert_eq!(t.error(), Color::Red);
        assert_eq!(t.stat_blue(), Color::Blue);
        assert_eq!(t.stat_magenta(), Color::Magenta);
    }

    #[test]
    fn test_light_theme_colors() {
        let t = Theme::Light;
        assert_eq!(t.text(), Color::Black);
        assert_eq!(t.accent(), Color::Indexed(25));
        assert_eq!(t.muted(), Color::Gray);
        assert_eq!(t.period(), Color::Indexed(130));
        assert_eq!(t.bar(), Color::Indexed(22));
        assert_eq!(t.error(), Color::Indexed(124));
    }

    #[test]
    fn test_default_is_dark() {
        assert_eq!(Theme::default(), Theme::Dark);
    }

    #[test]
    fn test_trend_colors() {
        let t = Theme::Dark;
        assert_eq!(t.trend_color(TrendDirection::Up), t.bar());
        assert_eq!(t.trend_color(TrendDirection::Down), t.error());
        assert_eq!(t.trend_color(TrendDirection::Neutral), t.muted());
    }

    #[test]
    fn test_metric_colors_distinct_on_dark() {
        let t = Theme::Dark;
        let colors: Vec<Color> = Metric::all().iter().map(|m| t.metric_color(*m)).collect();
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
